use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Add, Mul};

use super::dense::DensePoly;
use super::format::write_terms;
use super::Polynomial;

/// Polynomial stored as a map from power to coefficient.
///
/// A zero coefficient is never kept in the map. Every constructor and every
/// combining operation prunes them, so two equal polynomials always have
/// identical maps.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(from = "BTreeMap<usize, f64>", into = "BTreeMap<usize, f64>")
)]
pub struct SparsePoly {
    coefficient: BTreeMap<usize, f64>,
}

impl SparsePoly {
    /// Builds from a dense list, index `i` being the coefficient of x^i.
    pub fn from_coefficients(coefficients: &[f64]) -> Self {
        coefficients.iter().copied().enumerate().collect()
    }

    pub fn from_map(mut coefficient: BTreeMap<usize, f64>) -> Self {
        coefficient.retain(|_, coeff| *coeff != 0.0);
        SparsePoly { coefficient }
    }

    pub fn zero() -> Self {
        SparsePoly {
            coefficient: BTreeMap::new(),
        }
    }

    pub fn coefficients(&self) -> &BTreeMap<usize, f64> {
        &self.coefficient
    }

    /// Coefficient of x^power, zero when the power is not stored.
    pub fn coefficient(&self, power: usize) -> f64 {
        self.coefficient.get(&power).copied().unwrap_or(0.0)
    }

    pub fn is_zero(&self) -> bool {
        self.coefficient.is_empty()
    }

    /// Expands into a dense list that runs up to the highest stored power.
    pub fn to_dense(&self) -> DensePoly {
        let mut output = match self.degree() {
            Some(degree) => vec![0.0; degree + 1],
            None => Vec::new(),
        };
        for (&power, &coeff) in &self.coefficient {
            output[power] = coeff;
        }
        DensePoly::new(output)
    }
}

fn pow(x: f64, power: usize) -> f64 {
    match i32::try_from(power) {
        Ok(power) => x.powi(power),
        Err(_) => x.powf(power as f64),
    }
}

impl Polynomial for SparsePoly {
    fn evaluate(&self, x: f64) -> f64 {
        // absent powers contribute nothing
        self.coefficient
            .iter()
            .map(|(&power, coeff)| coeff * pow(x, power))
            .sum()
    }

    fn degree(&self) -> Option<usize> {
        self.coefficient.keys().next_back().copied()
    }

    fn derivative(&self) -> Self {
        self.coefficient
            .iter()
            .filter(|(power, _)| **power > 0)
            .map(|(&power, &coeff)| (power - 1, coeff * power as f64))
            .collect()
    }

    fn terms(&self) -> Vec<(usize, f64)> {
        self.coefficient
            .iter()
            .map(|(&power, &coeff)| (power, coeff))
            .collect()
    }
}

// Repeated powers are summed, zero sums dropped
impl FromIterator<(usize, f64)> for SparsePoly {
    fn from_iter<I: IntoIterator<Item = (usize, f64)>>(iter: I) -> Self {
        let mut coefficient = BTreeMap::new();
        for (power, coeff) in iter {
            *coefficient.entry(power).or_insert(0.0) += coeff;
        }
        SparsePoly::from_map(coefficient)
    }
}

impl From<BTreeMap<usize, f64>> for SparsePoly {
    fn from(coefficient: BTreeMap<usize, f64>) -> Self {
        SparsePoly::from_map(coefficient)
    }
}

impl From<SparsePoly> for BTreeMap<usize, f64> {
    fn from(poly: SparsePoly) -> Self {
        poly.coefficient
    }
}

impl From<&DensePoly> for SparsePoly {
    fn from(dense: &DensePoly) -> Self {
        SparsePoly::from_coefficients(dense.coefficients())
    }
}

impl fmt::Display for SparsePoly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_terms(f, self.terms())
    }
}

impl Add for &SparsePoly {
    type Output = SparsePoly;

    fn add(self, rhs: Self) -> Self::Output {
        let mut output = self.coefficient.clone();
        for (&power, &coeff) in &rhs.coefficient {
            *output.entry(power).or_insert(0.0) += coeff;
        }
        // x^2 + (-x^2) must not leave a 0*x^2 behind
        SparsePoly::from_map(output)
    }
}

impl Add for SparsePoly {
    type Output = SparsePoly;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl Mul for &SparsePoly {
    type Output = SparsePoly;

    fn mul(self, rhs: Self) -> Self::Output {
        self.coefficient
            .iter()
            .flat_map(|(&i, &lhs_coeff)| {
                rhs.coefficient
                    .iter()
                    .map(move |(&j, &rhs_coeff)| (i + j, lhs_coeff * rhs_coeff))
            })
            .collect()
    }
}

impl Mul for SparsePoly {
    type Output = SparsePoly;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}
