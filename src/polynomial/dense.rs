use std::fmt;
use std::iter::{Product, Sum};
use std::ops::{Add, Mul};

use super::format::write_terms;
use super::sparse::SparsePoly;
use super::Polynomial;

/// Polynomial stored as one coefficient per power of x, lowest power first.
///
/// `[5.0, 0.0, 2.0, -3.0]` is `5 + 2x^2 - 3x^3`. The length is kept as given,
/// trailing zeros included, but two polynomials that differ only by trailing
/// zeros compare equal.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DensePoly {
    coefficient: Vec<f64>,
}

impl DensePoly {
    pub fn new(coefficient: Vec<f64>) -> Self {
        DensePoly { coefficient }
    }

    /// The empty polynomial, zero everywhere.
    pub fn zero() -> Self {
        DensePoly {
            coefficient: Vec::new(),
        }
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficient
    }

    pub fn into_coefficients(self) -> Vec<f64> {
        self.coefficient
    }

    /// Coefficients with the trailing zeros cut off.
    pub fn trimmed(&self) -> &[f64] {
        let end = self
            .coefficient
            .iter()
            .rposition(|coeff| *coeff != 0.0)
            .map_or(0, |last| last + 1);
        &self.coefficient[..end]
    }

    pub fn is_zero(&self) -> bool {
        self.trimmed().is_empty()
    }

    // Multiplies every coefficient with a scalar
    pub fn scalar_mul(&self, scalar: f64) -> Self {
        DensePoly {
            coefficient: self.coefficient.iter().map(|coeff| coeff * scalar).collect(),
        }
    }

    /// Differentiates this polynomial in place.
    ///
    /// Every coefficient is scaled by its power, then the whole list shifts
    /// down by one so the constant term falls off.
    /// [4, 2, -5, 13] -> [0, 2, -10, 39] -> [2, -10, 39]
    pub fn differentiate_in_place(&mut self) {
        for (power, coeff) in self.coefficient.iter_mut().enumerate() {
            *coeff *= power as f64;
        }
        if !self.coefficient.is_empty() {
            self.coefficient.remove(0);
        }
    }
}

impl Polynomial for DensePoly {
    fn evaluate(&self, x: f64) -> f64 {
        /*
            Horner's scheme, walking from the highest power down:
            5 + 0x + 2x^2 - 3x^3 = ((-3x + 2)x + 0)x + 5
            at x = 4: -3*4 + 2 = -10; -10*4 + 0 = -40; -40*4 + 5 = -155
        */
        self.coefficient
            .iter()
            .rev()
            .fold(0.0, |acc, coeff| acc * x + coeff)
    }

    fn degree(&self) -> Option<usize> {
        self.trimmed().len().checked_sub(1)
    }

    fn derivative(&self) -> Self {
        let mut dpdx = self.clone();
        dpdx.differentiate_in_place();
        dpdx
    }

    fn terms(&self) -> Vec<(usize, f64)> {
        self.coefficient
            .iter()
            .copied()
            .enumerate()
            .filter(|(_, coeff)| *coeff != 0.0)
            .collect()
    }
}

impl PartialEq for DensePoly {
    fn eq(&self, other: &Self) -> bool {
        self.trimmed() == other.trimmed()
    }
}

impl From<Vec<f64>> for DensePoly {
    fn from(coefficient: Vec<f64>) -> Self {
        DensePoly::new(coefficient)
    }
}

impl From<&SparsePoly> for DensePoly {
    fn from(sparse: &SparsePoly) -> Self {
        sparse.to_dense()
    }
}

impl fmt::Display for DensePoly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_terms(f, self.coefficient.iter().copied().enumerate())
    }
}

// The shorter list is added onto a prefix of the longer one, the rest of the longer one is kept as is
impl Add for &DensePoly {
    type Output = DensePoly;

    fn add(self, rhs: Self) -> Self::Output {
        let (mut bigger, smaller) = if self.coefficient.len() < rhs.coefficient.len() {
            (rhs.clone(), self)
        } else {
            (self.clone(), rhs)
        };

        bigger
            .coefficient
            .iter_mut()
            .zip(smaller.coefficient.iter())
            .for_each(|(b_coeff, s_coeff)| *b_coeff += s_coeff);

        bigger
    }
}

impl Add for DensePoly {
    type Output = DensePoly;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl Mul for &DensePoly {
    type Output = DensePoly;

    fn mul(self, rhs: Self) -> Self::Output {
        if self.coefficient.is_empty() || rhs.coefficient.is_empty() {
            return DensePoly::zero();
        }

        let mut result = vec![0.0; self.coefficient.len() + rhs.coefficient.len() - 1];
        for (i, lhs_coeff) in self.coefficient.iter().enumerate() {
            for (j, rhs_coeff) in rhs.coefficient.iter().enumerate() {
                result[i + j] += lhs_coeff * rhs_coeff;
            }
        }

        DensePoly::new(result)
    }
}

impl Mul for DensePoly {
    type Output = DensePoly;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl Sum for DensePoly {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(DensePoly::zero(), |acc, item| &acc + &item)
    }
}

impl Product for DensePoly {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(DensePoly::new(vec![1.0]), |acc, item| &acc * &item)
    }
}
