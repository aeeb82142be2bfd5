use std::ops::RangeInclusive;

use tracing::{debug, trace, warn};

use super::lagrange::{evaluate_unchecked, validate};
use super::nodes::linspace;
use crate::error::{InterpolationError, Result};
use crate::polynomial::{DensePoly, Polynomial};

/// Number of grid points `render` is usually asked for when plotting.
pub const DEFAULT_RESOLUTION: usize = 1001;

/// A sample set bound to the Lagrange evaluator.
///
/// The samples are checked once on construction, after that every query is
/// infallible.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawSamples"))]
pub struct LagrangeInterpolation {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawSamples {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawSamples> for LagrangeInterpolation {
    type Error = InterpolationError;

    fn try_from(raw: RawSamples) -> Result<Self> {
        LagrangeInterpolation::from_samples(raw.xs, raw.ys)
    }
}

impl LagrangeInterpolation {
    /// Binds explicit coordinates, `ys[i]` being the value at node `xs[i]`.
    pub fn from_samples(xs: Vec<f64>, ys: Vec<f64>) -> Result<Self> {
        validate(&xs, &ys)?;
        debug!(nodes = xs.len(), "built interpolation model from samples");
        Ok(LagrangeInterpolation { xs, ys })
    }

    /// Samples `f` at `n` evenly spaced nodes across `range`, both ends included.
    ///
    /// ```
    /// use lagrange_poly::LagrangeInterpolation;
    /// use std::f64::consts::PI;
    ///
    /// let model = LagrangeInterpolation::from_function(f64::sin, 0.0..=PI, 11).unwrap();
    /// assert!((model.evaluate(PI / 2.0) - 1.0).abs() < 1e-9);
    /// ```
    pub fn from_function<F>(f: F, range: RangeInclusive<f64>, n: usize) -> Result<Self>
    where
        F: Fn(f64) -> f64,
    {
        let (min, max) = range.into_inner();
        if !(min.is_finite() && max.is_finite() && (max - min).is_finite()) {
            warn!(min, max, "rejected sampling range with non-finite bounds or width");
            return Err(InterpolationError::InvalidRange { min, max });
        }

        let xs = linspace(min, max, n);
        let ys = xs.iter().map(|&x| f(x)).collect::<Vec<_>>();
        validate(&xs, &ys)?;

        debug!(nodes = n, min, max, "built interpolation model from function");
        Ok(LagrangeInterpolation { xs, ys })
    }

    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    // a built model always holds at least one node
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        trace!(x, "evaluating interpolation model");
        evaluate_unchecked(x, &self.xs, &self.ys)
    }

    pub fn evaluate_many(&self, points: &[f64]) -> Vec<f64> {
        points.iter().map(|&x| self.evaluate(x)).collect()
    }

    /// Evenly spaced points from the first node to the last one, paired with
    /// the interpolated values there. Ready to hand to a plotting backend.
    pub fn render(&self, resolution: usize) -> (Vec<f64>, Vec<f64>) {
        let first = self.xs[0];
        let last = self.xs[self.xs.len() - 1];
        trace!(resolution, first, last, "rendering interpolation model");

        let points = linspace(first, last, resolution);
        let values = points
            .iter()
            .map(|&x| evaluate_unchecked(x, &self.xs, &self.ys))
            .collect();
        (points, values)
    }

    /// Largest distance between `f` and the model over the render grid.
    pub fn max_abs_error<F>(&self, f: F, resolution: usize) -> f64
    where
        F: Fn(f64) -> f64,
    {
        let (points, values) = self.render(resolution);
        points
            .iter()
            .zip(&values)
            .map(|(&x, value)| (f(x) - value).abs())
            .fold(0.0, f64::max)
    }

    /*
        Expands the interpolant into monomial coefficients.
        Each basis is built as a product of (x - x_j) factors, e.g. for
        xs = [2, 4], ys = [4, 8]:
        L_0 = (x - 4) / (2 - 4) -> [-4, 1] * 4 / -2 = [8, -2]
        L_1 = (x - 2) / (4 - 2) -> [-2, 1] * 8 / 2 = [-8, 4]
        sum = [0, 2] = 2x
    */
    pub fn polynomial(&self) -> DensePoly {
        self.xs
            .iter()
            .zip(&self.ys)
            .enumerate()
            .map(|(k, (x_k, y_k))| {
                let numerator: DensePoly = self
                    .xs
                    .iter()
                    .enumerate()
                    .filter(|(j, _)| *j != k)
                    .map(|(_, x_j)| DensePoly::new(vec![-x_j, 1.0]))
                    .product();

                let denominator = numerator.evaluate(*x_k);
                numerator.scalar_mul(y_k / denominator)
            })
            .sum()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::f64::consts::PI;

    fn sin_model(n: usize) -> LagrangeInterpolation {
        LagrangeInterpolation::from_function(f64::sin, 0.0..=PI, n).unwrap()
    }

    #[test]
    fn test_from_samples() {
        let model = LagrangeInterpolation::from_samples(vec![2.0, 4.0], vec![4.0, 8.0]).unwrap();

        assert_eq!(model.len(), 2);
        assert!(!model.is_empty());
        assert_eq!(model.evaluate(2.0), 4.0);
        assert_eq!(model.evaluate(4.0), 8.0);
        assert_eq!(model.evaluate(3.0), 6.0);
        assert_eq!(model.evaluate_many(&[2.0, 4.0]), vec![4.0, 8.0]);
    }

    #[test]
    fn test_from_function_samples_endpoints() {
        let model = sin_model(11);

        assert_eq!(model.len(), 11);
        assert_eq!(model.xs()[0], 0.0);
        assert_eq!(model.xs()[10], PI);
        for (x, y) in model.xs().iter().zip(model.ys()) {
            assert_eq!(x.sin(), *y);
            assert!((model.evaluate(*x) - y).abs() < 1e-3);
        }
    }

    #[test]
    fn test_from_function_rejects_bad_input() {
        assert_eq!(
            LagrangeInterpolation::from_function(f64::sin, 0.0..=PI, 0),
            Err(InterpolationError::Empty)
        );
        assert!(matches!(
            LagrangeInterpolation::from_function(f64::sin, 0.0..=f64::NAN, 4),
            Err(InterpolationError::InvalidRange { min, .. }) if min == 0.0
        ));
        assert!(matches!(
            LagrangeInterpolation::from_function(f64::sin, f64::NEG_INFINITY..=1.0, 4),
            Err(InterpolationError::InvalidRange { .. })
        ));
        // each bound is finite but the width overflows
        assert_eq!(
            LagrangeInterpolation::from_function(|x| x, -f64::MAX..=f64::MAX, 3),
            Err(InterpolationError::InvalidRange {
                min: -f64::MAX,
                max: f64::MAX
            })
        );
        assert!(matches!(
            LagrangeInterpolation::from_function(f64::sin, 1.0..=1.0, 3),
            Err(InterpolationError::DuplicateNode { first: 0, second: 1, .. })
        ));
    }

    #[test]
    fn test_from_samples_rejects_bad_input() {
        assert_eq!(
            LagrangeInterpolation::from_samples(vec![], vec![]),
            Err(InterpolationError::Empty)
        );
        assert_eq!(
            LagrangeInterpolation::from_samples(vec![1.0, 2.0], vec![1.0]),
            Err(InterpolationError::LengthMismatch { xs: 2, ys: 1 })
        );
        assert!(matches!(
            LagrangeInterpolation::from_samples(vec![1.0, 1.0], vec![1.0, 2.0]),
            Err(InterpolationError::DuplicateNode { .. })
        ));
    }

    #[test]
    fn test_from_samples_rejects_non_finite_node() {
        assert!(matches!(
            LagrangeInterpolation::from_samples(vec![0.0, f64::NAN], vec![1.0, 2.0]),
            Err(InterpolationError::NonFiniteNode { index: 1, .. })
        ));
    }

    #[test]
    fn test_wide_finite_range_keeps_endpoints() {
        let model =
            LagrangeInterpolation::from_function(|x| x, -f64::MAX / 2.0..=f64::MAX / 2.0, 3)
                .unwrap();
        assert_eq!(model.xs(), &[-f64::MAX / 2.0, 0.0, f64::MAX / 2.0]);
        assert_eq!(model.evaluate(0.0), 0.0);
    }

    #[test]
    fn test_single_sample_function() {
        // one node keeps only the lower bound
        let model = LagrangeInterpolation::from_function(|x| 3.0 * x, 2.0..=9.0, 1).unwrap();
        assert_eq!(model.xs(), &[2.0]);
        assert_eq!(model.evaluate(100.0), 6.0);
    }

    #[test]
    fn test_render() {
        let model = sin_model(5);
        let (points, values) = model.render(DEFAULT_RESOLUTION);

        assert_eq!(points.len(), DEFAULT_RESOLUTION);
        assert_eq!(values.len(), DEFAULT_RESOLUTION);
        assert_eq!(points[0], 0.0);
        assert_eq!(points[DEFAULT_RESOLUTION - 1], PI);
        assert_eq!(values[0], 0.0_f64.sin());

        let (points, values) = model.render(0);
        assert!(points.is_empty() && values.is_empty());
    }

    #[test]
    fn test_max_abs_error() {
        let model = sin_model(5);
        let error = model.max_abs_error(f64::sin, 201);
        assert!(error > 0.0);
        assert!(error < 0.1);

        // more nodes, tighter fit
        assert!(sin_model(11).max_abs_error(f64::sin, 201) < error);
    }

    #[test]
    fn test_polynomial() {
        let model = LagrangeInterpolation::from_samples(vec![2.0, 4.0], vec![4.0, 8.0]).unwrap();
        assert_eq!(model.polynomial().coefficients(), &[0.0, 2.0]);

        // f(x) = 5 + 2x^3
        let model = LagrangeInterpolation::from_samples(
            vec![0.0, 1.0, 2.0, 3.0],
            vec![5.0, 7.0, 21.0, 59.0],
        )
        .unwrap();
        let poly = model.polynomial();
        let expected = [5.0, 0.0, 0.0, 2.0];

        assert_eq!(poly.coefficients().len(), expected.len());
        for (coeff, expected) in poly.coefficients().iter().zip(expected) {
            assert!((coeff - expected).abs() < 1e-9);
        }
        for x in [-1.5, 0.5, 2.5, 6.0] {
            assert!((poly.evaluate(x) - model.evaluate(x)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_single_node_polynomial() {
        let model = LagrangeInterpolation::from_samples(vec![3.0], vec![-2.0]).unwrap();
        assert_eq!(model.polynomial().coefficients(), &[-2.0]);
    }
}
