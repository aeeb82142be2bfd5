mod dense;
mod format;
mod sparse;

pub use dense::DensePoly;
pub use sparse::SparsePoly;

use std::fmt::Display;

/// What both coefficient layouts can answer.
pub trait Polynomial: Display {
    fn evaluate(&self, x: f64) -> f64;

    /// Highest power with a non-zero coefficient, `None` for the zero polynomial.
    fn degree(&self) -> Option<usize>;

    /// Pure derivative, the receiver is left untouched.
    fn derivative(&self) -> Self
    where
        Self: Sized;

    /// Non-zero (power, coefficient) pairs in ascending power order.
    fn terms(&self) -> Vec<(usize, f64)>;
}
