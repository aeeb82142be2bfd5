//! Lagrange interpolation over real sample sets, and a small polynomial value
//! type with dense and sparse coefficient layouts.

pub mod error;
pub mod interpolate;
pub mod polynomial;

pub use error::{InterpolationError, Result};
pub use interpolate::{evaluate, LagrangeInterpolation};
pub use polynomial::{DensePoly, Polynomial, SparsePoly};
