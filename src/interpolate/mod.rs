pub mod lagrange;
pub mod model;
pub mod nodes;

pub use lagrange::{basis, evaluate, validate};
pub use model::{LagrangeInterpolation, DEFAULT_RESOLUTION};
