use thiserror::Error;

/// Failures surfaced while validating a sample set or building a model.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InterpolationError {
    #[error("sample set is empty, at least one node is required")]
    Empty,

    #[error("sample set has {xs} nodes but {ys} values")]
    LengthMismatch { xs: usize, ys: usize },

    #[error("nodes {first} and {second} share the value {value}")]
    DuplicateNode {
        first: usize,
        second: usize,
        value: f64,
    },

    #[error("node {index} is not finite ({value})")]
    NonFiniteNode { index: usize, value: f64 },

    #[error("basis index {index} is out of range for {len} nodes")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("sampling range [{min}, {max}] must have finite bounds and a finite width")]
    InvalidRange { min: f64, max: f64 },

    #[error("only {found} distinct nodes could be drawn, {requested} were requested")]
    TooFewDistinctNodes { requested: usize, found: usize },
}

pub type Result<T> = std::result::Result<T, InterpolationError>;
