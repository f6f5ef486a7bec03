use thiserror::Error;

/// Failures a caller can act on.
/// Operations return `anyhow::Result`; recover these with `err.downcast_ref::<GeometryError>()`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// A curve or line was asked to be divided into zero pieces.
    #[error("division count must be at least 1, got {0}")]
    InvalidDivision(usize),

    /// An input collection that must hold at least one element was empty.
    #[error("{0} must not be empty")]
    EmptyInput(&'static str),

    /// A normalized parameter fell outside [0, 1].
    #[error("{name} must be within [0, 1], got {value}")]
    OutOfDomain { name: &'static str, value: f64 },

    /// A sample matrix had rows of different length.
    #[error("row {row} has {actual} columns, expected {expected}")]
    RaggedMatrix {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// A third, non-contiguous perimeter curve fell into a direction bucket.
    #[error("cannot parametrize surface with an angle tolerance of {tolerance} degrees, try increasing the tolerance")]
    Unparametrizable { tolerance: f64 },

    /// A shortening length consumed the whole curve.
    #[error("cannot shorten a curve of length {length} by {amount} at both ends")]
    OverShortened { length: f64, amount: f64 },
}
