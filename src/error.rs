use thiserror::Error;

/// Result alias for peak-picking operations.
pub type Result<T> = std::result::Result<T, PickError>;

/// Errors reported by the picking core.
#[derive(Debug, Error)]
pub enum PickError {
    /// The two columns of a spectrum must have the same length.
    #[error("x has {x_len} values but y has {y_len}")]
    LengthMismatch { x_len: usize, y_len: usize },

    /// A central-difference slope needs a neighbour on both sides, so the
    /// first and last rows have no gradient. Reportable, never fatal.
    #[error("gradient not computable at boundary index {index} of {len} rows")]
    BoundaryIndex { index: usize, len: usize },

    /// An index fell outside the spectrum. Caller error; rejected, not clamped.
    #[error("index {index} out of range for spectrum of {len} rows")]
    IndexOutOfRange { index: usize, len: usize },

    /// Export (de)serialization failure.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
