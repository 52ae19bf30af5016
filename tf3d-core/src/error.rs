//! Error types for checked transform entry points.

use thiserror::Error;

/// Result type alias for checked transform operations.
pub type TransformResult<T> = Result<T, TransformError>;

/// Errors raised when input cannot be turned into a well-formed transform.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransformError {
    /// Input had the wrong number of components.
    #[error("invalid {what}: expected {expected} components, got {actual}")]
    InvalidDimension {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Matrix is projective: its last row is not `[0, 0, 0, 1]`.
    #[error("matrix is not affine: last row is {last_row:?}, expected [0, 0, 0, 1]")]
    NotAffine { last_row: [f64; 4] },

    /// Angle is NaN or infinite.
    #[error("rotation angle must be finite, got {0}")]
    NonFiniteAngle(f64),
}

impl TransformError {
    /// Create a dimension mismatch error.
    #[must_use]
    pub const fn invalid_dimension(what: &'static str, expected: usize, actual: usize) -> Self {
        Self::InvalidDimension {
            what,
            expected,
            actual,
        }
    }

    /// Create a non-affine matrix error.
    #[must_use]
    pub const fn not_affine(last_row: [f64; 4]) -> Self {
        Self::NotAffine { last_row }
    }
}
