//! Error types for patch construction.

use thiserror::Error;

/// Errors raised when building patch data from untrusted input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatchError {
    /// A control net needs exactly 16 points.
    #[error("control net needs {expected} points, got {found}")]
    ControlNetLength {
        /// Required number of points.
        expected: usize,
        /// Number of points supplied.
        found: usize,
    },

    /// A control point has a NaN or infinite coordinate.
    #[error("control point {index} is not finite")]
    NonFiniteControlPoint {
        /// Row-major index of the offending point.
        index: usize,
    },
}

/// Result type for patch operations.
pub type Result<T> = std::result::Result<T, PatchError>;
