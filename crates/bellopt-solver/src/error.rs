//! Error types for the solver crate.

use thiserror::Error;

/// Errors produced by density-matrix optimization backends.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SolverError {
    /// The objective buffer does not match the declared dimension.
    #[error("objective must hold {expected} entries for dimension {dim}, got {got}")]
    Shape {
        /// Declared matrix dimension.
        dim: usize,
        /// Expected number of entries (`dim²`).
        expected: usize,
        /// Number of entries supplied.
        got: usize,
    },

    /// The objective contains NaN or infinite entries.
    #[error("objective contains a non-finite entry")]
    NonFinite,

    /// An iterative backend failed to reach its own tolerance.
    #[error("solver backend failed: {0}")]
    Backend(String),
}

/// Result type for solver operations.
pub type SolverResult<T> = Result<T, SolverError>;
