//! Error types for the core crate.

use thiserror::Error;

/// Errors raised when validating operator or detector-model inputs.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CoreError {
    /// Detector efficiency must lie in [0, 1].
    #[error("detector efficiency must be in [0, 1], got {0}")]
    EfficiencyOutOfRange(f64),

    /// A density matrix must have unit trace.
    #[error("density matrix trace must be 1, got {0}")]
    NonUnitTrace(f64),

    /// A density matrix or observable must be Hermitian.
    #[error("matrix is not Hermitian (max asymmetry {0:.3e})")]
    NotHermitian(f64),

    /// Matrix entries must be finite.
    #[error("matrix contains a non-finite entry")]
    NonFinite,
}

/// Result type for core validation operations.
pub type CoreResult<T> = Result<T, CoreError>;
