//! Error types for the see-saw crate.

use thiserror::Error;

use bellopt_core::CoreError;
use bellopt_solver::SolverError;

/// Errors produced by the alternating optimizer.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SeesawError {
    /// Invalid detector model or operator input.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The convex state solve failed.
    #[error("state solve failed: {0}")]
    Solver(#[from] SolverError),

    /// The stopping tolerance is not a usable relative threshold.
    ///
    /// A tolerance at or above 1 (or NaN) would pass the stopping test
    /// before any cycle ran, presenting an un-optimized result as converged.
    #[error("stopping tolerance must be in (0, 1), got {0}")]
    InvalidTolerance(f64),

    /// The cycle budget ran out before the stopping test was met.
    ///
    /// Distinct from a solver failure: every solve succeeded, the loop just
    /// kept improving by more than the tolerance. Callers running restart
    /// sweeps should count this as "no success at this restart".
    #[error("see-saw did not converge within {cycles} cycles")]
    DidNotConverge {
        /// Number of full state→Alice→state→Bob cycles performed.
        cycles: usize,
    },
}

/// Result type for see-saw operations.
pub type SeesawResult<T> = Result<T, SeesawError>;
