//! Error types for the threshold search.

use thiserror::Error;

use bellopt_core::CoreError;

/// Errors produced by the efficiency sweep.
///
/// Note that "no candidate attained a violation" is *not* an error — it is
/// the `None` best in the report, an expected outcome of the Monte Carlo
/// search.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SearchError {
    /// The candidate list was empty.
    #[error("sweep needs at least one candidate efficiency")]
    EmptyRange,

    /// The restart budget was zero.
    #[error("sweep needs at least one restart per candidate")]
    ZeroRestarts,

    /// A candidate efficiency or the error state failed validation.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Result type for sweep operations.
pub type SearchResult<T> = Result<T, SearchError>;
