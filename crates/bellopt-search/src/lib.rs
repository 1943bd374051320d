//! `bellopt-search` — detector-efficiency threshold search.
//!
//! Sweeps a descending list of candidate detector efficiencies; at each
//! candidate it launches many independently seeded see-saw restarts in
//! parallel and records the candidate as attainable once any restart's
//! converged CHSH value exceeds the classical bound. The lowest attainable
//! candidate is the empirical threshold — a Monte Carlo lower bound, not a
//! certified one, since each restart only finds a local optimum.
//!
//! Restarts share no mutable state; every restart derives its own RNG
//! stream from the sweep seed, the candidate index and the restart index,
//! and the first success *by restart index* wins, so a sweep is
//! reproducible regardless of thread scheduling.

pub mod error;
pub mod report;
pub mod threshold;

pub use error::{SearchError, SearchResult};
pub use report::{CandidateReport, SweepReport, Violation};
pub use threshold::{SweepConfig, find_minimal_efficiency};
