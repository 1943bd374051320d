//! `bellopt-seesaw` — alternating optimization of the CHSH value.
//!
//! The joint problem — maximize the CHSH expectation over a two-qubit state
//! *and* four dichotomic measurement settings under a lossy detector — is
//! bilinear and non-convex. Each block is exactly solvable on its own:
//!
//! - **state block**: a semidefinite program over density matrices, solved
//!   through the `bellopt-solver` boundary;
//! - **measurement block**: a closed-form sign-projection of the
//!   eigenspaces of a partial-trace reduction.
//!
//! The see-saw loop alternates the two until the achieved value stops
//! improving, which finds a local optimum; global coverage comes from the
//! multi-restart sweep in `bellopt-search`.
//!
//! # Quick start
//!
//! ```rust
//! use bellopt_core::{DetectorModel, LOCAL_BOUND};
//! use bellopt_seesaw::SeesawOptimizer;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let optimizer = SeesawOptimizer::new(DetectorModel::perfect());
//! let best = (0..4u64)
//!     .map(|seed| optimizer.run(&mut StdRng::seed_from_u64(seed)).unwrap().value)
//!     .fold(0.0, f64::max);
//! assert!(best > LOCAL_BOUND);
//! ```

pub mod error;
pub mod measurement;
pub mod seesaw;
pub mod settings;
pub mod state;

pub use error::{SeesawError, SeesawResult};
pub use measurement::{optimal_observable, optimize_a1, optimize_a2, optimize_b1, optimize_b2};
pub use seesaw::{SeesawConfig, SeesawOptimizer, SeesawOutcome};
pub use settings::MeasurementSettings;
pub use state::{StateOptimizer, chsh_operator};
