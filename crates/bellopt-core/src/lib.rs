//! `bellopt-core` — operator and detector-model primitives.
//!
//! Value types shared by the whole workspace: single-qubit observables
//! (`Op2`), two-qubit operators and states (`Op4`), the lossy-detector
//! model, Bloch-vector random sampling and the CHSH bound constants.
//!
//! All matrices are small fixed-size complex arrays; every operation is a
//! plain value computation with no shared state, so optimization runs can
//! be farmed out across threads freely.
//!
//! # Quick start
//!
//! ```rust
//! use bellopt_core::{Op2, Op4, QUANTUM_BOUND};
//!
//! // A1 ⊗ B1 for the canonical Pauli settings.
//! let joint = Op4::kron(&Op2::z(), &Op2::x());
//! assert!(joint.trace().norm() < 1e-12);
//! assert!((QUANTUM_BOUND - 2.0 * 2.0f64.sqrt()).abs() < 1e-15);
//! ```

pub mod detector;
pub mod error;
pub mod op2;
pub mod op4;
pub mod random;

pub use detector::DetectorModel;
pub use error::{CoreError, CoreResult};
pub use op2::Op2;
pub use op4::Op4;
pub use random::random_observable;

/// Tsirelson's bound: the largest CHSH value any quantum strategy attains.
pub const QUANTUM_BOUND: f64 = 2.0 * std::f64::consts::SQRT_2;

/// The local-hidden-variable (classical) bound for CHSH.
pub const LOCAL_BOUND: f64 = 2.0;

/// Entries below this magnitude are zeroed by `chop` for display purposes.
pub const CHOP_THRESHOLD: f64 = 1e-8;
