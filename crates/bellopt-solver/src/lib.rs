//! `bellopt-solver` — convex optimization over density matrices.
//!
//! The solver boundary for the CHSH search: maximize a real trace objective
//! `Re Tr(W·ρ)` over the spectrahedron `{ρ ⪰ 0, Tr ρ = 1}`. The problem is
//! a semidefinite program; for a linear objective its exact global optimum
//! is the top eigenvalue of the Hermitian part of `W`, attained by the
//! corresponding eigenprojector, so the default backend solves it by
//! Hermitian eigendecomposition rather than an iterative conic method.
//!
//! Alternative backends (interior-point conic solvers, for richer
//! constraint sets) plug in through the [`DensitySolver`] trait.

pub mod density;
pub mod eigen;
pub mod error;

pub use density::{DensitySolution, DensitySolver, SpectralDensitySolver};
pub use eigen::{Eigen, hermitian_eigen};
pub use error::{SolverError, SolverResult};
