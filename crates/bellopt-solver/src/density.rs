//! Trace-objective maximization over density matrices.
//!
//! Problem: maximize `Re Tr(W·ρ)` subject to `ρ ⪰ 0`, `Tr ρ = 1`.
//!
//! Only the Hermitian part of `W` contributes to the real objective, and
//! over the spectrahedron a linear functional is maximized at an extreme
//! point — a rank-1 projector. The optimum is therefore
//! `λ_max(herm(W))`, attained at `ρ = v v†` for the top eigenvector `v`.

use num_complex::Complex64;
use tracing::trace;

use crate::eigen::hermitian_eigen;
use crate::error::{SolverError, SolverResult};

/// Optimal value and optimizer of a density-matrix program.
#[derive(Debug, Clone)]
pub struct DensitySolution {
    /// Achieved objective value.
    pub value: f64,
    /// The maximizing density matrix, row-major `dim × dim`.
    pub maximizer: Vec<Complex64>,
    /// Matrix dimension.
    pub dim: usize,
}

/// A backend that maximizes `Re Tr(W·ρ)` over density matrices.
///
/// Implementations must return the exact (up to their own numerical
/// tolerance) global optimum — the problem is convex — or a
/// [`SolverError`], never a silently degraded value.
pub trait DensitySolver {
    /// Maximize `Re Tr(objective · ρ)` over `{ρ ⪰ 0, Tr ρ = 1}`.
    ///
    /// `objective` is a row-major `dim × dim` complex matrix; it need not be
    /// Hermitian, only its Hermitian part enters the objective.
    fn maximize(&self, objective: &[Complex64], dim: usize) -> SolverResult<DensitySolution>;
}

/// Exact spectral backend: eigendecomposition of the Hermitian part.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpectralDensitySolver;

impl DensitySolver for SpectralDensitySolver {
    fn maximize(&self, objective: &[Complex64], dim: usize) -> SolverResult<DensitySolution> {
        let expected = dim * dim;
        if dim == 0 || objective.len() != expected {
            return Err(SolverError::Shape {
                dim,
                expected,
                got: objective.len(),
            });
        }

        // herm(W) = (W + W†) / 2
        let mut herm = vec![Complex64::new(0.0, 0.0); expected];
        for i in 0..dim {
            for j in 0..dim {
                herm[i * dim + j] =
                    (objective[i * dim + j] + objective[j * dim + i].conj()) * 0.5;
            }
        }

        let eig = hermitian_eigen(&herm, dim)?;
        let top = eig.argmax();
        let value = eig.values[top];
        if !value.is_finite() {
            return Err(SolverError::Backend(
                "eigendecomposition produced a non-finite eigenvalue".into(),
            ));
        }

        // ρ = v v† for the top eigenvector v (orthonormal, so Tr ρ = 1).
        let mut maximizer = vec![Complex64::new(0.0, 0.0); expected];
        for i in 0..dim {
            for j in 0..dim {
                maximizer[i * dim + j] =
                    eig.vectors[i * dim + top] * eig.vectors[j * dim + top].conj();
            }
        }

        trace!(dim, value, "density program solved spectrally");
        Ok(DensitySolution {
            value,
            maximizer,
            dim,
        })
    }
}
