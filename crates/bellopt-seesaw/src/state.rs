//! State optimization for fixed measurement settings.
//!
//! With the four settings fixed, the CHSH expectation under the effective
//! state `μ·ρ + (1-μ)·E` is affine in ρ:
//!
//!   Re Tr(C·(μρ + (1-μ)E)) = μ·Re Tr(C·ρ) + (1-μ)·Re Tr(C·E)
//!
//! so the semidefinite program over ρ reduces to maximizing the linear term
//! through the solver boundary, with the fixed detector term folded back in
//! afterwards.

use tracing::debug;

use bellopt_core::{DetectorModel, Op4};
use bellopt_solver::{DensitySolver, SolverError, SpectralDensitySolver};

use crate::error::SeesawResult;
use crate::settings::MeasurementSettings;

/// The CHSH operator `A1 ⊗ (B1+B2) + A2 ⊗ (B1-B2)`.
pub fn chsh_operator(settings: &MeasurementSettings) -> Op4 {
    Op4::kron(&settings.a1, &(settings.b1 + settings.b2))
        + Op4::kron(&settings.a2, &(settings.b1 - settings.b2))
}

/// Convex state optimizer for a fixed detector model.
#[derive(Debug, Clone)]
pub struct StateOptimizer<S = SpectralDensitySolver> {
    detector: DetectorModel,
    solver: S,
}

impl StateOptimizer<SpectralDensitySolver> {
    /// Optimizer using the default exact spectral backend.
    pub fn new(detector: DetectorModel) -> Self {
        Self {
            detector,
            solver: SpectralDensitySolver,
        }
    }
}

impl<S: DensitySolver> StateOptimizer<S> {
    /// Optimizer delegating to a caller-supplied solver backend.
    pub fn with_solver(detector: DetectorModel, solver: S) -> Self {
        Self { detector, solver }
    }

    /// The detector model this optimizer was built with.
    pub fn detector(&self) -> &DetectorModel {
        &self.detector
    }

    /// Maximize the effective CHSH expectation over two-qubit states.
    ///
    /// Returns the achieved value and the maximizing ρ itself (not the
    /// effective mixture). A failed solve propagates as an error; no stale
    /// value is ever returned.
    pub fn optimize(&self, settings: &MeasurementSettings) -> SeesawResult<(f64, Op4)> {
        let chsh = chsh_operator(settings);
        let solution = self.solver.maximize(&chsh.data, 4)?;
        if solution.maximizer.len() != 16 {
            return Err(SolverError::Shape {
                dim: 4,
                expected: 16,
                got: solution.maximizer.len(),
            }
            .into());
        }

        let mut rho = Op4::zero();
        rho.data.copy_from_slice(&solution.maximizer);

        let mu = self.detector.efficiency();
        let detector_term = chsh.re_trace_product(self.detector.error_state());
        let value = mu * solution.value + (1.0 - mu) * detector_term;

        debug!(value, mu, "state solve complete");
        Ok((value, rho))
    }
}
