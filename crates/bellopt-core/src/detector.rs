//! Lossy-detector model.
//!
//! A detector fires correctly with probability μ; on failure the apparatus
//! registers a fixed error state instead of the prepared one. The observed
//! state is therefore the convex mixture `μ·ρ + (1-μ)·E`.

use serde::Serialize;

use crate::error::{CoreError, CoreResult};
use crate::op4::Op4;

/// Tolerance for unit-trace and Hermiticity validation of error states.
const VALIDATION_TOL: f64 = 1e-8;

/// A fixed-efficiency detector with its failure state.
///
/// Validated at construction: μ ∈ [0, 1] and the error state is a finite
/// Hermitian matrix with unit trace. Out-of-range inputs are rejected, never
/// clamped — a silently coerced efficiency would corrupt reported thresholds.
// No Deserialize: a model must only come out of the validating constructor.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DetectorModel {
    efficiency: f64,
    error_state: Op4,
}

impl DetectorModel {
    /// Build a detector model, validating both fields.
    pub fn new(efficiency: f64, error_state: Op4) -> CoreResult<Self> {
        if !efficiency.is_finite() || !(0.0..=1.0).contains(&efficiency) {
            return Err(CoreError::EfficiencyOutOfRange(efficiency));
        }
        if !error_state.is_finite() {
            return Err(CoreError::NonFinite);
        }
        let trace = error_state.trace();
        if (trace.re - 1.0).abs() > VALIDATION_TOL || trace.im.abs() > VALIDATION_TOL {
            return Err(CoreError::NonUnitTrace(trace.re));
        }
        let asym = error_state.asymmetry();
        if asym > VALIDATION_TOL {
            return Err(CoreError::NotHermitian(asym));
        }
        Ok(Self {
            efficiency,
            error_state,
        })
    }

    /// A perfect detector (μ = 1); the error state is never observed.
    pub fn perfect() -> Self {
        Self {
            efficiency: 1.0,
            error_state: Op4::ground_projector(),
        }
    }

    /// Detection probability μ.
    pub fn efficiency(&self) -> f64 {
        self.efficiency
    }

    /// The state registered on detector failure.
    pub fn error_state(&self) -> &Op4 {
        &self.error_state
    }

    /// The observed mixture `μ·ρ + (1-μ)·E`.
    pub fn effective_state(&self, rho: &Op4) -> Op4 {
        rho.scale(self.efficiency) + self.error_state.scale(1.0 - self.efficiency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn rejects_out_of_range_efficiency() {
        for mu in [-0.1, 1.1, f64::NAN] {
            assert!(matches!(
                DetectorModel::new(mu, Op4::maximally_mixed()),
                Err(CoreError::EfficiencyOutOfRange(_))
            ));
        }
    }

    #[test]
    fn rejects_non_unit_trace_error_state() {
        assert!(matches!(
            DetectorModel::new(0.5, Op4::identity()),
            Err(CoreError::NonUnitTrace(_))
        ));
    }

    #[test]
    fn effective_state_interpolates() {
        let model = DetectorModel::new(0.25, Op4::maximally_mixed()).unwrap();
        let rho = Op4::bell_phi_plus();
        let eff = model.effective_state(&rho);
        let expected = rho.scale(0.25) + Op4::maximally_mixed().scale(0.75);
        assert!(eff.approx_eq(&expected, 1e-12));
        assert!((eff.trace().re - 1.0).abs() < 1e-12);
    }
}
