//! Tests for the state-block optimization.

use bellopt_core::{DetectorModel, Op2, Op4, QUANTUM_BOUND};
use bellopt_seesaw::{MeasurementSettings, SeesawError, StateOptimizer, chsh_operator};
use bellopt_solver::hermitian_eigen;

// ---------------------------------------------------------------------------
// CHSH operator structure
// ---------------------------------------------------------------------------

#[test]
fn chsh_operator_is_hermitian_and_traceless_at_canonical_settings() {
    let c = chsh_operator(&MeasurementSettings::chsh());
    assert!(c.asymmetry() < 1e-12);
    assert!(c.trace().norm() < 1e-12);
}

#[test]
fn chsh_operator_top_eigenvalue_is_tsirelson() {
    let c = chsh_operator(&MeasurementSettings::chsh());
    let eig = hermitian_eigen(&c.data, 4).unwrap();
    assert!((eig.values[eig.argmax()] - QUANTUM_BOUND).abs() < 1e-10);
}

// ---------------------------------------------------------------------------
// State solve
// ---------------------------------------------------------------------------

#[test]
fn perfect_detector_reaches_tsirelson_at_canonical_settings() {
    let opt = StateOptimizer::new(DetectorModel::perfect());
    let (value, rho) = opt.optimize(&MeasurementSettings::chsh()).unwrap();
    assert!((value - QUANTUM_BOUND).abs() < 1e-9);

    // The maximizer is a valid state: Hermitian, unit trace, PSD.
    assert!(rho.asymmetry() < 1e-10);
    assert!((rho.trace().re - 1.0).abs() < 1e-10);
    let eig = hermitian_eigen(&rho.data, 4).unwrap();
    for v in eig.values {
        assert!(v > -1e-10);
    }
}

#[test]
fn mixed_error_state_scales_value_linearly() {
    // With E = I/4 the detector term vanishes (the CHSH operator is
    // traceless at canonical settings), so the value is μ·2√2.
    let mu = 0.5;
    let opt = StateOptimizer::new(DetectorModel::new(mu, Op4::maximally_mixed()).unwrap());
    let (value, _) = opt.optimize(&MeasurementSettings::chsh()).unwrap();
    assert!((value - mu * QUANTUM_BOUND).abs() < 1e-9);
}

#[test]
fn ground_error_state_adds_detector_term() {
    let mu = 0.7;
    let error = Op4::ground_projector();
    let opt = StateOptimizer::new(DetectorModel::new(mu, error).unwrap());
    let settings = MeasurementSettings::chsh();
    let (value, _) = opt.optimize(&settings).unwrap();

    let chsh = chsh_operator(&settings);
    let expected = mu * QUANTUM_BOUND + (1.0 - mu) * chsh.re_trace_product(&error);
    assert!((value - expected).abs() < 1e-9);
}

#[test]
fn non_finite_settings_surface_as_solver_error() {
    let mut settings = MeasurementSettings::chsh();
    settings.a1 = Op2::bloch([f64::NAN, 0.0, 0.0]);
    let opt = StateOptimizer::new(DetectorModel::perfect());
    assert!(matches!(
        opt.optimize(&settings),
        Err(SeesawError::Solver(_))
    ));
}
