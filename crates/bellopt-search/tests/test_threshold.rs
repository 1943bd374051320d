//! Tests for the efficiency sweep.
//!
//! The maximally-mixed error state makes attainability deterministic:
//! the detector term vanishes, so the best reachable value is exactly
//! μ·2√2 and candidates split cleanly into possible (μ > 1/√2) and
//! impossible (μ < 1/√2) ones.

use bellopt_core::{LOCAL_BOUND, Op4, QUANTUM_BOUND};
use bellopt_search::{SearchError, SweepConfig, find_minimal_efficiency};

fn mixed_error_config(efficiencies: Vec<f64>) -> SweepConfig {
    SweepConfig {
        efficiencies,
        restarts: 8,
        seed: 7,
        error_state: Op4::maximally_mixed(),
        ..SweepConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Attainability split
// ---------------------------------------------------------------------------

#[test]
fn good_candidate_succeeds_and_bad_candidate_fails() {
    let report = find_minimal_efficiency(&mixed_error_config(vec![0.9, 0.5])).unwrap();

    assert_eq!(report.candidates.len(), 2);
    let good = &report.candidates[0];
    assert!(good.violation.is_some());
    assert!(good.violation.unwrap() > LOCAL_BOUND);
    assert!(good.violation.unwrap() <= 0.9 * QUANTUM_BOUND + 1e-8);

    // μ = 0.5 cannot exceed 0.5·2√2 ≈ 1.41 under the mixed error state.
    let bad = &report.candidates[1];
    assert!(bad.violation.is_none());
    assert!(bad.winning_restart.is_none());

    let best = report.best.expect("good candidate must be recorded");
    assert_eq!(best.efficiency, 0.9);
    assert!(best.value > LOCAL_BOUND);
}

#[test]
fn sweep_keeps_going_after_a_failed_candidate() {
    // 0.5 fails, but the sweep must still try (and find) 0.8 afterwards.
    let report = find_minimal_efficiency(&mixed_error_config(vec![0.5, 0.8])).unwrap();
    assert!(report.candidates[0].violation.is_none());
    assert!(report.candidates[1].violation.is_some());
    assert_eq!(report.best.unwrap().efficiency, 0.8);
}

#[test]
fn all_bad_range_reports_no_threshold() {
    let report = find_minimal_efficiency(&mixed_error_config(vec![0.55, 0.5])).unwrap();
    assert!(report.best.is_none());
    assert!(report.candidates.iter().all(|c| c.violation.is_none()));
}

#[test]
fn downward_sweep_records_the_lowest_success() {
    let report = find_minimal_efficiency(&mixed_error_config(vec![0.95, 0.85])).unwrap();
    assert_eq!(report.best.unwrap().efficiency, 0.85);
}

// ---------------------------------------------------------------------------
// Reproducibility and validation
// ---------------------------------------------------------------------------

#[test]
fn same_seed_gives_identical_best() {
    let config = mixed_error_config(vec![0.9]);
    let first = find_minimal_efficiency(&config).unwrap();
    let second = find_minimal_efficiency(&config).unwrap();
    let (a, b) = (first.best.unwrap(), second.best.unwrap());
    assert_eq!(a.value, b.value);
    assert_eq!(a.restart, b.restart);
}

#[test]
fn report_serializes_to_json() {
    let report = find_minimal_efficiency(&mixed_error_config(vec![0.9])).unwrap();
    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"classical_bound\":2.0"));
}

#[test]
fn invalid_candidate_efficiency_aborts_the_sweep() {
    let config = mixed_error_config(vec![1.2]);
    assert!(matches!(
        find_minimal_efficiency(&config),
        Err(SearchError::Core(_))
    ));
}

#[test]
fn empty_range_is_rejected() {
    let config = mixed_error_config(vec![]);
    assert!(matches!(
        find_minimal_efficiency(&config),
        Err(SearchError::EmptyRange)
    ));
}
