//! Property tests for the spectral density-matrix solver.

use num_complex::Complex64;
use proptest::prelude::*;

use bellopt_solver::{DensitySolver, SpectralDensitySolver};

fn op4_from(parts: &[f64]) -> Vec<Complex64> {
    (0..16)
        .map(|i| Complex64::new(parts[2 * i], parts[2 * i + 1]))
        .collect()
}

/// Normalized rank-1 density matrix from raw amplitudes, or `None` for a
/// near-zero draw.
fn pure_state(amps: &[f64]) -> Option<Vec<Complex64>> {
    let v: Vec<Complex64> = (0..4)
        .map(|i| Complex64::new(amps[2 * i], amps[2 * i + 1]))
        .collect();
    let norm_sq: f64 = v.iter().map(|c| c.norm_sqr()).sum();
    if norm_sq < 1e-9 {
        return None;
    }
    let mut rho = vec![Complex64::new(0.0, 0.0); 16];
    for i in 0..4 {
        for j in 0..4 {
            rho[4 * i + j] = v[i] * v[j].conj() / norm_sq;
        }
    }
    Some(rho)
}

fn re_trace_product(w: &[Complex64], rho: &[Complex64]) -> f64 {
    let mut acc = 0.0;
    for i in 0..4 {
        for k in 0..4 {
            acc += (w[4 * i + k] * rho[4 * k + i]).re;
        }
    }
    acc
}

// ---------------------------------------------------------------------------
// Global optimality over the spectrahedron
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn value_dominates_random_density_matrices(
        w_parts in prop::collection::vec(-5.0f64..5.0, 32),
        amps in prop::collection::vec(-1.0f64..1.0, 8),
    ) {
        let w = op4_from(&w_parts);
        let sol = SpectralDensitySolver.maximize(&w, 4).unwrap();

        if let Some(rho) = pure_state(&amps) {
            prop_assert!(re_trace_product(&w, &rho) <= sol.value + 1e-8);
        }

        // The maximally mixed state is always feasible.
        let mut mixed = vec![Complex64::new(0.0, 0.0); 16];
        for i in 0..4 {
            mixed[5 * i] = Complex64::new(0.25, 0.0);
        }
        prop_assert!(re_trace_product(&w, &mixed) <= sol.value + 1e-8);
    }

    #[test]
    fn maximizer_is_a_valid_state_attaining_the_value(
        w_parts in prop::collection::vec(-5.0f64..5.0, 32),
    ) {
        let w = op4_from(&w_parts);
        let sol = SpectralDensitySolver.maximize(&w, 4).unwrap();
        let rho = &sol.maximizer;

        let trace: Complex64 = (0..4).map(|i| rho[5 * i]).sum();
        prop_assert!((trace.re - 1.0).abs() < 1e-9);
        prop_assert!(trace.im.abs() < 1e-12);
        for i in 0..4 {
            for j in 0..4 {
                prop_assert!((rho[4 * i + j] - rho[4 * j + i].conj()).norm() < 1e-9);
            }
        }
        prop_assert!((re_trace_product(&w, rho) - sol.value).abs() < 1e-8);
    }
}
