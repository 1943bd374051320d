//! Property tests for the partial-trace reductions.

use bellopt_core::{Op2, Op4};
use num_complex::Complex64;
use proptest::prelude::*;

fn op4_from(parts: &[f64]) -> Op4 {
    let mut m = Op4::zero();
    for i in 0..16 {
        m.data[i] = Complex64::new(parts[2 * i], parts[2 * i + 1]);
    }
    m
}

proptest! {
    #[test]
    fn both_reductions_preserve_trace(parts in prop::collection::vec(-10.0f64..10.0, 32)) {
        let m = op4_from(&parts);
        let full = m.trace();
        let first = m.trace_out_first().trace();
        let second = m.trace_out_second().trace();
        prop_assert!((full - first).norm() < 1e-9);
        prop_assert!((full - second).norm() < 1e-9);
    }

    #[test]
    fn reductions_are_linear(
        parts_a in prop::collection::vec(-10.0f64..10.0, 32),
        parts_b in prop::collection::vec(-10.0f64..10.0, 32),
        s in -5.0f64..5.0,
    ) {
        let a = op4_from(&parts_a);
        let b = op4_from(&parts_b);
        let combined = a.scale(s) + b;

        let first = combined.trace_out_first();
        let first_expected = a.trace_out_first().scale(s) + b.trace_out_first();
        prop_assert!(first.approx_eq(&first_expected, 1e-9));

        let second = combined.trace_out_second();
        let second_expected = a.trace_out_second().scale(s) + b.trace_out_second();
        prop_assert!(second.approx_eq(&second_expected, 1e-9));
    }
}

// ---------------------------------------------------------------------------
// Exact block arithmetic on a hand-built matrix
// ---------------------------------------------------------------------------

#[test]
fn reductions_of_kron_factor_exactly() {
    let a = Op2::bloch([0.0, 0.6, 0.8]);
    let b = Op2::new(
        Complex64::new(0.3, 0.0),
        Complex64::new(0.1, -0.2),
        Complex64::new(0.1, 0.2),
        Complex64::new(0.7, 0.0),
    );
    let m = Op4::kron(&a, &b);
    // tr_A(a ⊗ b) = tr(a)·b = 0 (a is traceless); tr_B(a ⊗ b) = tr(b)·a = a.
    assert!(m.trace_out_first().approx_eq(&Op2::zero(), 1e-12));
    assert!(m.trace_out_second().approx_eq(&a, 1e-12));
}
