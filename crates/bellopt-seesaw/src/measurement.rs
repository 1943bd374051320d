//! Closed-form measurement-setting optimization.
//!
//! For a fixed state ρ and fixed partner settings, the CHSH expectation is
//! linear in each remaining observable:
//!
//!   ⟨CHSH⟩ = Re Tr(A1·K₁⁺) + Re Tr(A2·K₁⁻) = Re Tr(B1·K₂⁺) + Re Tr(B2·K₂⁻)
//!
//! where each K is a partial-trace reduction of the partner pair against ρ.
//! Maximizing `Re Tr(A·K)` over Hermitian A with spectrum in {-1, +1} has
//! the exact solution `A = U·diag(sign λ)·U†` for the eigendecomposition
//! `(λ, U)` of the Hermitian part of K: each eigenspace is pushed to the
//! sign of its eigenvalue. No iteration is involved.

use num_complex::Complex64;

use bellopt_core::{Op2, Op4};
use bellopt_solver::{SolverResult, hermitian_eigen};

/// The dichotomic observable maximizing `Re Tr(A·K)`.
///
/// `K` need not be Hermitian; only its Hermitian part enters the objective.
/// A zero eigenvalue is projected to +1 (either sign is optimal; one
/// convention is fixed for determinism).
pub fn optimal_observable(k: &Op2) -> SolverResult<Op2> {
    let herm = k.hermitian_part();
    let eig = hermitian_eigen(&herm.data, 2)?;

    let mut out = Op2::zero();
    for i in 0..2 {
        for j in 0..2 {
            let mut acc = Complex64::new(0.0, 0.0);
            for m in 0..2 {
                let sign = if eig.values[m] >= 0.0 { 1.0 } else { -1.0 };
                acc += eig.vectors[2 * i + m] * sign * eig.vectors[2 * j + m].conj();
            }
            out.data[2 * i + j] = acc;
        }
    }
    Ok(out)
}

/// Alice-side reduction: `K₁ = tr_B[(I ⊗ Bs)·ρ]` for `Bs = B1 ± B2`.
pub fn reduced_for_alice(bs: &Op2, rho: &Op4) -> Op2 {
    (Op4::kron(&Op2::identity(), bs) * *rho).trace_out_second()
}

/// Bob-side reduction: `K₂ = tr_A[(As ⊗ I)·ρ]` for `As = A1 ± A2`.
pub fn reduced_for_bob(as_pair: &Op2, rho: &Op4) -> Op2 {
    (Op4::kron(as_pair, &Op2::identity()) * *rho).trace_out_first()
}

/// Optimal `A1` given Bob's settings and the state (uses `B1 + B2`).
pub fn optimize_a1(b1: &Op2, b2: &Op2, rho: &Op4) -> SolverResult<Op2> {
    optimal_observable(&reduced_for_alice(&(*b1 + *b2), rho))
}

/// Optimal `A2` given Bob's settings and the state (uses `B1 - B2`).
pub fn optimize_a2(b1: &Op2, b2: &Op2, rho: &Op4) -> SolverResult<Op2> {
    optimal_observable(&reduced_for_alice(&(*b1 - *b2), rho))
}

/// Optimal `B1` given Alice's settings and the state (uses `A1 + A2`).
pub fn optimize_b1(a1: &Op2, a2: &Op2, rho: &Op4) -> SolverResult<Op2> {
    optimal_observable(&reduced_for_bob(&(*a1 + *a2), rho))
}

/// Optimal `B2` given Alice's settings and the state (uses `A1 - A2`).
pub fn optimize_b2(a1: &Op2, a2: &Op2, rho: &Op4) -> SolverResult<Op2> {
    optimal_observable(&reduced_for_bob(&(*a1 - *a2), rho))
}
