//! Two-qubit operators and states.
//!
//! A 4×4 complex matrix in row-major order, used for joint observables
//! (the CHSH operator) and density matrices. Subsystem ordering follows the
//! Kronecker convention `A ⊗ B`: row index `2i + k` pairs Alice's `i` with
//! Bob's `k`.

use std::fmt;
use std::ops::{Add, Mul, Sub};

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::op2::Op2;

/// A 4×4 complex matrix in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Op4 {
    /// The matrix elements in row-major order.
    pub data: [Complex64; 16],
}

impl Op4 {
    /// The zero matrix.
    pub fn zero() -> Self {
        Self {
            data: [Complex64::new(0.0, 0.0); 16],
        }
    }

    /// The identity matrix.
    pub fn identity() -> Self {
        let mut out = Self::zero();
        for i in 0..4 {
            out.data[5 * i] = Complex64::new(1.0, 0.0);
        }
        out
    }

    /// Kronecker product `a ⊗ b`.
    pub fn kron(a: &Op2, b: &Op2) -> Self {
        let mut out = Self::zero();
        for i in 0..2 {
            for j in 0..2 {
                for k in 0..2 {
                    for l in 0..2 {
                        out.data[4 * (2 * i + k) + (2 * j + l)] = a.at(i, j) * b.at(k, l);
                    }
                }
            }
        }
        out
    }

    /// The rank-1 projector |00⟩⟨00| — a detector-failure state in which
    /// both qubits relax to the ground state.
    pub fn ground_projector() -> Self {
        let mut out = Self::zero();
        out.data[0] = Complex64::new(1.0, 0.0);
        out
    }

    /// The maximally mixed state `I / 4`.
    pub fn maximally_mixed() -> Self {
        Self::identity().scale(0.25)
    }

    /// The Bell state (|00⟩ + |11⟩)/√2 as a density matrix.
    pub fn bell_phi_plus() -> Self {
        let half = Complex64::new(0.5, 0.0);
        let mut out = Self::zero();
        out.data[0] = half;
        out.data[3] = half;
        out.data[12] = half;
        out.data[15] = half;
        out
    }

    /// Entry at `(row, col)`.
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> Complex64 {
        self.data[4 * row + col]
    }

    /// Matrix trace.
    pub fn trace(&self) -> Complex64 {
        self.data[0] + self.data[5] + self.data[10] + self.data[15]
    }

    /// Conjugate transpose.
    pub fn dagger(&self) -> Self {
        let mut out = Self::zero();
        for i in 0..4 {
            for j in 0..4 {
                out.data[4 * i + j] = self.at(j, i).conj();
            }
        }
        out
    }

    /// Multiply every entry by a real scalar.
    pub fn scale(&self, s: f64) -> Self {
        let mut data = self.data;
        for e in &mut data {
            *e *= s;
        }
        Self { data }
    }

    /// Partial trace over the first subsystem: `tr_A[M]`.
    ///
    /// The sum of the two diagonal 2×2 blocks; for `M = a ⊗ b` this is
    /// `tr(a) · b`.
    pub fn trace_out_first(&self) -> Op2 {
        let mut out = Op2::zero();
        for i in 0..2 {
            for j in 0..2 {
                out.data[2 * i + j] = self.at(i, j) + self.at(i + 2, j + 2);
            }
        }
        out
    }

    /// Partial trace over the second subsystem: `tr_B[M]`.
    ///
    /// The trace of each 2×2 block, arranged into a 2×2 matrix; for
    /// `M = a ⊗ b` this is `tr(b) · a`.
    pub fn trace_out_second(&self) -> Op2 {
        let mut out = Op2::zero();
        for i in 0..2 {
            for j in 0..2 {
                out.data[2 * i + j] = self.at(2 * i, 2 * j) + self.at(2 * i + 1, 2 * j + 1);
            }
        }
        out
    }

    /// `Re Tr(self · other)` without forming the product matrix.
    pub fn re_trace_product(&self, other: &Op4) -> f64 {
        let mut acc = 0.0;
        for i in 0..4 {
            for k in 0..4 {
                let p = self.at(i, k) * other.at(k, i);
                acc += p.re;
            }
        }
        acc
    }

    /// Largest entry-wise deviation from Hermiticity, `max |M - M†|`.
    pub fn asymmetry(&self) -> f64 {
        let d = *self - self.dagger();
        d.data.iter().map(|e| e.norm()).fold(0.0, f64::max)
    }

    /// True if all entries are finite.
    pub fn is_finite(&self) -> bool {
        self.data
            .iter()
            .all(|e| e.re.is_finite() && e.im.is_finite())
    }

    /// True if every entry of `self - other` has magnitude below `tol`.
    pub fn approx_eq(&self, other: &Self, tol: f64) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| (*a - *b).norm() < tol)
    }

    /// Zero real and imaginary parts smaller than `threshold` in magnitude.
    pub fn chop(&self, threshold: f64) -> Self {
        let mut data = self.data;
        for e in &mut data {
            if e.re.abs() < threshold {
                e.re = 0.0;
            }
            if e.im.abs() < threshold {
                e.im = 0.0;
            }
        }
        Self { data }
    }
}

impl Add for Op4 {
    type Output = Op4;

    fn add(self, rhs: Op4) -> Op4 {
        let mut data = self.data;
        for (e, r) in data.iter_mut().zip(rhs.data.iter()) {
            *e += *r;
        }
        Op4 { data }
    }
}

impl Sub for Op4 {
    type Output = Op4;

    fn sub(self, rhs: Op4) -> Op4 {
        let mut data = self.data;
        for (e, r) in data.iter_mut().zip(rhs.data.iter()) {
            *e -= *r;
        }
        Op4 { data }
    }
}

impl Mul for Op4 {
    type Output = Op4;

    /// Matrix product.
    fn mul(self, rhs: Op4) -> Op4 {
        let mut out = Op4::zero();
        for i in 0..4 {
            for j in 0..4 {
                let mut acc = Complex64::new(0.0, 0.0);
                for k in 0..4 {
                    acc += self.at(i, k) * rhs.at(k, j);
                }
                out.data[4 * i + j] = acc;
            }
        }
        out
    }
}

impl fmt::Display for Op4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..4 {
            write!(f, "[")?;
            for col in 0..4 {
                let e = self.at(row, col);
                if col > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{:+.4}{:+.4}i", e.re, e.im)?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kron_of_identities_is_identity() {
        let k = Op4::kron(&Op2::identity(), &Op2::identity());
        assert!(k.approx_eq(&Op4::identity(), 1e-12));
    }

    #[test]
    fn kron_traces_factor() {
        let a = Op2::bloch([1.0, 0.0, 0.0]);
        let b = Op2::identity();
        let k = Op4::kron(&a, &b);
        // tr(a ⊗ b) = tr(a)·tr(b)
        assert!((k.trace() - a.trace() * b.trace()).norm() < 1e-12);
        // tr_A(a ⊗ b) = tr(a)·b, tr_B(a ⊗ b) = tr(b)·a
        assert!(k.trace_out_first().approx_eq(&b.scale(a.trace().re), 1e-12));
        assert!(k.trace_out_second().approx_eq(&a.scale(b.trace().re), 1e-12));
    }

    #[test]
    fn canonical_states_have_unit_trace() {
        for state in [
            Op4::ground_projector(),
            Op4::maximally_mixed(),
            Op4::bell_phi_plus(),
        ] {
            assert!((state.trace().re - 1.0).abs() < 1e-12);
            assert!(state.trace().im.abs() < 1e-12);
            assert!(state.asymmetry() < 1e-12);
        }
    }

    #[test]
    fn re_trace_product_matches_explicit_product() {
        let m = Op4::kron(&Op2::x(), &Op2::z());
        let rho = Op4::bell_phi_plus();
        let explicit = (m * rho).trace().re;
        assert!((m.re_trace_product(&rho) - explicit).abs() < 1e-12);
    }
}
