//! Single-qubit operators.
//!
//! A 2×2 complex matrix in row-major order, used for dichotomic measurement
//! settings (Hermitian, spectrum in [-1, 1]) and intermediate reductions.

use std::fmt;
use std::ops::{Add, Mul, Sub};

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// A 2×2 complex matrix in row-major order: `[[a, b], [c, d]]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Op2 {
    /// The matrix elements in row-major order.
    pub data: [Complex64; 4],
}

impl Op2 {
    /// Create a matrix from its four entries.
    pub fn new(a: Complex64, b: Complex64, c: Complex64, d: Complex64) -> Self {
        Self { data: [a, b, c, d] }
    }

    /// The zero matrix.
    pub fn zero() -> Self {
        Self {
            data: [Complex64::new(0.0, 0.0); 4],
        }
    }

    /// The identity matrix.
    pub fn identity() -> Self {
        Self::new(
            Complex64::new(1.0, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(1.0, 0.0),
        )
    }

    /// Pauli-X.
    pub fn x() -> Self {
        Self::new(
            Complex64::new(0.0, 0.0),
            Complex64::new(1.0, 0.0),
            Complex64::new(1.0, 0.0),
            Complex64::new(0.0, 0.0),
        )
    }

    /// Pauli-Y.
    pub fn y() -> Self {
        Self::new(
            Complex64::new(0.0, 0.0),
            Complex64::new(0.0, -1.0),
            Complex64::new(0.0, 1.0),
            Complex64::new(0.0, 0.0),
        )
    }

    /// Pauli-Z.
    pub fn z() -> Self {
        Self::new(
            Complex64::new(1.0, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(-1.0, 0.0),
        )
    }

    /// The observable `v_x X + v_y Y + v_z Z` for a Bloch vector `v`.
    ///
    /// For a unit `v` this is Hermitian with eigenvalues exactly ±1, i.e. a
    /// valid dichotomic measurement setting.
    pub fn bloch(v: [f64; 3]) -> Self {
        Self::new(
            Complex64::new(v[2], 0.0),
            Complex64::new(v[0], -v[1]),
            Complex64::new(v[0], v[1]),
            Complex64::new(-v[2], 0.0),
        )
    }

    /// Entry at `(row, col)`.
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> Complex64 {
        self.data[2 * row + col]
    }

    /// Matrix trace.
    pub fn trace(&self) -> Complex64 {
        self.data[0] + self.data[3]
    }

    /// Conjugate transpose.
    pub fn dagger(&self) -> Self {
        Self::new(
            self.data[0].conj(),
            self.data[2].conj(),
            self.data[1].conj(),
            self.data[3].conj(),
        )
    }

    /// Hermitian part `(M + M†) / 2`.
    ///
    /// For a Hermitian A, `Re Tr(A·K) = Tr(A·herm(K))`, so only this part of
    /// a reduction matters to the trace objective.
    pub fn hermitian_part(&self) -> Self {
        (*self + self.dagger()).scale(0.5)
    }

    /// Multiply every entry by a real scalar.
    pub fn scale(&self, s: f64) -> Self {
        let mut data = self.data;
        for e in &mut data {
            *e *= s;
        }
        Self { data }
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
    ///
    /// Display-only cleanup; never applied inside the optimization.
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

impl Add for Op2 {
    type Output = Op2;

    fn add(self, rhs: Op2) -> Op2 {
        let mut data = self.data;
        for (e, r) in data.iter_mut().zip(rhs.data.iter()) {
            *e += *r;
        }
        Op2 { data }
    }
}

impl Sub for Op2 {
    type Output = Op2;

    fn sub(self, rhs: Op2) -> Op2 {
        let mut data = self.data;
        for (e, r) in data.iter_mut().zip(rhs.data.iter()) {
            *e -= *r;
        }
        Op2 { data }
    }
}

impl Mul for Op2 {
    type Output = Op2;

    /// Matrix product.
    fn mul(self, rhs: Op2) -> Op2 {
        let mut out = Op2::zero();
        for i in 0..2 {
            for j in 0..2 {
                let mut acc = Complex64::new(0.0, 0.0);
                for k in 0..2 {
                    acc += self.at(i, k) * rhs.at(k, j);
                }
                out.data[2 * i + j] = acc;
            }
        }
        out
    }
}

impl fmt::Display for Op2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..2 {
            write!(f, "[")?;
            for col in 0..2 {
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
