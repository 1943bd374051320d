//! Hermitian eigendecomposition backed by faer.

use num_complex::Complex64;

use crate::error::{SolverError, SolverResult};

/// Eigendecomposition of a Hermitian matrix.
///
/// Eigenvalues are real; `vectors` stores the orthonormal eigenvectors
/// column-wise in a row-major buffer, so `vectors[row * dim + k]` is the
/// `row`-th component of the eigenvector paired with `values[k]`.
#[derive(Debug, Clone)]
pub struct Eigen {
    /// Real eigenvalues, in the backend's (ascending) order.
    pub values: Vec<f64>,
    /// Row-major eigenvector matrix `U`.
    pub vectors: Vec<Complex64>,
    /// Matrix dimension.
    pub dim: usize,
}

impl Eigen {
    /// Index of the largest eigenvalue.
    pub fn argmax(&self) -> usize {
        let mut best = 0;
        for (k, v) in self.values.iter().enumerate() {
            if *v > self.values[best] {
                best = k;
            }
        }
        best
    }
}

/// Eigenvalues and eigenvectors of a Hermitian matrix.
///
/// Only the lower triangle of the input is read; the caller is responsible
/// for passing the Hermitian part if the source matrix is not Hermitian.
pub fn hermitian_eigen(data: &[Complex64], dim: usize) -> SolverResult<Eigen> {
    let expected = dim * dim;
    if dim == 0 || data.len() != expected {
        return Err(SolverError::Shape {
            dim,
            expected,
            got: data.len(),
        });
    }
    if !data.iter().all(|e| e.re.is_finite() && e.im.is_finite()) {
        return Err(SolverError::NonFinite);
    }

    use faer::Mat;
    use faer::complex_native::c64;

    let mat = Mat::<c64>::from_fn(dim, dim, |i, j| {
        let c = data[i * dim + j];
        c64::new(c.re, c.im)
    });

    let eigen = mat.selfadjoint_eigendecomposition(faer::Side::Lower);
    let s = eigen.s();
    let u = eigen.u();

    // Hermitian input — eigenvalues are real.
    let values: Vec<f64> = (0..dim).map(|i| s.column_vector().read(i).re).collect();

    let mut vectors = vec![Complex64::new(0.0, 0.0); dim * dim];
    for i in 0..dim {
        for j in 0..dim {
            let c = u.read(i, j);
            vectors[i * dim + j] = Complex64::new(c.re, c.im);
        }
    }

    Ok(Eigen {
        values,
        vectors,
        dim,
    })
}
