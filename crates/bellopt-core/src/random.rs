//! Random measurement-setting sampling.
//!
//! A uniformly random dichotomic observable is `v·σ` for a Bloch vector `v`
//! drawn uniformly on the unit sphere; normalising a 3-vector of independent
//! Gaussians gives exactly that distribution.
//!
//! The generator is caller-supplied so each restart of the non-convex search
//! can run on its own seeded stream:
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use bellopt_core::random_observable;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let a = random_observable(&mut rng);
//! assert!(a.asymmetry() < 1e-12);
//! ```

use rand::Rng;
use rand_distr::StandardNormal;

use crate::op2::Op2;

/// Sample a uniformly random dichotomic observable (unit Bloch vector · σ).
pub fn random_observable<R: Rng>(rng: &mut R) -> Op2 {
    loop {
        let v: [f64; 3] = [
            rng.sample(StandardNormal),
            rng.sample(StandardNormal),
            rng.sample(StandardNormal),
        ];
        let norm = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
        // A near-zero draw has no usable direction; redraw.
        if norm > 1e-12 {
            return Op2::bloch([v[0] / norm, v[1] / norm, v[2] / norm]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn sampled_observable_squares_to_identity() {
        // (v·σ)² = |v|²·I, so a unit Bloch vector gives exactly I.
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..32 {
            let a = random_observable(&mut rng);
            assert!((a * a).approx_eq(&Op2::identity(), 1e-12));
        }
    }

    #[test]
    fn same_seed_gives_same_observable() {
        let a = random_observable(&mut StdRng::seed_from_u64(123));
        let b = random_observable(&mut StdRng::seed_from_u64(123));
        assert_eq!(a, b);
    }
}
