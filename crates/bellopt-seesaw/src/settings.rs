//! The four measurement settings of a CHSH experiment.

use rand::Rng;
use serde::{Deserialize, Serialize};

use bellopt_core::{Op2, random_observable};

/// Alice's and Bob's dichotomic measurement settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeasurementSettings {
    /// Alice's first setting.
    pub a1: Op2,
    /// Alice's second setting.
    pub a2: Op2,
    /// Bob's first setting.
    pub b1: Op2,
    /// Bob's second setting.
    pub b2: Op2,
}

impl MeasurementSettings {
    /// Four independent uniformly random settings.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            a1: random_observable(rng),
            a2: random_observable(rng),
            b1: random_observable(rng),
            b2: random_observable(rng),
        }
    }

    /// The canonical Tsirelson-optimal settings:
    /// `A1 = Z`, `A2 = X`, `B1 = (Z+X)/√2`, `B2 = (Z-X)/√2`.
    pub fn chsh() -> Self {
        let s = std::f64::consts::FRAC_1_SQRT_2;
        Self {
            a1: Op2::z(),
            a2: Op2::x(),
            b1: (Op2::z() + Op2::x()).scale(s),
            b2: (Op2::z() - Op2::x()).scale(s),
        }
    }

    /// Zero near-zero entries of every setting for display.
    pub fn chop(&self, threshold: f64) -> Self {
        Self {
            a1: self.a1.chop(threshold),
            a2: self.a2.chop(threshold),
            b1: self.b1.chop(threshold),
            b2: self.b2.chop(threshold),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_settings_are_dichotomic() {
        let s = MeasurementSettings::chsh();
        for op in [s.a1, s.a2, s.b1, s.b2] {
            // ±1 spectrum ⇔ Hermitian and squares to identity.
            assert!(op.asymmetry() < 1e-12);
            assert!((op * op).approx_eq(&Op2::identity(), 1e-12));
        }
    }
}
