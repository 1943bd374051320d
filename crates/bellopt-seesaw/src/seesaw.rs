//! The alternating (see-saw) optimization loop.
//!
//! One cycle is: solve the state SDP, re-optimize both of Alice's settings
//! against that state, re-solve the state SDP, re-optimize both of Bob's
//! settings. Each step is the exact optimum of its own block, so across
//! full cycles the achieved value never decreases; the loop stops once the
//! relative improvement drops below the tolerance. Only a local optimum is
//! guaranteed — coverage of the non-convex landscape comes from random
//! restarts.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use bellopt_core::{DetectorModel, Op4};
use bellopt_solver::{DensitySolver, SpectralDensitySolver};

use crate::error::{SeesawError, SeesawResult};
use crate::measurement::{optimize_a1, optimize_a2, optimize_b1, optimize_b2};
use crate::settings::MeasurementSettings;
use crate::state::StateOptimizer;

/// Stopping parameters for the see-saw loop.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SeesawConfig {
    /// Relative-improvement threshold of the stopping test; must lie in
    /// (0, 1).
    pub tolerance: f64,
    /// Hard cap on full cycles; exhaustion is a distinct outcome, not a hang.
    pub max_cycles: usize,
}

impl Default for SeesawConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-4,
            max_cycles: 200,
        }
    }
}

/// A converged see-saw run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeesawOutcome {
    /// The achieved CHSH value.
    pub value: f64,
    /// The optimizing two-qubit state.
    pub state: Op4,
    /// The final measurement settings.
    pub settings: MeasurementSettings,
    /// Number of full cycles performed.
    pub cycles: usize,
    /// Achieved value after each cycle (non-decreasing).
    pub history: Vec<f64>,
}

/// Alternating state/measurement optimizer.
#[derive(Debug, Clone)]
pub struct SeesawOptimizer<S = SpectralDensitySolver> {
    state_opt: StateOptimizer<S>,
    config: SeesawConfig,
}

impl SeesawOptimizer<SpectralDensitySolver> {
    /// Optimizer with the default spectral backend and default stopping
    /// parameters.
    pub fn new(detector: DetectorModel) -> Self {
        Self {
            state_opt: StateOptimizer::new(detector),
            config: SeesawConfig::default(),
        }
    }
}

impl<S: DensitySolver> SeesawOptimizer<S> {
    /// Optimizer around a caller-supplied solver backend.
    pub fn with_solver(detector: DetectorModel, solver: S) -> Self {
        Self {
            state_opt: StateOptimizer::with_solver(detector, solver),
            config: SeesawConfig::default(),
        }
    }

    /// Override the stopping parameters.
    #[must_use]
    pub fn with_config(mut self, config: SeesawConfig) -> Self {
        self.config = config;
        self
    }

    /// Run one see-saw from fresh random settings drawn from `rng`.
    ///
    /// Seeding the generator makes the run reproducible. Errors isolate this
    /// run only: a solver failure or an exhausted cycle budget surfaces as a
    /// typed error and leaves no partial result behind.
    pub fn run<R: Rng>(&self, rng: &mut R) -> SeesawResult<SeesawOutcome> {
        let tolerance = self.config.tolerance;
        // tolerance < 1 keeps the sentinel-primed stopping test true on
        // entry, so a validated run always performs at least one cycle.
        if !tolerance.is_finite() || tolerance <= 0.0 || tolerance >= 1.0 {
            return Err(SeesawError::InvalidTolerance(tolerance));
        }

        let mut settings = MeasurementSettings::random(rng);
        let mut state = Op4::maximally_mixed();
        let mut previous = -1.0;
        let mut current = 0.0;
        let mut cycles = 0usize;
        let mut history = Vec::new();

        while (current - previous) / f64::max(1.0, previous) > tolerance {
            if cycles >= self.config.max_cycles {
                return Err(SeesawError::DidNotConverge { cycles });
            }
            previous = current;

            // State block, then Alice's block against the fresh state.
            let (value, rho) = self.state_opt.optimize(&settings)?;
            current = value;
            state = rho;
            settings.a1 = optimize_a1(&settings.b1, &settings.b2, &state)?;
            settings.a2 = optimize_a2(&settings.b1, &settings.b2, &state)?;

            // Re-solve the state, then Bob's block.
            let (value, rho) = self.state_opt.optimize(&settings)?;
            current = value;
            state = rho;
            settings.b1 = optimize_b1(&settings.a1, &settings.a2, &state)?;
            settings.b2 = optimize_b2(&settings.a1, &settings.a2, &state)?;

            cycles += 1;
            history.push(current);
            debug!(cycle = cycles, value = current, "see-saw cycle complete");
        }

        Ok(SeesawOutcome {
            value: current,
            state,
            settings,
            cycles,
            history,
        })
    }
}
