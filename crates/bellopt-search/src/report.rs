//! Sweep report structures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use bellopt_core::Op4;
use bellopt_seesaw::MeasurementSettings;

/// A recorded CHSH violation at one candidate efficiency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Violation {
    /// The detector efficiency at which the violation was found.
    pub efficiency: f64,
    /// The converged CHSH value.
    pub value: f64,
    /// The optimizing two-qubit state.
    pub state: Op4,
    /// The optimizing measurement settings.
    pub settings: MeasurementSettings,
    /// Index of the winning restart (lowest successful index).
    pub restart: usize,
    /// See-saw cycles the winning restart took.
    pub cycles: usize,
}

impl Violation {
    /// Copy with near-zero entries of the state and settings zeroed.
    pub fn chopped(&self, threshold: f64) -> Self {
        Self {
            state: self.state.chop(threshold),
            settings: self.settings.chop(threshold),
            ..self.clone()
        }
    }
}

/// Outcome of one candidate efficiency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateReport {
    /// The candidate efficiency.
    pub efficiency: f64,
    /// The first violating value, if any restart succeeded.
    pub violation: Option<f64>,
    /// Index of the winning restart, if any.
    pub winning_restart: Option<usize>,
    /// Restart budget for this candidate.
    pub restart_budget: usize,
    /// Restarts that errored (solver failure or cycle-budget exhaustion).
    ///
    /// Best-effort count: restarts cancelled by an earlier success are not
    /// included.
    pub failed_restarts: usize,
}

/// Complete report of one efficiency sweep.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepReport {
    /// Timestamp of the sweep.
    pub generated_at: DateTime<Utc>,
    /// Sweep seed all restart streams derive from.
    pub seed: u64,
    /// Restart budget per candidate.
    pub restarts_per_candidate: usize,
    /// The bound a value must exceed to count as a violation.
    pub classical_bound: f64,
    /// Per-candidate outcomes, in sweep order.
    pub candidates: Vec<CandidateReport>,
    /// The lowest-efficiency violation found, or `None` if every candidate
    /// failed ("no threshold found in range").
    pub best: Option<Violation>,
}
