//! Cover solution model.
//!
//! The result of a converged column-generation run: the full column pool
//! (columns accumulate monotonically and are never removed), the selection
//! value of each column from the final master solve, and the objective
//! trajectory across iterations.

use serde::{Deserialize, Serialize};

use super::DutySchedule;

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Termination {
    /// No improving column remains.
    Optimal,
    /// The configured iteration cap was reached; the reported cover is
    /// feasible but may not be LP-optimal.
    IterationLimit,
}

/// A converged minimum-cost cover.
///
/// Every trip is covered exactly once: for each trip, the selection values
/// of the schedules covering it sum to one (within solver tolerance).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverSolution {
    /// All generated schedules with their final selection values.
    pub schedules: Vec<DutySchedule>,
    /// Objective value of the final master solve.
    pub objective: f64,
    /// Number of master solves performed.
    pub iterations: usize,
    /// Why the loop stopped.
    pub termination: Termination,
    /// Objective value after each master solve. Non-increasing.
    pub objective_trace: Vec<f64>,
}

impl CoverSolution {
    /// Schedules with selection value above `tol`.
    pub fn selected_schedules(&self, tol: f64) -> Vec<&DutySchedule> {
        self.schedules
            .iter()
            .filter(|s| s.selection > tol)
            .collect()
    }

    /// Sum of selection values over schedules covering `trip_id`.
    ///
    /// Equals 1.0 (within solver tolerance) for every input trip.
    pub fn coverage_of(&self, trip_id: &str) -> f64 {
        self.schedules
            .iter()
            .filter(|s| s.covers(trip_id))
            .map(|s| s.selection)
            .sum()
    }

    /// Whether the loop proved LP optimality.
    #[inline]
    pub fn is_optimal(&self) -> bool {
        self.termination == Termination::Optimal
    }
}
