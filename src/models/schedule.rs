//! Duty schedule (column) model.
//!
//! A duty schedule is one feasible sequence of compatible trips assignable
//! to a single crew. In the master problem each schedule is a column: a
//! 0/1 incidence over trips with a scalar assignment cost. The LP
//! relaxation may select schedules fractionally, so each schedule carries
//! the selection value from the final master solve.

use serde::{Deserialize, Serialize};

/// One feasible duty: an ordered sequence of trips for a single crew.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DutySchedule {
    /// Covered trips, in service order.
    pub trip_ids: Vec<String>,
    /// Assignment cost of this schedule.
    pub cost: f64,
    /// Selection value from the final master solve (0.0..1.0, fractional
    /// values possible under the LP relaxation).
    pub selection: f64,
}

impl DutySchedule {
    /// Creates a schedule with zero selection value.
    pub fn new(trip_ids: Vec<String>, cost: f64) -> Self {
        Self {
            trip_ids,
            cost,
            selection: 0.0,
        }
    }

    /// Sets the selection value.
    pub fn with_selection(mut self, selection: f64) -> Self {
        self.selection = selection;
        self
    }

    /// Number of trips covered.
    #[inline]
    pub fn trip_count(&self) -> usize {
        self.trip_ids.len()
    }

    /// Whether this schedule covers a single trip.
    #[inline]
    pub fn is_singleton(&self) -> bool {
        self.trip_ids.len() == 1
    }

    /// Whether this schedule covers the given trip.
    pub fn covers(&self, trip_id: &str) -> bool {
        self.trip_ids.iter().any(|id| id == trip_id)
    }
}
