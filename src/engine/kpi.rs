//! Cover quality metrics (KPIs).
//!
//! Computes standard indicators from a converged cover and its input
//! trips. Pure reporting; no solver dependency.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Objective | Final master objective (duty cost total) |
//! | Schedules Selected | Columns with selection above tolerance |
//! | Singleton Share | Fraction of selected schedules covering one trip |
//! | Avg Trips per Duty | Mean trip count across selected schedules |
//! | Total Transition | Idle minutes between chained trips, selected schedules |

use std::collections::HashMap;

use crate::graph::CompatibilityGraph;
use crate::models::{CoverSolution, Trip};

/// A column counts as selected above this value.
const SELECTION_TOL: f64 = 1e-6;

/// Cover performance indicators.
#[derive(Debug, Clone)]
pub struct CoverKpi {
    /// Final master objective.
    pub objective: f64,
    /// Number of schedules with selection above tolerance.
    pub schedules_selected: usize,
    /// Fraction of selected schedules that cover a single trip.
    pub singleton_share: f64,
    /// Mean trips per selected schedule.
    pub avg_trips_per_duty: f64,
    /// Idle minutes between consecutive trips, summed over selected
    /// schedules.
    pub total_transition_min: i64,
}

impl CoverKpi {
    /// Computes KPIs from a cover, its input trips, and the graph the
    /// cover was built on.
    pub fn compute(solution: &CoverSolution, trips: &[Trip], graph: &CompatibilityGraph) -> Self {
        let index_of: HashMap<&str, usize> = trips
            .iter()
            .enumerate()
            .map(|(i, t)| (t.id.as_str(), i))
            .collect();

        let selected = solution.selected_schedules(SELECTION_TOL);
        let singletons = selected.iter().filter(|s| s.is_singleton()).count();
        let total_trips: usize = selected.iter().map(|s| s.trip_count()).sum();

        let mut total_transition_min = 0;
        for schedule in &selected {
            for pair in schedule.trip_ids.windows(2) {
                if let (Some(&from), Some(&to)) = (
                    index_of.get(pair[0].as_str()),
                    index_of.get(pair[1].as_str()),
                ) {
                    if let Some(idle) = graph.transition_min(from, to) {
                        total_transition_min += idle;
                    }
                }
            }
        }

        let count = selected.len();
        Self {
            objective: solution.objective,
            schedules_selected: count,
            singleton_share: if count == 0 {
                0.0
            } else {
                singletons as f64 / count as f64
            },
            avg_trips_per_duty: if count == 0 {
                0.0
            } else {
                total_trips as f64 / count as f64
            },
            total_transition_min,
        }
    }
}
