//! The column-generation loop.
//!
//! # Algorithm
//!
//! 1. Build the compatibility graph once and seed the master with the
//!    identity block (one singleton duty per trip), plus any seed duties.
//! 2. Solve the restricted master; keep the dual prices.
//! 3. Price: search the dual-reweighted graph for the best candidate path.
//! 4. If no candidate exists, its weight is non-negative, or its trip set
//!    is already in the pool — converged. Otherwise append it as a new
//!    column and repeat from 2.
//!
//! Duals are ephemeral: recomputed by every master solve, consumed by the
//! following pricing step, never carried across iterations. Each accepted
//! column differs from all previous ones, which bounds the loop by the
//! number of distinct simple paths in the graph; the configurable
//! iteration cap guards the remainder against numerical noise.
//!
//! # Reference
//! Desaulniers, Desrosiers, Solomon (2005), "Column Generation", Ch. 1

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use super::master::MasterProblem;
use super::pricing::PricingOracle;
use crate::error::SolveError;
use crate::graph::CompatibilityGraph;
use crate::models::{CoverSolution, DutySchedule, Termination, Trip};
use crate::validation::{validate_config, validate_input};

/// Engine tuning knobs.
///
/// All state the loop consumes is either input (`trips`, seeds) or lives
/// here; there are no module-level settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Assignment cost of every schedule, singletons and generated
    /// columns alike. The default models "minimize the number of duties";
    /// transition and service times do not enter the cost.
    pub schedule_cost: f64,
    /// Safety bound on master solves. `None` removes the cap (the loop is
    /// still finite, but floating-point duals can stretch it).
    pub max_iterations: Option<usize>,
    /// A candidate only counts as improving when its path weight is below
    /// the negated tolerance.
    pub reduced_cost_tolerance: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            schedule_cost: 1.0,
            max_iterations: Some(10_000),
            reduced_cost_tolerance: 1e-9,
        }
    }
}

/// Column-generation solver for the trip cover problem.
///
/// # Example
///
/// ```
/// use u_crewgen::engine::ColumnGenerationEngine;
/// use u_crewgen::models::Trip;
///
/// let trips = vec![
///     Trip::new("T1", "A", 480, "B", 540),
///     Trip::new("T2", "B", 570, "C", 630),
/// ];
/// let solution = ColumnGenerationEngine::new().run(&trips).unwrap();
/// // One crew covers both trips: cheaper than two singleton duties.
/// assert!(solution.objective < 2.0);
/// assert!((solution.coverage_of("T1") - 1.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ColumnGenerationEngine {
    config: EngineConfig,
    seed_schedules: Vec<Vec<String>>,
    cancel: Option<Arc<AtomicBool>>,
}

impl ColumnGenerationEngine {
    /// Creates an engine with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the configuration.
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Adds known duties (trip-id sets) as starting columns beyond the
    /// singletons. Each must chain into a feasible path by start time.
    pub fn with_seed_schedules(mut self, seeds: Vec<Vec<String>>) -> Self {
        self.seed_schedules = seeds;
        self
    }

    /// Installs a cooperative cancel flag, checked once per iteration —
    /// never inside a solver call.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Runs the loop to convergence and returns the minimum-cost cover.
    ///
    /// # Errors
    /// [`SolveError::InvalidInput`] for rejected input,
    /// [`SolveError::MasterSolve`] / [`SolveError::NegativeCycle`] for
    /// fatal solver conditions, [`SolveError::Cancelled`] when the cancel
    /// flag is raised.
    pub fn run(&self, trips: &[Trip]) -> Result<CoverSolution, SolveError> {
        let mut errors = Vec::new();
        if let Err(e) = validate_config(&self.config) {
            errors.extend(e);
        }
        if let Err(e) = validate_input(trips, &self.seed_schedules) {
            errors.extend(e);
        }
        if !errors.is_empty() {
            return Err(SolveError::InvalidInput(errors));
        }

        if trips.is_empty() {
            return Ok(CoverSolution {
                schedules: Vec::new(),
                objective: 0.0,
                iterations: 0,
                termination: Termination::Optimal,
                objective_trace: Vec::new(),
            });
        }

        let graph = CompatibilityGraph::build(trips);
        info!(
            "built compatibility graph: {} trips, {} transitions",
            trips.len(),
            graph.edge_count()
        );

        let index_of: HashMap<&str, usize> = trips
            .iter()
            .enumerate()
            .map(|(i, t)| (t.id.as_str(), i))
            .collect();

        let mut master = MasterProblem::new(trips.len(), self.config.schedule_cost);
        for seed in &self.seed_schedules {
            let mut path: Vec<usize> = seed.iter().map(|id| index_of[id.as_str()]).collect();
            path.sort_by(|&a, &b| {
                (trips[a].start_min, &trips[a].id).cmp(&(trips[b].start_min, &trips[b].id))
            });
            if master.push_column(&path, self.config.schedule_cost)? {
                debug!("seeded duty {path:?}");
            }
        }

        let oracle = PricingOracle::new(&graph);
        let mut trace = Vec::new();
        let mut iterations = 0usize;
        let mut termination = Termination::Optimal;

        let last = loop {
            if let Some(flag) = &self.cancel {
                if flag.load(Ordering::Relaxed) {
                    return Err(SolveError::Cancelled { iterations });
                }
            }

            let rmp = master.solve()?;
            iterations += 1;
            trace.push(rmp.objective);
            info!(
                "iteration {iterations}: objective {:.6} with {} columns",
                rmp.objective,
                master.num_columns()
            );

            match oracle.find_best_column(&rmp.duals)? {
                None => {
                    debug!("pricing: no multi-trip path exists");
                    break rmp;
                }
                Some(path) if path.weight >= -self.config.reduced_cost_tolerance => {
                    debug!(
                        "pricing: best path weight {:.6} is non-negative",
                        path.weight
                    );
                    break rmp;
                }
                Some(path) => {
                    if self
                        .config
                        .max_iterations
                        .is_some_and(|limit| iterations >= limit)
                    {
                        warn!("iteration cap reached before convergence");
                        termination = Termination::IterationLimit;
                        break rmp;
                    }
                    if !master
                        .push_column(&path.trips, self.config.schedule_cost)?
                    {
                        debug!("pricing: best path is already a column");
                        break rmp;
                    }
                    debug!(
                        "added column {:?} with path weight {:.6}",
                        path.trips, path.weight
                    );
                }
            }
        };

        let schedules: Vec<DutySchedule> = master
            .columns()
            .iter()
            .zip(master.costs())
            .zip(&last.primal)
            .map(|((col, cost), selection)| {
                let ids = col.iter().map(|&t| trips[t].id.clone()).collect();
                DutySchedule::new(ids, *cost).with_selection(*selection)
            })
            .collect();

        Ok(CoverSolution {
            schedules,
            objective: last.objective,
            iterations,
            termination,
            objective_trace: trace,
        })
    }
}
