//! Restricted master problem (RMP).
//!
//! Maintains the growing schedule pool and solves, on demand, the LP
//!
//! ```text
//! min  cᵀx   s.t.  A·x = 1,  x ≥ 0
//! ```
//!
//! where `A` is the 0/1 trip-by-schedule incidence matrix. The equality
//! rows model *exact* one-time coverage (set partitioning, not covering);
//! selection variables have no upper bound because only the LP relaxation
//! is solved. The pool always contains the identity block — one singleton
//! schedule per trip — so the master is feasible by construction. Columns
//! accumulate monotonically; none are ever removed.
//!
//! Each solve also reports one dual price per coverage row: the marginal
//! cost of covering that trip once more, which is what the pricing step
//! consumes. The duals come from solving the explicit dual program
//! (`max 1ᵀy` s.t. `Aᵀy ≤ c`, `y` free) over the same modeling layer,
//! which pins the sign convention regardless of the LP backend: by strong
//! duality the prices sum to the primal objective, and that identity is
//! checked after every solve.

use std::collections::HashSet;

use good_lp::{
    constraint, default_solver, variable, Expression, ProblemVariables, Solution, SolverModel,
    Variable,
};

use crate::error::SolveError;

/// Relative primal/dual objective agreement required from one solve.
const DUALITY_GAP_TOL: f64 = 1e-6;

/// Result of one master solve.
#[derive(Debug, Clone)]
pub struct RmpSolution {
    /// Selection value per column, in column insertion order.
    pub primal: Vec<f64>,
    /// Optimal objective value.
    pub objective: f64,
    /// Dual price per trip (coverage row).
    pub duals: Vec<f64>,
}

/// The restricted master problem over the current schedule pool.
#[derive(Debug, Clone)]
pub struct MasterProblem {
    num_trips: usize,
    /// Columns in insertion order, each an ordered trip-index path.
    columns: Vec<Vec<usize>>,
    costs: Vec<f64>,
    /// Canonical (sorted) trip sets, for duplicate detection.
    keys: HashSet<Vec<usize>>,
}

impl MasterProblem {
    /// Creates the master seeded with the identity block: one singleton
    /// schedule per trip at the given cost. Succeeds unconditionally —
    /// this is the trivial fully-disaggregated feasible cover.
    pub fn new(num_trips: usize, schedule_cost: f64) -> Self {
        let mut master = Self {
            num_trips,
            columns: Vec::with_capacity(num_trips),
            costs: Vec::with_capacity(num_trips),
            keys: HashSet::with_capacity(num_trips),
        };
        for trip in 0..num_trips {
            master.keys.insert(vec![trip]);
            master.columns.push(vec![trip]);
            master.costs.push(schedule_cost);
        }
        master
    }

    /// Number of trips (coverage rows).
    #[inline]
    pub fn num_trips(&self) -> usize {
        self.num_trips
    }

    /// Number of columns in the pool.
    #[inline]
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Columns in insertion order.
    #[inline]
    pub fn columns(&self) -> &[Vec<usize>] {
        &self.columns
    }

    /// Column costs, parallel to [`columns`](Self::columns).
    #[inline]
    pub fn costs(&self) -> &[f64] {
        &self.costs
    }

    /// Whether the pool already holds a column with this trip set.
    pub fn contains(&self, trips: &[usize]) -> bool {
        let mut key = trips.to_vec();
        key.sort_unstable();
        self.keys.contains(&key)
    }

    /// Appends one column to the pool.
    ///
    /// Returns `Ok(true)` when the column was added, `Ok(false)` when a
    /// column with the same trip set is already present (the pool is left
    /// unchanged). Out-of-range indices and repeated trips are rejected
    /// synchronously with [`SolveError::DimensionMismatch`].
    pub fn push_column(&mut self, trips: &[usize], cost: f64) -> Result<bool, SolveError> {
        if trips.is_empty() {
            return Err(SolveError::DimensionMismatch(
                "column covers no trips".into(),
            ));
        }
        let mut key = trips.to_vec();
        key.sort_unstable();
        if let Some(&t) = key.iter().find(|&&t| t >= self.num_trips) {
            return Err(SolveError::DimensionMismatch(format!(
                "trip index {t} out of range for {} trips",
                self.num_trips
            )));
        }
        if key.windows(2).any(|w| w[0] == w[1]) {
            return Err(SolveError::DimensionMismatch(
                "column repeats a trip".into(),
            ));
        }
        if !self.keys.insert(key) {
            return Ok(false);
        }
        self.columns.push(trips.to_vec());
        self.costs.push(cost);
        Ok(true)
    }

    /// Solves the current restriction and returns primal values, the
    /// objective, and one dual price per trip.
    pub fn solve(&self) -> Result<RmpSolution, SolveError> {
        if self.num_trips == 0 {
            return Ok(RmpSolution {
                primal: Vec::new(),
                objective: 0.0,
                duals: Vec::new(),
            });
        }

        let (primal, objective) = self.solve_primal()?;
        let duals = self.solve_dual()?;

        // Strong duality cross-check; disagreement means one of the two
        // solves silently failed to converge.
        let dual_objective: f64 = duals.iter().sum();
        let gap = (dual_objective - objective).abs();
        if gap > DUALITY_GAP_TOL * (1.0 + objective.abs()) {
            return Err(SolveError::MasterSolve(format!(
                "primal/dual objective gap {gap:.3e} (primal {objective:.6}, dual {dual_objective:.6})"
            )));
        }

        Ok(RmpSolution {
            primal,
            objective,
            duals,
        })
    }

    fn solve_primal(&self) -> Result<(Vec<f64>, f64), SolveError> {
        let mut vars = ProblemVariables::new();
        let xs: Vec<Variable> = (0..self.columns.len())
            .map(|_| vars.add(variable().min(0.0)))
            .collect();

        let objective = xs
            .iter()
            .zip(&self.costs)
            .fold(Expression::from(0.0), |acc, (x, c)| acc + *x * *c);

        let mut model = vars.minimise(objective).using(default_solver);
        for trip in 0..self.num_trips {
            let coverage = self
                .columns
                .iter()
                .zip(&xs)
                .filter(|(col, _)| col.contains(&trip))
                .fold(Expression::from(0.0), |acc, (_, x)| acc + *x);
            model.add_constraint(constraint!(coverage == 1.0));
        }

        let sol = model
            .solve()
            .map_err(|e| SolveError::MasterSolve(e.to_string()))?;

        let primal: Vec<f64> = xs.iter().map(|x| sol.value(*x)).collect();
        let objective = primal.iter().zip(&self.costs).map(|(x, c)| x * c).sum();
        Ok((primal, objective))
    }

    fn solve_dual(&self) -> Result<Vec<f64>, SolveError> {
        let mut vars = ProblemVariables::new();
        // Duals of equality rows are free variables.
        let ys: Vec<Variable> = (0..self.num_trips)
            .map(|_| vars.add(variable()))
            .collect();

        let objective = ys.iter().fold(Expression::from(0.0), |acc, y| acc + *y);

        let mut model = vars.maximise(objective).using(default_solver);
        for (col, cost) in self.columns.iter().zip(&self.costs) {
            let covered = col
                .iter()
                .fold(Expression::from(0.0), |acc, &t| acc + ys[t]);
            model.add_constraint(constraint!(covered <= *cost));
        }

        let sol = model
            .solve()
            .map_err(|e| SolveError::MasterSolve(e.to_string()))?;

        Ok(ys.iter().map(|y| sol.value(*y)).collect())
    }
}
