//! Reduced-cost pricing over the dual-reweighted compatibility graph.
//!
//! A candidate schedule's reduced cost is its own assignment cost minus
//! the sum of the dual prices of the trips it covers, so the most
//! promising candidate is the path carrying the most dual value. To find
//! it, every edge `u → v` is weighted `-(dual(u) + dual(v))` and the
//! oracle searches for the minimum-weight path over all start/end pairs:
//! a path of negative total weight covers trips whose dual value exceeds
//! the cost of a new schedule and is an improving column. (Interior trips
//! contribute to two edges, so the path weight is an optimistic estimate;
//! the loop compensates by re-checking candidates against the pool.)
//!
//! The search is one multi-source label-correcting pass per call, not a
//! per-pair enumeration: every node starts as a zero-cost source, edges
//! are relaxed under strict improvement in a fixed order (deterministic
//! results for deterministic duals), and paths settle in at most
//! `|V| - 1` rounds. Dual prices may be negative, so edge weights may be
//! too — a round-`|V|` improvement can only come from a negative-weight
//! cycle, which is rejected as a modeling inconsistency.

use std::cmp::Ordering;

use log::trace;

use crate::error::SolveError;
use crate::graph::CompatibilityGraph;

/// Guard against float churn masquerading as improvement.
const RELAX_EPS: f64 = 1e-12;

/// A candidate column found by pricing.
#[derive(Debug, Clone, PartialEq)]
pub struct PricedPath {
    /// Trip indices in path order (always at least two).
    pub trips: Vec<usize>,
    /// Total path weight; negative means an improving column.
    pub weight: f64,
}

/// Searches the dual-reweighted graph for improving columns.
#[derive(Debug, Clone)]
pub struct PricingOracle<'a> {
    graph: &'a CompatibilityGraph,
}

impl<'a> PricingOracle<'a> {
    /// Creates an oracle over the given graph.
    pub fn new(graph: &'a CompatibilityGraph) -> Self {
        Self { graph }
    }

    /// Finds the minimum-weight multi-trip path under the given duals.
    ///
    /// Returns `None` when the graph has no edges at all — a valid
    /// "no improving column" signal, not an error. When no path has
    /// negative weight, the cheapest single edge is returned so the
    /// caller can observe convergence from its non-negative weight.
    ///
    /// # Errors
    /// - [`SolveError::DimensionMismatch`] if `duals` does not have one
    ///   entry per trip.
    /// - [`SolveError::NegativeCycle`] if the reweighted graph contains a
    ///   negative-weight cycle.
    pub fn find_best_column(&self, duals: &[f64]) -> Result<Option<PricedPath>, SolveError> {
        let n = self.graph.num_trips();
        if duals.len() != n {
            return Err(SolveError::DimensionMismatch(format!(
                "expected {n} dual prices, got {}",
                duals.len()
            )));
        }
        let edges = self.graph.edges();
        if edges.is_empty() {
            return Ok(None);
        }

        let weight = |from: usize, to: usize| -(duals[from] + duals[to]);

        // dist[v]: weight of the cheapest walk ending at v from any start
        // (the empty walk costs zero). parent[v] is set only once a real
        // edge improved on that.
        let mut dist = vec![0.0_f64; n];
        let mut parent: Vec<Option<usize>> = vec![None; n];
        for round in 0..n {
            let mut improved = None;
            for e in edges {
                let cand = dist[e.from] + weight(e.from, e.to);
                if cand + RELAX_EPS < dist[e.to] {
                    dist[e.to] = cand;
                    parent[e.to] = Some(e.from);
                    improved = Some(e.to);
                }
            }
            match improved {
                None => break,
                // n settled rounds still improving: some walk grew past
                // every simple path.
                Some(trip) if round == n - 1 => {
                    return Err(SolveError::NegativeCycle { trip });
                }
                Some(_) => {}
            }
        }

        let mut best: Option<usize> = None;
        for v in 0..n {
            if parent[v].is_some() && best.is_none_or(|b| dist[v] < dist[b]) {
                best = Some(v);
            }
        }

        let Some(end) = best else {
            // Every edge weight is non-negative; report the cheapest
            // single transition.
            return Ok(self.cheapest_edge(&weight));
        };

        // Walk parents back to the start. Absent negative cycles the
        // chain is acyclic; a revisit means the labels are inconsistent.
        let mut trips = vec![end];
        let mut seen = vec![false; n];
        seen[end] = true;
        let mut current = end;
        while let Some(prev) = parent[current] {
            if seen[prev] {
                return Err(SolveError::NegativeCycle { trip: prev });
            }
            seen[prev] = true;
            trips.push(prev);
            current = prev;
        }
        trips.reverse();

        trace!(
            "pricing: best path {:?} with weight {:.6}",
            trips,
            dist[end]
        );
        Ok(Some(PricedPath {
            trips,
            weight: dist[end],
        }))
    }

    fn cheapest_edge(&self, weight: &dyn Fn(usize, usize) -> f64) -> Option<PricedPath> {
        self.graph
            .edges()
            .iter()
            .min_by(|a, b| {
                weight(a.from, a.to)
                    .partial_cmp(&weight(b.from, b.to))
                    .unwrap_or(Ordering::Equal)
                    .then_with(|| (a.from, a.to).cmp(&(b.from, b.to)))
            })
            .map(|e| PricedPath {
                trips: vec![e.from, e.to],
                weight: weight(e.from, e.to),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Trip;

    fn chain_graph() -> CompatibilityGraph {
        // T1 → T2 → T3, plus an isolated T4.
        CompatibilityGraph::build(&[
            Trip::new("T1", "A", 480, "B", 540),
            Trip::new("T2", "B", 570, "C", 630),
            Trip::new("T3", "C", 660, "D", 720),
            Trip::new("T4", "A", 480, "D", 780),
        ])
    }

    #[test]
    fn test_finds_the_single_negative_path() {
        let graph = CompatibilityGraph::build(&[
            Trip::new("T1", "A", 480, "B", 540),
            Trip::new("T2", "B", 570, "C", 630),
        ]);
        let oracle = PricingOracle::new(&graph);
        let path = oracle.find_best_column(&[1.0, 1.0]).unwrap().unwrap();
        assert_eq!(path.trips, vec![0, 1]);
        assert!((path.weight - (-2.0)).abs() < 1e-9);
    }

    #[test]
    fn test_prefers_the_longest_dual_mass() {
        let oracle_graph = chain_graph();
        let oracle = PricingOracle::new(&oracle_graph);
        let path = oracle
            .find_best_column(&[1.0, 1.0, 1.0, 1.0])
            .unwrap()
            .unwrap();
        // T1→T2→T3 weighs -(1+1) + -(1+1) = -4, beating any single edge.
        assert_eq!(path.trips, vec![0, 1, 2]);
        assert!((path.weight - (-4.0)).abs() < 1e-9);
    }

    #[test]
    fn test_zero_duals_fall_back_to_cheapest_edge() {
        let oracle_graph = chain_graph();
        let oracle = PricingOracle::new(&oracle_graph);
        let path = oracle
            .find_best_column(&[0.0, 0.0, 0.0, 0.0])
            .unwrap()
            .unwrap();
        assert_eq!(path.trips.len(), 2);
        assert!(path.weight >= 0.0);
    }

    #[test]
    fn test_mixed_duals_pick_the_negative_branch() {
        let oracle_graph = chain_graph();
        let oracle = PricingOracle::new(&oracle_graph);
        // Only the T2→T3 transition carries negative weight.
        let path = oracle
            .find_best_column(&[-2.0, 0.5, 1.0, 0.0])
            .unwrap()
            .unwrap();
        assert_eq!(path.trips, vec![1, 2]);
        assert!((path.weight - (-1.5)).abs() < 1e-9);
    }

    #[test]
    fn test_no_edges_means_no_column() {
        let graph = CompatibilityGraph::build(&[
            Trip::new("T1", "A", 480, "B", 540),
            Trip::new("T2", "D", 570, "C", 630),
        ]);
        let oracle = PricingOracle::new(&graph);
        assert!(oracle.find_best_column(&[1.0, 1.0]).unwrap().is_none());
    }

    #[test]
    fn test_dual_length_mismatch() {
        let oracle_graph = chain_graph();
        let oracle = PricingOracle::new(&oracle_graph);
        let err = oracle.find_best_column(&[1.0, 1.0]).unwrap_err();
        assert!(matches!(err, SolveError::DimensionMismatch(_)));
    }

    #[test]
    fn test_negative_cycle_is_fatal() {
        // Inconsistent trip times form a two-node cycle; positive duals
        // make both edges negative.
        let graph = CompatibilityGraph::build(&[
            Trip::new("T1", "A", 30, "B", 40),
            Trip::new("T2", "B", 50, "A", 5),
        ]);
        let oracle = PricingOracle::new(&graph);
        let err = oracle.find_best_column(&[1.0, 1.0]).unwrap_err();
        assert!(matches!(err, SolveError::NegativeCycle { .. }));
    }
}
