//! Trip compatibility graph.
//!
//! Directed graph over trips: an edge from trip `i` to trip `j` means a
//! crew finishing `i` can continue with `j` — `i` ends at the station
//! where `j` starts, strictly before `j` starts. The edge carries the idle
//! (transition) time between the two trips.
//!
//! Nodes are dense 0-based indices into the trip slice the graph was built
//! from; the mapping to external trip IDs lives at the engine boundary.
//! Construction is a pure O(n²) pair scan with no solver dependency. The
//! graph is a DAG whenever trip times are consistent, but nothing here
//! assumes acyclicity — consumers must tolerate arbitrary shapes.

use std::collections::HashMap;

use crate::models::Trip;

/// A feasible trip-to-trip transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompatibilityEdge {
    /// Index of the earlier trip.
    pub from: usize,
    /// Index of the later trip.
    pub to: usize,
    /// Idle time between the trips (minutes).
    pub transition_min: i64,
}

/// Directed graph of feasible trip transitions.
#[derive(Debug, Clone)]
pub struct CompatibilityGraph {
    num_trips: usize,
    edges: Vec<CompatibilityEdge>,
    index: HashMap<(usize, usize), i64>,
}

impl CompatibilityGraph {
    /// Builds the graph from a trip slice.
    ///
    /// Adds edge `i → j` for every ordered pair with
    /// `trips[i].can_precede(&trips[j])`. An empty result (no edges) is
    /// valid: pricing then finds no multi-trip paths and the cover
    /// degrades to singleton duties.
    pub fn build(trips: &[Trip]) -> Self {
        let mut edges = Vec::new();
        let mut index = HashMap::new();
        for (i, a) in trips.iter().enumerate() {
            for (j, b) in trips.iter().enumerate() {
                if i != j && a.can_precede(b) {
                    let transition_min = a.transition_min(b);
                    edges.push(CompatibilityEdge {
                        from: i,
                        to: j,
                        transition_min,
                    });
                    index.insert((i, j), transition_min);
                }
            }
        }
        Self {
            num_trips: trips.len(),
            edges,
            index,
        }
    }

    /// Number of nodes (trips).
    #[inline]
    pub fn num_trips(&self) -> usize {
        self.num_trips
    }

    /// Number of feasible transitions.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// All edges, in deterministic (from, to) scan order.
    #[inline]
    pub fn edges(&self) -> &[CompatibilityEdge] {
        &self.edges
    }

    /// Whether trip `from` can be followed by trip `to`.
    #[inline]
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.index.contains_key(&(from, to))
    }

    /// Idle minutes between `from` and `to`, if the transition is feasible.
    #[inline]
    pub fn transition_min(&self, from: usize, to: usize) -> Option<i64> {
        self.index.get(&(from, to)).copied()
    }

    /// Whether `nodes` is a connected path (every consecutive pair is an
    /// edge). Singletons are paths; the empty sequence is not.
    pub fn is_path(&self, nodes: &[usize]) -> bool {
        if nodes.is_empty() {
            return false;
        }
        nodes.windows(2).all(|w| self.has_edge(w[0], w[1]))
    }
}
