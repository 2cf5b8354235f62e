//! Crew duty scheduling via column generation.
//!
//! Partitions a fixed set of atomic service trips into a minimum-cost set
//! of feasible duty schedules, where a duty may cover several trips in a
//! row when each trip ends where and before the next one starts. The
//! engine solves the LP relaxation of the set-partitioning formulation by
//! Dantzig-Wolfe decomposition: a restricted master problem selects a
//! minimum-cost combination of known schedules, and a pricing search over
//! the trip compatibility graph proposes new schedules with negative
//! reduced cost until none remains.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Trip`, `DutySchedule`, `CoverSolution`
//! - **`graph`**: The trip compatibility graph (which trip can follow which)
//! - **`engine`**: The column-generation loop, master LP, and pricing oracle
//! - **`validation`**: Input integrity checks (duplicate IDs, seed duties, config)
//! - **`error`**: Structured failure taxonomy for the solve loop
//!
//! # Scope
//!
//! The engine solves the LP relaxation only; integrality enforcement
//! (branch-and-price) is out of scope, as are data ingestion, multi-depot
//! rules, and rescheduling after a solve.
//!
//! # References
//!
//! - Desaulniers, Desrosiers, Solomon (2005), "Column Generation"
//! - Barnhart et al. (1998), "Branch-and-Price: Column Generation for
//!   Solving Huge Integer Programs"
//! - Ernst et al. (2004), "Staff scheduling and rostering: A review"

pub mod engine;
pub mod error;
pub mod graph;
pub mod models;
pub mod validation;
