//! Column-generation solve engine.
//!
//! Alternates two moves until neither helps: the restricted master LP
//! selects the cheapest combination of known duty schedules covering
//! every trip exactly once, and the pricing oracle searches the
//! dual-reweighted compatibility graph for a new schedule with negative
//! reduced cost. The loop is inherently sequential — every pricing step
//! consumes the duals of the preceding master solve.
//!
//! # Submodules
//!
//! - `colgen`: [`ColumnGenerationEngine`] and [`EngineConfig`]
//! - `master`: [`MasterProblem`], the restricted master LP
//! - `pricing`: [`PricingOracle`], the reduced-cost path search
//! - `kpi`: [`CoverKpi`], cover quality metrics
//!
//! # Reference
//! Desaulniers, Desrosiers, Solomon (2005), "Column Generation"

mod colgen;
mod kpi;
mod master;
mod pricing;

pub use colgen::{ColumnGenerationEngine, EngineConfig};
pub use kpi::CoverKpi;
pub use master::{MasterProblem, RmpSolution};
pub use pricing::{PricedPath, PricingOracle};
