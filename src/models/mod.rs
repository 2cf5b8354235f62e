//! Crew scheduling domain models.
//!
//! Core data types for the column-generation engine: the atomic unit of
//! work, the duty built from it, and the solved cover.
//!
//! # Domain Mappings
//!
//! | u-crewgen | Rail | Bus | Airline |
//! |-----------|------|-----|---------|
//! | Trip | Service run | Vehicle block leg | Flight leg |
//! | DutySchedule | Crew duty | Driver duty | Pairing |
//! | CoverSolution | Duty roster | Duty plan | Pairing solution |

mod schedule;
mod solution;
mod trip;

pub use schedule::DutySchedule;
pub use solution::{CoverSolution, Termination};
pub use trip::Trip;
