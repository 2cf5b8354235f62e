//! Failure taxonomy for the column-generation engine.
//!
//! Fatal conditions halt the loop immediately and surface as a structured
//! variant; callers match on the variant instead of parsing message text.
//! The absence of an improving column is *not* an error — the pricing
//! oracle reports it as `None` and the loop treats it as convergence.

use crate::validation::ValidationError;

/// Errors surfaced by the column-generation engine.
#[derive(thiserror::Error, Debug)]
pub enum SolveError {
    /// The restricted master LP failed to reach an optimum.
    ///
    /// The master always contains one singleton schedule per trip and is
    /// therefore feasible; retrying the same inputs cannot help.
    #[error("restricted master LP did not converge: {0}")]
    MasterSolve(String),

    /// The dual-reweighted pricing graph contains a negative-weight cycle.
    ///
    /// Dual prices from a correctly solved bounded LP cannot produce one,
    /// so this indicates an inconsistency between the compatibility graph
    /// and the master state.
    #[error("negative-weight cycle in the dual-reweighted pricing graph (trip index {trip})")]
    NegativeCycle {
        /// Index of a trip on the offending cycle.
        trip: usize,
    },

    /// A vector or index did not match the engine's trip dimension.
    ///
    /// Raised synchronously at the API boundary, never deferred into a
    /// solver call.
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// Input failed validation before the loop started.
    #[error("invalid input: {}", format_errors(.0))]
    InvalidInput(Vec<ValidationError>),

    /// The cancel flag was raised between iterations.
    #[error("solve cancelled after {iterations} iterations")]
    Cancelled {
        /// Master solves completed before cancellation.
        iterations: usize,
    },
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{ValidationError, ValidationErrorKind};

    #[test]
    fn test_display_joins_validation_messages() {
        let err = SolveError::InvalidInput(vec![
            ValidationError::new(ValidationErrorKind::DuplicateTripId, "Duplicate trip ID: T1"),
            ValidationError::new(ValidationErrorKind::EmptySchedule, "Seed duty 2 is empty"),
        ]);
        let text = err.to_string();
        assert!(text.contains("Duplicate trip ID: T1"));
        assert!(text.contains("Seed duty 2 is empty"));
    }

    #[test]
    fn test_variants_are_matchable() {
        let err = SolveError::Cancelled { iterations: 3 };
        match err {
            SolveError::Cancelled { iterations } => assert_eq!(iterations, 3),
            _ => panic!("wrong variant"),
        }
    }
}
