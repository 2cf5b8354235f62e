//! Input validation for crew scheduling problems.
//!
//! Checks structural integrity of trips, seed duties, and engine
//! configuration before solving. Detects:
//! - Duplicate trip IDs
//! - Seed duties referencing unknown trips
//! - Empty seed duties
//! - Seed duties whose trips do not chain into a feasible path
//! - Non-positive cost or tolerance settings
//!
//! All errors are collected and reported together, not first-failure.

use std::collections::{HashMap, HashSet};

use crate::engine::EngineConfig;
use crate::models::Trip;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two trips share the same ID.
    DuplicateTripId,
    /// A seed duty references a trip that doesn't exist.
    UnknownTripReference,
    /// A seed duty covers no trips.
    EmptySchedule,
    /// A seed duty's trips, in start-time order, are not pairwise
    /// compatible.
    IncompatibleSequence,
    /// An engine configuration value is out of range.
    InvalidConfig,
}

impl ValidationError {
    /// Creates a validation error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates trips and optional seed duties.
///
/// Checks:
/// 1. No duplicate trip IDs
/// 2. All seed duty references point to existing trips
/// 3. No empty seed duties
/// 4. Each seed duty forms a feasible path when ordered by start time
///
/// An empty trip set is valid (the engine returns an empty cover).
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(trips: &[Trip], seed_schedules: &[Vec<String>]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut trip_ids = HashSet::new();
    for t in trips {
        if !trip_ids.insert(t.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateTripId,
                format!("Duplicate trip ID: {}", t.id),
            ));
        }
    }

    let by_id: HashMap<&str, &Trip> = trips.iter().map(|t| (t.id.as_str(), t)).collect();

    for (i, seed) in seed_schedules.iter().enumerate() {
        if seed.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptySchedule,
                format!("Seed duty {i} covers no trips"),
            ));
            continue;
        }

        let mut resolved: Vec<&Trip> = Vec::with_capacity(seed.len());
        let mut complete = true;
        for id in seed {
            match by_id.get(id.as_str()) {
                Some(&t) => resolved.push(t),
                None => {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::UnknownTripReference,
                        format!("Seed duty {i} references unknown trip '{id}'"),
                    ));
                    complete = false;
                }
            }
        }
        if !complete {
            continue;
        }

        // Seed duties arrive as trip sets; they must chain once ordered
        // by start time.
        resolved.sort_by(|a, b| (a.start_min, &a.id).cmp(&(b.start_min, &b.id)));
        for pair in resolved.windows(2) {
            if !pair[0].can_precede(pair[1]) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::IncompatibleSequence,
                    format!(
                        "Seed duty {i}: trip '{}' cannot be followed by trip '{}'",
                        pair[0].id, pair[1].id
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates engine configuration values.
pub fn validate_config(config: &EngineConfig) -> ValidationResult {
    let mut errors = Vec::new();

    if !(config.schedule_cost.is_finite() && config.schedule_cost > 0.0) {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidConfig,
            format!(
                "Schedule cost must be a positive finite number, got {}",
                config.schedule_cost
            ),
        ));
    }
    if !(config.reduced_cost_tolerance.is_finite() && config.reduced_cost_tolerance >= 0.0) {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidConfig,
            format!(
                "Reduced-cost tolerance must be non-negative and finite, got {}",
                config.reduced_cost_tolerance
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_trips() -> Vec<Trip> {
        vec![
            Trip::new("T1", "A", 480, "B", 540),
            Trip::new("T2", "B", 570, "C", 630),
            Trip::new("T3", "C", 660, "D", 720),
        ]
    }

    #[test]
    fn test_valid_input() {
        let trips = sample_trips();
        assert!(validate_input(&trips, &[]).is_ok());
        assert!(validate_input(&trips, &[vec!["T1".into(), "T2".into()]]).is_ok());
    }

    #[test]
    fn test_seed_order_is_normalized_by_start_time() {
        let trips = sample_trips();
        // Out-of-order references are fine; the set chains by start time.
        let seeds = vec![vec!["T3".into(), "T1".into(), "T2".into()]];
        assert!(validate_input(&trips, &seeds).is_ok());
    }

    #[test]
    fn test_duplicate_trip_id() {
        let mut trips = sample_trips();
        trips.push(Trip::new("T1", "D", 700, "E", 760));
        let errors = validate_input(&trips, &[]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateTripId);
    }

    #[test]
    fn test_unknown_trip_reference() {
        let trips = sample_trips();
        let seeds = vec![vec!["T1".into(), "T9".into()]];
        let errors = validate_input(&trips, &seeds).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::UnknownTripReference);
    }

    #[test]
    fn test_empty_seed_schedule() {
        let trips = sample_trips();
        let errors = validate_input(&trips, &[vec![]]).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptySchedule);
    }

    #[test]
    fn test_incompatible_seed_sequence() {
        let trips = sample_trips();
        // T1 ends at B, T3 starts at C: no edge.
        let seeds = vec![vec!["T1".into(), "T3".into()]];
        let errors = validate_input(&trips, &seeds).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::IncompatibleSequence);
    }

    #[test]
    fn test_multiple_errors_collected() {
        let mut trips = sample_trips();
        trips.push(Trip::new("T2", "A", 0, "B", 10));
        let seeds = vec![vec![], vec!["T9".into()]];
        let errors = validate_input(&trips, &seeds).unwrap_err();
        assert!(errors.len() >= 3);
    }

    #[test]
    fn test_config_bounds() {
        let mut config = EngineConfig::default();
        assert!(validate_config(&config).is_ok());

        config.schedule_cost = 0.0;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidConfig);

        config.schedule_cost = 1.0;
        config.reduced_cost_tolerance = -1.0;
        assert!(validate_config(&config).is_err());
    }
}
