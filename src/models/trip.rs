//! Trip (atomic service segment) model.
//!
//! A trip is the smallest assignable unit of work: one service run with a
//! fixed origin, destination, and times. Duties are built by chaining
//! compatible trips; trips themselves are never split or reordered.
//!
//! # Time Representation
//! All times are in minutes relative to a scheduling epoch (t=0). The
//! consumer defines what t=0 means (e.g., midnight, start of the service
//! day). Only ordering and differences are used.
//!
//! # Reference
//! Ernst et al. (2004), "Staff scheduling and rostering: A review", §2

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An atomic service trip.
///
/// Immutable once loaded; the engine assigns every trip to exactly one
/// duty schedule. IDs are opaque strings — internal solver indices are
/// never exposed through the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trip {
    /// Unique trip identifier.
    pub id: String,
    /// Station where the trip starts.
    pub start_station: String,
    /// Departure time (minutes from epoch).
    pub start_min: i64,
    /// Station where the trip ends.
    pub end_station: String,
    /// Arrival time (minutes from epoch).
    pub end_min: i64,
    /// Direction tag (e.g., "Up" / "Down"). Informational.
    pub direction: String,
    /// Minimum service duration (minutes).
    pub service_min: i64,
    /// Trip category (e.g., "Express" / "Local"). Informational.
    pub category: String,
    /// Domain-specific key-value metadata.
    pub attributes: HashMap<String, String>,
}

impl Trip {
    /// Creates a new trip.
    ///
    /// The service duration defaults to the scheduled travel time
    /// (`end_min - start_min`); override with [`with_service_min`](Self::with_service_min).
    pub fn new(
        id: impl Into<String>,
        start_station: impl Into<String>,
        start_min: i64,
        end_station: impl Into<String>,
        end_min: i64,
    ) -> Self {
        Self {
            id: id.into(),
            start_station: start_station.into(),
            start_min,
            end_station: end_station.into(),
            end_min,
            direction: String::new(),
            service_min: end_min - start_min,
            category: String::new(),
            attributes: HashMap::new(),
        }
    }

    /// Sets the direction tag.
    pub fn with_direction(mut self, direction: impl Into<String>) -> Self {
        self.direction = direction.into();
        self
    }

    /// Sets the minimum service duration.
    pub fn with_service_min(mut self, service_min: i64) -> Self {
        self.service_min = service_min;
        self
    }

    /// Sets the category tag.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Adds a metadata attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Scheduled travel time (minutes).
    #[inline]
    pub fn duration_min(&self) -> i64 {
        self.end_min - self.start_min
    }

    /// Whether this trip can be followed by `other` in the same duty.
    ///
    /// True iff this trip ends at the station where `other` starts,
    /// strictly before `other` starts. Equal times do not chain.
    #[inline]
    pub fn can_precede(&self, other: &Trip) -> bool {
        self.end_station == other.start_station && self.end_min < other.start_min
    }

    /// Idle time between this trip's arrival and `other`'s departure (minutes).
    ///
    /// Meaningful only when [`can_precede`](Self::can_precede) holds.
    #[inline]
    pub fn transition_min(&self, other: &Trip) -> i64 {
        other.start_min - self.end_min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let t = Trip::new("T1", "A", 480, "B", 540);
        assert_eq!(t.id, "T1");
        assert_eq!(t.duration_min(), 60);
        assert_eq!(t.service_min, 60);
        assert!(t.direction.is_empty());
        assert!(t.category.is_empty());
    }

    #[test]
    fn test_builder_overrides() {
        let t = Trip::new("T1", "A", 480, "B", 540)
            .with_direction("Up")
            .with_service_min(45)
            .with_category("Express")
            .with_attribute("rake", "101");
        assert_eq!(t.direction, "Up");
        assert_eq!(t.service_min, 45);
        assert_eq!(t.category, "Express");
        assert_eq!(t.attributes["rake"], "101");
    }

    #[test]
    fn test_can_precede_same_station_future_time() {
        let a = Trip::new("T1", "A", 480, "B", 540);
        let b = Trip::new("T2", "B", 570, "C", 630);
        assert!(a.can_precede(&b));
        assert_eq!(a.transition_min(&b), 30);
    }

    #[test]
    fn test_can_precede_rejects_station_mismatch() {
        let a = Trip::new("T1", "A", 480, "B", 540);
        let b = Trip::new("T2", "C", 600, "D", 660);
        assert!(!a.can_precede(&b));
    }

    #[test]
    fn test_can_precede_rejects_overlapping_times() {
        let a = Trip::new("T1", "A", 480, "B", 540);
        let b = Trip::new("T2", "B", 520, "C", 580);
        assert!(!a.can_precede(&b));
    }

    #[test]
    fn test_can_precede_rejects_equal_boundary() {
        // Arrival exactly at departure does not chain.
        let a = Trip::new("T1", "A", 480, "B", 540);
        let b = Trip::new("T2", "B", 540, "C", 600);
        assert!(!a.can_precede(&b));
    }

    #[test]
    fn test_can_precede_is_directional() {
        let a = Trip::new("T1", "A", 480, "B", 540);
        let b = Trip::new("T2", "B", 570, "C", 630);
        assert!(!b.can_precede(&a));
    }
}
