//! Trip plan records.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{LegEstimate, LocationId, TripId};

/// Lifecycle state of a trip plan.
///
/// Only ever moves forward: `Planning` → `Requesting` → `Completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TripStatus {
    /// Route computed and stored; no leg has been requested yet.
    Planning,
    /// The party is moving stop to stop; each advance requests a ride.
    Requesting,
    /// The party is back at the starting point. Terminal.
    Completed,
}

impl TripStatus {
    /// Whether this status admits no further transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, TripStatus::Completed)
    }
}

impl fmt::Display for TripStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TripStatus::Planning => "planning",
            TripStatus::Requesting => "requesting",
            TripStatus::Completed => "completed",
        };
        f.write_str(s)
    }
}

/// Cumulative ride cost, duration and distance for a plan.
///
/// Legs only ever add, so totals are monotonically non-decreasing over
/// a plan's lifetime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteTotals {
    pub cost: i64,
    pub duration: i64,
    pub distance: f64,
}

impl RouteTotals {
    /// Accrue one leg's estimate.
    pub fn add_leg(&mut self, estimate: &LegEstimate) {
        self.cost += estimate.cost;
        self.duration += estimate.duration;
        self.distance += estimate.distance;
    }
}

/// A planned multi-stop trip and its progress cursor.
///
/// `route` is fixed once planning completes; `next_destination` and
/// `status` advance one transition per request. The record is the only
/// state the progress engine keeps between requests, so `status` plus
/// `next_destination` fully determine the next transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripPlan {
    pub id: TripId,
    pub status: TripStatus,
    pub starting_from: LocationId,
    /// Ordered stop sequence; a permutation of the requested stop set.
    pub route: Vec<LocationId>,
    /// Where the party is headed next. Unset until the first advance.
    pub next_destination: Option<LocationId>,
    /// Round-trip totals, closing leg included. Fixed at planning time.
    pub totals: RouteTotals,
    /// Wait-time ETA returned by the most recent ride request.
    pub wait_eta: Option<i64>,
    /// Sequence number for conditional store updates.
    pub version: u64,
}

impl TripPlan {
    /// Create a freshly planned trip, before any advance.
    pub fn new(
        id: TripId,
        starting_from: LocationId,
        route: Vec<LocationId>,
        totals: RouteTotals,
    ) -> Self {
        Self {
            id,
            status: TripStatus::Planning,
            starting_from,
            route,
            next_destination: None,
            totals,
            wait_eta: None,
            version: 0,
        }
    }

    /// Position of a location on the planned route, if it is on it.
    pub fn route_position(&self, location: &LocationId) -> Option<usize> {
        self.route.iter().position(|stop| stop == location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leg(cost: i64, duration: i64, distance: f64) -> LegEstimate {
        LegEstimate {
            cost,
            duration,
            distance,
            product_id: "product".to_string(),
        }
    }

    #[test]
    fn status_display() {
        assert_eq!(TripStatus::Planning.to_string(), "planning");
        assert_eq!(TripStatus::Requesting.to_string(), "requesting");
        assert_eq!(TripStatus::Completed.to_string(), "completed");
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&TripStatus::Requesting).unwrap(),
            "\"requesting\""
        );
        let back: TripStatus = serde_json::from_str("\"completed\"").unwrap();
        assert_eq!(back, TripStatus::Completed);
    }

    #[test]
    fn only_completed_is_terminal() {
        assert!(!TripStatus::Planning.is_terminal());
        assert!(!TripStatus::Requesting.is_terminal());
        assert!(TripStatus::Completed.is_terminal());
    }

    #[test]
    fn totals_accumulate() {
        let mut totals = RouteTotals::default();
        totals.add_leg(&leg(5, 600, 2.0));
        totals.add_leg(&leg(2, 300, 1.5));

        assert_eq!(totals.cost, 7);
        assert_eq!(totals.duration, 900);
        assert!((totals.distance - 3.5).abs() < 1e-9);
    }

    #[test]
    fn new_trip_starts_in_planning() {
        let start = LocationId::generate();
        let stops = vec![LocationId::generate(), LocationId::generate()];
        let trip = TripPlan::new(TripId::generate(), start, stops.clone(), RouteTotals::default());

        assert_eq!(trip.status, TripStatus::Planning);
        assert_eq!(trip.next_destination, None);
        assert_eq!(trip.wait_eta, None);
        assert_eq!(trip.route, stops);
        assert_eq!(trip.version, 0);
    }

    #[test]
    fn route_position() {
        let start = LocationId::generate();
        let stops = vec![LocationId::generate(), LocationId::generate()];
        let trip = TripPlan::new(TripId::generate(), start, stops.clone(), RouteTotals::default());

        assert_eq!(trip.route_position(&stops[0]), Some(0));
        assert_eq!(trip.route_position(&stops[1]), Some(1));
        assert_eq!(trip.route_position(&start), None);
    }
}
