//! Trip state transitions.

use crate::domain::{LocationId, TripPlan, TripStatus};

/// Error for trip records that violate the state invariants.
///
/// Every record this system writes satisfies them, so these are only
/// reachable through corrupted storage.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    /// The planned route has no stops
    #[error("planned route is empty")]
    EmptyRoute,

    /// The trip is requesting but carries no destination cursor
    #[error("trip is requesting but has no destination cursor")]
    MissingCursor,

    /// The cursor points at a location that is not part of the trip
    #[error("destination cursor {0} is neither on the route nor the starting point")]
    UnknownCursor(LocationId),
}

/// One computed advance of a trip.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    /// Status after the advance.
    pub status: TripStatus,

    /// Destination cursor after the advance.
    pub next_destination: LocationId,

    /// Ride to request, as an ordered (from, to) pair. `None` for the
    /// completing advance, which initiates no movement.
    pub leg: Option<(LocationId, LocationId)>,
}

/// Compute the next transition for a trip.
///
/// A pure function of the persisted record: `status` plus
/// `next_destination` fully determine the outcome, so advancing
/// resumes safely after a crash between requests. Returns `None` for
/// a completed trip, whose advance is an idempotent no-op.
pub fn plan_transition(trip: &TripPlan) -> Result<Option<Transition>, TransitionError> {
    match trip.status {
        TripStatus::Completed => Ok(None),

        // First advance: head for the route's first stop.
        TripStatus::Planning => {
            let first = *trip.route.first().ok_or(TransitionError::EmptyRoute)?;
            Ok(Some(Transition {
                status: TripStatus::Requesting,
                next_destination: first,
                leg: Some((trip.starting_from, first)),
            }))
        }

        TripStatus::Requesting => {
            let cursor = trip.next_destination.ok_or(TransitionError::MissingCursor)?;

            // Closing leg already underway: the party is home.
            if cursor == trip.starting_from {
                return Ok(Some(Transition {
                    status: TripStatus::Completed,
                    next_destination: cursor,
                    leg: None,
                }));
            }

            let position = trip
                .route_position(&cursor)
                .ok_or(TransitionError::UnknownCursor(cursor))?;

            // Departing the final stop turns the trip home.
            let next = match trip.route.get(position + 1) {
                Some(stop) => *stop,
                None => trip.starting_from,
            };

            Ok(Some(Transition {
                status: TripStatus::Requesting,
                next_destination: next,
                leg: Some((cursor, next)),
            }))
        }
    }
}

/// Apply a computed transition to a trip record.
///
/// `eta` overwrites the stored wait ETA when the advance requested a
/// ride; a transition without a leg leaves the previous ETA in place.
pub fn apply(trip: &mut TripPlan, transition: &Transition, eta: Option<i64>) {
    trip.status = transition.status;
    trip.next_destination = Some(transition.next_destination);
    if let Some(eta) = eta {
        trip.wait_eta = Some(eta);
    }
}
