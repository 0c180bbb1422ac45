//! Trip progress engine.

use tracing::debug;

use crate::domain::{LocationId, TripId, TripPlan};
use crate::rides::{RideApi, RidesError};
use crate::store::{Store, StoreError};

use super::transition::{TransitionError, apply, plan_transition};

/// Error from advancing a trip.
#[derive(Debug, thiserror::Error)]
pub enum AdvanceError {
    /// Store read or conditional write failed
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The ride API refused the estimate or the ride request
    #[error("ride request failed: {0}")]
    Rides(#[from] RidesError),

    /// The stored record violates the state invariants
    #[error(transparent)]
    State(#[from] TransitionError),
}

/// Advances persisted trips one state transition per call.
///
/// The engine holds no memory between calls: it loads the record,
/// computes exactly one transition, requests the leg's ride, and
/// persists the result with a conditional versioned write. The write
/// happens last, so a failed collaborator call or a lost version race
/// leaves the stored record untouched.
pub struct ProgressEngine<'a, R: RideApi, S: Store> {
    rides: &'a R,
    store: &'a S,
}

impl<'a, R: RideApi, S: Store> ProgressEngine<'a, R, S> {
    /// Create a new engine.
    pub fn new(rides: &'a R, store: &'a S) -> Self {
        Self { rides, store }
    }

    /// Apply one state transition and return the stored record.
    ///
    /// Advancing a completed trip returns it unchanged without a
    /// write, so caller-side retries are always safe.
    pub async fn advance(&self, trip_id: &TripId) -> Result<TripPlan, AdvanceError> {
        let trip = self.store.trip(trip_id).await?;

        let Some(transition) = plan_transition(&trip)? else {
            debug!(trip = %trip.id, "trip already completed; nothing to advance");
            return Ok(trip);
        };

        let eta = match &transition.leg {
            Some((from, to)) => Some(self.request_leg(from, to).await?),
            None => None,
        };

        let mut updated = trip;
        apply(&mut updated, &transition, eta);

        let stored = self.store.update_trip(&updated).await?;

        debug!(
            trip = %stored.id,
            status = %stored.status,
            next = ?stored.next_destination,
            "trip advanced"
        );

        Ok(stored)
    }

    /// Request a ride for one leg and return its wait ETA.
    ///
    /// The product to request is whatever the estimator currently
    /// quotes for the leg.
    async fn request_leg(
        &self,
        from_id: &LocationId,
        to_id: &LocationId,
    ) -> Result<i64, AdvanceError> {
        let from = self.store.location(from_id).await?;
        let to = self.store.location(to_id).await?;

        let estimate = self
            .rides
            .estimate_leg(&from.coordinate, &to.coordinate)
            .await?;
        let receipt = self
            .rides
            .request_ride(&from.coordinate, &to.coordinate, &estimate.product_id)
            .await?;

        debug!(
            from = %from.id,
            to = %to.id,
            product = %estimate.product_id,
            request = ?receipt.request_id,
            eta = receipt.eta,
            "ride requested"
        );

        Ok(receipt.eta)
    }
}
