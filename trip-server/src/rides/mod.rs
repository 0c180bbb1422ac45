//! Ride products API client.
//!
//! Two endpoints matter to this system: per-leg price estimates, which
//! drive the route planner's ordering decisions, and ride requests,
//! which the progress engine issues once per leg. Estimates are always
//! fetched fresh; the numbers may drift between calls and consumers
//! must tolerate that.

mod client;
mod error;
mod mock;
mod types;

pub use client::{RidesClient, RidesConfig};
pub use error::RidesError;
pub use mock::MockRideApi;
pub use types::{PriceEstimate, PriceEstimatesResponse, RideRequestBody, RideRequestResponse};

use crate::domain::{Coordinate, LegEstimate};

/// Outcome of a ride request.
#[derive(Debug, Clone, PartialEq)]
pub struct RideReceipt {
    /// Identifier assigned to the request, when the API provides one.
    pub request_id: Option<String>,
    /// Wait-time ETA until pickup.
    pub eta: i64,
}

/// Trait for the ride products API.
///
/// This abstraction allows the planner and the progress engine to be
/// tested with canned estimates instead of live API calls.
#[allow(async_fn_in_trait)]
pub trait RideApi {
    /// Estimate cost, duration and distance for one ordered leg.
    async fn estimate_leg(
        &self,
        from: &Coordinate,
        to: &Coordinate,
    ) -> Result<LegEstimate, RidesError>;

    /// Request a ride for one leg, returning the wait-time ETA.
    async fn request_ride(
        &self,
        from: &Coordinate,
        to: &Coordinate,
        product_id: &str,
    ) -> Result<RideReceipt, RidesError>;
}
