//! Service facade.
//!
//! The transport-agnostic boundary of the system: location CRUD, trip
//! planning and trip advancement. Each operation is handled
//! independently and keeps no in-process state between calls; every
//! piece of state that outlives a request lives in the store.

mod error;

pub use error::ServiceError;

use tracing::debug;

use crate::domain::{Location, LocationDraft, LocationId, TripId, TripPlan};
use crate::geocode::Geocoder;
use crate::planner::{PlanRequest, RoutePlanner};
use crate::rides::RideApi;
use crate::store::Store;
use crate::trip::ProgressEngine;

/// The trip planning service.
///
/// Owns the three collaborators and wires them into the planner and
/// the progress engine per operation.
pub struct TripService<G: Geocoder, R: RideApi, S: Store> {
    geocoder: G,
    rides: R,
    store: S,
}

impl<G: Geocoder, R: RideApi, S: Store> TripService<G, R, S> {
    /// Create a new service over the given collaborators.
    pub fn new(geocoder: G, rides: R, store: S) -> Self {
        Self {
            geocoder,
            rides,
            store,
        }
    }

    /// Register a location, resolving its coordinate.
    pub async fn register_location(
        &self,
        draft: LocationDraft,
    ) -> Result<Location, ServiceError> {
        let query = draft.geocode_query().ok_or_else(|| {
            ServiceError::InvalidInput("location has no address fields to geocode".to_string())
        })?;

        let coordinate = self.geocoder.resolve(&query).await?;
        let location = draft.into_location(LocationId::generate(), coordinate);
        self.store.put_location(location.clone()).await?;

        debug!(location = %location.id, "location registered");
        Ok(location)
    }

    /// Fetch a location snapshot.
    pub async fn location(&self, id: &LocationId) -> Result<Location, ServiceError> {
        Ok(self.store.location(id).await?)
    }

    /// Replace a location's fields.
    ///
    /// The coordinate is re-resolved when any address field is set;
    /// an update that only renames keeps the stored coordinate.
    pub async fn update_location(
        &self,
        id: &LocationId,
        draft: LocationDraft,
    ) -> Result<Location, ServiceError> {
        let existing = self.store.location(id).await?;

        let coordinate = match draft.geocode_query() {
            Some(query) => self.geocoder.resolve(&query).await?,
            None => existing.coordinate,
        };

        let location = draft.into_location(existing.id, coordinate);
        self.store.put_location(location.clone()).await?;

        debug!(location = %location.id, "location updated");
        Ok(location)
    }

    /// Remove a location record.
    pub async fn remove_location(&self, id: &LocationId) -> Result<(), ServiceError> {
        Ok(self.store.delete_location(id).await?)
    }

    /// Plan a trip: order the stops cheapest-first and persist the plan.
    ///
    /// The stored trip starts in `planning` with no destination cursor;
    /// its totals already include the closing leg back to the start.
    pub async fn plan_trip(
        &self,
        start: &LocationId,
        stops: &[LocationId],
    ) -> Result<TripPlan, ServiceError> {
        let start = self.store.location(start).await?;

        let mut stop_records = Vec::with_capacity(stops.len());
        for stop in stops {
            stop_records.push(self.store.location(stop).await?);
        }

        let request = PlanRequest::new(start, stop_records);
        let planner = RoutePlanner::new(&self.rides);
        let route = planner.plan(&request).await?;

        let trip = TripPlan::new(
            TripId::generate(),
            request.start.id,
            route.stops.iter().map(|stop| stop.id).collect(),
            route.totals,
        );
        let stored = self.store.insert_trip(trip).await?;

        debug!(
            trip = %stored.id,
            stops = stored.route.len(),
            cost = stored.totals.cost,
            "trip planned"
        );
        Ok(stored)
    }

    /// Advance a trip by exactly one state transition.
    pub async fn advance_trip(&self, id: &TripId) -> Result<TripPlan, ServiceError> {
        let engine = ProgressEngine::new(&self.rides, &self.store);
        Ok(engine.advance(id).await?)
    }

    /// Fetch a trip record.
    pub async fn trip(&self, id: &TripId) -> Result<TripPlan, ServiceError> {
        Ok(self.store.trip(id).await?)
    }
}
