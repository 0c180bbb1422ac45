//! In-memory store.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::{Location, LocationId, TripId, TripPlan};

use super::Store;
use super::error::{RecordKind, StoreError};

/// Thread-safe in-memory store, one map per record kind.
///
/// Cloning is cheap and clones share the same underlying maps, so a
/// clone handed to a service sees every write the service makes.
#[derive(Clone, Default)]
pub struct MemoryStore {
    locations: Arc<RwLock<HashMap<LocationId, Location>>>,
    trips: Arc<RwLock<HashMap<TripId, TripPlan>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    async fn put_location(&self, location: Location) -> Result<(), StoreError> {
        let mut locations = self.locations.write().await;
        locations.insert(location.id, location);
        Ok(())
    }

    async fn location(&self, id: &LocationId) -> Result<Location, StoreError> {
        let locations = self.locations.read().await;
        locations.get(id).cloned().ok_or_else(|| StoreError::NotFound {
            kind: RecordKind::Location,
            id: id.to_string(),
        })
    }

    async fn delete_location(&self, id: &LocationId) -> Result<(), StoreError> {
        let mut locations = self.locations.write().await;
        locations
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound {
                kind: RecordKind::Location,
                id: id.to_string(),
            })
    }

    async fn insert_trip(&self, trip: TripPlan) -> Result<TripPlan, StoreError> {
        let mut trips = self.trips.write().await;
        if trips.contains_key(&trip.id) {
            return Err(StoreError::Unavailable(format!(
                "trip {} already exists",
                trip.id
            )));
        }

        let mut stored = trip;
        stored.version = 0;
        trips.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn trip(&self, id: &TripId) -> Result<TripPlan, StoreError> {
        let trips = self.trips.read().await;
        trips.get(id).cloned().ok_or_else(|| StoreError::NotFound {
            kind: RecordKind::Trip,
            id: id.to_string(),
        })
    }

    async fn update_trip(&self, trip: &TripPlan) -> Result<TripPlan, StoreError> {
        let mut trips = self.trips.write().await;
        let existing = trips.get_mut(&trip.id).ok_or_else(|| StoreError::NotFound {
            kind: RecordKind::Trip,
            id: trip.id.to_string(),
        })?;

        if existing.version != trip.version {
            return Err(StoreError::Conflict {
                id: trip.id.to_string(),
                expected: trip.version,
                found: existing.version,
            });
        }

        let mut stored = trip.clone();
        stored.version += 1;
        *existing = stored.clone();
        Ok(stored)
    }
}
