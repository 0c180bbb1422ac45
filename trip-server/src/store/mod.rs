//! Durable record store.
//!
//! Location and trip records are addressed by opaque identifier. Trip
//! updates are conditional on a version number, so two racing writers
//! against the same trip cannot both win; the loser sees a conflict
//! and its caller retries the whole operation.

mod error;
mod memory;

pub use error::{RecordKind, StoreError};
pub use memory::MemoryStore;

use crate::domain::{Location, LocationId, TripId, TripPlan};

/// Trait for the durable store.
///
/// Trips are never deleted; locations support full create/read/delete.
#[allow(async_fn_in_trait)]
pub trait Store {
    /// Create or replace a location record.
    async fn put_location(&self, location: Location) -> Result<(), StoreError>;

    /// Read a location snapshot by id.
    async fn location(&self, id: &LocationId) -> Result<Location, StoreError>;

    /// Remove a location record.
    async fn delete_location(&self, id: &LocationId) -> Result<(), StoreError>;

    /// Persist a freshly planned trip. The stored record is at version 0.
    async fn insert_trip(&self, trip: TripPlan) -> Result<TripPlan, StoreError>;

    /// Read a trip record by id.
    async fn trip(&self, id: &TripId) -> Result<TripPlan, StoreError>;

    /// Conditionally replace a trip record.
    ///
    /// The write only succeeds if the stored version still equals
    /// `trip.version`; the returned record carries the bumped version.
    /// A mismatch fails with [`StoreError::Conflict`] and leaves the
    /// stored record untouched.
    async fn update_trip(&self, trip: &TripPlan) -> Result<TripPlan, StoreError>;
}
