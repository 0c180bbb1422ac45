//! Geocoding service client.
//!
//! Resolves free-text addresses to coordinates. Locations are geocoded
//! once, when registered or when their address fields change; nothing
//! here is called on the trip-planning hot path.

mod client;
mod error;
mod mock;

pub use client::{GeocodeClient, GeocodeConfig};
pub use error::GeocodeError;
pub use mock::MockGeocoder;

use crate::domain::Coordinate;

/// Trait for resolving a free-text address to a coordinate.
///
/// This abstraction allows the service layer to be tested with canned
/// answers instead of a live geocoding API.
#[allow(async_fn_in_trait)]
pub trait Geocoder {
    /// Resolve an address query to a coordinate.
    async fn resolve(&self, query: &str) -> Result<Coordinate, GeocodeError>;
}
