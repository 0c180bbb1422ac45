//! Geocoding client error types.

use crate::domain::InvalidCoordinate;

/// Errors that can occur when resolving an address to a coordinate.
#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error status
    #[error("geocoding API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// The address did not resolve to any result
    #[error("no geocoding results for {query:?}")]
    NoResults { query: String },

    /// The API answered with an out-of-range coordinate
    #[error("geocoder returned an unusable coordinate: {0}")]
    Coordinate(#[from] InvalidCoordinate),
}
