//! Location records.

use serde::{Deserialize, Serialize};

use super::{Coordinate, LocationId};

/// A registered location with its resolved coordinate.
///
/// Created when a location is registered; the coordinate is resolved by
/// the geocoding service at that time (or at update time, if address
/// fields change). Immutable otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub coordinate: Coordinate,
}

/// Caller-supplied location fields, before an id and coordinate exist.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationDraft {
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

impl LocationDraft {
    /// Build the free-text geocoding query from the postal fields.
    ///
    /// Non-empty fields are joined with `+` in address/city/state/zip
    /// order. Returns `None` when every field is empty, in which case
    /// there is nothing to resolve.
    pub fn geocode_query(&self) -> Option<String> {
        let parts: Vec<&str> = [
            self.address.as_str(),
            self.city.as_str(),
            self.state.as_str(),
            self.zip.as_str(),
        ]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join("+"))
        }
    }

    /// Materialize a location record from this draft.
    pub fn into_location(self, id: LocationId, coordinate: Coordinate) -> Location {
        Location {
            id,
            name: self.name,
            address: self.address,
            city: self.city,
            state: self.state,
            zip: self.zip,
            coordinate,
        }
    }
}
