//! Geographic coordinates.

use serde::{Deserialize, Serialize};

/// Error returned when constructing an invalid coordinate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid coordinate: {reason}")]
pub struct InvalidCoordinate {
    reason: &'static str,
}

/// A resolved latitude/longitude pair.
///
/// Latitude is in [-90, 90] degrees, longitude in [-180, 180], both
/// finite. Values outside those ranges are rejected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    /// Construct a coordinate, validating the ranges.
    pub fn new(lat: f64, lng: f64) -> Result<Self, InvalidCoordinate> {
        if !lat.is_finite() || !lng.is_finite() {
            return Err(InvalidCoordinate {
                reason: "must be finite",
            });
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(InvalidCoordinate {
                reason: "latitude must be within [-90, 90]",
            });
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(InvalidCoordinate {
                reason: "longitude must be within [-180, 180]",
            });
        }
        Ok(Self { lat, lng })
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any in-range pair constructs successfully
        #[test]
        fn in_range_always_constructs(lat in -90.0f64..=90.0, lng in -180.0f64..=180.0) {
            prop_assert!(Coordinate::new(lat, lng).is_ok());
        }

        /// Out-of-range latitude is always rejected
        #[test]
        fn out_of_range_lat_rejected(lat in 90.0f64..1e6, lng in -180.0f64..=180.0) {
            prop_assume!(lat > 90.0);
            prop_assert!(Coordinate::new(lat, lng).is_err());
        }
    }
}
