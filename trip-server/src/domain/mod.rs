//! Domain types for the trip planner.
//!
//! This module contains the core domain model: validated identifiers,
//! coordinates, location records, per-leg estimates and trip plans. All
//! types enforce their invariants at construction time, so code that
//! receives these types can trust their validity.

mod coordinate;
mod estimate;
mod id;
mod location;
mod trip;

pub use coordinate::{Coordinate, InvalidCoordinate};
pub use estimate::LegEstimate;
pub use id::{InvalidId, LocationId, TripId};
pub use location::{Location, LocationDraft};
pub use trip::{RouteTotals, TripPlan, TripStatus};
