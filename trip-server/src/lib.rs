//! Multi-stop ride trip planner.
//!
//! Orders an unordered set of stops into a cheapest-first visiting
//! sequence using live ride-cost estimates, then walks a party through
//! the resulting trip one leg per request until they are back where
//! they started.

pub mod domain;
pub mod geocode;
pub mod planner;
pub mod rides;
pub mod service;
pub mod store;
pub mod trip;
