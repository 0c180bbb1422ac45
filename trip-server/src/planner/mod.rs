//! Route planner.
//!
//! Turns an unordered stop set into a visiting sequence by repeatedly
//! extending the route to the cheapest reachable unvisited stop, as
//! priced by the ride-cost estimator, then closes the loop back to the
//! starting point so the totals always describe a round trip.

mod route;

pub use route::{PlanError, PlanRequest, PlannedRoute, RoutePlanner};
