//! Greedy nearest-neighbor route ordering.

use std::collections::HashSet;

use futures::future::join_all;
use tracing::{debug, trace};

use crate::domain::{LegEstimate, Location, LocationId, RouteTotals};
use crate::rides::RideApi;

/// Error from route planning.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PlanError {
    /// Invalid plan request
    #[error("invalid plan request: {0}")]
    InvalidRequest(String),

    /// A leg could not be estimated; the whole plan is abandoned
    #[error("failed to estimate leg {from} -> {to}: {message}")]
    Estimate {
        from: LocationId,
        to: LocationId,
        message: String,
    },
}

/// Request for route planning.
#[derive(Debug, Clone)]
pub struct PlanRequest {
    /// Where the trip begins and ends.
    pub start: Location,

    /// The stops to visit, in no particular order.
    pub stops: Vec<Location>,
}

impl PlanRequest {
    /// Create a new plan request.
    pub fn new(start: Location, stops: Vec<Location>) -> Self {
        Self { start, stops }
    }

    /// Validate the plan request.
    pub fn validate(&self) -> Result<(), PlanError> {
        if self.stops.is_empty() {
            return Err(PlanError::InvalidRequest(
                "stop set must not be empty".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for stop in &self.stops {
            if stop.id == self.start.id {
                return Err(PlanError::InvalidRequest(format!(
                    "starting location {} appears in the stop set",
                    self.start.id
                )));
            }
            if !seen.insert(stop.id) {
                return Err(PlanError::InvalidRequest(format!(
                    "duplicate stop {}",
                    stop.id
                )));
            }
        }

        Ok(())
    }
}

/// A computed visiting order with its round-trip totals.
#[derive(Debug, Clone)]
pub struct PlannedRoute {
    /// Stops in visiting order; a permutation of the requested set.
    pub stops: Vec<Location>,

    /// Summed cost/duration/distance, closing leg included.
    pub totals: RouteTotals,
}

/// Route planner driven by live leg estimates.
///
/// Greedy nearest-neighbor: each round estimates every remaining stop
/// from the current point and extends the route to the cheapest one.
/// This is O(n²) in estimator calls and not optimal, but it always
/// makes local progress and keeps the call count far below what a
/// global search would need. Ties are broken by smaller distance, then
/// by input order, so replaying identical estimates always yields the
/// same route.
pub struct RoutePlanner<'a, R: RideApi> {
    rides: &'a R,
}

impl<'a, R: RideApi> RoutePlanner<'a, R> {
    /// Create a new planner.
    pub fn new(rides: &'a R) -> Self {
        Self { rides }
    }

    /// Order the stops and accumulate round-trip totals.
    ///
    /// Any leg the estimator cannot quote aborts the whole plan; no
    /// partial route is returned.
    pub async fn plan(&self, request: &PlanRequest) -> Result<PlannedRoute, PlanError> {
        request.validate()?;

        let mut remaining = request.stops.clone();
        let mut ordered = Vec::with_capacity(remaining.len());
        let mut totals = RouteTotals::default();
        let mut current = request.start.clone();

        while !remaining.is_empty() {
            let estimates = self.estimate_round(&current, &remaining).await?;
            let best = select_cheapest(&estimates);
            let leg = &estimates[best];

            debug!(
                from = %current.id,
                to = %remaining[best].id,
                cost = leg.cost,
                distance = leg.distance,
                "selected next stop"
            );

            totals.add_leg(leg);
            let chosen = remaining.remove(best);
            ordered.push(chosen.clone());
            current = chosen;
        }

        // The plan always accounts for a round trip: one closing leg
        // from the final stop back to the start.
        let closing = self
            .rides
            .estimate_leg(&current.coordinate, &request.start.coordinate)
            .await
            .map_err(|e| PlanError::Estimate {
                from: current.id,
                to: request.start.id,
                message: e.to_string(),
            })?;
        totals.add_leg(&closing);

        debug!(
            stops = ordered.len(),
            cost = totals.cost,
            duration = totals.duration,
            distance = totals.distance,
            "route planned"
        );

        Ok(PlannedRoute {
            stops: ordered,
            totals,
        })
    }

    /// Estimate every candidate from the current point.
    ///
    /// The round's estimates are independent reads, so they are fetched
    /// concurrently; the client's semaphore bounds the fan-out. Result
    /// order follows candidate order.
    async fn estimate_round(
        &self,
        from: &Location,
        candidates: &[Location],
    ) -> Result<Vec<LegEstimate>, PlanError> {
        let origin = &from.coordinate;

        let futures: Vec<_> = candidates
            .iter()
            .map(|candidate| {
                let to = &candidate.coordinate;
                async move { self.rides.estimate_leg(origin, to).await }
            })
            .collect();

        let results = join_all(futures).await;

        let mut estimates = Vec::with_capacity(candidates.len());
        for (candidate, result) in candidates.iter().zip(results) {
            match result {
                Ok(estimate) => {
                    trace!(
                        from = %from.id,
                        to = %candidate.id,
                        cost = estimate.cost,
                        "leg estimated"
                    );
                    estimates.push(estimate);
                }
                Err(e) => {
                    return Err(PlanError::Estimate {
                        from: from.id,
                        to: candidate.id,
                        message: e.to_string(),
                    });
                }
            }
        }

        Ok(estimates)
    }
}

/// Index of the cheapest estimate.
///
/// Ties on cost fall back to the strictly smaller distance; a full tie
/// keeps the earliest candidate.
fn select_cheapest(estimates: &[LegEstimate]) -> usize {
    let mut best = 0;
    for (idx, estimate) in estimates.iter().enumerate().skip(1) {
        let cheapest = &estimates[best];
        if estimate.cost < cheapest.cost
            || (estimate.cost == cheapest.cost && estimate.distance < cheapest.distance)
        {
            best = idx;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Coordinate;

    fn leg(cost: i64, distance: f64) -> LegEstimate {
        LegEstimate {
            cost,
            duration: cost * 60,
            distance,
            product_id: "product".to_string(),
        }
    }

    fn location(lat: f64) -> Location {
        Location {
            id: LocationId::generate(),
            name: "stop".to_string(),
            address: String::new(),
            city: String::new(),
            state: String::new(),
            zip: String::new(),
            coordinate: Coordinate::new(lat, 0.0).unwrap(),
        }
    }

    #[test]
    fn cheapest_wins() {
        let estimates = vec![leg(8, 1.0), leg(5, 9.0), leg(7, 0.5)];
        assert_eq!(select_cheapest(&estimates), 1);
    }

    #[test]
    fn cost_tie_breaks_on_distance() {
        let estimates = vec![leg(5, 10.0), leg(5, 7.0)];
        assert_eq!(select_cheapest(&estimates), 1);
    }

    #[test]
    fn full_tie_keeps_input_order() {
        let estimates = vec![leg(5, 7.0), leg(5, 7.0), leg(5, 7.0)];
        assert_eq!(select_cheapest(&estimates), 0);
    }

    #[test]
    fn validate_rejects_empty_stop_set() {
        let request = PlanRequest::new(location(0.0), vec![]);
        assert!(matches!(
            request.validate(),
            Err(PlanError::InvalidRequest(_))
        ));
    }

    #[test]
    fn validate_rejects_duplicate_stops() {
        let stop = location(0.1);
        let request = PlanRequest::new(location(0.0), vec![stop.clone(), stop]);
        assert!(matches!(
            request.validate(),
            Err(PlanError::InvalidRequest(_))
        ));
    }

    #[test]
    fn validate_rejects_start_in_stop_set() {
        let start = location(0.0);
        let request = PlanRequest::new(start.clone(), vec![location(0.1), start]);
        assert!(matches!(
            request.validate(),
            Err(PlanError::InvalidRequest(_))
        ));
    }

    #[test]
    fn validate_accepts_distinct_stops() {
        let request = PlanRequest::new(location(0.0), vec![location(0.1), location(0.2)]);
        assert!(request.validate().is_ok());
    }
}
