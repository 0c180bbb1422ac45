//! Mock ride API for testing without live credentials.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::{Coordinate, LegEstimate};

use super::error::RidesError;
use super::{RideApi, RideReceipt};

/// Coordinates quantized to microdegrees, usable as a map key.
type CoordKey = (i64, i64);

fn key(coordinate: &Coordinate) -> CoordKey {
    (
        (coordinate.lat * 1e6).round() as i64,
        (coordinate.lng * 1e6).round() as i64,
    )
}

#[derive(Default)]
struct MockInner {
    legs: HashMap<(CoordKey, CoordKey), LegEstimate>,
    eta: i64,
    fail_requests: bool,
    estimate_calls: usize,
    ride_requests: Vec<String>,
}

/// Mock ride API serving canned per-leg estimates.
///
/// Estimates are keyed by the ordered (from, to) coordinate pair; a
/// pair with no canned answer fails with [`RidesError::NoEstimate`].
/// Calls are counted so tests can assert how many estimates an
/// operation issued.
#[derive(Clone)]
pub struct MockRideApi {
    inner: Arc<RwLock<MockInner>>,
}

impl MockRideApi {
    /// Create an empty mock with a default ETA of 4 minutes.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MockInner {
                eta: 4,
                ..MockInner::default()
            })),
        }
    }

    /// Register the estimate returned for an ordered (from, to) pair.
    pub async fn add_leg(&self, from: &Coordinate, to: &Coordinate, estimate: LegEstimate) {
        let mut inner = self.inner.write().await;
        inner.legs.insert((key(from), key(to)), estimate);
    }

    /// Set the ETA returned by subsequent ride requests.
    pub async fn set_eta(&self, eta: i64) {
        self.inner.write().await.eta = eta;
    }

    /// Make every subsequent ride request fail.
    pub async fn fail_ride_requests(&self) {
        self.inner.write().await.fail_requests = true;
    }

    /// Number of estimate calls made so far.
    pub async fn estimate_calls(&self) -> usize {
        self.inner.read().await.estimate_calls
    }

    /// Product ids of the ride requests made so far, in call order.
    pub async fn ride_requests(&self) -> Vec<String> {
        self.inner.read().await.ride_requests.clone()
    }
}

impl Default for MockRideApi {
    fn default() -> Self {
        Self::new()
    }
}

impl RideApi for MockRideApi {
    async fn estimate_leg(
        &self,
        from: &Coordinate,
        to: &Coordinate,
    ) -> Result<LegEstimate, RidesError> {
        let mut inner = self.inner.write().await;
        inner.estimate_calls += 1;
        inner
            .legs
            .get(&(key(from), key(to)))
            .cloned()
            .ok_or(RidesError::NoEstimate)
    }

    async fn request_ride(
        &self,
        _from: &Coordinate,
        _to: &Coordinate,
        product_id: &str,
    ) -> Result<RideReceipt, RidesError> {
        let mut inner = self.inner.write().await;
        if inner.fail_requests {
            return Err(RidesError::Api {
                status: 500,
                message: "ride request rejected".to_string(),
            });
        }

        inner.ride_requests.push(product_id.to_string());
        Ok(RideReceipt {
            request_id: Some(format!("mock-request-{}", inner.ride_requests.len())),
            eta: inner.eta,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coordinate(lat: f64, lng: f64) -> Coordinate {
        Coordinate::new(lat, lng).unwrap()
    }

    fn estimate(cost: i64) -> LegEstimate {
        LegEstimate {
            cost,
            duration: 600,
            distance: 2.0,
            product_id: "mock-product".to_string(),
        }
    }

    #[tokio::test]
    async fn serves_canned_estimates() {
        let mock = MockRideApi::new();
        let a = coordinate(1.0, 1.0);
        let b = coordinate(2.0, 2.0);
        mock.add_leg(&a, &b, estimate(7)).await;

        let leg = mock.estimate_leg(&a, &b).await.unwrap();
        assert_eq!(leg.cost, 7);
        assert_eq!(mock.estimate_calls().await, 1);
    }

    #[tokio::test]
    async fn estimates_are_directional() {
        let mock = MockRideApi::new();
        let a = coordinate(1.0, 1.0);
        let b = coordinate(2.0, 2.0);
        mock.add_leg(&a, &b, estimate(7)).await;

        let reverse = mock.estimate_leg(&b, &a).await;
        assert!(matches!(reverse, Err(RidesError::NoEstimate)));
    }

    #[tokio::test]
    async fn ride_requests_record_product_ids() {
        let mock = MockRideApi::new();
        mock.set_eta(9).await;
        let a = coordinate(1.0, 1.0);
        let b = coordinate(2.0, 2.0);

        let receipt = mock.request_ride(&a, &b, "prod-x").await.unwrap();
        assert_eq!(receipt.eta, 9);
        assert_eq!(mock.ride_requests().await, vec!["prod-x".to_string()]);
    }

    #[tokio::test]
    async fn failing_mode_rejects_requests() {
        let mock = MockRideApi::new();
        mock.fail_ride_requests().await;
        let a = coordinate(1.0, 1.0);
        let b = coordinate(2.0, 2.0);

        let result = mock.request_ride(&a, &b, "prod-x").await;
        assert!(matches!(result, Err(RidesError::Api { status: 500, .. })));
    }
}
