//! Mock geocoder for testing without API access.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::Coordinate;

use super::Geocoder;
use super::error::GeocodeError;

/// Mock geocoder that resolves queries from a canned table.
///
/// Unknown queries fail with [`GeocodeError::NoResults`], mimicking an
/// address the real service cannot resolve.
#[derive(Clone, Default)]
pub struct MockGeocoder {
    answers: Arc<RwLock<HashMap<String, Coordinate>>>,
}

impl MockGeocoder {
    /// Create an empty mock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the coordinate a query resolves to.
    pub async fn add(&self, query: impl Into<String>, coordinate: Coordinate) {
        self.answers.write().await.insert(query.into(), coordinate);
    }
}

impl Geocoder for MockGeocoder {
    async fn resolve(&self, query: &str) -> Result<Coordinate, GeocodeError> {
        let answers = self.answers.read().await;
        answers
            .get(query)
            .copied()
            .ok_or_else(|| GeocodeError::NoResults {
                query: query.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn resolves_known_query() {
        let mock = MockGeocoder::new();
        let coordinate = Coordinate::new(37.38, -122.08).unwrap();
        mock.add("123 Main St+Sunnyvale", coordinate).await;

        let resolved = mock.resolve("123 Main St+Sunnyvale").await.unwrap();
        assert_eq!(resolved, coordinate);
    }

    #[tokio::test]
    async fn unknown_query_fails() {
        let mock = MockGeocoder::new();
        let result = mock.resolve("nowhere").await;
        assert!(matches!(result, Err(GeocodeError::NoResults { .. })));
    }
}
