//! Ride products HTTP client.
//!
//! Provides async methods for the two endpoints the planner and the
//! progress engine consume: per-leg price estimates and ride requests.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue};
use tokio::sync::Semaphore;

use crate::domain::{Coordinate, LegEstimate};

use super::error::RidesError;
use super::types::{PriceEstimatesResponse, RideRequestBody, RideRequestResponse};
use super::{RideApi, RideReceipt};

/// Default base URL for price estimates.
const DEFAULT_API_BASE_URL: &str = "https://api.uber.com/v1";

/// Default base URL for ride requests (sandbox).
const DEFAULT_REQUEST_BASE_URL: &str = "https://sandbox-api.uber.com/v1";

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 5;

/// Configuration for the ride API client.
#[derive(Debug, Clone)]
pub struct RidesConfig {
    /// Server token, sent as a query parameter on estimate calls
    pub server_token: String,
    /// OAuth access token, sent as a bearer header on ride requests
    pub access_token: String,
    /// Base URL for the estimates API
    pub api_base_url: String,
    /// Base URL for the ride-request API
    pub request_base_url: String,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl RidesConfig {
    /// Create a new config with the given credentials.
    pub fn new(server_token: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            server_token: server_token.into(),
            access_token: access_token.into(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_base_url: DEFAULT_REQUEST_BASE_URL.to_string(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: 30,
        }
    }

    /// Set a custom estimates base URL (for testing).
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Set a custom ride-request base URL (for testing).
    pub fn with_request_base_url(mut self, url: impl Into<String>) -> Self {
        self.request_base_url = url.into();
        self
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Ride products API client.
///
/// Uses a semaphore to limit concurrent requests, which also bounds the
/// planner's per-round estimate fan-out.
#[derive(Debug, Clone)]
pub struct RidesClient {
    http: reqwest::Client,
    api_base_url: String,
    request_base_url: String,
    server_token: String,
    semaphore: Arc<Semaphore>,
}

impl RidesClient {
    /// Create a new ride API client with the given configuration.
    pub fn new(config: RidesConfig) -> Result<Self, RidesError> {
        let mut headers = HeaderMap::new();

        let bearer = HeaderValue::from_str(&format!("Bearer {}", config.access_token)).map_err(
            |_| RidesError::Api {
                status: 0,
                message: "Invalid access token format".to_string(),
            },
        )?;
        headers.insert(reqwest::header::AUTHORIZATION, bearer);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            api_base_url: config.api_base_url,
            request_base_url: config.request_base_url,
            server_token: config.server_token,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent)),
        })
    }

    /// Get a cost/duration/distance estimate for one leg.
    ///
    /// Takes the first product the API quotes. A product without a
    /// usable low estimate (metered pricing, or the service's negative
    /// sentinel) fails with [`RidesError::NoEstimate`].
    pub async fn estimate_leg(
        &self,
        from: &Coordinate,
        to: &Coordinate,
    ) -> Result<LegEstimate, RidesError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| RidesError::Api {
                status: 0,
                message: "Semaphore closed".to_string(),
            })?;

        let url = format!("{}/estimates/price", self.api_base_url);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("start_latitude", from.lat.to_string()),
                ("start_longitude", from.lng.to_string()),
                ("end_latitude", to.lat.to_string()),
                ("end_longitude", to.lng.to_string()),
                ("server_token", self.server_token.clone()),
            ])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(RidesError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(RidesError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RidesError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let parsed: PriceEstimatesResponse =
            serde_json::from_str(&body).map_err(|e| RidesError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        parsed
            .prices
            .first()
            .and_then(|price| price.to_leg_estimate())
            .ok_or(RidesError::NoEstimate)
    }

    /// Request a ride for one leg and return the wait-time ETA.
    pub async fn request_ride(
        &self,
        from: &Coordinate,
        to: &Coordinate,
        product_id: &str,
    ) -> Result<RideReceipt, RidesError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| RidesError::Api {
                status: 0,
                message: "Semaphore closed".to_string(),
            })?;

        let url = format!("{}/requests", self.request_base_url);

        let body = RideRequestBody {
            start_latitude: from.lat,
            start_longitude: from.lng,
            end_latitude: to.lat,
            end_longitude: to.lng,
            product_id: product_id.to_string(),
        };

        let response = self.http.post(&url).json(&body).send().await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(RidesError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(RidesError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RidesError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let parsed: RideRequestResponse =
            serde_json::from_str(&body).map_err(|e| RidesError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        Ok(RideReceipt {
            request_id: parsed.request_id,
            eta: parsed.eta,
        })
    }
}

impl RideApi for RidesClient {
    async fn estimate_leg(
        &self,
        from: &Coordinate,
        to: &Coordinate,
    ) -> Result<LegEstimate, RidesError> {
        RidesClient::estimate_leg(self, from, to).await
    }

    async fn request_ride(
        &self,
        from: &Coordinate,
        to: &Coordinate,
        product_id: &str,
    ) -> Result<RideReceipt, RidesError> {
        RidesClient::request_ride(self, from, to, product_id).await
    }
}
