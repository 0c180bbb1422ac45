//! Wire types for the ride products API.

use serde::{Deserialize, Serialize};

use crate::domain::LegEstimate;

/// Wrapper for the price-estimates response.
#[derive(Debug, Deserialize)]
pub struct PriceEstimatesResponse {
    #[serde(default)]
    pub prices: Vec<PriceEstimate>,
}

/// One ride product's price estimate for a leg.
#[derive(Debug, Clone, Deserialize)]
pub struct PriceEstimate {
    pub product_id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub currency_code: Option<String>,
    /// Absent for products without upfront pricing (e.g. metered taxi).
    #[serde(default)]
    pub low_estimate: Option<i64>,
    #[serde(default)]
    pub high_estimate: Option<i64>,
    pub duration: i64,
    pub distance: f64,
    #[serde(default)]
    pub surge_multiplier: Option<f64>,
}

impl PriceEstimate {
    /// Convert to a domain leg estimate, if the price is usable.
    ///
    /// A usable price carries a non-negative low estimate; anything else
    /// means the product cannot quote this leg.
    pub fn to_leg_estimate(&self) -> Option<LegEstimate> {
        let cost = self.low_estimate.filter(|cost| *cost >= 0)?;
        Some(LegEstimate {
            cost,
            duration: self.duration,
            distance: self.distance,
            product_id: self.product_id.clone(),
        })
    }
}

/// Body for the ride-request endpoint.
#[derive(Debug, Serialize)]
pub struct RideRequestBody {
    pub start_latitude: f64,
    pub start_longitude: f64,
    pub end_latitude: f64,
    pub end_longitude: f64,
    pub product_id: String,
}

/// Response from the ride-request endpoint.
#[derive(Debug, Deserialize)]
pub struct RideRequestResponse {
    #[serde(default)]
    pub request_id: Option<String>,
    pub eta: i64,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub surge_multiplier: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_price_estimates() {
        let body = r#"{
            "prices": [
                {
                    "product_id": "08f17084-23fd-4103-aa3e-9b660223934b",
                    "currency_code": "USD",
                    "display_name": "UberBLACK",
                    "estimate": "$23-29",
                    "low_estimate": 23,
                    "high_estimate": 29,
                    "surge_multiplier": 1,
                    "duration": 640,
                    "distance": 5.34
                },
                {
                    "product_id": "d4abaae7-f4d6-4152-91cc-77523e8165a4",
                    "currency_code": null,
                    "display_name": "Taxi",
                    "estimate": "Metered",
                    "duration": 640,
                    "distance": 5.34
                }
            ]
        }"#;

        let parsed: PriceEstimatesResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.prices.len(), 2);
        assert_eq!(parsed.prices[0].low_estimate, Some(23));
        assert_eq!(parsed.prices[1].low_estimate, None);
    }

    #[test]
    fn usable_price_converts() {
        let body = r#"{
            "product_id": "prod-1",
            "low_estimate": 12,
            "high_estimate": 16,
            "duration": 840,
            "distance": 3.2
        }"#;
        let price: PriceEstimate = serde_json::from_str(body).unwrap();

        let leg = price.to_leg_estimate().unwrap();
        assert_eq!(leg.cost, 12);
        assert_eq!(leg.duration, 840);
        assert_eq!(leg.product_id, "prod-1");
    }

    #[test]
    fn metered_price_is_unusable() {
        let price = PriceEstimate {
            product_id: "taxi".to_string(),
            display_name: None,
            currency_code: None,
            low_estimate: None,
            high_estimate: None,
            duration: 640,
            distance: 5.34,
            surge_multiplier: None,
        };
        assert!(price.to_leg_estimate().is_none());
    }

    #[test]
    fn negative_sentinel_is_unusable() {
        let price = PriceEstimate {
            product_id: "broken".to_string(),
            display_name: None,
            currency_code: None,
            low_estimate: Some(-1),
            high_estimate: None,
            duration: 0,
            distance: 0.0,
            surge_multiplier: None,
        };
        assert!(price.to_leg_estimate().is_none());
    }

    #[test]
    fn parse_ride_request_response() {
        let body = r#"{
            "request_id": "852b8fbe-1796-4fd6-a5b5-48a431c790b9",
            "status": "processing",
            "eta": 5,
            "surge_multiplier": 1.0,
            "driver": null,
            "vehicle": null,
            "location": null
        }"#;

        let parsed: RideRequestResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.eta, 5);
        assert_eq!(parsed.status.as_deref(), Some("processing"));
    }

    #[test]
    fn ride_request_body_serializes() {
        let body = RideRequestBody {
            start_latitude: 37.38,
            start_longitude: -122.08,
            end_latitude: 37.33,
            end_longitude: -121.89,
            product_id: "prod-1".to_string(),
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["product_id"], "prod-1");
        assert_eq!(json["start_latitude"], 37.38);
    }
}
