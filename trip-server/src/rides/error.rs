//! Ride API client error types.

/// Errors from the ride products HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum RidesError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid or expired credentials
    #[error("unauthorized (invalid server token or access token)")]
    Unauthorized,

    /// Rate limited by the API
    #[error("rate limited by the ride API")]
    RateLimited,

    /// API returned an error status code
    #[error("ride API error {status}: {message}")]
    Api { status: u16, message: String },

    /// JSON deserialization failed
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// The estimator returned no usable price for the leg
    #[error("no usable price estimate for this leg")]
    NoEstimate,
}
