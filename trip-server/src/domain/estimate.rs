//! Per-leg ride estimates.

use serde::{Deserialize, Serialize};

/// The ride-cost estimator's answer for one ordered (from, to) pair.
///
/// Ephemeral: recomputed on demand and never cached, so two estimates
/// for the same pair may differ slightly. `cost` is in whole currency
/// units, `duration` in seconds, `distance` in miles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegEstimate {
    pub cost: i64,
    pub duration: i64,
    pub distance: f64,
    pub product_id: String,
}
