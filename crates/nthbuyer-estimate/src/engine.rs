//! Mode dispatch.

use nthbuyer_types::{EstimationResult, Request, RequestBody, Result, SharedParams};
use serde_json::Value;
use tracing::info;

use crate::cadence::CadenceEstimator;
use crate::purchase_rate::PurchaseRateEstimator;

/// A wait estimator for one request mode.
pub trait WaitEstimator {
    /// Mode-specific inputs consumed by the estimator.
    type Input;

    /// Estimates the wait for one request and assembles the rounded result.
    ///
    /// # Errors
    ///
    /// Returns an error if the inputs cannot be turned into an estimate.
    fn estimate(&self, input: &Self::Input, params: &SharedParams) -> Result<EstimationResult>;
}

/// Estimates the wait for a validated request.
///
/// # Errors
///
/// Returns an error if the winner timestamps do not form a valid timeline.
pub fn estimate(request: &Request) -> Result<EstimationResult> {
    let result = match &request.body {
        RequestBody::PurchaseRate(input) => {
            PurchaseRateEstimator::new().estimate(input, &request.shared)
        }
        RequestBody::WinnerTimestamps(input) => {
            CadenceEstimator::new().estimate(input, &request.shared)
        }
    }?;

    let recommendation = result.recommendation();
    info!(
        mode = %request.mode(),
        optimal_wait_minutes = recommendation.optimal_wait_minutes,
        probability = recommendation.probability_next_winner_within_optimal_wait,
        economics = result.economics().is_some(),
        "Wait estimated"
    );
    Ok(result)
}

/// Parses a JSON request and estimates the wait.
///
/// # Errors
///
/// Returns an error if the request is invalid or cannot be estimated.
pub fn estimate_json(json: &str) -> Result<EstimationResult> {
    estimate(&Request::from_json(json)?)
}

/// Estimates the wait for an already parsed JSON request.
///
/// # Errors
///
/// Returns an error if the request is invalid or cannot be estimated.
pub fn estimate_value(value: Value) -> Result<EstimationResult> {
    estimate(&Request::from_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nthbuyer_types::{EstimateError, Mode};
    use serde_json::json;

    #[test]
    fn test_dispatch_by_mode() {
        let purchase = estimate_value(json!({
            "mode": "purchase_rate",
            "is_weekend_or_holiday": true,
            "model": "per_lane",
            "observed_purchases": 30,
            "observed_minutes": 10,
            "observed_lanes": 3
        }))
        .unwrap();
        assert!(matches!(purchase, EstimationResult::PurchaseRate(_)));

        let cadence = estimate_value(json!({
            "mode": "winner_timestamps",
            "winner_timestamps": ["12:00", "12:07", "12:15"]
        }))
        .unwrap();
        assert!(matches!(cadence, EstimationResult::WinnerTimestamps(_)));
    }

    #[test]
    fn test_estimate_from_typed_request() {
        let request = Request::from_json(
            r#"{"mode": "winner_timestamps", "winner_timestamps": ["09:00", "09:05"]}"#,
        )
        .unwrap();
        assert_eq!(request.mode(), Mode::WinnerTimestamps);

        let result = estimate(&request).unwrap();
        assert_eq!(result.recommendation().optimal_wait_minutes, 5.0);
    }

    #[test]
    fn test_errors_propagate() {
        let err = estimate_json(r#"{"mode": "purchase_rate"}"#).unwrap_err();
        assert!(matches!(err, EstimateError::MissingField("is_weekend_or_holiday")));

        let err = estimate_json("{}").unwrap_err();
        assert!(matches!(err, EstimateError::UnknownMode(None)));
    }
}
