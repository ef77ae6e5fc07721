//! Estimation result schema.
//!
//! Values in these structures are already rounded for emission: minutes,
//! rates and money to 2 decimals, probabilities to 4 decimals. Field order
//! matches the serialized layout.

use serde::{Deserialize, Serialize};

use crate::CadenceModel;

/// Result of one estimation, tagged by `mode` when serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum EstimationResult {
    /// Result of the purchase-rate mode.
    PurchaseRate(PurchaseRateResult),
    /// Result of the winner-timestamps mode.
    WinnerTimestamps(CadenceResult),
}

impl EstimationResult {
    /// Returns the wait estimates block.
    #[must_use]
    pub const fn wait_estimates(&self) -> &WaitEstimates {
        match self {
            Self::PurchaseRate(result) => &result.wait_estimates_minutes,
            Self::WinnerTimestamps(result) => &result.wait_estimates_minutes,
        }
    }

    /// Returns the recommendation block.
    #[must_use]
    pub const fn recommendation(&self) -> &Recommendation {
        match self {
            Self::PurchaseRate(result) => &result.recommendation,
            Self::WinnerTimestamps(result) => &result.recommendation,
        }
    }

    /// Returns the economics block, if one was computed.
    #[must_use]
    pub const fn economics(&self) -> Option<&Economics> {
        match self {
            Self::PurchaseRate(result) => result.economics.as_ref(),
            Self::WinnerTimestamps(result) => result.economics.as_ref(),
        }
    }
}

/// Result of the purchase-rate mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRateResult {
    /// Qualifying purchases per winner (`k`).
    pub k_threshold_clients: u32,
    /// Probability that one purchase is the winning one.
    pub probability_win_per_attempt: f64,
    /// Observed and derived purchase rates.
    pub rates: Rates,
    /// Wait estimates in minutes.
    pub wait_estimates_minutes: WaitEstimates,
    /// Recommended wait.
    pub recommendation: Recommendation,
    /// Expected value of waiting, when requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub economics: Option<Economics>,
}

/// Purchase rates in purchases per minute.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rates {
    /// Rate counted on the observed lanes.
    pub purchases_per_minute_observed: f64,
    /// Rate after lane scaling.
    pub purchases_per_minute_estimated: f64,
    /// Estimated rate after the confidence buffer.
    pub purchases_per_minute_conservative: f64,
    /// Multiplier from observed lanes to all open lanes.
    pub lane_scale_factor: f64,
}

/// Result of the winner-timestamps mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CadenceResult {
    /// Interval statistics and cadence label.
    pub cadence_analysis: CadenceAnalysis,
    /// Wait estimates in minutes.
    pub wait_estimates_minutes: WaitEstimates,
    /// Recommended wait.
    pub recommendation: Recommendation,
    /// Winner threshold echo, when the day type was given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub k_threshold_clients: Option<u32>,
    /// Per-attempt win probability echo, when the day type was given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probability_win_per_attempt: Option<f64>,
    /// Expected value of waiting, when requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub economics: Option<Economics>,
}

/// Statistics of the intervals between past winners.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CadenceAnalysis {
    /// Minutes between consecutive winners.
    pub intervals_minutes: Vec<f64>,
    /// Mean interval.
    pub interval_mean_minutes: f64,
    /// Sample standard deviation of the intervals.
    pub interval_std_minutes: f64,
    /// Coefficient of variation (std / mean).
    pub interval_cv: f64,
    /// Cadence classification.
    pub cadence_model: CadenceModel,
}

/// Wait estimates, all in minutes and never negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaitEstimates {
    /// Mean time between winners.
    pub mean_interval_between_winners: f64,
    /// Expected time until the next winner.
    pub expected_wait_to_next_winner: f64,
    /// Median wait.
    pub p50_wait_to_next_winner: f64,
    /// 75th percentile wait.
    pub p75_wait_to_next_winner: f64,
    /// 90th percentile wait.
    pub p90_wait_to_next_winner: f64,
}

/// Recommended wait and its chance of success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// How long to wait before giving up.
    pub optimal_wait_minutes: f64,
    /// Probability that the next winner comes within the recommended wait.
    pub probability_next_winner_within_optimal_wait: f64,
    /// What to do when the wait runs out.
    pub decision_rule: String,
}

/// Expected value of waiting for the recommended time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Economics {
    /// Win probability times prize value.
    pub expected_value_for_optimal_wait: f64,
    /// Recommended wait times time value.
    pub expected_time_cost_for_optimal_wait: f64,
    /// Expected value minus time cost.
    pub net_expected_value_for_optimal_wait: f64,
    /// Prize value per minute of mean interval.
    pub value_expected_per_minute: f64,
    /// Wait at which time cost reaches the prize value, capped at the max wait.
    pub break_even_wait_minutes: f64,
}
