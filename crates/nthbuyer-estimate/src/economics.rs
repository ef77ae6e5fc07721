//! Expected value of waiting.

use nthbuyer_types::EconomicsInput;
use tracing::debug;

use crate::numeric::{clamp, guarded_div};
use crate::outcome::WaitDecision;

/// Money figures for the recommended wait, at full precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EconomicsEstimate {
    /// Win probability times prize value.
    pub expected_value: f64,
    /// Recommended wait times time value.
    pub time_cost: f64,
    /// Expected value minus time cost.
    pub net_value: f64,
    /// Prize value per minute of mean interval between winners.
    pub value_per_minute_of_waiting: f64,
    /// Wait at which the time cost equals the prize value, capped at the max wait.
    pub break_even_wait: f64,
}

/// Computes the economics block, or `None` when no economics inputs were given.
#[must_use]
pub fn augment(
    input: Option<&EconomicsInput>,
    decision: &WaitDecision,
    mean_interval: f64,
    max_wait: f64,
) -> Option<EconomicsEstimate> {
    let input = input?;
    let bonus = input.expected_bonus_value;
    let time_value = input.time_value_per_minute;

    let expected_value = decision.probability_within * bonus;
    let time_cost = decision.optimal_wait * time_value;
    let break_even_wait = if time_value == 0.0 {
        max_wait
    } else {
        clamp(bonus / time_value, 0.0, max_wait)
    };

    let estimate = EconomicsEstimate {
        expected_value,
        time_cost,
        net_value: expected_value - time_cost,
        value_per_minute_of_waiting: guarded_div(bonus, mean_interval),
        break_even_wait,
    };

    debug!(
        expected_value = estimate.expected_value,
        time_cost = estimate.time_cost,
        net_value = estimate.net_value,
        break_even_wait = estimate.break_even_wait,
        "Economics computed"
    );
    Some(estimate)
}
