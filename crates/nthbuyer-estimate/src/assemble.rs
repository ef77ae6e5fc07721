//! Rounds full-precision estimates into the emitted result schema.

use nthbuyer_types::{
    CadenceAnalysis, CadenceResult, DayType, Economics, EstimationResult, PurchaseRateResult,
    Rates, Recommendation, WaitEstimates,
};

use crate::cadence::CadenceEstimate;
use crate::economics::EconomicsEstimate;
use crate::numeric::{round2, round4};
use crate::outcome::{WaitDecision, WaitProfile};
use crate::purchase_rate::PurchaseRateEstimate;

/// Advice attached to purchase-rate recommendations.
///
/// Remeasure purchases for 2 more minutes and recalculate if no winner
/// appears within the recommended wait.
pub const PURCHASE_RATE_DECISION_RULE: &str =
    "Si no sale ganador en este tiempo, remide 2 minutos y recalcula.";

/// Advice attached to cadence recommendations.
///
/// Add 2-3 new timestamps and recalculate if no winner is heard before
/// the cutoff.
pub const CADENCE_DECISION_RULE: &str =
    "Si no escuchas ganador antes del corte, agrega 2-3 timestamps y recalcula.";

fn wait_estimates(profile: &WaitProfile) -> WaitEstimates {
    WaitEstimates {
        mean_interval_between_winners: round2(profile.mean_interval),
        expected_wait_to_next_winner: round2(profile.expected_wait),
        p50_wait_to_next_winner: round2(profile.p50),
        p75_wait_to_next_winner: round2(profile.p75),
        p90_wait_to_next_winner: round2(profile.p90),
    }
}

fn recommendation(decision: &WaitDecision, rule: &str) -> Recommendation {
    Recommendation {
        optimal_wait_minutes: round2(decision.optimal_wait),
        probability_next_winner_within_optimal_wait: round4(decision.probability_within),
        decision_rule: rule.to_string(),
    }
}

fn economics(estimate: &EconomicsEstimate) -> Economics {
    Economics {
        expected_value_for_optimal_wait: round2(estimate.expected_value),
        expected_time_cost_for_optimal_wait: round2(estimate.time_cost),
        net_expected_value_for_optimal_wait: round2(estimate.net_value),
        value_expected_per_minute: round2(estimate.value_per_minute_of_waiting),
        break_even_wait_minutes: round2(estimate.break_even_wait),
    }
}

fn win_probability(day_type: DayType) -> f64 {
    round4(day_type.win_probability_per_attempt())
}

/// Builds the `purchase_rate` result.
#[must_use]
pub fn purchase_rate(estimate: &PurchaseRateEstimate) -> EstimationResult {
    EstimationResult::PurchaseRate(PurchaseRateResult {
        k_threshold_clients: estimate.day_type.threshold(),
        probability_win_per_attempt: win_probability(estimate.day_type),
        rates: Rates {
            purchases_per_minute_observed: round2(estimate.rates.observed),
            purchases_per_minute_estimated: round2(estimate.rates.estimated),
            purchases_per_minute_conservative: round2(estimate.rates.conservative),
            lane_scale_factor: round2(estimate.rates.lane_scale_factor),
        },
        wait_estimates_minutes: wait_estimates(&estimate.profile),
        recommendation: recommendation(&estimate.decision, PURCHASE_RATE_DECISION_RULE),
        economics: estimate.economics.as_ref().map(economics),
    })
}

/// Builds the `winner_timestamps` result.
#[must_use]
pub fn cadence(estimate: &CadenceEstimate) -> EstimationResult {
    let stats = &estimate.stats;
    EstimationResult::WinnerTimestamps(CadenceResult {
        cadence_analysis: CadenceAnalysis {
            intervals_minutes: stats.intervals.as_slice().iter().copied().map(round2).collect(),
            interval_mean_minutes: round2(stats.mean),
            interval_std_minutes: round2(stats.std_dev),
            interval_cv: round2(stats.cv),
            cadence_model: stats.model,
        },
        wait_estimates_minutes: wait_estimates(&estimate.profile),
        recommendation: recommendation(&estimate.decision, CADENCE_DECISION_RULE),
        k_threshold_clients: estimate.day_type.map(|day| day.threshold()),
        probability_win_per_attempt: estimate.day_type.map(win_probability),
        economics: estimate.economics.as_ref().map(economics),
    })
}
