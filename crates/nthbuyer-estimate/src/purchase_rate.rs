//! Purchase-rate estimation.
//!
//! Every `k`-th qualifying purchase wins, so with a purchase rate `λ` the
//! mean time between winners is `k / λ`. The observed rate is scaled to the
//! lanes that share the counter and discounted by the confidence buffer
//! before the interval is derived.

use nthbuyer_types::{
    DayType, EstimationResult, LaneModel, PurchaseRateInput, Result, SharedParams,
};
use tracing::debug;

use crate::WaitEstimator;
use crate::assemble;
use crate::economics::{self, EconomicsEstimate};
use crate::numeric::{clamp, guarded_div, uniform_probability};
use crate::outcome::{WaitDecision, WaitProfile};

/// Shortest wait ever recommended by this estimator, in minutes.
const MIN_OPTIMAL_WAIT_MINUTES: f64 = 1.0;

/// Fractions of the mean interval reported as p50/p75/p90.
///
/// These are linear fractions, not quantiles of a fitted distribution.
const PERCENTILE_FRACTIONS: [f64; 3] = [0.5, 0.75, 0.9];

/// Purchase rates in purchases per minute, at full precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PurchaseRates {
    /// Rate counted on the observed lanes.
    pub observed: f64,
    /// Rate after lane scaling.
    pub estimated: f64,
    /// Estimated rate after the confidence buffer.
    pub conservative: f64,
    /// Multiplier from observed lanes to all open lanes.
    pub lane_scale_factor: f64,
}

/// Full-precision output of the purchase-rate estimator.
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseRateEstimate {
    /// Day type that fixed the winner threshold.
    pub day_type: DayType,
    /// Observed and derived rates.
    pub rates: PurchaseRates,
    /// Wait estimates.
    pub profile: WaitProfile,
    /// Recommended wait.
    pub decision: WaitDecision,
    /// Economics block, when requested.
    pub economics: Option<EconomicsEstimate>,
}

/// Estimates waits from aggregate purchase counts.
#[derive(Debug, Clone, Copy, Default)]
pub struct PurchaseRateEstimator;

impl PurchaseRateEstimator {
    /// Creates a new purchase-rate estimator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Derives the observed, estimated and conservative purchase rates.
    #[must_use]
    pub fn rates(input: &PurchaseRateInput, confidence_buffer: f64) -> PurchaseRates {
        let observed = input.observed_purchases / input.observed_minutes;

        let lane_scale_factor = match (input.model, input.total_open_lanes) {
            (LaneModel::Global, Some(total)) if total >= input.observed_lanes => {
                total / input.observed_lanes
            }
            _ => 1.0,
        };

        let estimated = match input.model {
            LaneModel::Global => observed * lane_scale_factor,
            LaneModel::PerLane => observed / input.observed_lanes,
        };

        PurchaseRates {
            observed,
            estimated,
            conservative: estimated * (1.0 - confidence_buffer),
            lane_scale_factor,
        }
    }

    /// Runs the estimator at full precision.
    #[must_use]
    pub fn compute(
        &self,
        input: &PurchaseRateInput,
        params: &SharedParams,
    ) -> PurchaseRateEstimate {
        let k = f64::from(input.day_type.threshold());
        let rates = Self::rates(input, params.confidence_buffer);
        let interval = guarded_div(k, rates.conservative);

        let [f50, f75, f90] = PERCENTILE_FRACTIONS;
        let profile = WaitProfile {
            mean_interval: interval,
            expected_wait: interval / 2.0,
            p50: interval * f50,
            p75: interval * f75,
            p90: interval * f90,
        };

        let optimal_wait = clamp(
            interval * params.target_hit_probability,
            MIN_OPTIMAL_WAIT_MINUTES,
            params.max_wait_minutes,
        );
        let decision = WaitDecision {
            optimal_wait,
            probability_within: uniform_probability(interval, optimal_wait),
        };

        debug!(
            model = %input.model,
            k,
            observed_rate = rates.observed,
            estimated_rate = rates.estimated,
            conservative_rate = rates.conservative,
            lane_scale_factor = rates.lane_scale_factor,
            mean_interval = interval,
            optimal_wait = decision.optimal_wait,
            probability = decision.probability_within,
            "Purchase-rate estimate computed"
        );

        let economics = economics::augment(
            params.economics.as_ref(),
            &decision,
            interval,
            params.max_wait_minutes,
        );

        PurchaseRateEstimate {
            day_type: input.day_type,
            rates,
            profile,
            decision,
            economics,
        }
    }
}

impl WaitEstimator for PurchaseRateEstimator {
    type Input = PurchaseRateInput;

    fn estimate(&self, input: &Self::Input, params: &SharedParams) -> Result<EstimationResult> {
        Ok(assemble::purchase_rate(&self.compute(input, params)))
    }
}
