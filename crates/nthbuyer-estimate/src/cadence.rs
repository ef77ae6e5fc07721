//! Cadence estimation from past winner timestamps.
//!
//! The gaps between past winners are summarized by their mean `μ` and
//! coefficient of variation. Regular cadences are treated as a fixed period
//! (the next winner is due `μ - elapsed` minutes from now); random cadences
//! as a Poisson process with exponential gaps of mean `μ`; mixed cadences
//! average the two models.

use nthbuyer_timeline::{IntervalSet, Timeline, TimestampEncoding};
use nthbuyer_types::{
    CadenceModel, DayType, EstimationResult, Result, SharedParams, WinnerTimestampsInput,
};
use tracing::debug;

use crate::WaitEstimator;
use crate::assemble;
use crate::economics::{self, EconomicsEstimate};
use crate::numeric::{EPSILON, clamp, exponential_cdf, exponential_quantile, guarded_div};
use crate::outcome::{WaitDecision, WaitProfile};

/// Quantile levels reported as p50/p75/p90.
const QUANTILES: [f64; 3] = [0.5, 0.75, 0.9];

/// Summary statistics of the winner intervals.
#[derive(Debug, Clone, PartialEq)]
pub struct CadenceStats {
    /// Minutes between consecutive winners.
    pub intervals: IntervalSet,
    /// Encoding the timestamps were given in.
    pub encoding: TimestampEncoding,
    /// Mean interval `μ`.
    pub mean: f64,
    /// Sample standard deviation `σ`.
    pub std_dev: f64,
    /// Coefficient of variation `σ / μ`.
    pub cv: f64,
    /// Classification of `cv`.
    pub model: CadenceModel,
}

impl CadenceStats {
    /// Summarizes the intervals of a timeline.
    #[must_use]
    pub fn from_timeline(timeline: &Timeline) -> Self {
        let intervals = timeline.intervals();
        let mean = intervals.mean();
        let std_dev = intervals.std_dev();
        let cv = guarded_div(std_dev, mean);

        Self {
            intervals,
            encoding: timeline.encoding(),
            mean,
            std_dev,
            cv,
            model: CadenceModel::from_cv(cv),
        }
    }
}

/// Full-precision output of the cadence estimator.
#[derive(Debug, Clone, PartialEq)]
pub struct CadenceEstimate {
    /// Interval statistics and classification.
    pub stats: CadenceStats,
    /// Remaining wait under the fixed-period model.
    pub regular_remaining: f64,
    /// Wait reaching the target probability under the exponential model.
    pub random_target_wait: f64,
    /// Wait estimates for the detected cadence.
    pub profile: WaitProfile,
    /// Recommended wait.
    pub decision: WaitDecision,
    /// Day type echoed from the request, if given.
    pub day_type: Option<DayType>,
    /// Economics block, when requested.
    pub economics: Option<EconomicsEstimate>,
}

/// Estimates waits from the history of past winners.
#[derive(Debug, Clone, Copy, Default)]
pub struct CadenceEstimator;

impl CadenceEstimator {
    /// Creates a new cadence estimator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn regular_profile(mean: f64, regular_remaining: f64) -> WaitProfile {
        WaitProfile {
            mean_interval: mean,
            expected_wait: regular_remaining,
            p50: regular_remaining,
            p75: regular_remaining,
            p90: regular_remaining,
        }
    }

    fn random_profile(mean: f64) -> WaitProfile {
        let [q50, q75, q90] = QUANTILES.map(|q| exponential_quantile(mean, q));
        WaitProfile {
            mean_interval: mean,
            expected_wait: mean,
            p50: q50,
            p75: q75,
            p90: q90,
        }
    }

    fn decide(
        stats: &CadenceStats,
        regular_remaining: f64,
        random_target_wait: f64,
        max_wait: f64,
    ) -> WaitDecision {
        let unclamped = match stats.model {
            CadenceModel::Regular => regular_remaining,
            CadenceModel::Random => random_target_wait,
            CadenceModel::Mixed => (regular_remaining + random_target_wait) / 2.0,
        };
        let optimal_wait = clamp(unclamped, 0.0, max_wait);

        let regular_probability = if regular_remaining <= EPSILON {
            1.0
        } else {
            clamp(optimal_wait / regular_remaining, 0.0, 1.0)
        };
        let random_probability = exponential_cdf(stats.mean, optimal_wait);

        let probability_within = match stats.model {
            CadenceModel::Regular => regular_probability,
            CadenceModel::Random => random_probability,
            CadenceModel::Mixed => (regular_probability + random_probability) / 2.0,
        };

        WaitDecision {
            optimal_wait,
            probability_within,
        }
    }

    /// Runs the estimator at full precision.
    ///
    /// # Errors
    ///
    /// Returns an error if the timestamps do not form a valid timeline.
    pub fn compute(
        &self,
        input: &WinnerTimestampsInput,
        params: &SharedParams,
    ) -> Result<CadenceEstimate> {
        let timeline = Timeline::parse(&input.winner_timestamps)?;
        let stats = CadenceStats::from_timeline(&timeline);

        let regular_remaining = (stats.mean - input.elapsed_since_last_winner_minutes).max(0.0);
        let random_target_wait = exponential_quantile(stats.mean, params.target_hit_probability);

        let regular = Self::regular_profile(stats.mean, regular_remaining);
        let random = Self::random_profile(stats.mean);
        let profile = match stats.model {
            CadenceModel::Regular => regular,
            CadenceModel::Random => random,
            CadenceModel::Mixed => regular.blend(&random),
        };

        let decision = Self::decide(
            &stats,
            regular_remaining,
            random_target_wait,
            params.max_wait_minutes,
        );

        debug!(
            intervals = stats.intervals.len(),
            mean = stats.mean,
            std_dev = stats.std_dev,
            cv = stats.cv,
            cadence = %stats.model,
            regular_remaining,
            random_target_wait,
            optimal_wait = decision.optimal_wait,
            probability = decision.probability_within,
            "Cadence estimate computed"
        );

        let economics = economics::augment(
            params.economics.as_ref(),
            &decision,
            stats.mean,
            params.max_wait_minutes,
        );

        Ok(CadenceEstimate {
            stats,
            regular_remaining,
            random_target_wait,
            profile,
            decision,
            day_type: params.day_type,
            economics,
        })
    }
}

impl WaitEstimator for CadenceEstimator {
    type Input = WinnerTimestampsInput;

    fn estimate(&self, input: &Self::Input, params: &SharedParams) -> Result<EstimationResult> {
        self.compute(input, params)
            .map(|estimate| assemble::cadence(&estimate))
    }
}
