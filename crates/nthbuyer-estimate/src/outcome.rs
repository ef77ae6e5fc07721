//! Unrounded wait figures shared by both estimators.

/// Wait estimates in minutes, at full precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaitProfile {
    /// Mean time between winners.
    pub mean_interval: f64,
    /// Expected wait until the next winner.
    pub expected_wait: f64,
    /// Median wait.
    pub p50: f64,
    /// 75th percentile wait.
    pub p75: f64,
    /// 90th percentile wait.
    pub p90: f64,
}

impl WaitProfile {
    /// Field-by-field arithmetic mean of two profiles.
    #[must_use]
    pub fn blend(&self, other: &Self) -> Self {
        let mid = |a: f64, b: f64| (a + b) / 2.0;
        Self {
            mean_interval: mid(self.mean_interval, other.mean_interval),
            expected_wait: mid(self.expected_wait, other.expected_wait),
            p50: mid(self.p50, other.p50),
            p75: mid(self.p75, other.p75),
            p90: mid(self.p90, other.p90),
        }
    }
}

/// Recommended wait and its chance of seeing the next winner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaitDecision {
    /// Recommended wait in minutes.
    pub optimal_wait: f64,
    /// Probability that the next winner arrives within the recommended wait.
    pub probability_within: f64,
}
