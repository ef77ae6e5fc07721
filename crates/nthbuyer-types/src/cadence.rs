//! Cadence classification of winner intervals.

use serde::{Deserialize, Serialize};

/// Below this coefficient of variation the cadence is regular.
const REGULAR_CV_LIMIT: f64 = 0.4;

/// Above this coefficient of variation the cadence is random.
const RANDOM_CV_LIMIT: f64 = 0.7;

/// Regularity pattern of historical inter-winner intervals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CadenceModel {
    /// Winners arrive at a roughly fixed period.
    Regular,
    /// Between regular and random; estimates blend both models.
    Mixed,
    /// Winners arrive like a Poisson process (exponential gaps).
    Random,
}

impl CadenceModel {
    /// Classifies a coefficient of variation.
    ///
    /// Both limits (0.4 and 0.7) fall into [`CadenceModel::Mixed`].
    #[must_use]
    pub fn from_cv(cv: f64) -> Self {
        if cv < REGULAR_CV_LIMIT {
            Self::Regular
        } else if cv > RANDOM_CV_LIMIT {
            Self::Random
        } else {
            Self::Mixed
        }
    }

    /// Returns the model as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::Mixed => "mixed",
            Self::Random => "random",
        }
    }
}

impl std::fmt::Display for CadenceModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
