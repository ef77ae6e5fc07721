//! Day-type winner thresholds.

use serde::{Deserialize, Serialize};

/// Kind of shopping day, which decides how many purchases produce a winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Regular weekday: every 25th qualifying purchase wins.
    #[default]
    Weekday,
    /// Weekend or public holiday: every 50th qualifying purchase wins.
    WeekendOrHoliday,
}

impl DayType {
    /// Maps the `is_weekend_or_holiday` request flag to a day type.
    #[must_use]
    pub const fn from_flag(is_weekend_or_holiday: bool) -> Self {
        if is_weekend_or_holiday {
            Self::WeekendOrHoliday
        } else {
            Self::Weekday
        }
    }

    /// Number of qualifying purchases per winner (`k`).
    #[must_use]
    pub const fn threshold(&self) -> u32 {
        match self {
            Self::Weekday => 25,
            Self::WeekendOrHoliday => 50,
        }
    }

    /// Probability that a single purchase attempt is the winning one (`1/k`).
    #[must_use]
    pub fn win_probability_per_attempt(&self) -> f64 {
        1.0 / f64::from(self.threshold())
    }

    /// Returns the day type as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Weekday => "weekday",
            Self::WeekendOrHoliday => "weekend_or_holiday",
        }
    }
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
