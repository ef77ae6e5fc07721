//! Timeline construction and interval statistics.

use nthbuyer_types::TimelineError;
use tracing::debug;

use crate::{absolute, wall_clock};

/// Encoding detected for a list of winner timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimestampEncoding {
    /// Same-day clock readings, repaired across midnight.
    WallClock,
    /// Calendar date-times, already in ascending order.
    Absolute,
}

impl TimestampEncoding {
    /// Returns the encoding as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::WallClock => "wall_clock",
            Self::Absolute => "absolute",
        }
    }
}

impl std::fmt::Display for TimestampEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Strictly increasing minute offsets of past winners (at least two).
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    minutes: Vec<f64>,
    encoding: TimestampEncoding,
}

impl Timeline {
    /// Builds a timeline from winner timestamps, oldest first.
    ///
    /// If every entry is a wall-clock reading the list is unrolled across
    /// midnight. Otherwise every entry must be an absolute date-time and the
    /// list must be strictly ascending.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two entries are given, an entry matches
    /// neither encoding, or absolute entries are not strictly ascending.
    pub fn parse<S: AsRef<str>>(timestamps: &[S]) -> Result<Self, TimelineError> {
        if timestamps.len() < 2 {
            return Err(TimelineError::TooFewEntries {
                count: timestamps.len(),
            });
        }

        let clock_readings: Option<Vec<i64>> = timestamps
            .iter()
            .map(|ts| wall_clock::parse_seconds(ts.as_ref()))
            .collect();

        let timeline = match clock_readings {
            Some(readings) => Self {
                minutes: wall_clock::unroll(&readings),
                encoding: TimestampEncoding::WallClock,
            },
            None => Self {
                minutes: Self::absolute_minutes(timestamps)?,
                encoding: TimestampEncoding::Absolute,
            },
        };

        debug!(
            entries = timeline.len(),
            encoding = %timeline.encoding,
            span_minutes = timeline.span_minutes(),
            "Built winner timeline"
        );
        Ok(timeline)
    }

    fn absolute_minutes<S: AsRef<str>>(timestamps: &[S]) -> Result<Vec<f64>, TimelineError> {
        let minutes = timestamps
            .iter()
            .enumerate()
            .map(|(index, ts)| {
                absolute::parse_minutes(ts.as_ref()).ok_or_else(|| {
                    TimelineError::UnrecognizedEncoding {
                        index,
                        value: ts.as_ref().to_string(),
                    }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if let Some(index) = minutes.windows(2).position(|pair| pair[1] <= pair[0]) {
            return Err(TimelineError::NotAscending { index: index + 1 });
        }
        Ok(minutes)
    }

    /// Returns the minute offsets.
    #[must_use]
    pub fn minutes(&self) -> &[f64] {
        &self.minutes
    }

    /// Returns the detected encoding.
    #[must_use]
    pub const fn encoding(&self) -> TimestampEncoding {
        self.encoding
    }

    /// Returns the number of winners on the timeline.
    #[must_use]
    pub fn len(&self) -> usize {
        self.minutes.len()
    }

    /// Returns true if the timeline holds no winners.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.minutes.is_empty()
    }

    /// Minutes from the first to the last winner.
    #[must_use]
    pub fn span_minutes(&self) -> f64 {
        match (self.minutes.first(), self.minutes.last()) {
            (Some(first), Some(last)) => last - first,
            _ => 0.0,
        }
    }

    /// Returns the intervals between consecutive winners.
    #[must_use]
    pub fn intervals(&self) -> IntervalSet {
        IntervalSet {
            values: self
                .minutes
                .windows(2)
                .map(|pair| pair[1] - pair[0])
                .collect(),
        }
    }
}

/// Minutes between consecutive winners.
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalSet {
    values: Vec<f64>,
}

impl IntervalSet {
    /// Returns the intervals as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Returns the number of intervals.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if there are no intervals.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Arithmetic mean of the intervals (0 when empty).
    #[must_use]
    pub fn mean(&self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        self.values.iter().sum::<f64>() / self.values.len() as f64
    }

    /// Sample standard deviation (n - 1 denominator); 0 with fewer than two intervals.
    #[must_use]
    pub fn std_dev(&self) -> f64 {
        let n = self.values.len();
        if n < 2 {
            return 0.0;
        }
        let mean = self.mean();
        let sum_sq: f64 = self.values.iter().map(|v| (v - mean).powi(2)).sum();
        (sum_sq / (n - 1) as f64).sqrt()
    }
}
