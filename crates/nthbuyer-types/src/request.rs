//! Estimation request model.
//!
//! A [`Request`] is built once from the caller's JSON object. Presence and
//! type of every field are checked here so the estimators only ever see
//! validated, defaulted and clamped values.

use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::fields::{self, Payload};
use crate::{DayType, EstimateError, Result};

/// Default cap on the recommended wait, in minutes.
pub const DEFAULT_MAX_WAIT_MINUTES: f64 = 30.0;

/// Smallest accepted `max_wait_minutes`; lower values are raised to this.
pub const MIN_MAX_WAIT_MINUTES: f64 = 1.0;

/// Default fraction shaved off the estimated purchase rate.
pub const DEFAULT_CONFIDENCE_BUFFER: f64 = 0.2;

/// Accepted range for `confidence_buffer`; values outside are clamped.
pub const CONFIDENCE_BUFFER_RANGE: RangeInclusive<f64> = 0.0..=0.9;

/// Default probability the recommended wait should reach.
pub const DEFAULT_TARGET_HIT_PROBABILITY: f64 = 0.75;

/// Accepted range for `target_hit_probability`; values outside are clamped.
pub const TARGET_HIT_PROBABILITY_RANGE: RangeInclusive<f64> = 0.5..=0.99;

fn clamp_to(value: f64, range: &RangeInclusive<f64>) -> f64 {
    range.start().max(range.end().min(value))
}

/// Estimation mode selected by the request's `mode` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Aggregate purchase counts over observed lanes.
    PurchaseRate,
    /// History of past winning moments.
    WinnerTimestamps,
}

impl Mode {
    /// Returns the mode as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PurchaseRate => "purchase_rate",
            Self::WinnerTimestamps => "winner_timestamps",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Mode {
    type Err = EstimateError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "purchase_rate" => Ok(Self::PurchaseRate),
            "winner_timestamps" => Ok(Self::WinnerTimestamps),
            other => Err(EstimateError::UnknownMode(Some(other.to_string()))),
        }
    }
}

/// How observed purchases relate to the lanes they were counted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LaneModel {
    /// One shared counter across the store; observed lanes are a sample.
    Global,
    /// One counter per lane; the observed rate is reduced to a single lane.
    PerLane,
}

impl LaneModel {
    /// Returns the lane model as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Global => "global",
            Self::PerLane => "per_lane",
        }
    }
}

impl std::fmt::Display for LaneModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LaneModel {
    type Err = EstimateError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "global" => Ok(Self::Global),
            "per_lane" => Ok(Self::PerLane),
            _ => Err(EstimateError::validation(
                "model must be 'global' or 'per_lane'",
            )),
        }
    }
}

/// Prize value and time value used by the economics block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EconomicsInput {
    /// Monetary value of winning.
    pub expected_bonus_value: f64,
    /// Monetary value of one minute spent waiting.
    pub time_value_per_minute: f64,
}

impl EconomicsInput {
    /// Reads the economics pair; anything but two non-negative numbers yields `None`.
    fn from_payload(payload: &Payload) -> Option<Self> {
        let expected_bonus_value = fields::lenient_number(payload, "expected_bonus_value")?;
        let time_value_per_minute = fields::lenient_number(payload, "time_value_per_minute")?;
        if expected_bonus_value < 0.0 || time_value_per_minute < 0.0 {
            return None;
        }
        Some(Self {
            expected_bonus_value,
            time_value_per_minute,
        })
    }
}

/// Parameters shared by both estimation modes, already defaulted and clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SharedParams {
    /// Upper bound on the recommended wait (at least 1 minute).
    pub max_wait_minutes: f64,
    /// Fraction of the estimated rate discarded for safety, in `[0, 0.9]`.
    pub confidence_buffer: f64,
    /// Probability the recommended wait aims to reach, in `[0.5, 0.99]`.
    pub target_hit_probability: f64,
    /// Day type, when the request says whether it is a weekend or holiday.
    pub day_type: Option<DayType>,
    /// Economics inputs, when both are present and valid.
    pub economics: Option<EconomicsInput>,
}

impl SharedParams {
    fn from_payload(payload: &Payload) -> Result<Self> {
        let max_wait_minutes = fields::number(payload, "max_wait_minutes")?
            .unwrap_or(DEFAULT_MAX_WAIT_MINUTES)
            .max(MIN_MAX_WAIT_MINUTES);
        let confidence_buffer = clamp_to(
            fields::number(payload, "confidence_buffer")?.unwrap_or(DEFAULT_CONFIDENCE_BUFFER),
            &CONFIDENCE_BUFFER_RANGE,
        );
        let target_hit_probability = clamp_to(
            fields::number(payload, "target_hit_probability")?
                .unwrap_or(DEFAULT_TARGET_HIT_PROBABILITY),
            &TARGET_HIT_PROBABILITY_RANGE,
        );
        let day_type = fields::boolean(payload, "is_weekend_or_holiday")?.map(DayType::from_flag);

        Ok(Self {
            max_wait_minutes,
            confidence_buffer,
            target_hit_probability,
            day_type,
            economics: EconomicsInput::from_payload(payload),
        })
    }
}

impl Default for SharedParams {
    fn default() -> Self {
        Self {
            max_wait_minutes: DEFAULT_MAX_WAIT_MINUTES,
            confidence_buffer: DEFAULT_CONFIDENCE_BUFFER,
            target_hit_probability: DEFAULT_TARGET_HIT_PROBABILITY,
            day_type: None,
            economics: None,
        }
    }
}

/// Inputs of the purchase-rate mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PurchaseRateInput {
    /// Day type deciding the winner threshold.
    pub day_type: DayType,
    /// Lane model used to turn the observed rate into an estimate.
    pub model: LaneModel,
    /// Purchases counted during the observation (> 0).
    pub observed_purchases: f64,
    /// Length of the observation in minutes (> 0).
    pub observed_minutes: f64,
    /// Number of lanes watched during the observation (> 0).
    pub observed_lanes: f64,
    /// Total lanes open in the store, if known.
    pub total_open_lanes: Option<f64>,
}

impl PurchaseRateInput {
    const REQUIRED: [&'static str; 5] = [
        "is_weekend_or_holiday",
        "model",
        "observed_purchases",
        "observed_minutes",
        "observed_lanes",
    ];

    fn from_payload(payload: &Payload) -> Result<Self> {
        if let Some(missing) = Self::REQUIRED
            .iter()
            .find(|key| !fields::contains(payload, key))
        {
            return Err(EstimateError::MissingField(*missing));
        }

        let is_weekend = fields::boolean(payload, "is_weekend_or_holiday")?
            .ok_or(EstimateError::MissingField("is_weekend_or_holiday"))?;
        let model = fields::string(payload, "model")?.ok_or(EstimateError::MissingField("model"))?;
        let observed_purchases = fields::required_number(payload, "observed_purchases")?;
        let observed_minutes = fields::required_number(payload, "observed_minutes")?;
        let observed_lanes = fields::required_number(payload, "observed_lanes")?;

        if observed_purchases <= 0.0 || observed_minutes <= 0.0 || observed_lanes <= 0.0 {
            return Err(EstimateError::validation(
                "observed_purchases, observed_minutes and observed_lanes must be > 0",
            ));
        }

        Ok(Self {
            day_type: DayType::from_flag(is_weekend),
            model: model.parse()?,
            observed_purchases,
            observed_minutes,
            observed_lanes,
            total_open_lanes: fields::lenient_number(payload, "total_open_lanes"),
        })
    }
}

/// Inputs of the winner-timestamps mode.
#[derive(Debug, Clone, PartialEq)]
pub struct WinnerTimestampsInput {
    /// Past winning moments, oldest first (at least two).
    pub winner_timestamps: Vec<String>,
    /// Minutes already waited since the last winner (never negative).
    pub elapsed_since_last_winner_minutes: f64,
}

impl WinnerTimestampsInput {
    fn from_payload(payload: &Payload) -> Result<Self> {
        let winner_timestamps = fields::string_list(payload, "winner_timestamps")?;
        let elapsed_since_last_winner_minutes =
            fields::number(payload, "elapsed_since_last_winner_minutes")?
                .unwrap_or(0.0)
                .max(0.0);

        Ok(Self {
            winner_timestamps,
            elapsed_since_last_winner_minutes,
        })
    }
}

/// Mode-specific part of a request.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// Purchase-rate estimation inputs.
    PurchaseRate(PurchaseRateInput),
    /// Cadence estimation inputs.
    WinnerTimestamps(WinnerTimestampsInput),
}

/// A validated estimation request.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    /// Parameters shared by both modes.
    pub shared: SharedParams,
    /// Mode-specific inputs.
    pub body: RequestBody,
}

impl Request {
    /// Parses a request from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a JSON object, the mode is
    /// unknown, a required field is missing, or a value is invalid.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Builds a request from an already parsed JSON value.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Request::from_json`], minus JSON syntax errors.
    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(payload) = value else {
            return Err(EstimateError::validation("request must be a JSON object"));
        };

        let mode = match payload.get("mode").and_then(Value::as_str) {
            Some(mode) => mode.parse::<Mode>()?,
            None => {
                return Err(EstimateError::UnknownMode(
                    payload.get("mode").filter(|v| !v.is_null()).map(Value::to_string),
                ));
            }
        };

        let shared = SharedParams::from_payload(&payload)?;
        let body = match mode {
            Mode::PurchaseRate => {
                RequestBody::PurchaseRate(PurchaseRateInput::from_payload(&payload)?)
            }
            Mode::WinnerTimestamps => {
                RequestBody::WinnerTimestamps(WinnerTimestampsInput::from_payload(&payload)?)
            }
        };

        Ok(Self { shared, body })
    }

    /// Returns the estimation mode of this request.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        match self.body {
            RequestBody::PurchaseRate(_) => Mode::PurchaseRate,
            RequestBody::WinnerTimestamps(_) => Mode::WinnerTimestamps,
        }
    }
}

impl FromStr for Request {
    type Err = EstimateError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_json(s)
    }
}

impl TryFrom<Value> for Request {
    type Error = EstimateError;

    fn try_from(value: Value) -> Result<Self> {
        Self::from_value(value)
    }
}
