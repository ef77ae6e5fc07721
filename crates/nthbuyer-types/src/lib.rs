//! Core types for the nthbuyer wait-time estimator.
//!
//! This crate provides the data structures shared by the nthbuyer crates:
//!
//! - [`Request`] - A validated estimation request, parsed once from JSON
//! - [`RequestBody`] - The mode-specific part of a request
//! - [`EstimationResult`] - The serializable result returned to callers
//! - [`DayType`] - Weekday or weekend/holiday winner threshold
//! - [`CadenceModel`] - Regularity label for historical winner intervals
//! - [`EstimateError`] - Error taxonomy shared by every crate

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cadence;
mod day_type;
mod error;
mod fields;
mod request;
mod result;

pub use cadence::CadenceModel;
pub use day_type::DayType;
pub use error::{EstimateError, Result, TimelineError};
pub use request::{
    CONFIDENCE_BUFFER_RANGE, DEFAULT_CONFIDENCE_BUFFER, DEFAULT_MAX_WAIT_MINUTES,
    DEFAULT_TARGET_HIT_PROBABILITY, EconomicsInput, LaneModel, MIN_MAX_WAIT_MINUTES, Mode,
    PurchaseRateInput, Request, RequestBody, SharedParams, TARGET_HIT_PROBABILITY_RANGE,
    WinnerTimestampsInput,
};
pub use result::{
    CadenceAnalysis, CadenceResult, Economics, EstimationResult, PurchaseRateResult, Rates,
    Recommendation, WaitEstimates,
};
