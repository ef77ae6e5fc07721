//! Wait-time estimation for "be the Nth buyer" promotions.
//!
//! This crate provides the estimation engine:
//!
//! - [`estimate`] - Routes a validated [`Request`](nthbuyer_types::Request) to its estimator
//! - [`WaitEstimator`] - Common interface of the two estimators
//! - [`PurchaseRateEstimator`] - Mean interval between winners from purchase counts
//! - [`CadenceEstimator`] - Cadence classification from past winner timestamps
//! - [`economics::augment`] - Expected value and break-even wait of the recommendation
//! - [`numeric`] - Clamping, rounding and distribution helpers

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod assemble;
mod cadence;
pub mod economics;
mod engine;
pub mod numeric;
mod outcome;
mod purchase_rate;

pub use cadence::{CadenceEstimate, CadenceEstimator, CadenceStats};
pub use economics::EconomicsEstimate;
pub use engine::{WaitEstimator, estimate, estimate_json, estimate_value};
pub use outcome::{WaitDecision, WaitProfile};
pub use purchase_rate::{PurchaseRateEstimate, PurchaseRateEstimator, PurchaseRates};
