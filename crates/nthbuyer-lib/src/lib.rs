//! Wait-time estimation for "be the Nth buyer" retail promotions.
//!
//! This is a facade crate that re-exports functionality from the nthbuyer
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```
//! use nthbuyer_lib::prelude::*;
//!
//! let result = estimate_json(
//!     r#"{"mode": "winner_timestamps", "winner_timestamps": ["09:00", "09:05", "09:11"]}"#,
//! )?;
//!
//! let EstimationResult::WinnerTimestamps(cadence) = &result else {
//!     unreachable!("winner_timestamps requests produce cadence results");
//! };
//! assert_eq!(cadence.cadence_analysis.cadence_model, CadenceModel::Regular);
//! assert!(result.recommendation().optimal_wait_minutes <= 30.0);
//! # Ok::<(), EstimateError>(())
//! ```

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use nthbuyer_types::*;

// Re-export timeline building
pub use nthbuyer_timeline::{IntervalSet, Timeline, TimestampEncoding};

// Re-export estimators
pub use nthbuyer_estimate::{
    CadenceEstimate, CadenceEstimator, CadenceStats, EconomicsEstimate, PurchaseRateEstimate,
    PurchaseRateEstimator, PurchaseRates, WaitDecision, WaitEstimator, WaitProfile, economics,
    estimate, estimate_json, estimate_value, numeric,
};

/// Prelude module for convenient imports.
///
/// ```
/// use nthbuyer_lib::prelude::*;
/// ```
pub mod prelude {
    pub use nthbuyer_types::{
        CadenceModel, DayType, EstimateError, EstimationResult, LaneModel, Mode, Request,
        RequestBody, Result, SharedParams,
    };

    pub use nthbuyer_timeline::Timeline;

    pub use nthbuyer_estimate::{
        CadenceEstimator, PurchaseRateEstimator, WaitEstimator, estimate, estimate_json,
        estimate_value,
    };
}
