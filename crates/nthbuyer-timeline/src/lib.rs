//! Winner timestamp parsing for the nthbuyer wait-time estimator.
//!
//! This crate turns a list of winner timestamps into a timeline:
//!
//! - [`Timeline`] - Strictly increasing minute offsets of past winners
//! - [`TimestampEncoding`] - Which of the two accepted encodings was detected
//! - [`IntervalSet`] - Minutes between consecutive winners, with statistics

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod absolute;
mod timeline;
mod wall_clock;

pub use timeline::{IntervalSet, Timeline, TimestampEncoding};
