//! Tidy observation series construction
//!
//! This module turns batches of raw ISD rows into tidy per-observation
//! time series with unique, sorted timestamps. It is organized into
//! logical components:
//! - [`decoders`] - Compound field decoding (AA1 precipitation, TMP temperature)
//! - [`snow`] - Frozen-precipitation flag from the AWn present-weather fields
//! - [`report_type`] - Duplicate resolution across report types
//! - [`builder`] - Pipeline orchestration per series flavor
//!
//! # Missing-Value Philosophy
//!
//! Decoding never fails: unparseable or sentinel-valued fields become
//! `None` and propagate as missing through aggregation, where they are
//! excluded from counts and sums rather than treated as zero. Structural
//! column absence degrades to an empty or all-missing series with a
//! warning, never an error.

pub mod builder;
pub mod decoders;
pub mod report_type;
pub mod snow;

#[cfg(test)]
pub mod tests;

// Re-export main entry points for easy access
pub use builder::{build_precipitation_series, build_temperature_series, parse_timestamp};
pub use decoders::{decode_aa1_depth_mm, decode_tmp_celsius};
pub use report_type::TimedRecord;
pub use snow::is_frozen_precipitation;
