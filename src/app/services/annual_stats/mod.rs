//! Annual statistics over tidy observation series
//!
//! Groups tidy observations by UTC calendar year and computes the summary
//! statistics used by the comparison commands:
//! - [`precipitation`] - totals, rainy hours/days, snow vs liquid-rain split
//! - [`temperature`] - degree-deviation metrics per baseline
//! - [`sensitivity`] - rain-threshold sweep with cross-year means
//!
//! The aggregators depend only on the shape of the tidy series, not on how
//! it was built; every call takes an immutable slice and returns freshly
//! allocated rows. Missing values are excluded from counts and sums, and
//! years with no valid observations produce no row at all.

pub mod precipitation;
pub mod sensitivity;
pub mod temperature;

#[cfg(test)]
pub mod tests;

// Re-export the aggregation entry points
pub use precipitation::{annual_precipitation_summary, rainy_hours_summary};
pub use sensitivity::{default_thresholds, threshold_sensitivity};
pub use temperature::{annual_baseline_deviations, annual_temperature_summary};
