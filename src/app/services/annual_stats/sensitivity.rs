//! Rain-threshold sensitivity sweep
//!
//! Re-runs the annual precipitation aggregation across a grid of
//! thresholds and reduces each run to cross-year means. Because the rainy
//! predicate is a strict `>` over a fixed dataset, the means are
//! non-increasing as the threshold grows.

use tracing::debug;

use crate::app::models::{PrecipObservation, ThresholdSensitivity};
use crate::constants;

use super::precipitation::annual_precipitation_summary;

/// The default sweep grid: zero plus log-spaced values between
/// [`constants::SWEEP_MIN_MM`] and [`constants::SWEEP_MAX_MM`]
pub fn default_thresholds() -> Vec<f64> {
    let mut thresholds = Vec::with_capacity(constants::SWEEP_STEPS + 1);
    thresholds.push(0.0);
    let log_min = constants::SWEEP_MIN_MM.log10();
    let log_max = constants::SWEEP_MAX_MM.log10();
    for step in 0..constants::SWEEP_STEPS {
        let fraction = step as f64 / (constants::SWEEP_STEPS - 1) as f64;
        thresholds.push(10f64.powf(log_min + fraction * (log_max - log_min)));
    }
    thresholds
}

/// Sweep the rainy-hour threshold over a tidy precipitation series.
///
/// Returns one row per threshold - always, even for an empty series,
/// where the means are absent rather than zero.
pub fn threshold_sensitivity(
    observations: &[PrecipObservation],
    label: &str,
    thresholds_mm: &[f64],
) -> Vec<ThresholdSensitivity> {
    debug!(
        "Sweeping {} thresholds over {} observations for '{}'",
        thresholds_mm.len(),
        observations.len(),
        label
    );
    thresholds_mm
        .iter()
        .map(|&threshold_mm| {
            let annual = annual_precipitation_summary(observations, label, threshold_mm);
            let n_years = annual.len();
            let (mean_rainy_hours, mean_rainy_days) = if n_years == 0 {
                (None, None)
            } else {
                let hours = annual.iter().map(|row| row.rainy_hours as f64).sum::<f64>();
                let days = annual.iter().map(|row| row.rainy_days as f64).sum::<f64>();
                (
                    Some(hours / n_years as f64),
                    Some(days / n_years as f64),
                )
            };
            ThresholdSensitivity {
                label: label.to_string(),
                threshold_mm,
                mean_rainy_hours,
                mean_rainy_days,
            }
        })
        .collect()
}
