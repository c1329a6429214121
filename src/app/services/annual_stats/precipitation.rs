//! Annual precipitation aggregation
//!
//! An hour is rainy when its depth strictly exceeds the threshold; a day
//! is rainy when it contains at least one rainy hour. Snow hours are rainy
//! hours flagged frozen, liquid-rain hours the rest, so per year
//! `rainy_hours == snow_hours + liquid_rain_hours`. Day counts are not
//! additive the same way: a day with both snow and liquid hours belongs to
//! snow days only.

use chrono::{Datelike, NaiveDate};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

use crate::app::models::{AnnualPrecipSummary, PrecipObservation, RainyHoursSummary};

#[derive(Debug, Default)]
struct YearAccumulator {
    total_precip_mm: f64,
    rainy_hours: usize,
    snow_hours: usize,
    liquid_rain_hours: usize,
    rainy_dates: BTreeSet<NaiveDate>,
    snow_dates: BTreeSet<NaiveDate>,
    liquid_dates: BTreeSet<NaiveDate>,
}

/// Aggregate a tidy precipitation series into one summary row per UTC
/// calendar year.
///
/// Missing-depth observations are excluded entirely; a year whose every
/// row is missing does not appear in the output. Sums use plain f64
/// arithmetic with no rounding.
pub fn annual_precipitation_summary(
    observations: &[PrecipObservation],
    label: &str,
    threshold_mm: f64,
) -> Vec<AnnualPrecipSummary> {
    let mut years: BTreeMap<i32, YearAccumulator> = BTreeMap::new();

    for obs in observations {
        let Some(depth) = obs.precipitation_mm else {
            continue;
        };
        let date = obs.timestamp.date_naive();
        let acc = years.entry(obs.timestamp.year()).or_default();
        acc.total_precip_mm += depth;
        if obs.is_rainy(threshold_mm) {
            acc.rainy_hours += 1;
            acc.rainy_dates.insert(date);
            if obs.is_snow {
                acc.snow_hours += 1;
                acc.snow_dates.insert(date);
            } else {
                acc.liquid_rain_hours += 1;
                acc.liquid_dates.insert(date);
            }
        }
    }

    debug!(
        "Aggregated {} observations into {} year rows for '{}'",
        observations.len(),
        years.len(),
        label
    );

    years
        .into_iter()
        .map(|(year, acc)| {
            // A mixed day counts as a snow day only.
            let liquid_rain_days = acc.liquid_dates.difference(&acc.snow_dates).count();
            AnnualPrecipSummary {
                label: label.to_string(),
                year,
                total_precip_mm: acc.total_precip_mm,
                rainy_hours: acc.rainy_hours,
                rainy_days: acc.rainy_dates.len(),
                snow_hours: acc.snow_hours,
                snow_days: acc.snow_dates.len(),
                liquid_rain_hours: acc.liquid_rain_hours,
                liquid_rain_days,
            }
        })
        .collect()
}

/// Overall (non-annual) rainy-hour statistics for a series.
///
/// `total_hours` counts observations with a non-missing depth;
/// `mean_precip_mm` averages over rainy hours only and is absent when no
/// hour qualifies.
pub fn rainy_hours_summary(
    observations: &[PrecipObservation],
    label: &str,
    threshold_mm: f64,
) -> RainyHoursSummary {
    let valid: Vec<f64> = observations
        .iter()
        .filter_map(|obs| obs.precipitation_mm)
        .collect();
    let total_hours = valid.len();
    let rainy: Vec<f64> = valid
        .iter()
        .copied()
        .filter(|depth| *depth > threshold_mm)
        .collect();
    let rainy_hours = rainy.len();

    RainyHoursSummary {
        label: label.to_string(),
        total_hours,
        rainy_hours,
        rainy_fraction: (total_hours > 0).then(|| rainy_hours as f64 / total_hours as f64),
        mean_precip_mm: (rainy_hours > 0).then(|| rainy.iter().sum::<f64>() / rainy_hours as f64),
        total_precip_mm: valid.iter().sum(),
    }
}
