//! Annual temperature degree-deviation aggregation
//!
//! The primary operation computes symmetric cold/warm deviations against
//! an arbitrary set of named baselines, one row per (year, baseline). The
//! fixed heating/cooling/comfort metrics are a parameterization of it:
//! heating takes the cold side at 15.5 degC, cooling the warm side at
//! 18.0 degC, and the comfort deviation is cold + warm at 21.0 degC
//! (each observation contributes to exactly one side, so the sum equals
//! the mean absolute deviation).
//!
//! All means are normalized per valid observation rather than per
//! calendar hour, which keeps differently-sampled station networks
//! comparable.

use chrono::Datelike;
use std::collections::BTreeMap;
use tracing::debug;

use crate::app::models::{AnnualTempSummary, BaselineDeviationSummary, TempObservation};
use crate::config::TempBaselines;

const HEATING: &str = "heating";
const COOLING: &str = "cooling";
const COMFORT: &str = "comfort";

#[derive(Debug, Default)]
struct YearAccumulator {
    n_obs: usize,
    cold_dev_sum: f64,
    warm_dev_sum: f64,
    sub_zero_hours: usize,
}

/// Aggregate a tidy temperature series against a set of named baselines,
/// producing one row per (UTC calendar year, baseline).
///
/// Missing temperatures are excluded from `n_obs` and all sums; a year
/// with no valid observation produces no row for any baseline. Rows are
/// ordered by year, with baselines in input order within a year.
pub fn annual_baseline_deviations(
    observations: &[TempObservation],
    label: &str,
    baselines: &[(String, f64)],
) -> Vec<BaselineDeviationSummary> {
    let mut rows = Vec::new();

    for (name, base) in baselines {
        let mut years: BTreeMap<i32, YearAccumulator> = BTreeMap::new();
        for obs in observations {
            let Some(temp) = obs.temp_c else {
                continue;
            };
            let acc = years.entry(obs.timestamp.year()).or_default();
            acc.n_obs += 1;
            acc.cold_dev_sum += (base - temp).max(0.0);
            acc.warm_dev_sum += (temp - base).max(0.0);
            if temp < 0.0 {
                acc.sub_zero_hours += 1;
            }
        }
        for (year, acc) in years {
            rows.push(BaselineDeviationSummary {
                label: label.to_string(),
                year,
                baseline: name.clone(),
                baseline_c: *base,
                n_obs: acc.n_obs,
                mean_cold_dev_c: acc.cold_dev_sum / acc.n_obs as f64,
                mean_warm_dev_c: acc.warm_dev_sum / acc.n_obs as f64,
                sub_zero_hours: acc.sub_zero_hours,
            });
        }
    }

    // Stable sort: baselines stay in input order within each year.
    rows.sort_by_key(|row| row.year);

    debug!(
        "Computed {} (year, baseline) rows for '{}' over {} baselines",
        rows.len(),
        label,
        baselines.len()
    );
    rows
}

/// Aggregate a tidy temperature series into the fixed annual metrics:
/// mean heating/cooling degree deviations, mean comfort deviation, and
/// sub-zero hour count.
///
/// Years with `n_obs == 0` are absent rows, never NaN rows.
pub fn annual_temperature_summary(
    observations: &[TempObservation],
    label: &str,
    baselines: &TempBaselines,
) -> Vec<AnnualTempSummary> {
    let named = [
        (HEATING.to_string(), baselines.heating_base_c),
        (COOLING.to_string(), baselines.cooling_base_c),
        (COMFORT.to_string(), baselines.comfort_base_c),
    ];
    let deviation_rows = annual_baseline_deviations(observations, label, &named);

    #[derive(Debug, Default)]
    struct Combined {
        n_obs: usize,
        sub_zero_hours: usize,
        mean_hdd_c: f64,
        mean_cdd_c: f64,
        mean_comfort_dev_c: f64,
    }

    let mut by_year: BTreeMap<i32, Combined> = BTreeMap::new();
    for row in deviation_rows {
        let entry = by_year.entry(row.year).or_default();
        entry.n_obs = row.n_obs;
        entry.sub_zero_hours = row.sub_zero_hours;
        match row.baseline.as_str() {
            HEATING => entry.mean_hdd_c = row.mean_cold_dev_c,
            COOLING => entry.mean_cdd_c = row.mean_warm_dev_c,
            COMFORT => entry.mean_comfort_dev_c = row.mean_cold_dev_c + row.mean_warm_dev_c,
            _ => {}
        }
    }

    by_year
        .into_iter()
        .map(|(year, combined)| AnnualTempSummary {
            label: label.to_string(),
            year,
            n_obs: combined.n_obs,
            mean_hdd_c: combined.mean_hdd_c,
            mean_cdd_c: combined.mean_cdd_c,
            mean_comfort_dev_c: combined.mean_comfort_dev_c,
            sub_zero_hours: combined.sub_zero_hours,
        })
        .collect()
}
