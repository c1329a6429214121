//! Data models for the ISD comparison pipeline
//!
//! This module contains the raw row representation produced by the CSV
//! loader, the typed per-observation series produced by the series builder,
//! and the summary row types produced by the annual aggregators. All of
//! them are plain value types: each pipeline stage owns its output
//! exclusively until it hands it to the next stage.

use chrono::{DateTime, Utc};
use serde::Serialize;

// =============================================================================
// Raw Rows
// =============================================================================

/// One untyped record from an ISD CSV file.
///
/// Every field is the raw string as found in the file (trimmed, with empty
/// cells mapped to `None`). Values may be malformed or carry sentinel
/// "missing" strings; nothing is validated at this stage.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawObservation {
    pub timestamp: Option<String>,
    pub report_type: Option<String>,
    /// Compound AA1 field: `period,depth,condition,quality`
    pub precipitation: Option<String>,
    /// Compound TMP field: `signed_tenths,quality`
    pub temperature: Option<String>,
    /// Automated present-weather fields AW1..AW3, each `condition,quality`
    pub present_weather: [Option<String>; 3],
}

/// Which columns were present in the source header(s).
///
/// Column absence is structural information: a missing DATE column makes
/// the whole file unusable, while a missing AA1 column merely yields an
/// all-missing precipitation series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnPresence {
    pub timestamp: bool,
    pub report_type: bool,
    pub precipitation: bool,
    pub temperature: bool,
    pub present_weather: [bool; 3],
}

impl ColumnPresence {
    /// Union with another file's header (concatenation semantics)
    pub fn merge(&mut self, other: &ColumnPresence) {
        self.timestamp |= other.timestamp;
        self.report_type |= other.report_type;
        self.precipitation |= other.precipitation;
        self.temperature |= other.temperature;
        for (slot, present) in self.present_weather.iter_mut().zip(other.present_weather) {
            *slot |= present;
        }
    }
}

/// A batch of raw observations with their combined column presence
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawDataset {
    pub rows: Vec<RawObservation>,
    pub columns: ColumnPresence,
}

impl RawDataset {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Append another dataset, unioning column presence
    pub fn append(&mut self, mut other: RawDataset) {
        self.columns.merge(&other.columns);
        self.rows.append(&mut other.rows);
    }
}

// =============================================================================
// Decoded Observation Series
// =============================================================================

/// One decoded precipitation observation.
///
/// `precipitation_mm` is `None` for missing values; missing propagates
/// through aggregation (excluded from sums and counts, never treated as
/// zero). Within one series timestamps are unique and strictly increasing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PrecipObservation {
    pub timestamp: DateTime<Utc>,
    pub precipitation_mm: Option<f64>,
    /// True when a present-weather field flagged frozen precipitation
    pub is_snow: bool,
}

impl PrecipObservation {
    /// Measurable-precipitation predicate: strictly above the threshold.
    /// Missing depths are never rainy.
    pub fn is_rainy(&self, threshold_mm: f64) -> bool {
        self.precipitation_mm
            .is_some_and(|depth| depth > threshold_mm)
    }

    /// A snow hour is a rainy hour flagged frozen
    pub fn is_snow_hour(&self, threshold_mm: f64) -> bool {
        self.is_rainy(threshold_mm) && self.is_snow
    }

    /// A liquid-rain hour is a rainy hour not flagged frozen
    pub fn is_liquid_rain_hour(&self, threshold_mm: f64) -> bool {
        self.is_rainy(threshold_mm) && !self.is_snow
    }
}

/// One decoded temperature observation (same timestamp invariants)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TempObservation {
    pub timestamp: DateTime<Utc>,
    pub temp_c: Option<f64>,
}

// =============================================================================
// Summary Rows
// =============================================================================

/// Overall (non-annual) rainy-hour statistics for one station
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RainyHoursSummary {
    pub label: String,
    /// Hours with a non-missing precipitation value
    pub total_hours: usize,
    pub rainy_hours: usize,
    /// `rainy_hours / total_hours`, absent when there are no valid hours
    pub rainy_fraction: Option<f64>,
    /// Mean depth over rainy hours only, absent when none are rainy
    pub mean_precip_mm: Option<f64>,
    pub total_precip_mm: f64,
}

/// Annual precipitation statistics for one (station, calendar year).
///
/// Invariants: `rainy_hours == snow_hours + liquid_rain_hours`, and a
/// calendar day with at least one snow hour is counted as a snow day and
/// never as a liquid-rain day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnualPrecipSummary {
    pub label: String,
    pub year: i32,
    pub total_precip_mm: f64,
    pub rainy_hours: usize,
    pub rainy_days: usize,
    pub snow_hours: usize,
    pub snow_days: usize,
    pub liquid_rain_hours: usize,
    pub liquid_rain_days: usize,
}

/// Annual temperature statistics for one (station, calendar year), using
/// the fixed heating/cooling/comfort baselines. All means are normalized
/// per valid observation rather than per calendar hour, which keeps
/// differently-sampled stations comparable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnualTempSummary {
    pub label: String,
    pub year: i32,
    pub n_obs: usize,
    pub mean_hdd_c: f64,
    pub mean_cdd_c: f64,
    pub mean_comfort_dev_c: f64,
    pub sub_zero_hours: usize,
}

/// Annual symmetric deviation statistics for one (station, year, baseline)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BaselineDeviationSummary {
    pub label: String,
    pub year: i32,
    pub baseline: String,
    pub baseline_c: f64,
    pub n_obs: usize,
    /// Mean of `max(baseline - T, 0)` over valid observations
    pub mean_cold_dev_c: f64,
    /// Mean of `max(T - baseline, 0)` over valid observations
    pub mean_warm_dev_c: f64,
    pub sub_zero_hours: usize,
}

/// Cross-year mean rainy counts at one sweep threshold. The means are
/// absent (not zero) when the series has no aggregable years.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThresholdSensitivity {
    pub label: String,
    pub threshold_mm: f64,
    pub mean_rainy_hours: Option<f64>,
    pub mean_rainy_days: Option<f64>,
}
