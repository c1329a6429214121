//! Tests for the annual aggregation statistics


use chrono::{DateTime, NaiveDateTime, Utc};

use crate::app::models::{PrecipObservation, TempObservation};

/// Parse an ISO timestamp for test fixtures
pub fn ts(value: &str) -> DateTime<Utc> {
    let naive = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M").unwrap();
    DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc)
}

/// Build a precipitation series from (timestamp, depth) pairs
pub fn precip_series(records: &[(&str, Option<f64>)]) -> Vec<PrecipObservation> {
    records
        .iter()
        .map(|(when, depth)| PrecipObservation {
            timestamp: ts(when),
            precipitation_mm: *depth,
            is_snow: false,
        })
        .collect()
}

/// Build a precipitation series from (timestamp, depth, is_snow) triples
pub fn snow_series(records: &[(&str, Option<f64>, bool)]) -> Vec<PrecipObservation> {
    records
        .iter()
        .map(|(when, depth, is_snow)| PrecipObservation {
            timestamp: ts(when),
            precipitation_mm: *depth,
            is_snow: *is_snow,
        })
        .collect()
}

/// Build a temperature series from (timestamp, temp) pairs
pub fn temp_series(records: &[(&str, Option<f64>)]) -> Vec<TempObservation> {
    records
        .iter()
        .map(|(when, temp)| TempObservation {
            timestamp: ts(when),
            temp_c: *temp,
        })
        .collect()
}

/// Compare floats with a tight tolerance
pub fn approx_eq(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < 1e-9
}
