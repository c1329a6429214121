//! Tidy series construction pipelines
//!
//! Orchestrates timestamp parsing, field decoding, report-type resolution,
//! and deduplication into one tidy series per flavor. Output guarantees:
//! timestamps are unique and strictly increasing, and decoding never
//! raises - unparseable values become missing and propagate as such.
//!
//! A missing timestamp column and an input whose every timestamp fails to
//! parse both yield an empty series with no distinguishing signal; callers
//! that care must check the raw dataset themselves.

use chrono::{DateTime, NaiveDateTime, Utc};
use tracing::{debug, info, warn};

use crate::app::models::{PrecipObservation, RawDataset, TempObservation};
use crate::config::AnalysisConfig;
use crate::constants::{self, columns};

use super::decoders;
use super::report_type::{self, TimedRecord};
use super::snow;

/// Parse an ISD DATE value into a UTC instant.
///
/// Tries the configured naive formats first, then RFC 3339 for values
/// carrying an explicit offset. Returns `None` on failure; the builder
/// drops such rows.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    for format in constants::TIMESTAMP_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc));
        }
    }
    DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Build a tidy precipitation series from raw ISD rows.
///
/// Rows with unparseable timestamps are dropped. The AA1 depth is decoded
/// to mm and the frozen-precipitation flag is attached from the AWn
/// fields. Duplicate timestamps keep the first occurrence in file order.
pub fn build_precipitation_series(
    raw: &RawDataset,
    config: &AnalysisConfig,
) -> Vec<PrecipObservation> {
    if raw.is_empty() {
        warn!("Input dataset is empty; nothing to process");
        return Vec::new();
    }
    if !raw.columns.timestamp {
        warn!(
            "'{}' column is missing; returning empty series",
            columns::DATE
        );
        return Vec::new();
    }
    if !raw.columns.precipitation {
        warn!(
            "'{}' column not found; precipitation will be all-missing",
            columns::PRECIPITATION
        );
    }

    let records = decode_rows(raw, |row| {
        let depth = row
            .precipitation
            .as_deref()
            .and_then(|value| decoders::decode_aa1_depth_mm(value, &config.precip_decoder));
        let is_snow = snow::is_frozen_precipitation(row, &config.snow_flags);
        (depth, is_snow)
    });

    let records = apply_type_filter(records, raw, config);
    let mut records = report_type::dedup_first_by_timestamp(records);
    records.sort_by_key(|record| record.timestamp);

    info!("Built precipitation series: {} observations", records.len());
    records
        .into_iter()
        .map(|record| PrecipObservation {
            timestamp: record.timestamp,
            precipitation_mm: record.value.0,
            is_snow: record.value.1,
        })
        .collect()
}

/// Build a tidy temperature series from raw ISD rows.
///
/// On top of the precipitation pipeline this resolves mixed-resolution
/// report types: when more than one preference is configured and the
/// first preferred type is present, lower-priority types are dropped
/// globally before the per-timestamp dedup.
pub fn build_temperature_series(raw: &RawDataset, config: &AnalysisConfig) -> Vec<TempObservation> {
    if raw.is_empty() {
        warn!("Input dataset is empty; nothing to process");
        return Vec::new();
    }
    if !raw.columns.timestamp {
        warn!(
            "'{}' column is missing; returning empty series",
            columns::DATE
        );
        return Vec::new();
    }
    if !raw.columns.temperature {
        warn!(
            "'{}' column not found; temperature will be all-missing",
            columns::TEMPERATURE
        );
    }

    let records = decode_rows(raw, |row| {
        row.temperature
            .as_deref()
            .and_then(|value| decoders::decode_tmp_celsius(value, &config.temp_decoder))
    });

    let mut records = apply_type_filter(records, raw, config);
    if raw.columns.report_type {
        records = report_type::drop_superseded_types(records, &config.report_types);
        report_type::sort_by_preference(&mut records, &config.report_types);
    }
    let mut records = report_type::dedup_first_by_timestamp(records);
    records.sort_by_key(|record| record.timestamp);

    info!("Built temperature series: {} observations", records.len());
    records
        .into_iter()
        .map(|record| TempObservation {
            timestamp: record.timestamp,
            temp_c: record.value,
        })
        .collect()
}

/// Parse timestamps and decode one value per row, dropping rows whose
/// timestamp fails to parse
fn decode_rows<V>(
    raw: &RawDataset,
    decode: impl Fn(&crate::app::models::RawObservation) -> V,
) -> Vec<TimedRecord<V>> {
    let mut records = Vec::with_capacity(raw.len());
    let mut dropped = 0usize;
    for row in &raw.rows {
        let Some(timestamp) = row.timestamp.as_deref().and_then(parse_timestamp) else {
            dropped += 1;
            continue;
        };
        records.push(TimedRecord {
            timestamp,
            report_type: row.report_type.clone(),
            value: decode(row),
        });
    }
    if dropped > 0 {
        debug!("Dropped {} rows with unparseable timestamps", dropped);
    }
    records
}

/// Apply the allowed-type filter, skipping it (with a warning) when the
/// report-type column is absent from the input
fn apply_type_filter<V>(
    records: Vec<TimedRecord<V>>,
    raw: &RawDataset,
    config: &AnalysisConfig,
) -> Vec<TimedRecord<V>> {
    if raw.columns.report_type {
        report_type::retain_allowed_types(records, &config.report_types)
    } else {
        if !config.report_types.is_empty() {
            warn!(
                "'{}' column not found; skipping report-type filter",
                columns::REPORT_TYPE
            );
        }
        records
    }
}
