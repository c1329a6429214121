//! Tests for the tidy series construction pipeline

pub mod decoder_tests;
pub mod report_type_tests;

use chrono::{DateTime, TimeZone, Utc};

use crate::app::models::{ColumnPresence, RawDataset, RawObservation};
use crate::app::services::series_builder::report_type::TimedRecord;

/// UTC timestamp helper for test fixtures
pub fn utc(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0).unwrap()
}

/// Build a raw row with precipitation-flavored fields
pub fn precip_row(date: &str, report_type: Option<&str>, aa1: Option<&str>) -> RawObservation {
    RawObservation {
        timestamp: Some(date.to_string()),
        report_type: report_type.map(str::to_string),
        precipitation: aa1.map(str::to_string),
        ..Default::default()
    }
}

/// Build a raw row with temperature-flavored fields
pub fn temp_row(date: &str, report_type: Option<&str>, tmp: Option<&str>) -> RawObservation {
    RawObservation {
        timestamp: Some(date.to_string()),
        report_type: report_type.map(str::to_string),
        temperature: tmp.map(str::to_string),
        ..Default::default()
    }
}

/// Wrap rows in a dataset whose precipitation-relevant columns are present
pub fn precip_dataset(rows: Vec<RawObservation>) -> RawDataset {
    RawDataset {
        rows,
        columns: ColumnPresence {
            timestamp: true,
            report_type: true,
            precipitation: true,
            present_weather: [true, true, true],
            ..Default::default()
        },
    }
}

/// Wrap rows in a dataset whose temperature-relevant columns are present
pub fn temp_dataset(rows: Vec<RawObservation>) -> RawDataset {
    RawDataset {
        rows,
        columns: ColumnPresence {
            timestamp: true,
            report_type: true,
            temperature: true,
            ..Default::default()
        },
    }
}

/// Build a timed record for resolver tests
pub fn timed<V>(timestamp: DateTime<Utc>, report_type: Option<&str>, value: V) -> TimedRecord<V> {
    TimedRecord {
        timestamp,
        report_type: report_type.map(str::to_string),
        value,
    }
}
