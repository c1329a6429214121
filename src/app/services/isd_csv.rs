//! Raw ISD CSV loading
//!
//! Reads ISD hourly CSV files into [`RawDataset`] batches. Every field is
//! kept as the raw string found in the file: compound fields are decoded
//! later by the series builder, so nothing here is validated beyond the
//! CSV structure itself. Empty cells become `None`, and concatenating
//! several files unions their column presence (a file without an AA1
//! column contributes rows whose precipitation is absent).

use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;
use tracing::{debug, error, info, warn};

use crate::app::models::{ColumnPresence, RawDataset, RawObservation};
use crate::constants::columns;
use crate::{Error, Result};

/// Header positions of the columns the pipeline consumes
#[derive(Debug, Clone, Copy, Default)]
struct ColumnIndices {
    timestamp: Option<usize>,
    report_type: Option<usize>,
    precipitation: Option<usize>,
    temperature: Option<usize>,
    present_weather: [Option<usize>; 3],
}

impl ColumnIndices {
    fn from_headers(headers: &StringRecord) -> Self {
        let position = |name: &str| headers.iter().position(|h| h.trim() == name);
        let mut present_weather = [None; 3];
        for (slot, name) in present_weather.iter_mut().zip(columns::PRESENT_WEATHER) {
            *slot = position(name);
        }
        Self {
            timestamp: position(columns::DATE),
            report_type: position(columns::REPORT_TYPE),
            precipitation: position(columns::PRECIPITATION),
            temperature: position(columns::TEMPERATURE),
            present_weather,
        }
    }

    fn presence(&self) -> ColumnPresence {
        ColumnPresence {
            timestamp: self.timestamp.is_some(),
            report_type: self.report_type.is_some(),
            precipitation: self.precipitation.is_some(),
            temperature: self.temperature.is_some(),
            present_weather: self.present_weather.map(|index| index.is_some()),
        }
    }
}

/// Get a trimmed, non-empty field value from a CSV record
fn get_field(record: &StringRecord, index: Option<usize>) -> Option<String> {
    index
        .and_then(|i| record.get(i))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Read one CSV stream into a raw dataset.
///
/// Malformed records are skipped with a warning; only a missing or
/// unreadable header row is an error. `source` names the input in logs
/// and error messages.
pub fn read_raw_csv<R: Read>(reader: R, source: &str) -> Result<RawDataset> {
    let mut csv_reader = ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers = csv_reader
        .headers()
        .map_err(|e| Error::csv_parsing(source, "failed to read header row", Some(e)))?
        .clone();
    let indices = ColumnIndices::from_headers(&headers);

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                warn!("Skipping malformed CSV record in {}: {}", source, e);
                continue;
            }
        };
        rows.push(RawObservation {
            timestamp: get_field(&record, indices.timestamp),
            report_type: get_field(&record, indices.report_type),
            precipitation: get_field(&record, indices.precipitation),
            temperature: get_field(&record, indices.temperature),
            present_weather: indices
                .present_weather
                .map(|index| get_field(&record, index)),
        });
    }

    debug!("Parsed {} rows from {}", rows.len(), source);
    Ok(RawDataset {
        rows,
        columns: indices.presence(),
    })
}

/// Load and concatenate several cached CSV files.
///
/// A file that cannot be opened or parsed is logged and skipped so that
/// one bad station-year does not halt a multi-year batch. An empty result
/// is valid (and warned about), not an error.
pub fn load_raw_files(paths: &[PathBuf]) -> RawDataset {
    let mut combined = RawDataset::default();
    for path in paths {
        let source = path.display().to_string();
        let loaded = File::open(path)
            .map_err(|e| Error::io(format!("failed to open {}", source), e))
            .and_then(|file| read_raw_csv(file, &source));
        match loaded {
            Ok(dataset) => {
                info!("Loaded {} ({} rows)", source, dataset.len());
                combined.append(dataset);
            }
            Err(e) => error!("Error reading {}: {}", source, e),
        }
    }
    if combined.is_empty() {
        warn!("No data loaded; dataset is empty");
    } else {
        info!("Combined dataset: {} rows", combined.len());
    }
    combined
}
