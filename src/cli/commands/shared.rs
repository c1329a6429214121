//! Shared helpers for CLI commands
//!
//! Logging setup, station-ID validation, the download-and-load step common
//! to all comparison commands, and small output helpers.

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use regex::Regex;
use serde::Serialize;
use tracing::{debug, info};

use crate::app::models::RawDataset;
use crate::app::services::isd_csv;
use crate::app::services::isd_download::{DownloaderConfig, IsdDownloader, default_cache_dir};
use crate::cli::args::CommonArgs;
use crate::config::StationSpec;
use crate::{Error, Result};

/// Set up structured logging to stderr at the given level
pub fn setup_logging(log_level: &str) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("isd_compare={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Check that a station ID has the `USAF-WBAN` shape (6 digits, hyphen,
/// 5 digits)
pub fn validate_station_id(station_id: &str) -> Result<()> {
    let pattern = Regex::new(r"^\d{6}-\d{5}$")
        .map_err(|e| Error::configuration(format!("invalid station-id pattern: {}", e)))?;
    if pattern.is_match(station_id) {
        Ok(())
    } else {
        Err(Error::configuration(format!(
            "Station ID '{}' is not in USAF-WBAN format (e.g. 725053-94728)",
            station_id
        )))
    }
}

/// Raw data for one city, ready for the series builder
#[derive(Debug)]
pub struct CityData {
    pub station: StationSpec,
    pub raw: RawDataset,
}

/// Download (or read from cache) and load the raw datasets for a set of
/// stations over the configured year range
pub fn download_city_data(common: &CommonArgs, stations: &[StationSpec]) -> Result<Vec<CityData>> {
    let cache_dir = common.cache_path.clone().unwrap_or_else(default_cache_dir);
    let downloader = IsdDownloader::new(DownloaderConfig {
        cache_dir,
        offline: common.offline,
        ..Default::default()
    })?;

    let n_years = (common.end_year - common.start_year + 1).max(0) as u64;
    let mut cities = Vec::new();
    for station in stations {
        validate_station_id(&station.station_id)?;

        let progress = common.show_progress().then(|| {
            let pb = ProgressBar::new(n_years);
            pb.set_style(ProgressStyle::default_bar());
            pb
        });
        let paths = downloader.fetch_station_years(
            &station.station_id,
            common.start_year,
            common.end_year,
            progress.as_ref(),
        );
        if let Some(pb) = progress {
            pb.finish_and_clear();
        }

        let raw = isd_csv::load_raw_files(&paths);
        info!(
            "{}: {} files, {} raw rows",
            station.label,
            paths.len(),
            raw.len()
        );
        cities.push(CityData {
            station: station.clone(),
            raw,
        });
    }
    Ok(cities)
}

/// Print a bold section heading for one city
pub fn print_section_heading(title: &str) {
    println!("\n{}", format!("=== {} ===", title).bold());
}

/// Serialize summary rows as pretty-printed JSON
pub fn to_json<T: Serialize>(rows: &[T]) -> Result<String> {
    serde_json::to_string_pretty(rows)
        .map_err(|e| Error::data_validation(format!("failed to serialize results: {}", e)))
}
