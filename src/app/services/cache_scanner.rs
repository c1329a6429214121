//! Cache scanner for the flat ISD download cache
//!
//! Discovers cached station-year CSV files and summarizes them for the
//! `cache` command. Cache filenames follow `YYYY_USAFWBAN.csv` (the object
//! key with the slash flattened), so the year and station can be read back
//! from the name alone.

use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use crate::Result;

/// Information about a discovered cache file
#[derive(Debug, Clone, Serialize)]
pub struct CacheFileInfo {
    pub path: PathBuf,
    /// Station identifier without the USAF-WBAN hyphen, as used in keys
    pub station: Option<String>,
    pub year: Option<i32>,
    pub size_bytes: u64,
}

impl CacheFileInfo {
    fn from_name(path: PathBuf, name: &str, size_bytes: u64) -> Self {
        let stem = name.strip_suffix(".csv").unwrap_or(name);
        let (year, station) = match stem.split_once('_') {
            Some((year_part, station_part)) => {
                (year_part.parse::<i32>().ok(), Some(station_part.to_string()))
            }
            None => (None, None),
        };
        Self {
            path,
            station,
            year,
            size_bytes,
        }
    }
}

/// Aggregate statistics over the discovered cache files
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    pub total_files: usize,
    pub total_size_bytes: u64,
    pub files_by_year: BTreeMap<i32, usize>,
    pub files_by_station: BTreeMap<String, usize>,
}

/// Scan the cache directory for station-year CSV files.
///
/// A nonexistent directory yields an empty listing, not an error - the
/// cache simply has not been populated yet.
pub fn scan_cache(cache_dir: &Path) -> Result<Vec<CacheFileInfo>> {
    let mut files = Vec::new();
    if !cache_dir.exists() {
        debug!("Cache directory {} does not exist", cache_dir.display());
        return Ok(files);
    }

    for entry in WalkDir::new(cache_dir).max_depth(1) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if !name.ends_with(".csv") {
            continue;
        }
        let size_bytes = entry.metadata()?.len();
        files.push(CacheFileInfo::from_name(
            entry.path().to_path_buf(),
            &name,
            size_bytes,
        ));
    }

    debug!(
        "Discovered {} cached files in {}",
        files.len(),
        cache_dir.display()
    );
    Ok(files)
}

/// Summarize a cache listing
pub fn cache_stats(files: &[CacheFileInfo]) -> CacheStats {
    let mut stats = CacheStats {
        total_files: files.len(),
        ..Default::default()
    };
    for file in files {
        stats.total_size_bytes += file.size_bytes;
        if let Some(year) = file.year {
            *stats.files_by_year.entry(year).or_insert(0) += 1;
        }
        if let Some(station) = &file.station {
            *stats.files_by_station.entry(station.clone()).or_insert(0) += 1;
        }
    }
    stats
}

/// Format a byte count in human-readable units
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
    let mut size = bytes as f64;
    let mut unit_index = 0;
    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }
    if unit_index == 0 {
        format!("{} {}", bytes, UNITS[unit_index])
    } else {
        format!("{:.2} {}", size, UNITS[unit_index])
    }
}
