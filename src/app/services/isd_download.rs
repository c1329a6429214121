//! Fetch-or-cache download of ISD station-year objects
//!
//! The `noaa-global-hourly-pds` bucket serves one CSV per station-year
//! under the key `YYYY/USAFWBAN.csv` (the hyphen in the conventional
//! `USAF-WBAN` station ID is omitted from the key). Downloads go through a
//! flat write-once file cache so repeated runs never re-fetch the same
//! object; a missing object or a failed request is logged and skipped,
//! never fatal for the batch.

use indicatif::ProgressBar;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, error, info, warn};

use crate::constants;
use crate::{Error, Result};

/// Bucket object keys for one station over an inclusive year range
pub fn object_keys(station_id: &str, start_year: i32, end_year: i32) -> Vec<String> {
    (start_year..=end_year)
        .map(|year| constants::object_key(station_id, year))
        .collect()
}

/// Platform cache directory for downloaded station-year files
pub fn default_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from(".cache"))
        .join(constants::CACHE_DIR_NAME)
}

/// Downloader settings
#[derive(Debug, Clone)]
pub struct DownloaderConfig {
    pub base_url: String,
    pub cache_dir: PathBuf,
    pub timeout: Duration,
    /// Serve from the cache only; objects not already cached are skipped
    pub offline: bool,
}

impl Default for DownloaderConfig {
    fn default() -> Self {
        Self {
            base_url: constants::ISD_BUCKET_URL.to_string(),
            cache_dir: default_cache_dir(),
            timeout: Duration::from_secs(60),
            offline: false,
        }
    }
}

/// HTTP client plus flat file cache for ISD objects
#[derive(Debug)]
pub struct IsdDownloader {
    client: Client,
    config: DownloaderConfig,
}

impl IsdDownloader {
    /// Create a downloader, ensuring the cache directory exists
    pub fn new(config: DownloaderConfig) -> Result<Self> {
        fs::create_dir_all(&config.cache_dir).map_err(|e| {
            Error::io(
                format!(
                    "failed to create cache directory {}",
                    config.cache_dir.display()
                ),
                e,
            )
        })?;
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::http("failed to build HTTP client", e))?;
        Ok(Self { client, config })
    }

    /// Local cache path for an object key
    pub fn cache_path(&self, key: &str) -> PathBuf {
        self.config.cache_dir.join(constants::cache_file_name(key))
    }

    /// Fetch one object, serving from the cache when possible.
    ///
    /// Returns `Ok(None)` when the object does not exist in the bucket
    /// (or is not cached in offline mode).
    pub fn fetch(&self, key: &str) -> Result<Option<PathBuf>> {
        let cache_file = self.cache_path(key);
        if cache_file.exists() {
            info!("Cache hit: {}", cache_file.display());
            return Ok(Some(cache_file));
        }
        if self.config.offline {
            warn!("Offline mode and not cached: {} - skipping", key);
            return Ok(None);
        }

        let url = format!("{}/{}", self.config.base_url.trim_end_matches('/'), key);
        info!("Downloading {}", url);
        let response = self
            .client
            .get(url.as_str())
            .send()
            .map_err(|e| Error::http(format!("request for '{}' failed", key), e))?;
        if response.status() == StatusCode::NOT_FOUND {
            warn!("Not found: {} - skipping", url);
            return Ok(None);
        }
        let response = response
            .error_for_status()
            .map_err(|e| Error::http(format!("request for '{}' failed", key), e))?;
        let bytes = response
            .bytes()
            .map_err(|e| Error::http(format!("failed to read body for '{}'", key), e))?;

        fs::write(&cache_file, &bytes).map_err(|e| {
            Error::io(
                format!("failed to write cache file {}", cache_file.display()),
                e,
            )
        })?;
        debug!("Cached {} bytes to {}", bytes.len(), cache_file.display());
        Ok(Some(cache_file))
    }

    /// Fetch every station-year in the range, returning the local paths
    /// that exist afterwards.
    ///
    /// Individual failures are logged and skipped so one bad year never
    /// aborts the batch.
    pub fn fetch_station_years(
        &self,
        station_id: &str,
        start_year: i32,
        end_year: i32,
        progress: Option<&ProgressBar>,
    ) -> Vec<PathBuf> {
        let keys = object_keys(station_id, start_year, end_year);
        info!(
            "Generated {} object keys for station {} ({}-{})",
            keys.len(),
            station_id,
            start_year,
            end_year
        );

        let mut paths = Vec::new();
        for key in &keys {
            if let Some(pb) = progress {
                pb.set_message(key.clone());
            }
            match self.fetch(key) {
                Ok(Some(path)) => paths.push(path),
                Ok(None) => {}
                Err(e) => error!("Error downloading {}: {}", key, e),
            }
            if let Some(pb) = progress {
                pb.inc(1);
            }
        }
        paths
    }
}
