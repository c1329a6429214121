//! ISD Compare Library
//!
//! A Rust library for downloading NOAA Integrated Surface Database (ISD)
//! hourly weather observations and comparing annual precipitation and
//! temperature statistics between reference cities.
//!
//! This library provides tools for:
//! - Fetching station-year CSV objects from the public `noaa-global-hourly-pds`
//!   bucket with a flat write-once file cache
//! - Decoding compound ISD fields (AA1 precipitation, TMP temperature,
//!   AWn present-weather codes) into typed physical values
//! - Resolving duplicate observations across report types (FM-12/FM-15)
//!   with a deterministic priority policy
//! - Building tidy per-observation time series with unique, sorted timestamps
//! - Aggregating annual statistics: rainy hours/days, snow vs liquid rain,
//!   degree-deviation metrics, and rain-threshold sensitivity sweeps

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod annual_stats;
        pub mod cache_scanner;
        pub mod isd_csv;
        pub mod isd_download;
        pub mod series_builder;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{PrecipObservation, RawDataset, TempObservation};
pub use config::AnalysisConfig;

/// Result type alias for ISD comparison operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the I/O shell of the pipeline.
///
/// The decoding and aggregation core never returns these: per-value parse
/// failures degrade to missing values, and structurally absent columns
/// degrade to empty or all-missing results. Errors are reserved for the
/// download, cache, and CLI layers.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// HTTP request failed
    #[error("HTTP error: {message}")]
    Http {
        message: String,
        #[source]
        source: reqwest::Error,
    },

    /// CSV parsing error
    #[error("CSV parsing error in '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Data validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// Cache directory traversal error
    #[error("Cache scan error: {message}")]
    CacheScan {
        message: String,
        #[source]
        source: walkdir::Error,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an HTTP error with context
    pub fn http(message: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Http {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create a cache scan error with context
    pub fn cache_scan(message: impl Into<String>, source: walkdir::Error) -> Self {
        Self::CacheScan {
            message: message.into(),
            source,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Self::Http {
            message: "HTTP request failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<walkdir::Error> for Error {
    fn from(error: walkdir::Error) -> Self {
        Self::CacheScan {
            message: "cache directory traversal failed".to_string(),
            source: error,
        }
    }
}
