//! Command-line argument definitions for the ISD comparison tool
//!
//! This module defines the CLI interface using the clap derive API. Each
//! subcommand validates its own arguments and maps verbosity flags to a
//! tracing log level.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::str::FromStr;

use crate::constants;
use crate::{Error, Result};

/// CLI arguments for the ISD comparison tool
///
/// Downloads NOAA ISD hourly observations for the reference cities and
/// prints annual precipitation and temperature comparison tables.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "isd-compare",
    version,
    about = "Compare hourly NOAA ISD weather statistics between reference cities",
    long_about = "Downloads hourly surface observations for London (Heathrow) and NYC \
                  (Central Park) from the public noaa-global-hourly-pds bucket, cleans \
                  them into tidy time series, and prints annual rainy-hour, snow-split, \
                  and temperature degree-deviation comparison tables."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Annual precipitation statistics per city (rainy hours/days, snow split)
    Report(ReportArgs),
    /// Annual temperature degree-deviation statistics per city
    Temperature(TemperatureArgs),
    /// Sweep the rainy-hour threshold and report cross-year means
    Sensitivity(SensitivityArgs),
    /// Inspect the local download cache
    Cache(CacheArgs),
}

/// Arguments shared by the comparison subcommands
#[derive(Debug, Clone, clap::Args)]
pub struct CommonArgs {
    /// First year to include (inclusive)
    #[arg(
        long = "start",
        value_name = "YEAR",
        default_value_t = constants::DEFAULT_START_YEAR
    )]
    pub start_year: i32,

    /// Last year to include (inclusive)
    #[arg(
        long = "end",
        value_name = "YEAR",
        default_value_t = constants::DEFAULT_END_YEAR
    )]
    pub end_year: i32,

    /// Cache directory for downloaded station-year files
    ///
    /// Defaults to the platform cache directory (e.g. ~/.cache/isd_compare).
    #[arg(long = "cache-path", value_name = "PATH")]
    pub cache_path: Option<PathBuf>,

    /// Use only files already present in the cache, skipping all downloads
    #[arg(long = "offline")]
    pub offline: bool,

    /// Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output format for results
    #[arg(long = "output-format", value_enum, default_value = "human")]
    pub output_format: OutputFormat,
}

impl CommonArgs {
    /// Validate the year range
    pub fn validate(&self) -> Result<()> {
        if self.start_year > self.end_year {
            return Err(Error::configuration(format!(
                "Start year {} is after end year {}",
                self.start_year, self.end_year
            )));
        }
        // ISD coverage begins in 1901.
        if self.start_year < 1901 || self.end_year > 2100 {
            return Err(Error::configuration(format!(
                "Year range {}-{} is outside 1901-2100",
                self.start_year, self.end_year
            )));
        }
        Ok(())
    }

    /// Determine the tracing log level from the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Progress bars are shown unless quiet or machine-readable output
    pub fn show_progress(&self) -> bool {
        !self.quiet && matches!(self.output_format, OutputFormat::Human)
    }
}

/// Arguments for the precipitation report command
#[derive(Debug, Clone, Parser)]
pub struct ReportArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Rainy-hour threshold in mm (strictly-greater-than comparison)
    #[arg(
        long = "threshold",
        value_name = "MM",
        default_value_t = constants::RAINY_THRESHOLD_MM
    )]
    pub threshold_mm: f64,

    /// Disable report-type filtering (keep every row type)
    #[arg(long = "all-report-types")]
    pub all_report_types: bool,
}

impl ReportArgs {
    pub fn validate(&self) -> Result<()> {
        self.common.validate()?;
        if self.threshold_mm < 0.0 {
            return Err(Error::configuration(format!(
                "Rain threshold must be non-negative, got {}",
                self.threshold_mm
            )));
        }
        Ok(())
    }
}

/// Arguments for the temperature report command
#[derive(Debug, Clone, Parser)]
pub struct TemperatureArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Named baseline override, repeatable (e.g. --baseline comfort=21)
    ///
    /// When given, the command reports symmetric cold/warm deviations per
    /// (year, baseline) instead of the fixed heating/cooling/comfort metrics.
    #[arg(long = "baseline", value_name = "LABEL=DEGC")]
    pub baselines: Vec<BaselineSpec>,
}

impl TemperatureArgs {
    pub fn validate(&self) -> Result<()> {
        self.common.validate()
    }
}

/// Arguments for the threshold sensitivity command
#[derive(Debug, Clone, Parser)]
pub struct SensitivityArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Explicit sweep thresholds in mm (comma-separated list)
    ///
    /// Defaults to 0 plus 50 log-spaced values from 0.01 to 5.0.
    #[arg(long = "thresholds", value_name = "LIST")]
    pub thresholds: Option<ThresholdList>,
}

impl SensitivityArgs {
    pub fn validate(&self) -> Result<()> {
        self.common.validate()
    }
}

/// Arguments for the cache inspection command
#[derive(Debug, Clone, Parser)]
pub struct CacheArgs {
    /// Cache directory to inspect (defaults to the platform cache directory)
    #[arg(long = "cache-path", value_name = "PATH")]
    pub cache_path: Option<PathBuf>,

    /// Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Output format for results
    #[arg(long = "output-format", value_enum, default_value = "human")]
    pub output_format: OutputFormat,
}

impl CacheArgs {
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Output format options for machine-readable results
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables
    Human,
    /// JSON for scripting
    Json,
}

/// One named baseline temperature parsed from `LABEL=DEGC`
#[derive(Debug, Clone, PartialEq)]
pub struct BaselineSpec {
    pub label: String,
    pub base_c: f64,
}

impl FromStr for BaselineSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (label, value) = s.split_once('=').ok_or_else(|| {
            Error::configuration(format!(
                "Baseline '{}' must be in LABEL=DEGC format, e.g. comfort=21",
                s
            ))
        })?;
        let label = label.trim();
        if label.is_empty() {
            return Err(Error::configuration(
                "Baseline label cannot be empty".to_string(),
            ));
        }
        let base_c: f64 = value.trim().parse().map_err(|_| {
            Error::configuration(format!("Invalid baseline temperature '{}'", value))
        })?;
        Ok(Self {
            label: label.to_string(),
            base_c,
        })
    }
}

/// Wrapper for parsing comma-separated threshold lists
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdList {
    pub thresholds_mm: Vec<f64>,
}

impl FromStr for ThresholdList {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut thresholds_mm = Vec::new();
        for part in s.split(',') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            let value: f64 = part
                .parse()
                .map_err(|_| Error::configuration(format!("Invalid threshold '{}'", part)))?;
            if value < 0.0 {
                return Err(Error::configuration(format!(
                    "Thresholds must be non-negative, got {}",
                    value
                )));
            }
            thresholds_mm.push(value);
        }
        if thresholds_mm.is_empty() {
            return Err(Error::configuration(
                "Threshold list cannot be empty".to_string(),
            ));
        }
        Ok(Self { thresholds_mm })
    }
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}
