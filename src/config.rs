//! Configuration structures for the decoding and aggregation core.
//!
//! All constants the core consumes are bundled here into immutable value
//! types and passed as explicit parameters. Defaults come from
//! [`crate::constants`]; callers override them with the chainable `with_*`
//! methods.

use crate::constants;
use serde::{Deserialize, Serialize};

/// Decoder settings for the compound AA1 precipitation field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrecipDecoderConfig {
    /// Depth sub-field strings treated as "no observation" (exact match)
    pub missing_sentinels: Vec<String>,
}

impl Default for PrecipDecoderConfig {
    fn default() -> Self {
        Self {
            missing_sentinels: to_strings(&constants::AA1_MISSING_DEPTHS),
        }
    }
}

/// Decoder settings for the compound TMP temperature field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TempDecoderConfig {
    /// Temperature sub-field strings treated as "no observation"
    pub missing_sentinels: Vec<String>,

    /// Quality flags whose observations are discarded outright
    pub rejected_quality_flags: Vec<String>,

    /// When false, quality flags are ignored and only the sentinel check
    /// and numeric parse decide whether a value is missing
    pub reject_flagged_quality: bool,
}

impl Default for TempDecoderConfig {
    fn default() -> Self {
        Self {
            missing_sentinels: to_strings(&constants::TMP_MISSING),
            rejected_quality_flags: to_strings(&constants::TMP_REJECTED_QUALITY_FLAGS),
            reject_flagged_quality: true,
        }
    }
}

/// Present-weather codes that classify an observation as frozen precipitation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnowFlagConfig {
    pub frozen_condition_codes: Vec<String>,
}

impl Default for SnowFlagConfig {
    fn default() -> Self {
        Self {
            frozen_condition_codes: to_strings(&constants::FROZEN_PRECIP_CODES),
        }
    }
}

/// Baseline temperatures for the fixed degree-deviation metrics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TempBaselines {
    pub heating_base_c: f64,
    pub cooling_base_c: f64,
    pub comfort_base_c: f64,
}

impl Default for TempBaselines {
    fn default() -> Self {
        Self {
            heating_base_c: constants::HDD_BASE_C,
            cooling_base_c: constants::CDD_BASE_C,
            comfort_base_c: constants::COMFORT_BASE_C,
        }
    }
}

/// One reference station with its human-readable label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationSpec {
    /// Station identifier in `USAF-WBAN` format, e.g. `725053-94728`
    pub station_id: String,
    pub label: String,
}

impl StationSpec {
    pub fn london() -> Self {
        Self {
            station_id: constants::LONDON_STATION_ID.to_string(),
            label: constants::LONDON_LABEL.to_string(),
        }
    }

    pub fn nyc() -> Self {
        Self {
            station_id: constants::NYC_STATION_ID.to_string(),
            label: constants::NYC_LABEL.to_string(),
        }
    }

    /// The two reference cities, in display order
    pub fn defaults() -> Vec<Self> {
        vec![Self::london(), Self::nyc()]
    }
}

/// Complete configuration for the series-building and aggregation core
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Allowed report types, ordered by preference (earlier = higher
    /// priority for temperature deduplication). Empty disables filtering.
    pub report_types: Vec<String>,

    /// Strictly-greater-than threshold for a rainy hour (mm)
    pub rain_threshold_mm: f64,

    pub baselines: TempBaselines,
    pub precip_decoder: PrecipDecoderConfig,
    pub temp_decoder: TempDecoderConfig,
    pub snow_flags: SnowFlagConfig,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            report_types: to_strings(&constants::HOURLY_REPORT_TYPES),
            rain_threshold_mm: constants::RAINY_THRESHOLD_MM,
            baselines: TempBaselines::default(),
            precip_decoder: PrecipDecoderConfig::default(),
            temp_decoder: TempDecoderConfig::default(),
            snow_flags: SnowFlagConfig::default(),
        }
    }
}

impl AnalysisConfig {
    /// Set the rainy-hour threshold in mm
    pub fn with_rain_threshold(mut self, threshold_mm: f64) -> Self {
        self.rain_threshold_mm = threshold_mm;
        self
    }

    /// Replace the allowed report types (order is dedup priority)
    pub fn with_report_types(mut self, report_types: Vec<String>) -> Self {
        self.report_types = report_types;
        self
    }

    /// Disable report-type filtering and priority resolution entirely
    pub fn without_report_type_filter(mut self) -> Self {
        self.report_types.clear();
        self
    }

    /// Override the fixed degree-deviation baselines
    pub fn with_baselines(mut self, baselines: TempBaselines) -> Self {
        self.baselines = baselines;
        self
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}
