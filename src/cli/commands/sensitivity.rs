//! Threshold sensitivity command
//!
//! Sweeps the rainy-hour threshold over each city's precipitation series
//! and prints the cross-year means per threshold.

use colored::Colorize;

use crate::app::models::ThresholdSensitivity;
use crate::app::services::{annual_stats, series_builder};
use crate::cli::args::{OutputFormat, SensitivityArgs};
use crate::config::{AnalysisConfig, StationSpec};
use crate::Result;

use super::shared;

/// Run the sensitivity sweep command
pub fn run_sensitivity(args: SensitivityArgs) -> Result<()> {
    args.validate()?;
    shared::setup_logging(args.common.get_log_level())?;

    let thresholds = match &args.thresholds {
        Some(list) => list.thresholds_mm.clone(),
        None => annual_stats::default_thresholds(),
    };

    let config = AnalysisConfig::default();
    let cities = shared::download_city_data(&args.common, &StationSpec::defaults())?;

    let mut json_rows: Vec<ThresholdSensitivity> = Vec::new();
    for city in &cities {
        let series = series_builder::build_precipitation_series(&city.raw, &config);
        let sweep = annual_stats::threshold_sensitivity(&series, &city.station.label, &thresholds);

        match args.common.output_format {
            OutputFormat::Human => {
                shared::print_section_heading(&city.station.label);
                print_sweep_table(&sweep);
            }
            OutputFormat::Json => json_rows.extend(sweep),
        }
    }

    if matches!(args.common.output_format, OutputFormat::Json) {
        println!("{}", shared::to_json(&json_rows)?);
    }
    Ok(())
}

fn print_sweep_table(rows: &[ThresholdSensitivity]) {
    println!(
        "\n  {:>12}  {:>14}  {:>14}",
        "threshold mm".bold(),
        "mean rain hr/y".bold(),
        "mean rain d/y".bold()
    );
    for row in rows {
        let hours = row
            .mean_rainy_hours
            .map(|v| format!("{:.1}", v))
            .unwrap_or_else(|| "-".to_string());
        let days = row
            .mean_rainy_days
            .map(|v| format!("{:.1}", v))
            .unwrap_or_else(|| "-".to_string());
        println!("  {:>12.4}  {:>14}  {:>14}", row.threshold_mm, hours, days);
    }
}
