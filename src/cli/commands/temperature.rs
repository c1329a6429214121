//! Temperature comparison command
//!
//! With no `--baseline` arguments this prints the fixed annual metrics
//! (heating/cooling/comfort deviations, sub-zero hours). With one or more
//! `--baseline LABEL=DEGC` arguments it reports symmetric cold/warm
//! deviations per (year, baseline) instead.

use colored::Colorize;

use crate::app::models::{AnnualTempSummary, BaselineDeviationSummary};
use crate::app::services::{annual_stats, series_builder};
use crate::cli::args::{OutputFormat, TemperatureArgs};
use crate::config::{AnalysisConfig, StationSpec};
use crate::Result;

use super::shared;

/// Run the temperature report command
pub fn run_temperature(args: TemperatureArgs) -> Result<()> {
    args.validate()?;
    shared::setup_logging(args.common.get_log_level())?;

    let config = AnalysisConfig::default();
    let cities = shared::download_city_data(&args.common, &StationSpec::defaults())?;

    let named_baselines: Vec<(String, f64)> = args
        .baselines
        .iter()
        .map(|spec| (spec.label.clone(), spec.base_c))
        .collect();

    let mut fixed_rows: Vec<AnnualTempSummary> = Vec::new();
    let mut deviation_rows: Vec<BaselineDeviationSummary> = Vec::new();
    for city in &cities {
        let series = series_builder::build_temperature_series(&city.raw, &config);

        if named_baselines.is_empty() {
            let annual = annual_stats::annual_temperature_summary(
                &series,
                &city.station.label,
                &config.baselines,
            );
            match args.common.output_format {
                OutputFormat::Human => {
                    shared::print_section_heading(&city.station.label);
                    print_fixed_table(&annual);
                }
                OutputFormat::Json => fixed_rows.extend(annual),
            }
        } else {
            let annual = annual_stats::annual_baseline_deviations(
                &series,
                &city.station.label,
                &named_baselines,
            );
            match args.common.output_format {
                OutputFormat::Human => {
                    shared::print_section_heading(&city.station.label);
                    print_deviation_table(&annual);
                }
                OutputFormat::Json => deviation_rows.extend(annual),
            }
        }
    }

    if matches!(args.common.output_format, OutputFormat::Json) {
        if named_baselines.is_empty() {
            println!("{}", shared::to_json(&fixed_rows)?);
        } else {
            println!("{}", shared::to_json(&deviation_rows)?);
        }
    }
    Ok(())
}

fn print_fixed_table(rows: &[AnnualTempSummary]) {
    if rows.is_empty() {
        println!("\n  {}", "no aggregable years".dimmed());
        return;
    }
    println!(
        "\n  {:>4}  {:>7}  {:>8}  {:>8}  {:>11}  {:>9}",
        "year".bold(),
        "n obs".bold(),
        "HDD degC".bold(),
        "CDD degC".bold(),
        "comfort dev".bold(),
        "sub-zero".bold()
    );
    for row in rows {
        println!(
            "  {:>4}  {:>7}  {:>8.2}  {:>8.2}  {:>11.2}  {:>9}",
            row.year,
            row.n_obs,
            row.mean_hdd_c,
            row.mean_cdd_c,
            row.mean_comfort_dev_c,
            row.sub_zero_hours
        );
    }
}

fn print_deviation_table(rows: &[BaselineDeviationSummary]) {
    if rows.is_empty() {
        println!("\n  {}", "no aggregable years".dimmed());
        return;
    }
    println!(
        "\n  {:>4}  {:>12}  {:>7}  {:>7}  {:>9}  {:>9}  {:>9}",
        "year".bold(),
        "baseline".bold(),
        "degC".bold(),
        "n obs".bold(),
        "cold dev".bold(),
        "warm dev".bold(),
        "sub-zero".bold()
    );
    for row in rows {
        println!(
            "  {:>4}  {:>12}  {:>7.1}  {:>7}  {:>9.2}  {:>9.2}  {:>9}",
            row.year,
            row.baseline,
            row.baseline_c,
            row.n_obs,
            row.mean_cold_dev_c,
            row.mean_warm_dev_c,
            row.sub_zero_hours
        );
    }
}
