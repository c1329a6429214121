//! Precipitation comparison command
//!
//! Builds the tidy precipitation series for each reference city and prints
//! the overall rainy-hour block plus the annual table with the snow/liquid
//! split.

use colored::Colorize;

use crate::app::models::{AnnualPrecipSummary, RainyHoursSummary};
use crate::app::services::{annual_stats, series_builder};
use crate::cli::args::{OutputFormat, ReportArgs};
use crate::config::{AnalysisConfig, StationSpec};
use crate::Result;

use super::shared;

/// Run the precipitation report command
pub fn run_report(args: ReportArgs) -> Result<()> {
    args.validate()?;
    shared::setup_logging(args.common.get_log_level())?;

    let mut config = AnalysisConfig::default().with_rain_threshold(args.threshold_mm);
    if args.all_report_types {
        config = config.without_report_type_filter();
    }

    let cities = shared::download_city_data(&args.common, &StationSpec::defaults())?;

    let mut json_rows: Vec<AnnualPrecipSummary> = Vec::new();
    for city in &cities {
        let series = series_builder::build_precipitation_series(&city.raw, &config);
        let overall =
            annual_stats::rainy_hours_summary(&series, &city.station.label, config.rain_threshold_mm);
        let annual = annual_stats::annual_precipitation_summary(
            &series,
            &city.station.label,
            config.rain_threshold_mm,
        );

        match args.common.output_format {
            OutputFormat::Human => {
                print_overall(&overall, config.rain_threshold_mm);
                print_annual_table(&annual);
            }
            OutputFormat::Json => json_rows.extend(annual),
        }
    }

    if matches!(args.common.output_format, OutputFormat::Json) {
        println!("{}", shared::to_json(&json_rows)?);
    }
    Ok(())
}

fn print_overall(summary: &RainyHoursSummary, threshold_mm: f64) {
    shared::print_section_heading(&summary.label);
    println!("  threshold:        {} mm", threshold_mm);
    println!("  valid hours:      {}", summary.total_hours);
    println!("  rainy hours:      {}", summary.rainy_hours);
    match summary.rainy_fraction {
        Some(fraction) => println!("  rainy fraction:   {:.3}", fraction),
        None => println!("  rainy fraction:   {}", "n/a".dimmed()),
    }
    match summary.mean_precip_mm {
        Some(mean) => println!("  mean rainy depth: {:.2} mm", mean),
        None => println!("  mean rainy depth: {}", "n/a".dimmed()),
    }
    println!("  total precip:     {:.1} mm", summary.total_precip_mm);
}

fn print_annual_table(rows: &[AnnualPrecipSummary]) {
    if rows.is_empty() {
        println!("\n  {}", "no aggregable years".dimmed());
        return;
    }
    println!(
        "\n  {:>4}  {:>10}  {:>7}  {:>6}  {:>7}  {:>6}  {:>8}  {:>8}",
        "year".bold(),
        "total mm".bold(),
        "rain hr".bold(),
        "rain d".bold(),
        "snow hr".bold(),
        "snow d".bold(),
        "liquid hr".bold(),
        "liquid d".bold()
    );
    for row in rows {
        println!(
            "  {:>4}  {:>10.1}  {:>7}  {:>6}  {:>7}  {:>6}  {:>8}  {:>8}",
            row.year,
            row.total_precip_mm,
            row.rainy_hours,
            row.rainy_days,
            row.snow_hours,
            row.snow_days,
            row.liquid_rain_hours,
            row.liquid_rain_days
        );
    }
}
