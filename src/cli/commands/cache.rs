//! Cache inspection command
//!
//! Scans the flat download cache and prints per-station and per-year file
//! counts plus the total cache size.

use colored::Colorize;

use crate::app::services::cache_scanner::{self, format_size};
use crate::app::services::isd_download::default_cache_dir;
use crate::cli::args::{CacheArgs, OutputFormat};
use crate::Result;

use super::shared;

/// Run the cache inspection command
pub fn run_cache(args: CacheArgs) -> Result<()> {
    shared::setup_logging(args.get_log_level())?;

    let cache_dir = args.cache_path.clone().unwrap_or_else(default_cache_dir);
    let files = cache_scanner::scan_cache(&cache_dir)?;
    let stats = cache_scanner::cache_stats(&files);

    match args.output_format {
        OutputFormat::Json => println!("{}", shared::to_json(&[stats])?),
        OutputFormat::Human => {
            shared::print_section_heading(&format!("Cache: {}", cache_dir.display()));
            println!("  files:      {}", stats.total_files);
            println!("  total size: {}", format_size(stats.total_size_bytes));

            if !stats.files_by_station.is_empty() {
                println!("\n  {:>12}  {:>6}", "station".bold(), "files".bold());
                for (station, count) in &stats.files_by_station {
                    println!("  {:>12}  {:>6}", station, count);
                }
            }
            if !stats.files_by_year.is_empty() {
                let years: Vec<i32> = stats.files_by_year.keys().copied().collect();
                println!(
                    "\n  years: {} - {}",
                    years.first().unwrap_or(&0),
                    years.last().unwrap_or(&0)
                );
            }
        }
    }
    Ok(())
}
