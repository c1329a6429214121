//! Command implementations for the ISD comparison CLI
//!
//! Each subcommand is implemented in its own module; `shared` carries the
//! logging setup, the download-and-load helper, and table rendering used
//! by all of them.

pub mod cache;
pub mod report;
pub mod sensitivity;
pub mod shared;
pub mod temperature;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Dispatch to the appropriate subcommand handler
pub fn run(args: Args) -> Result<()> {
    match args.get_command() {
        Commands::Report(report_args) => report::run_report(report_args),
        Commands::Temperature(temperature_args) => temperature::run_temperature(temperature_args),
        Commands::Sensitivity(sensitivity_args) => sensitivity::run_sensitivity(sensitivity_args),
        Commands::Cache(cache_args) => cache::run_cache(cache_args),
    }
}
