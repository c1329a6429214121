use clap::Parser;
use isd_compare::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("ISD Compare - Hourly Weather Statistics for Reference Cities");
    println!("============================================================");
    println!();
    println!("Download NOAA ISD hourly observations for London (Heathrow) and");
    println!("NYC (Central Park) and compare annual precipitation and temperature");
    println!("statistics between the two cities.");
    println!();
    println!("USAGE:");
    println!("    isd-compare <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    report         Annual precipitation statistics (rainy hours/days, snow split)");
    println!("    temperature    Annual temperature degree-deviation statistics");
    println!("    sensitivity    Rain-threshold sweep with cross-year means");
    println!("    cache          Inspect the local download cache");
    println!("    help           Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Compare precipitation for the default year range:");
    println!("    isd-compare report");
    println!();
    println!("    # Temperature comparison for a custom range, cached data only:");
    println!("    isd-compare temperature --start 2015 --end 2023 --offline");
    println!();
    println!("    # Sensitivity sweep with explicit thresholds, JSON output:");
    println!("    isd-compare sensitivity --thresholds 0,0.254,1.0 --output-format json");
    println!();
    println!("For detailed help on any command, use:");
    println!("    isd-compare <COMMAND> --help");
}
