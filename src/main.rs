use bikeshare_explorer::cli::{args::Args, commands};
use clap::Parser;
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
        Ok(()) => {
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Bikeshare Explorer - US Bikeshare Trip Data Analysis");
    println!("====================================================");
    println!();
    println!("Load a city's bikeshare trip export, filter it by month and day of week,");
    println!("and report popular travel times, stations, trip durations, and user stats.");
    println!();
    println!("USAGE:");
    println!("    bikeshare-explorer <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    explore     Explore a city interactively with prompts and a restart loop");
    println!("    report      Print one report for a fixed city/month/day selection");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Start an interactive session against ./data:");
    println!("    bikeshare-explorer explore");
    println!();
    println!("    # One-shot report for February Mondays in Chicago:");
    println!("    bikeshare-explorer report --city chicago --month february --day monday");
    println!();
    println!("    # Machine-readable output:");
    println!("    bikeshare-explorer report --city washington --format json");
    println!();
    println!("For detailed help on any command, use:");
    println!("    bikeshare-explorer <COMMAND> --help");
}
