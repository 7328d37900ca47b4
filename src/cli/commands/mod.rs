//! Command implementations for the bikeshare explorer CLI
//!
//! Each command lives in its own module; rendering and logging setup shared
//! between them live in `shared`.

pub mod explore;
pub mod report;
pub mod shared;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for the bikeshare explorer
///
/// Dispatches to the appropriate subcommand handler based on CLI args:
/// - `explore`: interactive session with prompts and a restart loop
/// - `report`: one-shot report for a fixed selection
pub fn run(args: Args) -> Result<()> {
    match args.get_command() {
        Commands::Explore(explore_args) => explore::run_explore(explore_args),
        Commands::Report(report_args) => report::run_report(report_args),
    }
}
