//! Interactive explore command
//!
//! Collects a city/month/day selection through validated prompts, runs the
//! analysis pipeline, prints the report, and loops until the user declines
//! to restart. A failed iteration (e.g. a missing data file) is reported
//! and survived; only the prompts themselves losing stdin ends the session
//! early.

use super::shared;
use crate::app::services::pipeline;
use crate::cli::args::ExploreArgs;
use crate::cli::input;
use crate::Result;
use colored::*;
use std::time::Instant;
use tracing::{error, info};

/// Explore command runner
pub fn run_explore(args: ExploreArgs) -> Result<()> {
    shared::setup_logging(args.get_log_level())?;
    args.validate()?;

    let config = args.config();
    info!(
        "Starting interactive session (data dir: {})",
        config.data_dir().display()
    );

    println!("{}", "Hello! Let's explore some US bikeshare data!".bold());

    loop {
        let spec = input::prompt_filter_spec()?;
        info!(
            "Running pipeline for {} (month: {}, day: {})",
            spec.city, spec.month, spec.day
        );

        let started = Instant::now();
        let spinner = if args.show_progress() {
            Some(shared::create_spinner(&format!(
                "Loading {} trips...",
                spec.city
            )))
        } else {
            None
        };

        let outcome = pipeline::run_pipeline(&config, &spec);
        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
        }

        match outcome {
            Ok(report) => shared::print_report(&report, started.elapsed()),
            Err(e) => {
                // Fatal for this iteration only; the restart loop survives
                error!("Analysis failed: {}", e);
                println!("{} {}", "Could not analyze that selection:".red().bold(), e);
            }
        }

        println!();
        if !input::prompt_confirmation("Would you like to restart?", true)? {
            break;
        }
    }

    info!("Interactive session finished");
    Ok(())
}
