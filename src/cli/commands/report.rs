//! One-shot report command
//!
//! Runs the pipeline once for a selection given entirely as flags and
//! prints (or writes) the report, for scripted use where the interactive
//! prompts would get in the way.

use super::shared;
use crate::app::models::FilterSpec;
use crate::app::services::pipeline;
use crate::cli::args::{OutputFormat, ReportArgs};
use crate::{Error, Result};
use std::fs;
use std::time::Instant;
use tracing::info;

/// Report command runner
pub fn run_report(args: ReportArgs) -> Result<()> {
    shared::setup_logging(args.get_log_level())?;
    args.validate()?;

    let config = args.config();
    let spec = FilterSpec {
        city: args.city,
        month: args.month,
        day: args.day,
    };

    info!(
        "Generating report for {} (month: {}, day: {})",
        spec.city, spec.month, spec.day
    );

    let started = Instant::now();
    let report = pipeline::run_pipeline(&config, &spec)?;

    match args.output_format {
        OutputFormat::Human => shared::print_report(&report, started.elapsed()),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| Error::serialization("failed to serialize report", e))?;

            match &args.output_file {
                Some(path) => {
                    fs::write(path, json)
                        .map_err(|e| Error::io(format!("failed to write {}", path.display()), e))?;
                    info!("Report written to {}", path.display());
                }
                None => println!("{}", json),
            }
        }
    }

    Ok(())
}
