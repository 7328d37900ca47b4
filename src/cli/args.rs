//! Command-line argument definitions for the bikeshare explorer
//!
//! This module defines the complete CLI interface using the clap derive
//! API. The `explore` command collects its city/month/day selections
//! interactively; the `report` command takes them as flags for scripted
//! use.

use crate::app::models::{City, DayFilter, MonthFilter};
use crate::config::Config;
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the bikeshare explorer
#[derive(Debug, Clone, Parser)]
#[command(
    name = "bikeshare-explorer",
    version,
    about = "Explore US bikeshare trip data for Chicago, New York City, and Washington",
    long_about = "Loads a city's bikeshare trip export, applies optional month and day-of-week \
                  filters, and reports popular travel times, popular stations, trip duration \
                  aggregates, and user demographics."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the bikeshare explorer
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Explore a city interactively with prompts and a restart loop
    Explore(ExploreArgs),
    /// Print one report for a fixed city/month/day selection
    Report(ReportArgs),
}

/// Arguments for the interactive explore command
#[derive(Debug, Clone, Parser)]
pub struct ExploreArgs {
    /// Directory containing the city CSV exports
    ///
    /// Expected files: chicago.csv, new_york_city.csv, washington.csv.
    /// Defaults to ./data
    #[arg(
        long = "data-dir",
        value_name = "PATH",
        help = "Directory containing the city CSV exports"
    )]
    pub data_dir: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress log output except errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress log output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the one-shot report command
#[derive(Debug, Clone, Parser)]
pub struct ReportArgs {
    /// City whose trip export is analyzed
    #[arg(long = "city", value_enum, help = "City to analyze")]
    pub city: City,

    /// Month restriction
    #[arg(
        long = "month",
        value_enum,
        default_value = "all",
        help = "Restrict to one month (January through June)"
    )]
    pub month: MonthFilter,

    /// Day-of-week restriction
    #[arg(
        long = "day",
        value_enum,
        default_value = "all",
        help = "Restrict to one day of the week"
    )]
    pub day: DayFilter,

    /// Directory containing the city CSV exports
    #[arg(
        long = "data-dir",
        value_name = "PATH",
        help = "Directory containing the city CSV exports"
    )]
    pub data_dir: Option<PathBuf>,

    /// Output format for the report
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the report"
    )]
    pub output_format: OutputFormat,

    /// Output file for the report
    ///
    /// If not specified, the report is written to stdout
    #[arg(
        short = 'o',
        long = "output-file",
        value_name = "FILE",
        help = "Output file for the report"
    )]
    pub output_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress log output except errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress log output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Output format options for the report command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

fn validate_data_dir(data_dir: &Option<PathBuf>) -> Result<()> {
    if let Some(dir) = data_dir {
        if !dir.exists() {
            return Err(Error::configuration(format!(
                "Data directory does not exist: {}",
                dir.display()
            )));
        }
        if !dir.is_dir() {
            return Err(Error::configuration(format!(
                "Data path is not a directory: {}",
                dir.display()
            )));
        }
    }
    Ok(())
}

fn log_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

impl ExploreArgs {
    /// Validate the explore command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        validate_data_dir(&self.data_dir)
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }

    /// Build the configuration for this invocation
    pub fn config(&self) -> Config {
        match &self.data_dir {
            Some(dir) => Config::new(dir.clone()),
            None => Config::default(),
        }
    }

    /// Check if we should show the loading spinner (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

impl ReportArgs {
    /// Validate the report command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        validate_data_dir(&self.data_dir)?;

        if let Some(output_file) = &self.output_file {
            if let Some(parent) = output_file.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    return Err(Error::configuration(format!(
                        "Output file directory does not exist: {}",
                        parent.display()
                    )));
                }
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }

    /// Build the configuration for this invocation
    pub fn config(&self) -> Config {
        match &self.data_dir {
            Some(dir) => Config::new(dir.clone()),
            None => Config::default(),
        }
    }
}

impl Default for ExploreArgs {
    fn default() -> Self {
        Self {
            data_dir: None,
            verbose: 0,
            quiet: false,
        }
    }
}
