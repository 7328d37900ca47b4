//! Shared components for CLI commands
//!
//! Logging setup, the loading spinner, and human-readable report rendering
//! used by both the interactive and one-shot commands.

use crate::app::services::pipeline::PipelineReport;
use crate::app::services::trip_stats::{DurationStats, StationStats, TimeStats, UserStats};
use crate::Result;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing::debug;

/// Set up structured logging to stderr
pub fn setup_logging(log_level: &str) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("bikeshare_explorer={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Create a spinner shown while a city export loads
pub fn create_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

const DIVIDER_WIDTH: usize = 40;

/// Print a complete report in human-readable form
pub fn print_report(report: &PipelineReport, elapsed: Duration) {
    let divider = "-".repeat(DIVIDER_WIDTH);

    println!();
    println!(
        "{}",
        format!(
            "{}  (month: {}, day: {})",
            report.city, report.month, report.day
        )
        .bold()
    );
    println!("{}", divider);

    if report.is_empty() {
        println!("{}", "No trips match the given filters.".yellow());
    } else {
        print_time_stats(&report.time);
        print_station_stats(&report.stations);
        print_duration_stats(&report.durations);
        print_user_stats(&report.users);
    }

    println!("\n{}", divider);
    println!(
        "Analyzed {} of {} trips in {:.2} seconds.",
        report.trips_matching,
        report.trips_loaded,
        elapsed.as_secs_f64()
    );
    if report.rows_skipped > 0 {
        println!(
            "{}",
            format!("Skipped {} malformed rows while loading.", report.rows_skipped).yellow()
        );
    }
}

fn print_heading(heading: &str) {
    println!("\n{}", heading.bold());
}

fn print_value(label: &str, value: &str) {
    println!("{}: {}", label, value.cyan());
}

fn print_time_stats(time: &TimeStats) {
    print_heading("Most Frequent Times of Travel");
    if let Some(month) = &time.popular_month {
        print_value("Most Popular Month", month);
    }
    if let Some(day) = &time.popular_day {
        print_value("Most Popular Day Of Week", day);
    }
    if let Some(hour) = time.popular_hour {
        print_value("Most Popular Start Hour", &format!("{:02}:00", hour));
    }
}

fn print_station_stats(stations: &StationStats) {
    print_heading("Most Popular Stations and Trip");
    if let Some(station) = &stations.popular_start_station {
        print_value("Most Popular Start Station", station);
    }
    if let Some(station) = &stations.popular_end_station {
        print_value("Most Popular End Station", station);
    }
    if !stations.top_trips.is_empty() {
        println!("Top {} Most Popular Trips:", stations.top_trips.len());
        for (rank, pair) in stations.top_trips.iter().enumerate() {
            println!(
                "  {}. {} -> {} ({} trips)",
                rank + 1,
                pair.start_station.cyan(),
                pair.end_station.cyan(),
                pair.count
            );
        }
    }
}

fn print_duration_stats(durations: &DurationStats) {
    print_heading("Trip Duration");
    if let Some(total_hours) = durations.total_hours {
        print_value("Total Travel Time", &format!("{} Hours", total_hours));
    }
    if let Some(mean_minutes) = durations.mean_minutes {
        print_value("Mean Travel Time", &format!("{} Minutes", mean_minutes));
    }
}

fn print_user_stats(users: &UserStats) {
    print_heading("User Stats");

    if users.user_types.is_empty() {
        println!("{}", "User type data is not available for this city.".yellow());
    } else {
        println!("User Types:");
        for entry in &users.user_types {
            println!("  {}: {}", entry.value, entry.count.to_string().cyan());
        }
    }

    match &users.genders {
        Some(genders) => {
            println!("Gender:");
            for entry in genders {
                println!("  {}: {}", entry.value, entry.count.to_string().cyan());
            }
        }
        None => println!("{}", "Gender data is not available for this city.".yellow()),
    }

    match &users.birth_years {
        Some(birth) => {
            print_value("Earliest Birth Year", &birth.earliest.to_string());
            print_value("Most Recent Birth Year", &birth.latest.to_string());
            let common: Vec<String> = birth.most_common.iter().map(|y| y.to_string()).collect();
            print_value("Most Common Birth Year", &common.join(", "));
        }
        None => println!(
            "{}",
            "Birth year data is not available for this city.".yellow()
        ),
    }
}
