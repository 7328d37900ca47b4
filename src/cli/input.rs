//! User input utilities for interactive CLI prompts
//!
//! The re-prompt-until-valid loops live here; the validation itself is the
//! pure `FromStr` implementations on the selection enums, so it stays
//! testable without a terminal.

use crate::app::models::{City, DayFilter, FilterSpec, MonthFilter};
use crate::constants::{CITY_NAMES, DAY_NAMES, FILTER_MONTH_COUNT, MONTH_NAMES};
use crate::{Error, Result};
use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// Collect a complete filter spec from the console
pub fn prompt_filter_spec() -> Result<FilterSpec> {
    let city = prompt_city()?;
    let month = prompt_month()?;
    let day = prompt_day()?;
    Ok(FilterSpec { city, month, day })
}

/// Prompt for a city until a valid one is entered
pub fn prompt_city() -> Result<City> {
    prompt_until_valid("Enter city", &CITY_NAMES.join(", "))
}

/// Prompt for a month selection until a valid one is entered
pub fn prompt_month() -> Result<MonthFilter> {
    let options = format!("{}, All", MONTH_NAMES[..FILTER_MONTH_COUNT].join(", "));
    prompt_until_valid("Enter month", &options)
}

/// Prompt for a day selection until a valid one is entered
pub fn prompt_day() -> Result<DayFilter> {
    let options = format!("{}, All", DAY_NAMES.join(", "));
    prompt_until_valid("Enter day", &options)
}

/// Get user confirmation for an action
pub fn prompt_confirmation(message: &str, default_yes: bool) -> Result<bool> {
    let default_text = if default_yes { "Y/n" } else { "y/N" };
    print!("{} [{}]: ", message, default_text);
    io::stdout()
        .flush()
        .map_err(|e| Error::io("Failed to flush stdout", e))?;

    let input = read_trimmed_line()?.to_lowercase();

    if input.is_empty() {
        return Ok(default_yes);
    }

    match input.as_str() {
        "y" | "yes" => Ok(true),
        "n" | "no" => Ok(false),
        _ => {
            println!("Please enter 'y' for yes or 'n' for no.");
            prompt_confirmation(message, default_yes)
        }
    }
}

/// Re-prompt until the input parses; parse failures never escape this loop
fn prompt_until_valid<T>(prompt: &str, options: &str) -> Result<T>
where
    T: FromStr<Err = Error>,
{
    loop {
        print!("{} ({}): ", prompt, options);
        io::stdout()
            .flush()
            .map_err(|e| Error::io("Failed to flush stdout", e))?;

        let input = read_trimmed_line()?;
        match input.parse() {
            Ok(value) => return Ok(value),
            Err(e) => println!("{}", e),
        }
    }
}

/// Read one line from stdin; end-of-input is an I/O error, not a retry
fn read_trimmed_line() -> Result<String> {
    let mut input = String::new();
    let bytes = io::stdin()
        .lock()
        .read_line(&mut input)
        .map_err(|e| Error::io("Failed to read user input", e))?;

    if bytes == 0 {
        return Err(Error::io(
            "Input closed",
            io::Error::new(io::ErrorKind::UnexpectedEof, "end of input"),
        ));
    }

    Ok(input.trim().to_string())
}
