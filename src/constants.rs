//! Application constants for the bikeshare explorer
//!
//! This module contains the supported city sources, month and day name
//! tables, timestamp formats, and CSV column names used throughout the
//! application.

// =============================================================================
// City Data Sources
// =============================================================================

/// Supported city names in display form
pub const CITY_NAMES: &[&str] = &["Chicago", "New York City", "Washington"];

/// Source CSV filenames, index-aligned with `CITY_NAMES`
pub const CITY_SOURCE_FILES: &[&str] = &["chicago.csv", "new_york_city.csv", "washington.csv"];

/// Default directory searched for city CSV files
pub const DEFAULT_DATA_DIR: &str = "data";

// =============================================================================
// Calendar Name Tables
// =============================================================================

/// Full English month names, index-aligned with month numbers 1-12
pub const MONTH_NAMES: &[&str] = &[
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Months selectable as a filter (the datasets cover January through June)
pub const FILTER_MONTH_COUNT: usize = 6;

/// Full English day names, index-aligned with `Weekday::num_days_from_sunday`
pub const DAY_NAMES: &[&str] = &[
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Wildcard selection accepted for month and day filters
pub const FILTER_ALL: &str = "All";

// =============================================================================
// Trip Record Format
// =============================================================================

/// Timestamp format used by all three city exports
pub const TRIP_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// CSV column names in the city trip exports
pub mod columns {
    pub const START_TIME: &str = "Start Time";
    pub const END_TIME: &str = "End Time";
    pub const TRIP_DURATION: &str = "Trip Duration";
    pub const START_STATION: &str = "Start Station";
    pub const END_STATION: &str = "End Station";
    pub const USER_TYPE: &str = "User Type";

    // Absent from the Washington export
    pub const GENDER: &str = "Gender";
    pub const BIRTH_YEAR: &str = "Birth Year";
}

/// Maximum number of row-level error messages retained in load statistics
pub const MAX_RECORDED_ROW_ERRORS: usize = 20;

/// Number of station pair entries reported by the station aggregator
pub const TOP_TRIP_COUNT: usize = 5;

// =============================================================================
// Helper Functions
// =============================================================================

/// Map a month number (1-12) to its full English name
pub fn month_name(month: u32) -> Option<&'static str> {
    if (1..=12).contains(&month) {
        Some(MONTH_NAMES[(month - 1) as usize])
    } else {
        None
    }
}

/// Map a full English month name (case-insensitive) to its number (1-12)
pub fn month_number(name: &str) -> Option<u32> {
    MONTH_NAMES
        .iter()
        .position(|m| m.eq_ignore_ascii_case(name.trim()))
        .map(|i| (i + 1) as u32)
}

/// Map a `chrono` weekday to its full English name
pub fn day_name(weekday: chrono::Weekday) -> &'static str {
    DAY_NAMES[weekday.num_days_from_sunday() as usize]
}
