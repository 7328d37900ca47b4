//! Most frequent travel times
//!
//! Reports the most common month (by name), day of week, and start hour.
//! The hour is re-derived from each record's start timestamp on every call
//! rather than read from a stored field.

use super::frequency;
use crate::app::models::Dataset;
use crate::constants;
use serde::Serialize;

/// Most frequent travel time summary
///
/// All fields are `None` for an empty dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeStats {
    /// Most common month, as its full English name
    pub popular_month: Option<String>,

    /// Most common day of week
    pub popular_day: Option<String>,

    /// Most common start hour (0-23)
    pub popular_hour: Option<u32>,
}

/// Compute travel time statistics for a dataset
pub fn compute(dataset: &Dataset) -> TimeStats {
    let records = dataset.records();

    TimeStats {
        popular_month: frequency::mode(records.iter().map(|r| r.month()))
            .and_then(constants::month_name)
            .map(str::to_string),
        popular_day: frequency::mode(records.iter().map(|r| r.day_of_week()))
            .map(str::to_string),
        popular_hour: frequency::mode(records.iter().map(|r| r.start_hour())),
    }
}
