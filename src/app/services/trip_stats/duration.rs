//! Trip duration aggregates
//!
//! Total duration is reported in whole hours and mean duration in whole
//! minutes. Both use round-half-away-from-zero (`f64::round`); durations
//! are non-negative, so halves round up.

use crate::app::models::Dataset;
use serde::Serialize;

/// Trip duration summary
///
/// The converted fields are `None` for an empty dataset; no division is
/// attempted in that case.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DurationStats {
    /// Number of trips aggregated
    pub trip_count: usize,

    /// Sum of all trip durations, converted to whole hours
    pub total_hours: Option<i64>,

    /// Mean trip duration, converted to whole minutes
    pub mean_minutes: Option<i64>,
}

/// Compute duration statistics for a dataset
pub fn compute(dataset: &Dataset) -> DurationStats {
    let records = dataset.records();

    if records.is_empty() {
        return DurationStats {
            trip_count: 0,
            total_hours: None,
            mean_minutes: None,
        };
    }

    let total_secs: f64 = records.iter().map(|r| r.duration_secs).sum();
    let mean_secs = total_secs / records.len() as f64;

    DurationStats {
        trip_count: records.len(),
        total_hours: Some((total_secs / 3600.0).round() as i64),
        mean_minutes: Some((mean_secs / 60.0).round() as i64),
    }
}
