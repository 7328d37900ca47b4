//! Month and day-of-week filtering over a loaded dataset
//!
//! Filtering is a pure, order-preserving projection: the input dataset is
//! never mutated, and the two axes compose with logical AND. An empty
//! result is an expected outcome that downstream aggregators handle.

use crate::app::models::{Dataset, FilterSpec, TripRecord};
use tracing::debug;

/// Apply a filter spec to a dataset, yielding a new dataset
///
/// Records are kept in load order. `All` on either axis leaves that axis
/// unrestricted, so an `All`/`All` spec returns a dataset equal to the
/// input.
pub fn apply(dataset: &Dataset, spec: &FilterSpec) -> Dataset {
    let records: Vec<TripRecord> = dataset
        .records()
        .iter()
        .filter(|record| matches(record, spec))
        .cloned()
        .collect();

    debug!(
        "Filter {}/{} kept {} of {} records",
        spec.month,
        spec.day,
        records.len(),
        dataset.len()
    );

    Dataset::new(dataset.city(), records)
}

fn matches(record: &TripRecord, spec: &FilterSpec) -> bool {
    if let Some(month) = spec.month.number() {
        if record.month() != month {
            return false;
        }
    }

    if let Some(day) = spec.day.name() {
        if !record.day_of_week().eq_ignore_ascii_case(day) {
            return false;
        }
    }

    true
}
