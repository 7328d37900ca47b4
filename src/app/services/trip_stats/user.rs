//! User demographic statistics
//!
//! The Washington export carries no gender or birth year columns. Those
//! blocks are reported as `None` ("unavailable") rather than as errors or
//! empty tables, so the caller can tell "city doesn't publish this" apart
//! from "no trips matched".

use super::frequency;
use crate::app::models::Dataset;
use serde::Serialize;

/// One distinct field value with its record count
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueCount {
    pub value: String,
    pub count: usize,
}

/// Birth year summary across all records carrying the field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BirthYearStats {
    /// Earliest (minimum) birth year
    pub earliest: i32,

    /// Latest (maximum) birth year
    pub latest: i32,

    /// Most common birth year(s); all tied values, first-appearance order
    pub most_common: Vec<i32>,
}

/// User demographic summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserStats {
    /// Record counts per user type, descending by count
    pub user_types: Vec<ValueCount>,

    /// Record counts per gender, descending by count; `None` when the
    /// field is unavailable for this dataset
    pub genders: Option<Vec<ValueCount>>,

    /// Birth year aggregates; `None` when the field is unavailable
    pub birth_years: Option<BirthYearStats>,
}

/// Compute user statistics for a dataset
pub fn compute(dataset: &Dataset) -> UserStats {
    let records = dataset.records();

    let user_types = to_value_counts(frequency::value_counts(
        records.iter().filter_map(|r| r.user_type.as_deref()),
    ));

    let genders = if records.iter().any(|r| r.gender.is_some()) {
        Some(to_value_counts(frequency::value_counts(
            records.iter().filter_map(|r| r.gender.as_deref()),
        )))
    } else {
        None
    };

    let birth_years: Vec<i32> = records.iter().filter_map(|r| r.birth_year).collect();
    let birth_years = if birth_years.is_empty() {
        None
    } else {
        Some(BirthYearStats {
            // Non-empty by the check above
            earliest: *birth_years.iter().min().unwrap_or(&0),
            latest: *birth_years.iter().max().unwrap_or(&0),
            most_common: frequency::modes(birth_years.iter().copied()),
        })
    };

    UserStats {
        user_types,
        genders,
        birth_years,
    }
}

fn to_value_counts(counts: Vec<(&str, usize)>) -> Vec<ValueCount> {
    counts
        .into_iter()
        .map(|(value, count)| ValueCount {
            value: value.to_string(),
            count,
        })
        .collect()
}
