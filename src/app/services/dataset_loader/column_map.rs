//! Header-based column resolution for city trip exports
//!
//! The three city exports share their core columns but differ in column
//! order and in whether the demographic columns exist at all, so all field
//! access goes through a map built from the header row.

use crate::constants::columns;
use crate::{Error, Result};
use csv::StringRecord;

/// Resolved column indices for one trip export
#[derive(Debug, Clone)]
pub struct ColumnMap {
    pub start_time: usize,
    pub end_time: Option<usize>,
    pub trip_duration: usize,
    pub start_station: usize,
    pub end_station: usize,
    pub user_type: Option<usize>,

    // Absent for the Washington export
    pub gender: Option<usize>,
    pub birth_year: Option<usize>,
}

impl ColumnMap {
    /// Build a column map from a header row
    ///
    /// The start time, duration, and station columns are required; all
    /// others degrade to `None` when missing.
    pub fn from_headers(headers: &StringRecord) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|header| header.trim().eq_ignore_ascii_case(name))
        };

        let require = |name: &str| {
            find(name).ok_or_else(|| {
                Error::data_validation(format!("required column '{}' not found in header", name))
            })
        };

        Ok(Self {
            start_time: require(columns::START_TIME)?,
            end_time: find(columns::END_TIME),
            trip_duration: require(columns::TRIP_DURATION)?,
            start_station: require(columns::START_STATION)?,
            end_station: require(columns::END_STATION)?,
            user_type: find(columns::USER_TYPE),
            gender: find(columns::GENDER),
            birth_year: find(columns::BIRTH_YEAR),
        })
    }

    /// True when the export carries the demographic columns
    pub fn has_demographics(&self) -> bool {
        self.gender.is_some() || self.birth_year.is_some()
    }
}
