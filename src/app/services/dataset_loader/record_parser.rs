//! Individual trip row parsing
//!
//! Required fields (start time, duration, stations) fail the row when
//! malformed; optional fields (end time, user type, gender, birth year)
//! degrade to `None` so a bad demographic cell never costs the whole trip.

use chrono::NaiveDateTime;
use csv::StringRecord;

use super::column_map::ColumnMap;
use crate::app::models::TripRecord;
use crate::constants::TRIP_DATETIME_FORMAT;
use crate::{Error, Result};

/// Parse a single trip record from a CSV row
pub fn parse_trip_record(row: &StringRecord, map: &ColumnMap, line: u64) -> Result<TripRecord> {
    let start_time = parse_required_datetime(row, map.start_time, "start time", line)?;
    let duration_secs = parse_duration(row, map.trip_duration, line)?;
    let start_station = parse_required_string(row, map.start_station, "start station", line)?;
    let end_station = parse_required_string(row, map.end_station, "end station", line)?;

    let end_time = map.end_time.and_then(|index| parse_optional_datetime(row, index));
    let user_type = map.user_type.and_then(|index| parse_optional_string(row, index));
    let gender = map.gender.and_then(|index| parse_optional_string(row, index));
    let birth_year = map.birth_year.and_then(|index| parse_optional_year(row, index));

    Ok(TripRecord::new(
        start_time,
        end_time,
        start_station,
        end_station,
        duration_secs,
        user_type,
        gender,
        birth_year,
    ))
}

fn field<'a>(row: &'a StringRecord, index: usize) -> &'a str {
    row.get(index).unwrap_or("").trim()
}

fn parse_required_datetime(
    row: &StringRecord,
    index: usize,
    name: &str,
    line: u64,
) -> Result<NaiveDateTime> {
    let value = field(row, index);
    if value.is_empty() {
        return Err(Error::malformed_row(line, format!("missing {}", name)));
    }
    NaiveDateTime::parse_from_str(value, TRIP_DATETIME_FORMAT)
        .map_err(|e| Error::malformed_row(line, format!("invalid {} '{}': {}", name, value, e)))
}

fn parse_required_string(
    row: &StringRecord,
    index: usize,
    name: &str,
    line: u64,
) -> Result<String> {
    let value = field(row, index);
    if value.is_empty() {
        return Err(Error::malformed_row(line, format!("missing {}", name)));
    }
    Ok(value.to_string())
}

fn parse_duration(row: &StringRecord, index: usize, line: u64) -> Result<f64> {
    let value = field(row, index);
    let duration: f64 = value.parse().map_err(|_| {
        Error::malformed_row(line, format!("invalid trip duration '{}'", value))
    })?;
    if !duration.is_finite() || duration < 0.0 {
        return Err(Error::malformed_row(
            line,
            format!("trip duration '{}' out of range", value),
        ));
    }
    Ok(duration)
}

fn parse_optional_datetime(row: &StringRecord, index: usize) -> Option<NaiveDateTime> {
    let value = field(row, index);
    NaiveDateTime::parse_from_str(value, TRIP_DATETIME_FORMAT).ok()
}

fn parse_optional_string(row: &StringRecord, index: usize) -> Option<String> {
    let value = field(row, index);
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Birth years are exported as floats ("1992.0"); parse through f64
fn parse_optional_year(row: &StringRecord, index: usize) -> Option<i32> {
    let value = field(row, index);
    value.parse::<f64>().ok().filter(|y| y.is_finite()).map(|y| y as i32)
}
