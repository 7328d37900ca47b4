//! Data models for bikeshare trip analysis
//!
//! This module contains the core data structures for representing trip
//! records, in-memory datasets, and the city/month/day selections that
//! restrict which records are analyzed.

use crate::constants::{self, DAY_NAMES, FILTER_MONTH_COUNT, MONTH_NAMES};
use crate::{Error, Result};
use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// City Selection
// =============================================================================

/// Supported cities, each mapped to exactly one fixed CSV source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    /// All supported cities in display order
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Human-readable city name
    pub fn name(&self) -> &'static str {
        constants::CITY_NAMES[self.index()]
    }

    /// Source CSV filename for this city
    pub fn source_filename(&self) -> &'static str {
        constants::CITY_SOURCE_FILES[self.index()]
    }

    fn index(&self) -> usize {
        match self {
            City::Chicago => 0,
            City::NewYorkCity => 1,
            City::Washington => 2,
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for City {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim();
        City::ALL
            .into_iter()
            .find(|city| city.name().eq_ignore_ascii_case(normalized))
            .ok_or_else(|| {
                Error::data_validation(format!(
                    "Not a valid city '{}', please choose one of: {}",
                    s.trim(),
                    constants::CITY_NAMES.join(", ")
                ))
            })
    }
}

// =============================================================================
// Month and Day Filters
// =============================================================================

/// Month restriction: a named month from January through June, or no
/// restriction at all
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum MonthFilter {
    All,
    January,
    February,
    March,
    April,
    May,
    June,
}

impl MonthFilter {
    /// The month number (1-6) this filter selects, or `None` for `All`
    pub fn number(&self) -> Option<u32> {
        match self {
            MonthFilter::All => None,
            MonthFilter::January => Some(1),
            MonthFilter::February => Some(2),
            MonthFilter::March => Some(3),
            MonthFilter::April => Some(4),
            MonthFilter::May => Some(5),
            MonthFilter::June => Some(6),
        }
    }

    /// Display name for this selection
    pub fn name(&self) -> &'static str {
        match self.number() {
            Some(n) => MONTH_NAMES[(n - 1) as usize],
            None => constants::FILTER_ALL,
        }
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for MonthFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim();
        if normalized.eq_ignore_ascii_case(constants::FILTER_ALL) {
            return Ok(MonthFilter::All);
        }

        match constants::month_number(normalized) {
            Some(1) => Ok(MonthFilter::January),
            Some(2) => Ok(MonthFilter::February),
            Some(3) => Ok(MonthFilter::March),
            Some(4) => Ok(MonthFilter::April),
            Some(5) => Ok(MonthFilter::May),
            Some(6) => Ok(MonthFilter::June),
            _ => Err(Error::data_validation(format!(
                "Not a valid month '{}', please choose one of: {}, All",
                normalized,
                MONTH_NAMES[..FILTER_MONTH_COUNT].join(", ")
            ))),
        }
    }
}

/// Day-of-week restriction: a named day, or no restriction at all
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum DayFilter {
    All,
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl DayFilter {
    /// The day name this filter selects, or `None` for `All`
    pub fn name(&self) -> Option<&'static str> {
        match self {
            DayFilter::All => None,
            DayFilter::Sunday => Some("Sunday"),
            DayFilter::Monday => Some("Monday"),
            DayFilter::Tuesday => Some("Tuesday"),
            DayFilter::Wednesday => Some("Wednesday"),
            DayFilter::Thursday => Some("Thursday"),
            DayFilter::Friday => Some("Friday"),
            DayFilter::Saturday => Some("Saturday"),
        }
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name().unwrap_or(constants::FILTER_ALL))
    }
}

impl FromStr for DayFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim();
        if normalized.eq_ignore_ascii_case(constants::FILTER_ALL) {
            return Ok(DayFilter::All);
        }

        let position = DAY_NAMES
            .iter()
            .position(|d| d.eq_ignore_ascii_case(normalized));
        match position {
            Some(0) => Ok(DayFilter::Sunday),
            Some(1) => Ok(DayFilter::Monday),
            Some(2) => Ok(DayFilter::Tuesday),
            Some(3) => Ok(DayFilter::Wednesday),
            Some(4) => Ok(DayFilter::Thursday),
            Some(5) => Ok(DayFilter::Friday),
            Some(6) => Ok(DayFilter::Saturday),
            _ => Err(Error::data_validation(format!(
                "Not a valid day '{}', please choose one of: {}, All",
                normalized,
                DAY_NAMES.join(", ")
            ))),
        }
    }
}

/// A complete, validated set of selections for one analysis run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    /// City whose trip export is loaded
    pub city: City,

    /// Month restriction applied after loading
    pub month: MonthFilter,

    /// Day-of-week restriction applied after loading
    pub day: DayFilter,
}

impl FilterSpec {
    /// Create a filter spec for a city with no month/day restriction
    pub fn for_city(city: City) -> Self {
        Self {
            city,
            month: MonthFilter::All,
            day: DayFilter::All,
        }
    }

    /// True when neither the month nor the day axis restricts anything
    pub fn is_unrestricted(&self) -> bool {
        self.month == MonthFilter::All && self.day == DayFilter::All
    }
}

// =============================================================================
// Trip Records and Datasets
// =============================================================================

/// One ride event, immutable once loaded
///
/// The month number and day-of-week name are derived from the start
/// timestamp at construction, so they can never disagree with it. The start
/// hour is intentionally not stored; the time aggregator re-derives it per
/// call.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    /// Trip start timestamp
    pub start_time: NaiveDateTime,

    /// Trip end timestamp, when present in the export
    pub end_time: Option<NaiveDateTime>,

    /// Name of the station where the trip began
    pub start_station: String,

    /// Name of the station where the trip ended
    pub end_station: String,

    /// Trip duration in seconds
    pub duration_secs: f64,

    /// Rider category, e.g. "Subscriber" or "Customer"
    pub user_type: Option<String>,

    /// Rider gender; absent for the Washington export
    pub gender: Option<String>,

    /// Rider birth year; absent for the Washington export
    pub birth_year: Option<i32>,

    // Derived from start_time at construction
    month: u32,
    day_of_week: &'static str,
}

impl TripRecord {
    /// Create a trip record, deriving the month and day-of-week fields
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        start_time: NaiveDateTime,
        end_time: Option<NaiveDateTime>,
        start_station: String,
        end_station: String,
        duration_secs: f64,
        user_type: Option<String>,
        gender: Option<String>,
        birth_year: Option<i32>,
    ) -> Self {
        let month = start_time.month();
        let day_of_week = constants::day_name(start_time.weekday());
        Self {
            start_time,
            end_time,
            start_station,
            end_station,
            duration_secs,
            user_type,
            gender,
            birth_year,
            month,
            day_of_week,
        }
    }

    /// Month number (1-12) derived from the start timestamp
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Full English day-of-week name derived from the start timestamp
    pub fn day_of_week(&self) -> &'static str {
        self.day_of_week
    }

    /// Start hour (0-23), derived on demand from the start timestamp
    pub fn start_hour(&self) -> u32 {
        self.start_time.hour()
    }
}

/// An ordered, immutable collection of trip records for one city
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    city: City,
    records: Vec<TripRecord>,
}

impl Dataset {
    /// Create a dataset from already-parsed records
    pub fn new(city: City, records: Vec<TripRecord>) -> Self {
        Self { city, records }
    }

    /// The city this dataset was loaded for
    pub fn city(&self) -> City {
        self.city
    }

    /// The records in load order
    pub fn records(&self) -> &[TripRecord] {
        &self.records
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the dataset holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn trip_at(datetime: &str) -> TripRecord {
        let start = NaiveDateTime::parse_from_str(datetime, "%Y-%m-%d %H:%M:%S").unwrap();
        TripRecord::new(
            start,
            None,
            "A St".to_string(),
            "B St".to_string(),
            300.0,
            Some("Subscriber".to_string()),
            None,
            None,
        )
    }

    mod city_tests {
        use super::*;

        #[test]
        fn test_city_parsing() {
            assert_eq!(City::from_str("Chicago").unwrap(), City::Chicago);
            assert_eq!(City::from_str("chicago").unwrap(), City::Chicago);
            assert_eq!(City::from_str("new york city").unwrap(), City::NewYorkCity);
            assert_eq!(City::from_str(" Washington ").unwrap(), City::Washington);
            assert!(City::from_str("Springfield").is_err());
        }

        #[test]
        fn test_city_source_mapping() {
            assert_eq!(City::Chicago.source_filename(), "chicago.csv");
            assert_eq!(City::NewYorkCity.source_filename(), "new_york_city.csv");
            assert_eq!(City::Washington.source_filename(), "washington.csv");
        }

        #[test]
        fn test_city_display() {
            assert_eq!(City::NewYorkCity.to_string(), "New York City");
        }
    }

    mod filter_tests {
        use super::*;

        #[test]
        fn test_month_filter_parsing() {
            assert_eq!(MonthFilter::from_str("All").unwrap(), MonthFilter::All);
            assert_eq!(MonthFilter::from_str("all").unwrap(), MonthFilter::All);
            assert_eq!(
                MonthFilter::from_str("February").unwrap(),
                MonthFilter::February
            );
            assert_eq!(MonthFilter::from_str("june").unwrap(), MonthFilter::June);

            // July exists as a month but is outside the filterable range
            assert!(MonthFilter::from_str("July").is_err());
            assert!(MonthFilter::from_str("nonsense").is_err());
        }

        #[test]
        fn test_month_filter_numbers() {
            assert_eq!(MonthFilter::All.number(), None);
            assert_eq!(MonthFilter::January.number(), Some(1));
            assert_eq!(MonthFilter::June.number(), Some(6));
        }

        #[test]
        fn test_day_filter_parsing() {
            assert_eq!(DayFilter::from_str("All").unwrap(), DayFilter::All);
            assert_eq!(DayFilter::from_str("monday").unwrap(), DayFilter::Monday);
            assert_eq!(
                DayFilter::from_str(" Saturday ").unwrap(),
                DayFilter::Saturday
            );
            assert!(DayFilter::from_str("Someday").is_err());
        }

        #[test]
        fn test_filter_spec_unrestricted() {
            let spec = FilterSpec::for_city(City::Chicago);
            assert!(spec.is_unrestricted());

            let spec = FilterSpec {
                city: City::Chicago,
                month: MonthFilter::March,
                day: DayFilter::All,
            };
            assert!(!spec.is_unrestricted());
        }
    }

    mod trip_record_tests {
        use super::*;

        #[test]
        fn test_derived_fields_follow_start_time() {
            // 2017-01-02 was a Monday
            let trip = trip_at("2017-01-02 08:15:00");
            assert_eq!(trip.month(), 1);
            assert_eq!(trip.day_of_week(), "Monday");
            assert_eq!(trip.start_hour(), 8);
        }

        #[test]
        fn test_derived_fields_sunday_boundary() {
            // 2017-06-04 was a Sunday
            let trip = trip_at("2017-06-04 23:59:59");
            assert_eq!(trip.month(), 6);
            assert_eq!(trip.day_of_week(), "Sunday");
            assert_eq!(trip.start_hour(), 23);
        }

        #[test]
        fn test_dataset_accessors() {
            let records = vec![trip_at("2017-01-02 08:00:00"), trip_at("2017-02-03 09:00:00")];
            let dataset = Dataset::new(City::Chicago, records);
            assert_eq!(dataset.city(), City::Chicago);
            assert_eq!(dataset.len(), 2);
            assert!(!dataset.is_empty());
            assert_eq!(
                dataset.records()[0].start_time.date(),
                NaiveDate::from_ymd_opt(2017, 1, 2).unwrap()
            );
        }
    }
}
