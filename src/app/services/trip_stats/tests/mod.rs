//! Tests for the statistics aggregators

mod time_tests;

use crate::app::models::{City, Dataset, TripRecord};
use chrono::NaiveDateTime;

/// Trip fixture with the fields the aggregators look at
pub(crate) struct TripSpec<'a> {
    pub start: &'a str,
    pub duration: f64,
    pub start_station: &'a str,
    pub end_station: &'a str,
    pub user_type: Option<&'a str>,
    pub gender: Option<&'a str>,
    pub birth_year: Option<i32>,
}

impl Default for TripSpec<'_> {
    fn default() -> Self {
        Self {
            start: "2017-01-02 08:00:00",
            duration: 300.0,
            start_station: "A",
            end_station: "B",
            user_type: Some("Subscriber"),
            gender: None,
            birth_year: None,
        }
    }
}

pub(crate) fn trip(spec: TripSpec) -> TripRecord {
    let start = NaiveDateTime::parse_from_str(spec.start, "%Y-%m-%d %H:%M:%S").unwrap();
    TripRecord::new(
        start,
        None,
        spec.start_station.to_string(),
        spec.end_station.to_string(),
        spec.duration,
        spec.user_type.map(str::to_string),
        spec.gender.map(str::to_string),
        spec.birth_year,
    )
}

pub(crate) fn dataset(records: Vec<TripRecord>) -> Dataset {
    Dataset::new(City::Chicago, records)
}

pub(crate) fn empty_dataset() -> Dataset {
    dataset(Vec::new())
}
