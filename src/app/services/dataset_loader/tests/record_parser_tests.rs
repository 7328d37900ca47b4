//! Row parsing and column mapping tests

use crate::Error;
use crate::app::services::dataset_loader::{ColumnMap, parse_trip_record};
use csv::StringRecord;

fn headers(fields: &[&str]) -> StringRecord {
    StringRecord::from(fields.to_vec())
}

fn full_map() -> ColumnMap {
    ColumnMap::from_headers(&headers(&[
        "",
        "Start Time",
        "End Time",
        "Trip Duration",
        "Start Station",
        "End Station",
        "User Type",
        "Gender",
        "Birth Year",
    ]))
    .unwrap()
}

#[test]
fn test_column_map_ignores_column_order() {
    let map = ColumnMap::from_headers(&headers(&[
        "Trip Duration",
        "End Station",
        "Start Station",
        "Start Time",
    ]))
    .unwrap();

    assert_eq!(map.start_time, 3);
    assert_eq!(map.trip_duration, 0);
    assert_eq!(map.start_station, 2);
    assert_eq!(map.end_station, 1);
    assert!(map.gender.is_none());
    assert!(!map.has_demographics());
}

#[test]
fn test_column_map_requires_start_time() {
    let result = ColumnMap::from_headers(&headers(&[
        "Trip Duration",
        "Start Station",
        "End Station",
    ]));
    assert!(matches!(result, Err(Error::DataValidation { .. })));
}

#[test]
fn test_parse_full_row() {
    let row = StringRecord::from(vec![
        "7",
        "2017-05-20 14:30:00",
        "2017-05-20 14:40:00",
        "600",
        "Pine St",
        "Oak St",
        "Subscriber",
        "Female",
        "1990.0",
    ]);

    let trip = parse_trip_record(&row, &full_map(), 2).unwrap();
    assert_eq!(trip.start_station, "Pine St");
    assert_eq!(trip.end_station, "Oak St");
    assert_eq!(trip.duration_secs, 600.0);
    assert_eq!(trip.month(), 5);
    assert_eq!(trip.day_of_week(), "Saturday");
    assert_eq!(trip.user_type.as_deref(), Some("Subscriber"));
    assert_eq!(trip.gender.as_deref(), Some("Female"));
    assert_eq!(trip.birth_year, Some(1990));
    assert!(trip.end_time.is_some());
}

#[test]
fn test_parse_rejects_bad_start_time() {
    let row = StringRecord::from(vec![
        "7",
        "20/05/2017 14:30",
        "",
        "600",
        "Pine St",
        "Oak St",
        "Subscriber",
        "",
        "",
    ]);

    let err = parse_trip_record(&row, &full_map(), 9).unwrap_err();
    assert!(matches!(err, Error::MalformedRow { line: 9, .. }));
}

#[test]
fn test_parse_rejects_negative_duration() {
    let row = StringRecord::from(vec![
        "7",
        "2017-05-20 14:30:00",
        "",
        "-600",
        "Pine St",
        "Oak St",
        "Subscriber",
        "",
        "",
    ]);

    assert!(parse_trip_record(&row, &full_map(), 2).is_err());
}

#[test]
fn test_parse_rejects_missing_station() {
    let row = StringRecord::from(vec![
        "7",
        "2017-05-20 14:30:00",
        "",
        "600",
        "",
        "Oak St",
        "Subscriber",
        "",
        "",
    ]);

    assert!(parse_trip_record(&row, &full_map(), 2).is_err());
}

#[test]
fn test_optional_fields_degrade_to_none() {
    let row = StringRecord::from(vec![
        "7",
        "2017-05-20 14:30:00",
        "garbled",
        "600",
        "Pine St",
        "Oak St",
        "",
        "",
        "not-a-year",
    ]);

    let trip = parse_trip_record(&row, &full_map(), 2).unwrap();
    assert_eq!(trip.end_time, None);
    assert_eq!(trip.user_type, None);
    assert_eq!(trip.gender, None);
    assert_eq!(trip.birth_year, None);
}
