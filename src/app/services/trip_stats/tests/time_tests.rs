//! Time statistics tests

use super::{TripSpec, dataset, empty_dataset, trip};
use crate::app::services::trip_stats::time;

#[test]
fn test_popular_month_day_and_hour() {
    let data = dataset(vec![
        // Two February trips, one January; two 9 o'clock starts
        trip(TripSpec {
            start: "2017-01-02 08:30:00", // Monday
            ..Default::default()
        }),
        trip(TripSpec {
            start: "2017-02-07 09:00:00", // Tuesday
            ..Default::default()
        }),
        trip(TripSpec {
            start: "2017-02-14 09:45:00", // Tuesday
            ..Default::default()
        }),
    ]);

    let stats = time::compute(&data);
    assert_eq!(stats.popular_month.as_deref(), Some("February"));
    assert_eq!(stats.popular_day.as_deref(), Some("Tuesday"));
    assert_eq!(stats.popular_hour, Some(9));
}

#[test]
fn test_month_ties_resolve_to_first_seen() {
    let data = dataset(vec![
        trip(TripSpec {
            start: "2017-03-01 10:00:00",
            ..Default::default()
        }),
        trip(TripSpec {
            start: "2017-01-04 11:00:00",
            ..Default::default()
        }),
    ]);

    // One trip each; March was encountered first
    let stats = time::compute(&data);
    assert_eq!(stats.popular_month.as_deref(), Some("March"));
}

#[test]
fn test_empty_dataset_yields_no_data() {
    let stats = time::compute(&empty_dataset());
    assert_eq!(stats.popular_month, None);
    assert_eq!(stats.popular_day, None);
    assert_eq!(stats.popular_hour, None);
}
