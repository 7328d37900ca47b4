//! Most popular stations and station pairs

use super::frequency;
use crate::app::models::Dataset;
use crate::constants::TOP_TRIP_COUNT;
use serde::Serialize;

/// One (start, end) station pair with its trip count
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationPairCount {
    pub start_station: String,
    pub end_station: String,
    pub count: usize,
}

/// Popular station summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationStats {
    /// Most frequently used start station
    pub popular_start_station: Option<String>,

    /// Most frequently used end station
    pub popular_end_station: Option<String>,

    /// Up to five most frequent (start, end) pairs, descending by count;
    /// count ties keep the pair that first appeared in scan order
    pub top_trips: Vec<StationPairCount>,
}

/// Compute station statistics for a dataset
pub fn compute(dataset: &Dataset) -> StationStats {
    let records = dataset.records();

    let pair_counts = frequency::value_counts(
        records
            .iter()
            .map(|r| (r.start_station.as_str(), r.end_station.as_str())),
    );

    let top_trips = pair_counts
        .into_iter()
        .take(TOP_TRIP_COUNT)
        .map(|((start, end), count)| StationPairCount {
            start_station: start.to_string(),
            end_station: end.to_string(),
            count,
        })
        .collect();

    StationStats {
        popular_start_station: frequency::mode(
            records.iter().map(|r| r.start_station.as_str()),
        )
        .map(str::to_string),
        popular_end_station: frequency::mode(records.iter().map(|r| r.end_station.as_str()))
            .map(str::to_string),
        top_trips,
    }
}
