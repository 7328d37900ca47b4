//! Analysis pipeline: Loader -> Filter Engine -> Aggregators
//!
//! One entry point per shell iteration. The dataset is loaded fresh on
//! every call and dropped when the report has been built; nothing is cached
//! across iterations.

use crate::app::models::{City, DayFilter, FilterSpec, MonthFilter};
use crate::app::services::dataset_loader::DatasetLoader;
use crate::app::services::filter_engine;
use crate::app::services::trip_stats::{self, DurationStats, StationStats, TimeStats, UserStats};
use crate::config::Config;
use crate::Result;
use serde::Serialize;
use tracing::{debug, warn};

/// Structured result of one analysis run, one section per aggregator
#[derive(Debug, Clone, Serialize)]
pub struct PipelineReport {
    /// City whose export was analyzed
    pub city: City,

    /// Month restriction that was applied
    pub month: MonthFilter,

    /// Day restriction that was applied
    pub day: DayFilter,

    /// Records loaded from the source file
    pub trips_loaded: usize,

    /// Records remaining after filtering
    pub trips_matching: usize,

    /// Source rows skipped as malformed during the load
    pub rows_skipped: usize,

    /// Popular travel time summary
    pub time: TimeStats,

    /// Popular station summary
    pub stations: StationStats,

    /// Trip duration summary
    pub durations: DurationStats,

    /// User demographic summary
    pub users: UserStats,
}

impl PipelineReport {
    /// True when no trips matched the given filters
    pub fn is_empty(&self) -> bool {
        self.trips_matching == 0
    }
}

/// Run the full pipeline for one validated filter spec
///
/// Loads the city's export, applies the month/day projection, and runs the
/// four aggregators independently over the filtered dataset. A missing or
/// unreadable source file fails the run; an empty filter result does not.
pub fn run_pipeline(config: &Config, spec: &FilterSpec) -> Result<PipelineReport> {
    let loader = DatasetLoader::new(config.clone());
    let loaded = loader.load(spec.city)?;

    if loaded.stats.rows_skipped > 0 {
        warn!(
            "Skipped {} malformed rows in {} (first errors: {:?})",
            loaded.stats.rows_skipped,
            spec.city,
            loaded.stats.errors.first()
        );
    }

    let filtered = filter_engine::apply(&loaded.dataset, spec);
    debug!(
        "{} of {} trips match month={} day={}",
        filtered.len(),
        loaded.dataset.len(),
        spec.month,
        spec.day
    );

    Ok(PipelineReport {
        city: spec.city,
        month: spec.month,
        day: spec.day,
        trips_loaded: loaded.dataset.len(),
        trips_matching: filtered.len(),
        rows_skipped: loaded.stats.rows_skipped,
        time: trip_stats::time::compute(&filtered),
        stations: trip_stats::station::compute(&filtered),
        durations: trip_stats::duration::compute(&filtered),
        users: trip_stats::user::compute(&filtered),
    })
}
