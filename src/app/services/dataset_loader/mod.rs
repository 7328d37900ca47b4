//! City trip CSV loading
//!
//! This module reads one city's trip export into an in-memory [`Dataset`].
//! Columns are located by header name so the loader tolerates the column
//! order differences (and the missing demographic columns) between city
//! exports.
//!
//! Malformed row policy: a row whose required fields are missing or whose
//! start timestamp fails to parse is skipped and counted in [`LoadStats`];
//! the load itself only fails when the file cannot be opened or its header
//! is unusable.

mod column_map;
mod record_parser;
mod stats;

pub use column_map::ColumnMap;
pub use record_parser::parse_trip_record;
pub use stats::{LoadResult, LoadStats};

#[cfg(test)]
mod tests;

use crate::app::models::{City, Dataset};
use crate::config::Config;
use crate::{Error, Result};
use tracing::{debug, info};

/// Loader for city trip CSV exports
#[derive(Debug, Clone)]
pub struct DatasetLoader {
    config: Config,
}

impl DatasetLoader {
    /// Create a loader resolving city sources through the given configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Load the trip export for a city into memory
    ///
    /// Returns the parsed dataset together with load statistics. Fails only
    /// when the source file is absent or unreadable, or when its header row
    /// lacks a required column.
    pub fn load(&self, city: City) -> Result<LoadResult> {
        let path = self.config.source_path(city);
        let display_path = path.display().to_string();

        debug!("Loading {} trips from {}", city, display_path);

        if !path.exists() {
            return Err(Error::data_source(display_path, "file not found"));
        }

        let mut reader = csv::Reader::from_path(&path)
            .map_err(|e| Error::data_source(display_path.clone(), e.to_string()))?;

        let headers = reader
            .headers()
            .map_err(|e| {
                Error::csv_parsing(display_path.clone(), "failed to read header row", Some(e))
            })?
            .clone();
        let map = ColumnMap::from_headers(&headers)
            .map_err(|e| Error::csv_parsing(display_path.clone(), e.to_string(), None))?;

        let mut stats = LoadStats::new();
        let mut records = Vec::new();

        for (index, row) in reader.records().enumerate() {
            stats.rows_read += 1;
            // Header occupies line 1, data starts at line 2
            let line = (index + 2) as u64;

            let row = match row {
                Ok(row) => row,
                Err(e) => {
                    stats.record_skip(line, &e.to_string());
                    continue;
                }
            };

            match parse_trip_record(&row, &map, line) {
                Ok(trip) => {
                    records.push(trip);
                    stats.records_loaded += 1;
                }
                Err(e) => {
                    debug!("Skipping row {}: {}", line, e);
                    stats.record_skip(line, &e.to_string());
                }
            }
        }

        info!(
            "Loaded {} of {} rows for {} ({} skipped)",
            stats.records_loaded, stats.rows_read, city, stats.rows_skipped
        );

        Ok(LoadResult {
            dataset: Dataset::new(city, records),
            stats,
        })
    }
}
