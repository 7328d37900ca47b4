//! Load statistics for trip CSV parsing

use crate::app::models::Dataset;
use crate::constants::MAX_RECORDED_ROW_ERRORS;

/// A loaded dataset together with its load statistics
#[derive(Debug, Clone)]
pub struct LoadResult {
    /// Successfully parsed trip records
    pub dataset: Dataset,

    /// Row counts and skip diagnostics
    pub stats: LoadStats,
}

/// Row-level statistics for one load
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct LoadStats {
    /// Total number of data rows encountered
    pub rows_read: usize,

    /// Number of trips successfully parsed
    pub records_loaded: usize,

    /// Number of rows skipped due to errors
    pub rows_skipped: usize,

    /// Bounded sample of skip reasons for diagnostics
    pub errors: Vec<String>,
}

impl LoadStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            rows_read: 0,
            records_loaded: 0,
            rows_skipped: 0,
            errors: Vec::new(),
        }
    }

    /// Count a skipped row, keeping at most a bounded sample of messages
    pub fn record_skip(&mut self, line: u64, message: &str) {
        self.rows_skipped += 1;
        if self.errors.len() < MAX_RECORDED_ROW_ERRORS {
            self.errors.push(format!("row {}: {}", line, message));
        }
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.rows_read == 0 {
            0.0
        } else {
            (self.records_loaded as f64 / self.rows_read as f64) * 100.0
        }
    }
}

impl Default for LoadStats {
    fn default() -> Self {
        Self::new()
    }
}
