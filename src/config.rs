//! Configuration for data source locations.
//!
//! The supported-city table is injected into the loader through this
//! structure rather than looked up through a process-wide global, so tests
//! can point a loader at fixture directories.

use crate::app::models::City;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for the bikeshare explorer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory containing the city CSV exports
    pub data_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(crate::constants::DEFAULT_DATA_DIR),
        }
    }
}

impl Config {
    /// Create a configuration rooted at the given data directory
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Create configuration with a custom data directory
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Resolve the CSV path for a city's trip export
    pub fn source_path(&self, city: City) -> PathBuf {
        self.data_dir.join(city.source_filename())
    }

    /// The directory containing the city CSV exports
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
