//! Settings for aggregating result directories, read from a JSON file.
//!
//! Every field is optional; a missing file section falls back to defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub aggregate: AggregateConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregateConfig {
    /// `Results` keys that are not per-variant series.
    pub excluded_metrics: Vec<String>,
    pub histogram_bins: usize,
}

impl Default for AggregateConfig {
    fn default() -> Self {
        Self { excluded_metrics: vec!["variables".to_string()], histogram_bins: 10 }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let body = fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        serde_json::from_str(&body).map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
    }
}
