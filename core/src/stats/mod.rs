//! Aggregation of many result records into per-metric statistics.
//!
//! Nothing here is persisted; series are rebuilt from the directory on
//! every request.

pub mod histogram;
pub mod scan;
pub mod summary;


pub use histogram::{histogram, Histogram};
pub use scan::{scan_directory, RawSeries, SkippedFile};
pub use summary::{summarize, Summary};

use crate::solver::PerVariant;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AggregateError {
    #[error("cannot read result directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no values recorded for metric '{0}'")]
    UnknownMetric(String),
}

/// Histogram of `metric` for each variant.
pub fn metric_histograms(
    series: &RawSeries,
    metric: &str,
    bins: usize,
) -> Result<PerVariant<Histogram>, AggregateError> {
    let values = series
        .metrics
        .get(metric)
        .ok_or_else(|| AggregateError::UnknownMetric(metric.to_string()))?;
    Ok(values.map(|v| histogram(v, bins)))
}
