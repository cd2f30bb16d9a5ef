use super::AggregateError;
use crate::solver::{PerVariant, SolveVariant};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// A result file that could not contribute to the aggregate.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Per-run values of every metric, grouped by variant, in file name order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawSeries {
    pub metrics: BTreeMap<String, PerVariant<Vec<f64>>>,
    /// Files that contributed values.
    pub files: Vec<PathBuf>,
    pub skipped: Vec<SkippedFile>,
}

impl RawSeries {
    pub fn values(&self, metric: &str, variant: SolveVariant) -> Option<&[f64]> {
        self.metrics.get(metric).map(|series| series.get(variant).as_slice())
    }

    /// Add the `Results` object of one record. Scalars, metrics named in
    /// `excluded` and non-numeric entries are ignored.
    pub fn absorb(&mut self, results: &serde_json::Map<String, Value>, excluded: &[String]) {
        for (metric, per_variant) in results {
            if excluded.iter().any(|e| e == metric) {
                continue;
            }
            for variant in SolveVariant::ALL {
                if let Some(v) = per_variant.get(variant.as_str()).and_then(Value::as_f64) {
                    self.metrics.entry(metric.clone()).or_default().get_mut(variant).push(v);
                }
            }
        }
    }
}

fn skip(series: &mut RawSeries, path: PathBuf, reason: String) {
    warn!(path = %path.display(), %reason, "skipping result file");
    series.skipped.push(SkippedFile { path, reason });
}

/// Collect the `Results` of every `*.json` file in `directory`.
///
/// Only an unreadable directory is an error; a bad file is skipped and
/// reported in [`RawSeries::skipped`].
pub fn scan_directory(directory: &Path, excluded: &[String]) -> Result<RawSeries, AggregateError> {
    let read_dir_err = |source: std::io::Error| AggregateError::ReadDir { path: directory.to_path_buf(), source };

    let mut paths = Vec::new();
    for entry in fs::read_dir(directory).map_err(read_dir_err)? {
        let path = entry.map_err(read_dir_err)?.path();
        if path.is_file() && path.extension().map_or(false, |ext| ext == "json") {
            paths.push(path);
        }
    }
    paths.sort();

    let mut series = RawSeries::default();
    for path in paths {
        let body = match fs::read_to_string(&path) {
            Ok(body) => body,
            Err(e) => {
                skip(&mut series, path, e.to_string());
                continue;
            }
        };
        let value: Value = match serde_json::from_str(&body) {
            Ok(v) => v,
            Err(e) => {
                skip(&mut series, path, e.to_string());
                continue;
            }
        };
        match value.get("Results").and_then(Value::as_object) {
            Some(results) => {
                series.absorb(results, excluded);
                series.files.push(path);
            }
            None => skip(&mut series, path, "missing Results object".to_string()),
        }
    }

    debug!(
        directory = %directory.display(),
        files = series.files.len(),
        skipped = series.skipped.len(),
        "scanned result directory"
    );
    Ok(series)
}
