//! Reading and writing result records, one JSON file per run.

use super::ResultRecord;
use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed result record {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Source of the timestamp put in result file names.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Local wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    pub fn from_local<Tz: TimeZone>(at: DateTime<Tz>) -> Self {
        Self(at.naive_local())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// `YYYY-MM-DDThhmm--{counter}.json`
pub fn result_file_name(timestamp: NaiveDateTime, counter: u32) -> String {
    format!("{}--{}.json", timestamp.format("%Y-%m-%dT%H%M"), counter)
}

/// Serialize `record` into `directory` and return the path written.
///
/// Two runs in the same minute only get distinct files if the caller passes
/// distinct counters.
pub fn write_result(
    directory: &Path,
    record: &ResultRecord,
    counter: u32,
    clock: &dyn Clock,
) -> Result<PathBuf, RecordError> {
    let path = directory.join(result_file_name(clock.now(), counter));

    let body = serde_json::to_string_pretty(record)
        .map_err(|source| RecordError::Json { path: path.clone(), source })?;
    fs::write(&path, body).map_err(|source| RecordError::Io { path: path.clone(), source })?;

    info!(path = %path.display(), points = record.points.len(), "wrote result record");
    Ok(path)
}

pub fn read_result(path: &Path) -> Result<ResultRecord, RecordError> {
    let body = fs::read_to_string(path)
        .map_err(|source| RecordError::Io { path: path.to_path_buf(), source })?;
    serde_json::from_str(&body).map_err(|source| RecordError::Json { path: path.to_path_buf(), source })
}
