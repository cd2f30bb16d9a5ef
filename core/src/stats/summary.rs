use super::RawSeries;
use crate::solver::PerVariant;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Population statistics of one metric under one variant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    /// Population standard deviation (divide by N).
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

impl Summary {
    /// `None` for an empty series.
    pub fn of(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;

        Some(Self {
            count: values.len(),
            mean,
            std_dev: variance.sqrt(),
            min: values.iter().copied().fold(f64::INFINITY, f64::min),
            max: values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        })
    }
}

/// Summary of every metric, per variant. A variant with no values for a
/// metric has no summary.
pub fn summarize(series: &RawSeries) -> BTreeMap<String, PerVariant<Option<Summary>>> {
    series
        .metrics
        .iter()
        .map(|(metric, values)| (metric.clone(), values.map(|v| Summary::of(v))))
        .collect()
}
