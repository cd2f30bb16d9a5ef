use serde::{Deserialize, Serialize};

/// Equal-width bin counts; `edges` has one more entry than `counts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    pub counts: Vec<usize>,
    pub edges: Vec<f64>,
}

/// Bin `values` into `bins` equal-width bins spanning their range.
///
/// Every bin is half-open except the last, which includes the maximum. A
/// zero-width range is widened by 0.5 on both sides, and an empty input
/// spans `[0, 1]`.
pub fn histogram(values: &[f64], bins: usize) -> Histogram {
    let bins = bins.max(1);

    let (mut lo, mut hi) = if values.is_empty() {
        (0.0, 1.0)
    } else {
        values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)))
    };
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }

    let width = (hi - lo) / bins as f64;
    let edges = (0..=bins).map(|i| lo + width * i as f64).collect();

    let mut counts = vec![0; bins];
    for &v in values {
        let i = ((v - lo) / width).floor() as usize;
        counts[i.min(bins - 1)] += 1;
    }

    Histogram { counts, edges }
}
