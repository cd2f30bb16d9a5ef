//! Geometry capture and the per-point drift metrics between an original
//! sketch and a solved one.

use crate::geometry::Coord;
use crate::sketch::BuiltSketch;
use crate::solver::{PerVariant, SolverSession};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Evaluated coordinates of every point and line endpoint at one instant.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeometrySnapshot {
    pub points: BTreeMap<String, Coord>,
    /// `[source, target]` per line.
    pub lines: BTreeMap<String, [Coord; 2]>,
}

/// Evaluate every named point and line of `built` in `session`.
pub fn snapshot<S: SolverSession>(session: &S, built: &BuiltSketch) -> GeometrySnapshot {
    let points = built
        .points
        .iter()
        .map(|(name, handle)| (name.clone(), session.evaluate(*handle).planar()))
        .collect();

    let lines = built
        .lines
        .iter()
        .map(|(name, handle)| {
            let [source, target] = session.line_endpoints(*handle);
            let ends = [session.evaluate(source).planar(), session.evaluate(target).planar()];
            (name.clone(), ends)
        })
        .collect();

    GeometrySnapshot { points, lines }
}

/// Drift of one point between the original and a solved sketch.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointNorms {
    /// `|dx| + |dy|`
    pub l1_norm: f64,
    /// `dx² + dy²`, not square-rooted.
    pub l2_norm: f64,
    /// Number of axes whose value changed at all (0, 1 or 2).
    pub non_zero_results: u8,
}

pub fn point_norms(original: Coord, solved: Coord) -> PointNorms {
    let dx = original.x - solved.x;
    let dy = original.y - solved.y;
    PointNorms {
        l1_norm: dx.abs() + dy.abs(),
        l2_norm: dx * dx + dy * dy,
        non_zero_results: (dx != 0.0) as u8 + (dy != 0.0) as u8,
    }
}

/// Sum of point drift for one variant.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ComparisonTotals {
    pub l1_norm: f64,
    pub l2_norm: f64,
    pub non_zero_results: u32,
}

impl ComparisonTotals {
    pub fn add(&mut self, norms: &PointNorms) {
        self.l1_norm += norms.l1_norm;
        self.l2_norm += norms.l2_norm;
        self.non_zero_results += u32::from(norms.non_zero_results);
    }

    /// Sum the norms of every point not named in `moved`.
    pub fn aggregate<'a>(
        per_point: impl IntoIterator<Item = (&'a str, PointNorms)>,
        moved: &BTreeSet<String>,
    ) -> Self {
        let mut totals = Self::default();
        for (name, norms) in per_point {
            if !moved.contains(name) {
                totals.add(&norms);
            }
        }
        totals
    }
}

/// Free variables of a sketch: x and y of every point, moved or not.
pub fn variable_count(point_count: usize) -> usize {
    2 * point_count
}

/// Drift of every point under both variants.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Comparison {
    /// `None` for points that were the target of a move.
    pub per_point: BTreeMap<String, PerVariant<Option<PointNorms>>>,
    pub totals: PerVariant<ComparisonTotals>,
    pub variables: usize,
}

/// Compare each variant's solved geometry with the shared original.
///
/// Points dragged by a move get no norms and are left out of the totals.
/// They still count towards `variables`.
pub fn compare(
    original: &GeometrySnapshot,
    solved: &PerVariant<GeometrySnapshot>,
    moved: &BTreeSet<String>,
) -> Comparison {
    let per_point: BTreeMap<String, PerVariant<Option<PointNorms>>> = original
        .points
        .iter()
        .map(|(name, before)| {
            let norms = if moved.contains(name) {
                PerVariant::new(None, None)
            } else {
                solved.map(|geometry| geometry.points.get(name).map(|after| point_norms(*before, *after)))
            };
            (name.clone(), norms)
        })
        .collect();

    let totals = PerVariant::from_fn(|variant| {
        ComparisonTotals::aggregate(
            per_point
                .iter()
                .filter_map(|(name, norms)| norms.get(variant).map(|n| (name.as_str(), n))),
            moved,
        )
    });

    Comparison {
        per_point,
        totals,
        variables: variable_count(original.points.len()),
    }
}
