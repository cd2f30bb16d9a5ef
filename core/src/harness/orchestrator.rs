use super::{compare, snapshot, verify_angles, GeometrySnapshot, HarnessError};
use crate::geometry::Coord;
use crate::record::{
    write_result, Clock, EndpointRecord, LineEndpoints, LineRecord, PointRecord, ResultRecord,
    RunResults, SolvedPoint,
};
use crate::sketch::{build_constraints, BuiltSketch, SketchDescriptor};
use crate::solver::{PerVariant, SolveVariant, SolverBackend, SolverError, SolverSession};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::debug;

/// Solved geometry and cost of one variant.
#[derive(Debug, Clone, PartialEq)]
pub struct VariantRun {
    pub geometry: GeometrySnapshot,
    /// Primary solve plus the drag pass, if any.
    pub elapsed: Duration,
    pub steps: usize,
}

/// Outcome of solving one sketch under both variants.
#[derive(Debug, Clone, PartialEq)]
pub struct DualSolveRun {
    pub sketch: SketchDescriptor,
    /// Geometry before any solve, shared by both variants.
    pub original: GeometrySnapshot,
    pub solved: PerVariant<VariantRun>,
}

/// Solve `sketch` under L1, then L2, each in a fresh session.
///
/// Any failure aborts the whole run; nothing is retried.
pub fn run_dual_solve<B: SolverBackend>(
    backend: &B,
    sketch: &SketchDescriptor,
) -> Result<DualSolveRun, HarnessError> {
    sketch.validate()?;

    let mut original = None;
    let solved = PerVariant::try_from_fn(|variant| solve_variant(backend, sketch, variant, &mut original))?;

    Ok(DualSolveRun {
        sketch: sketch.clone(),
        original: original.unwrap_or_default(),
        solved,
    })
}

fn solve_variant<B: SolverBackend>(
    backend: &B,
    sketch: &SketchDescriptor,
    variant: SolveVariant,
    original: &mut Option<GeometrySnapshot>,
) -> Result<VariantRun, HarnessError> {
    let mut session = backend.open_session();
    let built = BuiltSketch::construct(&mut session, sketch)?;
    for constraint in build_constraints(&built, &sketch.constraints)? {
        session.add_constraint(constraint);
    }
    session.set_strategy(variant.strategy());

    if original.is_none() {
        *original = Some(snapshot(&session, &built));
    }

    let solver_err = |source: SolverError| HarnessError::Solver { variant, source };

    let start = Instant::now();
    let mut steps = session.solve().map_err(solver_err)?;

    if !sketch.moves.is_empty() {
        for (name, m) in &sketch.moves {
            let point = built.named_point(&format!("move '{}'", name), &m.point)?;
            session.add_drag(point, m.values);
        }
        steps += session.solve().map_err(solver_err)?;
    }
    let elapsed = start.elapsed();

    debug!(%variant, steps, elapsed_us = elapsed.as_micros() as u64, "variant solved");

    Ok(VariantRun { geometry: snapshot(&session, &built), elapsed, steps })
}

impl DualSolveRun {
    pub fn moved_points(&self) -> BTreeSet<String> {
        self.sketch.moved_points().map(str::to_string).collect()
    }

    /// Assemble the persisted record: geometry, drift metrics and angle checks.
    pub fn to_record(&self) -> ResultRecord {
        let geometry = self.solved.map(|run| run.geometry.clone());
        let comparison = compare(&self.original, &geometry, &self.moved_points());

        let solved_at = |g: &GeometrySnapshot, name: &str| g.points.get(name).copied().unwrap_or_default();

        let points = self
            .original
            .points
            .iter()
            .map(|(name, before)| {
                let norms = comparison.per_point.get(name).copied().unwrap_or_default();
                let at = |g: &GeometrySnapshot, n: Option<_>| {
                    let c: Coord = solved_at(g, name.as_str());
                    SolvedPoint { x: c.x, y: c.y, norms: n }
                };
                let record = PointRecord {
                    original: *before,
                    l1: at(&geometry.l1, norms.l1),
                    l2: at(&geometry.l2, norms.l2),
                };
                (name.clone(), record)
            })
            .collect();

        let lines = self
            .sketch
            .lines
            .iter()
            .map(|(name, line)| {
                let ends = |g: &GeometrySnapshot| g.lines.get(name).copied().unwrap_or_default();
                let [o, a, b] = [ends(&self.original), ends(&geometry.l1), ends(&geometry.l2)];
                let endpoint = |i: usize| EndpointRecord { original: o[i], l1: a[i], l2: b[i] };
                let record = LineRecord {
                    source: line.source.clone(),
                    target: line.target.clone(),
                    points: Some(LineEndpoints { source: endpoint(0), target: endpoint(1) }),
                };
                (name.clone(), record)
            })
            .collect();

        ResultRecord {
            points,
            lines,
            circles: self.sketch.circles.clone(),
            constraints: self.sketch.constraints.clone(),
            moves: self.sketch.moves.clone(),
            angles: verify_angles(&self.sketch, &self.original, &geometry),
            results: RunResults {
                l1_norm: comparison.totals.map(|t| t.l1_norm),
                l2_norm: comparison.totals.map(|t| t.l2_norm),
                non_zero_results: comparison.totals.map(|t| t.non_zero_results),
                variables: comparison.variables,
                time: self.solved.map(|run| run.elapsed.as_secs_f64()),
                steps: self.solved.map(|run| run.steps),
            },
        }
    }
}

/// Run both variants and write one result record into `directory`.
///
/// The file is only written once both variants have converged.
pub fn run_and_persist<B: SolverBackend>(
    backend: &B,
    sketch: &SketchDescriptor,
    directory: &Path,
    counter: u32,
    clock: &dyn Clock,
) -> Result<PathBuf, HarnessError> {
    let run = run_dual_solve(backend, sketch)?;
    Ok(write_result(directory, &run.to_record(), counter, clock)?)
}
