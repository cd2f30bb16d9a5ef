use super::GeometrySnapshot;
use crate::record::AngleCheck;
use crate::sketch::{measure_line_angle, ConstraintDescriptor, SketchDescriptor};
use crate::solver::PerVariant;
use std::collections::BTreeMap;
use tracing::trace;

fn finite(v: f64) -> Option<f64> {
    v.is_finite().then_some(v)
}

fn measure(snapshot: &GeometrySnapshot, a: &str, b: &str) -> Option<f64> {
    let a = snapshot.lines.get(a)?;
    let b = snapshot.lines.get(b)?;
    finite(measure_line_angle(*a, *b).angle)
}

/// Achieved angle of every ANGLE and ORTHOGONAL constraint in `sketch`,
/// measured on the original geometry and on each solved variant.
pub fn verify_angles(
    sketch: &SketchDescriptor,
    original: &GeometrySnapshot,
    solved: &PerVariant<GeometrySnapshot>,
) -> BTreeMap<String, AngleCheck> {
    let mut checks = BTreeMap::new();

    for (name, constraint) in &sketch.constraints {
        let ([a, b], requested) = match constraint {
            ConstraintDescriptor::Angle { entities, value } => (entities, finite(value.to_degrees())),
            ConstraintDescriptor::Orthogonal { entities } => (entities, None),
            _ => continue,
        };

        let check = AngleCheck {
            requested,
            original: measure(original, a, b),
            measured: solved.map(|geometry| measure(geometry, a, b)),
        };
        trace!(constraint = %name, ?check, "angle check");
        checks.insert(name.clone(), check);
    }

    checks
}
