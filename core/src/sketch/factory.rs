//! Turns a sketch description into entities and constraints of a solver session.

use super::types::{ConstraintDescriptor, SketchDescriptor, SketchError};
use crate::solver::{
    CircleHandle, EntityHandle, EntityKind, LineHandle, PointHandle, SolverConstraint,
    SolverSession,
};
use std::collections::BTreeMap;

/// Name → handle maps of one session's entities.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuiltSketch {
    pub points: BTreeMap<String, PointHandle>,
    pub lines: BTreeMap<String, LineHandle>,
    pub circles: BTreeMap<String, CircleHandle>,
}

impl BuiltSketch {
    /// Create points, lines and circles of `sketch` in `session`.
    ///
    /// Lines and circles share the point entities they name, so a point moved
    /// by the solver moves every line that ends in it.
    pub fn construct<S: SolverSession>(
        session: &mut S,
        sketch: &SketchDescriptor,
    ) -> Result<Self, SketchError> {
        let mut built = Self::default();

        for (name, position) in &sketch.points {
            let handle = session.add_point(name, *position);
            built.points.insert(name.clone(), handle);
        }

        for (name, line) in &sketch.lines {
            let owner = format!("line '{}'", name);
            let source = built.named_point(&owner, &line.source)?;
            let target = built.named_point(&owner, &line.target)?;
            built.lines.insert(name.clone(), session.add_line(source, target));
        }

        for (name, circle) in &sketch.circles {
            let center = built.named_point(&format!("circle '{}'", name), &circle.center)?;
            built.circles.insert(name.clone(), session.add_circle(name, center, circle.radius));
        }

        Ok(built)
    }

    /// Look up a slot that can only hold a point: line endpoints, circle
    /// centers and move targets. Lines sharing the name are ignored.
    pub fn named_point(&self, owner: &str, name: &str) -> Result<PointHandle, SketchError> {
        self.points.get(name).copied().ok_or_else(|| SketchError::UnresolvedEntityReference {
            owner: owner.to_string(),
            entity: name.to_string(),
        })
    }

    /// Resolve a constraint entity against lines first, then points.
    pub fn resolve(&self, owner: &str, name: &str) -> Result<EntityHandle, SketchError> {
        if let Some(line) = self.lines.get(name) {
            return Ok(EntityHandle::Line(*line));
        }
        if let Some(point) = self.points.get(name) {
            return Ok(EntityHandle::Point(*point));
        }
        Err(SketchError::UnresolvedEntityReference {
            owner: owner.to_string(),
            entity: name.to_string(),
        })
    }

    pub fn point(&self, owner: &str, name: &str) -> Result<PointHandle, SketchError> {
        match self.resolve(owner, name)? {
            EntityHandle::Point(p) => Ok(p),
            _ => Err(mismatch(owner, name, EntityKind::Point)),
        }
    }

    pub fn line(&self, owner: &str, name: &str) -> Result<LineHandle, SketchError> {
        match self.resolve(owner, name)? {
            EntityHandle::Line(l) => Ok(l),
            _ => Err(mismatch(owner, name, EntityKind::Line)),
        }
    }

    fn lines<const N: usize>(&self, owner: &str, names: &[String; N]) -> Result<[LineHandle; N], SketchError> {
        let mut out = [LineHandle(0); N];
        for (slot, name) in out.iter_mut().zip(names) {
            *slot = self.line(owner, name)?;
        }
        Ok(out)
    }

    fn points<const N: usize>(&self, owner: &str, names: &[String; N]) -> Result<[PointHandle; N], SketchError> {
        let mut out = [PointHandle(0); N];
        for (slot, name) in out.iter_mut().zip(names) {
            *slot = self.point(owner, name)?;
        }
        Ok(out)
    }
}

fn mismatch(owner: &str, name: &str, expected: EntityKind) -> SketchError {
    SketchError::EntityKindMismatch {
        owner: owner.to_string(),
        entity: name.to_string(),
        expected,
    }
}

/// Build one solver constraint from its description.
pub fn build_constraint(
    built: &BuiltSketch,
    name: &str,
    descriptor: &ConstraintDescriptor,
) -> Result<SolverConstraint, SketchError> {
    let owner = format!("constraint '{}'", name);
    let owner = owner.as_str();

    let constraint = match descriptor {
        ConstraintDescriptor::Length { entities: [line], value } => SolverConstraint::Length {
            line: built.line(owner, line)?,
            value: *value,
        },
        ConstraintDescriptor::Orthogonal { entities } => SolverConstraint::Orthogonal {
            lines: built.lines(owner, entities)?,
        },
        ConstraintDescriptor::Coincident { entities } => SolverConstraint::Coincident {
            points: built.points(owner, entities)?,
        },
        ConstraintDescriptor::PointOn { entities: [point, on] } => SolverConstraint::PointOn {
            point: built.point(owner, point)?,
            on: built.resolve(owner, on)?,
        },
        ConstraintDescriptor::Equal { entities } => SolverConstraint::Equal {
            lines: built.lines(owner, entities)?,
        },
        ConstraintDescriptor::Angle { entities, value } => SolverConstraint::Angle {
            lines: built.lines(owner, entities)?,
            value: *value,
        },
        ConstraintDescriptor::CenterTriangle { entities: [a, b, c, center] } => {
            SolverConstraint::CenterTriangle {
                corners: [
                    built.point(owner, a)?,
                    built.point(owner, b)?,
                    built.point(owner, c)?,
                ],
                center: built.point(owner, center)?,
            }
        }
        ConstraintDescriptor::MidPoint { entities: [a, b, mid] } => SolverConstraint::MidPoint {
            ends: [built.point(owner, a)?, built.point(owner, b)?],
            midpoint: built.point(owner, mid)?,
        },
    };

    Ok(constraint)
}

/// Build every constraint in map order.
pub fn build_constraints(
    built: &BuiltSketch,
    constraints: &BTreeMap<String, ConstraintDescriptor>,
) -> Result<Vec<SolverConstraint>, SketchError> {
    constraints
        .iter()
        .map(|(name, descriptor)| build_constraint(built, name, descriptor))
        .collect()
}
