use crate::geometry::Position;
use crate::solver::EntityKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors raised while turning a sketch description into solver entities.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SketchError {
    /// `owner` refers to an entity name that does not exist.
    #[error("{owner} references unknown entity '{entity}'")]
    UnresolvedEntityReference { owner: String, entity: String },

    /// The referenced entity exists but is the wrong kind for its slot.
    #[error("{owner} expects a {expected} for '{entity}'")]
    EntityKindMismatch { owner: String, entity: String, expected: EntityKind },
}

/// A line between two named points, written as `["p1", "p2"]`.
/// Direction matters for angle measurement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct LineDescriptor {
    pub source: String,
    pub target: String,
}

impl LineDescriptor {
    pub fn new(source: &str, target: &str) -> Self {
        Self { source: source.to_string(), target: target.to_string() }
    }
}

impl From<(String, String)> for LineDescriptor {
    fn from((source, target): (String, String)) -> Self {
        Self { source, target }
    }
}

impl From<LineDescriptor> for (String, String) {
    fn from(l: LineDescriptor) -> Self {
        (l.source, l.target)
    }
}

/// A circle around a named center point, written as `["p1", 2.0]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "(String, f64)", into = "(String, f64)")]
pub struct CircleDescriptor {
    pub center: String,
    pub radius: f64,
}

impl CircleDescriptor {
    pub fn new(center: &str, radius: f64) -> Self {
        Self { center: center.to_string(), radius }
    }
}

impl From<(String, f64)> for CircleDescriptor {
    fn from((center, radius): (String, f64)) -> Self {
        Self { center, radius }
    }
}

impl From<CircleDescriptor> for (String, f64) {
    fn from(c: CircleDescriptor) -> Self {
        (c.center, c.radius)
    }
}

/// Drag applied after the primary constraints have converged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveDescriptor {
    /// Name of the dragged point.
    pub point: String,
    /// Destination of the drag.
    pub values: Position,
}

impl MoveDescriptor {
    pub fn new(point: &str, values: Position) -> Self {
        Self { point: point.to_string(), values }
    }
}

/// A named constraint as written in a sketch description.
///
/// The `type` tag selects the variant and the `entities` array length is
/// fixed per variant, so malformed arities are rejected while parsing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ConstraintDescriptor {
    /// `[line]`, value in distance units.
    #[serde(rename = "LENGTH")]
    Length { entities: [String; 1], value: f64 },
    /// `[line, line]`
    #[serde(rename = "ORTHOGONAL")]
    Orthogonal { entities: [String; 2] },
    /// `[point, point]`
    #[serde(rename = "COINCIDENT")]
    Coincident { entities: [String; 2] },
    /// `[point, point or line]`
    #[serde(rename = "POINTON")]
    PointOn { entities: [String; 2] },
    /// `[line, line]`
    #[serde(rename = "EQUAL")]
    Equal { entities: [String; 2] },
    /// `[line, line]`, signed value in radians.
    #[serde(rename = "ANGLE")]
    Angle { entities: [String; 2], value: f64 },
    /// `[corner, corner, corner, center]`
    #[serde(rename = "CENTER_TRIANGLE")]
    CenterTriangle { entities: [String; 4] },
    /// `[end, end, midpoint]`
    #[serde(rename = "MIDPOINT")]
    MidPoint { entities: [String; 3] },
}

impl ConstraintDescriptor {
    pub fn entities(&self) -> &[String] {
        match self {
            Self::Length { entities, .. } => entities.as_slice(),
            Self::Orthogonal { entities }
            | Self::Coincident { entities }
            | Self::PointOn { entities }
            | Self::Equal { entities }
            | Self::Angle { entities, .. } => entities.as_slice(),
            Self::CenterTriangle { entities } => entities.as_slice(),
            Self::MidPoint { entities } => entities.as_slice(),
        }
    }

    /// Requested value, for the kinds that carry one.
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Length { value, .. } | Self::Angle { value, .. } => Some(*value),
            _ => None,
        }
    }

    /// Whether the constraint fixes the angle between two lines.
    pub fn is_angular(&self) -> bool {
        matches!(self, Self::Angle { .. } | Self::Orthogonal { .. })
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Length { .. } => "LENGTH",
            Self::Orthogonal { .. } => "ORTHOGONAL",
            Self::Coincident { .. } => "COINCIDENT",
            Self::PointOn { .. } => "POINTON",
            Self::Equal { .. } => "EQUAL",
            Self::Angle { .. } => "ANGLE",
            Self::CenterTriangle { .. } => "CENTER_TRIANGLE",
            Self::MidPoint { .. } => "MIDPOINT",
        }
    }
}

/// Complete description of one sketch problem.
///
/// Ordered maps keep constraint order, and therefore solver input, identical
/// from run to run.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SketchDescriptor {
    #[serde(default)]
    pub points: BTreeMap<String, Position>,
    #[serde(default)]
    pub lines: BTreeMap<String, LineDescriptor>,
    #[serde(default)]
    pub circles: BTreeMap<String, CircleDescriptor>,
    #[serde(default)]
    pub constraints: BTreeMap<String, ConstraintDescriptor>,
    #[serde(default)]
    pub moves: BTreeMap<String, MoveDescriptor>,
}

impl SketchDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_point(mut self, name: &str, position: Position) -> Self {
        self.points.insert(name.to_string(), position);
        self
    }

    pub fn with_line(mut self, name: &str, source: &str, target: &str) -> Self {
        self.lines.insert(name.to_string(), LineDescriptor::new(source, target));
        self
    }

    pub fn with_circle(mut self, name: &str, center: &str, radius: f64) -> Self {
        self.circles.insert(name.to_string(), CircleDescriptor::new(center, radius));
        self
    }

    pub fn with_constraint(mut self, name: &str, constraint: ConstraintDescriptor) -> Self {
        self.constraints.insert(name.to_string(), constraint);
        self
    }

    pub fn with_move(mut self, name: &str, point: &str, target: Position) -> Self {
        self.moves.insert(name.to_string(), MoveDescriptor::new(point, target));
        self
    }

    /// Names of the points targeted by a move.
    pub fn moved_points(&self) -> impl Iterator<Item = &str> {
        self.moves.values().map(|m| m.point.as_str())
    }

    /// Check every name reference before any solver work starts.
    pub fn validate(&self) -> Result<(), SketchError> {
        let point = |owner: &str, name: &str| -> Result<(), SketchError> {
            if self.points.contains_key(name) {
                Ok(())
            } else {
                Err(SketchError::UnresolvedEntityReference {
                    owner: owner.to_string(),
                    entity: name.to_string(),
                })
            }
        };

        for (id, line) in &self.lines {
            point(&format!("line '{}'", id), &line.source)?;
            point(&format!("line '{}'", id), &line.target)?;
        }
        for (id, circle) in &self.circles {
            point(&format!("circle '{}'", id), &circle.center)?;
        }
        for (id, m) in &self.moves {
            point(&format!("move '{}'", id), &m.point)?;
        }
        for (id, constraint) in &self.constraints {
            for entity in constraint.entities() {
                if !self.lines.contains_key(entity) {
                    point(&format!("constraint '{}'", id), entity)?;
                }
            }
        }
        Ok(())
    }
}
