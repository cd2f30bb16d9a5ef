use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of a point in a solver session's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PointHandle(pub usize);

/// Index of a line in a solver session's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LineHandle(pub usize);

/// Index of a circle in a solver session's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CircleHandle(pub usize);

/// Any entity a constraint may refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityHandle {
    Point(PointHandle),
    Line(LineHandle),
    Circle(CircleHandle),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Point,
    Line,
    Circle,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Point => write!(f, "point"),
            Self::Line => write!(f, "line"),
            Self::Circle => write!(f, "circle"),
        }
    }
}

/// Solver-ready constraint. Each variant carries exactly the entities and
/// value its equations need.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SolverConstraint {
    /// Length of a line, in distance units.
    Length { line: LineHandle, value: f64 },
    Orthogonal { lines: [LineHandle; 2] },
    Coincident { points: [PointHandle; 2] },
    /// `point` lies on `on` (a point or a line).
    PointOn { point: PointHandle, on: EntityHandle },
    /// Both lines have the same length.
    Equal { lines: [LineHandle; 2] },
    /// Signed angle between two lines, in radians.
    Angle { lines: [LineHandle; 2], value: f64 },
    /// `center` is the centroid of the triangle spanned by `corners`.
    CenterTriangle { corners: [PointHandle; 3], center: PointHandle },
    /// `midpoint` lies halfway between `ends`.
    MidPoint { ends: [PointHandle; 2], midpoint: PointHandle },
}
