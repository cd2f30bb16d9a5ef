use crate::geometry::{Coord, Position};
use crate::harness::PointNorms;
use crate::sketch::{
    CircleDescriptor, ConstraintDescriptor, LineDescriptor, MoveDescriptor, SketchDescriptor,
};
use crate::solver::{PerVariant, SolveVariant};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A solved point, with its drift from the original when it was not moved.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SolvedPoint {
    pub x: f64,
    pub y: f64,
    #[serde(flatten)]
    pub norms: Option<PointNorms>,
}

impl SolvedPoint {
    pub fn coord(&self) -> Coord {
        Coord::new(self.x, self.y)
    }
}

/// One point across the original sketch and both solves.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointRecord {
    #[serde(rename = "ORIGINAL")]
    pub original: Coord,
    #[serde(rename = "L1")]
    pub l1: SolvedPoint,
    #[serde(rename = "L2")]
    pub l2: SolvedPoint,
}

impl PointRecord {
    pub fn solved(&self, variant: SolveVariant) -> &SolvedPoint {
        match variant {
            SolveVariant::L1 => &self.l1,
            SolveVariant::L2 => &self.l2,
        }
    }
}

/// One line endpoint across the original sketch and both solves.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EndpointRecord {
    #[serde(rename = "ORIGINAL")]
    pub original: Coord,
    #[serde(rename = "L1")]
    pub l1: Coord,
    #[serde(rename = "L2")]
    pub l2: Coord,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LineEndpoints {
    pub source: EndpointRecord,
    pub target: EndpointRecord,
}

/// A line's descriptor plus its evaluated endpoints.
///
/// Older records stored lines as a bare `["p1", "p2"]` pair; those read back
/// with `points` unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "LineRecordRepr")]
pub struct LineRecord {
    pub source: String,
    pub target: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<LineEndpoints>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LineRecordRepr {
    Full {
        source: String,
        target: String,
        #[serde(default)]
        points: Option<LineEndpoints>,
    },
    Pair(String, String),
}

impl From<LineRecordRepr> for LineRecord {
    fn from(repr: LineRecordRepr) -> Self {
        match repr {
            LineRecordRepr::Full { source, target, points } => Self { source, target, points },
            LineRecordRepr::Pair(source, target) => Self { source, target, points: None },
        }
    }
}

/// Achieved angle of an ANGLE or ORTHOGONAL constraint, in degrees.
///
/// Values that could not be measured as a finite number are `null`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AngleCheck {
    /// The requested angle; only ANGLE constraints carry one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested: Option<f64>,
    #[serde(default)]
    pub original: Option<f64>,
    #[serde(default)]
    pub measured: PerVariant<Option<f64>>,
}

/// Totals, timing and step counts of a dual run (`Results` on disk).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RunResults {
    pub l1_norm: PerVariant<f64>,
    pub l2_norm: PerVariant<f64>,
    pub non_zero_results: PerVariant<u32>,
    pub variables: usize,
    /// Wall-clock seconds per variant.
    #[serde(default)]
    pub time: PerVariant<f64>,
    #[serde(default)]
    pub steps: PerVariant<usize>,
}

/// Everything persisted for one dual-solve run.
///
/// Achieved angles of ANGLE and ORTHOGONAL constraints are kept under the
/// top-level `angles` key, keyed by constraint name, not on the constraints
/// themselves. `to_sketch` ignores them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResultRecord {
    #[serde(default)]
    pub points: BTreeMap<String, PointRecord>,
    #[serde(default)]
    pub lines: BTreeMap<String, LineRecord>,
    #[serde(default)]
    pub circles: BTreeMap<String, CircleDescriptor>,
    #[serde(default)]
    pub constraints: BTreeMap<String, ConstraintDescriptor>,
    #[serde(default)]
    pub moves: BTreeMap<String, MoveDescriptor>,
    #[serde(default)]
    pub angles: BTreeMap<String, AngleCheck>,
    #[serde(rename = "Results")]
    pub results: RunResults,
}

impl ResultRecord {
    /// Rebuild the sketch this record was produced from, using the original
    /// coordinates of every point.
    pub fn to_sketch(&self) -> SketchDescriptor {
        SketchDescriptor {
            points: self
                .points
                .iter()
                .map(|(name, p)| (name.clone(), Position::new(p.original.x, p.original.y)))
                .collect(),
            lines: self
                .lines
                .iter()
                .map(|(name, l)| (name.clone(), LineDescriptor::new(&l.source, &l.target)))
                .collect(),
            circles: self.circles.clone(),
            constraints: self.constraints.clone(),
            moves: self.moves.clone(),
        }
    }
}
