//! Angle measurement between two solved lines.
//!
//! Pure geometry on evaluated coordinates: no pass/fail verdict is produced,
//! only the angle the solver actually achieved.

use crate::geometry::{angle_between, homogeneous_intersection, shared_endpoint, Coord};
use serde::{Deserialize, Serialize};

/// How the vertex of a measured angle was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VertexSource {
    /// Both lines end in the same point.
    SharedEndpoint,
    /// The lines do not touch; their extensions cross here.
    Intersection,
    /// The lines are parallel; the vertex is at infinity.
    Parallel,
}

/// Angle between two lines, in degrees, with the points it was measured from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleMeasurement {
    pub vertex: Coord,
    /// One outer point per line.
    pub outer: [Coord; 2],
    pub source: VertexSource,
    pub angle: f64,
}

/// The endpoint of `line` that is not `vertex`.
fn other_endpoint(line: [Coord; 2], vertex: Coord) -> Coord {
    if line[0] == vertex {
        line[1]
    } else {
        line[0]
    }
}

/// Measure the angle between lines `a` and `b`, each given as `[source, target]`.
///
/// A shared endpoint is the vertex. Otherwise the vertex is the intersection
/// of the infinite lines: if it coincides with an endpoint of one line, that
/// line's other endpoint is its outer point and the second line contributes its
/// target. Parallel lines are measured along their source→target directions.
pub fn measure_line_angle(a: [Coord; 2], b: [Coord; 2]) -> AngleMeasurement {
    let a_pts = [a[0].to_array(), a[1].to_array()];
    let b_pts = [b[0].to_array(), b[1].to_array()];

    if let Some(shared) = shared_endpoint(a_pts, b_pts) {
        let vertex = Coord::from(shared);
        let outer = [other_endpoint(a, vertex), other_endpoint(b, vertex)];
        return AngleMeasurement {
            vertex,
            outer,
            source: VertexSource::SharedEndpoint,
            angle: angle_between(outer[0].sub(vertex), outer[1].sub(vertex)),
        };
    }

    let vertex = Coord::from(homogeneous_intersection(a_pts[0], a_pts[1], b_pts[0], b_pts[1]));

    if !vertex.is_finite() {
        return AngleMeasurement {
            vertex,
            outer: [a[1], b[1]],
            source: VertexSource::Parallel,
            angle: angle_between(a[1].sub(a[0]), b[1].sub(b[0])),
        };
    }

    let outer = if a.contains(&vertex) {
        [other_endpoint(a, vertex), b[1]]
    } else if b.contains(&vertex) {
        [a[1], other_endpoint(b, vertex)]
    } else {
        [a[0], b[0]]
    };

    AngleMeasurement {
        vertex,
        outer,
        source: VertexSource::Intersection,
        angle: angle_between(outer[0].sub(vertex), outer[1].sub(vertex)),
    }
}
