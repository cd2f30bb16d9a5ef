use serde::{Deserialize, Serialize};
use std::fmt;

pub mod intersection;
pub use intersection::*;

pub const EPSILON: f64 = 1e-6;

pub trait ApproxEq {
    fn approx_eq(&self, other: &Self) -> bool;
}

impl ApproxEq for f64 {
    fn approx_eq(&self, other: &Self) -> bool {
        (self - other).abs() < EPSILON
    }
}

impl ApproxEq for Coord {
    fn approx_eq(&self, other: &Self) -> bool {
        self.x.approx_eq(&other.x) && self.y.approx_eq(&other.y)
    }
}

/// Position of a sketch point as written in a sketch description.
///
/// Accepts `[x, y]` or `[x, y, z]`; a missing z is 0. Serializes back to
/// the short form whenever z is 0 so 2-D sketches stay 2-D on disk.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: 0.0 }
    }

    pub fn with_z(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Drops z; the harness only compares planar coordinates.
    pub fn planar(&self) -> Coord {
        Coord { x: self.x, y: self.y }
    }
}

impl TryFrom<Vec<f64>> for Position {
    type Error = String;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        match values.as_slice() {
            [x, y] => Ok(Self::new(*x, *y)),
            [x, y, z] => Ok(Self::with_z(*x, *y, *z)),
            other => Err(format!("expected 2 or 3 coordinates, got {}", other.len())),
        }
    }
}

impl From<Position> for Vec<f64> {
    fn from(p: Position) -> Self {
        if p.z == 0.0 {
            vec![p.x, p.y]
        } else {
            vec![p.x, p.y, p.z]
        }
    }
}

/// Evaluated planar coordinate, persisted as `{ "x": .., "y": .. }`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coord {
    pub x: f64,
    pub y: f64,
}

impl Coord {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The point at infinity reported for parallel lines.
    pub fn infinity() -> Self {
        Self { x: f64::INFINITY, y: f64::INFINITY }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// Vector from `origin` to `self`.
    pub fn sub(self, origin: Coord) -> [f64; 2] {
        [self.x - origin.x, self.y - origin.y]
    }
}

impl From<[f64; 2]> for Coord {
    fn from(a: [f64; 2]) -> Self {
        Self { x: a[0], y: a[1] }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Direction of a vector measured with `atan2(x, y)`, in degrees.
///
/// Argument order is (x, y), not (y, x); stored angles depend on it.
#[inline]
pub fn angle_to_x(v: [f64; 2]) -> f64 {
    v[0].atan2(v[1]).to_degrees()
}

/// Unsigned spread between two directions: `max(a1, a2) - min(a1, a2)`.
#[inline]
pub fn angle_between(v1: [f64; 2], v2: [f64; 2]) -> f64 {
    let a1 = angle_to_x(v1);
    let a2 = angle_to_x(v2);
    a1.max(a2) - a1.min(a2)
}
