//! Intersection of infinite 2D lines for angle reconstruction.

use nalgebra::Vector3;

/// Lift a planar point to homogeneous coordinates (w = 1).
#[inline]
fn homogeneous(p: [f64; 2]) -> Vector3<f64> {
    Vector3::new(p[0], p[1], 1.0)
}

/// Intersection of the infinite line through `a1`, `a2` with the infinite
/// line through `b1`, `b2`.
///
/// The cross product of two homogeneous points is the line through them; the
/// cross product of two lines is their common point. A zero `w` component
/// means the lines are parallel and the result is `[+inf, +inf]`.
pub fn homogeneous_intersection(
    a1: [f64; 2], a2: [f64; 2],
    b1: [f64; 2], b2: [f64; 2],
) -> [f64; 2] {
    let line_a = homogeneous(a1).cross(&homogeneous(a2));
    let line_b = homogeneous(b1).cross(&homogeneous(b2));
    let p = line_a.cross(&line_b);

    if p.z == 0.0 {
        return [f64::INFINITY, f64::INFINITY];
    }

    [p.x / p.z, p.y / p.z]
}

/// Whether the two segments share an endpoint by exact value.
///
/// Returns the shared endpoint. Points that are the same solver entity
/// evaluate to bit-identical coordinates, so no tolerance is applied.
pub fn shared_endpoint(a: [[f64; 2]; 2], b: [[f64; 2]; 2]) -> Option<[f64; 2]> {
    // A later match wins, the same way a line's target overrides its source.
    let mut shared = None;
    for p in a {
        if b.contains(&p) {
            shared = Some(p);
        }
    }
    shared
}
