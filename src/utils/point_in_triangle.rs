//! Robust point-in-triangle test for axis-aligned ray crossings.

use na::Point2;

#[derive(Eq, PartialEq, Debug, Copy, Clone)]
/// The orientation or winding direction of a corner or polygon.
pub enum Orientation {
    /// Counter-clockwise
    Ccw,
    /// Clockwise
    Cw,
    /// Neither (both points coincide)
    None,
}

/// Orientation of the origin-based segment pair `(p1, p2)`, and twice its signed area.
///
/// Exact zeros are resolved by a deterministic tie-breaking rule on the coordinates, so
/// that a ray passing exactly through a shared edge or vertex is attributed to exactly one
/// of the triangles sharing it. `Orientation::None` is only returned when `p1 == p2`.
pub fn orientation(p1: &Point2<f64>, p2: &Point2<f64>) -> (Orientation, f64) {
    let twice_signed_area = p1.y * p2.x - p1.x * p2.y;

    let orient = if twice_signed_area > 0.0 {
        Orientation::Ccw
    } else if twice_signed_area < 0.0 {
        Orientation::Cw
    } else if p2.y > p1.y {
        Orientation::Ccw
    } else if p2.y < p1.y {
        Orientation::Cw
    } else if p1.x > p2.x {
        Orientation::Ccw
    } else if p1.x < p2.x {
        Orientation::Cw
    } else {
        Orientation::None
    };

    (orient, twice_signed_area)
}

/// Returns the barycentric coordinates of `p` if it lies inside the triangle `(v1, v2, v3)`.
///
/// Points on edges and vertices are consistently attributed to only one of the triangles
/// sharing them (see [`orientation`]). Returns `None` if `p` is outside or if the triangle
/// is degenerate.
pub fn point_in_triangle_barycentric(
    p: &Point2<f64>,
    v1: &Point2<f64>,
    v2: &Point2<f64>,
    v3: &Point2<f64>,
) -> Option<[f64; 3]> {
    let p1 = Point2::from(v1 - p);
    let p2 = Point2::from(v2 - p);
    let p3 = Point2::from(v3 - p);

    let (sign_a, a) = orientation(&p2, &p3);
    if sign_a == Orientation::None {
        return None;
    }

    let (sign_b, b) = orientation(&p3, &p1);
    if sign_b != sign_a {
        return None;
    }

    let (sign_c, c) = orientation(&p1, &p2);
    if sign_c != sign_a {
        return None;
    }

    let sum = a + b + c;
    if sum == 0.0 {
        return None;
    }

    Some([a / sum, b / sum, c / sum])
}
