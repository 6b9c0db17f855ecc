use crate::math::{Point, Real};

/// Description of the projection of a point on a shape.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointProjection {
    /// The projection result.
    pub point: Point<Real>,
    /// The feature of the shape the point was projected on.
    pub location: TrianglePointLocation,
}

/// Description of the location of a point projected on a triangle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TrianglePointLocation {
    /// The point lies on a vertex (0 = A, 1 = B, 2 = C).
    OnVertex(u32),
    /// The point lies on an edge.
    ///
    /// The 0-st edge is the segment AB.
    /// The 1-st edge is the segment BC.
    /// The 2-nd edge is the segment AC.
    OnEdge(u32),
    /// The point lies on the triangle interior.
    OnFace,
}

/// Trait of objects that can be tested for point projection.
pub trait PointQuery {
    /// Projects a point on the boundary of `self`.
    fn project_local_point(&self, pt: &Point<Real>) -> PointProjection;

    /// Computes the minimal distance between a point and `self`.
    #[inline]
    fn distance_to_local_point(&self, pt: &Point<Real>) -> Real {
        na::distance(pt, &self.project_local_point(pt).point)
    }
}
