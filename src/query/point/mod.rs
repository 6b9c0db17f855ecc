//! Point projection.

#[doc(inline)]
pub use self::point_query::{PointProjection, PointQuery, TrianglePointLocation};

mod point_query;
mod point_triangle;
