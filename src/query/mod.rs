//! Non-persistent geometric queries.
//!
//! Point projection is achieved by importing the [`PointQuery`] trait.

pub use self::point::{PointProjection, PointQuery, TrianglePointLocation};

pub mod point;
