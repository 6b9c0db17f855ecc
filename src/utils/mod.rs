//! Various unsorted geometrical and logical operators.

pub use self::point_in_triangle::{orientation, point_in_triangle_barycentric, Orientation};

mod point_in_triangle;
