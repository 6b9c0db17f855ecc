/*!
sdfmask3d
=========

**sdfmask3d** turns a Wavefront-style triangle mesh into a binary obstacle mask: every cell
of a regular 3D grid is flagged as inside or outside of the mesh surface, using a signed
distance field computed over that grid.

The pipeline is made of four independent stages:

1. [`io::parse_obj`] reads vertices and triangles from a text mesh description.
2. A [`planning::BoundsStrategy`] derives the grid origin, cell size and dimensions.
3. A [`sdf::DistanceFieldProvider`] computes one signed distance per grid node.
4. [`io::write_mask`] thresholds the field at zero and writes one byte per cell.

[`pipeline::Pipeline`] chains them together, and the `sdfmask` binary exposes the pipeline on
the command line.
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)]

#[cfg(all(feature = "f32", feature = "f64"))]
std::compile_error!("The `f32` and `f64` features are mutually exclusive.");

#[cfg(test)]
#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod io;
pub mod pipeline;
pub mod planning;
pub mod query;
pub mod sdf;
pub mod shape;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Point3, Vector3};

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;
}
