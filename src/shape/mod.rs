//! Shapes consumed and produced by the voxelization pipeline.

pub use self::grid::{GridDims, GridError, GridGeometry};
pub use self::mesh::{Face, InvalidFaceIndex, Mesh};
pub use self::triangle::Triangle;

mod grid;
mod mesh;
mod triangle;
