//! Signed distance fields sampled on a regular grid.

pub use self::scalar_field::ScalarField;
pub use self::swept_level_set::SweptLevelSet;

use crate::shape::{GridGeometry, InvalidFaceIndex, Mesh};

mod scalar_field;
mod swept_level_set;

/// Errors raised while computing a distance field.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum SdfError {
    /// The mesh has no face.
    #[error("cannot compute the distance to a mesh without faces")]
    EmptyMesh,
    /// A face references a vertex that does not exist.
    #[error(transparent)]
    InvalidFaceIndex(#[from] InvalidFaceIndex),
    /// The buffers for the grid could not be allocated.
    #[error("not enough memory to sample {num_cells} grid nodes")]
    OutOfMemory {
        /// The number of grid nodes.
        num_cells: usize,
    },
}

/// A method for computing the signed distance from every grid node to a mesh surface.
///
/// The value at `(i, j, k)` approximates the distance from `grid.node_position(i, j, k)` to
/// the surface, negative inside and positive outside. Either the whole field is returned or
/// an error: partial fields are never exposed.
pub trait DistanceFieldProvider {
    /// Computes the field, with the same dimensions as `grid`.
    fn compute_field(&self, mesh: &Mesh, grid: &GridGeometry) -> Result<ScalarField, SdfError>;
}

impl<T: DistanceFieldProvider + ?Sized> DistanceFieldProvider for Box<T> {
    fn compute_field(&self, mesh: &Mesh, grid: &GridGeometry) -> Result<ScalarField, SdfError> {
        (**self).compute_field(mesh, grid)
    }
}
