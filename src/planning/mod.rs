//! Computation of the grid a mesh is sampled on.

pub use self::canonical_box::CanonicalBox;
pub use self::mesh_fitted_box::MeshFittedBox;

use crate::math::Real;
use crate::shape::{GridError, GridGeometry, Mesh};

mod canonical_box;
mod mesh_fitted_box;

/// Errors raised while planning a grid.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum PlanError {
    /// The resolution must be at least one cell.
    #[error("the resolution must be at least 1")]
    ZeroResolution,
    /// The mesh has no vertex to fit a grid around.
    #[error("cannot fit a grid around a mesh without vertices")]
    EmptyMesh,
    /// All the vertices of the mesh are at the same position.
    #[error("cannot fit a grid around a mesh collapsed to a single point")]
    DegenerateMesh,
    /// The mesh extent spans more cells than can be indexed.
    #[error("an extent of {extent} spans too many cells of size {cell_size}")]
    ExtentTooLarge {
        /// The extent of the mesh along the offending axis.
        extent: Real,
        /// The cell size of the grid.
        cell_size: Real,
    },
    /// The computed grid is invalid.
    #[error(transparent)]
    Grid(#[from] GridError),
}

/// A method for deriving the grid geometry from a mesh and a resolution.
///
/// The resolution is the number of cells along the `y` axis.
pub trait BoundsStrategy {
    /// Computes the origin, cell size and dimensions of the grid.
    fn plan(&self, mesh: &Mesh, resolution: u32) -> Result<GridGeometry, PlanError>;
}

impl<T: BoundsStrategy + ?Sized> BoundsStrategy for Box<T> {
    fn plan(&self, mesh: &Mesh, resolution: u32) -> Result<GridGeometry, PlanError> {
        (**self).plan(mesh, resolution)
    }
}

/// The built-in bounds strategies.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum BoundsPolicy {
    /// A fixed box of 20 × 10 × 10 units, see [`CanonicalBox`].
    #[default]
    Canonical,
    /// The bounding box of the mesh with a margin, see [`MeshFittedBox`].
    Fit,
}

impl BoundsPolicy {
    /// Instantiates the strategy, with `padding` cells of margin for [`BoundsPolicy::Fit`].
    pub fn strategy(self, padding: u32) -> Box<dyn BoundsStrategy> {
        match self {
            BoundsPolicy::Canonical => Box::new(CanonicalBox),
            BoundsPolicy::Fit => Box::new(MeshFittedBox { padding }),
        }
    }
}
