use super::{BoundsStrategy, PlanError};
use crate::math::{Real, Vector};
use crate::shape::{GridDims, GridGeometry, Mesh};

/// A grid fitted to the bounding box of the mesh.
///
/// The cell size is the `y` extent of the mesh divided by the resolution (the largest extent
/// when the mesh is flat along `y`). The grid extends `padding` cells past the mesh on every
/// side.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MeshFittedBox {
    /// The number of cells of margin around the mesh.
    pub padding: u32,
}

impl Default for MeshFittedBox {
    fn default() -> Self {
        MeshFittedBox { padding: 2 }
    }
}

impl BoundsStrategy for MeshFittedBox {
    fn plan(&self, mesh: &Mesh, resolution: u32) -> Result<GridGeometry, PlanError> {
        if resolution == 0 {
            return Err(PlanError::ZeroResolution);
        }

        let aabb = mesh.local_aabb().ok_or(PlanError::EmptyMesh)?;
        let extents = aabb.extents();

        let reference = if extents.y > 0.0 {
            extents.y
        } else {
            extents.max()
        };

        if reference <= 0.0 {
            return Err(PlanError::DegenerateMesh);
        }

        let dx = reference / resolution as Real;
        let padding = self.padding as Real;
        let origin = aabb.mins - Vector::repeat(padding * dx);

        let margin = 2 * self.padding as usize + 1;
        let mut cells = [0; 3];

        for (n, &extent) in cells.iter_mut().zip(extents.iter()) {
            *n = cells_spanned(extent, dx)
                .and_then(|n| n.checked_add(margin))
                .ok_or(PlanError::ExtentTooLarge {
                    extent,
                    cell_size: dx,
                })?;
        }

        let dims = GridDims::new(cells[0], cells[1], cells[2]);

        log::info!(
            "Fitted grid at {:?} with cell size {} and dimensions {}.",
            origin.coords.as_slice(),
            dx,
            dims
        );

        Ok(GridGeometry::new(origin, dx, dims)?)
    }
}

/// `ceil(extent / dx)`, or `None` if it does not fit in a `usize`.
fn cells_spanned(extent: Real, dx: Real) -> Option<usize> {
    let n = (extent / dx).ceil();
    (n.is_finite() && n < usize::MAX as Real).then_some(n as usize)
}
