use super::{BoundsStrategy, PlanError};
use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use crate::shape::{GridDims, GridGeometry, Mesh};

/// A fixed box spanning `[-10, 10]` along `x`, 10 units along `y` and `[-5, 5]` along `z`.
///
/// With a resolution `R`, the cell size is `10 / R` and the `y` range is shifted down by two
/// cells, so the box spans `[-2 dx, 10 - 2 dx]` along `y`. The box does not depend on the
/// mesh: a mesh extending past it is clipped (a warning is logged).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CanonicalBox;

impl CanonicalBox {
    /// The box and cell size for the given resolution, before discretization.
    pub fn region(resolution: u32) -> Result<(Aabb, Real), PlanError> {
        if resolution == 0 {
            return Err(PlanError::ZeroResolution);
        }

        let dx = 10.0 / resolution as Real;
        let mins = Point::new(-10.0, -2.0 * dx, -5.0);
        let maxs = Point::new(10.0, 10.0 - 2.0 * dx, 5.0);

        Ok((Aabb::new(mins, maxs), dx))
    }
}

impl BoundsStrategy for CanonicalBox {
    fn plan(&self, mesh: &Mesh, resolution: u32) -> Result<GridGeometry, PlanError> {
        let (region, dx) = Self::region(resolution)?;
        // Truncated, in this exact order of operations.
        let sizes = (region.maxs - region.mins) / dx;
        let dims = GridDims::new(sizes.x as usize, sizes.y as usize, sizes.z as usize);

        if let Some(aabb) = escaping_aabb(&region, mesh) {
            log::warn!(
                "The mesh bounding box [{:?}, {:?}] is not strictly inside the grid box [{:?}, {:?}]; it will be clipped.",
                aabb.mins.coords.as_slice(),
                aabb.maxs.coords.as_slice(),
                region.mins.coords.as_slice(),
                region.maxs.coords.as_slice(),
            );
        }

        log::info!(
            "Bound box size: ({:?}) to ({:?}) with dimensions {}.",
            region.mins.coords.as_slice(),
            region.maxs.coords.as_slice(),
            dims
        );

        Ok(GridGeometry::new(region.mins, dx, dims)?)
    }
}

/// The bounding box of `mesh` if it is not strictly inside `region`.
fn escaping_aabb(region: &Aabb, mesh: &Mesh) -> Option<Aabb> {
    mesh.local_aabb().filter(|aabb| !region.strictly_contains(aabb))
}
