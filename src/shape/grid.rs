use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use core::fmt;
use core::mem::size_of;

/// Indicated an inconsistency while building a [`GridGeometry`].
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum GridError {
    /// The cell size must be finite and strictly positive.
    #[error("invalid cell size {0}: it must be finite and strictly positive")]
    InvalidCellSize(Real),
    /// The origin must have finite coordinates.
    #[error("the grid origin must have finite coordinates")]
    InvalidOrigin,
    /// Every dimension must be at least one.
    #[error("the grid dimensions {0} must all be at least 1")]
    EmptyDimensions(GridDims),
    /// The per-node buffers of the grid would not fit in memory.
    #[error("the grid dimensions {0} have too many cells")]
    TooManyCells(GridDims),
}

// The largest per-node buffer allocated over a grid: the closest-triangle index of
// the distance sweeps, or the field value itself in double precision.
const MAX_BYTES_PER_NODE: usize = if size_of::<Option<u32>>() > size_of::<Real>() {
    size_of::<Option<u32>>()
} else {
    size_of::<Real>()
};

/// The number of grid nodes along each axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct GridDims {
    /// Number of nodes along `x`.
    pub nx: usize,
    /// Number of nodes along `y`.
    pub ny: usize,
    /// Number of nodes along `z`.
    pub nz: usize,
}

impl fmt::Display for GridDims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.nx, self.ny, self.nz)
    }
}

impl GridDims {
    /// Creates a new set of dimensions.
    #[inline]
    pub const fn new(nx: usize, ny: usize, nz: usize) -> Self {
        GridDims { nx, ny, nz }
    }

    /// The total number of cells, `nx * ny * nz`, or `None` on overflow.
    #[inline]
    pub fn checked_num_cells(&self) -> Option<usize> {
        self.nx.checked_mul(self.ny)?.checked_mul(self.nz)
    }

    /// The total number of cells, `nx * ny * nz`.
    #[inline]
    pub fn num_cells(&self) -> usize {
        self.nx * self.ny * self.nz
    }

    /// The linear index of the cell `(i, j, k)`, with `i` varying fastest.
    #[inline]
    pub fn linear_index(&self, i: usize, j: usize, k: usize) -> usize {
        i + self.nx * (j + self.ny * k)
    }

    /// Checks whether `(i, j, k)` addresses a cell of this grid.
    #[inline]
    pub fn contains(&self, i: usize, j: usize, k: usize) -> bool {
        i < self.nx && j < self.ny && k < self.nz
    }
}

/// The placement of a regular grid in space.
///
/// Node `(i, j, k)` lies at `origin + (i, j, k) * cell_size`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GridGeometry {
    origin: Point<Real>,
    cell_size: Real,
    dims: GridDims,
}

impl GridGeometry {
    /// Creates a grid, checking that the cell size is positive and no dimension is zero.
    pub fn new(origin: Point<Real>, cell_size: Real, dims: GridDims) -> Result<Self, GridError> {
        if !cell_size.is_finite() || cell_size <= 0.0 {
            return Err(GridError::InvalidCellSize(cell_size));
        }

        if !origin.coords.iter().all(|e| e.is_finite()) {
            return Err(GridError::InvalidOrigin);
        }

        if dims.nx == 0 || dims.ny == 0 || dims.nz == 0 {
            return Err(GridError::EmptyDimensions(dims));
        }

        let fits_in_memory = dims
            .checked_num_cells()
            .and_then(|n| n.checked_mul(MAX_BYTES_PER_NODE))
            .is_some_and(|bytes| bytes <= isize::MAX as usize);

        if !fits_in_memory {
            return Err(GridError::TooManyCells(dims));
        }

        Ok(GridGeometry {
            origin,
            cell_size,
            dims,
        })
    }

    /// The position of the node `(0, 0, 0)`.
    #[inline]
    pub fn origin(&self) -> Point<Real> {
        self.origin
    }

    /// The distance between two adjacent nodes.
    #[inline]
    pub fn cell_size(&self) -> Real {
        self.cell_size
    }

    /// The number of nodes along each axis.
    #[inline]
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// The world-space position of the node `(i, j, k)`.
    #[inline]
    pub fn node_position(&self, i: usize, j: usize, k: usize) -> Point<Real> {
        self.origin + Vector::new(i as Real, j as Real, k as Real) * self.cell_size
    }

    /// The box spanned by `origin` and `origin + dims * cell_size`.
    pub fn bounds(&self) -> Aabb {
        let extents = Vector::new(
            self.dims.nx as Real,
            self.dims.ny as Real,
            self.dims.nz as Real,
        ) * self.cell_size;
        Aabb::new(self.origin, self.origin + extents)
    }

    /// The continuous grid coordinates of a world-space point.
    #[inline]
    pub fn grid_coordinates(&self, pt: &Point<Real>) -> Vector<Real> {
        (pt - self.origin) / self.cell_size
    }
}
