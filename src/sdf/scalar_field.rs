use crate::math::Real;
use crate::shape::GridDims;
use core::ops::{Index, IndexMut};

/// A dense 3D array of scalar values, one per grid node.
///
/// Values are stored with `i` varying fastest, then `j`, then `k`.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarField {
    dims: GridDims,
    data: Vec<Real>,
}

impl ScalarField {
    /// Creates a field with every value set to `value`.
    pub fn new(dims: GridDims, value: Real) -> Self {
        ScalarField {
            dims,
            data: vec![value; dims.num_cells()],
        }
    }

    /// Creates a field with every value set to `value`, or `None` if it cannot be allocated.
    pub fn try_new(dims: GridDims, value: Real) -> Option<Self> {
        let data = try_filled(dims.checked_num_cells()?, value)?;
        Some(ScalarField { dims, data })
    }

    /// Creates a field by evaluating `f` at every `(i, j, k)`.
    pub fn from_fn(dims: GridDims, mut f: impl FnMut(usize, usize, usize) -> Real) -> Self {
        let mut data = Vec::with_capacity(dims.num_cells());

        for k in 0..dims.nz {
            for j in 0..dims.ny {
                for i in 0..dims.nx {
                    data.push(f(i, j, k));
                }
            }
        }

        ScalarField { dims, data }
    }

    /// Wraps an existing buffer, or returns `None` if its length is not `nx * ny * nz`.
    pub fn from_vec(dims: GridDims, data: Vec<Real>) -> Option<Self> {
        (dims.checked_num_cells() == Some(data.len())).then_some(ScalarField { dims, data })
    }

    /// The dimensions of this field.
    #[inline]
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// The value at `(i, j, k)`.
    ///
    /// # Panics
    /// If `(i, j, k)` is out of bounds.
    #[inline]
    pub fn get(&self, i: usize, j: usize, k: usize) -> Real {
        self[(i, j, k)]
    }

    /// The values of this field, `i` varying fastest.
    #[inline]
    pub fn as_slice(&self) -> &[Real] {
        &self.data
    }

    /// The mutable values of this field, `i` varying fastest.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Real] {
        &mut self.data
    }
}

/// A vector of `len` copies of `value`, or `None` if it cannot be allocated.
pub(crate) fn try_filled<T: Clone>(len: usize, value: T) -> Option<Vec<T>> {
    let mut data = Vec::new();
    data.try_reserve_exact(len).ok()?;
    data.resize(len, value);
    Some(data)
}

impl Index<(usize, usize, usize)> for ScalarField {
    type Output = Real;

    #[inline]
    fn index(&self, (i, j, k): (usize, usize, usize)) -> &Real {
        debug_assert!(self.dims.contains(i, j, k));
        &self.data[self.dims.linear_index(i, j, k)]
    }
}

impl IndexMut<(usize, usize, usize)> for ScalarField {
    #[inline]
    fn index_mut(&mut self, (i, j, k): (usize, usize, usize)) -> &mut Real {
        debug_assert!(self.dims.contains(i, j, k));
        &mut self.data[self.dims.linear_index(i, j, k)]
    }
}
