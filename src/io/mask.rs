//! Binary obstacle masks.
//!
//! A mask is a headerless sequence of `nx * ny * nz` bytes, `1` for a cell inside the mesh
//! and `0` outside. Cells are written with `k` outermost and `i` innermost, and the `j` and
//! `k` axes are reflected: the byte emitted for the loop position `(i, j, k)` is the field
//! value at `(i, ny - 1 - j, nz - 1 - k)`.

use crate::math::Real;
use crate::sdf::ScalarField;
use crate::shape::GridDims;
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

/// Errors raised while decoding a mask.
#[derive(thiserror::Error, Debug)]
pub enum MaskError {
    /// The mask could not be read.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// The mask does not have one byte per cell.
    #[error("expected {expected} bytes for the grid dimensions, found {found}")]
    SizeMismatch {
        /// `nx * ny * nz`.
        expected: usize,
        /// The actual number of bytes.
        found: usize,
    },
    /// A byte is neither `0` nor `1`.
    #[error("invalid mask value {value} at offset {offset}")]
    InvalidByte {
        /// The position of the faulty byte in the stream.
        offset: usize,
        /// The faulty byte.
        value: u8,
    },
}

/// Maps the loop position `(i, j, k)` of the output stream to the field index it samples.
///
/// The mapping is its own inverse.
#[inline]
pub fn remap_to_field(i: usize, j: usize, k: usize, dims: &GridDims) -> (usize, usize, usize) {
    (i, dims.ny - 1 - j, dims.nz - 1 - k)
}

/// Is a node with the signed distance `value` inside the mesh?
///
/// Only strictly negative values count as inside.
#[inline]
pub fn is_obstacle(value: Real) -> bool {
    value < 0.0
}

fn mask_bytes(field: &ScalarField) -> impl Iterator<Item = u8> + '_ {
    let dims = field.dims();

    (0..dims.nz).flat_map(move |k| {
        (0..dims.ny).flat_map(move |j| {
            (0..dims.nx).map(move |i| {
                let (fi, fj, fk) = remap_to_field(i, j, k, &dims);
                is_obstacle(field.get(fi, fj, fk)) as u8
            })
        })
    })
}

/// Encodes `field` into an in-memory mask.
pub fn encode_mask(field: &ScalarField) -> Vec<u8> {
    mask_bytes(field).collect()
}

/// Writes the mask of `field` to `writer`, returning the number of bytes written.
///
/// The writer is flushed before returning.
pub fn write_mask<W: Write>(field: &ScalarField, writer: W) -> io::Result<u64> {
    let mut writer = BufWriter::new(writer);
    let mut written = 0;

    for byte in mask_bytes(field) {
        writer.write_all(&[byte])?;
        written += 1;
    }

    writer.flush()?;
    Ok(written)
}

/// Writes the mask of `field` to a new file at `path`, replacing any existing file.
pub fn save_mask(field: &ScalarField, path: impl AsRef<Path>) -> io::Result<u64> {
    let file = File::create(path)?;
    write_mask(field, file)
}

/// A decoded mask, addressed in field space.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaskGrid {
    dims: GridDims,
    bytes: Vec<u8>,
}

impl MaskGrid {
    /// Decodes a mask stream written for a grid of dimensions `dims`.
    pub fn from_bytes(bytes: Vec<u8>, dims: GridDims) -> Result<Self, MaskError> {
        let expected = dims.num_cells();

        if bytes.len() != expected {
            return Err(MaskError::SizeMismatch {
                expected,
                found: bytes.len(),
            });
        }

        if let Some((offset, value)) = bytes.iter().enumerate().find(|(_, b)| **b > 1) {
            return Err(MaskError::InvalidByte {
                offset,
                value: *value,
            });
        }

        Ok(MaskGrid { dims, bytes })
    }

    /// The dimensions of this mask.
    #[inline]
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// The raw stream, in output order.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The number of cells flagged as inside.
    pub fn num_obstacles(&self) -> usize {
        self.bytes.iter().filter(|b| **b == 1).count()
    }

    /// Is the field node `(i, j, k)` inside the mesh?
    ///
    /// Returns `false` for out-of-bounds indices.
    pub fn is_obstacle(&self, i: usize, j: usize, k: usize) -> bool {
        if !self.dims.contains(i, j, k) {
            return false;
        }

        let (si, sj, sk) = remap_to_field(i, j, k, &self.dims);
        self.bytes[self.dims.linear_index(si, sj, sk)] == 1
    }
}

/// Reads and decodes the mask file at `path`.
pub fn read_mask(path: impl AsRef<Path>, dims: GridDims) -> Result<MaskGrid, MaskError> {
    let mut bytes = Vec::new();
    let _ = File::open(path)?.read_to_end(&mut bytes)?;
    MaskGrid::from_bytes(bytes, dims)
}
