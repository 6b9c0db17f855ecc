use super::scalar_field::try_filled;
use super::{DistanceFieldProvider, ScalarField, SdfError};
use crate::math::{Point, Real};
use crate::query::PointQuery;
use crate::shape::{GridGeometry, Mesh, Triangle};
use crate::utils;
use core::ops::RangeInclusive;
use na::Point2;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Diagonal directions of the fast-sweeping passes.
const SWEEP_DIRECTIONS: [[isize; 3]; 8] = [
    [1, 1, 1],
    [-1, -1, -1],
    [1, 1, -1],
    [-1, -1, 1],
    [1, -1, 1],
    [-1, 1, -1],
    [1, -1, -1],
    [-1, 1, 1],
];
const NUM_SWEEP_PASSES: usize = 2;

/// A signed distance field computed by exact evaluation near the surface, fast sweeping
/// elsewhere, and ray parity for the sign.
///
/// 1. Every node within `exact_band` cells of a triangle's bounding box gets its exact
///    distance to that triangle, and remembers it as its closest triangle.
/// 2. Sweeps along the eight grid diagonals propagate the closest triangles to the remaining
///    nodes, re-evaluating the exact distance to each candidate.
/// 3. Each grid line parallel to `x` counts how many triangles it crosses before every node;
///    an odd count makes the node's distance negative.
///
/// The sign is only meaningful for closed (watertight) meshes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SweptLevelSet {
    /// The number of cells around each triangle where distances are computed exactly.
    pub exact_band: u32,
}

impl Default for SweptLevelSet {
    fn default() -> Self {
        SweptLevelSet { exact_band: 1 }
    }
}

impl DistanceFieldProvider for SweptLevelSet {
    fn compute_field(&self, mesh: &Mesh, grid: &GridGeometry) -> Result<ScalarField, SdfError> {
        if mesh.num_faces() == 0 {
            return Err(SdfError::EmptyMesh);
        }

        mesh.check_face_indices()?;
        let triangles: Vec<Triangle> = mesh.triangles().flatten().collect();

        let dims = grid.dims();
        let upper_bound = (dims.nx + dims.ny + dims.nz) as Real * grid.cell_size();

        let out_of_memory = || SdfError::OutOfMemory {
            num_cells: dims.num_cells(),
        };

        let mut sweeper = Sweeper {
            grid,
            triangles: &triangles,
            phi: ScalarField::try_new(dims, upper_bound).ok_or_else(out_of_memory)?,
            closest: try_filled(dims.num_cells(), None).ok_or_else(out_of_memory)?,
        };
        let mut crossings = try_filled(dims.num_cells(), 0u32).ok_or_else(out_of_memory)?;

        sweeper.initialize_near_surface(self.exact_band, &mut crossings);

        for _ in 0..NUM_SWEEP_PASSES {
            for direction in SWEEP_DIRECTIONS {
                sweeper.sweep(direction);
            }
        }

        log::debug!(
            "Swept {} triangles over {} nodes ({} sweeps).",
            triangles.len(),
            dims.num_cells(),
            NUM_SWEEP_PASSES * SWEEP_DIRECTIONS.len()
        );

        let mut phi = sweeper.phi;
        apply_crossing_parity(&mut phi, &crossings);
        Ok(phi)
    }
}

struct Sweeper<'a> {
    grid: &'a GridGeometry,
    triangles: &'a [Triangle],
    phi: ScalarField,
    closest: Vec<Option<u32>>,
}

impl Sweeper<'_> {
    /// Computes the exact distances in the narrow band, and the crossing counts of every
    /// `x` grid line.
    fn initialize_near_surface(&mut self, exact_band: u32, crossings: &mut [u32]) {
        let dims = self.grid.dims();
        let band = exact_band as i64;

        for (t, tri) in self.triangles.iter().enumerate() {
            let g = tri
                .vertices()
                .map(|pt| self.grid.grid_coordinates(&pt).cast::<f64>());
            let mins = g[0].inf(&g[1]).inf(&g[2]);
            let maxs = g[0].sup(&g[1]).sup(&g[2]);

            for k in band_range(mins.z, maxs.z, band, dims.nz) {
                for j in band_range(mins.y, maxs.y, band, dims.ny) {
                    for i in band_range(mins.x, maxs.x, band, dims.nx) {
                        let pt = self.grid.node_position(i, j, k);
                        let dist = tri.distance_to_local_point(&pt);

                        if dist < self.phi[(i, j, k)] {
                            self.phi[(i, j, k)] = dist;
                            self.closest[dims.linear_index(i, j, k)] = Some(t as u32);
                        }
                    }
                }
            }

            let projected = g.map(|v| Point2::new(v.y, v.z));

            for k in crossing_range(mins.z, maxs.z, dims.nz) {
                for j in crossing_range(mins.y, maxs.y, dims.ny) {
                    let line = Point2::new(j as f64, k as f64);
                    let Some(bcoords) = utils::point_in_triangle_barycentric(
                        &line,
                        &projected[0],
                        &projected[1],
                        &projected[2],
                    ) else {
                        continue;
                    };

                    let hit = bcoords[0] * g[0].x + bcoords[1] * g[1].x + bcoords[2] * g[2].x;
                    let i_interval = hit.ceil();

                    if i_interval < 0.0 {
                        crossings[dims.linear_index(0, j, k)] += 1;
                    } else if (i_interval as usize) < dims.nx {
                        crossings[dims.linear_index(i_interval as usize, j, k)] += 1;
                    }
                }
            }
        }
    }

    fn sweep(&mut self, [di, dj, dk]: [isize; 3]) {
        let dims = self.grid.dims();
        let is = sweep_order(dims.nx, di);
        let js = sweep_order(dims.ny, dj);
        let ks = sweep_order(dims.nz, dk);

        for &k in &ks {
            for &j in &js {
                for &i in &is {
                    let pt = self.grid.node_position(i, j, k);
                    let (pi, pj, pk) = (upwind(i, di), upwind(j, dj), upwind(k, dk));

                    for neighbour in [
                        (pi, j, k),
                        (i, pj, k),
                        (pi, pj, k),
                        (i, j, pk),
                        (pi, j, pk),
                        (i, pj, pk),
                        (pi, pj, pk),
                    ] {
                        self.check_neighbour(&pt, (i, j, k), neighbour);
                    }
                }
            }
        }
    }

    fn check_neighbour(
        &mut self,
        pt: &Point<Real>,
        (i, j, k): (usize, usize, usize),
        (ni, nj, nk): (usize, usize, usize),
    ) {
        let dims = self.grid.dims();
        let Some(t) = self.closest[dims.linear_index(ni, nj, nk)] else {
            return;
        };

        let dist = self.triangles[t as usize].distance_to_local_point(pt);

        if dist < self.phi[(i, j, k)] {
            self.phi[(i, j, k)] = dist;
            self.closest[dims.linear_index(i, j, k)] = Some(t);
        }
    }
}

/// Nodes from `trunc(lo) - band` to `trunc(hi) + band + 1`, clamped to the grid.
fn band_range(lo: f64, hi: f64, band: i64, n: usize) -> RangeInclusive<usize> {
    let last = n as i64 - 1;
    let start = (lo as i64 - band).clamp(0, last);
    let end = (hi as i64 + band + 1).clamp(0, last);
    start as usize..=end as usize
}

/// Grid lines from `ceil(lo)` to `floor(hi)`, clamped to the grid. May be empty.
fn crossing_range(lo: f64, hi: f64, n: usize) -> RangeInclusive<usize> {
    let last = n as i64 - 1;
    let start = (lo.ceil() as i64).clamp(0, last);
    let end = (hi.floor() as i64).clamp(0, last);
    start as usize..=end as usize
}

/// The nodes visited along one axis, skipping the first node in the sweep direction since
/// it has no upwind neighbour.
fn sweep_order(n: usize, direction: isize) -> Vec<usize> {
    if direction > 0 {
        (1..n).collect()
    } else {
        (0..n.saturating_sub(1)).rev().collect()
    }
}

#[inline]
fn upwind(i: usize, direction: isize) -> usize {
    (i as isize - direction) as usize
}

fn flip_row((row, counts): (&mut [Real], &[u32])) {
    let mut total = 0u32;

    for (value, count) in row.iter_mut().zip(counts) {
        total += count;
        if total % 2 == 1 {
            *value = -*value;
        }
    }
}

fn apply_crossing_parity(phi: &mut ScalarField, crossings: &[u32]) {
    let nx = phi.dims().nx;

    #[cfg(feature = "parallel")]
    phi.as_mut_slice()
        .par_chunks_mut(nx)
        .zip(crossings.par_chunks(nx))
        .for_each(flip_row);

    #[cfg(not(feature = "parallel"))]
    phi.as_mut_slice()
        .chunks_mut(nx)
        .zip(crossings.chunks(nx))
        .for_each(flip_row);
}
