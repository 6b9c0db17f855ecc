use approx::assert_relative_eq;
use sdfmask3d::math::{Point, Real, Vector};
use sdfmask3d::planning::{BoundsStrategy, CanonicalBox};
use sdfmask3d::sdf::{DistanceFieldProvider, SweptLevelSet};
use sdfmask3d::shape::Mesh;

fn tetrahedron() -> Mesh {
    Mesh::new(
        vec![
            Point::new(-5.0, 0.0, -4.0),
            Point::new(5.0, 0.0, -4.0),
            Point::new(0.0, 0.0, 4.0),
            Point::new(0.0, 6.0, 0.0),
        ],
        vec![[0, 2, 1], [0, 1, 3], [1, 2, 3], [2, 0, 3]],
    )
}

// Signed distances to the supporting planes of a convex mesh, with outward normals.
fn plane_distances(mesh: &Mesh, pt: &Point<Real>) -> Vec<Real> {
    let centroid = mesh
        .vertices()
        .iter()
        .fold(Vector::zeros(), |acc, v| acc + v.coords)
        / mesh.num_vertices() as Real;

    mesh.triangles()
        .flatten()
        .map(|tri| {
            let mut n = tri.scaled_normal().normalize();
            if n.dot(&(centroid - tri.a.coords)) > 0.0 {
                n = -n;
            }
            n.dot(&(pt - tri.a))
        })
        .collect()
}

#[test]
fn tetrahedron_signs_match_the_half_spaces() {
    let mesh = tetrahedron();
    let grid = CanonicalBox.plan(&mesh, 10).unwrap();
    let phi = SweptLevelSet::default().compute_field(&mesh, &grid).unwrap();
    let dims = grid.dims();

    let mut num_inside = 0;

    for k in 0..dims.nz {
        for j in 0..dims.ny {
            for i in 0..dims.nx {
                let pt = grid.node_position(i, j, k);
                let dists = plane_distances(&mesh, &pt);

                if dists.iter().any(|d| d.abs() < 1.0e-3) {
                    continue;
                }

                let inside = dists.iter().all(|d| *d < 0.0);
                assert_eq!(phi.get(i, j, k) < 0.0, inside, "({i}, {j}, {k})");

                if inside {
                    num_inside += 1;
                    // Every value is the exact distance to some triangle.
                    let depth = dists.iter().map(|d| -d).fold(Real::MAX, Real::min);
                    assert!(-phi.get(i, j, k) >= depth - 1.0e-4);
                }
            }
        }
    }

    assert!(num_inside > 10);
}

#[test]
fn node_near_the_centroid() {
    let mesh = tetrahedron();
    let grid = CanonicalBox.plan(&mesh, 10).unwrap();
    let phi = SweptLevelSet::default().compute_field(&mesh, &grid).unwrap();

    let pt = grid.node_position(10, 4, 4);
    assert_eq!(pt, Point::new(0.0, 2.0, -1.0));

    let depth = plane_distances(&mesh, &pt)
        .into_iter()
        .map(|d| -d)
        .fold(Real::MAX, Real::min);
    assert_relative_eq!(phi.get(10, 4, 4), -depth, epsilon = 1.0e-4);
}

#[test]
fn mesh_outside_the_grid_is_all_outside() {
    let far = Mesh::new(
        tetrahedron()
            .vertices()
            .iter()
            .map(|v| v + Vector::new(100.0, 0.0, 0.0))
            .collect(),
        tetrahedron().faces().to_vec(),
    );
    let grid = CanonicalBox.plan(&far, 10).unwrap();
    let phi = SweptLevelSet::default().compute_field(&far, &grid).unwrap();

    assert!(phi.as_slice().iter().all(|v| *v > 0.0));
}
