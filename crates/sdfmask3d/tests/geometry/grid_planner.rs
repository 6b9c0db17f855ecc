use approx::assert_relative_eq;
use sdfmask3d::math::{Point, Real};
use sdfmask3d::planning::{BoundsPolicy, BoundsStrategy, CanonicalBox, MeshFittedBox, PlanError};
use sdfmask3d::shape::{GridDims, Mesh};

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

#[test]
fn canonical_dimensions() {
    let mesh = tetrahedron();

    for (resolution, dims) in [
        (1, GridDims::new(2, 1, 1)),
        (5, GridDims::new(10, 5, 5)),
        (10, GridDims::new(20, 10, 10)),
        (40, GridDims::new(80, 40, 40)),
    ] {
        let grid = CanonicalBox.plan(&mesh, resolution).unwrap();
        assert_eq!(grid.dims(), dims, "resolution {resolution}");
        assert_eq!(grid.cell_size(), 10.0 / resolution as Real);
    }
}

#[test]
fn canonical_origin_is_shifted_by_two_cells() {
    let grid = CanonicalBox.plan(&tetrahedron(), 10).unwrap();
    assert_eq!(grid.origin(), Point::new(-10.0, -2.0, -5.0));

    let (region, dx) = CanonicalBox::region(10).unwrap();
    assert_eq!(dx, 1.0);
    assert_eq!(region.maxs, Point::new(10.0, 8.0, 5.0));
}

#[test]
fn fitted_grids_contain_random_meshes() {
    let mut rng = oorandom::Rand32::new(7);
    let mut coord = || (rng.rand_float() as Real - 0.5) * 40.0;

    for resolution in [1, 3, 10, 25] {
        for padding in [0, 1, 2] {
            let vertices: Vec<_> = (0..12)
                .map(|_| Point::new(coord(), coord(), coord()))
                .collect();
            let mesh = Mesh::new(vertices, vec![[0, 1, 2]]);
            let aabb = mesh.local_aabb().unwrap();

            let grid = MeshFittedBox { padding }.plan(&mesh, resolution).unwrap();
            let last_node = grid.node_position(
                grid.dims().nx - 1,
                grid.dims().ny - 1,
                grid.dims().nz - 1,
            );

            for d in 0..3 {
                assert!(grid.origin()[d] <= aabb.mins[d]);
                assert!(last_node[d] >= aabb.maxs[d] - 1.0e-4);
            }

            assert_relative_eq!(
                grid.cell_size(),
                aabb.extents().y / resolution as Real,
                max_relative = 1.0e-5
            );
        }
    }
}

#[test]
fn policies() {
    let mesh = tetrahedron();
    let canonical = BoundsPolicy::default().strategy(2).plan(&mesh, 10).unwrap();
    assert_eq!(canonical, CanonicalBox.plan(&mesh, 10).unwrap());

    let fitted = BoundsPolicy::Fit.strategy(3).plan(&mesh, 6).unwrap();
    assert_eq!(fitted, MeshFittedBox { padding: 3 }.plan(&mesh, 6).unwrap());
    assert_eq!(fitted.cell_size(), 1.0);
    assert_eq!(fitted.origin(), Point::new(-8.0, -3.0, -7.0));
    assert_eq!(fitted.dims(), GridDims::new(17, 13, 15));
}

#[test]
fn zero_resolution_is_rejected() {
    let mesh = tetrahedron();
    assert_eq!(CanonicalBox.plan(&mesh, 0), Err(PlanError::ZeroResolution));
    assert_eq!(
        MeshFittedBox::default().plan(&mesh, 0),
        Err(PlanError::ZeroResolution)
    );
}
