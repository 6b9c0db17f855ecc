use sdfmask3d::io::{read_mask, remap_to_field};
use sdfmask3d::pipeline::{Pipeline, PipelineError};
use sdfmask3d::planning::MeshFittedBox;
use sdfmask3d::sdf::SweptLevelSet;
use sdfmask3d::shape::GridDims;
use std::path::{Path, PathBuf};

const TETRAHEDRON: &str = "\
# tetrahedron
o tetra
v -5 0 -4
v 5 0 -4
v 0 0 4
v 0 6 0
f 1 3 2
f 1 2 4
f 2 3 4
f 3 1 4
";

fn write_input(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn tetrahedron_at_resolution_ten() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "tetra.obj", TETRAHEDRON);

    let summary = Pipeline::default().run(&input, 10).unwrap();
    let dims = GridDims::new(20, 10, 10);

    assert_eq!(summary.output, dir.path().join("tetra.sdf"));
    assert_eq!(summary.grid.dims(), dims);
    assert_eq!(summary.num_vertices, 4);
    assert_eq!(summary.num_faces, 4);
    assert_eq!(summary.ignored_lines, 2);
    assert_eq!(summary.bytes_written, 2000);

    let bytes = std::fs::read(&summary.output).unwrap();
    assert_eq!(bytes.len(), 2000);

    // The node (10, 4, 4) is at (0, 2, -1), inside the tetrahedron.
    let (si, sj, sk) = remap_to_field(10, 4, 4, &dims);
    assert_eq!((si, sj, sk), (10, 5, 5));
    assert_eq!(bytes[dims.linear_index(si, sj, sk)], 1);
    assert_eq!(bytes[1110], 1);

    let mask = read_mask(&summary.output, dims).unwrap();
    assert!(mask.is_obstacle(10, 4, 4));
    assert!(!mask.is_obstacle(0, 0, 0));
    assert!(!mask.is_obstacle(19, 9, 9));
    assert!(!mask.is_obstacle(10, 9, 4));
    assert!(mask.num_obstacles() > 10 && mask.num_obstacles() < 200);
}

#[test]
fn runs_are_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "tetra.obj", TETRAHEDRON);
    let pipeline = Pipeline::default();

    let first = pipeline.run(&input, 16).unwrap();
    let first_bytes = std::fs::read(&first.output).unwrap();
    let second = pipeline.run(&input, 16).unwrap();
    let second_bytes = std::fs::read(&second.output).unwrap();

    assert_eq!(first, second);
    assert_eq!(first_bytes, second_bytes);
}

#[test]
fn fitted_bounds() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "tetra.obj", TETRAHEDRON);

    let pipeline = Pipeline::new(MeshFittedBox { padding: 2 }, SweptLevelSet::default());
    let summary = pipeline.run(&input, 12).unwrap();

    let dims = summary.grid.dims();
    assert_eq!(dims, GridDims::new(25, 17, 21));
    assert_eq!(summary.bytes_written as usize, dims.num_cells());

    let mask = read_mask(&summary.output, dims).unwrap();
    // Field node closest to (0, 2, -1).
    assert!(mask.is_obstacle(12, 6, 8));
    assert!(!mask.is_obstacle(0, 0, 0));
}

#[test]
fn vertex_normals_leave_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let src = format!("{TETRAHEDRON}vn 0 1 0\n");
    let input = write_input(dir.path(), "normals.obj", &src);

    let err = Pipeline::default().run(&input, 10).unwrap_err();
    assert_eq!(err.exit_code(), -2);
    assert!(!dir.path().join("normals.sdf").exists());
}

#[test]
fn failures_map_to_distinct_exit_codes() {
    let dir = tempfile::tempdir().unwrap();
    let pipeline = Pipeline::default();

    let bad_name = write_input(dir.path(), "tetra.txt", TETRAHEDRON);
    let err = pipeline.run(&bad_name, 10).unwrap_err();
    assert!(matches!(err, PipelineError::BadFilename(_)));
    assert_eq!(err.exit_code(), -1);

    let missing = dir.path().join("missing.obj");
    assert_eq!(pipeline.run(&missing, 10).unwrap_err().exit_code(), -3);

    let malformed = write_input(dir.path(), "malformed.obj", "v 0 0 0\nf 1 2\n");
    assert_eq!(pipeline.run(&malformed, 10).unwrap_err().exit_code(), -4);

    let input = write_input(dir.path(), "tetra.obj", TETRAHEDRON);
    assert_eq!(pipeline.run(&input, 0).unwrap_err().exit_code(), -5);

    let dangling = write_input(dir.path(), "dangling.obj", "v 0 0 0\nv 1 0 0\nf 1 2 3\n");
    assert_eq!(pipeline.run(&dangling, 10).unwrap_err().exit_code(), -6);

    for name in ["malformed.sdf", "tetra.sdf", "dangling.sdf"] {
        assert!(!dir.path().join(name).exists(), "{name}");
    }
}

#[cfg(unix)]
#[test]
fn command_line() {
    use std::process::Command;

    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "tetra.obj", TETRAHEDRON);
    let sdfmask = env!("CARGO_BIN_EXE_sdfmask");

    let status = Command::new(sdfmask).arg(&input).arg("10").status().unwrap();
    assert!(status.success());
    assert_eq!(std::fs::metadata(dir.path().join("tetra.sdf")).unwrap().len(), 2000);

    let normals = write_input(dir.path(), "normals.obj", "vn 0 0 1\n");
    let status = Command::new(sdfmask).arg(&normals).arg("10").status().unwrap();
    assert_eq!(status.code(), Some(254));

    let status = Command::new(sdfmask).arg(&input).arg("0").status().unwrap();
    assert_eq!(status.code(), Some(255));

    let status = Command::new(sdfmask).arg("--help").output().unwrap().status;
    assert!(status.success());
}
