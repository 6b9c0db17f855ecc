use sdfmask3d::io::{load_obj, parse_obj, LoadError, MalformedReason, RecordKind};
use sdfmask3d::na::Point3;
use std::io::Write;

#[test]
fn vertices_keep_their_source_order() {
    let src = "v 3 0 0\nv 1 0 0\nv 2 0 0\nv 0 5 0\n";
    let mesh = parse_obj(src.as_bytes()).unwrap().mesh;

    assert_eq!(
        mesh.vertices(),
        &[
            Point3::new(3.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(0.0, 5.0, 0.0),
        ]
    );
}

#[test]
fn faces_are_converted_to_zero_based() {
    let src = "v 0 0 0\nv 1 0 0\nv 0 1 0\nv 0 0 1\nf 1 2 3\nf 4 3 2\n";
    let report = parse_obj(src.as_bytes()).unwrap();

    assert_eq!(report.mesh.faces(), &[[0, 1, 2], [3, 2, 1]]);
    assert_eq!(report.ignored_lines, 0);
}

#[test]
fn out_of_range_faces_are_not_checked_by_the_loader() {
    let src = "v 0 0 0\nf 1 2 3\n";
    let mesh = parse_obj(src.as_bytes()).unwrap().mesh;

    assert_eq!(mesh.num_faces(), 1);
    assert!(mesh.check_face_indices().is_err());
}

#[test]
fn vertex_normals_are_rejected_anywhere() {
    let body = ["v 0 0 0", "v 1 0 0", "v 0 1 0", "f 1 2 3"];

    for position in 0..=body.len() {
        let mut lines = body.to_vec();
        lines.insert(position, "vn 0 0 1");
        let src = lines.join("\n");

        match parse_obj(src.as_bytes()) {
            Err(LoadError::UnsupportedNormals { line }) => assert_eq!(line, position + 1),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}

#[test]
fn unrecognized_lines_are_counted() {
    let src = "\
mtllib scene.mtl
o tetra
v 0 0 0
vt 0 0
v 1 0 0
g group
s off

v 0 1 0
usemtl default
f 1 2 3
# end
";
    let report = parse_obj(src.as_bytes()).unwrap();

    assert_eq!(report.ignored_lines, 7);
    assert_eq!(report.mesh.num_vertices(), 3);
    assert_eq!(report.mesh.num_faces(), 1);
}

#[test]
fn empty_input() {
    let report = parse_obj("".as_bytes()).unwrap();
    assert_eq!(report.mesh.num_vertices(), 0);
    assert_eq!(report.mesh.num_faces(), 0);
    assert_eq!(report.ignored_lines, 0);
}

#[test]
fn malformed_records_report_their_line() {
    let cases = [
        ("v 0 0 0\nf 1 2\n", 2, RecordKind::Face),
        ("v 0 0 0\nv 0 0 0\nv x 0 0\n", 3, RecordKind::Vertex),
        ("v 0 0 0\nf 1 2 3.5\n", 2, RecordKind::Face),
        ("v nan 0 0\n", 1, RecordKind::Vertex),
    ];

    for (src, expected_line, expected_kind) in cases {
        match parse_obj(src.as_bytes()) {
            Err(LoadError::Malformed { line, error }) => {
                assert_eq!(line, expected_line, "{src:?}");
                assert_eq!(error.kind, expected_kind, "{src:?}");
            }
            other => panic!("unexpected result for {src:?}: {other:?}"),
        }
    }
}

#[test]
fn zero_face_reference_is_malformed() {
    match parse_obj("v 0 0 0\nf 0 1 1\n".as_bytes()) {
        Err(LoadError::Malformed { error, .. }) => {
            assert_eq!(error.reason, MalformedReason::InvalidIndex("0".to_string()))
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn load_from_file() {
    let mut file = tempfile::Builder::new().suffix(".obj").tempfile().unwrap();
    writeln!(file, "v 0 0 0\r\nv 1 0 0\r\nv 0 1 0\r\nf 1 2 3\r").unwrap();
    file.flush().unwrap();

    let report = load_obj(file.path()).unwrap();
    assert_eq!(report.mesh.num_vertices(), 3);
    assert_eq!(report.mesh.faces(), &[[0, 1, 2]]);
}

#[test]
fn missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.obj");

    match load_obj(&path) {
        Err(LoadError::Open { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("unexpected result: {other:?}"),
    }
}
