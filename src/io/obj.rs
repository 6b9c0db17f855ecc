//! Loader for the triangle subset of the Wavefront OBJ format.
//!
//! Only vertex positions (`v`) and triangular faces (`f`) are read. Vertex normals (`vn`)
//! abort the load, because silently dropping them could hide a misread record. Every other
//! non-blank line is counted and skipped.

use crate::math::{Point, Real};
use crate::shape::{Face, Mesh};
use core::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// The kind of record a line was classified as.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RecordKind {
    /// A `v` line.
    Vertex,
    /// An `f` line.
    Face,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Vertex => f.pad("vertex"),
            RecordKind::Face => f.pad("face"),
        }
    }
}

/// The reason why a `v` or `f` line could not be parsed.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum MalformedReason {
    /// The record does not have the expected number of fields.
    #[error("expected {expected} fields, found {found}")]
    FieldCount {
        /// The number of fields required.
        expected: usize,
        /// The number of fields present on the line.
        found: usize,
    },
    /// A coordinate is not a floating-point number.
    #[error("`{0}` is not a valid coordinate")]
    InvalidCoordinate(String),
    /// A coordinate is infinite or NaN.
    #[error("coordinate `{0}` is not finite")]
    NonFiniteCoordinate(String),
    /// A vertex reference is not a positive integer.
    #[error("`{0}` is not a valid 1-based vertex reference")]
    InvalidIndex(String),
}

/// A `v` or `f` line that could not be parsed.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
#[error("malformed {kind} record: {reason}")]
pub struct RecordError {
    /// The kind of record being parsed.
    pub kind: RecordKind,
    /// What went wrong.
    pub reason: MalformedReason,
}

/// Errors that abort the loading of a mesh.
#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    /// The input file could not be opened.
    #[error("failed to open `{}`: {source}", path.display())]
    Open {
        /// The path that was being opened.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The input stream failed while being read.
    #[error("failed to read line {line}: {source}")]
    Read {
        /// The 1-based number of the line being read.
        line: usize,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The input contains vertex normals, which this loader does not handle.
    #[error("line {line}: the OBJ loader is not able to parse vertex normals, please strip them from the input file")]
    UnsupportedNormals {
        /// The 1-based number of the first `vn` line.
        line: usize,
    },
    /// A vertex or face record is malformed.
    #[error("line {line}: {error}")]
    Malformed {
        /// The 1-based number of the faulty line.
        line: usize,
        /// The parsing failure.
        #[source]
        error: RecordError,
    },
}

/// The classification of a single line.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Record {
    /// A vertex position.
    Vertex(Point<Real>),
    /// A triangle, with 0-based vertex indices.
    Face(Face),
    /// A vertex normal, which is not supported.
    VertexNormal,
    /// Any other non-blank line.
    Other,
    /// A line containing only whitespace.
    Blank,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Keyword {
    Vertex,
    Face,
    VertexNormal,
    Other,
}

impl Keyword {
    fn parse(token: &str) -> Self {
        match token {
            "v" => Keyword::Vertex,
            "f" => Keyword::Face,
            "vn" => Keyword::VertexNormal,
            _ => Keyword::Other,
        }
    }
}

/// The result of a successful load.
#[derive(Clone, Debug)]
pub struct LoadReport {
    /// The mesh that was read.
    pub mesh: Mesh,
    /// The number of non-blank lines that were neither vertices nor faces.
    pub ignored_lines: usize,
}

/// Classifies and parses a single line of an OBJ file.
///
/// The line is split on ASCII whitespace; the first token selects the record kind. Anything
/// following a `#` is a comment.
pub fn classify_line(line: &str) -> Result<Record, RecordError> {
    if line.trim().is_empty() {
        return Ok(Record::Blank);
    }

    let content = line.split('#').next().unwrap_or_default();
    let mut tokens = content.split_ascii_whitespace();

    let Some(keyword) = tokens.next() else {
        // Comment-only line.
        return Ok(Record::Other);
    };

    match Keyword::parse(keyword) {
        Keyword::Vertex => parse_vertex(tokens).map(Record::Vertex),
        Keyword::Face => parse_face(tokens).map(Record::Face),
        Keyword::VertexNormal => Ok(Record::VertexNormal),
        Keyword::Other => Ok(Record::Other),
    }
}

fn parse_vertex<'a>(fields: impl Iterator<Item = &'a str>) -> Result<Point<Real>, RecordError> {
    let err = |reason| RecordError {
        kind: RecordKind::Vertex,
        reason,
    };

    let fields: Vec<&str> = fields.collect();
    // Trailing fields (homogeneous `w`, vertex colors) are allowed and ignored.
    if fields.len() < 3 {
        return Err(err(MalformedReason::FieldCount {
            expected: 3,
            found: fields.len(),
        }));
    }

    let mut coords = [0.0; 3];
    for (coord, field) in coords.iter_mut().zip(fields.iter()) {
        let value: Real = field
            .parse()
            .map_err(|_| err(MalformedReason::InvalidCoordinate(field.to_string())))?;

        if !value.is_finite() {
            return Err(err(MalformedReason::NonFiniteCoordinate(field.to_string())));
        }

        *coord = value;
    }

    Ok(Point::from(coords))
}

fn parse_face<'a>(fields: impl Iterator<Item = &'a str>) -> Result<Face, RecordError> {
    let err = |reason| RecordError {
        kind: RecordKind::Face,
        reason,
    };

    let fields: Vec<&str> = fields.collect();
    if fields.len() != 3 {
        return Err(err(MalformedReason::FieldCount {
            expected: 3,
            found: fields.len(),
        }));
    }

    let mut face = [0; 3];
    for (idx, field) in face.iter_mut().zip(fields.iter()) {
        *idx = parse_vertex_reference(field)
            .ok_or_else(|| err(MalformedReason::InvalidIndex(field.to_string())))?;
    }

    Ok(face)
}

/// Parses a 1-based vertex reference into a 0-based index.
///
/// `a/b/c`, `a//c` and `a/b` forms are accepted; only the position index `a` is kept.
fn parse_vertex_reference(field: &str) -> Option<u32> {
    let position = field.split('/').next()?;
    let one_based: u32 = position.parse().ok()?;
    one_based.checked_sub(1)
}

/// Loads a mesh from the OBJ file at `path`.
pub fn load_obj(path: impl AsRef<Path>) -> Result<LoadReport, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    parse_obj(BufReader::new(file))
}

/// Reads a mesh from an OBJ text stream, until exhaustion.
pub fn parse_obj<R: BufRead>(reader: R) -> Result<LoadReport, LoadError> {
    let mut vertices = Vec::new();
    let mut faces = Vec::new();
    let mut ignored_lines = 0;

    for (i, line) in reader.lines().enumerate() {
        let line_number = i + 1;
        let line = line.map_err(|source| LoadError::Read {
            line: line_number,
            source,
        })?;

        match classify_line(&line) {
            Ok(Record::Vertex(pt)) => vertices.push(pt),
            Ok(Record::Face(face)) => faces.push(face),
            Ok(Record::VertexNormal) => {
                return Err(LoadError::UnsupportedNormals { line: line_number })
            }
            Ok(Record::Other) => ignored_lines += 1,
            Ok(Record::Blank) => {}
            Err(error) => {
                return Err(LoadError::Malformed {
                    line: line_number,
                    error,
                })
            }
        }
    }

    if ignored_lines > 0 {
        log::warn!(
            "{} lines were ignored since they did not contain faces or vertices.",
            ignored_lines
        );
    }

    log::info!(
        "Read in {} vertices and {} faces.",
        vertices.len(),
        faces.len()
    );

    Ok(LoadReport {
        mesh: Mesh::new(vertices, faces),
        ignored_lines,
    })
}
