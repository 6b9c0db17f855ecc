use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use crate::shape::Triangle;
use core::fmt;

/// A triangle referencing three vertices of a [`Mesh`] by their 0-based index.
pub type Face = [u32; 3];

/// A face referencing a vertex that does not exist.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
#[error("face {face} references the vertex {index} but the mesh only has {num_vertices} vertices")]
pub struct InvalidFaceIndex {
    /// The 0-based index of the faulty face.
    pub face: usize,
    /// The out-of-range vertex index.
    pub index: u32,
    /// The number of vertices of the mesh.
    pub num_vertices: usize,
}

/// An indexed triangle mesh.
///
/// The vertex and face lists are kept in the order they were read, so that the N-th vertex
/// of the source is `vertices()[N - 1]`. A mesh is immutable once built.
#[derive(Clone, Default, PartialEq)]
pub struct Mesh {
    vertices: Vec<Point<Real>>,
    faces: Vec<Face>,
}

impl fmt::Debug for Mesh {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Mesh {{ vertices: {}, faces: {} }}",
            self.vertices.len(),
            self.faces.len()
        )
    }
}

impl Mesh {
    /// Creates a mesh from its vertex and face lists.
    ///
    /// Face indices are not checked here: use [`Mesh::check_face_indices`] before
    /// dereferencing them.
    pub fn new(vertices: Vec<Point<Real>>, faces: Vec<Face>) -> Self {
        Mesh { vertices, faces }
    }

    /// The vertices of this mesh.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The faces of this mesh.
    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// The number of vertices of this mesh.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// The number of faces of this mesh.
    #[inline]
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// The AABB of the vertices of this mesh, or `None` if it has no vertex.
    ///
    /// Every declared vertex counts, even the ones no face references.
    pub fn local_aabb(&self) -> Option<Aabb> {
        Aabb::from_points(&self.vertices)
    }

    /// Checks that every face index refers to an existing vertex.
    pub fn check_face_indices(&self) -> Result<(), InvalidFaceIndex> {
        let num_vertices = self.vertices.len();

        for (face, idx) in self.faces.iter().enumerate() {
            if let Some(index) = idx.iter().copied().find(|i| *i as usize >= num_vertices) {
                return Err(InvalidFaceIndex {
                    face,
                    index,
                    num_vertices,
                });
            }
        }

        Ok(())
    }

    /// The `i`-th face as a triangle, or `None` if `i` or one of its indices is out of range.
    pub fn triangle(&self, i: usize) -> Option<Triangle> {
        let idx = self.faces.get(i)?;
        Some(Triangle::new(
            *self.vertices.get(idx[0] as usize)?,
            *self.vertices.get(idx[1] as usize)?,
            *self.vertices.get(idx[2] as usize)?,
        ))
    }

    /// An iterator through all the triangles of this mesh.
    ///
    /// Yields `None` for faces with out-of-range indices.
    pub fn triangles(&self) -> impl ExactSizeIterator<Item = Option<Triangle>> + '_ {
        (0..self.faces.len()).map(move |i| self.triangle(i))
    }
}
