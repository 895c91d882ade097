//! The boundary between the effect pipeline and whatever owns the rendered mesh.

use crate::{MeshVertex, corner};

/// Accepts and hands out vertex/triangle buffers.
///
/// Implemented by the owner of the text mesh. The pipeline reads the laid-out mesh with
/// [`vertex_stream`](MeshBuilder::vertex_stream), then [`clear`](MeshBuilder::clear)s it
/// and re-submits the transformed result.
pub trait MeshBuilder {
    /// Flatten the current mesh into triangle-stream form (three vertices per triangle,
    /// following the index buffer) and append it to `out`.
    fn vertex_stream(&self, out: &mut Vec<MeshVertex>);

    /// Discard all vertices and triangles.
    fn clear(&mut self);

    fn add_vertex(&mut self, vertex: MeshVertex);

    fn add_triangle(&mut self, i0: u32, i1: u32, i2: u32);

    fn vertex_count(&self) -> usize;

    fn index_count(&self) -> usize;
}

/// `Vec`-backed [`MeshBuilder`].
#[derive(Debug, Clone, Default)]
pub struct SimpleMeshBuilder {
    vertices: Vec<MeshVertex>,
    indices: Vec<u32>,
}

impl SimpleMeshBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the mesh text layout would produce: every complete group of four vertices is
    /// one glyph quad (TL, TR, BR, BL) drawn as two triangles.
    pub fn from_quads(quads: &[MeshVertex]) -> Self {
        let mut builder = Self::new();
        for quad in quads.chunks_exact(corner::QUAD) {
            let base = builder.vertices.len() as u32;
            builder.vertices.extend_from_slice(quad);
            builder.add_triangle(base, base + 1, base + 2);
            builder.add_triangle(base + 2, base + 3, base);
        }
        builder
    }

    pub fn vertices(&self) -> &[MeshVertex] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }
}

impl MeshBuilder for SimpleMeshBuilder {
    fn vertex_stream(&self, out: &mut Vec<MeshVertex>) {
        out.reserve(self.indices.len());
        out.extend(
            self.indices
                .iter()
                .filter_map(|&i| self.vertices.get(i as usize).copied()),
        );
    }

    fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }

    fn add_vertex(&mut self, vertex: MeshVertex) {
        self.vertices.push(vertex);
    }

    fn add_triangle(&mut self, i0: u32, i1: u32, i2: u32) {
        self.indices.extend_from_slice(&[i0, i1, i2]);
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn index_count(&self) -> usize {
        self.indices.len()
    }
}
