//! The working vertex buffer that effect stages transform.

use crate::{MeshBuilder, MeshVertex, corner};

/// How the vertices of a [`VertexStream`] form triangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Topology {
    /// Four vertices per quad (TL, TR, BR, BL), two triangles each.
    #[default]
    Quads,
    /// Unshared triangles, three vertices each. A glyph is `TL, TR, BR, BR, BL, TL`.
    Triangles,
}

impl Topology {
    /// Vertices per glyph as produced by layout.
    pub const fn glyph_vertices(self) -> usize {
        match self {
            Topology::Quads => corner::QUAD,
            Topology::Triangles => corner::TRIANGLE_PAIR,
        }
    }

    /// Vertices per primitive (quad or triangle).
    pub const fn primitive_vertices(self) -> usize {
        match self {
            Topology::Quads => corner::QUAD,
            Topology::Triangles => 3,
        }
    }
}

/// Vertices, triangle indices and the grouping that ties vertices to glyphs.
///
/// `glyph_stride` is the number of consecutive vertices owned by one glyph. It starts at
/// [`Topology::glyph_vertices`] and grows when a stage splits every glyph into more rows.
/// Stages only ever touch complete groups; trailing vertices of a partial group pass
/// through untouched.
#[derive(Debug, Clone)]
pub struct VertexStream {
    vertices: Vec<MeshVertex>,
    indices: Vec<u32>,
    topology: Topology,
    glyph_stride: usize,
}

impl Default for VertexStream {
    fn default() -> Self {
        Self::new(Topology::default())
    }
}

impl VertexStream {
    pub fn new(topology: Topology) -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
            topology,
            glyph_stride: topology.glyph_vertices(),
        }
    }

    /// Build a stream from raw vertices and generate its indices.
    pub fn from_vertices(topology: Topology, vertices: Vec<MeshVertex>) -> Self {
        let mut stream = Self::new(topology);
        stream.vertices = vertices;
        stream.rebuild_indices();
        stream
    }

    /// Drop all contents and switch topology. Capacity is kept.
    pub fn reset(&mut self, topology: Topology) {
        self.vertices.clear();
        self.indices.clear();
        self.topology = topology;
        self.glyph_stride = topology.glyph_vertices();
    }

    /// Replace the contents with a triangle stream as returned by
    /// [`MeshBuilder::vertex_stream`], converted to `topology`.
    ///
    /// Converting to quads keeps corners `0, 1, 2, 4` of each six-vertex glyph; a
    /// trailing partial glyph is dropped.
    pub fn load_triangle_stream(&mut self, triangles: &[MeshVertex], topology: Topology) {
        self.reset(topology);
        match topology {
            Topology::Triangles => self.vertices.extend_from_slice(triangles),
            Topology::Quads => {
                let glyphs = triangles.chunks_exact(corner::TRIANGLE_PAIR);
                let dropped = glyphs.remainder().len();
                self.vertices.reserve(glyphs.len() * corner::QUAD);
                for glyph in glyphs {
                    self.vertices
                        .extend_from_slice(&[glyph[0], glyph[1], glyph[2], glyph[4]]);
                }
                if dropped > 0 {
                    tracing::trace!(dropped, "ignoring partial glyph at end of triangle stream");
                }
            }
        }
        self.rebuild_indices();
    }

    /// Expand a quad stream into an unshared triangle stream in place.
    pub fn convert_to_triangles(&mut self) {
        if self.topology == Topology::Triangles {
            return;
        }
        let quads = std::mem::take(&mut self.vertices);
        let chunks = quads.chunks_exact(corner::QUAD);
        let tail = chunks.remainder();
        self.vertices.reserve(chunks.len() * corner::TRIANGLE_PAIR + tail.len());
        for quad in chunks {
            self.vertices
                .extend(corner::TRIANGLE_ORDER.iter().map(|&c| quad[c]));
        }
        self.vertices.extend_from_slice(tail);
        self.glyph_stride = self.glyph_stride / corner::QUAD * corner::TRIANGLE_PAIR;
        self.topology = Topology::Triangles;
        self.rebuild_indices();
    }

    /// Regenerate the index buffer from the vertex layout.
    ///
    /// Quads get `(i, i+1, i+2), (i+2, i+3, i)` per complete window of four; triangles get
    /// `(i, i+1, i+2)` per complete window of three.
    pub fn rebuild_indices(&mut self) {
        self.indices.clear();
        let step = self.topology.primitive_vertices();
        let complete = self.vertices.len() / step * step;
        match self.topology {
            Topology::Quads => {
                self.indices.reserve(complete / 4 * 6);
                for i in (0..complete as u32).step_by(step) {
                    self.indices
                        .extend_from_slice(&[i, i + 1, i + 2, i + 2, i + 3, i]);
                }
            }
            Topology::Triangles => {
                self.indices.extend(0..complete as u32);
            }
        }
    }

    /// Clear the builder and submit this stream's vertices and triangles.
    pub fn commit(&self, builder: &mut dyn MeshBuilder) {
        builder.clear();
        for vertex in &self.vertices {
            builder.add_vertex(*vertex);
        }
        for tri in self.indices.chunks_exact(3) {
            builder.add_triangle(tri[0], tri[1], tri[2]);
        }
    }

    pub fn vertices(&self) -> &[MeshVertex] {
        &self.vertices
    }

    pub fn vertices_mut(&mut self) -> &mut [MeshVertex] {
        &mut self.vertices
    }

    /// Direct access to the vertex buffer for stages that change vertex count. Callers
    /// are responsible for the indices afterward.
    pub fn vertex_buffer_mut(&mut self) -> &mut Vec<MeshVertex> {
        &mut self.vertices
    }

    /// Swap the vertex buffer with `other`, used to double-buffer through scratch storage.
    pub fn swap_vertices(&mut self, other: &mut Vec<MeshVertex>) {
        std::mem::swap(&mut self.vertices, other);
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn indices_mut(&mut self) -> &mut Vec<u32> {
        &mut self.indices
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    pub fn glyph_stride(&self) -> usize {
        self.glyph_stride
    }

    pub fn set_glyph_stride(&mut self, stride: usize) {
        self.glyph_stride = stride.max(1);
    }

    /// Number of complete glyph groups.
    pub fn glyph_count(&self) -> usize {
        self.vertices.len() / self.glyph_stride
    }

    /// Complete glyph groups, mutable. A partial trailing group is not visited.
    pub fn glyphs_mut(&mut self) -> std::slice::ChunksExactMut<'_, MeshVertex> {
        self.vertices.chunks_exact_mut(self.glyph_stride)
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color32, SimpleMeshBuilder};
    use textfx_core::math::{Vec2, Vec3};

    fn quad(x: f32) -> Vec<MeshVertex> {
        [(0.0, 1.0), (1.0, 1.0), (1.0, 0.0), (0.0, 0.0)]
            .iter()
            .map(|&(dx, y)| MeshVertex::new(Vec3::new(x + dx, y, 0.0), Vec2::ZERO, Color32::WHITE))
            .collect()
    }

    fn two_glyph_stream() -> Vec<MeshVertex> {
        let mut quads = quad(0.0);
        quads.extend(quad(2.0));
        let mut stream = Vec::new();
        SimpleMeshBuilder::from_quads(&quads).vertex_stream(&mut stream);
        stream
    }

    #[test]
    fn test_load_as_quads() {
        let mut stream = VertexStream::default();
        stream.load_triangle_stream(&two_glyph_stream(), Topology::Quads);
        assert_eq!(stream.len(), 8);
        assert_eq!(stream.vertices()[..4], quad(0.0)[..]);
        assert_eq!(stream.indices(), &[0, 1, 2, 2, 3, 0, 4, 5, 6, 6, 7, 4]);
        assert_eq!(stream.glyph_count(), 2);
    }

    #[test]
    fn test_load_as_triangles() {
        let mut stream = VertexStream::default();
        stream.load_triangle_stream(&two_glyph_stream(), Topology::Triangles);
        assert_eq!(stream.len(), 12);
        assert_eq!(stream.indices().len(), 12);
        assert_eq!(stream.glyph_stride(), 6);
    }

    #[test]
    fn test_partial_glyph_dropped_for_quads() {
        let mut tris = two_glyph_stream();
        tris.truncate(9);
        let mut stream = VertexStream::default();
        stream.load_triangle_stream(&tris, Topology::Quads);
        assert_eq!(stream.len(), 4);
    }

    #[test]
    fn test_partial_triangle_has_no_indices() {
        let mut tris = two_glyph_stream();
        tris.truncate(8);
        let mut stream = VertexStream::default();
        stream.load_triangle_stream(&tris, Topology::Triangles);
        assert_eq!(stream.len(), 8);
        assert_eq!(stream.indices().len(), 6);
    }

    #[test]
    fn test_convert_to_triangles_matches_builder_stream() {
        let mut stream = VertexStream::from_vertices(Topology::Quads, quad(0.0));
        stream.convert_to_triangles();
        let mut expected = Vec::new();
        SimpleMeshBuilder::from_quads(&quad(0.0)).vertex_stream(&mut expected);
        assert_eq!(stream.vertices(), &expected[..]);
        assert_eq!(stream.glyph_stride(), 6);
    }

    #[test]
    fn test_commit_round_trip() {
        let stream = VertexStream::from_vertices(Topology::Quads, quad(0.0));
        let mut builder = SimpleMeshBuilder::new();
        builder.add_vertex(MeshVertex::default());
        stream.commit(&mut builder);
        assert_eq!(builder.vertices(), stream.vertices());
        assert_eq!(builder.indices(), stream.indices());
    }
}
