//! Mesh builder that records what the pipeline does to it.

use parking_lot::Mutex;
use textfx_mesh::{MeshBuilder, MeshVertex, SimpleMeshBuilder};

/// A call made on a [`RecordingMeshBuilder`].
#[derive(Debug, Clone, PartialEq)]
pub enum MeshCall {
    VertexStream { vertices: usize },
    Clear,
    AddVertex,
    AddTriangle([u32; 3]),
}

/// Wraps a [`SimpleMeshBuilder`] and records every call.
///
/// `vertex_stream` takes `&self`, so calls are kept behind a `Mutex`.
#[derive(Debug, Default)]
pub struct RecordingMeshBuilder {
    inner: SimpleMeshBuilder,
    calls: Mutex<Vec<MeshCall>>,
}

impl RecordingMeshBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder holding one quad per glyph, as text layout leaves it.
    pub fn from_quads(quads: &[MeshVertex]) -> Self {
        Self {
            inner: SimpleMeshBuilder::from_quads(quads),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Replace the mesh content as a fresh layout pass would, keeping recorded calls.
    pub fn reload_quads(&mut self, quads: &[MeshVertex]) {
        self.inner = SimpleMeshBuilder::from_quads(quads);
    }

    pub fn vertices(&self) -> &[MeshVertex] {
        self.inner.vertices()
    }

    pub fn indices(&self) -> &[u32] {
        self.inner.indices()
    }

    /// Get a copy of all recorded calls.
    pub fn calls(&self) -> Vec<MeshCall> {
        self.calls.lock().clone()
    }

    pub fn count_stream_reads(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|c| matches!(c, MeshCall::VertexStream { .. }))
            .count()
    }

    pub fn count_clears(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|c| matches!(c, MeshCall::Clear))
            .count()
    }

    pub fn count_triangles(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|c| matches!(c, MeshCall::AddTriangle(_)))
            .count()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().clear();
    }
}

impl MeshBuilder for RecordingMeshBuilder {
    fn vertex_stream(&self, out: &mut Vec<MeshVertex>) {
        self.inner.vertex_stream(out);
        self.calls
            .lock()
            .push(MeshCall::VertexStream { vertices: out.len() });
    }

    fn clear(&mut self) {
        self.inner.clear();
        self.calls.get_mut().push(MeshCall::Clear);
    }

    fn add_vertex(&mut self, vertex: MeshVertex) {
        self.inner.add_vertex(vertex);
        self.calls.get_mut().push(MeshCall::AddVertex);
    }

    fn add_triangle(&mut self, i0: u32, i1: u32, i2: u32) {
        self.inner.add_triangle(i0, i1, i2);
        self.calls.get_mut().push(MeshCall::AddTriangle([i0, i1, i2]));
    }

    fn vertex_count(&self) -> usize {
        self.inner.vertex_count()
    }

    fn index_count(&self) -> usize {
        self.inner.index_count()
    }
}
