//! Glyph outlines.
//!
//! Two strategies, chosen once per rebuild:
//!
//! - [`apply_cpu`] stamps four offset, single-colored copies of every glyph behind it.
//!   Five times the vertices, no shader requirements.
//! - [`apply_channel_encoded`] leaves vertex count alone. It grows every triangle outward
//!   by the outline width and packs what the outline shader needs into channels text does
//!   not otherwise use:
//!
//! ```text
//! uv0      original UV, stepped outward to match the grown position
//! uv1      min corner of the triangle's original UV box
//! uv2      max corner of the triangle's original UV box
//! uv3      outline color (r, g)
//! tangent  (0, 0, outline b, outline a)
//! normal   (0, 0, outline width)
//! ```

use crate::params::OutlineParams;
use glam::{Vec2, Vec3, Vec4};
use textfx_core::profiling::profile_function;
use textfx_mesh::{BoundingBox, MeshVertex, Topology, VertexStream};

/// Directions of the four outline copies, in emission order.
const COMPASS: [Vec2; 4] = [
    Vec2::new(-1.0, 1.0),
    Vec2::new(1.0, 1.0),
    Vec2::new(1.0, -1.0),
    Vec2::new(-1.0, -1.0),
];

/// Upper bound on the edge length used to scale UV steps.
///
/// Tuned against the outline shader's expansion; not derived. Changing it changes
/// rendered output.
const UV_EDGE_LENGTH_CLAMP: f32 = 18.0;

/// Emit four outline copies of each glyph, then the glyph itself.
///
/// Works per glyph group rather than per quad so that a glyph split into rows keeps all
/// of its outline copies underneath all of its rows. A trailing partial glyph is
/// dropped. Indices are regenerated afterward.
pub fn apply_cpu(params: &OutlineParams, stream: &mut VertexStream, scratch: &mut Vec<MeshVertex>) {
    profile_function!();
    let stride = stream.glyph_stride();
    let width = f32::from(params.width);

    scratch.clear();
    scratch.reserve(stream.len() * (COMPASS.len() + 1));
    let glyphs = stream.vertices().chunks_exact(stride);
    let dropped = glyphs.remainder().len();
    for glyph in glyphs {
        for direction in COMPASS {
            let offset = direction * width;
            scratch.extend(
                glyph
                    .iter()
                    .map(|vertex| vertex.translated(offset).with_color(params.color)),
            );
        }
        scratch.extend_from_slice(glyph);
    }
    if dropped > 0 {
        tracing::trace!(dropped, "outline ignored partial glyph");
    }

    stream.swap_vertices(scratch);
    stream.set_glyph_stride(stride * (COMPASS.len() + 1));
    stream.rebuild_indices();
}

/// Grow every triangle by the outline width and pack outline parameters into spare
/// vertex channels. Vertex and index counts are unchanged.
///
/// Triangles are processed in groups of three vertices, or six when the glyphs carry a
/// gradient seam (each row is then one triangle pair sharing a center). A quad stream is
/// expanded to triangles first.
pub fn apply_channel_encoded(params: &OutlineParams, stream: &mut VertexStream) {
    profile_function!();
    if stream.topology() == Topology::Quads {
        tracing::debug!("channel-encoded outline needs a triangle stream, expanding quads");
        stream.convert_to_triangles();
    }
    let group = if stream.glyph_stride() > Topology::Triangles.glyph_vertices() {
        6
    } else {
        3
    };

    let width = f32::from(params.width);
    let color = params.color.to_color();
    let color_rg = Vec2::new(color.r, color.g);
    let color_ba = Vec4::new(0.0, 0.0, color.b, color.a);
    let normal = Vec3::new(0.0, 0.0, width);

    for triangles in stream.vertices_mut().chunks_exact_mut(group) {
        let (Some(positions), Some(uvs)) = (
            BoundingBox::of(triangles),
            BoundingBox::of_points(triangles.iter().map(|v| v.uv0)),
        ) else {
            continue;
        };
        let center = positions.center();
        let basis = TriangleBasis::new(&triangles[0], &triangles[1], &triangles[2]);

        for vertex in triangles.iter_mut() {
            basis.grow(vertex, center, width);
            vertex.uv1 = uvs.min;
            vertex.uv2 = uvs.max;
            vertex.uv3 = color_rg;
            vertex.tangent = color_ba;
            vertex.normal = normal;
        }
    }
}

/// A triangle's dominant horizontal and vertical edges, in position and UV space.
///
/// Glyph triangles are not wound consistently relative to the world axes, so whichever
/// of the first two edges lies closer to horizontal is taken as the x edge.
#[derive(Debug, Clone, Copy, PartialEq)]
struct TriangleBasis {
    tri_x: Vec2,
    tri_y: Vec2,
    uv_x: Vec2,
    uv_y: Vec2,
}

impl TriangleBasis {
    fn new(v1: &MeshVertex, v2: &MeshVertex, v3: &MeshVertex) -> Self {
        let edge_a = v2.position_2d() - v1.position_2d();
        let edge_b = v3.position_2d() - v2.position_2d();
        let uv_a = v2.uv0 - v1.uv0;
        let uv_b = v3.uv0 - v2.uv0;

        if horizontality(edge_a) > horizontality(edge_b) {
            Self {
                tri_x: edge_a,
                tri_y: edge_b,
                uv_x: uv_a,
                uv_y: uv_b,
            }
        } else {
            Self {
                tri_x: edge_b,
                tri_y: edge_a,
                uv_x: uv_b,
                uv_y: uv_a,
            }
        }
    }

    /// Push `vertex` away from `center` by `width` on both axes and step its UV by the
    /// matching fraction of the UV edges.
    fn grow(&self, vertex: &mut MeshVertex, center: Vec2, width: f32) {
        let dx = if vertex.position.x > center.x { width } else { -width };
        let dy = if vertex.position.y > center.y { width } else { -width };
        vertex.position.x += dx;
        vertex.position.y += dy;

        vertex.uv0 += uv_step(self.uv_x, self.tri_x, dx, self.tri_x.x);
        vertex.uv0 += uv_step(self.uv_y, self.tri_y, dy, self.tri_y.y);
    }
}

fn horizontality(edge: Vec2) -> f32 {
    edge.normalize_or_zero().dot(Vec2::X).abs()
}

fn uv_step(uv_edge: Vec2, edge: Vec2, push: f32, axis_component: f32) -> Vec2 {
    let length = edge.length().min(UV_EDGE_LENGTH_CLAMP);
    if length <= f32::EPSILON {
        return Vec2::ZERO;
    }
    let sign = if axis_component > 0.0 { 1.0 } else { -1.0 };
    uv_edge / length * push * sign
}
