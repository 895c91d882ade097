//! Drop shadow: an offset, recolored copy of the whole mesh.

use crate::params::ShadowParams;
use textfx_core::profiling::profile_function;
use textfx_mesh::{BoundingBox, MeshVertex, VertexStream};

/// Append an offset copy of every vertex and draw it behind the original.
///
/// Shadow colors come from the corner gradient sampled against the bounds of the
/// *undisplaced* text, so the gradient lines up with the live text regardless of the
/// offset. The copies' triangles go first in the index buffer; the original triangles
/// follow unchanged.
pub fn apply(params: &ShadowParams, stream: &mut VertexStream, scratch: &mut Vec<MeshVertex>) {
    profile_function!();
    let Some(bounds) = BoundingBox::of(stream.vertices()) else {
        return;
    };
    let original_count = stream.len() as u32;

    scratch.clear();
    scratch.extend(stream.vertices().iter().map(|vertex| {
        let mut color = params.corners.sample(bounds.normalize(vertex.position_2d()));
        if params.use_source_alpha {
            color.a *= vertex.color.to_color().a;
        }
        vertex.translated(params.offset).with_color(color.to_color32())
    }));
    stream.vertex_buffer_mut().extend_from_slice(scratch);

    let indices = stream.indices_mut();
    let original_indices = indices.len();
    indices.extend_from_within(..);
    for index in &mut indices[..original_indices] {
        *index += original_count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::CornerGradient;
    use glam::{Vec2, Vec3};
    use textfx_mesh::{Color32, Topology};

    fn glyph() -> VertexStream {
        let vertices = [(0.0, 10.0), (10.0, 10.0), (10.0, 0.0), (0.0, 0.0)]
            .map(|(x, y)| MeshVertex::new(Vec3::new(x, y, 0.0), Vec2::ZERO, Color32::WHITE))
            .to_vec();
        VertexStream::from_vertices(Topology::Quads, vertices)
    }

    fn shadow(offset: Vec2) -> ShadowParams {
        ShadowParams {
            enabled: true,
            offset,
            corners: CornerGradient::new(
                Color32::rgb(255, 0, 0),
                Color32::rgb(0, 255, 0),
                Color32::rgb(0, 0, 255),
                Color32::rgb(255, 255, 255),
            ),
            use_source_alpha: true,
        }
    }

    #[test]
    fn test_duplicates_and_offsets() {
        let mut stream = glyph();
        let original = stream.vertices().to_vec();
        apply(&shadow(Vec2::new(2.0, -3.0)), &mut stream, &mut Vec::new());

        assert_eq!(stream.len(), 8);
        assert_eq!(&stream.vertices()[..4], &original[..]);
        for (copy, source) in stream.vertices()[4..].iter().zip(&original) {
            assert_eq!(copy.position, source.position + Vec3::new(2.0, -3.0, 0.0));
            assert_eq!(copy.uv0, source.uv0);
        }
    }

    #[test]
    fn test_shadow_triangles_drawn_first() {
        let mut stream = glyph();
        apply(&shadow(Vec2::new(1.0, 1.0)), &mut stream, &mut Vec::new());
        assert_eq!(stream.indices(), &[4, 5, 6, 6, 7, 4, 0, 1, 2, 2, 3, 0]);
    }

    #[test]
    fn test_colors_independent_of_offset() {
        let mut near = glyph();
        let mut far = glyph();
        apply(&shadow(Vec2::new(1.0, 1.0)), &mut near, &mut Vec::new());
        apply(&shadow(Vec2::new(-250.0, 400.0)), &mut far, &mut Vec::new());
        let colors = |s: &VertexStream| s.vertices().iter().map(|v| v.color).collect::<Vec<_>>();
        assert_eq!(colors(&near), colors(&far));
        assert_eq!(near.vertices()[4].color, Color32::rgb(255, 0, 0));
        assert_eq!(near.vertices()[6].color, Color32::rgb(255, 255, 255));
    }

    #[test]
    fn test_source_alpha() {
        let mut stream = glyph();
        for v in stream.vertices_mut() {
            v.color = Color32::rgba(255, 255, 255, 0);
        }
        apply(&shadow(Vec2::ONE), &mut stream, &mut Vec::new());
        assert!(stream.vertices()[4..].iter().all(|v| v.color.a == 0));

        let mut stream = glyph();
        for v in stream.vertices_mut() {
            v.color = Color32::rgba(255, 255, 255, 0);
        }
        let params = ShadowParams {
            use_source_alpha: false,
            ..shadow(Vec2::ONE)
        };
        apply(&params, &mut stream, &mut Vec::new());
        assert!(stream.vertices()[4..].iter().all(|v| v.color.a == 255));
    }

    #[test]
    fn test_empty_stream() {
        let mut stream = VertexStream::new(Topology::Triangles);
        apply(&shadow(Vec2::ONE), &mut stream, &mut Vec::new());
        assert!(stream.is_empty());
        assert!(stream.indices().is_empty());
    }
}
