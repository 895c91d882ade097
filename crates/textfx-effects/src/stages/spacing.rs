//! Letter spacing.

use crate::params::SpacingParams;
use textfx_core::profiling::profile_function;
use textfx_mesh::VertexStream;

/// Move glyph `i` right by `spacing * i`. Glyph 0 never moves.
///
/// Must run before anything that measures bounds.
pub fn apply(params: &SpacingParams, stream: &mut VertexStream) {
    profile_function!();
    if params.spacing == 0.0 {
        return;
    }
    for (index, glyph) in stream.glyphs_mut().enumerate() {
        let shift = params.spacing * index as f32;
        for vertex in glyph {
            vertex.position.x += shift;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Vec2, Vec3};
    use textfx_mesh::{Color32, MeshVertex, Topology};

    fn glyphs_at_origin(count: usize) -> VertexStream {
        let quad = [(0.0, 1.0), (1.0, 1.0), (1.0, 0.0), (0.0, 0.0)];
        let vertices = (0..count)
            .flat_map(|_| quad.iter())
            .map(|&(x, y)| MeshVertex::new(Vec3::new(x, y, 0.0), Vec2::ZERO, Color32::WHITE))
            .collect();
        VertexStream::from_vertices(Topology::Quads, vertices)
    }

    #[test]
    fn test_spacing_three_glyphs() {
        let mut stream = glyphs_at_origin(3);
        apply(&SpacingParams { enabled: true, spacing: 2.0 }, &mut stream);
        let origins: Vec<f32> = stream
            .vertices()
            .chunks(4)
            .map(|q| q[3].position.x)
            .collect();
        assert_eq!(origins, vec![0.0, 2.0, 4.0]);
    }

    #[test]
    fn test_negative_spacing_keeps_first_glyph() {
        let mut stream = glyphs_at_origin(4);
        let before = stream.vertices().to_vec();
        apply(&SpacingParams { enabled: true, spacing: -1.5 }, &mut stream);
        assert_eq!(&stream.vertices()[..4], &before[..4]);
        for (i, (after, before)) in stream.vertices().iter().zip(&before).enumerate() {
            let glyph = (i / 4) as f32;
            assert_eq!(after.position.x, before.position.x - 1.5 * glyph);
            assert_eq!(after.position.y, before.position.y);
        }
    }

    #[test]
    fn test_partial_glyph_untouched() {
        let mut stream = glyphs_at_origin(2);
        stream.vertex_buffer_mut().truncate(6);
        let before = stream.vertices().to_vec();
        apply(&SpacingParams { enabled: true, spacing: 3.0 }, &mut stream);
        assert_eq!(&stream.vertices()[4..], &before[4..]);
    }

    #[test]
    fn test_empty_stream() {
        let mut stream = VertexStream::new(Topology::Quads);
        apply(&SpacingParams { enabled: true, spacing: 3.0 }, &mut stream);
        assert!(stream.is_empty());
    }
}
