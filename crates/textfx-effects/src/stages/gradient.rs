//! Two- and three-color gradient tint.
//!
//! The gradient is sampled at each vertex's position normalized against either the
//! whole text's bounds or, in split mode, the bounds of the glyph it belongs to. The
//! result multiplies the existing vertex color.
//!
//! Three-color gradients need a vertex row where the middle color sits, otherwise the
//! middle color would only ever be reached by interpolating across a whole glyph. Every
//! glyph is therefore cut into an upper and a lower row at the seam height before
//! coloring. A glyph the seam does not cross gets a zero-height row so that all glyphs
//! keep the same vertex count.

use crate::params::{GradientKind, GradientParams};
use glam::Vec2;
use textfx_core::profiling::profile_function;
use textfx_mesh::{BoundingBox, Color, MeshVertex, Topology, VertexStream};

pub fn apply(params: &GradientParams, stream: &mut VertexStream, scratch: &mut Vec<MeshVertex>) {
    profile_function!();
    if !params.is_active() || stream.is_empty() {
        return;
    }

    if params.has_seam() {
        insert_seams(params, stream, scratch);
    }

    if params.split {
        for glyph in stream.glyphs_mut() {
            if let Some(bounds) = BoundingBox::of(glyph) {
                tint(params, &bounds, glyph);
            }
        }
    } else if let Some(bounds) = BoundingBox::of(stream.vertices()) {
        tint(params, &bounds, stream.vertices_mut());
    }
}

fn tint(params: &GradientParams, bounds: &BoundingBox, vertices: &mut [MeshVertex]) {
    for vertex in vertices {
        let normalized = bounds.normalize(vertex.position_2d() - params.offset);
        let color = gradient_color(params, normalized) * vertex.color.to_color();
        vertex.color = color.to_color32();
    }
}

/// Gradient color at a normalized position.
pub fn gradient_color(params: &GradientParams, normalized: Vec2) -> Color {
    let top = params.top.to_color();
    let bottom = params.bottom.to_color();
    let y = normalized.y;

    let vertical = match params.kind {
        GradientKind::None => Color::WHITE,
        GradientKind::TwoColor => bottom.lerp(top, y),
        GradientKind::ThreeColor => {
            let middle = params.middle.to_color();
            let seam = params.middle_position;
            if y < seam {
                bottom.lerp(middle, y / seam)
            } else {
                middle.lerp(top, (y - seam) / (1.0 - seam))
            }
        }
    };

    if params.horizontal {
        vertical * params.left.to_color().lerp(params.right.to_color(), normalized.x)
    } else {
        vertical
    }
}

/// Split every glyph into two rows at the middle seam.
///
/// Quads become `[TL, TR, MR, ML] [ML, MR, BR, BL]`; triangle-stream glyphs become the
/// same two rows as triangle pairs. A stream that is already split is left alone.
fn insert_seams(params: &GradientParams, stream: &mut VertexStream, scratch: &mut Vec<MeshVertex>) {
    let topology = stream.topology();
    let stride = topology.glyph_vertices();
    if stream.glyph_stride() != stride {
        tracing::debug!(stride = stream.glyph_stride(), "glyphs already split, skipping seam");
        return;
    }
    let Some(text_bounds) = BoundingBox::of(stream.vertices()) else {
        return;
    };

    scratch.clear();
    scratch.reserve(stream.len() * 2);
    let glyphs = stream.vertices().chunks_exact(stride);
    let tail = glyphs.remainder();
    for glyph in glyphs {
        let (tl, tr, br, bl) = match topology {
            Topology::Quads => (glyph[0], glyph[1], glyph[2], glyph[3]),
            Topology::Triangles => (glyph[0], glyph[1], glyph[2], glyph[4]),
        };
        let frame = if params.split {
            BoundingBox::of(glyph).unwrap_or(text_bounds)
        } else {
            text_bounds
        };
        let seam_y = frame.min.y + params.offset.y + params.middle_position * frame.size().y;

        let ml = bl.lerp(&tl, seam_fraction(&bl, &tl, seam_y));
        let mr = br.lerp(&tr, seam_fraction(&br, &tr, seam_y));

        match topology {
            Topology::Quads => scratch.extend_from_slice(&[tl, tr, mr, ml, ml, mr, br, bl]),
            Topology::Triangles => scratch.extend_from_slice(&[
                tl, tr, mr, mr, ml, tl, //
                ml, mr, br, br, bl, ml,
            ]),
        }
    }
    scratch.extend_from_slice(tail);

    stream.swap_vertices(scratch);
    stream.set_glyph_stride(stride * 2);
    stream.rebuild_indices();
}

/// Where `y` falls between `bottom` and `top`, clamped to the edge.
fn seam_fraction(bottom: &MeshVertex, top: &MeshVertex, y: f32) -> f32 {
    let height = top.position.y - bottom.position.y;
    if height.abs() <= f32::EPSILON {
        return 0.0;
    }
    ((y - bottom.position.y) / height).clamp(0.0, 1.0)
}
