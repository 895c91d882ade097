//! Four-corner vertex color remap over the whole text.

use crate::params::VertexColorParams;
use textfx_core::profiling::profile_function;
use textfx_mesh::{BoundingBox, VertexStream};

/// Recolor each vertex from the corner gradient sampled at its position in the text's
/// bounds, combined with the existing color by the configured blend.
pub fn apply(params: &VertexColorParams, stream: &mut VertexStream) {
    profile_function!();
    let Some(bounds) = BoundingBox::of(stream.vertices()) else {
        return;
    };

    for vertex in stream.vertices_mut() {
        let remap = params.corners.sample(bounds.normalize(vertex.position_2d()));
        vertex.color = params
            .blend
            .combine(vertex.color.to_color(), remap)
            .to_color32();
    }
}
