//! Circular text: lay each glyph along an arc.

use crate::params::CircularWarpParams;
use glam::{Mat2, Vec2};
use std::f32::consts::FRAC_PI_2;
use textfx_core::profiling::profile_function;
use textfx_mesh::{VertexStream, corner};

/// Move every glyph onto a circle of `radius`, rotating it about its own center.
///
/// A glyph centered at layout `x` lands at angle `π/2 - x·k/r + θ₀`. Each glyph moves
/// rigidly so its shape is preserved; z is never touched.
pub fn apply(params: &CircularWarpParams, stream: &mut VertexStream) {
    profile_function!();
    let radius = params.radius;
    if radius == 0.0 {
        return;
    }

    for glyph in stream.glyphs_mut() {
        let top_left = glyph[corner::TOP_LEFT].position_2d();
        let center = (top_left + glyph[corner::BOTTOM_RIGHT].position_2d()) * 0.5;
        let angle =
            FRAC_PI_2 - center.x * params.space_coefficient / radius + params.angle_offset;
        let on_circle = Vec2::new(angle.cos(), angle.sin()) * radius;
        let anchor = on_circle + Vec2::new(0.0, center.y - radius);
        let rotation = Mat2::from_angle(angle - FRAC_PI_2);

        for vertex in glyph.iter_mut() {
            let placed = anchor + rotation * (vertex.position_2d() - center);
            vertex.position.x = placed.x;
            vertex.position.y = placed.y;
        }
    }
}
