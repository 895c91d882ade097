//! Glyph quads in layout order: `TL, TR, BR, BL`, y up.

use glam::{Vec2, Vec3};
use textfx_mesh::{Color32, MeshVertex};

/// One white glyph quad with its bottom-left corner at `origin`. UVs span `0..=1`.
pub fn glyph(origin: Vec2, width: f32, height: f32) -> [MeshVertex; 4] {
    glyph_colored(origin, width, height, Color32::WHITE)
}

pub fn glyph_colored(origin: Vec2, width: f32, height: f32, color: Color32) -> [MeshVertex; 4] {
    [
        (Vec2::new(0.0, height), Vec2::new(0.0, 1.0)),
        (Vec2::new(width, height), Vec2::new(1.0, 1.0)),
        (Vec2::new(width, 0.0), Vec2::new(1.0, 0.0)),
        (Vec2::ZERO, Vec2::ZERO),
    ]
    .map(|(corner, uv)| {
        let p = origin + corner;
        MeshVertex::new(Vec3::new(p.x, p.y, 0.0), uv, color)
    })
}

/// `count` glyphs on the baseline, advancing by `width` plus a gap of 2.
pub fn glyph_row(count: usize, width: f32, height: f32) -> Vec<MeshVertex> {
    (0..count)
        .flat_map(|i| glyph(Vec2::new(i as f32 * (width + 2.0), 0.0), width, height))
        .collect()
}

/// A row whose glyphs alternate in height and color, for tests that need glyphs
/// to differ.
pub fn ragged_row(count: usize) -> Vec<MeshVertex> {
    const COLORS: [Color32; 3] = [
        Color32::WHITE,
        Color32::rgba(255, 64, 0, 255),
        Color32::rgba(32, 128, 255, 200),
    ];
    (0..count)
        .flat_map(|i| {
            let height = if i % 2 == 0 { 12.0 } else { 7.0 };
            glyph_colored(Vec2::new(i as f32 * 9.0, (i % 3) as f32), 7.0, height, COLORS[i % 3])
        })
        .collect()
}
