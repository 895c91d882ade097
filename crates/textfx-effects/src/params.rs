//! Effect configuration.
//!
//! Parameters are plain values owned by the pipeline and only replaced between rebuilds.
//! Out-of-range values are clamped by [`EffectParameters::sanitized`] at the start of each
//! rebuild rather than rejected.
//!
//! # Example
//!
//! ```
//! use textfx_effects::{EffectParameters, GradientParams, OutlineStrategy};
//! use textfx_mesh::Color32;
//! use glam::Vec2;
//!
//! let params = EffectParameters::new()
//!     .with_spacing(1.5)
//!     .with_gradient(GradientParams::two_color(Color32::WHITE, Color32::BLACK))
//!     .with_outline(2, Color32::BLACK, OutlineStrategy::Cpu)
//!     .with_shadow(Vec2::new(2.0, -2.0), Color32::rgba(0, 0, 0, 128));
//!
//! assert!(params.outline.enabled);
//! ```

use glam::Vec2;
use textfx_mesh::{Color, Color32};

/// Largest magnitude accepted for shadow and gradient offsets, per axis.
pub const MAX_OFFSET: f32 = 600.0;

/// Outline width range, in position units.
pub const MIN_OUTLINE_WIDTH: u8 = 1;
pub const MAX_OUTLINE_WIDTH: u8 = 10;

/// Shift every glyph right by `spacing * glyph_index`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SpacingParams {
    pub enabled: bool,
    pub spacing: f32,
}

/// Bend the text baseline onto a circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircularWarpParams {
    pub enabled: bool,
    /// Circle radius. Zero disables the warp.
    pub radius: f32,
    /// Arc length consumed per unit of horizontal layout distance.
    pub space_coefficient: f32,
    /// Extra rotation of the whole text around the circle, in radians.
    pub angle_offset: f32,
}

impl Default for CircularWarpParams {
    fn default() -> Self {
        Self {
            enabled: false,
            radius: 0.0,
            space_coefficient: 1.0,
            angle_offset: 0.0,
        }
    }
}

/// How a remapped color combines with the vertex's existing color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorBlend {
    /// `original + remap`, saturating.
    #[default]
    Additive,
    /// `lerp(original, remap, remap.a)` with alpha `max(original.a, remap.a)`.
    Overlap,
}

impl ColorBlend {
    pub fn combine(self, original: Color, remap: Color) -> Color {
        match self {
            ColorBlend::Additive => original.saturating_add(remap),
            ColorBlend::Overlap => original
                .lerp(remap, remap.a)
                .with_alpha(original.a.max(remap.a)),
        }
    }
}

/// Four corner colors interpolated bilinearly over a bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CornerGradient {
    pub top_left: Color32,
    pub top_right: Color32,
    pub bottom_left: Color32,
    pub bottom_right: Color32,
    /// Skews the normalized coordinate toward one side, each axis in `-1..=1`.
    pub offset: Vec2,
}

impl CornerGradient {
    /// Same color at every corner.
    pub const fn uniform(color: Color32) -> Self {
        Self {
            top_left: color,
            top_right: color,
            bottom_left: color,
            bottom_right: color,
            offset: Vec2::ZERO,
        }
    }

    pub const fn new(
        top_left: Color32,
        top_right: Color32,
        bottom_left: Color32,
        bottom_right: Color32,
    ) -> Self {
        Self {
            top_left,
            top_right,
            bottom_left,
            bottom_right,
            offset: Vec2::ZERO,
        }
    }

    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    /// Color at a normalized position (`0..=1` per axis, y up).
    pub fn sample(&self, normalized: Vec2) -> Color {
        let x = skew(normalized.x, self.offset.x);
        let y = skew(normalized.y, self.offset.y);
        let bottom = self.bottom_left.to_color().lerp(self.bottom_right.to_color(), x);
        let top = self.top_left.to_color().lerp(self.top_right.to_color(), x);
        bottom.lerp(top, y)
    }
}

impl Default for CornerGradient {
    fn default() -> Self {
        Self::uniform(Color32::WHITE)
    }
}

/// A positive offset pulls the coordinate toward 0, a negative one toward 1.
fn skew(t: f32, offset: f32) -> f32 {
    t - offset * if offset > 0.0 { t } else { 1.0 - t }
}

/// Recolor every vertex from its position inside the whole text's bounds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VertexColorParams {
    pub enabled: bool,
    pub corners: CornerGradient,
    pub blend: ColorBlend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GradientKind {
    #[default]
    None,
    /// Bottom to top.
    TwoColor,
    /// Bottom to middle to top, with a seam row inserted at `middle_position`.
    ThreeColor,
}

/// Vertical (and optionally horizontal) gradient tint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientParams {
    pub enabled: bool,
    pub kind: GradientKind,
    pub top: Color32,
    pub middle: Color32,
    pub bottom: Color32,
    pub left: Color32,
    pub right: Color32,
    /// Multiply a left to right gradient into the vertical one.
    pub horizontal: bool,
    /// Normalize per glyph instead of over the whole text.
    pub split: bool,
    /// Height of the middle seam as a fraction from the bottom.
    pub middle_position: f32,
    /// Shift of the sampling point, in position units.
    pub offset: Vec2,
}

impl Default for GradientParams {
    fn default() -> Self {
        Self {
            enabled: false,
            kind: GradientKind::None,
            top: Color32::WHITE,
            middle: Color32::WHITE,
            bottom: Color32::BLACK,
            left: Color32::WHITE,
            right: Color32::WHITE,
            horizontal: false,
            split: false,
            middle_position: 0.5,
            offset: Vec2::ZERO,
        }
    }
}

impl GradientParams {
    pub fn two_color(top: Color32, bottom: Color32) -> Self {
        Self {
            enabled: true,
            kind: GradientKind::TwoColor,
            top,
            bottom,
            ..Default::default()
        }
    }

    pub fn three_color(top: Color32, middle: Color32, bottom: Color32) -> Self {
        Self {
            enabled: true,
            kind: GradientKind::ThreeColor,
            top,
            middle,
            bottom,
            ..Default::default()
        }
    }

    pub fn with_horizontal(mut self, left: Color32, right: Color32) -> Self {
        self.horizontal = true;
        self.left = left;
        self.right = right;
        self
    }

    pub fn split(mut self, split: bool) -> Self {
        self.split = split;
        self
    }

    pub fn with_middle_position(mut self, middle_position: f32) -> Self {
        self.middle_position = middle_position;
        self
    }

    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    /// Whether this configuration changes anything.
    pub fn is_active(&self) -> bool {
        self.enabled && self.kind != GradientKind::None
    }

    /// Whether glyphs are split into two rows at the middle seam.
    pub fn has_seam(&self) -> bool {
        self.is_active() && self.kind == GradientKind::ThreeColor
    }
}

/// Offset copy of the whole mesh, recolored from the original text's bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowParams {
    pub enabled: bool,
    pub offset: Vec2,
    pub corners: CornerGradient,
    /// Multiply the shadow alpha by the source vertex alpha.
    pub use_source_alpha: bool,
}

impl Default for ShadowParams {
    fn default() -> Self {
        Self {
            enabled: false,
            offset: Vec2::new(1.0, -1.0),
            corners: CornerGradient::uniform(Color32::rgba(0, 0, 0, 128)),
            use_source_alpha: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutlineStrategy {
    /// Duplicate every glyph four times on the CPU.
    #[default]
    Cpu,
    /// Pack outline parameters into spare vertex channels for a companion shader.
    ChannelEncoded,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlineParams {
    pub enabled: bool,
    pub strategy: OutlineStrategy,
    pub color: Color32,
    /// Width in position units, `1..=10`.
    pub width: u8,
}

impl Default for OutlineParams {
    fn default() -> Self {
        Self {
            enabled: false,
            strategy: OutlineStrategy::Cpu,
            color: Color32::BLACK,
            width: 1,
        }
    }
}

impl OutlineParams {
    pub fn with_strategy(mut self, strategy: OutlineStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}

/// Configuration for every stage, owned by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EffectParameters {
    pub spacing: SpacingParams,
    pub circular: CircularWarpParams,
    pub gradient: GradientParams,
    pub vertex_color: VertexColorParams,
    pub outline: OutlineParams,
    pub shadow: ShadowParams,
}

impl EffectParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = SpacingParams {
            enabled: true,
            spacing,
        };
        self
    }

    pub fn with_circular_warp(
        mut self,
        radius: f32,
        space_coefficient: f32,
        angle_offset: f32,
    ) -> Self {
        self.circular = CircularWarpParams {
            enabled: true,
            radius,
            space_coefficient,
            angle_offset,
        };
        self
    }

    pub fn with_gradient(mut self, gradient: GradientParams) -> Self {
        self.gradient = gradient;
        self
    }

    pub fn with_vertex_color(mut self, corners: CornerGradient, blend: ColorBlend) -> Self {
        self.vertex_color = VertexColorParams {
            enabled: true,
            corners,
            blend,
        };
        self
    }

    pub fn with_outline(mut self, width: u8, color: Color32, strategy: OutlineStrategy) -> Self {
        self.outline = OutlineParams {
            enabled: true,
            strategy,
            color,
            width,
        };
        self
    }

    /// Uniformly colored shadow.
    pub fn with_shadow(self, offset: Vec2, color: Color32) -> Self {
        self.with_shadow_gradient(offset, CornerGradient::uniform(color))
    }

    pub fn with_shadow_gradient(mut self, offset: Vec2, corners: CornerGradient) -> Self {
        self.shadow = ShadowParams {
            enabled: true,
            offset,
            corners,
            use_source_alpha: true,
        };
        self
    }

    /// Copy with every value clamped into its supported range.
    ///
    /// Non-finite floats become the neutral value for their field.
    pub fn sanitized(&self) -> Self {
        let mut out = *self;

        out.spacing.spacing = finite_or_zero(out.spacing.spacing);

        out.circular.radius = finite_or_zero(out.circular.radius);
        out.circular.space_coefficient = finite_or_zero(out.circular.space_coefficient);
        out.circular.angle_offset = finite_or_zero(out.circular.angle_offset);

        out.gradient.offset = clamp_offset(out.gradient.offset, MAX_OFFSET);
        out.gradient.middle_position = if out.gradient.middle_position.is_finite() {
            out.gradient.middle_position.clamp(0.01, 0.99)
        } else {
            0.5
        };

        out.vertex_color.corners.offset = clamp_offset(out.vertex_color.corners.offset, 1.0);

        out.shadow.offset = clamp_offset(out.shadow.offset, MAX_OFFSET);
        out.shadow.corners.offset = clamp_offset(out.shadow.corners.offset, 1.0);

        out.outline.width = out.outline.width.clamp(MIN_OUTLINE_WIDTH, MAX_OUTLINE_WIDTH);

        if out != *self {
            tracing::debug!("clamped effect parameters into supported range");
        }
        out
    }
}

fn finite_or_zero(v: f32) -> f32 {
    if v.is_finite() { v } else { 0.0 }
}

fn clamp_offset(v: Vec2, limit: f32) -> Vec2 {
    Vec2::new(
        finite_or_zero(v.x).clamp(-limit, limit),
        finite_or_zero(v.y).clamp(-limit, limit),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_clamps_offsets_and_width() {
        let params = EffectParameters::new()
            .with_shadow(Vec2::new(900.0, -1200.0), Color32::BLACK)
            .with_outline(40, Color32::WHITE, OutlineStrategy::Cpu)
            .with_gradient(
                GradientParams::two_color(Color32::WHITE, Color32::BLACK)
                    .with_offset(Vec2::new(-601.0, 3.0)),
            )
            .sanitized();

        assert_eq!(params.shadow.offset, Vec2::new(600.0, -600.0));
        assert_eq!(params.gradient.offset, Vec2::new(-600.0, 3.0));
        assert_eq!(params.outline.width, MAX_OUTLINE_WIDTH);
    }

    #[test]
    fn test_sanitize_zero_width_becomes_one() {
        let params = EffectParameters::new()
            .with_outline(0, Color32::WHITE, OutlineStrategy::Cpu)
            .sanitized();
        assert_eq!(params.outline.width, 1);
    }

    #[test]
    fn test_sanitize_non_finite() {
        let mut params = EffectParameters::new().with_spacing(f32::NAN);
        params.gradient.middle_position = f32::INFINITY;
        params.vertex_color.corners.offset = Vec2::new(f32::NAN, 5.0);
        let params = params.sanitized();
        assert_eq!(params.spacing.spacing, 0.0);
        assert_eq!(params.gradient.middle_position, 0.5);
        assert_eq!(params.vertex_color.corners.offset, Vec2::new(0.0, 1.0));
    }

    #[test]
    fn test_sanitize_is_stable() {
        let params = EffectParameters::new().with_spacing(2.0).with_circular_warp(100.0, 1.0, 0.0);
        assert_eq!(params.sanitized(), params);
    }

    #[test]
    fn test_corner_gradient_corners() {
        let g = CornerGradient::new(
            Color32::WHITE,
            Color32::rgb(255, 0, 0),
            Color32::BLACK,
            Color32::rgb(0, 0, 255),
        );
        assert_eq!(g.sample(Vec2::new(0.0, 1.0)).to_color32(), Color32::WHITE);
        assert_eq!(g.sample(Vec2::new(1.0, 1.0)).to_color32(), Color32::rgb(255, 0, 0));
        assert_eq!(g.sample(Vec2::new(0.0, 0.0)).to_color32(), Color32::BLACK);
        assert_eq!(g.sample(Vec2::new(1.0, 0.0)).to_color32(), Color32::rgb(0, 0, 255));
    }

    #[test]
    fn test_skew_extremes() {
        assert_eq!(skew(0.7, 1.0), 0.0);
        assert_eq!(skew(0.7, -1.0), 1.0);
        assert_eq!(skew(0.7, 0.0), 0.7);
    }

    #[test]
    fn test_overlap_blend_alpha() {
        let original = Color::rgba(1.0, 0.0, 0.0, 0.25);
        let remap = Color::rgba(0.0, 0.0, 1.0, 0.5);
        let out = ColorBlend::Overlap.combine(original, remap);
        assert_eq!(out, Color::rgba(0.5, 0.0, 0.5, 0.5));
    }

    #[test]
    fn test_additive_blend_saturates() {
        let out = ColorBlend::Additive.combine(Color::WHITE, Color::rgba(0.5, 0.5, 0.5, 0.5));
        assert_eq!(out, Color::WHITE);
    }
}
