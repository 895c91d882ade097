//! The individual mesh effects.
//!
//! Each stage rewrites a [`VertexStream`] in place. Stages that change vertex count write
//! into a scratch buffer and swap it in, so a pipeline can reuse allocations across
//! rebuilds.

pub mod circular;
pub mod gradient;
pub mod outline;
pub mod shadow;
pub mod spacing;
pub mod vertex_color;

use crate::params::{
    CircularWarpParams, GradientParams, OutlineParams, OutlineStrategy, ShadowParams,
    SpacingParams, VertexColorParams,
};
use textfx_mesh::{MeshVertex, VertexStream};

/// One enabled effect with its parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stage {
    Spacing(SpacingParams),
    CircularWarp(CircularWarpParams),
    Gradient(GradientParams),
    VertexColor(VertexColorParams),
    Outline(OutlineParams),
    Shadow(ShadowParams),
}

impl Stage {
    /// Run this stage over `stream`. `scratch` is a spare buffer with no meaning
    /// between calls.
    pub fn apply(&self, stream: &mut VertexStream, scratch: &mut Vec<MeshVertex>) {
        match self {
            Stage::Spacing(params) => spacing::apply(params, stream),
            Stage::CircularWarp(params) => circular::apply(params, stream),
            Stage::Gradient(params) => gradient::apply(params, stream, scratch),
            Stage::VertexColor(params) => vertex_color::apply(params, stream),
            Stage::Outline(params) => match params.strategy {
                OutlineStrategy::Cpu => outline::apply_cpu(params, stream, scratch),
                OutlineStrategy::ChannelEncoded => outline::apply_channel_encoded(params, stream),
            },
            Stage::Shadow(params) => shadow::apply(params, stream, scratch),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Stage::Spacing(_) => "spacing",
            Stage::CircularWarp(_) => "circular_warp",
            Stage::Gradient(_) => "gradient",
            Stage::VertexColor(_) => "vertex_color",
            Stage::Outline(OutlineParams {
                strategy: OutlineStrategy::Cpu,
                ..
            }) => "outline_cpu",
            Stage::Outline(_) => "outline_channel_encoded",
            Stage::Shadow(_) => "shadow",
        }
    }
}
