//! textfx Effects - outline, gradient, shadow, vertex color, spacing and circular warp
//! for text meshes.
//!
//! Text layout hands over one quad per glyph. An [`EffectPipeline`] reads that mesh from a
//! [`MeshBuilder`](textfx_mesh::MeshBuilder), runs every enabled stage in a fixed order and
//! writes the result back. [`EffectHost`] adds dirty tracking so the owner only rebuilds
//! when content or parameters change.
//!
//! ## Quick Start
//!
//! ```rust
//! use textfx_effects::{EffectHost, EffectParameters, NoMaterials, OutlineStrategy};
//! use textfx_mesh::{Color32, MeshVertex, SimpleMeshBuilder};
//! use glam::{Vec2, Vec3};
//!
//! let glyph = [(0.0, 10.0), (8.0, 10.0), (8.0, 0.0), (0.0, 0.0)]
//!     .map(|(x, y)| MeshVertex::new(Vec3::new(x, y, 0.0), Vec2::ZERO, Color32::WHITE));
//! let mut mesh = SimpleMeshBuilder::from_quads(&glyph);
//!
//! let mut host = EffectHost::new(
//!     EffectParameters::new().with_outline(2, Color32::BLACK, OutlineStrategy::Cpu),
//! );
//! let output = host.rebuild_if_dirty(&mut mesh, &NoMaterials).unwrap();
//! assert_eq!(output.vertex_count, 20);
//! ```
//!
//! ## Stages
//!
//! | Stage | Effect |
//! |-------|--------|
//! | spacing | shifts glyph `i` right by `spacing * i` |
//! | circular warp | bends the baseline onto a circle |
//! | gradient | two- or three-color tint, per text or per glyph |
//! | vertex color | four-corner color remap over the text bounds |
//! | outline | CPU duplication or channel-encoded for a companion shader |
//! | shadow | offset, recolored copy drawn behind the text |

pub mod error;
pub mod host;
pub mod material;
pub mod params;
pub mod pipeline;
pub mod stages;

pub use error::{EffectError, EffectResult};
pub use host::{DirtyFlags, EffectHost};
pub use material::{MaterialHandle, MaterialKind, MaterialProvider, NoMaterials};
pub use params::{
    ColorBlend, CornerGradient, CircularWarpParams, EffectParameters, GradientKind,
    GradientParams, OutlineParams, OutlineStrategy, ShadowParams, SpacingParams,
    VertexColorParams,
};
pub use pipeline::{EffectPipeline, RebuildOutput, ScratchPool};
pub use stages::Stage;
