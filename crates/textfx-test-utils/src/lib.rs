//! Test utilities for textfx crates.
//!
//! - [`RecordingMeshBuilder`] - a [`MeshBuilder`](textfx_mesh::MeshBuilder) that records
//!   every call made to it
//! - [`StaticMaterialProvider`] - a material provider with a fixed table of handles
//! - [`fixtures`] - glyph quads laid out the way text layout produces them
//!
//! # Example
//!
//! ```rust
//! use textfx_effects::{EffectPipeline, EffectParameters};
//! use textfx_test_utils::{RecordingMeshBuilder, StaticMaterialProvider, fixtures};
//!
//! let mut mesh = RecordingMeshBuilder::from_quads(&fixtures::glyph_row(3, 8.0, 10.0));
//! let materials = StaticMaterialProvider::empty();
//! EffectPipeline::new(EffectParameters::new()).rebuild(&mut mesh, &materials);
//!
//! assert_eq!(mesh.count_stream_reads(), 1);
//! assert_eq!(mesh.count_triangles(), 6);
//! ```

pub mod fixtures;
pub mod mock_material;
pub mod mock_mesh;

pub use mock_material::StaticMaterialProvider;
pub use mock_mesh::{MeshCall, RecordingMeshBuilder};
