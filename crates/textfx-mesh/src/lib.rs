//! textfx Mesh - the vertex data contract shared by every effect stage.
//!
//! Text layout produces one quad per visible glyph. This crate defines what a vertex looks
//! like ([`MeshVertex`]), how quads and triangle streams are laid out ([`VertexStream`],
//! [`Topology`]) and the boundary to whatever owns the rendered mesh ([`MeshBuilder`]).
//!
//! ## Quick Start
//!
//! ```rust
//! use textfx_mesh::{Color32, MeshBuilder, MeshVertex, SimpleMeshBuilder};
//! use textfx_core::math::{Vec2, Vec3};
//!
//! let quad = [
//!     MeshVertex::new(Vec3::new(0.0, 10.0, 0.0), Vec2::new(0.0, 1.0), Color32::WHITE),
//!     MeshVertex::new(Vec3::new(10.0, 10.0, 0.0), Vec2::new(1.0, 1.0), Color32::WHITE),
//!     MeshVertex::new(Vec3::new(10.0, 0.0, 0.0), Vec2::new(1.0, 0.0), Color32::WHITE),
//!     MeshVertex::new(Vec3::new(0.0, 0.0, 0.0), Vec2::new(0.0, 0.0), Color32::WHITE),
//! ];
//! let builder = SimpleMeshBuilder::from_quads(&quad);
//!
//! let mut stream = Vec::new();
//! builder.vertex_stream(&mut stream);
//! assert_eq!(stream.len(), 6);
//! ```

pub mod bounds;
pub mod builder;
pub mod color;
pub mod stream;
pub mod vertex;

pub use bounds::BoundingBox;
pub use builder::{MeshBuilder, SimpleMeshBuilder};
pub use color::{Color, Color32};
pub use stream::{Topology, VertexStream};
pub use vertex::{MeshVertex, PackedMeshVertex, corner, pack_vertices};
