//! Vertex format produced by text layout and rewritten by the effect stages.

use crate::Color32;
use bytemuck::{Pod, Zeroable};
use textfx_core::math::{PackedVec2, PackedVec3, PackedVec4, Vec2, Vec3, Vec4};

/// Corner indices inside a glyph quad.
///
/// Layout emits each glyph as four vertices in this fixed winding.
pub mod corner {
    pub const TOP_LEFT: usize = 0;
    pub const TOP_RIGHT: usize = 1;
    pub const BOTTOM_RIGHT: usize = 2;
    pub const BOTTOM_LEFT: usize = 3;

    /// Vertices per quad.
    pub const QUAD: usize = 4;
    /// Vertices per glyph in triangle-stream form (two unshared triangles).
    pub const TRIANGLE_PAIR: usize = 6;

    /// Quad corner feeding each slot of a glyph's triangle stream.
    pub const TRIANGLE_ORDER: [usize; TRIANGLE_PAIR] =
        [TOP_LEFT, TOP_RIGHT, BOTTOM_RIGHT, BOTTOM_RIGHT, BOTTOM_LEFT, TOP_LEFT];
}

/// A single mesh vertex.
///
/// Plain value type; stages copy vertices freely between buffers. `uv1`, `uv2`, `uv3`,
/// `normal` and `tangent` are otherwise unused by text and double as parameter channels
/// for the channel-encoded outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshVertex {
    pub position: Vec3,
    pub normal: Vec3,
    pub tangent: Vec4,
    pub uv0: Vec2,
    pub uv1: Vec2,
    pub uv2: Vec2,
    pub uv3: Vec2,
    pub color: Color32,
}

impl Default for MeshVertex {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            normal: Vec3::NEG_Z,
            tangent: Vec4::new(1.0, 0.0, 0.0, -1.0),
            uv0: Vec2::ZERO,
            uv1: Vec2::ZERO,
            uv2: Vec2::ZERO,
            uv3: Vec2::ZERO,
            color: Color32::WHITE,
        }
    }
}

impl MeshVertex {
    /// Create a vertex with the given position, primary UV and color.
    pub fn new(position: Vec3, uv0: Vec2, color: Color32) -> Self {
        Self {
            position,
            uv0,
            color,
            ..Default::default()
        }
    }

    /// XY part of the position.
    #[inline]
    pub fn position_2d(&self) -> Vec2 {
        self.position.truncate()
    }

    /// Copy of this vertex moved by `offset` in the XY plane.
    #[inline]
    pub fn translated(mut self, offset: Vec2) -> Self {
        self.position += offset.extend(0.0);
        self
    }

    /// Copy of this vertex with a different color.
    #[inline]
    pub fn with_color(mut self, color: Color32) -> Self {
        self.color = color;
        self
    }

    /// Interpolate every channel between `self` and `other`.
    ///
    /// Used to synthesize vertices on an edge between two existing ones.
    pub fn lerp(&self, other: &MeshVertex, t: f32) -> MeshVertex {
        MeshVertex {
            position: self.position.lerp(other.position, t),
            normal: self.normal.lerp(other.normal, t),
            tangent: self.tangent.lerp(other.tangent, t),
            uv0: self.uv0.lerp(other.uv0, t),
            uv1: self.uv1.lerp(other.uv1, t),
            uv2: self.uv2.lerp(other.uv2, t),
            uv3: self.uv3.lerp(other.uv3, t),
            color: self.color.lerp(other.color, t),
        }
    }

    /// Flatten into the `#[repr(C)]` upload layout.
    pub fn pack(&self) -> PackedMeshVertex {
        PackedMeshVertex {
            position: self.position.into(),
            normal: self.normal.into(),
            tangent: self.tangent.into(),
            uv0: self.uv0.into(),
            uv1: self.uv1.into(),
            uv2: self.uv2.into(),
            uv3: self.uv3.into(),
            color: [self.color.r, self.color.g, self.color.b, self.color.a],
        }
    }
}

/// `#[repr(C)]` vertex layout for GPU upload.
///
/// ```text
/// Offset | Field    | Size
/// -------|----------|------
/// 0      | position | 12
/// 12     | normal   | 12
/// 24     | tangent  | 16
/// 40     | uv0      | 8
/// 48     | uv1      | 8
/// 56     | uv2      | 8
/// 64     | uv3      | 8
/// 72     | color    | 4
/// Total: 76 bytes
/// ```
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct PackedMeshVertex {
    pub position: PackedVec3,
    pub normal: PackedVec3,
    pub tangent: PackedVec4,
    pub uv0: PackedVec2,
    pub uv1: PackedVec2,
    pub uv2: PackedVec2,
    pub uv3: PackedVec2,
    pub color: [u8; 4],
}

static_assertions::const_assert_eq!(std::mem::size_of::<PackedMeshVertex>(), 76);

/// Pack a vertex slice for upload.
///
/// The byte view of the result (`bytemuck::cast_slice`) is what downstream caches diff
/// against, so two rebuilds are identical exactly when these bytes are.
pub fn pack_vertices(vertices: &[MeshVertex]) -> Vec<PackedMeshVertex> {
    vertices.iter().map(MeshVertex::pack).collect()
}
