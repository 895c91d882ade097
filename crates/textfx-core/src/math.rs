/// Fast mathematical operations using SIMD-accelerated `glam` types.
///
/// The effect stages do all of their arithmetic with these types: [`Vec2`] for
/// bounding boxes and UV offsets, [`Vec3`] for vertex positions and [`Mat2`] for the
/// per-glyph rotation used by circular warping.
///
/// ```
/// use textfx_core::math::{Mat2, Vec2};
///
/// let rotate = Mat2::from_angle(std::f32::consts::FRAC_PI_2);
/// let p = rotate * Vec2::X;
/// assert!((p - Vec2::Y).length() < 1e-6);
/// ```
pub mod fast {
    pub use glam::*;
}

/// Packed vector types for GPU buffer uploads and byte-level comparison.
///
/// The `glam` SIMD types may carry alignment padding (`Vec4` is 16-byte aligned on SSE
/// targets), so vertex data that has to be viewed as raw bytes goes through these
/// `#[repr(C)]` types instead.
///
/// ```
/// use textfx_core::math::{PackedVec2, Vec2};
///
/// let packed = PackedVec2::from(Vec2::new(1.0, 2.0));
/// let bytes: &[u8] = bytemuck::bytes_of(&packed);
/// assert_eq!(bytes.len(), 8);
/// ```
pub mod packed {
    use bytemuck::{Pod, Zeroable};

    /// A 2D vector with guaranteed `#[repr(C)]` layout.
    #[repr(C)]
    #[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
    pub struct Vec2 {
        pub x: f32,
        pub y: f32,
    }

    /// A 3D vector with guaranteed `#[repr(C)]` layout (12 bytes, no padding).
    #[repr(C)]
    #[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
    pub struct Vec3 {
        pub x: f32,
        pub y: f32,
        pub z: f32,
    }

    /// A 4D vector with guaranteed `#[repr(C)]` layout.
    #[repr(C)]
    #[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
    pub struct Vec4 {
        pub x: f32,
        pub y: f32,
        pub z: f32,
        pub w: f32,
    }

    static_assertions::assert_eq_size!(Vec2, [f32; 2]);
    static_assertions::assert_eq_size!(Vec3, [f32; 3]);
    static_assertions::assert_eq_size!(Vec4, [f32; 4]);

    impl From<glam::Vec2> for Vec2 {
        fn from(v: glam::Vec2) -> Self {
            Self { x: v.x, y: v.y }
        }
    }

    impl From<glam::Vec3> for Vec3 {
        fn from(v: glam::Vec3) -> Self {
            Self {
                x: v.x,
                y: v.y,
                z: v.z,
            }
        }
    }

    impl From<glam::Vec4> for Vec4 {
        fn from(v: glam::Vec4) -> Self {
            Self {
                x: v.x,
                y: v.y,
                z: v.z,
                w: v.w,
            }
        }
    }

    impl From<Vec2> for glam::Vec2 {
        fn from(v: Vec2) -> Self {
            glam::Vec2::new(v.x, v.y)
        }
    }

    impl From<Vec3> for glam::Vec3 {
        fn from(v: Vec3) -> Self {
            glam::Vec3::new(v.x, v.y, v.z)
        }
    }

    impl From<Vec4> for glam::Vec4 {
        fn from(v: Vec4) -> Self {
            glam::Vec4::new(v.x, v.y, v.z, v.w)
        }
    }
}

pub use fast::*;
pub use packed::{Vec2 as PackedVec2, Vec3 as PackedVec3, Vec4 as PackedVec4};
