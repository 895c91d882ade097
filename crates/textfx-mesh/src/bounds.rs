//! Axis-aligned bounds over vertex positions.

use crate::MeshVertex;
use textfx_core::math::Vec2;

/// Axis-aligned rectangle over a set of vertex positions.
///
/// Used as the normalization frame for every bounding-box-relative color stage.
/// Never stored across rebuilds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Vec2,
    pub max: Vec2,
}

impl BoundingBox {
    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Bounds of the XY positions of `vertices`, or `None` if the slice is empty.
    pub fn of(vertices: &[MeshVertex]) -> Option<Self> {
        Self::of_points(vertices.iter().map(MeshVertex::position_2d))
    }

    /// Bounds of arbitrary points, or `None` if there are none.
    pub fn of_points(points: impl IntoIterator<Item = Vec2>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let mut bounds = Self::new(first, first);
        for p in points {
            bounds.min = bounds.min.min(p);
            bounds.max = bounds.max.max(p);
        }
        Some(bounds)
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Position of `p` inside the box, each axis clamped to `0..=1`.
    ///
    /// An axis with zero extent maps to 0.
    pub fn normalize(&self, p: Vec2) -> Vec2 {
        let size = self.size();
        let axis = |value: f32, min: f32, extent: f32| {
            if extent > 0.0 {
                ((value - min) / extent).clamp(0.0, 1.0)
            } else {
                0.0
            }
        };
        Vec2::new(axis(p.x, self.min.x, size.x), axis(p.y, self.min.y, size.y))
    }
}
