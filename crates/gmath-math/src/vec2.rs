//! 2D vector type.

use crate::vector::impl_vector;
use crate::Vec3;

/// A 2D vector for texture coordinates, screen positions and planar geometry.
///
/// ```rust
/// use gmath_math::Vec2;
///
/// let uv = Vec2::new(0.25, 0.75);
/// assert_eq!(uv.perp_dot(Vec2::X), -0.75);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vec2 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
}

impl Vec2 {
    /// Unit X vector (1, 0).
    pub const X: Self = Self::new(1.0, 0.0);

    /// Unit Y vector (0, 1).
    pub const Y: Self = Self::new(0.0, 1.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// 2D cross product (perp-dot): `self.x * other.y - other.x * self.y`.
    ///
    /// Equals the z component of the 3D cross product of the two vectors
    /// lifted to `z = 0`.
    #[inline]
    pub fn perp_dot(self, other: Self) -> f32 {
        self.x * other.y - other.x * self.y
    }

    /// Counter-clockwise perpendicular vector `(-y, x)`.
    #[inline]
    pub const fn perp(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Appends a `z` component.
    #[inline]
    pub const fn extend(self, z: f32) -> Vec3 {
        Vec3::new(self.x, self.y, z)
    }
}

impl_vector!(Vec2, 2, Mat2, glam::Vec2, { x: 0, y: 1 });
