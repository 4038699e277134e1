//! 4D vector type.

use crate::vector::impl_vector;
use crate::Vec3;

/// A 4D vector for homogeneous coordinates and RGBA colors.
///
/// ```rust
/// use gmath_math::{Vec3, Vec4};
///
/// let rgba = Vec4::new(1.0, 0.5, 0.25, 1.0);
/// assert_eq!(rgba.truncate(), Vec3::new(1.0, 0.5, 0.25));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vec4 {
    /// X component (R for RGBA)
    pub x: f32,
    /// Y component (G for RGBA)
    pub y: f32,
    /// Z component (B for RGBA)
    pub z: f32,
    /// W component (A for RGBA)
    pub w: f32,
}

impl Vec4 {
    /// Unit X vector.
    pub const X: Self = Self::new(1.0, 0.0, 0.0, 0.0);

    /// Unit Y vector.
    pub const Y: Self = Self::new(0.0, 1.0, 0.0, 0.0);

    /// Unit Z vector.
    pub const Z: Self = Self::new(0.0, 0.0, 1.0, 0.0);

    /// Unit W vector.
    pub const W: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Drops the `w` component.
    #[inline]
    pub const fn truncate(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}

impl_vector!(Vec4, 4, Mat4, glam::Vec4, { x: 0, y: 1, z: 2, w: 3 });
