//! 3D vector type.
//!
//! [`Vec3`] represents positions, directions, normals and RGB/XYZ triplets.
//!
//! # Usage
//!
//! ```rust
//! use gmath_math::Vec3;
//!
//! let a = Vec3::X;
//! let b = Vec3::Y;
//! assert_eq!(a.cross(b), Vec3::Z);
//!
//! let scaled = (a + b) * 2.0;
//! assert_eq!(scaled.clamp01(), Vec3::new(1.0, 1.0, 0.0));
//! ```

use crate::vector::impl_vector;
use crate::Vec4;

/// A 3D vector: a point, direction, normal, or an RGB or XYZ triple.
///
/// ```rust
/// use gmath_math::Vec3;
///
/// let grey = Vec3::splat(0.25);
/// assert_eq!(grey[2], grey.z);
/// assert!((grey.dot(Vec3::new(0.2126, 0.7152, 0.0722)) - 0.25).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vec3 {
    /// First component, red in RGB.
    pub x: f32,
    /// Second component, green in RGB, luminance in XYZ.
    pub y: f32,
    /// Third component, blue in RGB.
    pub z: f32,
}

impl Vec3 {
    /// `+x` axis.
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    /// `+y` axis.
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    /// `+z` axis.
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    /// From components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Right-handed cross product, orthogonal to both inputs.
    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        let (a, b) = (self, rhs);
        Self {
            x: a.y * b.z - b.y * a.z,
            y: a.z * b.x - b.z * a.x,
            z: a.x * b.y - b.x * a.y,
        }
    }

    /// Appends a `w` component.
    #[inline]
    pub const fn extend(self, w: f32) -> Vec4 {
        Vec4::new(self.x, self.y, self.z, w)
    }
}

impl_vector!(Vec3, 3, Mat3, glam::Vec3, { x: 0, y: 1, z: 2 });
