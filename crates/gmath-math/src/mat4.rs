//! 4x4 matrix type.
//!
//! Determinant and inverse are delegated to [`glam::Mat4`], which has
//! SIMD implementations of both.

use gmath_core::constants::NEAR_ZERO;

use crate::matrix::impl_matrix;
use crate::{Mat3, Vec3, Vec4};

/// A 4x4 matrix, row-major storage, column vectors.
///
/// ```rust
/// use gmath_math::{Mat4, Vec3, Vec4};
///
/// let t = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
/// assert_eq!(t * Vec4::W, Vec4::new(1.0, 2.0, 3.0, 1.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Mat4 {
    /// Matrix elements in row-major order: [row0, row1, row2, row3]
    pub m: [[f32; 4]; 4],
}

impl Mat4 {
    /// Embeds a 3x3 matrix in the upper-left block; the rest is identity.
    #[inline]
    pub fn from_mat3(m: &Mat3) -> Self {
        Self::from_fn(|r, c| match (r, c) {
            (3, 3) => 1.0,
            (3, _) | (_, 3) => 0.0,
            _ => m.m[r][c],
        })
    }

    /// Affine translation.
    #[inline]
    pub fn from_translation(t: Vec3) -> Self {
        let mut m = Self::IDENTITY;
        m.set_col(3, t.extend(1.0));
        m
    }

    /// Transforms a point (w = 1), dropping the resulting w.
    #[inline]
    pub fn transform_point3(&self, p: Vec3) -> Vec3 {
        (*self * p.extend(1.0)).truncate()
    }

    /// Transforms a direction (w = 0).
    #[inline]
    pub fn transform_vector3(&self, v: Vec3) -> Vec3 {
        (*self * v.extend(0.0)).truncate()
    }

    /// Computes the determinant.
    #[inline]
    pub fn determinant(&self) -> f32 {
        self.to_glam().determinant()
    }

    /// Computes the inverse. Returns `None` if the matrix is singular.
    pub fn inverse(&self) -> Option<Self> {
        let g = self.to_glam();
        let det = g.determinant();
        if det.abs() < NEAR_ZERO {
            return None;
        }
        Some(Self::from_glam(g.inverse()))
    }
}

impl_matrix!(Mat4, 4, Vec4, glam::Mat4);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mat4_from_mat3() {
        let m3 = Mat3::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        let m4 = Mat4::from_mat3(&m3);
        assert_eq!(m4.row(0), Vec4::new(1.0, 2.0, 3.0, 0.0));
        assert_eq!(m4.row(3), Vec4::W);
        assert_eq!(Mat3::from_mat4(&m4), m3);
    }

    #[test]
    fn test_mat4_translation() {
        let t = Mat4::from_translation(Vec3::new(1.0, -2.0, 0.5));
        assert_eq!(t.transform_point3(Vec3::ZERO), Vec3::new(1.0, -2.0, 0.5));
        assert_eq!(t.transform_vector3(Vec3::X), Vec3::X);
    }

    #[test]
    fn test_mat4_inverse() {
        let m = Mat4::from_rows([
            [2.0, 0.0, 0.0, 1.0],
            [0.0, 3.0, 0.0, 2.0],
            [0.0, 0.0, 4.0, 3.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        assert!((m.determinant() - 24.0).abs() < 1e-4);
        let inv = m.inverse().unwrap();
        assert!((m * inv).abs_diff_eq(&Mat4::IDENTITY, 1e-5));
        assert!(Mat4::ZERO.inverse().is_none());
    }
}
