//! 2x2 matrix type.

use gmath_core::constants::NEAR_ZERO;

use crate::matrix::impl_matrix;
use crate::Vec2;

/// A 2x2 matrix, row-major storage, column vectors.
///
/// ```rust
/// use gmath_math::{Mat2, Vec2};
///
/// // 90 degree counter-clockwise rotation
/// let rot = Mat2::from_rows([[0.0, -1.0], [1.0, 0.0]]);
/// assert_eq!(rot * Vec2::X, Vec2::Y);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Mat2 {
    /// Matrix elements in row-major order: [row0, row1]
    pub m: [[f32; 2]; 2],
}

impl Mat2 {
    /// Counter-clockwise rotation by `angle` radians.
    #[inline]
    pub fn from_angle(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_rows([[c, -s], [s, c]])
    }

    /// Computes the determinant.
    #[inline]
    pub fn determinant(&self) -> f32 {
        self.m[0][0] * self.m[1][1] - self.m[0][1] * self.m[1][0]
    }

    /// Computes the inverse. Returns `None` if the matrix is singular.
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det.abs() < NEAR_ZERO {
            return None;
        }
        let inv_det = 1.0 / det;
        let m = &self.m;
        Some(Self::from_rows([
            [m[1][1] * inv_det, -m[0][1] * inv_det],
            [-m[1][0] * inv_det, m[0][0] * inv_det],
        ]))
    }
}

impl_matrix!(Mat2, 2, Vec2, glam::Mat2);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mat2_determinant() {
        let m = Mat2::from_rows([[3.0, 8.0], [4.0, 6.0]]);
        assert_eq!(m.determinant(), -14.0);
    }

    #[test]
    fn test_mat2_inverse() {
        let m = Mat2::from_rows([[4.0, 7.0], [2.0, 6.0]]);
        let inv = m.inverse().unwrap();
        assert!((m * inv).abs_diff_eq(&Mat2::IDENTITY, 1e-6));
        assert!(Mat2::from_rows([[1.0, 2.0], [2.0, 4.0]]).inverse().is_none());
    }

    #[test]
    fn test_mat2_rotation() {
        let r = Mat2::from_angle(std::f32::consts::FRAC_PI_2);
        let v = r * Vec2::X;
        assert!((v - Vec2::Y).length() < 1e-6);
        assert!((r.determinant() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_mat2_glam_roundtrip() {
        let m = Mat2::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(Mat2::from_glam(m.to_glam()), m);
    }
}
