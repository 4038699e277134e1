//! 3x3 matrix type.
//!
//! [`Mat3`] carries rotations, the covariance of 3D point sets, and the
//! linear colour transforms in `gmath-color`.
//!
//! ```rust
//! use gmath_math::{Mat3, Vec3};
//!
//! // Swap x and y, negate z
//! let m = Mat3::from_rows([[0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]]);
//! assert_eq!(m * Vec3::new(1.0, 2.0, 3.0), Vec3::new(2.0, 1.0, -3.0));
//! assert_eq!(m.determinant(), 1.0);
//! ```

use gmath_core::constants::NEAR_ZERO;

use crate::matrix::impl_matrix;
use crate::{Mat4, Vec3};

/// A 3x3 matrix, row-major, acting on column vectors.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Mat3 {
    /// Rows; `m[row][col]`.
    pub m: [[f32; 3]; 3],
}

impl Mat3 {
    /// Diagonal matrix from three entries.
    ///
    /// ```rust
    /// use gmath_math::{Mat3, Vec3};
    ///
    /// let s = Mat3::diagonal3(2.0, 3.0, 4.0);
    /// assert_eq!(s * Vec3::ONE, Vec3::new(2.0, 3.0, 4.0));
    /// ```
    #[inline]
    pub const fn diagonal3(d0: f32, d1: f32, d2: f32) -> Self {
        Self::from_rows([[d0, 0.0, 0.0], [0.0, d1, 0.0], [0.0, 0.0, d2]])
    }

    /// Upper-left 3x3 block of a 4x4 matrix.
    #[inline]
    pub fn from_mat4(m: &Mat4) -> Self {
        Self::from_fn(|r, c| m.m[r][c])
    }

    /// Scalar triple product of the columns.
    #[inline]
    pub fn determinant(&self) -> f32 {
        self.col(0).dot(self.col(1).cross(self.col(2)))
    }

    /// Inverse, or `None` when `|det| < NEAR_ZERO`.
    ///
    /// ```rust
    /// use gmath_math::Mat3;
    ///
    /// let m = Mat3::diagonal3(2.0, 4.0, 0.5);
    /// assert_eq!(m.inverse(), Some(Mat3::diagonal3(0.5, 0.25, 2.0)));
    /// assert_eq!(Mat3::ZERO.inverse(), None);
    /// ```
    pub fn inverse(&self) -> Option<Self> {
        let (c0, c1, c2) = (self.col(0), self.col(1), self.col(2));
        let r0 = c1.cross(c2);
        let det = c0.dot(r0);
        if det.abs() < NEAR_ZERO {
            return None;
        }
        // Rows of the inverse are the pairwise cross products of the columns
        Some(Self::from_row_vecs([r0, c2.cross(c0), c0.cross(c1)]) / det)
    }
}

impl_matrix!(Mat3, 3, Vec3, glam::Mat3);
