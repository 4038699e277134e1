//! Row/column access and major-order construction.
//!
//! `col_majorN` builds a matrix from column vectors and `row_majorN` from
//! row vectors. The `_mat` forms take an existing matrix: storage is
//! canonical, so `col_majorN_mat` is a copy and `row_majorN_mat` is the
//! transpose.
//!
//! ```rust
//! use gmath_math::{col_major2, column, row_major2, Vec2};
//!
//! let a = Vec2::new(1.0, 2.0);
//! let b = Vec2::new(3.0, 4.0);
//! let m = col_major2(a, b);
//! assert_eq!(column(&m, 1), b);
//! assert_eq!(row_major2(a, b), m.transpose());
//! ```

use crate::matrix::SquareMatrix;
use crate::vector::Vector;
use crate::{Mat2, Mat3, Mat4, Vec2, Vec3, Vec4};

/// Column `index` of `m`.
///
/// # Panics
///
/// Panics if `index` is out of range.
#[inline]
pub fn column<M: SquareMatrix>(m: &M, index: usize) -> M::Vector {
    m.col(index)
}

/// Copy of `m` with column `index` replaced by `v`.
///
/// # Panics
///
/// Panics if `index` is out of range.
#[inline]
pub fn set_column<M: SquareMatrix>(m: &M, index: usize, v: M::Vector) -> M {
    let mut out = *m;
    for r in 0..<M::Vector as Vector>::DIM {
        out.set(r, index, v[r]);
    }
    out
}

/// Row `index` of `m`.
///
/// # Panics
///
/// Panics if `index` is out of range.
#[inline]
pub fn row<M: SquareMatrix>(m: &M, index: usize) -> M::Vector {
    m.row(index)
}

/// Copy of `m` with row `index` replaced by `v`.
///
/// # Panics
///
/// Panics if `index` is out of range.
#[inline]
pub fn set_row<M: SquareMatrix>(m: &M, index: usize, v: M::Vector) -> M {
    let mut out = *m;
    for c in 0..<M::Vector as Vector>::DIM {
        out.set(index, c, v[c]);
    }
    out
}

/// 2x2 matrix with columns `v1`, `v2`.
#[inline]
pub fn col_major2(v1: Vec2, v2: Vec2) -> Mat2 {
    Mat2::from_col_vecs([v1, v2])
}

/// 3x3 matrix with columns `v1`, `v2`, `v3`.
#[inline]
pub fn col_major3(v1: Vec3, v2: Vec3, v3: Vec3) -> Mat3 {
    Mat3::from_col_vecs([v1, v2, v3])
}

/// 4x4 matrix with columns `v1` .. `v4`.
#[inline]
pub fn col_major4(v1: Vec4, v2: Vec4, v3: Vec4, v4: Vec4) -> Mat4 {
    Mat4::from_col_vecs([v1, v2, v3, v4])
}

/// Column-major copy of `m` (identical, storage is canonical).
#[inline]
pub fn col_major2_mat(m: &Mat2) -> Mat2 {
    *m
}

/// Column-major copy of `m` (identical, storage is canonical).
#[inline]
pub fn col_major3_mat(m: &Mat3) -> Mat3 {
    *m
}

/// Column-major copy of `m` (identical, storage is canonical).
#[inline]
pub fn col_major4_mat(m: &Mat4) -> Mat4 {
    *m
}

/// 2x2 matrix with rows `v1`, `v2`.
#[inline]
pub fn row_major2(v1: Vec2, v2: Vec2) -> Mat2 {
    Mat2::from_row_vecs([v1, v2])
}

/// 3x3 matrix with rows `v1`, `v2`, `v3`.
#[inline]
pub fn row_major3(v1: Vec3, v2: Vec3, v3: Vec3) -> Mat3 {
    Mat3::from_row_vecs([v1, v2, v3])
}

/// 4x4 matrix with rows `v1` .. `v4`.
#[inline]
pub fn row_major4(v1: Vec4, v2: Vec4, v3: Vec4, v4: Vec4) -> Mat4 {
    Mat4::from_row_vecs([v1, v2, v3, v4])
}

/// `m` reinterpreted with its columns as rows (the transpose).
#[inline]
pub fn row_major2_mat(m: &Mat2) -> Mat2 {
    m.transpose()
}

/// `m` reinterpreted with its columns as rows (the transpose).
#[inline]
pub fn row_major3_mat(m: &Mat3) -> Mat3 {
    m.transpose()
}

/// `m` reinterpreted with its columns as rows (the transpose).
#[inline]
pub fn row_major4_mat(m: &Mat4) -> Mat4 {
    m.transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_and_set_column() {
        let m = Mat3::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        assert_eq!(column(&m, 0), Vec3::new(1.0, 4.0, 7.0));
        let m2 = set_column(&m, 2, Vec3::splat(-1.0));
        assert_eq!(m2.col(2), Vec3::splat(-1.0));
        assert_eq!(m2.col(0), m.col(0));
        // original untouched
        assert_eq!(m.col(2), Vec3::new(3.0, 6.0, 9.0));
    }

    #[test]
    fn test_row_and_set_row() {
        let m = Mat4::IDENTITY;
        assert_eq!(row(&m, 3), Vec4::W);
        let m2 = set_row(&m, 0, Vec4::ONE);
        assert_eq!(m2.row(0), Vec4::ONE);
        assert_eq!(m2.col(0), Vec4::X);
    }

    #[test]
    #[should_panic]
    fn test_column_out_of_range_panics() {
        let _ = column(&Mat2::IDENTITY, 2);
    }

    #[test]
    fn test_col_major_constructors() {
        let (a, b, c) = (Vec3::X * 2.0, Vec3::Y * 3.0, Vec3::new(1.0, 1.0, 1.0));
        let m = col_major3(a, b, c);
        assert_eq!(m.col(0), a);
        assert_eq!(m.col(2), c);
        assert_eq!(m * Vec3::Z, c);
        assert_eq!(row_major3(a, b, c), m.transpose());

        let m4 = col_major4(Vec4::X, Vec4::Y, Vec4::Z, Vec4::new(5.0, 6.0, 7.0, 1.0));
        assert_eq!(m4.col(3), Vec4::new(5.0, 6.0, 7.0, 1.0));
        assert_eq!(row_major4(Vec4::X, Vec4::Y, Vec4::Z, Vec4::W), Mat4::IDENTITY);
    }

    #[test]
    fn test_major_mat_forms() {
        let m = Mat2::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(col_major2_mat(&m), m);
        assert_eq!(row_major2_mat(&m), m.transpose());
        let m3 = Mat3::from_fn(|r, c| (r * 3 + c) as f32);
        assert_eq!(col_major3_mat(&m3), m3);
        assert_eq!(row_major3_mat(&m3).m[0][1], 3.0);
        assert_eq!(row_major4_mat(&Mat4::IDENTITY), col_major4_mat(&Mat4::IDENTITY));
    }
}
