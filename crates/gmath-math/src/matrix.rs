//! Shared square-matrix machinery.
//!
//! # Convention
//!
//! Matrices are stored in **row-major** order (`m[row][col]`) and use
//! **column vectors**:
//!
//! ```text
//! | m00 m01 m02 |   | x |   | m00*x + m01*y + m02*z |
//! | m10 m11 m12 | * | y | = | m10*x + m11*y + m12*z |
//! | m20 m21 m22 |   | z |   | m20*x + m21*y + m22*z |
//! ```
//!
//! glam is column-major; `to_glam`/`from_glam` transpose accordingly.

use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Sub};

use crate::vector::Vector;

/// A square `f32` matrix.
///
/// Implemented by [`Mat2`](crate::Mat2), [`Mat3`](crate::Mat3) and
/// [`Mat4`](crate::Mat4).
pub trait SquareMatrix:
    Copy
    + PartialEq
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Mul<f32, Output = Self>
    + Div<f32, Output = Self>
{
    /// Vector type with the same dimension.
    type Vector: Vector<Matrix = Self>;

    /// All elements zero.
    const ZERO: Self;

    /// Identity matrix.
    const IDENTITY: Self;

    /// Builds a matrix by calling `f(row, col)` for every element.
    fn from_fn(f: impl FnMut(usize, usize) -> f32) -> Self;

    /// Element at `(row, col)`.
    fn get(&self, row: usize, col: usize) -> f32;

    /// Sets the element at `(row, col)`.
    fn set(&mut self, row: usize, col: usize, value: f32);

    /// Row `i` as a vector.
    fn row(&self, i: usize) -> Self::Vector;

    /// Column `i` as a vector.
    fn col(&self, i: usize) -> Self::Vector;

    /// Transposed matrix.
    fn transpose(&self) -> Self;

    /// Matrix-vector product (`self * v`).
    fn transform(&self, v: Self::Vector) -> Self::Vector;

    /// Outer product `a * bᵀ`.
    fn outer_product(a: Self::Vector, b: Self::Vector) -> Self;
}

/// Generates the dimension-independent part of a matrix type.
///
/// Usage: `impl_matrix!(Mat3, 3, Vec3, glam::Mat3);`
macro_rules! impl_matrix {
    ($name:ident, $dim:literal, $vec:ident, $glam:ty) => {
        impl $name {
            /// Zero matrix.
            pub const ZERO: Self = Self {
                m: [[0.0; $dim]; $dim],
            };

            /// Identity matrix.
            pub const IDENTITY: Self = {
                let mut m = [[0.0; $dim]; $dim];
                let mut i = 0;
                while i < $dim {
                    m[i][i] = 1.0;
                    i += 1;
                }
                Self { m }
            };

            /// Creates a matrix from row arrays.
            #[inline]
            pub const fn from_rows(rows: [[f32; $dim]; $dim]) -> Self {
                Self { m: rows }
            }

            /// Creates a matrix from column arrays.
            ///
            /// Transposes the input (columns become rows internally).
            #[inline]
            pub const fn from_cols(cols: [[f32; $dim]; $dim]) -> Self {
                let mut m = [[0.0; $dim]; $dim];
                let mut r = 0;
                while r < $dim {
                    let mut c = 0;
                    while c < $dim {
                        m[r][c] = cols[c][r];
                        c += 1;
                    }
                    r += 1;
                }
                Self { m }
            }

            /// Creates a matrix whose rows are the given vectors.
            #[inline]
            pub fn from_row_vecs(rows: [$vec; $dim]) -> Self {
                Self::from_fn(|r, c| rows[r][c])
            }

            /// Creates a matrix whose columns are the given vectors.
            #[inline]
            pub fn from_col_vecs(cols: [$vec; $dim]) -> Self {
                Self::from_fn(|r, c| cols[c][r])
            }

            /// Builds a matrix by calling `f(row, col)` for every element.
            #[inline]
            pub fn from_fn(mut f: impl FnMut(usize, usize) -> f32) -> Self {
                let mut m = [[0.0; $dim]; $dim];
                for (r, row) in m.iter_mut().enumerate() {
                    for (c, v) in row.iter_mut().enumerate() {
                        *v = f(r, c);
                    }
                }
                Self { m }
            }

            /// Creates a diagonal matrix.
            #[inline]
            pub fn from_diagonal(d: $vec) -> Self {
                Self::from_fn(|r, c| if r == c { d[r] } else { 0.0 })
            }

            /// Creates a uniform scale matrix.
            #[inline]
            pub fn scale(s: f32) -> Self {
                Self::from_diagonal($vec::splat(s))
            }

            /// Returns row `i` as a vector.
            ///
            /// # Panics
            ///
            /// Panics if `i` is out of range.
            #[inline]
            pub fn row(&self, i: usize) -> $vec {
                $vec::from_array(self.m[i])
            }

            /// Returns column `i` as a vector.
            ///
            /// # Panics
            ///
            /// Panics if `i` is out of range.
            #[inline]
            pub fn col(&self, i: usize) -> $vec {
                let mut v = $vec::ZERO;
                for r in 0..$dim {
                    v[r] = self.m[r][i];
                }
                v
            }

            /// Replaces row `i`.
            #[inline]
            pub fn set_row(&mut self, i: usize, v: $vec) {
                self.m[i] = v.to_array();
            }

            /// Replaces column `i`.
            #[inline]
            pub fn set_col(&mut self, i: usize, v: $vec) {
                for r in 0..$dim {
                    self.m[r][i] = v[r];
                }
            }

            /// Returns the diagonal as a vector.
            #[inline]
            pub fn diagonal(&self) -> $vec {
                let mut v = $vec::ZERO;
                for i in 0..$dim {
                    v[i] = self.m[i][i];
                }
                v
            }

            /// Sum of the diagonal elements.
            #[inline]
            pub fn trace(&self) -> f32 {
                self.diagonal().element_sum()
            }

            /// Returns the transpose of this matrix.
            #[inline]
            pub fn transpose(&self) -> Self {
                Self::from_fn(|r, c| self.m[c][r])
            }

            /// Transforms a vector by this matrix (`matrix * vector`).
            #[inline]
            pub fn transform(&self, v: $vec) -> $vec {
                let mut out = $vec::ZERO;
                for r in 0..$dim {
                    out[r] = self.row(r).dot(v);
                }
                out
            }

            /// Multiplies two matrices.
            #[inline]
            pub fn mul_mat(&self, other: &Self) -> Self {
                Self::from_fn(|r, c| self.row(r).dot(other.col(c)))
            }

            /// Outer product `a * bᵀ`.
            #[inline]
            pub fn outer_product(a: $vec, b: $vec) -> Self {
                Self::from_fn(|r, c| a[r] * b[c])
            }

            /// Returns true if all elements are finite (not NaN or infinite).
            #[inline]
            pub fn is_finite(&self) -> bool {
                self.m.iter().flatten().all(|x| x.is_finite())
            }

            /// Returns true if every element is within `eps` of `other`.
            #[inline]
            pub fn abs_diff_eq(&self, other: &Self, eps: f32) -> bool {
                self.m
                    .iter()
                    .flatten()
                    .zip(other.m.iter().flatten())
                    .all(|(a, b)| (a - b).abs() <= eps)
            }

            /// Converts to the matching glam matrix (column-major).
            #[inline]
            pub fn to_glam(&self) -> $glam {
                // glam is column-major: its columns are our rows transposed
                <$glam>::from_cols_array_2d(&self.transpose().m)
            }

            /// Creates from the matching glam matrix.
            #[inline]
            pub fn from_glam(m: $glam) -> Self {
                Self::from_cols(m.to_cols_array_2d())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::IDENTITY
            }
        }

        impl std::ops::Mul<$vec> for $name {
            type Output = $vec;

            #[inline]
            fn mul(self, rhs: $vec) -> $vec {
                self.transform(rhs)
            }
        }

        impl std::ops::Mul for $name {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: Self) -> Self {
                self.mul_mat(&rhs)
            }
        }

        impl std::ops::Mul<f32> for $name {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: f32) -> Self {
                Self::from_fn(|r, c| self.m[r][c] * rhs)
            }
        }

        impl std::ops::Div<f32> for $name {
            type Output = Self;

            #[inline]
            fn div(self, rhs: f32) -> Self {
                Self::from_fn(|r, c| self.m[r][c] / rhs)
            }
        }

        impl std::ops::Add for $name {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self::from_fn(|r, c| self.m[r][c] + rhs.m[r][c])
            }
        }

        impl std::ops::Sub for $name {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self::from_fn(|r, c| self.m[r][c] - rhs.m[r][c])
            }
        }

        impl std::ops::AddAssign for $name {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl std::ops::Index<usize> for $name {
            type Output = [f32; $dim];

            #[inline]
            fn index(&self, i: usize) -> &[f32; $dim] {
                &self.m[i]
            }
        }

        impl std::ops::IndexMut<usize> for $name {
            #[inline]
            fn index_mut(&mut self, i: usize) -> &mut [f32; $dim] {
                &mut self.m[i]
            }
        }

        impl From<$glam> for $name {
            #[inline]
            fn from(m: $glam) -> Self {
                Self::from_glam(m)
            }
        }

        impl From<$name> for $glam {
            #[inline]
            fn from(m: $name) -> $glam {
                m.to_glam()
            }
        }

        impl $crate::matrix::SquareMatrix for $name {
            type Vector = $crate::$vec;

            const ZERO: Self = $name::ZERO;
            const IDENTITY: Self = $name::IDENTITY;

            #[inline]
            fn from_fn(f: impl FnMut(usize, usize) -> f32) -> Self {
                $name::from_fn(f)
            }

            #[inline]
            fn get(&self, row: usize, col: usize) -> f32 {
                self.m[row][col]
            }

            #[inline]
            fn set(&mut self, row: usize, col: usize, value: f32) {
                self.m[row][col] = value;
            }

            #[inline]
            fn row(&self, i: usize) -> $vec {
                $name::row(self, i)
            }

            #[inline]
            fn col(&self, i: usize) -> $vec {
                $name::col(self, i)
            }

            #[inline]
            fn transpose(&self) -> Self {
                $name::transpose(self)
            }

            #[inline]
            fn transform(&self, v: $vec) -> $vec {
                $name::transform(self, v)
            }

            #[inline]
            fn outer_product(a: $vec, b: $vec) -> Self {
                $name::outer_product(a, b)
            }
        }
    };
}

pub(crate) use impl_matrix;
