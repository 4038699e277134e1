//! Shared vector machinery.
//!
//! [`Vec2`](crate::Vec2), [`Vec3`](crate::Vec3) and [`Vec4`](crate::Vec4)
//! are separate structs with named fields, like the shader types they mirror.
//! The component-wise operations they share are generated by the
//! `impl_vector!` macro in this module. Dimension-generic algorithms (for
//! example covariance in [`pca`](crate::pca)) are written against the
//! [`Vector`] trait.

use std::fmt::Debug;
use std::ops::{Add, Div, Index, IndexMut, Mul, Sub};

use crate::common::ComponentWise;
use crate::matrix::SquareMatrix;

/// A fixed-size `f32` vector.
///
/// Implemented by [`Vec2`](crate::Vec2), [`Vec3`](crate::Vec3) and
/// [`Vec4`](crate::Vec4).
///
/// # Example
///
/// ```rust
/// use gmath_math::{Vec3, Vector};
///
/// fn mean<V: Vector>(points: &[V]) -> V {
///     let sum = points.iter().fold(V::from_fn(|_| 0.0), |acc, &p| acc + p);
///     sum / points.len() as f32
/// }
///
/// let m = mean(&[Vec3::new(0.0, 0.0, 0.0), Vec3::new(2.0, 4.0, 6.0)]);
/// assert_eq!(m, Vec3::new(1.0, 2.0, 3.0));
/// ```
pub trait Vector:
    ComponentWise
    + PartialEq
    + Debug
    + Default
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<f32, Output = Self>
    + Div<f32, Output = Self>
    + Index<usize, Output = f32>
    + IndexMut<usize>
{
    /// Number of components.
    const DIM: usize;

    /// Square matrix with the same dimension.
    type Matrix: SquareMatrix<Vector = Self>;

    /// Builds a vector by calling `f` with each component index.
    fn from_fn(f: impl FnMut(usize) -> f32) -> Self;

    /// Dot product.
    fn dot(self, other: Self) -> f32;

    /// Squared Euclidean length.
    #[inline]
    fn length_squared(self) -> f32 {
        self.dot(self)
    }
}

/// Generates the dimension-independent part of a vector type.
///
/// Usage: `impl_vector!(Vec3, 3, Mat3, glam::Vec3, { x: 0, y: 1, z: 2 });`
macro_rules! impl_vector {
    ($name:ident, $dim:literal, $mat:ident, $glam:ty, { $($field:ident : $idx:literal),+ }) => {
        impl $name {
            /// All components zero.
            pub const ZERO: Self = Self { $($field: 0.0),+ };

            /// All components one.
            pub const ONE: Self = Self { $($field: 1.0),+ };

            /// Every component set to `v`.
            #[inline]
            pub const fn splat(v: f32) -> Self {
                Self { $($field: v),+ }
            }

            /// From `[x, y, ..]`.
            #[inline]
            pub const fn from_array(a: [f32; $dim]) -> Self {
                Self { $($field: a[$idx]),+ }
            }

            /// As `[x, y, ..]`.
            #[inline]
            pub const fn to_array(self) -> [f32; $dim] {
                [$(self.$field),+]
            }

            /// Applies `f` to every component.
            #[inline]
            pub fn map(self, f: impl Fn(f32) -> f32) -> Self {
                Self { $($field: f(self.$field)),+ }
            }

            /// Combines matching components of `self` and `other` with `f`.
            #[inline]
            pub fn zip_map(self, other: Self, f: impl Fn(f32, f32) -> f32) -> Self {
                Self { $($field: f(self.$field, other.$field)),+ }
            }

            /// Sum of the component-wise products.
            #[inline]
            pub fn dot(self, other: Self) -> f32 {
                0.0 $(+ self.$field * other.$field)+
            }

            /// Euclidean norm.
            #[inline]
            pub fn length(self) -> f32 {
                self.dot(self).sqrt()
            }

            /// `self.dot(self)`.
            #[inline]
            pub fn length_squared(self) -> f32 {
                self.dot(self)
            }

            /// Euclidean distance to `other`.
            #[inline]
            pub fn distance(self, other: Self) -> f32 {
                (self - other).length()
            }

            /// Unit vector in the same direction; zero stays zero.
            #[inline]
            pub fn normalize(self) -> Self {
                let len = self.length();
                if len > 0.0 {
                    self / len
                } else {
                    Self::ZERO
                }
            }

            /// Per-component `f32::min`.
            #[inline]
            pub fn min(self, other: Self) -> Self {
                self.zip_map(other, f32::min)
            }

            /// Per-component `f32::max`.
            #[inline]
            pub fn max(self, other: Self) -> Self {
                self.zip_map(other, f32::max)
            }

            /// Clamps each component to `[min, max]`.
            #[inline]
            pub fn clamp(self, min: Self, max: Self) -> Self {
                self.max(min).min(max)
            }

            /// Clamps each component to `[0, 1]`.
            #[inline]
            pub fn clamp01(self) -> Self {
                self.clamp(Self::ZERO, Self::ONE)
            }

            /// `|v|` per component.
            #[inline]
            pub fn abs(self) -> Self {
                self.map(f32::abs)
            }

            /// Rounds every component down.
            #[inline]
            pub fn floor(self) -> Self {
                self.map(f32::floor)
            }

            /// Rounds every component up.
            #[inline]
            pub fn ceil(self) -> Self {
                self.map(f32::ceil)
            }

            /// Component-wise fractional part, `x - floor(x)`.
            #[inline]
            pub fn fract(self) -> Self {
                self.map(|v| v - v.floor())
            }

            /// Raises every component to `exp`.
            #[inline]
            pub fn powf(self, exp: f32) -> Self {
                self.map(|v| v.powf(exp))
            }

            /// `self + (other - self) * t`; `t` is not clamped.
            #[inline]
            pub fn lerp(self, other: Self, t: f32) -> Self {
                self + (other - self) * t
            }

            /// Smallest component.
            #[inline]
            pub fn min_element(self) -> f32 {
                self.to_array().into_iter().fold(f32::INFINITY, f32::min)
            }

            /// Largest component.
            #[inline]
            pub fn max_element(self) -> f32 {
                self.to_array().into_iter().fold(f32::NEG_INFINITY, f32::max)
            }

            /// Sum of all components.
            #[inline]
            pub fn element_sum(self) -> f32 {
                0.0 $(+ self.$field)+
            }

            /// Product of all components.
            #[inline]
            pub fn element_product(self) -> f32 {
                1.0 $(* self.$field)+
            }

            /// Any component NaN.
            #[inline]
            pub fn is_nan(self) -> bool {
                false $(|| self.$field.is_nan())+
            }

            /// No component NaN or infinite.
            #[inline]
            pub fn is_finite(self) -> bool {
                true $(&& self.$field.is_finite())+
            }

            /// Converts to the matching glam vector.
            #[inline]
            pub fn to_glam(self) -> $glam {
                <$glam>::from_array(self.to_array())
            }

            /// Creates from the matching glam vector.
            #[inline]
            pub fn from_glam(v: $glam) -> Self {
                Self::from_array(v.to_array())
            }
        }

        impl std::ops::Index<usize> for $name {
            type Output = f32;

            #[inline]
            fn index(&self, i: usize) -> &f32 {
                match i {
                    $($idx => &self.$field,)+
                    _ => panic!(concat!(stringify!($name), " index out of bounds: {}"), i),
                }
            }
        }

        impl std::ops::IndexMut<usize> for $name {
            #[inline]
            fn index_mut(&mut self, i: usize) -> &mut f32 {
                match i {
                    $($idx => &mut self.$field,)+
                    _ => panic!(concat!(stringify!($name), " index out of bounds: {}"), i),
                }
            }
        }

        impl std::ops::Add for $name {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self { $($field: self.$field + rhs.$field),+ }
            }
        }

        impl std::ops::Sub for $name {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self { $($field: self.$field - rhs.$field),+ }
            }
        }

        // component-wise
        impl std::ops::Mul for $name {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: Self) -> Self {
                Self { $($field: self.$field * rhs.$field),+ }
            }
        }

        impl std::ops::Mul<f32> for $name {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: f32) -> Self {
                Self { $($field: self.$field * rhs),+ }
            }
        }

        impl std::ops::Mul<$name> for f32 {
            type Output = $name;

            #[inline]
            fn mul(self, rhs: $name) -> $name {
                rhs * self
            }
        }

        // component-wise
        impl std::ops::Div for $name {
            type Output = Self;

            #[inline]
            fn div(self, rhs: Self) -> Self {
                Self { $($field: self.$field / rhs.$field),+ }
            }
        }

        impl std::ops::Div<f32> for $name {
            type Output = Self;

            #[inline]
            fn div(self, rhs: f32) -> Self {
                Self { $($field: self.$field / rhs),+ }
            }
        }

        impl std::ops::Neg for $name {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                Self { $($field: -self.$field),+ }
            }
        }

        impl std::ops::AddAssign for $name {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl std::ops::SubAssign for $name {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl std::ops::MulAssign<f32> for $name {
            #[inline]
            fn mul_assign(&mut self, rhs: f32) {
                *self = *self * rhs;
            }
        }

        impl From<[f32; $dim]> for $name {
            #[inline]
            fn from(a: [f32; $dim]) -> Self {
                Self::from_array(a)
            }
        }

        impl From<$name> for [f32; $dim] {
            #[inline]
            fn from(v: $name) -> [f32; $dim] {
                v.to_array()
            }
        }

        impl From<$glam> for $name {
            #[inline]
            fn from(v: $glam) -> Self {
                Self::from_glam(v)
            }
        }

        impl From<$name> for $glam {
            #[inline]
            fn from(v: $name) -> $glam {
                v.to_glam()
            }
        }

        impl $crate::common::ComponentWise for $name {
            #[inline]
            fn splat(v: f32) -> Self {
                Self::splat(v)
            }

            #[inline]
            fn map(self, f: impl Fn(f32) -> f32) -> Self {
                Self { $($field: f(self.$field)),+ }
            }

            #[inline]
            fn zip_map(self, other: Self, f: impl Fn(f32, f32) -> f32) -> Self {
                Self { $($field: f(self.$field, other.$field)),+ }
            }

            #[inline]
            fn zip3_map(self, b: Self, c: Self, f: impl Fn(f32, f32, f32) -> f32) -> Self {
                Self { $($field: f(self.$field, b.$field, c.$field)),+ }
            }

            #[inline]
            fn any(self, f: impl Fn(f32) -> bool) -> bool {
                false $(|| f(self.$field))+
            }
        }

        impl $crate::vector::Vector for $name {
            const DIM: usize = $dim;

            type Matrix = $crate::$mat;

            #[inline]
            fn from_fn(mut f: impl FnMut(usize) -> f32) -> Self {
                Self { $($field: f($idx)),+ }
            }

            #[inline]
            fn dot(self, other: Self) -> f32 {
                $name::dot(self, other)
            }
        }
    };
}

pub(crate) use impl_vector;
