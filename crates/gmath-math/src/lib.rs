//! # gmath-math
//!
//! Shader-style math for graphics: vectors, matrices, quaternions and the
//! GLM function families built on them.
//!
//! - [`Vec2`], [`Vec3`], [`Vec4`] - `f32` vectors with named fields
//! - [`Mat2`], [`Mat3`], [`Mat4`] - square matrices (row-major, column vectors)
//! - [`Quat`] - rotation quaternions
//! - Common and trigonometric functions that work on scalars and vectors
//! - Rounding to multiples and powers of two, for integers and floats
//! - Easing curves, splines, texture wrapping
//! - [`pca`] - covariance matrices and symmetric eigen decomposition
//! - [`random`] - sampling on circles, disks, spheres and balls (`rand` feature)
//! - [`simd`] - batch versions of the hot scalar functions
//!
//! # Design
//!
//! Most functions are generic over [`ComponentWise`], so the same call
//! works on `f32` and on every vector type:
//!
//! ```rust
//! use gmath_math::{clamp, smoothstep, Vec3};
//!
//! assert_eq!(clamp(1.5_f32, 0.0, 1.0), 1.0);
//! assert_eq!(
//!     clamp(Vec3::new(-1.0, 0.5, 2.0), Vec3::ZERO, Vec3::ONE),
//!     Vec3::new(0.0, 0.5, 1.0)
//! );
//! assert_eq!(smoothstep(0.0_f32, 1.0, 0.5), 0.5);
//! ```
//!
//! Dimension-generic algorithms use [`Vector`] and [`SquareMatrix`]:
//!
//! ```rust
//! use gmath_math::{compute_covariance_matrix, Vec2};
//!
//! let cov = compute_covariance_matrix(&[Vec2::new(-1.0, 0.0), Vec2::new(1.0, 0.0)])?;
//! assert_eq!(cov.m[0][0], 1.0);
//! assert_eq!(cov.m[1][1], 0.0);
//! # Ok::<(), gmath_core::Error>(())
//! ```
//!
//! # Features
//!
//! - `rand` (default) - the [`random`] module
//! - `serde` - `Serialize`/`Deserialize` on the value types
//!
//! # Dependencies
//!
//! - [`gmath-core`] - Errors, constants, the `Integer` trait
//! - [`glam`] - Conversions, 4x4 inverse
//! - [`wide`] - Portable SIMD for [`simd`]
//! - [`tracing`] - Debug logging in the solvers and samplers

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod vector;
mod matrix;
mod common;
mod vec2;
mod vec3;
mod vec4;
mod mat2;
mod mat3;
mod mat4;
mod quat;
mod trig;
mod round;
mod component;
mod access;
mod geometry;
mod spline;
mod easing;
mod wrap;
pub mod pca;
#[cfg(feature = "rand")]
pub mod random;
pub mod simd;

pub use vector::Vector;
pub use matrix::SquareMatrix;
pub use common::*;
pub use vec2::*;
pub use vec3::*;
pub use vec4::*;
pub use mat2::*;
pub use mat3::*;
pub use mat4::*;
pub use quat::*;
pub use trig::*;
pub use round::*;
pub use component::*;
pub use access::*;
pub use geometry::*;
pub use spline::*;
pub use easing::*;
pub use wrap::*;
pub use pca::{
    compute_covariance_matrix, compute_covariance_matrix_about, compute_covariance_matrix_iter,
    compute_covariance_matrix_iter_about, sort_eigen, symmetric_eigen, Eigen,
};
#[cfg(feature = "rand")]
pub use random::{
    ball_rand, circular_rand, disk_rand, gauss_rand, gauss_rand_vec, linear_rand,
    linear_rand_vec, spherical_rand,
};

/// Mathematical constants, re-exported from `gmath-core`.
pub use gmath_core::constants;

/// Re-export glam types for direct use
pub mod glam {
    pub use ::glam::{Mat2 as GlamMat2, Mat3 as GlamMat3, Mat4 as GlamMat4, Quat as GlamQuat};
    pub use ::glam::{Vec2 as GlamVec2, Vec3 as GlamVec3, Vec4 as GlamVec4};
}
