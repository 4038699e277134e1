//! Cubic spline evaluation.
//!
//! All functions work on any [`Spline`] value: `f32` and the vector types.
//!
//! ```rust
//! use gmath_math::{catmull_rom, Vec2};
//!
//! let p = [
//!     Vec2::new(0.0, 0.0),
//!     Vec2::new(1.0, 1.0),
//!     Vec2::new(2.0, 0.0),
//!     Vec2::new(3.0, 1.0),
//! ];
//! // Catmull-Rom passes through the inner control points.
//! assert_eq!(catmull_rom(p[0], p[1], p[2], p[3], 0.0), p[1]);
//! assert_eq!(catmull_rom(p[0], p[1], p[2], p[3], 1.0), p[2]);
//! ```

use std::ops::{Add, Mul, Sub};

/// A value that can be combined linearly.
pub trait Spline: Copy + Add<Output = Self> + Sub<Output = Self> + Mul<f32, Output = Self> {}

impl<T> Spline for T where T: Copy + Add<Output = T> + Sub<Output = T> + Mul<f32, Output = T> {}

/// Cubic polynomial in Horner form: `((v1 * s + v2) * s + v3) * s + v4`.
///
/// `v1` is the cubic coefficient and `v4` the constant term.
///
/// ```rust
/// use gmath_math::cubic;
///
/// // s^3 - 2s + 1 at s = 2
/// assert_eq!(cubic(1.0_f32, 0.0, -2.0, 1.0, 2.0), 5.0);
/// ```
#[inline]
pub fn cubic<T: Spline>(v1: T, v2: T, v3: T, v4: T, s: f32) -> T {
    ((v1 * s + v2) * s + v3) * s + v4
}

/// Catmull-Rom spline through `v2` (at `s = 0`) and `v3` (at `s = 1`), with
/// `v1` and `v4` shaping the tangents.
pub fn catmull_rom<T: Spline>(v1: T, v2: T, v3: T, v4: T, s: f32) -> T {
    let s2 = s * s;
    let s3 = s2 * s;

    let f1 = -s3 + 2.0 * s2 - s;
    let f2 = 3.0 * s3 - 5.0 * s2 + 2.0;
    let f3 = -3.0 * s3 + 4.0 * s2 + s;
    let f4 = s3 - s2;

    (v1 * f1 + v2 * f2 + v3 * f3 + v4 * f4) * 0.5
}

/// Cubic Hermite spline from `v1` to `v2` with tangents `t1` and `t2`.
pub fn hermite<T: Spline>(v1: T, t1: T, v2: T, t2: T, s: f32) -> T {
    let s2 = s * s;
    let s3 = s2 * s;

    let f1 = 2.0 * s3 - 3.0 * s2 + 1.0;
    let f2 = -2.0 * s3 + 3.0 * s2;
    let f3 = s3 - 2.0 * s2 + s;
    let f4 = s3 - s2;

    v1 * f1 + v2 * f2 + t1 * f3 + t2 * f4
}
