//! Trigonometric, hyperbolic and reciprocal functions.
//!
//! All functions are component-wise over [`ComponentWise`] values. Poles
//! produce IEEE infinities or NaN instead of panicking:
//!
//! ```rust
//! use gmath_math::{csc, cot, Vec2};
//!
//! assert!(csc(0.0_f32).is_infinite());
//! let c = cot(Vec2::new(std::f32::consts::FRAC_PI_4, std::f32::consts::FRAC_PI_2));
//! assert!((c.x - 1.0).abs() < 1e-6);
//! assert!(c.y.abs() < 1e-6);
//! ```

use gmath_core::constants::HALF_PI;

use crate::common::ComponentWise;

/// Converts degrees to radians.
#[inline]
pub fn radians<T: ComponentWise>(degrees: T) -> T {
    degrees.map(f32::to_radians)
}

/// Converts radians to degrees.
#[inline]
pub fn degrees<T: ComponentWise>(radians: T) -> T {
    radians.map(f32::to_degrees)
}

/// Sine.
#[inline]
pub fn sin<T: ComponentWise>(x: T) -> T {
    x.map(f32::sin)
}

/// Cosine.
///
/// ```rust
/// use gmath_math::{cos, Vec3};
///
/// let c = cos(Vec3::new(0.0, std::f32::consts::PI, 0.5));
/// assert_eq!(c.x, 1.0);
/// assert!((c.y + 1.0).abs() < 1e-6);
/// assert!((c.z - gmath_core::constants::COS_ONE_OVER_TWO).abs() < 1e-6);
/// ```
#[inline]
pub fn cos<T: ComponentWise>(x: T) -> T {
    x.map(f32::cos)
}

/// Tangent.
#[inline]
pub fn tan<T: ComponentWise>(x: T) -> T {
    x.map(f32::tan)
}

/// Arc sine. NaN outside `[-1, 1]`.
#[inline]
pub fn asin<T: ComponentWise>(x: T) -> T {
    x.map(f32::asin)
}

/// Arc cosine. NaN outside `[-1, 1]`.
#[inline]
pub fn acos<T: ComponentWise>(x: T) -> T {
    x.map(f32::acos)
}

/// Arc tangent.
#[inline]
pub fn atan<T: ComponentWise>(x: T) -> T {
    x.map(f32::atan)
}

/// Four-quadrant arc tangent of `y / x`.
#[inline]
pub fn atan2<T: ComponentWise>(y: T, x: T) -> T {
    y.zip_map(x, f32::atan2)
}

/// Hyperbolic sine.
#[inline]
pub fn sinh<T: ComponentWise>(x: T) -> T {
    x.map(f32::sinh)
}

/// Hyperbolic cosine.
#[inline]
pub fn cosh<T: ComponentWise>(x: T) -> T {
    x.map(f32::cosh)
}

/// Hyperbolic tangent.
#[inline]
pub fn tanh<T: ComponentWise>(x: T) -> T {
    x.map(f32::tanh)
}

// ============================================================================
// Reciprocal functions
// ============================================================================

/// Secant, `1 / cos(x)`.
#[inline]
pub fn sec<T: ComponentWise>(x: T) -> T {
    x.map(|v| 1.0 / v.cos())
}

/// Cosecant, `1 / sin(x)`.
#[inline]
pub fn csc<T: ComponentWise>(x: T) -> T {
    x.map(|v| 1.0 / v.sin())
}

/// Cotangent, computed as `tan(π/2 - x)`.
#[inline]
pub fn cot<T: ComponentWise>(x: T) -> T {
    x.map(|v| (HALF_PI - v).tan())
}

/// Inverse secant, `acos(1 / x)`.
#[inline]
pub fn asec<T: ComponentWise>(x: T) -> T {
    x.map(|v| (1.0 / v).acos())
}

/// Inverse cosecant, `asin(1 / x)`.
#[inline]
pub fn acsc<T: ComponentWise>(x: T) -> T {
    x.map(|v| (1.0 / v).asin())
}

/// Inverse cotangent, `π/2 - atan(x)`.
#[inline]
pub fn acot<T: ComponentWise>(x: T) -> T {
    x.map(|v| HALF_PI - v.atan())
}

/// Hyperbolic secant, `1 / cosh(x)`.
#[inline]
pub fn sech<T: ComponentWise>(x: T) -> T {
    x.map(|v| 1.0 / v.cosh())
}

/// Hyperbolic cosecant, `1 / sinh(x)`.
#[inline]
pub fn csch<T: ComponentWise>(x: T) -> T {
    x.map(|v| 1.0 / v.sinh())
}

/// Hyperbolic cotangent, `cosh(x) / sinh(x)`.
#[inline]
pub fn coth<T: ComponentWise>(x: T) -> T {
    x.map(|v| v.cosh() / v.sinh())
}

/// Inverse hyperbolic secant, `acosh(1 / x)`.
#[inline]
pub fn asech<T: ComponentWise>(x: T) -> T {
    x.map(|v| (1.0 / v).acosh())
}

/// Inverse hyperbolic cosecant, `asinh(1 / x)`.
#[inline]
pub fn acsch<T: ComponentWise>(x: T) -> T {
    x.map(|v| (1.0 / v).asinh())
}

/// Inverse hyperbolic cotangent, `atanh(1 / x)`.
#[inline]
pub fn acoth<T: ComponentWise>(x: T) -> T {
    x.map(|v| (1.0 / v).atanh())
}
