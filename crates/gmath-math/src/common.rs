//! Common component-wise functions.
//!
//! Every function here works on plain `f32` values and on
//! [`Vec2`](crate::Vec2), [`Vec3`](crate::Vec3) and [`Vec4`](crate::Vec4)
//! through the [`ComponentWise`] trait. Vector arguments are processed one
//! component at a time, as in shading languages.
//!
//! - Clamping ([`clamp`], [`clamp_scalar`], [`saturate`])
//! - Rounding ([`ceil`], [`floor`], [`round`], [`trunc`], [`fract`])
//! - Interpolation ([`mix`], [`step`], [`smoothstep`], [`smootherstep`])
//! - Scalar shaping helpers ([`remap`], [`bias`], [`gain`])
//!
//! # Usage
//!
//! ```rust
//! use gmath_math::{clamp, clamp_scalar, mix, smoothstep, Vec3};
//!
//! assert_eq!(clamp(1.5_f32, 0.0, 1.0), 1.0);
//!
//! let v = clamp_scalar(Vec3::new(-1.0, 0.5, 2.0), 0.0, 1.0);
//! assert_eq!(v, Vec3::new(0.0, 0.5, 1.0));
//!
//! assert_eq!(mix(0.0_f32, 10.0, 0.5), 5.0);
//! assert_eq!(smoothstep(0.0_f32, 1.0, 0.5), 0.5);
//! ```

use gmath_core::constants::NEAR_ZERO;

/// A value whose components can be processed independently.
///
/// Implemented for `f32` (a single component) and the vector types.
pub trait ComponentWise: Copy {
    /// Value with every component set to `v`.
    fn splat(v: f32) -> Self;

    /// Applies `f` to every component.
    fn map(self, f: impl Fn(f32) -> f32) -> Self;

    /// Combines matching components of two values.
    fn zip_map(self, other: Self, f: impl Fn(f32, f32) -> f32) -> Self;

    /// Combines matching components of three values.
    fn zip3_map(self, b: Self, c: Self, f: impl Fn(f32, f32, f32) -> f32) -> Self;

    /// Returns true if `f` holds for at least one component.
    fn any(self, f: impl Fn(f32) -> bool) -> bool;
}

impl ComponentWise for f32 {
    #[inline]
    fn splat(v: f32) -> Self {
        v
    }

    #[inline]
    fn map(self, f: impl Fn(f32) -> f32) -> Self {
        f(self)
    }

    #[inline]
    fn zip_map(self, other: Self, f: impl Fn(f32, f32) -> f32) -> Self {
        f(self, other)
    }

    #[inline]
    fn zip3_map(self, b: Self, c: Self, f: impl Fn(f32, f32, f32) -> f32) -> Self {
        f(self, b, c)
    }

    #[inline]
    fn any(self, f: impl Fn(f32) -> bool) -> bool {
        f(self)
    }
}

// ============================================================================
// Clamping
// ============================================================================

/// Clamps each component of `x` to `[min, max]`.
///
/// Computed as `min(max(x, min_val), max_val)`. `min_val` must not exceed
/// `max_val`; this is checked in debug builds.
///
/// # Example
///
/// ```rust
/// use gmath_math::{clamp, Vec2};
///
/// assert_eq!(clamp(-0.5_f32, 0.0, 1.0), 0.0);
/// assert_eq!(clamp(0.5_f32, 0.0, 1.0), 0.5);
///
/// let v = clamp(Vec2::new(5.0, -5.0), Vec2::new(0.0, -1.0), Vec2::new(2.0, 1.0));
/// assert_eq!(v, Vec2::new(2.0, -1.0));
/// ```
#[inline]
pub fn clamp<T: ComponentWise>(x: T, min_val: T, max_val: T) -> T {
    x.zip3_map(min_val, max_val, |v, lo, hi| {
        debug_assert!(!(lo > hi), "clamp: min {lo} greater than max {hi}");
        v.max(lo).min(hi)
    })
}

/// Clamps each component of `x` to the scalar range `[min_val, max_val]`.
#[inline]
pub fn clamp_scalar<T: ComponentWise>(x: T, min_val: f32, max_val: f32) -> T {
    clamp(x, T::splat(min_val), T::splat(max_val))
}

/// Clamps each component to `[0, 1]`.
#[inline]
pub fn saturate<T: ComponentWise>(x: T) -> T {
    clamp_scalar(x, 0.0, 1.0)
}

/// Component-wise minimum.
#[inline]
pub fn min<T: ComponentWise>(a: T, b: T) -> T {
    a.zip_map(b, f32::min)
}

/// Component-wise maximum.
#[inline]
pub fn max<T: ComponentWise>(a: T, b: T) -> T {
    a.zip_map(b, f32::max)
}

// ============================================================================
// Rounding
// ============================================================================

/// Smallest integer value not less than each component.
///
/// ```rust
/// use gmath_math::{ceil, Vec2};
///
/// assert_eq!(ceil(1.2_f32), 2.0);
/// assert_eq!(ceil(Vec2::new(-1.5, 0.1)), Vec2::new(-1.0, 1.0));
/// ```
#[inline]
pub fn ceil<T: ComponentWise>(x: T) -> T {
    x.map(f32::ceil)
}

/// Largest integer value not greater than each component.
#[inline]
pub fn floor<T: ComponentWise>(x: T) -> T {
    x.map(f32::floor)
}

/// Rounds each component to the nearest integer, halves away from zero.
#[inline]
pub fn round<T: ComponentWise>(x: T) -> T {
    x.map(f32::round)
}

/// Rounds each component toward zero.
#[inline]
pub fn trunc<T: ComponentWise>(x: T) -> T {
    x.map(f32::trunc)
}

/// Fractional part, `x - floor(x)`. Always in `[0, 1)` for finite input.
///
/// ```rust
/// use gmath_math::fract;
///
/// assert!((fract(1.75_f32) - 0.75).abs() < 1e-6);
/// assert!((fract(-0.25_f32) - 0.75).abs() < 1e-6);
/// ```
#[inline]
pub fn fract<T: ComponentWise>(x: T) -> T {
    x.map(|v| v - v.floor())
}

/// Component-wise absolute value.
#[inline]
pub fn abs<T: ComponentWise>(x: T) -> T {
    x.map(f32::abs)
}

/// Returns -1 for negative, 0 for zero, 1 for positive components.
#[inline]
pub fn sign<T: ComponentWise>(x: T) -> T {
    x.map(|v| {
        if v < 0.0 {
            -1.0
        } else if v > 0.0 {
            1.0
        } else {
            0.0
        }
    })
}

/// Floored modulo, `x - y * floor(x / y)`. The result has the sign of `y`.
#[inline]
pub fn modulo<T: ComponentWise>(x: T, y: T) -> T {
    x.zip_map(y, |a, b| a - b * (a / b).floor())
}

/// Truncated modulo, `x - y * trunc(x / y)` (C `fmod`). The result has the
/// sign of `x`.
#[inline]
pub fn fmod<T: ComponentWise>(x: T, y: T) -> T {
    x.zip_map(y, |a, b| a % b)
}

/// Returns true if `x` is a subnormal float.
#[inline]
pub fn is_denormal(x: f32) -> bool {
    x.is_subnormal()
}

// ============================================================================
// Interpolation
// ============================================================================

/// `a + (b - a) * t`, component-wise. `t` outside `[0, 1]` extrapolates.
///
/// # Example
///
/// ```rust
/// use gmath_math::{mix, Vec2};
///
/// assert_eq!(mix(0.0_f32, 10.0, 0.5), 5.0);
/// assert_eq!(mix(Vec2::ZERO, Vec2::new(2.0, 4.0), 0.5), Vec2::new(1.0, 2.0));
/// ```
#[inline]
pub fn mix<T: ComponentWise>(a: T, b: T, t: f32) -> T {
    a.zip_map(b, |x, y| x + (y - x) * t)
}

/// Alias of [`mix`].
#[inline]
pub fn lerp<T: ComponentWise>(a: T, b: T, t: f32) -> T {
    mix(a, b, t)
}

/// The `t` for which `mix(a, b, t) == value`. Zero when `a == b`.
///
/// ```rust
/// use gmath_math::inverse_lerp;
///
/// assert_eq!(inverse_lerp(2.0, 6.0, 5.0), 0.75);
/// assert_eq!(inverse_lerp(3.0, 3.0, 9.0), 0.0);
/// ```
#[inline]
pub fn inverse_lerp(a: f32, b: f32, value: f32) -> f32 {
    if (b - a).abs() < NEAR_ZERO {
        0.0
    } else {
        (value - a) / (b - a)
    }
}

/// Maps `value` from `[in_min, in_max]` onto `[out_min, out_max]`.
///
/// ```rust
/// use gmath_math::remap;
///
/// assert_eq!(remap(15.0, 10.0, 20.0, -1.0, 1.0), 0.0);
/// ```
#[inline]
pub fn remap(value: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    mix(out_min, out_max, inverse_lerp(in_min, in_max, value))
}

/// Step function: 0 where `x < edge`, 1 elsewhere.
#[inline]
pub fn step<T: ComponentWise>(edge: T, x: T) -> T {
    edge.zip_map(x, |e, v| if v < e { 0.0 } else { 1.0 })
}

/// Cubic Hermite ramp `t * t * (3 - 2 * t)` of `x` between the edges.
///
/// Clamped to 0 below `edge0` and 1 above `edge1`.
///
/// ```rust
/// use gmath_math::smoothstep;
///
/// assert_eq!(smoothstep(0.0_f32, 1.0, -1.0), 0.0);
/// assert_eq!(smoothstep(0.0_f32, 1.0, 0.5), 0.5);
/// assert_eq!(smoothstep(0.0_f32, 1.0, 2.0), 1.0);
/// ```
#[inline]
pub fn smoothstep<T: ComponentWise>(edge0: T, edge1: T, x: T) -> T {
    edge0.zip3_map(edge1, x, |e0, e1, v| {
        let t = inverse_lerp(e0, e1, v).clamp(0.0, 1.0);
        t * t * (3.0 - 2.0 * t)
    })
}

/// Ken Perlin's smootherstep: zero first and second derivative at the edges.
///
/// The quintic `6t^5 - 15t^4 + 10t^3`.
#[inline]
pub fn smootherstep<T: ComponentWise>(edge0: T, edge1: T, x: T) -> T {
    edge0.zip3_map(edge1, x, |e0, e1, v| {
        let t = inverse_lerp(e0, e1, v).clamp(0.0, 1.0);
        t.powi(3) * (6.0 * t * t - 15.0 * t + 10.0)
    })
}

/// Box function: 1 on `[a, b)`, 0 elsewhere.
#[inline]
pub fn pulse(a: f32, b: f32, x: f32) -> f32 {
    step(a, x) - step(b, x)
}

/// Bias curve: `t^(ln(b) / ln(0.5))`.
///
/// `b = 0.5` is the identity. Values outside `(0, 1)` leave `t` unchanged.
///
/// ```rust
/// use gmath_math::bias;
///
/// assert!((bias(0.5, 0.3) - 0.3).abs() < 1e-6);
/// ```
#[inline]
pub fn bias(b: f32, t: f32) -> f32 {
    if b <= 0.0 || b >= 1.0 {
        return t;
    }
    t.powf(-b.log2())
}

/// Gain curve: two mirrored [`bias`] halves forming an S-curve.
#[inline]
pub fn gain(g: f32, t: f32) -> f32 {
    let b = 1.0 - g;
    if t < 0.5 {
        0.5 * bias(b, 2.0 * t)
    } else {
        1.0 - 0.5 * bias(b, 2.0 * (1.0 - t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Vec3, Vec4};

    #[test]
    fn test_clamp_scalar_bounds() {
        assert_eq!(clamp(-0.5_f32, 0.0, 1.0), 0.0);
        assert_eq!(clamp(0.5_f32, 0.0, 1.0), 0.5);
        assert_eq!(clamp(1.5_f32, 0.0, 1.0), 1.0);
        assert_eq!(clamp(1.0_f32, 1.0, 1.0), 1.0);
    }

    #[test]
    fn test_clamp_vector_bounds() {
        let v = clamp(
            Vec3::new(-2.0, 0.5, 9.0),
            Vec3::new(-1.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 3.0),
        );
        assert_eq!(v, Vec3::new(-1.0, 0.5, 3.0));
    }

    #[test]
    fn test_clamp_scalar_range_on_vector() {
        let v = clamp_scalar(Vec4::new(-1.0, 0.25, 0.75, 2.0), 0.0, 1.0);
        assert_eq!(v, Vec4::new(0.0, 0.25, 0.75, 1.0));
        assert_eq!(saturate(Vec3::splat(3.0)), Vec3::ONE);
    }

    #[test]
    fn test_rounding() {
        assert_eq!(ceil(Vec3::new(1.1, -1.1, 2.0)), Vec3::new(2.0, -1.0, 2.0));
        assert_eq!(floor(Vec3::new(1.9, -1.1, 2.0)), Vec3::new(1.0, -2.0, 2.0));
        assert_eq!(round(2.5_f32), 3.0);
        assert_eq!(round(-2.5_f32), -3.0);
        assert_eq!(trunc(-2.7_f32), -2.0);
    }

    #[test]
    fn test_sign() {
        assert_eq!(sign(Vec3::new(-3.0, 0.0, 7.0)), Vec3::new(-1.0, 0.0, 1.0));
    }

    #[test]
    fn test_modulo_vs_fmod() {
        assert!((modulo(-1.0_f32, 3.0) - 2.0).abs() < 1e-6);
        assert!((fmod(-1.0_f32, 3.0) + 1.0).abs() < 1e-6);
        assert!((modulo(7.5_f32, 2.0) - 1.5).abs() < 1e-6);
    }

    #[test]
    fn test_mix_and_step() {
        assert_eq!(mix(0.0_f32, 10.0, 0.0), 0.0);
        assert_eq!(mix(0.0_f32, 10.0, 1.0), 10.0);
        assert_eq!(step(0.5_f32, 0.25), 0.0);
        assert_eq!(step(0.5_f32, 0.5), 1.0);
        assert_eq!(pulse(0.25, 0.75, 0.5), 1.0);
        assert_eq!(pulse(0.25, 0.75, 0.8), 0.0);
    }

    #[test]
    fn test_smoothstep_vector() {
        let r = smoothstep(Vec3::ZERO, Vec3::ONE, Vec3::new(-1.0, 0.5, 2.0));
        assert_eq!(r, Vec3::new(0.0, 0.5, 1.0));
        assert_eq!(smootherstep(0.0_f32, 1.0, 1.0), 1.0);
        assert_eq!(smootherstep(0.0_f32, 1.0, 0.0), 0.0);
    }

    #[test]
    fn test_inverse_lerp_degenerate() {
        assert_eq!(inverse_lerp(2.0, 2.0, 5.0), 0.0);
        assert_eq!(remap(25.0, 0.0, 100.0, 1.0, 3.0), 1.5);
    }

    #[test]
    fn test_bias_gain_identity() {
        for t in [0.0, 0.2, 0.5, 0.9, 1.0] {
            assert!((bias(0.5, t) - t).abs() < 1e-6);
            assert!((gain(0.5, t) - t).abs() < 1e-6);
        }
        // b = 0.25 squares t
        assert!((bias(0.25, 0.6) - 0.36).abs() < 1e-6);
    }

    #[test]
    fn test_is_denormal() {
        assert!(is_denormal(f32::MIN_POSITIVE / 2.0));
        assert!(!is_denormal(1.0));
        assert!(!is_denormal(0.0));
    }
}
