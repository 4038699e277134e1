//! Texture-coordinate wrapping and interval tests.
//!
//! ```rust
//! use gmath_math::{close_bounded, mirror_repeat, open_bounded, repeat, Vec2};
//!
//! assert_eq!(repeat(1.25_f32), 0.25);
//! assert_eq!(mirror_repeat(1.25_f32), 0.75);
//!
//! assert!(close_bounded(1.0_f32, 0.0, 1.0));
//! assert!(!open_bounded(1.0_f32, 0.0, 1.0));
//! assert_eq!(
//!     close_bounded(Vec2::new(0.5, 2.0), Vec2::ZERO, Vec2::ONE),
//!     [true, false]
//! );
//! ```

use crate::common::{clamp_scalar, ComponentWise};
use crate::{Vec2, Vec3, Vec4};

/// Clamps texture coordinates to `[0, 1]`.
#[inline]
pub fn clamp_texcoord<T: ComponentWise>(t: T) -> T {
    clamp_scalar(t, 0.0, 1.0)
}

/// Tiles texture coordinates: the fractional part.
#[inline]
pub fn repeat<T: ComponentWise>(t: T) -> T {
    t.map(|v| v - v.floor())
}

/// Mirrors around zero, then tiles: `fract(|t|)`.
#[inline]
pub fn mirror_clamp<T: ComponentWise>(t: T) -> T {
    t.map(|v| {
        let a = v.abs();
        a - a.floor()
    })
}

/// Tiles with every other tile mirrored, so the pattern is continuous.
///
/// ```rust
/// use gmath_math::mirror_repeat;
///
/// assert_eq!(mirror_repeat(0.25_f32), 0.25);
/// assert_eq!(mirror_repeat(1.25_f32), 0.75);
/// assert_eq!(mirror_repeat(2.25_f32), 0.25);
/// assert_eq!(mirror_repeat(-0.25_f32), 0.25);
/// ```
#[inline]
pub fn mirror_repeat<T: ComponentWise>(t: T) -> T {
    t.map(|v| {
        let abs = v.abs();
        let floor = abs.floor();
        let rest = abs - floor;
        let tile = floor % 2.0;
        if tile + rest >= 1.0 { 1.0 - rest } else { rest }
    })
}

/// Interval membership tests, per component.
pub trait Bounded: Copy {
    /// `bool` for scalars, `[bool; N]` for vectors.
    type Mask;

    /// `min <= self <= max`.
    fn close_bounded(self, min: Self, max: Self) -> Self::Mask;

    /// `min < self < max`.
    fn open_bounded(self, min: Self, max: Self) -> Self::Mask;
}

impl Bounded for f32 {
    type Mask = bool;

    #[inline]
    fn close_bounded(self, min: Self, max: Self) -> bool {
        min <= self && self <= max
    }

    #[inline]
    fn open_bounded(self, min: Self, max: Self) -> bool {
        min < self && self < max
    }
}

macro_rules! impl_bounded_vec {
    ($($v:ident => $n:literal),+) => {
        $(
            impl Bounded for $v {
                type Mask = [bool; $n];

                #[inline]
                fn close_bounded(self, min: Self, max: Self) -> [bool; $n] {
                    let (v, lo, hi) = (self.to_array(), min.to_array(), max.to_array());
                    std::array::from_fn(|i| v[i].close_bounded(lo[i], hi[i]))
                }

                #[inline]
                fn open_bounded(self, min: Self, max: Self) -> [bool; $n] {
                    let (v, lo, hi) = (self.to_array(), min.to_array(), max.to_array());
                    std::array::from_fn(|i| v[i].open_bounded(lo[i], hi[i]))
                }
            }
        )+
    };
}

impl_bounded_vec!(Vec2 => 2, Vec3 => 3, Vec4 => 4);

/// Whether `value` lies in the closed interval `[min, max]`.
///
/// NaN is never bounded.
#[inline]
pub fn close_bounded<T: Bounded>(value: T, min: T, max: T) -> T::Mask {
    value.close_bounded(min, max)
}

/// Whether `value` lies in the open interval `(min, max)`.
#[inline]
pub fn open_bounded<T: Bounded>(value: T, min: T, max: T) -> T::Mask {
    value.open_bounded(min, max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_clamp_and_repeat() {
        assert_eq!(clamp_texcoord(Vec2::new(-0.5, 1.5)), Vec2::new(0.0, 1.0));
        assert_eq!(repeat(Vec3::new(1.5, -0.25, 3.0)), Vec3::new(0.5, 0.75, 0.0));
    }

    #[test]
    fn test_mirror_clamp() {
        assert_eq!(mirror_clamp(-1.25_f32), 0.25);
        assert_eq!(mirror_clamp(1.25_f32), 0.25);
    }

    #[test]
    fn test_mirror_repeat_is_continuous() {
        let mut prev = mirror_repeat(-3.0_f32);
        for i in 1..=600 {
            let t = -3.0 + i as f32 * 0.01;
            let v = mirror_repeat(t);
            assert!((0.0..=1.0).contains(&v));
            assert!((v - prev).abs() <= 0.0101, "jump at {t}: {prev} -> {v}");
            prev = v;
        }
        assert_abs_diff_eq!(mirror_repeat(1.0_f32), 1.0);
        assert_abs_diff_eq!(mirror_repeat(2.0_f32), 0.0);
    }

    #[test]
    fn test_close_bounded_scalar() {
        assert!(close_bounded(0.0_f32, 0.0, 1.0));
        assert!(close_bounded(1.0_f32, 0.0, 1.0));
        assert!(!close_bounded(1.0001_f32, 0.0, 1.0));
        assert!(!close_bounded(f32::NAN, 0.0, 1.0));
    }

    #[test]
    fn test_open_bounded_scalar() {
        assert!(open_bounded(0.5_f32, 0.0, 1.0));
        assert!(!open_bounded(0.0_f32, 0.0, 1.0));
        assert!(!open_bounded(1.0_f32, 0.0, 1.0));
    }

    #[test]
    fn test_bounded_vectors() {
        let v = Vec4::new(0.0, 0.5, 1.0, 2.0);
        assert_eq!(close_bounded(v, Vec4::ZERO, Vec4::ONE), [true, true, true, false]);
        assert_eq!(open_bounded(v, Vec4::ZERO, Vec4::ONE), [false, true, false, false]);
        let w = Vec3::new(-1.0, 0.0, 1.0);
        assert_eq!(close_bounded(w, Vec3::splat(-1.0), Vec3::ZERO), [true, true, false]);
    }
}
