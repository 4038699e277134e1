//! Reductions over the components of a single vector, and integer
//! normalization.
//!
//! ```rust
//! use gmath_math::{comp_add, comp_max, comp_normalize, comp_scale, Vec3};
//!
//! let v = Vec3::new(1.0, -2.0, 4.0);
//! assert_eq!(comp_add(v), 3.0);
//! assert_eq!(comp_max(v), 4.0);
//!
//! assert_eq!(comp_normalize([0u8, 255]), [0.0, 1.0]);
//! assert_eq!(comp_scale::<u8, 2>([0.0, 1.0]), [0, 255]);
//! ```

use gmath_core::Integer;

use crate::vector::Vector;

/// Sum of the components.
#[inline]
pub fn comp_add<V: Vector>(v: V) -> f32 {
    (0..V::DIM).map(|i| v[i]).sum()
}

/// Product of the components.
#[inline]
pub fn comp_mul<V: Vector>(v: V) -> f32 {
    (0..V::DIM).map(|i| v[i]).product()
}

/// Largest component. NaN components are ignored unless all are NaN.
#[inline]
pub fn comp_max<V: Vector>(v: V) -> f32 {
    (1..V::DIM).fold(v[0], |acc, i| acc.max(v[i]))
}

/// Smallest component. NaN components are ignored unless all are NaN.
#[inline]
pub fn comp_min<V: Vector>(v: V) -> f32 {
    (1..V::DIM).fold(v[0], |acc, i| acc.min(v[i]))
}

/// Maps integer components to normalized floats.
///
/// Unsigned types map `[0, MAX]` to `[0, 1]`. Signed types map
/// `[MIN, MAX]` to `[-1, 1]`; `MIN` is clamped to `-1` since its magnitude
/// exceeds `MAX` by one.
///
/// ```rust
/// use gmath_math::comp_normalize;
///
/// assert_eq!(comp_normalize([-128i8, 0, 127]), [-1.0, 0.0, 1.0]);
/// ```
#[inline]
pub fn comp_normalize<I: Integer, const N: usize>(v: [I; N]) -> [f32; N] {
    let max = I::MAX.to_f32();
    v.map(|c| {
        let f = c.to_f32() / max;
        if I::SIGNED { f.max(-1.0) } else { f }
    })
}

/// Inverse of [`comp_normalize`]: scales normalized floats to the full
/// integer range.
///
/// Inputs are clamped to `[0, 1]` (unsigned) or `[-1, 1]` (signed) and then
/// rounded to the nearest integer.
///
/// ```rust
/// use gmath_math::comp_scale;
///
/// assert_eq!(comp_scale::<i16, 3>([-1.0, 0.5, 2.0]), [-32767, 16384, 32767]);
/// ```
#[inline]
pub fn comp_scale<I: Integer, const N: usize>(v: [f32; N]) -> [I; N] {
    let max = I::MAX.to_f32();
    let lo = if I::SIGNED { -1.0 } else { 0.0 };
    v.map(|c| I::from_f32((c.clamp(lo, 1.0) * max).round()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Vec2, Vec3, Vec4};

    #[test]
    fn test_comp_add_mul() {
        assert_eq!(comp_add(Vec2::new(1.0, 2.0)), 3.0);
        assert_eq!(comp_add(Vec4::new(1.0, 2.0, 3.0, 4.0)), 10.0);
        assert_eq!(comp_mul(Vec3::new(2.0, 3.0, 4.0)), 24.0);
        assert_eq!(comp_mul(Vec4::new(2.0, 0.0, 4.0, 5.0)), 0.0);
    }

    #[test]
    fn test_comp_max_min() {
        let v = Vec4::new(3.0, -7.0, 11.0, 0.5);
        assert_eq!(comp_max(v), 11.0);
        assert_eq!(comp_min(v), -7.0);
        assert_eq!(comp_max(Vec2::new(f32::NAN, 1.0)), 1.0);
    }

    #[test]
    fn test_comp_normalize_unsigned() {
        let n = comp_normalize([0u8, 51, 255]);
        assert_eq!(n[0], 0.0);
        assert!((n[1] - 0.2).abs() < 1e-6);
        assert_eq!(n[2], 1.0);
        assert_eq!(comp_normalize([u16::MAX]), [1.0]);
    }

    #[test]
    fn test_comp_normalize_signed() {
        let n = comp_normalize([i16::MIN, -16384, i16::MAX]);
        assert_eq!(n[0], -1.0);
        assert!((n[1] + 0.5).abs() < 1e-4);
        assert_eq!(n[2], 1.0);
    }

    #[test]
    fn test_comp_scale_clamps() {
        assert_eq!(comp_scale::<u8, 4>([-0.5, 0.0, 0.5, 1.5]), [0, 0, 128, 255]);
        assert_eq!(comp_scale::<i8, 2>([-2.0, 2.0]), [-127, 127]);
        assert_eq!(comp_scale::<u32, 1>([1.0]), [u32::MAX]);
    }

    #[test]
    fn test_scale_inverts_normalize() {
        for c in 0u8..=255 {
            let n = comp_normalize([c]);
            assert_eq!(comp_scale::<u8, 1>(n), [c]);
        }
        for c in -127i8..=127 {
            assert_eq!(comp_scale::<i8, 1>(comp_normalize([c])), [c]);
        }
    }
}
