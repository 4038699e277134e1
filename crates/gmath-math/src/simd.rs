//! SIMD batch versions of the hot scalar functions.
//!
//! Uses the `wide` crate for portable SIMD on stable Rust. Slices are
//! processed eight lanes at a time (`f32x8`) with a scalar tail, and every
//! batch function agrees with its scalar counterpart in [`common`] or
//! [`easing`].
//!
//! - `_x4` / `_x8` helpers work on a single fixed-size array
//! - `batch_*` functions work on slices of any length
//!
//! # Example
//!
//! ```rust
//! use gmath_math::simd::{batch_clamp, batch_cubic_ease_in_out};
//!
//! let values = [-0.5, 0.25, 0.5, 0.75, 1.5, 0.1, 0.2, 0.3, 0.4];
//! let clamped = batch_clamp(&values, 0.0, 1.0);
//! assert_eq!(clamped[0], 0.0);
//! assert_eq!(clamped[4], 1.0);
//!
//! let eased = batch_cubic_ease_in_out(&clamped);
//! assert_eq!(eased[2], 0.5);
//! ```
//!
//! [`common`]: crate::common
//! [`easing`]: crate::easing

use gmath_core::constants::NEAR_ZERO;
use wide::{f32x4, f32x8, CmpLt};

use crate::easing::cubic_ease_in_out;
use crate::Mat3;

#[inline]
fn load8(chunk: &[f32]) -> f32x8 {
    let mut lanes = [0.0; 8];
    lanes.copy_from_slice(chunk);
    f32x8::from(lanes)
}

/// Clamps 4 values to `[lo, hi]`.
///
/// ```rust
/// use gmath_math::simd::clamp_x4;
///
/// assert_eq!(clamp_x4(&[-0.1, 0.5, 1.2, 0.8], 0.0, 1.0), [0.0, 0.5, 1.0, 0.8]);
/// ```
#[inline]
pub fn clamp_x4(values: &[f32; 4], lo: f32, hi: f32) -> [f32; 4] {
    let v = f32x4::from(*values);
    v.max(f32x4::splat(lo)).min(f32x4::splat(hi)).to_array()
}

/// Clamps 8 values to `[lo, hi]`.
#[inline]
pub fn clamp_x8(values: &[f32; 8], lo: f32, hi: f32) -> [f32; 8] {
    let v = f32x8::from(*values);
    v.max(f32x8::splat(lo)).min(f32x8::splat(hi)).to_array()
}

/// Batch clamp to `[lo, hi]`.
pub fn batch_clamp(values: &[f32], lo: f32, hi: f32) -> Vec<f32> {
    let mut result = Vec::with_capacity(values.len());
    let chunks = values.chunks_exact(8);
    let remainder = chunks.remainder();

    let vlo = f32x8::splat(lo);
    let vhi = f32x8::splat(hi);

    for chunk in chunks {
        result.extend_from_slice(&load8(chunk).max(vlo).min(vhi).to_array());
    }

    for &v in remainder {
        result.push(v.max(lo).min(hi));
    }

    result
}

/// Batch clamp in place.
pub fn batch_clamp_inplace(values: &mut [f32], lo: f32, hi: f32) {
    let vlo = f32x8::splat(lo);
    let vhi = f32x8::splat(hi);

    let mut chunks = values.chunks_exact_mut(8);
    for chunk in &mut chunks {
        let clamped = load8(chunk).max(vlo).min(vhi).to_array();
        chunk.copy_from_slice(&clamped);
    }
    for v in chunks.into_remainder() {
        *v = v.max(lo).min(hi);
    }
}

/// `a + (b - a) * t` on 4 lanes.
#[inline]
pub fn mix_x4(a: &[f32; 4], b: &[f32; 4], t: f32) -> [f32; 4] {
    let va = f32x4::from(*a);
    let vb = f32x4::from(*b);
    (va + (vb - va) * f32x4::splat(t)).to_array()
}

/// `a + (b - a) * t` on 8 lanes.
#[inline]
pub fn mix_x8(a: &[f32; 8], b: &[f32; 8], t: f32) -> [f32; 8] {
    let va = f32x8::from(*a);
    let vb = f32x8::from(*b);
    (va + (vb - va) * f32x8::splat(t)).to_array()
}

/// Batch linear interpolation.
///
/// # Panics
///
/// Panics if `a` and `b` differ in length.
pub fn batch_mix(a: &[f32], b: &[f32], t: f32) -> Vec<f32> {
    assert_eq!(a.len(), b.len(), "batch_mix: slice lengths differ");
    let mut result = Vec::with_capacity(a.len());

    let a_chunks = a.chunks_exact(8);
    let b_chunks = b.chunks_exact(8);
    let a_rem = a_chunks.remainder();
    let b_rem = b_chunks.remainder();

    let vt = f32x8::splat(t);

    for (a_chunk, b_chunk) in a_chunks.zip(b_chunks) {
        let va = load8(a_chunk);
        let vb = load8(b_chunk);
        result.extend_from_slice(&(va + (vb - va) * vt).to_array());
    }

    for (&av, &bv) in a_rem.iter().zip(b_rem) {
        result.push(av + (bv - av) * t);
    }

    result
}

/// Hermite smoothstep of 8 values against scalar edges.
#[inline]
pub fn smoothstep_x8(edge0: f32, edge1: f32, values: &[f32; 8]) -> [f32; 8] {
    smoothstep_lanes(edge0, edge1, f32x8::from(*values)).to_array()
}

#[inline]
fn smoothstep_lanes(edge0: f32, edge1: f32, x: f32x8) -> f32x8 {
    let range = edge1 - edge0;
    if range.abs() < NEAR_ZERO {
        // degenerate range: the scalar version treats every x as t = 0
        return f32x8::splat(0.0);
    }
    let t = ((x - f32x8::splat(edge0)) * f32x8::splat(1.0 / range))
        .max(f32x8::splat(0.0))
        .min(f32x8::splat(1.0));
    t * t * (f32x8::splat(3.0) - f32x8::splat(2.0) * t)
}

/// Batch Hermite smoothstep against scalar edges.
pub fn batch_smoothstep(edge0: f32, edge1: f32, values: &[f32]) -> Vec<f32> {
    let mut result = Vec::with_capacity(values.len());
    let chunks = values.chunks_exact(8);
    let remainder = chunks.remainder();

    for chunk in chunks {
        result.extend_from_slice(&smoothstep_lanes(edge0, edge1, load8(chunk)).to_array());
    }

    for &v in remainder {
        result.push(crate::common::smoothstep(edge0, edge1, v));
    }

    result
}

/// Cubic in-out easing of 8 values in `[0, 1]`.
#[inline]
pub fn cubic_ease_in_out_x8(values: &[f32; 8]) -> [f32; 8] {
    cubic_ease_in_out_lanes(f32x8::from(*values)).to_array()
}

#[inline]
fn cubic_ease_in_out_lanes(a: f32x8) -> f32x8 {
    let lower = f32x8::splat(4.0) * a * a * a;
    let f = f32x8::splat(2.0) * a - f32x8::splat(2.0);
    let upper = f32x8::splat(0.5) * f * f * f + f32x8::splat(1.0);
    a.cmp_lt(f32x8::splat(0.5)).blend(lower, upper)
}

/// Batch cubic in-out easing.
pub fn batch_cubic_ease_in_out(values: &[f32]) -> Vec<f32> {
    let mut result = Vec::with_capacity(values.len());
    let chunks = values.chunks_exact(8);
    let remainder = chunks.remainder();

    for chunk in chunks {
        result.extend_from_slice(&cubic_ease_in_out_lanes(load8(chunk)).to_array());
    }

    for &v in remainder {
        result.push(cubic_ease_in_out(v));
    }

    result
}

/// Dot product of 4-element arrays.
#[inline]
pub fn dot_x4(a: &[f32; 4], b: &[f32; 4]) -> f32 {
    (f32x4::from(*a) * f32x4::from(*b)).reduce_add()
}

/// Applies the same 3x3 matrix to many RGB/XYZ triples.
///
/// ```rust
/// use gmath_math::{simd::batch_mat3_transform, Mat3};
///
/// let out = batch_mat3_transform(&Mat3::scale(2.0), &[[0.5, 0.25, 1.0]]);
/// assert_eq!(out, vec![[1.0, 0.5, 2.0]]);
/// ```
pub fn batch_mat3_transform(m: &Mat3, values: &[[f32; 3]]) -> Vec<[f32; 3]> {
    // Rows padded to 4 lanes
    let rows = m.m.map(|r| f32x4::from([r[0], r[1], r[2], 0.0]));
    values
        .iter()
        .map(|v| {
            let v4 = f32x4::from([v[0], v[1], v[2], 0.0]);
            rows.map(|r| (r * v4).reduce_add())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{mix, smoothstep};

    fn ramp(n: usize) -> Vec<f32> {
        (0..n).map(|i| i as f32 / (n - 1) as f32).collect()
    }

    #[test]
    fn test_clamp_x8() {
        let v = [-2.0, -0.5, 0.0, 0.5, 1.0, 1.5, 2.0, 0.25];
        assert_eq!(clamp_x8(&v, 0.0, 1.0), [0.0, 0.0, 0.0, 0.5, 1.0, 1.0, 1.0, 0.25]);
    }

    #[test]
    fn test_batch_clamp_matches_scalar() {
        let values: Vec<f32> = (0..21).map(|i| i as f32 * 0.2 - 2.0).collect();
        let batch = batch_clamp(&values, -1.0, 1.0);
        assert_eq!(batch.len(), values.len());
        for (b, v) in batch.iter().zip(&values) {
            assert_eq!(*b, v.clamp(-1.0, 1.0));
        }

        let mut inplace = values.clone();
        batch_clamp_inplace(&mut inplace, -1.0, 1.0);
        assert_eq!(inplace, batch);
    }

    #[test]
    fn test_batch_mix_matches_scalar() {
        let a = ramp(19);
        let b: Vec<f32> = a.iter().map(|v| 1.0 - v).collect();
        let out = batch_mix(&a, &b, 0.3);
        for i in 0..a.len() {
            assert!((out[i] - mix(a[i], b[i], 0.3)).abs() < 1e-6);
        }
        let m = mix_x4(&[0.0; 4], &[1.0, 2.0, 3.0, 4.0], 0.5);
        assert_eq!(m, [0.5, 1.0, 1.5, 2.0]);
    }

    #[test]
    #[should_panic]
    fn test_batch_mix_length_mismatch() {
        let _ = batch_mix(&[0.0; 3], &[0.0; 4], 0.5);
    }

    #[test]
    fn test_batch_smoothstep_matches_scalar() {
        let values: Vec<f32> = (0..27).map(|i| i as f32 * 0.1 - 0.5).collect();
        let out = batch_smoothstep(0.2, 1.8, &values);
        for (o, v) in out.iter().zip(&values) {
            assert!((o - smoothstep(0.2, 1.8, *v)).abs() < 1e-6);
        }
        assert_eq!(batch_smoothstep(1.0, 1.0, &[0.0; 9]), vec![0.0; 9]);
    }

    #[test]
    fn test_batch_cubic_ease_matches_scalar() {
        let values = ramp(37);
        let out = batch_cubic_ease_in_out(&values);
        for (o, v) in out.iter().zip(&values) {
            assert!((o - cubic_ease_in_out(*v)).abs() < 1e-6);
        }
        let x8 = cubic_ease_in_out_x8(&[0.0, 0.25, 0.5, 0.75, 1.0, 0.1, 0.9, 0.45]);
        assert_eq!(x8[0], 0.0);
        assert_eq!(x8[2], 0.5);
        assert_eq!(x8[4], 1.0);
    }

    #[test]
    fn test_dot_and_mat3() {
        assert_eq!(dot_x4(&[1.0, 2.0, 3.0, 4.0], &[1.0; 4]), 10.0);
        let m = Mat3::from_rows([[1.0, 2.0, 3.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        let out = batch_mat3_transform(&m, &[[1.0, 1.0, 1.0], [0.0, 0.0, 2.0]]);
        assert_eq!(out, vec![[6.0, 1.0, 1.0], [6.0, 0.0, 2.0]]);
    }
}
