//! sRGB transfer function.
//!
//! The sRGB standard uses a piecewise function combining a linear segment
//! near black with a power curve (approximately gamma 2.2) for the rest.
//!
//! The conversions work on `f32`, [`Vec3`] (RGB) and [`Vec4`] (RGBA, alpha
//! passes through unchanged) through the [`ColorEncoding`] trait.
//!
//! # Range
//!
//! - Linear to sRGB: input is clamped to [0, 1]
//! - sRGB to linear: no clamping
//!
//! # Reference
//!
//! IEC 61966-2-1:1999

use gmath_math::{Vec3, Vec4};

/// Exponent of the standard sRGB power segment.
pub const SRGB_GAMMA: f32 = 2.4;

/// Linear-light threshold below which the encoding is linear.
pub const LINEAR_THRESHOLD: f32 = 0.0031308;

/// Encoded threshold below which the decoding is linear.
pub const ENCODED_THRESHOLD: f32 = 0.04045;

/// Values that carry an sRGB encoding.
pub trait ColorEncoding: Copy {
    /// Encodes linear light with the power segment `x^(1/gamma)`.
    fn linear_to_srgb_gamma(self, gamma: f32) -> Self;

    /// Decodes to linear light with the power segment `x^gamma`.
    fn srgb_to_linear_gamma(self, gamma: f32) -> Self;
}

impl ColorEncoding for f32 {
    #[inline]
    fn linear_to_srgb_gamma(self, gamma: f32) -> f32 {
        let l = self.clamp(0.0, 1.0);
        if l < LINEAR_THRESHOLD {
            l * 12.92
        } else {
            1.055 * l.powf(1.0 / gamma) - 0.055
        }
    }

    #[inline]
    fn srgb_to_linear_gamma(self, gamma: f32) -> f32 {
        if self <= ENCODED_THRESHOLD {
            self / 12.92
        } else {
            ((self + 0.055) / 1.055).powf(gamma)
        }
    }
}

impl ColorEncoding for Vec3 {
    #[inline]
    fn linear_to_srgb_gamma(self, gamma: f32) -> Vec3 {
        self.map(|c| c.linear_to_srgb_gamma(gamma))
    }

    #[inline]
    fn srgb_to_linear_gamma(self, gamma: f32) -> Vec3 {
        self.map(|c| c.srgb_to_linear_gamma(gamma))
    }
}

impl ColorEncoding for Vec4 {
    #[inline]
    fn linear_to_srgb_gamma(self, gamma: f32) -> Vec4 {
        self.truncate().linear_to_srgb_gamma(gamma).extend(self.w)
    }

    #[inline]
    fn srgb_to_linear_gamma(self, gamma: f32) -> Vec4 {
        self.truncate().srgb_to_linear_gamma(gamma).extend(self.w)
    }
}

/// Encodes linear light to sRGB.
///
/// # Formula
///
/// ```text
/// L = clamp(L, 0, 1)
/// if L < 0.0031308:
///     V = L * 12.92
/// else:
///     V = 1.055 * L^(1/2.4) - 0.055
/// ```
///
/// # Example
///
/// ```rust
/// use gmath_color::convert_linear_to_srgb;
/// use gmath_math::Vec4;
///
/// let encoded = convert_linear_to_srgb(0.214_f32);
/// assert!((encoded - 0.5).abs() < 0.01);
///
/// // Alpha is not encoded
/// let rgba = convert_linear_to_srgb(Vec4::new(0.214, 0.214, 0.214, 0.3));
/// assert_eq!(rgba.w, 0.3);
/// ```
#[inline]
pub fn convert_linear_to_srgb<C: ColorEncoding>(linear: C) -> C {
    linear.linear_to_srgb_gamma(SRGB_GAMMA)
}

/// [`convert_linear_to_srgb`] with a custom exponent for the power segment.
///
/// `gamma = 2.4` is the standard curve.
#[inline]
pub fn convert_linear_to_srgb_gamma<C: ColorEncoding>(linear: C, gamma: f32) -> C {
    linear.linear_to_srgb_gamma(gamma)
}

/// Decodes sRGB to linear light.
///
/// # Formula
///
/// ```text
/// if V <= 0.04045:
///     L = V / 12.92
/// else:
///     L = ((V + 0.055) / 1.055)^2.4
/// ```
///
/// # Example
///
/// ```rust
/// use gmath_color::convert_srgb_to_linear;
///
/// let linear = convert_srgb_to_linear(0.5_f32);
/// assert!((linear - 0.214).abs() < 0.01);
/// ```
#[inline]
pub fn convert_srgb_to_linear<C: ColorEncoding>(srgb: C) -> C {
    srgb.srgb_to_linear_gamma(SRGB_GAMMA)
}

/// [`convert_srgb_to_linear`] with a custom exponent for the power segment.
#[inline]
pub fn convert_srgb_to_linear_gamma<C: ColorEncoding>(srgb: C, gamma: f32) -> C {
    srgb.srgb_to_linear_gamma(gamma)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_roundtrip() {
        for i in 0..=100 {
            let v = i as f32 / 100.0;
            let linear = convert_srgb_to_linear(v);
            let back = convert_linear_to_srgb(linear);
            assert!((v - back).abs() < 1e-5, "v={}, back={}", v, back);
        }
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(convert_srgb_to_linear(0.0_f32), 0.0);
        assert!((convert_srgb_to_linear(1.0_f32) - 1.0).abs() < 1e-6);
        assert_eq!(convert_linear_to_srgb(0.0_f32), 0.0);
        assert!((convert_linear_to_srgb(1.0_f32) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_linear_segment() {
        assert_abs_diff_eq!(convert_linear_to_srgb(0.001_f32), 0.01292, epsilon = 1e-7);
        assert_abs_diff_eq!(convert_srgb_to_linear(0.04_f32), 0.04 / 12.92, epsilon = 1e-7);
    }

    #[test]
    fn test_encode_clamps() {
        assert_eq!(convert_linear_to_srgb(-0.5_f32), 0.0);
        assert!((convert_linear_to_srgb(4.0_f32) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_vec3_per_channel() {
        let rgb = Vec3::new(0.0, 0.214, 1.0);
        let enc = convert_linear_to_srgb(rgb);
        assert_eq!(enc.x, 0.0);
        assert_eq!(enc.y, convert_linear_to_srgb(0.214_f32));
        assert_abs_diff_eq!(enc.z, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_vec4_alpha_passthrough() {
        let rgba = Vec4::new(0.5, 0.5, 0.5, 0.5);
        let lin = convert_srgb_to_linear(rgba);
        assert_eq!(lin.w, 0.5);
        assert!(lin.x < 0.5);
    }

    #[test]
    fn test_custom_gamma() {
        // Same as the standard curve at the default exponent
        assert_eq!(
            convert_linear_to_srgb_gamma(0.3_f32, SRGB_GAMMA),
            convert_linear_to_srgb(0.3_f32)
        );
        // A larger gamma brightens mid tones on encode
        assert!(convert_linear_to_srgb_gamma(0.3_f32, 3.0) > convert_linear_to_srgb(0.3_f32));
        assert!(convert_srgb_to_linear_gamma(0.5_f32, 3.0) < convert_srgb_to_linear(0.5_f32));
    }
}
