//! Luminosity and saturation.

use gmath_math::{Mat4, Vec3, Vec4};

/// Rec.709 luma weights used by [`saturation`].
pub const REC709_LUMA: Vec3 = Vec3::new(0.2126, 0.7152, 0.0722);

/// Weights of [`luminosity`].
pub const LUMINOSITY_WEIGHTS: Vec3 = Vec3::new(0.33, 0.59, 0.11);

/// Saturation matrix for RGB(A) colours.
///
/// `s = 1` is the identity, `s = 0` collapses every colour to its Rec.709
/// luma, `s > 1` oversaturates. Alpha (the fourth component) is untouched.
///
/// ```rust
/// use gmath_color::saturation;
/// use gmath_math::{Mat4, Vec4};
///
/// assert!(saturation(1.0).abs_diff_eq(&Mat4::IDENTITY, 1e-7));
///
/// let grey = saturation(0.0) * Vec4::new(1.0, 0.0, 0.0, 1.0);
/// assert!((grey.x - 0.2126).abs() < 1e-6);
/// assert_eq!(grey.x, grey.y);
/// assert_eq!(grey.w, 1.0);
/// ```
pub fn saturation(s: f32) -> Mat4 {
    let c = REC709_LUMA * (1.0 - s);
    Mat4::from_rows([
        [c.x + s, c.y, c.z, 0.0],
        [c.x, c.y + s, c.z, 0.0],
        [c.x, c.y, c.z + s, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Applies [`saturation`] to an RGB colour.
#[inline]
pub fn saturate_color(s: f32, rgb: Vec3) -> Vec3 {
    (saturation(s) * rgb.extend(0.0)).truncate()
}

/// Applies [`saturation`] to an RGBA colour, keeping alpha.
#[inline]
pub fn saturate_color4(s: f32, rgba: Vec4) -> Vec4 {
    saturation(s) * rgba
}

/// Weighted sum `0.33 r + 0.59 g + 0.11 b`.
///
/// The weights sum to `1.03`, so white has luminosity slightly above one.
#[inline]
pub fn luminosity(rgb: Vec3) -> f32 {
    rgb.dot(LUMINOSITY_WEIGHTS)
}
