//! YCoCg and YCoCg-R colour transforms.
//!
//! YCoCg splits RGB into luma (`Y`) and orange/green chroma (`Co`, `Cg`)
//! using only additions and halvings. YCoCg-R is the lifting form of the
//! same transform: on integers it is exactly reversible.
//!
//! ```rust
//! use gmath_color::{rgb_to_ycocg_r_int, ycocg_r_int_to_rgb};
//!
//! let rgb = [200, 17, 96];
//! assert_eq!(ycocg_r_int_to_rgb(rgb_to_ycocg_r_int(rgb)), rgb);
//! ```

use gmath_math::Vec3;

/// RGB to `(Y, Co, Cg)`.
#[inline]
pub fn rgb_to_ycocg(rgb: Vec3) -> Vec3 {
    let (r, g, b) = (rgb.x, rgb.y, rgb.z);
    Vec3::new(
        r * 0.25 + g * 0.5 + b * 0.25,
        r * 0.5 - b * 0.5,
        -r * 0.25 + g * 0.5 - b * 0.25,
    )
}

/// `(Y, Co, Cg)` to RGB.
#[inline]
pub fn ycocg_to_rgb(ycocg: Vec3) -> Vec3 {
    let (y, co, cg) = (ycocg.x, ycocg.y, ycocg.z);
    Vec3::new(y + co - cg, y + cg, y - co - cg)
}

/// RGB to YCoCg-R.
///
/// `Co` and `Cg` have twice the range of the plain YCoCg chroma.
#[inline]
pub fn rgb_to_ycocg_r(rgb: Vec3) -> Vec3 {
    let co = rgb.x - rgb.z;
    let tmp = rgb.z + co * 0.5;
    let cg = rgb.y - tmp;
    let y = tmp + cg * 0.5;
    Vec3::new(y, co, cg)
}

/// YCoCg-R to RGB.
#[inline]
pub fn ycocg_r_to_rgb(ycocg: Vec3) -> Vec3 {
    let (y, co, cg) = (ycocg.x, ycocg.y, ycocg.z);
    let tmp = y - cg * 0.5;
    let g = cg + tmp;
    let b = tmp - co * 0.5;
    let r = b + co;
    Vec3::new(r, g, b)
}

/// Integer YCoCg-R with floor halving (arithmetic shift). Lossless.
#[inline]
pub fn rgb_to_ycocg_r_int(rgb: [i32; 3]) -> [i32; 3] {
    let [r, g, b] = rgb;
    let co = r - b;
    let tmp = b + (co >> 1);
    let cg = g - tmp;
    let y = tmp + (cg >> 1);
    [y, co, cg]
}

/// Inverse of [`rgb_to_ycocg_r_int`].
#[inline]
pub fn ycocg_r_int_to_rgb(ycocg: [i32; 3]) -> [i32; 3] {
    let [y, co, cg] = ycocg;
    let tmp = y - (cg >> 1);
    let g = cg + tmp;
    let b = tmp - (co >> 1);
    let r = b + co;
    [r, g, b]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ycocg_primaries() {
        assert_eq!(rgb_to_ycocg(Vec3::ONE), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(rgb_to_ycocg(Vec3::new(1.0, 0.0, 0.0)), Vec3::new(0.25, 0.5, -0.25));
        assert_eq!(rgb_to_ycocg(Vec3::new(0.0, 1.0, 0.0)), Vec3::new(0.5, 0.0, 0.5));
    }

    #[test]
    fn test_ycocg_roundtrip() {
        let rgb = Vec3::new(0.8, 0.3, 0.1);
        let back = ycocg_to_rgb(rgb_to_ycocg(rgb));
        assert!((back - rgb).length() < 1e-6);
    }

    #[test]
    fn test_ycocg_r_matches_scaled_ycocg() {
        let rgb = Vec3::new(0.75, 0.5, 0.25);
        let plain = rgb_to_ycocg(rgb);
        let r = rgb_to_ycocg_r(rgb);
        assert!((r.x - plain.x).abs() < 1e-6);
        assert!((r.y - plain.y * 2.0).abs() < 1e-6);
        assert!((r.z - plain.z * 2.0).abs() < 1e-6);
        assert!((ycocg_r_to_rgb(r) - rgb).length() < 1e-6);
    }

    #[test]
    fn test_ycocg_r_int_lossless() {
        for r in (0..256).step_by(15) {
            for g in (0..256).step_by(17) {
                for b in (0..256).step_by(13) {
                    let rgb = [r, g, b];
                    assert_eq!(ycocg_r_int_to_rgb(rgb_to_ycocg_r_int(rgb)), rgb);
                }
            }
        }
        // grey has no chroma
        assert_eq!(rgb_to_ycocg_r_int([90, 90, 90]), [90, 0, 0]);
    }
}
