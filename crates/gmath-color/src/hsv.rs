//! RGB and HSV conversions.
//!
//! HSV vectors are `(hue, saturation, value)`. Hue is in degrees in
//! `[0, 360)`; saturation and value are in `[0, 1]` for RGB input in
//! `[0, 1]`.
//!
//! ```rust
//! use gmath_color::{hsv_to_rgb, rgb_to_hsv};
//! use gmath_math::Vec3;
//!
//! let hsv = rgb_to_hsv(Vec3::new(1.0, 0.0, 0.0));
//! assert_eq!(hsv, Vec3::new(0.0, 1.0, 1.0));
//!
//! let rgb = hsv_to_rgb(Vec3::new(120.0, 1.0, 1.0));
//! assert_eq!(rgb, Vec3::new(0.0, 1.0, 0.0));
//! ```

use gmath_math::Vec3;

/// Converts RGB to HSV.
///
/// Grey input (`max == min`) has hue 0, and black also has saturation 0.
pub fn rgb_to_hsv(rgb: Vec3) -> Vec3 {
    let (r, g, b) = (rgb.x, rgb.y, rgb.z);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    if max == 0.0 {
        return Vec3::new(0.0, 0.0, max);
    }
    let saturation = delta / max;
    if delta == 0.0 {
        return Vec3::new(0.0, saturation, max);
    }

    let mut hue = if r == max {
        60.0 * (g - b) / delta
    } else if g == max {
        120.0 + 60.0 * (b - r) / delta
    } else {
        240.0 + 60.0 * (r - g) / delta
    };
    if hue < 0.0 {
        hue += 360.0;
    }
    Vec3::new(hue, saturation, max)
}

/// Converts HSV to RGB.
///
/// Hue wraps, so `360` and `-60` are valid and mean `0` and `300`.
pub fn hsv_to_rgb(hsv: Vec3) -> Vec3 {
    let (s, v) = (hsv.y, hsv.z);
    if s == 0.0 {
        return Vec3::splat(v);
    }

    let mut h = hsv.x.rem_euclid(360.0) / 60.0;
    // rem_euclid can round up to exactly 360 for tiny negative hues
    if h >= 6.0 {
        h = 0.0;
    }
    let sector = h.floor();
    let frac = h - sector;

    let o = v * (1.0 - s);
    let p = v * (1.0 - s * frac);
    let q = v * (1.0 - s * (1.0 - frac));

    match sector as u32 {
        0 => Vec3::new(v, q, o),
        1 => Vec3::new(p, v, o),
        2 => Vec3::new(o, v, q),
        3 => Vec3::new(o, p, v),
        4 => Vec3::new(q, o, v),
        _ => Vec3::new(v, o, p),
    }
}
