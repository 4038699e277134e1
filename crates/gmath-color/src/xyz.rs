//! Linear sRGB and CIE XYZ conversions.
//!
//! All matrices are row-major and act on column vectors, matching
//! [`Mat3`]. The sRGB primaries come from IEC 61966-2-1; the D50 variants
//! are Bradford-adapted.
//!
//! # Usage
//!
//! ```rust
//! use gmath_color::{convert_d65_xyz_to_linear_srgb, convert_linear_srgb_to_d65_xyz};
//! use gmath_math::Vec3;
//!
//! // sRGB white maps to the D65 white point
//! let xyz = convert_linear_srgb_to_d65_xyz(Vec3::ONE);
//! assert!((xyz.x - 0.95047).abs() < 1e-4);
//! assert!((xyz.y - 1.0).abs() < 1e-4);
//!
//! let rgb = convert_d65_xyz_to_linear_srgb(xyz);
//! assert!((rgb - Vec3::ONE).length() < 1e-4);
//! ```

use std::fmt;
use std::str::FromStr;

use gmath_core::Error;
use gmath_math::{Mat3, Vec2, Vec3};

// ============================================================================
// Matrices
// ============================================================================

/// Linear sRGB to XYZ (D65).
pub const SRGB_TO_XYZ_D65: Mat3 = Mat3::from_rows([
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
]);

/// XYZ (D65) to linear sRGB.
pub const XYZ_D65_TO_SRGB: Mat3 = Mat3::from_rows([
    [3.2404542, -1.5371385, -0.4985314],
    [-0.9692660, 1.8760108, 0.0415560],
    [0.0556434, -0.2040259, 1.0572252],
]);

/// Linear sRGB to XYZ (D50), Bradford-adapted.
pub const SRGB_TO_XYZ_D50: Mat3 = Mat3::from_rows([
    [0.4360303, 0.3851019, 0.1430678],
    [0.2224385, 0.7169427, 0.0606188],
    [0.0138974, 0.0970764, 0.7139263],
]);

/// XYZ (D50) to linear sRGB.
pub const XYZ_D50_TO_SRGB: Mat3 = Mat3::from_rows([
    [3.1339244, -1.6169236, -0.4907337],
    [-0.9784215, 1.9158431, 0.0333991],
    [0.0720358, -0.2290322, 1.4057160],
]);

/// Bradford D65 to D50 adaptation.
pub const XYZ_D65_TO_D50: Mat3 = Mat3::from_rows([
    [1.0478444, 0.0248984, -0.0502066],
    [0.0295490, 0.9905080, -0.0170747],
    [-0.0092510, 0.0150723, 0.7517178],
]);

/// Bradford D50 to D65 adaptation.
pub const XYZ_D50_TO_D65: Mat3 = Mat3::from_rows([
    [0.9556032, -0.0249836, 0.0632564],
    [-0.0282952, 1.0099739, 0.0210510],
    [0.0123274, -0.0205579, 1.3306428],
]);

// ============================================================================
// Conversions
// ============================================================================

/// Linear sRGB to CIE XYZ with a D65 white.
#[inline]
pub fn convert_linear_srgb_to_d65_xyz(rgb: Vec3) -> Vec3 {
    SRGB_TO_XYZ_D65 * rgb
}

/// CIE XYZ (D65) to linear sRGB.
#[inline]
pub fn convert_d65_xyz_to_linear_srgb(xyz: Vec3) -> Vec3 {
    XYZ_D65_TO_SRGB * xyz
}

/// Linear sRGB to CIE XYZ with a D50 white.
///
/// Approximately equal to converting to D65 XYZ and adapting with
/// [`convert_d65_xyz_to_d50_xyz`]; the published matrices differ by about
/// `5e-4`.
#[inline]
pub fn convert_linear_srgb_to_d50_xyz(rgb: Vec3) -> Vec3 {
    SRGB_TO_XYZ_D50 * rgb
}

/// CIE XYZ (D50) to linear sRGB.
#[inline]
pub fn convert_d50_xyz_to_linear_srgb(xyz: Vec3) -> Vec3 {
    XYZ_D50_TO_SRGB * xyz
}

/// Adapts XYZ from a D65 to a D50 white (Bradford).
#[inline]
pub fn convert_d65_xyz_to_d50_xyz(xyz: Vec3) -> Vec3 {
    XYZ_D65_TO_D50 * xyz
}

/// Adapts XYZ from a D50 to a D65 white (Bradford).
#[inline]
pub fn convert_d50_xyz_to_d65_xyz(xyz: Vec3) -> Vec3 {
    XYZ_D50_TO_D65 * xyz
}

/// Chromaticity coordinates `(x, y)` of an XYZ colour.
///
/// Black (`X + Y + Z == 0`) has no chromaticity and maps to `(0, 0)`.
///
/// ```rust
/// use gmath_color::{xyz_to_xy, D65};
///
/// let xy = xyz_to_xy(D65);
/// assert!((xy.x - 0.3127).abs() < 1e-4);
/// assert!((xy.y - 0.3290).abs() < 1e-4);
/// ```
#[inline]
pub fn xyz_to_xy(xyz: Vec3) -> Vec2 {
    let sum = xyz.x + xyz.y + xyz.z;
    if sum == 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(xyz.x / sum, xyz.y / sum)
}

/// XYZ from chromaticity `(x, y)` and luminance `Y`.
///
/// `y == 0` maps to black.
#[inline]
pub fn xy_to_xyz(xy: Vec2, luminance: f32) -> Vec3 {
    if xy.y == 0.0 {
        return Vec3::ZERO;
    }
    let scale = luminance / xy.y;
    Vec3::new(xy.x * scale, luminance, (1.0 - xy.x - xy.y) * scale)
}

// ============================================================================
// Named spaces
// ============================================================================

/// The linear spaces this module converts between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColorSpace {
    /// Linear-light sRGB primaries.
    LinearSrgb,
    /// CIE XYZ with a D65 white.
    XyzD65,
    /// CIE XYZ with a D50 white.
    XyzD50,
}

impl ColorSpace {
    /// All spaces.
    pub const ALL: [ColorSpace; 3] = [Self::LinearSrgb, Self::XyzD65, Self::XyzD50];

    /// Matrix taking values in `self` to values in `to`.
    pub fn matrix_to(self, to: ColorSpace) -> Mat3 {
        use ColorSpace::*;
        match (self, to) {
            (LinearSrgb, XyzD65) => SRGB_TO_XYZ_D65,
            (LinearSrgb, XyzD50) => SRGB_TO_XYZ_D50,
            (XyzD65, LinearSrgb) => XYZ_D65_TO_SRGB,
            (XyzD65, XyzD50) => XYZ_D65_TO_D50,
            (XyzD50, LinearSrgb) => XYZ_D50_TO_SRGB,
            (XyzD50, XyzD65) => XYZ_D50_TO_D65,
            _ => Mat3::IDENTITY,
        }
    }

    /// Converts `v` from `self` to `to`.
    ///
    /// ```rust
    /// use gmath_color::ColorSpace;
    /// use gmath_math::Vec3;
    ///
    /// let xyz = ColorSpace::LinearSrgb.convert(Vec3::ONE, ColorSpace::XyzD50);
    /// assert!((xyz.y - 1.0).abs() < 1e-4);
    /// ```
    #[inline]
    pub fn convert(self, v: Vec3, to: ColorSpace) -> Vec3 {
        self.matrix_to(to) * v
    }

    /// Short name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::LinearSrgb => "linear-srgb",
            Self::XyzD65 => "d65",
            Self::XyzD50 => "d50",
        }
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorSpace {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "linear-srgb" | "linear_srgb" | "srgb" | "rgb" => Ok(Self::LinearSrgb),
            "d65" | "xyz" | "xyz-d65" | "xyz_d65" => Ok(Self::XyzD65),
            "d50" | "xyz-d50" | "xyz_d50" => Ok(Self::XyzD50),
            _ => Err(Error::parse(format!("unknown colour space '{s}'"))),
        }
    }
}
