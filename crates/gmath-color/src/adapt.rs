//! Chromatic adaptation transforms (CAT).
//!
//! Matrices and functions for adapting XYZ colours between illuminants
//! (white points). The fixed D65/D50 Bradford pair used by the sRGB
//! conversions lives in [`xyz`](crate::xyz); this module builds the
//! general case.
//!
//! Cone spaces: [`BRADFORD`] (the default), [`VON_KRIES`], [`CAT02`] and
//! plain [`XYZ_SCALING`].
//!
//! # Usage
//!
//! ```rust
//! use gmath_color::{adapt_matrix, BRADFORD, D50, D65};
//!
//! let d65_to_d50 = adapt_matrix(BRADFORD, D65, D50)?;
//!
//! let white = d65_to_d50 * D65;
//! assert!((white.x - D50.x).abs() < 1e-4);
//! assert!((white.z - D50.z).abs() < 1e-4);
//! # Ok::<(), gmath_core::Error>(())
//! ```

use std::fmt;
use std::str::FromStr;

use gmath_core::constants::NEAR_ZERO;
use gmath_core::{Error, Result};
use gmath_math::{Mat3, Vec3};
use tracing::debug;

// ============================================================================
// White points (XYZ, Y = 1)
// ============================================================================

/// D65, noon daylight. The sRGB white.
pub const D65: Vec3 = Vec3::new(0.95047, 1.0, 1.08883);

/// D50, the ICC connection space white.
pub const D50: Vec3 = Vec3::new(0.96422, 1.0, 0.82521);

/// D55.
pub const D55: Vec3 = Vec3::new(0.95682, 1.0, 0.92149);

/// D60, the ACES white.
pub const D60: Vec3 = Vec3::new(0.95265, 1.0, 1.00883);

/// Illuminant A, incandescent.
pub const ILLUMINANT_A: Vec3 = Vec3::new(1.09850, 1.0, 0.35585);

/// Illuminant E, equal energy.
pub const ILLUMINANT_E: Vec3 = Vec3::new(1.0, 1.0, 1.0);

/// Named illuminants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Illuminant {
    /// Daylight, ~6500K
    #[default]
    D65,
    /// Horizon light, ~5000K
    D50,
    /// Mid-morning daylight, ~5500K
    D55,
    /// ~6000K
    D60,
    /// Tungsten
    A,
    /// Equal energy
    E,
}

impl Illuminant {
    /// XYZ white point with `Y = 1`.
    pub const fn white_point(self) -> Vec3 {
        match self {
            Self::D65 => D65,
            Self::D50 => D50,
            Self::D55 => D55,
            Self::D60 => D60,
            Self::A => ILLUMINANT_A,
            Self::E => ILLUMINANT_E,
        }
    }
}

impl fmt::Display for Illuminant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::D65 => "D65",
            Self::D50 => "D50",
            Self::D55 => "D55",
            Self::D60 => "D60",
            Self::A => "A",
            Self::E => "E",
        };
        f.write_str(name)
    }
}

impl FromStr for Illuminant {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "d65" => Ok(Self::D65),
            "d50" => Ok(Self::D50),
            "d55" => Ok(Self::D55),
            "d60" | "aces" => Ok(Self::D60),
            "a" | "tungsten" => Ok(Self::A),
            "e" | "equal" => Ok(Self::E),
            _ => Err(Error::parse(format!("unknown illuminant '{s}'"))),
        }
    }
}

// ============================================================================
// Cone response matrices
// ============================================================================

/// Bradford XYZ to sharpened-cone matrix (Lam, 1985).
pub const BRADFORD: Mat3 = Mat3::from_rows([
    [0.8951, 0.2664, -0.1614],
    [-0.7502, 1.7135, 0.0367],
    [0.0389, -0.0685, 1.0296],
]);

/// Von Kries chromatic adaptation matrix (Hunt-Pointer-Estevez cones).
pub const VON_KRIES: Mat3 = Mat3::from_rows([
    [0.40024, 0.70760, -0.08081],
    [-0.22630, 1.16532, 0.04570],
    [0.00000, 0.00000, 0.91822],
]);

/// CAT02 chromatic adaptation matrix, from CIECAM02.
pub const CAT02: Mat3 = Mat3::from_rows([
    [0.7328, 0.4296, -0.1624],
    [-0.7036, 1.6975, 0.0061],
    [0.0030, 0.0136, 0.9834],
]);

/// XYZ scaling: adapts by scaling the XYZ components directly.
pub const XYZ_SCALING: Mat3 = Mat3::IDENTITY;

/// Named adaptation methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CatMethod {
    /// [`BRADFORD`]
    #[default]
    Bradford,
    /// [`VON_KRIES`]
    VonKries,
    /// [`CAT02`]
    Cat02,
    /// [`XYZ_SCALING`]
    XyzScaling,
}

impl CatMethod {
    /// Cone response matrix of the method.
    pub const fn matrix(self) -> Mat3 {
        match self {
            Self::Bradford => BRADFORD,
            Self::VonKries => VON_KRIES,
            Self::Cat02 => CAT02,
            Self::XyzScaling => XYZ_SCALING,
        }
    }

    /// Adaptation matrix from `src` to `dst` with this method.
    pub fn adapt(self, src: Illuminant, dst: Illuminant) -> Result<Mat3> {
        adapt_matrix(self.matrix(), src.white_point(), dst.white_point())
    }
}

impl FromStr for CatMethod {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bradford" => Ok(Self::Bradford),
            "vonkries" | "von_kries" | "von-kries" => Ok(Self::VonKries),
            "cat02" => Ok(Self::Cat02),
            "xyz" | "xyzscaling" | "xyz_scaling" | "xyz-scaling" => Ok(Self::XyzScaling),
            _ => Err(Error::parse(format!("unknown adaptation method '{s}'"))),
        }
    }
}

// ============================================================================
// Building the transform
// ============================================================================

/// Computes a chromatic adaptation matrix between two white points.
///
/// `M⁻¹ * diag(dst_cone / src_cone) * M` where `M` is the method matrix and
/// the cone responses are `M * white`.
///
/// # Errors
///
/// [`Error::SingularMatrix`] if `method` cannot be inverted, and
/// [`Error::InvalidArgument`] if the source white has a zero cone response.
///
/// # Example
///
/// ```rust
/// use gmath_color::{adapt_matrix, BRADFORD};
/// use gmath_math::{Mat3, Vec3};
///
/// assert!(adapt_matrix(Mat3::ZERO, Vec3::ONE, Vec3::ONE).is_err());
/// let same = adapt_matrix(BRADFORD, Vec3::ONE, Vec3::ONE)?;
/// assert!(same.abs_diff_eq(&Mat3::IDENTITY, 1e-5));
/// # Ok::<(), gmath_core::Error>(())
/// ```
pub fn adapt_matrix(method: Mat3, src_white: Vec3, dst_white: Vec3) -> Result<Mat3> {
    let method_inv = method
        .inverse()
        .ok_or_else(|| Error::singular_matrix(method.determinant()))?;

    let src_cone = method * src_white;
    let dst_cone = method * dst_white;
    if src_cone.to_array().iter().any(|c| c.abs() < NEAR_ZERO) {
        return Err(Error::invalid_argument(format!(
            "source white {src_white:?} has a zero cone response"
        )));
    }

    let scale = Mat3::diagonal3(
        dst_cone.x / src_cone.x,
        dst_cone.y / src_cone.y,
        dst_cone.z / src_cone.z,
    );
    debug!(?src_white, ?dst_white, "adaptation matrix");

    Ok(method_inv * scale * method)
}

/// Adapts a single XYZ colour from `src_white` to `dst_white`.
pub fn adapt_xyz(xyz: Vec3, method: Mat3, src_white: Vec3, dst_white: Vec3) -> Result<Vec3> {
    Ok(adapt_matrix(method, src_white, dst_white)? * xyz)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xyz::XYZ_D65_TO_D50;

    fn assert_identity(m: &Mat3, eps: f32) {
        assert!(m.abs_diff_eq(&Mat3::IDENTITY, eps), "not identity: {m:?}");
    }

    #[test]
    fn test_white_point_maps_exactly() {
        for method in [BRADFORD, VON_KRIES, CAT02, XYZ_SCALING] {
            let m = adapt_matrix(method, D65, ILLUMINANT_A).unwrap();
            let white = m * D65;
            assert!((white - ILLUMINANT_A).length() < 1e-4, "{white:?}");
        }
    }

    #[test]
    fn test_adapt_matrix_roundtrip() {
        let d65_to_d50 = adapt_matrix(BRADFORD, D65, D50).unwrap();
        let d50_to_d65 = adapt_matrix(BRADFORD, D50, D65).unwrap();
        assert_identity(&(d50_to_d65 * d65_to_d50), 1e-4);
    }

    #[test]
    fn test_adapt_identity() {
        let same = adapt_matrix(CAT02, D60, D60).unwrap();
        assert_identity(&same, 1e-5);
    }

    #[test]
    fn test_bradford_matches_fixed_matrix() {
        // The fixed sRGB pair uses slightly different white points
        let m = CatMethod::Bradford.adapt(Illuminant::D65, Illuminant::D50).unwrap();
        assert!(m.abs_diff_eq(&XYZ_D65_TO_D50, 3e-3));
    }

    #[test]
    fn test_xyz_scaling_is_diagonal() {
        let m = adapt_matrix(XYZ_SCALING, D65, D50).unwrap();
        assert_eq!(m.m[0][1], 0.0);
        assert!((m.m[2][2] - D50.z / D65.z).abs() < 1e-6);
    }

    #[test]
    fn test_singular_method() {
        let err = adapt_matrix(Mat3::ZERO, D65, D50).unwrap_err();
        assert!(err.is_numeric_error());
        let err = adapt_xyz(D65, XYZ_SCALING, Vec3::ZERO, D50).unwrap_err();
        assert!(!err.is_numeric_error());
    }

    #[test]
    fn test_illuminants() {
        for ill in [
            Illuminant::D65,
            Illuminant::D50,
            Illuminant::D55,
            Illuminant::D60,
            Illuminant::A,
            Illuminant::E,
        ] {
            assert_eq!(ill.white_point().y, 1.0);
            assert_eq!(ill.to_string().parse::<Illuminant>().unwrap(), ill);
        }
        assert_eq!(Illuminant::A.white_point(), crate::ILLUMINANT_A);
        assert_eq!(Illuminant::E.white_point(), crate::ILLUMINANT_E);
        assert_eq!("von-kries".parse::<CatMethod>().unwrap(), CatMethod::VonKries);
        assert!("sharp".parse::<CatMethod>().is_err());
    }
}
