//! # gmath-color
//!
//! Colour conversions built on the gmath vector types.
//!
//! - [`srgb`] - sRGB encoding and decoding for `f32`, RGB and RGBA
//! - [`xyz`] - Linear sRGB to CIE XYZ (D65 and D50), chromaticity
//! - [`adapt`] - Illuminants and chromatic adaptation (Bradford, CAT02, ...)
//! - [`hsv`], [`ycocg`], [`luminance`] - Alternative colour models and
//!   saturation
//!
//! # Usage
//!
//! ```rust
//! use gmath_color::{convert_linear_srgb_to_d65_xyz, convert_srgb_to_linear};
//! use gmath_math::Vec3;
//!
//! // Decode an 8-bit style sRGB colour and convert it to XYZ
//! let linear = convert_srgb_to_linear(Vec3::new(1.0, 0.5, 0.0));
//! let xyz = convert_linear_srgb_to_d65_xyz(linear);
//! assert!(xyz.y > 0.0 && xyz.y < 1.0);
//! ```
//!
//! # Dependencies
//!
//! - [`gmath-math`] - Vector and matrix types
//! - [`gmath-core`] - Error type
//! - [`tracing`] - Debug logging

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod adapt;
pub mod hsv;
pub mod luminance;
pub mod srgb;
pub mod xyz;
pub mod ycocg;

pub use adapt::*;
pub use hsv::*;
pub use luminance::*;
pub use srgb::*;
pub use xyz::*;
pub use ycocg::*;
