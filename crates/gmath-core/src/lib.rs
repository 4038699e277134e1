//! # gmath-core
//!
//! Foundational types shared by every gmath crate.
//!
//! - [`Error`], [`Result`] - Failure modes of the few fallible operations
//! - [`constants`] - Mathematical constants (`PI`, `COS_ONE_OVER_TWO`, ...)
//! - [`Integer`] - Integer abstraction used by normalization and rounding
//!
//! ## Crate Structure
//!
//! This crate has no internal dependencies. The other crates build on it:
//!
//! ```text
//! gmath-core (this crate)
//!    ^
//!    |
//!    +-- gmath-math (vectors, matrices, quaternions, function families)
//!    +-- gmath-color (sRGB, XYZ, HSV, YCoCg)
//!    +-- gmath-cli
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod constants;
pub mod error;
pub mod int;

pub use error::*;
pub use int::Integer;

/// Prelude module for convenient imports.
///
/// ```
/// use gmath_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::constants::*;
    pub use crate::error::{Error, Result};
    pub use crate::int::Integer;
}
