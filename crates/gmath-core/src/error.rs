//! Error types for gmath operations.
//!
//! Almost every function in gmath is a pure numeric function that cannot
//! fail: NaN and infinities propagate the way IEEE 754 says they do. The
//! [`Error`] enum covers the operations that have a real failure mode:
//!
//! - Reductions over an empty point set (covariance)
//! - Iterative solvers that do not converge (symmetric eigen decomposition)
//! - Inversion of singular matrices (chromatic adaptation)
//! - Parsing of user input (CLI)
//!
//! # Usage
//!
//! ```rust
//! use gmath_core::{Error, Result};
//!
//! fn mean(values: &[f32]) -> Result<f32> {
//!     if values.is_empty() {
//!         return Err(Error::empty_input("mean"));
//!     }
//!     Ok(values.iter().sum::<f32>() / values.len() as f32)
//! }
//!
//! assert!(mean(&[]).is_err());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in gmath operations.
///
/// # Categories
///
/// - **Input errors**: [`EmptyInput`](Error::EmptyInput), [`IndexOutOfRange`](Error::IndexOutOfRange), [`InvalidArgument`](Error::InvalidArgument)
/// - **Numeric errors**: [`SingularMatrix`](Error::SingularMatrix), [`NoConvergence`](Error::NoConvergence)
/// - **Text/IO errors**: [`Parse`](Error::Parse), [`Io`](Error::Io)
#[derive(Debug, Error)]
pub enum Error {
    /// An operation that needs at least one sample got none.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gmath_core::Error;
    ///
    /// let err = Error::empty_input("covariance");
    /// assert!(err.to_string().contains("covariance"));
    /// ```
    #[error("{operation} requires at least one input value")]
    EmptyInput {
        /// Name of the operation
        operation: &'static str,
    },

    /// Matrix cannot be inverted.
    #[error("matrix is singular (determinant {determinant})")]
    SingularMatrix {
        /// Determinant that failed the singularity test
        determinant: f32,
    },

    /// An iterative solver hit its iteration limit.
    #[error("solver did not converge after {iterations} iterations")]
    NoConvergence {
        /// Iterations performed
        iterations: usize,
    },

    /// Row, column or component index outside the valid range.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Valid length
        len: usize,
    },

    /// Argument outside the domain of the function.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Text input could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),

    /// I/O error while reading input data.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Creates an [`Error::EmptyInput`] error.
    #[inline]
    pub fn empty_input(operation: &'static str) -> Self {
        Self::EmptyInput { operation }
    }

    /// Creates an [`Error::SingularMatrix`] error.
    #[inline]
    pub fn singular_matrix(determinant: f32) -> Self {
        Self::SingularMatrix { determinant }
    }

    /// Creates an [`Error::NoConvergence`] error.
    #[inline]
    pub fn no_convergence(iterations: usize) -> Self {
        Self::NoConvergence { iterations }
    }

    /// Creates an [`Error::IndexOutOfRange`] error.
    #[inline]
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Creates an [`Error::InvalidArgument`] error.
    #[inline]
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Creates an [`Error::Parse`] error.
    #[inline]
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Returns `true` if the input was empty.
    #[inline]
    pub fn is_empty_input(&self) -> bool {
        matches!(self, Self::EmptyInput { .. })
    }

    /// Returns `true` for numeric failures (singular matrix, no convergence).
    #[inline]
    pub fn is_numeric_error(&self) -> bool {
        matches!(self, Self::SingularMatrix { .. } | Self::NoConvergence { .. })
    }

    /// Returns `true` if this is an I/O error.
    #[inline]
    pub fn is_io_error(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}
