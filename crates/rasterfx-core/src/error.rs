//! Error types for rasterfx-core operations.
//!
//! The [`Error`] enum covers the failure modes of the buffer layer:
//! - Sample access outside the image bounds
//! - Invalid buffer dimensions (length mismatches, empty-image operations)
//! - Padding modes that are declared but not implemented
//!
//! # Usage
//!
//! ```rust
//! use rasterfx_core::{Error, Result};
//!
//! fn check(row: u32, height: u32) -> Result<()> {
//!     if row >= height {
//!         return Err(Error::out_of_bounds(row, 0, 0, height, 1));
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the image buffer layer.
///
/// This enum uses [`thiserror`] for automatic [`std::error::Error`] and
/// [`std::fmt::Display`] implementations.
#[derive(Debug, Error)]
pub enum Error {
    /// A sample index is outside the image bounds.
    ///
    /// Returned when accessing `(row, col, channel)` where `row >= height`,
    /// `col >= width` or `channel >= 3`.
    #[error("sample ({row}, {col}, {channel}) out of bounds for image {height}x{width}x3")]
    OutOfBounds {
        /// Row that was accessed
        row: u32,
        /// Column that was accessed
        col: u32,
        /// Channel that was accessed
        channel: usize,
        /// Image height
        height: u32,
        /// Image width
        width: u32,
    },

    /// Image dimensions are invalid for the requested operation.
    ///
    /// Returned when a buffer length does not match `height * width * 3`,
    /// or when an operation (such as padding) is applied to an empty image.
    #[error("invalid dimensions: {height}x{width} ({reason})")]
    InvalidDimensions {
        /// Image height
        height: u32,
        /// Image width
        width: u32,
        /// Reason why the dimensions are invalid
        reason: String,
    },

    /// The requested pad mode is declared but not implemented.
    #[error("unsupported pad mode: {mode}")]
    UnsupportedPadMode {
        /// Name of the rejected mode
        mode: String,
    },
}

impl Error {
    /// Creates an [`Error::OutOfBounds`] error.
    #[inline]
    pub fn out_of_bounds(row: u32, col: u32, channel: usize, height: u32, width: u32) -> Self {
        Self::OutOfBounds {
            row,
            col,
            channel,
            height,
            width,
        }
    }

    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(height: u32, width: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            height,
            width,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::UnsupportedPadMode`] error.
    #[inline]
    pub fn unsupported_pad_mode(mode: impl Into<String>) -> Self {
        Self::UnsupportedPadMode { mode: mode.into() }
    }

    /// Returns `true` if this is a bounds-related error.
    #[inline]
    pub fn is_bounds_error(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }
}
