//! # rasterfx-core
//!
//! Core types for the rasterfx filter pipeline.
//!
//! This crate provides the foundation the rest of the workspace builds on:
//!
//! - [`Image`] - Dense row-major `f32` buffer, three channels per pixel,
//!   nominal [0, 255] value range
//! - [`PadMode`] - Border synthesis strategies for extending an image
//!   past its edges
//! - [`Error`] / [`Result`] - Buffer-layer error handling
//!
//! ## Crate Structure
//!
//! `rasterfx-core` has no internal dependencies; the processing and I/O
//! crates build on it (`rasterfx-color` stands alone):
//!
//! ```text
//! rasterfx-core (this crate)
//!    ^
//!    |
//!    +-- rasterfx-ops (filters, FFT)
//!    +-- rasterfx-io (PNG/JPEG codecs)
//!    +-- rasterfx-cli (pipeline driver)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod image;
pub mod pad;

// Re-exports for convenience
pub use error::{Error, Result};
pub use image::Image;
pub use pad::PadMode;
