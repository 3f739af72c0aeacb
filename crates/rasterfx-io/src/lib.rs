//! # rasterfx-io
//!
//! PNG and JPEG codecs for the rasterfx pipeline.
//!
//! Images on disk are 8-bit; the working buffer is f32. Reading widens every
//! sample to f32 and writing clamps to `[0, 255]` and rounds back to 8-bit.
//! The target format is chosen by file extension before any pixel work
//! happens, so a typo'd output path fails fast.
//!
//! # Modules
//!
//! - [`png`] - Lossless 8-bit PNG read/write
//! - [`jpeg`] - Lossy JPEG read/write with quality control
//!
//! # Example
//!
//! ```rust,ignore
//! use rasterfx_io::{read, write};
//!
//! let image = read("input.png")?;
//! write("output.jpg", &image)?;
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod convert;
mod error;
mod format;

#[cfg(feature = "jpeg")]
pub mod jpeg;
#[cfg(feature = "png")]
pub mod png;

pub use convert::{from_rgb8, to_rgb8};
pub use error::{IoError, IoResult};
pub use format::Format;

use std::path::Path;

use rasterfx_core::Image;
#[allow(unused_imports)]
use tracing::{debug, trace};

/// Reads an image from a file, dispatching on the file extension.
///
/// # Errors
///
/// Returns an error if the extension names no supported format, the file
/// cannot be opened, or the pixel data cannot be decoded.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<Image> {
    let path = path.as_ref();
    let format = Format::from_path(path)?;
    debug!(path = %path.display(), format = format.name(), "reading image");
    match format {
        #[cfg(feature = "png")]
        Format::Png => png::read(path),
        #[cfg(feature = "jpeg")]
        Format::Jpeg => jpeg::read(path),
        #[allow(unreachable_patterns)]
        other => Err(IoError::UnsupportedFeature(format!(
            "{} support not compiled in",
            other.name()
        ))),
    }
}

/// Writes an image to a file, dispatching on the file extension.
///
/// The extension gate runs before any pixel conversion, so nothing is
/// written when the target format is unsupported.
///
/// # Errors
///
/// Returns an error if the extension names no supported format or the
/// encoder fails.
pub fn write<P: AsRef<Path>>(path: P, image: &Image) -> IoResult<()> {
    let path = path.as_ref();
    let format = Format::from_path(path)?;
    debug!(path = %path.display(), format = format.name(), "writing image");
    match format {
        #[cfg(feature = "png")]
        Format::Png => png::write(path, image),
        #[cfg(feature = "jpeg")]
        Format::Jpeg => jpeg::write(path, image),
        #[allow(unreachable_patterns)]
        other => Err(IoError::UnsupportedFeature(format!(
            "{} support not compiled in",
            other.name()
        ))),
    }
}
