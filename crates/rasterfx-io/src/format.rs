//! Format detection.
//!
//! The codec gate runs on the file extension alone, so an unsupported target
//! fails before any pixels are read or written. Magic-byte sniffing is
//! available separately for inspection.

use std::path::Path;

use crate::{IoError, IoResult};

/// Supported image formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// PNG format.
    Png,
    /// JPEG format.
    Jpeg,
}

impl Format {
    /// Determines the format from a file extension, case-insensitively.
    ///
    /// Fails with [`IoError::UnsupportedFormat`] when the extension is
    /// missing or not recognized.
    pub fn from_path<P: AsRef<Path>>(path: P) -> IoResult<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match ext.as_deref() {
            Some("png") => Ok(Format::Png),
            Some("jpg") | Some("jpeg") => Ok(Format::Jpeg),
            _ => Err(IoError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Identifies a format from leading magic bytes.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        // PNG: 0x89 "PNG" 0x0D 0x0A 0x1A 0x0A
        if bytes.len() >= 8 && bytes[0..8] == [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A] {
            return Some(Format::Png);
        }
        // JPEG: 0xFF 0xD8 0xFF
        if bytes.len() >= 3 && bytes[0..3] == [0xFF, 0xD8, 0xFF] {
            return Some(Format::Jpeg);
        }
        None
    }

    /// Format name for logs and listings.
    pub fn name(&self) -> &'static str {
        match self {
            Format::Png => "PNG",
            Format::Jpeg => "JPEG",
        }
    }

    /// Recognized file extensions.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Format::Png => &["png"],
            Format::Jpeg => &["jpg", "jpeg"],
        }
    }
}
