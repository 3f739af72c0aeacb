//! Error types for I/O operations.

use std::io;
use thiserror::Error;

/// I/O operation error.
#[derive(Debug, Error)]
pub enum IoError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Unsupported format.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Decoding error.
    #[error("decode error: {0}")]
    DecodeError(String),

    /// Encoding error.
    #[error("encode error: {0}")]
    EncodeError(String),

    /// Unsupported bit depth or color layout.
    #[error("unsupported bit depth: {0}")]
    UnsupportedBitDepth(String),

    /// Dimension mismatch.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected size.
        expected: String,
        /// Actual size.
        actual: String,
    },

    /// Feature not compiled in.
    #[error("feature unavailable: {0}")]
    UnsupportedFeature(String),
}

/// Result type for I/O operations.
pub type IoResult<T> = Result<T, IoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IoError::UnsupportedFormat("scene.bmp".to_string());
        assert_eq!(err.to_string(), "unsupported format: scene.bmp");

        let err = IoError::DimensionMismatch {
            expected: "48 bytes".to_string(),
            actual: "47 bytes".to_string(),
        };
        assert!(err.to_string().contains("expected 48 bytes"));
    }

    #[test]
    fn test_io_error_conversion() {
        let err = IoError::from(io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert!(matches!(err, IoError::Io(_)));
    }
}
