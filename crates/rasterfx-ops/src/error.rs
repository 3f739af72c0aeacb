//! Error types for filter operations.

use thiserror::Error;

/// Error type for filter operations.
#[derive(Error, Debug)]
pub enum OpsError {
    /// Invalid dimensions specified.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Operation not supported for this configuration.
    #[error("unsupported operation: {0}")]
    Unsupported(String),

    /// Error bubbled up from the buffer layer.
    #[error(transparent)]
    Core(#[from] rasterfx_core::Error),
}

/// Result type for filter operations.
pub type OpsResult<T> = Result<T, OpsError>;
