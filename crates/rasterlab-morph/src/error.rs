//! Error types for rasterlab-morph

use thiserror::Error;

/// Errors that can occur during morphological operations
#[derive(Debug, Error)]
pub enum MorphError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] rasterlab_core::Error),

    /// Invalid structuring element
    #[error("invalid structuring element: {0}")]
    InvalidSel(String),

    /// Operation requires a single-channel raster
    #[error("unsupported channel count: expected 1, got {actual}")]
    UnsupportedChannels { actual: u32 },

    /// Unrecognised structuring element name
    #[error("unsupported shape: {0}")]
    UnsupportedShape(String),

    /// Unrecognised operation name
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),
}

/// Result type for morphological operations
pub type MorphResult<T> = Result<T, MorphError>;
