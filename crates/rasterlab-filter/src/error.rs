//! Error types for rasterlab-filter

use thiserror::Error;

/// Errors that can occur during filtering operations
#[derive(Debug, Error)]
pub enum FilterError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] rasterlab_core::Error),

    /// Invalid kernel
    #[error("invalid kernel: {0}")]
    InvalidKernel(String),

    /// Invalid parameter (kernel size, sigma, rank)
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Unrecognised filter name
    #[error("unsupported filter: {0}")]
    UnsupportedFilter(String),
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;
