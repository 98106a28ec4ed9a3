//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur during regression testing
#[derive(Debug, Error)]
pub enum TestError {
    /// No synthetic image is registered under this name
    #[error("unknown test image '{name}'")]
    UnknownImage { name: String },

    /// Failed to build a synthetic image
    #[error("failed to build test image '{name}': {source}")]
    ImageBuild {
        name: String,
        #[source]
        source: rasterlab_core::Error,
    },
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
