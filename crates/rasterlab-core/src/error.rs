//! Error types for rasterlab-core
//!
//! Provides a unified error type for raster construction and access.
//! Each variant captures enough context for diagnostics without exposing
//! the internal sample layout.

use thiserror::Error;

/// rasterlab-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid raster dimensions
    #[error("invalid raster dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Channel count other than 1 (gray) or 3 (RGB)
    #[error("invalid channel count: {0} (expected 1 or 3)")]
    InvalidChannelCount(u32),

    /// Sample buffer length does not match the raster geometry
    #[error("sample buffer length mismatch: expected {expected}, got {actual}")]
    DataLength { expected: usize, actual: usize },

    /// Raster dimension mismatch
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Rasters with different channel counts
    #[error("incompatible channel counts: {0} vs {1}")]
    IncompatibleChannels(u32, u32),

    /// Index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for rasterlab-core operations
pub type Result<T> = std::result::Result<T, Error>;
