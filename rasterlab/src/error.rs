//! Error type for the rasterlab facade

use thiserror::Error;

/// Any error raised by a rasterlab crate
#[derive(Debug, Error)]
pub enum Error {
    /// Raster construction or access error
    #[error("core error: {0}")]
    Core(#[from] rasterlab_core::Error),

    /// Low-pass filtering error
    #[error("filter error: {0}")]
    Filter(#[from] rasterlab_filter::FilterError),

    /// Color conversion error
    #[error("color error: {0}")]
    Color(#[from] rasterlab_color::ColorError),

    /// Morphology error
    #[error("morphology error: {0}")]
    Morph(#[from] rasterlab_morph::MorphError),

    /// Image reading or writing error
    #[error("I/O error: {0}")]
    Io(#[from] rasterlab_io::IoError),
}

/// Result type for facade operations
pub type Result<T> = std::result::Result<T, Error>;
