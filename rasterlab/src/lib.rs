//! rasterlab - Raster filtering and grayscale morphology
//!
//! The engine turns a source [`Raster`] plus an [`Operation`] into a new
//! raster. It never mutates its input and never touches files or displays;
//! image I/O lives in [`io`].
//!
//! Two operation families are available:
//!
//! - Low-pass smoothing ([`FilterKind`]: Gaussian, average, median) on gray
//!   or RGB rasters, keeping the channel layout
//! - Grayscale morphology ([`MorphOp`]: erosion, dilation, opening,
//!   closing) with a built-in [`StructShape`]; color input is reduced to
//!   luminance first
//!
//! # Example
//!
//! ```
//! use rasterlab::{Channels, FilterKind, LowPassParams, Operation, Raster, process};
//!
//! let pix = Raster::new_filled(8, 8, Channels::Rgb, 90).unwrap();
//! let op = Operation::LowPass(LowPassParams {
//!     kind: FilterKind::Median,
//!     kernel_size: 3,
//!     sigma: 1.0,
//! });
//! let out = process(&pix, &op).unwrap();
//! assert!(out.equals(&pix));
//! ```

mod error;

pub use error::{Error, Result};

// Re-export core types (primary data structures used everywhere)
pub use rasterlab_core::{Channels, Raster, RasterMut, SampleDiff, clamp_to_edge};

// Re-export domain crates as modules to avoid name conflicts
pub use rasterlab_color as color;
pub use rasterlab_filter as filter;
pub use rasterlab_io as io;
pub use rasterlab_morph as morph;

pub use rasterlab_filter::{FilterKind, LowPassParams, apply_low_pass};
pub use rasterlab_morph::{MorphOp, StructShape, apply_morphology};

use std::fmt;

/// One engine operation with its parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operation {
    /// Smoothing filter; output keeps the input's channel layout
    LowPass(LowPassParams),
    /// Grayscale morphology; output is always 1-channel
    Morphology {
        /// Min/max composition to run
        op: MorphOp,
        /// Built-in structuring element
        shape: StructShape,
    },
}

impl Default for Operation {
    fn default() -> Self {
        Operation::LowPass(LowPassParams::default())
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::LowPass(params) if params.kind.uses_sigma() => write!(
                f,
                "{} {}x{} sigma={}",
                params.kind, params.kernel_size, params.kernel_size, params.sigma
            ),
            Operation::LowPass(params) => write!(
                f,
                "{} {}x{}",
                params.kind, params.kernel_size, params.kernel_size
            ),
            Operation::Morphology { op, shape } => write!(f, "{op} {shape}"),
        }
    }
}

/// Run one operation on `pix`.
///
/// # Errors
///
/// Only low-pass operations can fail, with
/// [`FilterError::InvalidParameter`](rasterlab_filter::FilterError::InvalidParameter)
/// wrapped in [`Error::Filter`], before any pixel is processed.
pub fn process(pix: &Raster, operation: &Operation) -> Result<Raster> {
    tracing::debug!(%operation, "processing");
    match operation {
        Operation::LowPass(params) => Ok(params.apply(pix)?),
        Operation::Morphology { op, shape } => Ok(apply_morphology(pix, *op, *shape)),
    }
}
