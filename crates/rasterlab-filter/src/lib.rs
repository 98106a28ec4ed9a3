//! rasterlab-filter - Low-pass filtering operations
//!
//! This crate provides the smoothing half of the rasterlab engine:
//!
//! - Convolution kernels (Gaussian, box, identity, custom)
//! - Convolution with clamp-to-edge borders
//! - Rank (order-statistic) filtering: median, min, max
//! - [`apply_low_pass`], the validated entry point selected by [`FilterKind`]

pub mod convolve;
mod error;
pub mod kernel;
pub mod lowpass;
pub mod rank;

pub use error::{FilterError, FilterResult};
pub use kernel::Kernel;

// Re-export commonly used functions
pub use convolve::{box_blur, convolve, gaussian_blur};
pub use lowpass::{FilterKind, LowPassParams, apply_low_pass};
pub use rank::{max_filter, median_filter, min_filter, rank_filter};
