//! Low-pass filter selection
//!
//! [`apply_low_pass`] is the single entry point for smoothing: it validates
//! the parameters up front and then routes to convolution (Gaussian,
//! average) or to the median filter.

use crate::kernel::check_odd_size;
use crate::{FilterError, FilterResult, Kernel, convolve, median_filter};
use rasterlab_core::Raster;
use std::fmt;
use std::str::FromStr;

/// Smoothing filter family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    /// Normalized Gaussian kernel convolution
    Gaussian,
    /// Box (mean) kernel convolution
    Average,
    /// Per-channel median
    Median,
}

impl FilterKind {
    /// All filter kinds, in menu order.
    pub const ALL: [FilterKind; 3] = [FilterKind::Gaussian, FilterKind::Average, FilterKind::Median];

    /// Get the canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            FilterKind::Gaussian => "gaussian",
            FilterKind::Average => "average",
            FilterKind::Median => "median",
        }
    }

    /// Check whether this filter reads `sigma`.
    pub fn uses_sigma(self) -> bool {
        self == FilterKind::Gaussian
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FilterKind {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gaussian" | "gauss" => Ok(FilterKind::Gaussian),
            "average" | "mean" | "box" => Ok(FilterKind::Average),
            "median" => Ok(FilterKind::Median),
            _ => Err(FilterError::UnsupportedFilter(s.to_string())),
        }
    }
}

/// Parameters of one low-pass run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LowPassParams {
    /// Filter family
    pub kind: FilterKind,
    /// Odd window side length
    pub kernel_size: u32,
    /// Gaussian standard deviation; must be finite and positive for every
    /// kind, though only the Gaussian reads it
    pub sigma: f64,
}

impl Default for LowPassParams {
    fn default() -> Self {
        LowPassParams {
            kind: FilterKind::Gaussian,
            kernel_size: 3,
            sigma: 1.0,
        }
    }
}

impl LowPassParams {
    /// Check the parameters without touching any pixels.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidParameter`] for an even or zero
    /// kernel size, or a sigma that is not a finite positive number. Sigma
    /// is checked for every kind, even those that do not read it.
    pub fn validate(&self) -> FilterResult<()> {
        check_odd_size(self.kernel_size)?;
        if !self.sigma.is_finite() || self.sigma <= 0.0 {
            return Err(FilterError::InvalidParameter(format!(
                "sigma must be finite and > 0, got {}",
                self.sigma
            )));
        }
        Ok(())
    }

    /// Run the configured filter on `pix`.
    pub fn apply(&self, pix: &Raster) -> FilterResult<Raster> {
        apply_low_pass(pix, self.kind, self.kernel_size, self.sigma)
    }
}

/// Apply a low-pass filter.
///
/// The result has the same dimensions and channel layout as `pix`; `pix`
/// itself is never modified. Parameters are validated before any pixel is
/// processed.
pub fn apply_low_pass(
    pix: &Raster,
    kind: FilterKind,
    kernel_size: u32,
    sigma: f64,
) -> FilterResult<Raster> {
    LowPassParams {
        kind,
        kernel_size,
        sigma,
    }
    .validate()?;

    tracing::debug!(
        filter = %kind,
        kernel_size,
        sigma,
        width = pix.width(),
        height = pix.height(),
        channels = pix.channel_count(),
        "applying low-pass filter"
    );

    match kind {
        FilterKind::Gaussian => convolve(pix, &Kernel::gaussian(kernel_size, sigma)?),
        FilterKind::Average => convolve(pix, &Kernel::box_kernel(kernel_size)?),
        FilterKind::Median => median_filter(pix, kernel_size),
    }
}
