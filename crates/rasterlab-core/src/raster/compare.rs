//! Raster comparison operations
//!
//! - Geometry checks
//! - Exact equality
//! - Sample difference counting

use super::Raster;
use crate::error::{Error, Result};

/// Result of counting sample differences between two rasters
#[derive(Debug, Clone, PartialEq)]
pub struct SampleDiff {
    /// Number of samples that differ
    pub n_diff: u64,
    /// Fraction of samples that differ (0.0 to 1.0)
    pub fract_diff: f64,
    /// Maximum absolute sample difference
    pub max_diff: u8,
}

impl Raster {
    /// Check if two rasters have the same width, height and channel layout.
    pub fn sizes_equal(&self, other: &Raster) -> bool {
        self.width() == other.width()
            && self.height() == other.height()
            && self.channels() == other.channels()
    }

    /// Check if two rasters are exactly equal, sample for sample.
    pub fn equals(&self, other: &Raster) -> bool {
        self.sizes_equal(other) && self.data() == other.data()
    }

    /// Count the samples that differ between two rasters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] or
    /// [`Error::IncompatibleChannels`] if the geometries differ.
    pub fn count_sample_diffs(&self, other: &Raster) -> Result<SampleDiff> {
        if self.width() != other.width() || self.height() != other.height() {
            return Err(Error::DimensionMismatch {
                expected: (self.width(), self.height()),
                actual: (other.width(), other.height()),
            });
        }
        if self.channels() != other.channels() {
            return Err(Error::IncompatibleChannels(
                self.channel_count(),
                other.channel_count(),
            ));
        }

        let mut n_diff = 0u64;
        let mut max_diff = 0u8;
        for (&a, &b) in self.data().iter().zip(other.data()) {
            let d = a.abs_diff(b);
            if d != 0 {
                n_diff += 1;
                max_diff = max_diff.max(d);
            }
        }

        Ok(SampleDiff {
            n_diff,
            fract_diff: n_diff as f64 / self.data().len() as f64,
            max_diff,
        })
    }
}

impl PartialEq for Raster {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for Raster {}
