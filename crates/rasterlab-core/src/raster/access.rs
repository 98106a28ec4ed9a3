//! Sample access functions
//!
//! Low-level functions for getting and setting individual samples.
//! Bounds-checked accessors return `Option` / `Result`; the `_unchecked`
//! variants are for loops whose coordinates are already validated and
//! panic on an out-of-range index instead of reading garbage.

use super::border::clamp_to_edge;
use super::{Channels, Raster, RasterMut};
use crate::error::{Error, Result};

impl Raster {
    /// Get the sample of channel `c` at (x, y).
    ///
    /// Returns `None` if any coordinate is out of bounds.
    pub fn get_sample(&self, x: u32, y: u32, c: u32) -> Option<u8> {
        if x >= self.width() || y >= self.height() || c >= self.channel_count() {
            return None;
        }
        Some(self.inner.data[self.inner.index(x, y, c)])
    }

    /// Get a sample without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the computed index is past the end of the buffer.
    #[inline]
    pub fn sample_unchecked(&self, x: u32, y: u32, c: u32) -> u8 {
        self.inner.data[self.inner.index(x, y, c)]
    }

    /// Get a sample with clamp-to-edge boundary handling.
    ///
    /// Out-of-range coordinates are replaced by the nearest in-range
    /// coordinate, so this never fails for a valid channel index.
    #[inline]
    pub fn sample_clamped(&self, x: i64, y: i64, c: u32) -> u8 {
        let sx = clamp_to_edge(x, self.width());
        let sy = clamp_to_edge(y, self.height());
        self.sample_unchecked(sx, sy, c)
    }

    /// Get all samples of the pixel at (x, y).
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<&[u8]> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let start = self.inner.index(x, y, 0);
        Some(&self.inner.data[start..start + self.channel_count() as usize])
    }

    /// Get RGB values at (x, y).
    ///
    /// Only valid for 3-channel rasters.
    pub fn get_rgb(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        if self.channels() != Channels::Rgb {
            return None;
        }
        self.get_pixel(x, y).map(|p| (p[0], p[1], p[2]))
    }
}

impl RasterMut {
    /// Get the sample of channel `c` at (x, y).
    pub fn get_sample(&self, x: u32, y: u32, c: u32) -> Option<u8> {
        if x >= self.width() || y >= self.height() || c >= self.channel_count() {
            return None;
        }
        Some(self.inner.data[self.inner.index(x, y, c)])
    }

    /// Set the sample of channel `c` at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if any coordinate is out of bounds.
    pub fn set_sample(&mut self, x: u32, y: u32, c: u32, val: u8) -> Result<()> {
        if x >= self.width() || y >= self.height() || c >= self.channel_count() {
            return Err(Error::IndexOutOfBounds {
                index: (y as usize * self.width() as usize + x as usize)
                    * self.channel_count() as usize
                    + c as usize,
                len: self.inner.data.len(),
            });
        }
        self.set_sample_unchecked(x, y, c, val);
        Ok(())
    }

    /// Set a sample without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the computed index is past the end of the buffer.
    #[inline]
    pub fn set_sample_unchecked(&mut self, x: u32, y: u32, c: u32, val: u8) {
        let idx = self.inner.index(x, y, c);
        self.inner.data[idx] = val;
    }

    /// Set all samples of the pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] for out-of-range coordinates and
    /// [`Error::IncompatibleChannels`] if `samples` has the wrong length.
    pub fn set_pixel(&mut self, x: u32, y: u32, samples: &[u8]) -> Result<()> {
        let count = self.channel_count();
        if samples.len() != count as usize {
            return Err(Error::IncompatibleChannels(count, samples.len() as u32));
        }
        if x >= self.width() || y >= self.height() {
            return Err(Error::IndexOutOfBounds {
                index: y as usize * self.width() as usize + x as usize,
                len: self.width() as usize * self.height() as usize,
            });
        }
        let start = self.inner.index(x, y, 0);
        self.inner.data[start..start + samples.len()].copy_from_slice(samples);
        Ok(())
    }

    /// Set an RGB pixel at (x, y).
    ///
    /// Only valid for 3-channel rasters.
    pub fn set_rgb(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) -> Result<()> {
        self.set_pixel(x, y, &[r, g, b])
    }
}
