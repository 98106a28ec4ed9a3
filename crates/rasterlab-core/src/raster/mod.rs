//! Raster - The main image container
//!
//! The `Raster` structure is the buffer every rasterlab operation consumes
//! and produces.
//!
//! # Sample layout
//!
//! - Samples are unsigned 8-bit values (0..=255)
//! - Storage is dense and row-major, `width * height * channels` entries
//! - Within a pixel, channels are interleaved (R, G, B for color)
//!
//! # Ownership model
//!
//! `Raster` uses `Arc` for cheap cloning (shared, read-only ownership).
//! To write samples, obtain a [`RasterMut`] via [`RasterMut::new`],
//! [`Raster::create_template_mut`], [`Raster::try_into_mut`] or
//! [`Raster::to_mut`], then convert back with `Into<Raster>`.

mod access;
pub mod border;
pub mod compare;

use crate::error::{Error, Result};
use std::sync::Arc;

/// Number of samples stored per pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Channels {
    /// Single luminance sample
    Gray = 1,
    /// Red, green and blue samples
    Rgb = 3,
}

impl Channels {
    /// Create `Channels` from a raw sample count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidChannelCount`] if `count` is not 1 or 3.
    pub fn from_count(count: u32) -> Result<Self> {
        match count {
            1 => Ok(Channels::Gray),
            3 => Ok(Channels::Rgb),
            _ => Err(Error::InvalidChannelCount(count)),
        }
    }

    /// Get the number of samples per pixel.
    #[inline]
    pub fn count(self) -> u32 {
        self as u32
    }

    /// Check whether this is a single-channel layout.
    #[inline]
    pub fn is_gray(self) -> bool {
        self == Channels::Gray
    }
}

/// Internal raster data
#[derive(Debug, Clone)]
struct RasterData {
    width: u32,
    height: u32,
    channels: Channels,
    data: Vec<u8>,
}

impl RasterData {
    fn zeroed(width: u32, height: u32, channels: Channels) -> Result<Self> {
        let len = sample_len(width, height, channels)?;
        Ok(RasterData {
            width,
            height,
            channels,
            data: vec![0u8; len],
        })
    }

    #[inline]
    fn index(&self, x: u32, y: u32, c: u32) -> usize {
        debug_assert!(x < self.width && y < self.height && c < self.channels.count());
        ((y as usize * self.width as usize) + x as usize) * self.channels.count() as usize
            + c as usize
    }
}

/// Compute the number of samples for a raster geometry.
fn sample_len(width: u32, height: u32, channels: Channels) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimension { width, height });
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(channels.count() as usize))
        .ok_or(Error::InvalidDimension { width, height })
}

/// Raster - Immutable image buffer
///
/// # Examples
///
/// ```
/// use rasterlab_core::{Channels, Raster};
///
/// let raster = Raster::new_filled(4, 3, Channels::Gray, 100).unwrap();
/// assert_eq!(raster.width(), 4);
/// assert_eq!(raster.height(), 3);
/// assert_eq!(raster.get_sample(3, 2, 0), Some(100));
/// ```
#[derive(Debug, Clone)]
pub struct Raster {
    inner: Arc<RasterData>,
}

impl Raster {
    /// Create a zero-filled raster.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32, channels: Channels) -> Result<Self> {
        Ok(RasterMut::new(width, height, channels)?.into())
    }

    /// Create a raster with every sample set to `value`.
    pub fn new_filled(width: u32, height: u32, channels: Channels, value: u8) -> Result<Self> {
        let mut raster = RasterMut::new(width, height, channels)?;
        raster.data_mut().fill(value);
        Ok(raster.into())
    }

    /// Create a raster from row-major interleaved samples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for a zero dimension and
    /// [`Error::DataLength`] if `data` does not hold exactly
    /// `width * height * channels` samples.
    pub fn from_vec(width: u32, height: u32, channels: Channels, data: Vec<u8>) -> Result<Self> {
        let expected = sample_len(width, height, channels)?;
        if data.len() != expected {
            return Err(Error::DataLength {
                expected,
                actual: data.len(),
            });
        }
        Ok(Raster {
            inner: Arc::new(RasterData {
                width,
                height,
                channels,
                data,
            }),
        })
    }

    /// Get the raster width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the raster height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the channel layout.
    #[inline]
    pub fn channels(&self) -> Channels {
        self.inner.channels
    }

    /// Get the number of samples per pixel.
    #[inline]
    pub fn channel_count(&self) -> u32 {
        self.inner.channels.count()
    }

    /// Get raw access to the sample data.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Get the samples of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row(&self, y: u32) -> &[u8] {
        let stride = self.inner.width as usize * self.channel_count() as usize;
        let start = y as usize * stride;
        &self.inner.data[start..start + stride]
    }

    /// Get the number of strong references to the sample storage.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Create a zero-filled writable raster with the same geometry.
    pub fn create_template_mut(&self) -> RasterMut {
        self.create_template_with_channels(self.channels())
    }

    /// Create a zero-filled writable raster with the same width and height
    /// but a different channel layout.
    pub fn create_template_with_channels(&self, channels: Channels) -> RasterMut {
        let len = self.inner.width as usize * self.inner.height as usize * channels.count() as usize;
        RasterMut {
            inner: RasterData {
                width: self.inner.width,
                height: self.inner.height,
                channels,
                data: vec![0u8; len],
            },
        }
    }

    /// Try to get mutable access to the sample data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    pub fn try_into_mut(self) -> std::result::Result<RasterMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(RasterMut { inner: data }),
            Err(arc) => Err(Raster { inner: arc }),
        }
    }

    /// Get a writable copy of this raster.
    ///
    /// The samples are copied; `self` is left untouched.
    pub fn to_mut(&self) -> RasterMut {
        RasterMut {
            inner: (*self.inner).clone(),
        }
    }
}

/// RasterMut - Uniquely owned, writable image buffer
#[derive(Debug)]
pub struct RasterMut {
    inner: RasterData,
}

impl RasterMut {
    /// Create a zero-filled writable raster.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32, channels: Channels) -> Result<Self> {
        Ok(RasterMut {
            inner: RasterData::zeroed(width, height, channels)?,
        })
    }

    /// Get the raster width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the raster height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the channel layout.
    #[inline]
    pub fn channels(&self) -> Channels {
        self.inner.channels
    }

    /// Get the number of samples per pixel.
    #[inline]
    pub fn channel_count(&self) -> u32 {
        self.inner.channels.count()
    }

    /// Get raw access to the sample data.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Get mutable raw access to the sample data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.inner.data
    }
}

impl From<RasterMut> for Raster {
    fn from(raster: RasterMut) -> Self {
        Raster {
            inner: Arc::new(raster.inner),
        }
    }
}
