//! Convolution operations
//!
//! Implements image convolution with square kernels.
//!
//! Every channel is filtered independently. Borders use replicate (clamp)
//! handling: neighbours outside the image take the value of the nearest
//! edge pixel, so flat regions stay flat all the way to the border.

use crate::{FilterError, FilterResult, Kernel};
use rasterlab_core::{Raster, clamp_to_edge};

/// Convolve a raster with a kernel
///
/// For every output pixel and channel the weighted neighbourhood sum is
/// rounded to the nearest integer and clamped to `[0, 255]`. Works on gray
/// and RGB rasters alike; the output has the input's geometry.
pub fn convolve(pix: &Raster, kernel: &Kernel) -> FilterResult<Raster> {
    let ksize = kernel.size();
    if ksize == 0 || kernel.data().len() != (ksize as usize) * (ksize as usize) {
        return Err(FilterError::InvalidKernel(format!(
            "kernel must be square and non-empty, got size {ksize} with {} weights",
            kernel.data().len()
        )));
    }

    let w = pix.width();
    let h = pix.height();
    let nc = pix.channel_count();
    let r = kernel.radius() as i64;
    let weights = kernel.data();

    let mut out = pix.create_template_mut();
    let mut sums = vec![0.0f64; nc as usize];

    for y in 0..h {
        for x in 0..w {
            sums.fill(0.0);

            for ky in 0..ksize {
                let sy = clamp_to_edge(y as i64 + ky as i64 - r, h);
                for kx in 0..ksize {
                    let sx = clamp_to_edge(x as i64 + kx as i64 - r, w);
                    let k = weights[(ky * ksize + kx) as usize];
                    for (c, sum) in sums.iter_mut().enumerate() {
                        *sum += k * pix.sample_unchecked(sx, sy, c as u32) as f64;
                    }
                }
            }

            for (c, sum) in sums.iter().enumerate() {
                let value = sum.round().clamp(0.0, 255.0) as u8;
                out.set_sample_unchecked(x, y, c as u32, value);
            }
        }
    }

    Ok(out.into())
}

/// Apply box (average) blur with a `size x size` window
pub fn box_blur(pix: &Raster, size: u32) -> FilterResult<Raster> {
    let kernel = Kernel::box_kernel(size)?;
    convolve(pix, &kernel)
}

/// Apply Gaussian blur with a `size x size` window
pub fn gaussian_blur(pix: &Raster, size: u32, sigma: f64) -> FilterResult<Raster> {
    let kernel = Kernel::gaussian(size, sigma)?;
    convolve(pix, &kernel)
}
