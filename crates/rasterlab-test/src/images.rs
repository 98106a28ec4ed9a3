//! Synthetic test images
//!
//! Regression tests run on images generated in code so the workspace
//! needs no binary fixtures. Every generator is deterministic.

use crate::error::{TestError, TestResult};
use rasterlab_core::{Channels, Raster, RasterMut};

/// Names accepted by [`make_test_image`]
pub const TEST_IMAGE_NAMES: &[&str] = &[
    "gradient-gray",
    "gradient-rgb",
    "noise-gray",
    "noise-rgb",
    "spots-gray",
    "checker-gray",
];

/// Build a named synthetic test image.
///
/// | name | size | content |
/// |---|---|---|
/// | `gradient-gray` | 64x48 | diagonal ramp |
/// | `gradient-rgb` | 64x48 | independent ramps per channel |
/// | `noise-gray` | 40x30 | pseudo-random samples |
/// | `noise-rgb` | 40x30 | pseudo-random samples |
/// | `spots-gray` | 32x32 | flat 120 with isolated 0/255 pixels and a bright block |
/// | `checker-gray` | 32x32 | 4x4 cells alternating 40 / 200 |
pub fn make_test_image(name: &str) -> TestResult<Raster> {
    let built = match name {
        "gradient-gray" => gradient_gray(),
        "gradient-rgb" => gradient_rgb(),
        "noise-gray" => noise(Channels::Gray, 0x5eed_0001),
        "noise-rgb" => noise(Channels::Rgb, 0x5eed_0003),
        "spots-gray" => spots_gray(),
        "checker-gray" => checker_gray(),
        _ => {
            return Err(TestError::UnknownImage {
                name: name.to_string(),
            });
        }
    };
    built.map_err(|source| TestError::ImageBuild {
        name: name.to_string(),
        source,
    })
}

fn gradient_gray() -> rasterlab_core::Result<Raster> {
    let mut pix = RasterMut::new(64, 48, Channels::Gray)?;
    for y in 0..48 {
        for x in 0..64 {
            pix.set_sample_unchecked(x, y, 0, ((x * 3 + y * 5) % 256) as u8);
        }
    }
    Ok(pix.into())
}

fn gradient_rgb() -> rasterlab_core::Result<Raster> {
    let mut pix = RasterMut::new(64, 48, Channels::Rgb)?;
    for y in 0..48 {
        for x in 0..64 {
            let r = (x * 4 % 256) as u8;
            let g = (y * 5 % 256) as u8;
            let b = ((x + y) * 2 % 256) as u8;
            pix.set_rgb(x, y, r, g, b)?;
        }
    }
    Ok(pix.into())
}

fn noise(channels: Channels, seed: u64) -> rasterlab_core::Result<Raster> {
    let mut pix = RasterMut::new(40, 30, channels)?;
    let mut state = seed;
    for sample in pix.data_mut() {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        *sample = (state >> 56) as u8;
    }
    Ok(pix.into())
}

fn spots_gray() -> rasterlab_core::Result<Raster> {
    let mut pix = RasterMut::new(32, 32, Channels::Gray)?;
    pix.data_mut().fill(120);
    for &(x, y) in &[(3, 4), (20, 6), (9, 27)] {
        pix.set_sample(x, y, 0, 255)?;
    }
    for &(x, y) in &[(6, 12), (26, 25), (14, 3)] {
        pix.set_sample(x, y, 0, 0)?;
    }
    for y in 16..22 {
        for x in 12..18 {
            pix.set_sample_unchecked(x, y, 0, 230);
        }
    }
    Ok(pix.into())
}

fn checker_gray() -> rasterlab_core::Result<Raster> {
    let mut pix = RasterMut::new(32, 32, Channels::Gray)?;
    for y in 0..32 {
        for x in 0..32 {
            let v = if (x / 4 + y / 4) % 2 == 0 { 40 } else { 200 };
            pix.set_sample_unchecked(x, y, 0, v);
        }
    }
    Ok(pix.into())
}
