//! RGB to grayscale conversion
//!
//! Morphology works on single-channel rasters, so color input is reduced
//! to one channel first. Each output sample is a weighted sum of the three
//! input samples, rounded half-up and clamped to 255.

use crate::{ColorError, ColorResult};
use rasterlab_core::{Channels, Raster};

/// ITU-R BT.601 luma weights (red, green, blue)
pub const LUMINANCE_WEIGHTS: [f32; 3] = [0.299, 0.587, 0.114];

/// Equal weights (red, green, blue)
pub const AVERAGE_WEIGHTS: [f32; 3] = [1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0];

/// Grayscale reduction method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GrayConversion {
    /// Perceptual luminance (BT.601)
    #[default]
    Luminance,
    /// Plain mean of the three channels
    Average,
}

impl GrayConversion {
    /// Get the (red, green, blue) weights of this method.
    pub fn weights(self) -> [f32; 3] {
        match self {
            GrayConversion::Luminance => LUMINANCE_WEIGHTS,
            GrayConversion::Average => AVERAGE_WEIGHTS,
        }
    }
}

/// Convert one RGB triple to a BT.601 gray value
///
/// Formula: gray = 0.299*R + 0.587*G + 0.114*B
#[inline]
pub fn rgb_to_gray(r: u8, g: u8, b: u8) -> u8 {
    weighted_gray(LUMINANCE_WEIGHTS, r, g, b)
}

#[inline]
fn weighted_gray(weights: [f32; 3], r: u8, g: u8, b: u8) -> u8 {
    let [rwt, gwt, bwt] = weights;
    let gray = (rwt * r as f32 + gwt * g as f32 + bwt * b as f32 + 0.5) as u32;
    gray.min(255) as u8
}

/// Reduce a raster to one channel with the BT.601 luminance weights.
///
/// This is the reduction applied before every morphological operation.
pub fn to_grayscale(pix: &Raster) -> Raster {
    convert_to_gray(pix, GrayConversion::Luminance)
}

/// Reduce a raster to one channel.
///
/// A raster that is already gray is returned as is (the storage is shared,
/// not copied, since rasters are immutable).
pub fn convert_to_gray(pix: &Raster, conversion: GrayConversion) -> Raster {
    apply_weights(pix, conversion.weights())
}

/// Reduce an RGB raster to one channel with caller-chosen weights.
///
/// # Arguments
///
/// * `pix` - Gray or RGB raster
/// * `rwt`, `gwt`, `bwt` - Non-negative channel weights; they are rescaled
///   to sum to 1 when they do not already
///
/// # Errors
///
/// Returns [`ColorError::InvalidParameters`] if any weight is negative or
/// not finite, or if all weights are zero.
pub fn convert_to_gray_weighted(pix: &Raster, rwt: f32, gwt: f32, bwt: f32) -> ColorResult<Raster> {
    let weights = [rwt, gwt, bwt];
    if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
        return Err(ColorError::InvalidParameters(format!(
            "weights must be finite and >= 0.0, got ({rwt}, {gwt}, {bwt})"
        )));
    }
    let sum = rwt + gwt + bwt;
    if sum == 0.0 {
        return Err(ColorError::InvalidParameters(
            "at least one weight must be > 0.0".to_string(),
        ));
    }
    let weights = if (sum - 1.0).abs() > 0.0001 {
        [rwt / sum, gwt / sum, bwt / sum]
    } else {
        weights
    };
    Ok(apply_weights(pix, weights))
}

fn apply_weights(pix: &Raster, weights: [f32; 3]) -> Raster {
    if pix.channels().is_gray() {
        return pix.clone();
    }

    tracing::debug!(
        width = pix.width(),
        height = pix.height(),
        ?weights,
        "converting to grayscale"
    );

    let mut out = pix.create_template_with_channels(Channels::Gray);
    for (dst, rgb) in out.data_mut().iter_mut().zip(pix.data().chunks_exact(3)) {
        *dst = weighted_gray(weights, rgb[0], rgb[1], rgb[2]);
    }
    out.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rasterlab_core::RasterMut;

    #[test]
    fn test_rgb_to_gray() {
        assert_eq!(rgb_to_gray(0, 0, 0), 0);
        assert_eq!(rgb_to_gray(255, 255, 255), 255);
        assert_eq!(rgb_to_gray(255, 0, 0), 76);
        assert_eq!(rgb_to_gray(0, 255, 0), 150);
        assert_eq!(rgb_to_gray(0, 0, 255), 29);
        assert_eq!(rgb_to_gray(100, 100, 100), 100);
    }

    #[test]
    fn test_convert_rgb() {
        let mut pix = RasterMut::new(2, 1, Channels::Rgb).unwrap();
        pix.set_rgb(0, 0, 255, 0, 0).unwrap();
        pix.set_rgb(1, 0, 10, 20, 30).unwrap();
        let pix: Raster = pix.into();

        let gray = to_grayscale(&pix);
        assert_eq!(gray.channels(), Channels::Gray);
        assert_eq!(gray.width(), 2);
        assert_eq!(gray.height(), 1);
        assert_eq!(gray.data(), &[76, 18]);

        let avg = convert_to_gray(&pix, GrayConversion::Average);
        assert_eq!(avg.data(), &[85, 20]);
    }

    #[test]
    fn test_gray_input_is_copied() {
        let pix = Raster::from_vec(3, 1, Channels::Gray, vec![1, 2, 3]).unwrap();
        for conversion in [GrayConversion::Luminance, GrayConversion::Average] {
            let out = convert_to_gray(&pix, conversion);
            assert!(out.equals(&pix));
        }
    }

    #[test]
    fn test_weighted() {
        let pix = Raster::from_vec(1, 1, Channels::Rgb, vec![200, 100, 0]).unwrap();
        // Weights 2:2:0 are rescaled to 0.5:0.5:0
        let out = convert_to_gray_weighted(&pix, 2.0, 2.0, 0.0).unwrap();
        assert_eq!(out.data(), &[150]);
        // Green only
        let out = convert_to_gray_weighted(&pix, 0.0, 1.0, 0.0).unwrap();
        assert_eq!(out.data(), &[100]);

        assert!(convert_to_gray_weighted(&pix, -1.0, 1.0, 1.0).is_err());
        assert!(convert_to_gray_weighted(&pix, 0.0, 0.0, 0.0).is_err());
        assert!(convert_to_gray_weighted(&pix, f32::NAN, 1.0, 1.0).is_err());
    }
}
