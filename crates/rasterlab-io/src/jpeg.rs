//! JPEG image format support
//!
//! Reads JPEG images using the `jpeg-decoder` crate and writes them with
//! the `jpeg-encoder` crate. Luminance JPEGs map to [`Channels::Gray`] and
//! RGB JPEGs to [`Channels::Rgb`]; CMYK JPEGs are rejected.

use crate::{IoError, IoResult};
use jpeg_decoder::PixelFormat;
use rasterlab_core::{Channels, Raster};
use std::io::{Read, Write};

/// Default encoder quality, on the 1..=100 scale
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Read a JPEG image from a reader.
///
/// # Arguments
/// * `reader` - A reader positioned at the JPEG SOI marker (`FF D8`)
///
/// # Returns
/// A gray raster for 8/16-bit luminance JPEGs, an RGB raster otherwise.
/// 16-bit samples keep their high byte.
pub fn read_jpeg<R: Read>(reader: R) -> IoResult<Raster> {
    let mut decoder = jpeg_decoder::Decoder::new(reader);
    let pixels = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {}", e)))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("JPEG header missing after decode".to_string()))?;

    let width = info.width as u32;
    let height = info.height as u32;

    let (channels, samples) = match info.pixel_format {
        PixelFormat::L8 => (Channels::Gray, pixels),
        // Big-endian 16-bit luminance
        PixelFormat::L16 => (Channels::Gray, pixels.chunks_exact(2).map(|s| s[0]).collect()),
        PixelFormat::RGB24 => (Channels::Rgb, pixels),
        PixelFormat::CMYK32 => {
            return Err(IoError::UnsupportedFormat(
                "CMYK JPEG is not supported".to_string(),
            ));
        }
    };

    tracing::debug!(width, height, format = ?info.pixel_format, "decoded JPEG");

    Ok(Raster::from_vec(width, height, channels, samples)?)
}

/// Write a JPEG image.
///
/// # Arguments
/// * `pix` - Gray or RGB raster; dimensions must fit in 16 bits
/// * `writer` - Destination
/// * `quality` - Encoder quality, 1..=100
pub fn write_jpeg<W: Write>(pix: &Raster, writer: W, quality: u8) -> IoResult<()> {
    if !(1..=100).contains(&quality) {
        return Err(IoError::EncodeError(format!(
            "JPEG quality must be in 1..=100, got {}",
            quality
        )));
    }
    let width = u16::try_from(pix.width())
        .map_err(|_| IoError::EncodeError(format!("width {} too large for JPEG", pix.width())))?;
    let height = u16::try_from(pix.height())
        .map_err(|_| IoError::EncodeError(format!("height {} too large for JPEG", pix.height())))?;

    let color_type = match pix.channels() {
        Channels::Gray => jpeg_encoder::ColorType::Luma,
        Channels::Rgb => jpeg_encoder::ColorType::Rgb,
    };

    let encoder = jpeg_encoder::Encoder::new(writer, quality);
    encoder
        .encode(pix.data(), width, height, color_type)
        .map_err(|e| IoError::EncodeError(format!("JPEG encode error: {}", e)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rasterlab_core::RasterMut;
    use std::io::Cursor;

    #[test]
    fn test_jpeg_roundtrip_gray_flat() {
        // A flat image survives lossy coding almost exactly
        let pix = Raster::new_filled(16, 16, Channels::Gray, 128).unwrap();
        let mut buffer = Vec::new();
        write_jpeg(&pix, &mut buffer, 95).unwrap();
        assert_eq!(&buffer[..3], &[0xFF, 0xD8, 0xFF]);

        let pix2 = read_jpeg(Cursor::new(buffer)).unwrap();
        assert_eq!(pix2.channels(), Channels::Gray);
        assert!(pix2.sizes_equal(&pix));
        let diff = pix.count_sample_diffs(&pix2).unwrap();
        assert!(diff.max_diff <= 2, "max diff {}", diff.max_diff);
    }

    #[test]
    fn test_jpeg_roundtrip_rgb() {
        let mut pix = RasterMut::new(24, 8, Channels::Rgb).unwrap();
        for y in 0..8 {
            for x in 0..24 {
                pix.set_rgb(x, y, 200, 60, 30).unwrap();
            }
        }
        let pix: Raster = pix.into();

        let mut buffer = Vec::new();
        write_jpeg(&pix, &mut buffer, DEFAULT_JPEG_QUALITY).unwrap();
        let pix2 = read_jpeg(Cursor::new(buffer)).unwrap();

        assert_eq!(pix2.channels(), Channels::Rgb);
        assert!(pix2.sizes_equal(&pix));
        let diff = pix.count_sample_diffs(&pix2).unwrap();
        assert!(diff.max_diff <= 8, "max diff {}", diff.max_diff);
    }

    #[test]
    fn test_jpeg_bad_quality() {
        let pix = Raster::new(4, 4, Channels::Gray).unwrap();
        assert!(write_jpeg(&pix, Vec::new(), 0).is_err());
        assert!(write_jpeg(&pix, Vec::new(), 101).is_err());
    }

    #[test]
    fn test_jpeg_oversized() {
        let pix = Raster::new(70_000, 1, Channels::Gray).unwrap();
        assert!(matches!(
            write_jpeg(&pix, Vec::new(), 90),
            Err(IoError::EncodeError(_))
        ));
    }

    #[test]
    fn test_jpeg_garbage() {
        assert!(read_jpeg(Cursor::new(vec![0u8; 32])).is_err());
    }
}
