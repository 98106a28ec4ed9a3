//! PNG image format support
//!
//! Decoding expands palettes and sub-byte depths to 8 bits and strips
//! 16-bit samples to their high byte, so every PNG arrives as 8-bit gray,
//! gray+alpha, RGB or RGBA. Gray and gray+alpha map to [`Channels::Gray`],
//! RGB and RGBA to [`Channels::Rgb`]; alpha is dropped.

use crate::{IoError, IoResult};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use rasterlab_core::{Channels, Raster};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Raster> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let info = reader.info();
    let width = info.width;
    let height = info.height;

    let (color_type, bit_depth) = reader.output_color_type();
    if bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported PNG output depth: {:?}",
            bit_depth
        )));
    }
    let (channels, spp) = match color_type {
        ColorType::Grayscale => (Channels::Gray, 1),
        ColorType::GrayscaleAlpha => (Channels::Gray, 2),
        ColorType::Rgb => (Channels::Rgb, 3),
        ColorType::Rgba => (Channels::Rgb, 4),
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNG color type: {:?}",
                other
            )));
        }
    };

    // Read image data
    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];
    let row_len = width as usize * spp;
    if bytes_per_row < row_len || data.len() < bytes_per_row * height as usize {
        return Err(IoError::InvalidData(format!(
            "PNG frame too small for {}x{} with {} samples per pixel",
            width, height, spp
        )));
    }

    let capacity = width as usize * height as usize * channels.count() as usize;
    let mut samples = Vec::with_capacity(capacity);
    for row in data.chunks(bytes_per_row).take(height as usize) {
        let row = &row[..row_len];
        match spp {
            1 | 3 => samples.extend_from_slice(row),
            2 => {
                samples.extend(row.chunks_exact(2).map(|ga| ga[0]));
            }
            _ => {
                for rgba in row.chunks_exact(4) {
                    samples.extend_from_slice(&rgba[..3]);
                }
            }
        }
    }

    tracing::debug!(width, height, ?color_type, "decoded PNG");

    Ok(Raster::from_vec(width, height, channels, samples)?)
}

/// Write a PNG image
///
/// Gray rasters are written as 8-bit grayscale, RGB rasters as 8-bit RGB.
pub fn write_png<W: Write>(pix: &Raster, writer: W) -> IoResult<()> {
    let color_type = match pix.channels() {
        Channels::Gray => ColorType::Grayscale,
        Channels::Rgb => ColorType::Rgb,
    };

    let mut encoder = Encoder::new(writer, pix.width(), pix.height());
    encoder.set_color(color_type);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    // Raster samples are already row-major and interleaved
    writer
        .write_image_data(pix.data())
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;
    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;

    Ok(())
}
