//! rasterlab-io - Image I/O for rasterlab
//!
//! Reads and writes [`Raster`]s as PNG or JPEG files. Formats are detected
//! from magic numbers on read and chosen by the caller on write. Each
//! format sits behind a Cargo feature (`png-format`, `jpeg`), both enabled
//! by default.

mod error;
pub mod format;
#[cfg(feature = "jpeg")]
pub mod jpeg;
#[cfg(feature = "png-format")]
pub mod png;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format, detect_format_from_bytes};
#[cfg(feature = "jpeg")]
pub use jpeg::{DEFAULT_JPEG_QUALITY, read_jpeg, write_jpeg};
#[cfg(feature = "png-format")]
pub use png::{read_png, write_png};

use rasterlab_core::Raster;
use std::fs::File;
use std::io::{BufWriter, Cursor, Write};
use std::path::Path;

/// Quality used by [`write_image`] for JPEG output
#[cfg(not(feature = "jpeg"))]
const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Read an image file, detecting its format from the header.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Raster> {
    let path = path.as_ref();
    let data = std::fs::read(path)?;
    tracing::debug!(path = %path.display(), bytes = data.len(), "reading image");
    read_image_mem(&data)
}

/// Decode an in-memory image, detecting its format from the header.
pub fn read_image_mem(data: &[u8]) -> IoResult<Raster> {
    let format = detect_format_from_bytes(data)?;
    read_with_format(Cursor::new(data), format)
}

fn read_with_format(reader: Cursor<&[u8]>, format: ImageFormat) -> IoResult<Raster> {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(reader),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::read_jpeg(reader),
        #[allow(unreachable_patterns)]
        other => {
            let _ = reader;
            Err(IoError::UnsupportedFormat(format!(
                "{other} support not enabled"
            )))
        }
    }
}

/// Write an image file in the given format.
///
/// JPEG output uses [`DEFAULT_JPEG_QUALITY`]; call [`write_image_with_quality`]
/// to choose another.
pub fn write_image<P: AsRef<Path>>(pix: &Raster, path: P, format: ImageFormat) -> IoResult<()> {
    write_image_with_quality(pix, path, format, DEFAULT_JPEG_QUALITY)
}

/// Write an image file, with an explicit JPEG quality (ignored for PNG).
pub fn write_image_with_quality<P: AsRef<Path>>(
    pix: &Raster,
    path: P,
    format: ImageFormat,
    jpeg_quality: u8,
) -> IoResult<()> {
    let path = path.as_ref();
    tracing::debug!(
        path = %path.display(),
        %format,
        width = pix.width(),
        height = pix.height(),
        "writing image"
    );
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_to(pix, &mut writer, format, jpeg_quality)?;
    writer.flush()?;
    Ok(())
}

/// Encode an image into memory.
pub fn write_image_mem(pix: &Raster, format: ImageFormat) -> IoResult<Vec<u8>> {
    let mut buffer = Vec::new();
    write_to(pix, &mut buffer, format, DEFAULT_JPEG_QUALITY)?;
    Ok(buffer)
}

fn write_to<W: Write>(
    pix: &Raster,
    writer: W,
    format: ImageFormat,
    jpeg_quality: u8,
) -> IoResult<()> {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::write_png(pix, writer),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::write_jpeg(pix, writer, jpeg_quality),
        #[allow(unreachable_patterns)]
        other => {
            let _ = (pix, writer, jpeg_quality);
            Err(IoError::UnsupportedFormat(format!(
                "{other} support not enabled"
            )))
        }
    }
}
