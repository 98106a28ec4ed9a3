//! Grayscale morphological operations
//!
//! Implements erosion, dilation, opening, and closing for 1-channel rasters.
//!
//! # Algorithm
//!
//! For grayscale morphology with a boolean structuring element:
//! - **Erosion**: minimum sample over the active cells placed at the pixel
//! - **Dilation**: maximum sample over the reflected active cells
//! - **Opening**: Erosion followed by dilation (removes small bright features)
//! - **Closing**: Dilation followed by erosion (fills small dark features)
//!
//! Neighbours outside the raster are read with clamp-to-edge addressing.
//! Dilation uses the reflected element so that opening and closing are
//! idempotent for any element; the built-in shapes are symmetric and are
//! unaffected by the reflection.

use crate::{MorphError, MorphResult, Sel};
use rasterlab_core::Raster;

#[derive(Clone, Copy)]
enum Extremum {
    Min,
    Max,
}

fn check_gray(pix: &Raster) -> MorphResult<()> {
    if !pix.channels().is_gray() {
        return Err(MorphError::UnsupportedChannels {
            actual: pix.channel_count(),
        });
    }
    Ok(())
}

fn check_sel(sel: &Sel) -> MorphResult<()> {
    if sel.hit_count() == 0 {
        return Err(MorphError::InvalidSel(
            "structuring element has no active cells".to_string(),
        ));
    }
    Ok(())
}

/// Min or max over `offsets` around every pixel
fn reduce_gray(pix: &Raster, offsets: &[(i64, i64)], extremum: Extremum) -> Raster {
    debug_assert!(!offsets.is_empty(), "reduce_gray with an empty structuring element");
    let w = pix.width();
    let h = pix.height();
    let mut out = pix.create_template_mut();

    for y in 0..h {
        for x in 0..w {
            let samples = offsets
                .iter()
                .map(|&(dx, dy)| pix.sample_clamped(x as i64 + dx, y as i64 + dy, 0));
            let value = match extremum {
                Extremum::Min => samples.min(),
                Extremum::Max => samples.max(),
            };
            out.set_sample_unchecked(x, y, 0, value.unwrap_or_default());
        }
    }

    out.into()
}

/// Erode a grayscale raster
///
/// Each output sample is the minimum of the input samples under the
/// active cells of `sel`, which shrinks bright regions and expands dark
/// regions. Eroding never increases a sample.
///
/// # Errors
///
/// Returns [`MorphError::UnsupportedChannels`] for non-gray input and
/// [`MorphError::InvalidSel`] if `sel` has no active cells.
pub fn erode_gray(pix: &Raster, sel: &Sel) -> MorphResult<Raster> {
    check_gray(pix)?;
    check_sel(sel)?;
    Ok(erode_checked(pix, sel))
}

/// Erosion of a gray raster by a non-empty element
pub(crate) fn erode_checked(pix: &Raster, sel: &Sel) -> Raster {
    tracing::debug!(
        width = pix.width(),
        height = pix.height(),
        sel = sel.name().unwrap_or("custom"),
        "eroding"
    );

    let offsets: Vec<(i64, i64)> = sel
        .hit_offsets()
        .map(|(dx, dy)| (dx as i64, dy as i64))
        .collect();
    reduce_gray(pix, &offsets, Extremum::Min)
}

/// Dilate a grayscale raster
///
/// Each output sample is the maximum of the input samples under the
/// reflected active cells of `sel`, which expands bright regions and shrinks
/// dark regions. Dilating never decreases a sample.
///
/// # Errors
///
/// Returns [`MorphError::UnsupportedChannels`] for non-gray input and
/// [`MorphError::InvalidSel`] if `sel` has no active cells.
pub fn dilate_gray(pix: &Raster, sel: &Sel) -> MorphResult<Raster> {
    check_gray(pix)?;
    check_sel(sel)?;
    Ok(dilate_checked(pix, sel))
}

/// Dilation of a gray raster by a non-empty element
pub(crate) fn dilate_checked(pix: &Raster, sel: &Sel) -> Raster {
    tracing::debug!(
        width = pix.width(),
        height = pix.height(),
        sel = sel.name().unwrap_or("custom"),
        "dilating"
    );

    let offsets: Vec<(i64, i64)> = sel
        .hit_offsets()
        .map(|(dx, dy)| (-(dx as i64), -(dy as i64)))
        .collect();
    reduce_gray(pix, &offsets, Extremum::Max)
}

/// Open a grayscale raster (erosion followed by dilation)
///
/// Opening removes bright features smaller than `sel` while preserving
/// the overall shape.
pub fn open_gray(pix: &Raster, sel: &Sel) -> MorphResult<Raster> {
    check_gray(pix)?;
    check_sel(sel)?;
    let eroded = erode_checked(pix, sel);
    Ok(dilate_checked(&eroded, sel))
}

/// Close a grayscale raster (dilation followed by erosion)
///
/// Closing fills dark features smaller than `sel` while preserving the
/// overall shape.
pub fn close_gray(pix: &Raster, sel: &Sel) -> MorphResult<Raster> {
    check_gray(pix)?;
    check_sel(sel)?;
    let dilated = dilate_checked(pix, sel);
    Ok(erode_checked(&dilated, sel))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rasterlab_core::{Channels, RasterMut};

    fn create_test_image() -> Raster {
        // 7x7, background 100, one bright pixel and one dark pixel
        let mut pix = RasterMut::new(7, 7, Channels::Gray).unwrap();
        pix.data_mut().fill(100);
        pix.set_sample(1, 1, 0, 250).unwrap();
        pix.set_sample(5, 5, 0, 10).unwrap();
        pix.into()
    }

    #[test]
    fn test_rejects_rgb() {
        let pix = Raster::new(3, 3, Channels::Rgb).unwrap();
        let sel = Sel::create_square(3).unwrap();
        assert!(matches!(
            erode_gray(&pix, &sel),
            Err(MorphError::UnsupportedChannels { actual: 3 })
        ));
        assert!(dilate_gray(&pix, &sel).is_err());
        assert!(open_gray(&pix, &sel).is_err());
        assert!(close_gray(&pix, &sel).is_err());
    }

    #[test]
    fn test_rejects_empty_sel() {
        let pix = Raster::new(3, 3, Channels::Gray).unwrap();
        let sel = Sel::new(3).unwrap();
        assert!(matches!(erode_gray(&pix, &sel), Err(MorphError::InvalidSel(_))));
        assert!(matches!(dilate_gray(&pix, &sel), Err(MorphError::InvalidSel(_))));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "empty structuring element")]
    fn test_reduce_gray_empty_offsets_asserts() {
        let pix = Raster::new(3, 3, Channels::Gray).unwrap();
        let _ = reduce_gray(&pix, &[], Extremum::Min);
    }

    #[test]
    fn test_erode_dilate_square() {
        let pix = create_test_image();
        let sel = Sel::create_square(3).unwrap();

        let eroded = erode_gray(&pix, &sel).unwrap();
        // The dark pixel spreads over its 3x3 neighbourhood
        assert_eq!(eroded.get_sample(4, 4, 0), Some(10));
        assert_eq!(eroded.get_sample(6, 6, 0), Some(10));
        assert_eq!(eroded.get_sample(3, 3, 0), Some(100));
        // The bright pixel disappears
        assert_eq!(eroded.get_sample(1, 1, 0), Some(100));

        let dilated = dilate_gray(&pix, &sel).unwrap();
        assert_eq!(dilated.get_sample(0, 0, 0), Some(250));
        assert_eq!(dilated.get_sample(2, 2, 0), Some(250));
        assert_eq!(dilated.get_sample(3, 3, 0), Some(100));
        assert_eq!(dilated.get_sample(5, 5, 0), Some(100));
    }

    #[test]
    fn test_open_close_remove_spots() {
        let pix = create_test_image();
        let sel = Sel::create_square(3).unwrap();

        let opened = open_gray(&pix, &sel).unwrap();
        assert_eq!(opened.get_sample(1, 1, 0), Some(100));
        assert_eq!(opened.get_sample(5, 5, 0), Some(10));

        let closed = close_gray(&pix, &sel).unwrap();
        assert_eq!(closed.get_sample(1, 1, 0), Some(250));
        assert_eq!(closed.get_sample(5, 5, 0), Some(100));
    }

    #[test]
    fn test_identity_sel() {
        let pix = create_test_image();
        let sel = Sel::identity();
        assert!(erode_gray(&pix, &sel).unwrap().equals(&pix));
        assert!(dilate_gray(&pix, &sel).unwrap().equals(&pix));
        assert!(open_gray(&pix, &sel).unwrap().equals(&pix));
        assert!(close_gray(&pix, &sel).unwrap().equals(&pix));
    }

    #[test]
    fn test_asymmetric_sel_is_reflected() {
        // Single active cell one step to the right of the origin
        let sel = Sel::from_string("...\n..x\n...").unwrap();
        let pix = Raster::from_vec(4, 1, Channels::Gray, vec![1, 2, 3, 4]).unwrap();

        // Erosion reads x + 1, dilation reads x - 1
        assert_eq!(erode_gray(&pix, &sel).unwrap().data(), &[2, 3, 4, 4]);
        assert_eq!(dilate_gray(&pix, &sel).unwrap().data(), &[1, 1, 2, 3]);
    }
}
