//! Rank filtering operations
//!
//! Provides rank (order-statistic) filters including median, min, and max
//! filters over a square window. These are non-linear: each output sample is
//! picked from the sorted neighbourhood of its own channel, never computed
//! as a weighted sum. Filtering RGB channels independently can produce
//! colours absent from the input at sharp edges.

use crate::kernel::check_odd_size;
use crate::{FilterError, FilterResult};
use rasterlab_core::{Raster, clamp_to_edge};

/// Apply a rank filter with a `size x size` window.
///
/// # Arguments
/// * `pix` - Input gray or RGB raster
/// * `size` - Odd window side length
/// * `rank` - Rank value in [0.0, 1.0] (0.0=min, 0.5=median, 1.0=max)
///
/// The selected element of the `n = size²` sorted samples is at index
/// `round(rank * (n - 1))`.
pub fn rank_filter(pix: &Raster, size: u32, rank: f32) -> FilterResult<Raster> {
    check_odd_size(size)?;
    if !(0.0..=1.0).contains(&rank) {
        return Err(FilterError::InvalidParameter(format!(
            "rank must be in [0.0, 1.0], got {rank}"
        )));
    }

    let w = pix.width();
    let h = pix.height();
    let nc = pix.channel_count();
    let r = (size / 2) as i64;
    let n = (size as usize) * (size as usize);
    let index = (rank * (n - 1) as f32).round() as usize;

    let mut out = pix.create_template_mut();
    let mut window = Vec::with_capacity(n);

    for y in 0..h {
        for x in 0..w {
            for c in 0..nc {
                window.clear();
                for dy in -r..=r {
                    let sy = clamp_to_edge(y as i64 + dy, h);
                    for dx in -r..=r {
                        let sx = clamp_to_edge(x as i64 + dx, w);
                        window.push(pix.sample_unchecked(sx, sy, c));
                    }
                }
                let (_, &mut value, _) = window.select_nth_unstable(index);
                out.set_sample_unchecked(x, y, c, value);
            }
        }
    }

    Ok(out.into())
}

/// Apply median filter (rank = 0.5).
///
/// For odd sizes this picks index `size² / 2`, the true median.
pub fn median_filter(pix: &Raster, size: u32) -> FilterResult<Raster> {
    rank_filter(pix, size, 0.5)
}

/// Apply minimum filter (rank = 0.0).
pub fn min_filter(pix: &Raster, size: u32) -> FilterResult<Raster> {
    rank_filter(pix, size, 0.0)
}

/// Apply maximum filter (rank = 1.0).
pub fn max_filter(pix: &Raster, size: u32) -> FilterResult<Raster> {
    rank_filter(pix, size, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rasterlab_core::{Channels, RasterMut};

    #[test]
    fn test_rejects_bad_parameters() {
        let pix = Raster::new(4, 4, Channels::Gray).unwrap();
        assert!(median_filter(&pix, 0).is_err());
        assert!(median_filter(&pix, 4).is_err());
        assert!(rank_filter(&pix, 3, -0.1).is_err());
        assert!(rank_filter(&pix, 3, 1.5).is_err());
        assert!(rank_filter(&pix, 3, f32::NAN).is_err());
    }

    #[test]
    fn test_median_removes_outlier() {
        let mut pix = RasterMut::new(5, 5, Channels::Gray).unwrap();
        pix.data_mut().fill(100);
        pix.set_sample(2, 2, 0, 255).unwrap();
        let out = median_filter(&pix.into(), 3).unwrap();
        assert!(out.data().iter().all(|&s| s == 100));
    }

    #[test]
    fn test_median_exact_values() {
        // 3x1 row, window 3: clamped neighbourhoods per x
        let pix = Raster::from_vec(3, 1, Channels::Gray, vec![10, 50, 20]).unwrap();
        let out = median_filter(&pix, 3).unwrap();
        // x=0: {10,10,50} x3 -> 10; x=1: {10,50,20} -> 20; x=2: {50,20,20} -> 20
        assert_eq!(out.data(), &[10, 20, 20]);
    }

    #[test]
    fn test_min_max_bracket_median() {
        let mut pix = RasterMut::new(6, 6, Channels::Rgb).unwrap();
        for (i, s) in pix.data_mut().iter_mut().enumerate() {
            *s = ((i * 37) % 251) as u8;
        }
        let pix: Raster = pix.into();
        let lo = min_filter(&pix, 3).unwrap();
        let med = median_filter(&pix, 3).unwrap();
        let hi = max_filter(&pix, 3).unwrap();
        for i in 0..pix.data().len() {
            assert!(lo.data()[i] <= med.data()[i]);
            assert!(med.data()[i] <= hi.data()[i]);
            assert!(lo.data()[i] <= pix.data()[i] && pix.data()[i] <= hi.data()[i]);
        }
    }

    #[test]
    fn test_size_one_is_identity() {
        let pix = Raster::from_vec(2, 2, Channels::Gray, vec![9, 3, 7, 1]).unwrap();
        let out = median_filter(&pix, 1).unwrap();
        assert!(out.equals(&pix));
    }
}
