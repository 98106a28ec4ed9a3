//! Boundary handling
//!
//! Every neighbourhood operator in rasterlab reads out-of-range neighbours
//! through [`clamp_to_edge`]: a coordinate past the edge is replaced by the
//! nearest valid coordinate. There is no wraparound and no zero padding.

/// Map a possibly out-of-range coordinate onto `[0, len - 1]`.
///
/// `len` is a raster dimension and must be non-zero.
///
/// # Examples
///
/// ```
/// use rasterlab_core::clamp_to_edge;
///
/// assert_eq!(clamp_to_edge(-3, 5), 0);
/// assert_eq!(clamp_to_edge(2, 5), 2);
/// assert_eq!(clamp_to_edge(9, 5), 4);
/// ```
#[inline]
pub fn clamp_to_edge(coord: i64, len: u32) -> u32 {
    debug_assert!(len > 0, "clamp_to_edge on an empty axis");
    coord.clamp(0, i64::from(len) - 1) as u32
}

#[cfg(test)]
mod tests {
    use super::clamp_to_edge;

    #[test]
    fn test_clamp_negative_and_overflow() {
        assert_eq!(clamp_to_edge(-3, 5), 0);
        assert_eq!(clamp_to_edge(-1, 5), 0);
        assert_eq!(clamp_to_edge(0, 5), 0);
        assert_eq!(clamp_to_edge(4, 5), 4);
        assert_eq!(clamp_to_edge(5, 5), 4);
        assert_eq!(clamp_to_edge(99, 5), 4);
    }

    #[test]
    fn test_clamp_single_pixel_axis() {
        for i in -8..=8 {
            assert_eq!(clamp_to_edge(i, 1), 0);
        }
    }
}
