//! Convolution kernels
//!
//! A kernel is a square matrix of real weights with an odd side length.
//! Its origin is always the central cell, so a kernel of size `s` reaches
//! `s / 2` pixels in every direction.

use crate::{FilterError, FilterResult};

/// A square 2D convolution kernel
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    /// Side length (odd, >= 1)
    size: u32,
    /// Kernel data (row-major order)
    data: Vec<f64>,
}

/// Reject kernel and window sizes that are zero or even.
pub(crate) fn check_odd_size(size: u32) -> FilterResult<()> {
    if size == 0 || size % 2 == 0 {
        return Err(FilterError::InvalidParameter(format!(
            "kernel size must be odd and >= 1, got {size}"
        )));
    }
    Ok(())
}

impl Kernel {
    /// Create a zero-filled kernel.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidParameter`] if `size` is even or 0.
    pub fn new(size: u32) -> FilterResult<Self> {
        check_odd_size(size)?;
        Ok(Kernel {
            size,
            data: vec![0.0; (size as usize) * (size as usize)],
        })
    }

    /// Create a kernel from row-major weights.
    ///
    /// The weights are used as given; call [`Kernel::normalize`] if they
    /// should sum to 1.
    pub fn from_slice(size: u32, data: &[f64]) -> FilterResult<Self> {
        check_odd_size(size)?;
        let expected = (size as usize) * (size as usize);
        if data.len() != expected {
            return Err(FilterError::InvalidKernel(format!(
                "expected {expected} weights for a {size}x{size} kernel, got {}",
                data.len()
            )));
        }
        if data.iter().any(|v| !v.is_finite()) {
            return Err(FilterError::InvalidKernel(
                "kernel weights must be finite".to_string(),
            ));
        }
        Ok(Kernel {
            size,
            data: data.to_vec(),
        })
    }

    /// Create the 1x1 identity kernel.
    pub fn identity() -> Self {
        Kernel {
            size: 1,
            data: vec![1.0],
        }
    }

    /// Create a box (averaging) kernel.
    ///
    /// All values are `1/(size*size)`.
    pub fn box_kernel(size: u32) -> FilterResult<Self> {
        let mut kernel = Self::new(size)?;
        let value = 1.0 / (size as f64 * size as f64);
        kernel.data.fill(value);
        Ok(kernel)
    }

    /// Create a normalized Gaussian kernel.
    ///
    /// Each cell at offset `(dx, dy)` from the centre gets
    /// `exp(-(dx² + dy²) / (2σ²)) / (2πσ²)`, then the whole kernel is
    /// divided by its sum. The `1 / (2πσ²)` factor cancels in that
    /// division and is left out, which keeps tiny sigmas from overflowing.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidParameter`] if `size` is even or 0,
    /// or if `sigma` is not a finite positive number.
    pub fn gaussian(size: u32, sigma: f64) -> FilterResult<Self> {
        check_odd_size(size)?;
        if !sigma.is_finite() || sigma <= 0.0 {
            return Err(FilterError::InvalidParameter(format!(
                "sigma must be finite and > 0, got {sigma}"
            )));
        }

        let mut kernel = Self::new(size)?;
        let half = (size / 2) as i64;
        let two_sigma_sq = 2.0 * sigma * sigma;
        for ky in 0..size {
            for kx in 0..size {
                let dx = (kx as i64 - half) as f64;
                let dy = (ky as i64 - half) as f64;
                kernel.set(kx, ky, (-(dx * dx + dy * dy) / two_sigma_sq).exp());
            }
        }
        kernel.normalize();
        Ok(kernel)
    }

    /// Get the side length.
    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Get the reach of the kernel from its centre (`size / 2`).
    #[inline]
    pub fn radius(&self) -> u32 {
        self.size / 2
    }

    /// Get the kernel data.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Get a value at (x, y).
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<f64> {
        if x < self.size && y < self.size {
            Some(self.data[(y * self.size + x) as usize])
        } else {
            None
        }
    }

    /// Set a value at (x, y). Out-of-range coordinates are ignored.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: f64) {
        if x < self.size && y < self.size {
            self.data[(y * self.size + x) as usize] = value;
        }
    }

    /// Normalize the kernel so that values sum to 1.
    ///
    /// A kernel whose weights sum to zero is left unchanged.
    pub fn normalize(&mut self) {
        let sum = self.sum();
        if sum != 0.0 {
            for v in &mut self.data {
                *v /= sum;
            }
        }
    }

    /// Get the sum of all kernel values.
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_even_and_zero_sizes() {
        for size in [0, 2, 4, 16] {
            assert!(Kernel::new(size).is_err(), "size {size}");
            assert!(Kernel::box_kernel(size).is_err(), "size {size}");
            assert!(Kernel::gaussian(size, 1.0).is_err(), "size {size}");
        }
    }

    #[test]
    fn test_gaussian_rejects_bad_sigma() {
        for sigma in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                Kernel::gaussian(3, sigma),
                Err(FilterError::InvalidParameter(_))
            ));
        }
    }

    #[test]
    fn test_box_kernel() {
        let kernel = Kernel::box_kernel(3).unwrap();
        assert_eq!(kernel.size(), 3);
        assert_eq!(kernel.radius(), 1);
        for &v in kernel.data() {
            assert!((v - 1.0 / 9.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_kernel_sums_to_one() {
        for size in (1..=15).step_by(2) {
            let k = Kernel::box_kernel(size).unwrap();
            assert!((k.sum() - 1.0).abs() < 1e-6, "box {size}");
            for sigma in [0.1, 0.5, 1.0, 2.5, 5.0] {
                let k = Kernel::gaussian(size, sigma).unwrap();
                assert!((k.sum() - 1.0).abs() < 1e-6, "gaussian {size} {sigma}");
            }
        }
    }

    #[test]
    fn test_gaussian_shape() {
        let k = Kernel::gaussian(5, 1.0).unwrap();
        let center = k.get(2, 2).unwrap();
        // Peak at the centre, symmetric, decreasing outwards
        assert!(k.data().iter().all(|&v| v <= center && v > 0.0));
        assert_eq!(k.get(0, 2), k.get(4, 2));
        assert_eq!(k.get(2, 0), k.get(2, 4));
        assert_eq!(k.get(1, 1), k.get(3, 3));
        assert!(k.get(1, 2).unwrap() > k.get(0, 2).unwrap());
    }

    #[test]
    fn test_gaussian_size_one_is_identity() {
        let k = Kernel::gaussian(1, 0.7).unwrap();
        assert_eq!(k, Kernel::identity());
    }

    #[test]
    fn test_tiny_sigma_collapses_to_center() {
        let k = Kernel::gaussian(3, 1e-3).unwrap();
        assert!((k.get(1, 1).unwrap() - 1.0).abs() < 1e-12);
        assert!(k.sum().is_finite());
    }

    #[test]
    fn test_from_slice_validation() {
        assert!(Kernel::from_slice(3, &[1.0; 9]).is_ok());
        assert!(matches!(
            Kernel::from_slice(3, &[1.0; 8]),
            Err(FilterError::InvalidKernel(_))
        ));
        assert!(Kernel::from_slice(2, &[1.0; 4]).is_err());
        assert!(Kernel::from_slice(1, &[f64::NAN]).is_err());
    }

    #[test]
    fn test_get_set_normalize() {
        let mut k = Kernel::new(3).unwrap();
        k.set(1, 1, 2.0);
        k.set(0, 1, 2.0);
        k.set(5, 5, 100.0);
        assert_eq!(k.get(5, 5), None);
        assert_eq!(k.sum(), 4.0);
        k.normalize();
        assert_eq!(k.get(1, 1), Some(0.5));
    }
}
