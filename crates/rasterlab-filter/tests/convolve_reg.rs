//! Convolution regression test
//!
//! Tests kernel generation and convolution:
//!   (1) Gaussian and box kernels sum to 1 for every odd size 1..=15
//!   (2) The 5x5 center-hole image under a 3x3 box kernel, checked pixel by pixel
//!   (3) Constant images survive every kernel unchanged (clamped borders)
//!   (4) Blurring a noise image keeps geometry and reduces variation
//!
//! Run with:
//! ```
//! cargo test -p rasterlab-filter --test convolve_reg
//! ```

use rasterlab_core::{Channels, Raster, RasterMut};
use rasterlab_filter::{Kernel, box_blur, convolve, gaussian_blur};
use rasterlab_test::{RegParams, make_test_image};

/// Sum of absolute differences between horizontally adjacent samples
fn total_variation(pix: &Raster) -> u64 {
    let nc = pix.channel_count();
    let mut tv = 0u64;
    for y in 0..pix.height() {
        for x in 1..pix.width() {
            for c in 0..nc {
                let a = pix.sample_unchecked(x - 1, y, c);
                let b = pix.sample_unchecked(x, y, c);
                tv += a.abs_diff(b) as u64;
            }
        }
    }
    tv
}

#[test]
fn convolve_reg_kernel_sums() {
    let mut rp = RegParams::new("convolve_kernel_sums");

    for size in (1..=15).step_by(2) {
        let k = Kernel::box_kernel(size).expect("box_kernel");
        rp.compare_values(1.0, k.sum(), 1e-6);

        // Sigma values of the demonstrator's slider (0.1 ..= 5.0)
        for tenths in [1, 5, 10, 25, 50] {
            let sigma = tenths as f64 / 10.0;
            let k = Kernel::gaussian(size, sigma).expect("gaussian");
            rp.compare_values(1.0, k.sum(), 1e-6);
            let nonneg = k.data().iter().all(|&v| v >= 0.0);
            rp.compare_values(1.0, if nonneg { 1.0 } else { 0.0 }, 0.0);
        }
    }

    assert!(rp.cleanup(), "convolve_kernel_sums regression test failed");
}

#[test]
fn convolve_reg_center_hole_grid() {
    let mut rp = RegParams::new("convolve_center_hole");

    let mut pix = RasterMut::new(5, 5, Channels::Gray).expect("new");
    pix.data_mut().fill(100);
    pix.set_sample(2, 2, 0, 0).expect("set_sample");
    let pix: Raster = pix.into();

    let out = box_blur(&pix, 3).expect("box_blur 3");

    // Every pixel whose clamped 3x3 window covers the hole sees 8 * 100 / 9
    #[rustfmt::skip]
    let expected: [u8; 25] = [
        100, 100, 100, 100, 100,
        100,  89,  89,  89, 100,
        100,  89,  89,  89, 100,
        100,  89,  89,  89, 100,
        100, 100, 100, 100, 100,
    ];
    rp.compare_samples(&out, &expected);

    // Input left untouched
    rp.compare_values(0.0, pix.get_sample(2, 2, 0).unwrap_or(255) as f64, 0.0);

    assert!(rp.cleanup(), "convolve_center_hole regression test failed");
}

#[test]
fn convolve_reg_constant_images() {
    let mut rp = RegParams::new("convolve_constant");

    for (channels, value) in [(Channels::Gray, 0u8), (Channels::Gray, 77), (Channels::Rgb, 255)] {
        let pix = Raster::new_filled(11, 6, channels, value).expect("new_filled");
        for size in [1u32, 3, 5, 9, 15] {
            let out = box_blur(&pix, size).expect("box_blur");
            rp.compare_raster(&pix, &out);
            let out = gaussian_blur(&pix, size, 2.0).expect("gaussian_blur");
            rp.compare_raster(&pix, &out);
        }
    }

    assert!(rp.cleanup(), "convolve_constant regression test failed");
}

#[test]
fn convolve_reg_smoothing() {
    let mut rp = RegParams::new("convolve_smoothing");

    for name in ["noise-gray", "noise-rgb"] {
        let pixs = make_test_image(name).expect(name);
        let tv0 = total_variation(&pixs);

        let pix1 = gaussian_blur(&pixs, 5, 1.0).expect("gaussian_blur");
        rp.compare_values(1.0, if pix1.sizes_equal(&pixs) { 1.0 } else { 0.0 }, 0.0);
        rp.compare_values(1.0, if total_variation(&pix1) <= tv0 { 1.0 } else { 0.0 }, 0.0);

        let pix2 = box_blur(&pixs, 5).expect("box_blur");
        rp.compare_values(1.0, if pix2.sizes_equal(&pixs) { 1.0 } else { 0.0 }, 0.0);
        rp.compare_values(1.0, if total_variation(&pix2) <= tv0 { 1.0 } else { 0.0 }, 0.0);
    }

    // The identity kernel is a no-op
    let pixs = make_test_image("noise-rgb").expect("noise-rgb");
    let pix1 = convolve(&pixs, &Kernel::identity()).expect("convolve identity");
    rp.compare_raster(&pixs, &pix1);

    assert!(rp.cleanup(), "convolve_smoothing regression test failed");
}
