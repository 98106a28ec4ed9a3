//! Low-pass dispatch regression test
//!
//! Tests `apply_low_pass`:
//!   (1) Each filter kind matches the function it routes to
//!   (2) Parameter validation happens before any processing
//!   (3) Output geometry always equals input geometry
//!
//! Run with:
//! ```
//! cargo test -p rasterlab-filter --test lowpass_reg
//! ```

use rasterlab_filter::{
    FilterError, FilterKind, LowPassParams, apply_low_pass, box_blur, gaussian_blur,
    median_filter,
};
use rasterlab_test::{RegParams, make_test_image};

#[test]
fn lowpass_reg_routing() {
    let mut rp = RegParams::new("lowpass_routing");

    let pixs = make_test_image("gradient-rgb").expect("gradient-rgb");

    let pix1 = apply_low_pass(&pixs, FilterKind::Gaussian, 5, 1.5).expect("gaussian");
    let pix2 = gaussian_blur(&pixs, 5, 1.5).expect("gaussian_blur");
    rp.compare_raster(&pix1, &pix2);

    let pix1 = apply_low_pass(&pixs, FilterKind::Average, 7, 1.0).expect("average");
    let pix2 = box_blur(&pixs, 7).expect("box_blur");
    rp.compare_raster(&pix1, &pix2);

    let pix1 = apply_low_pass(&pixs, FilterKind::Median, 3, 1.0).expect("median");
    let pix2 = median_filter(&pixs, 3).expect("median_filter");
    rp.compare_raster(&pix1, &pix2);

    let params = LowPassParams {
        kind: FilterKind::Median,
        kernel_size: 3,
        sigma: 1.0,
    };
    let pix3 = params.apply(&pixs).expect("params.apply");
    rp.compare_raster(&pix2, &pix3);

    assert!(rp.cleanup(), "lowpass_routing regression test failed");
}

#[test]
fn lowpass_reg_validation() {
    let mut rp = RegParams::new("lowpass_validation");

    let pixs = make_test_image("noise-gray").expect("noise-gray");

    for kind in FilterKind::ALL {
        for size in [0u32, 2, 6, 14] {
            let err = apply_low_pass(&pixs, kind, size, 1.0);
            let ok = matches!(err, Err(FilterError::InvalidParameter(_)));
            rp.compare_values(1.0, if ok { 1.0 } else { 0.0 }, 0.0);
        }
    }

    // Sigma is checked even for kinds that never read it
    for kind in FilterKind::ALL {
        for sigma in [0.0, -1.0, -0.5, f64::NAN, f64::INFINITY] {
            let err = apply_low_pass(&pixs, kind, 3, sigma);
            let ok = matches!(err, Err(FilterError::InvalidParameter(_)));
            rp.compare_values(1.0, if ok { 1.0 } else { 0.0 }, 0.0);
        }
    }

    assert!(rp.cleanup(), "lowpass_validation regression test failed");
}

#[test]
fn lowpass_reg_geometry() {
    let mut rp = RegParams::new("lowpass_geometry");

    for name in ["noise-gray", "noise-rgb", "spots-gray"] {
        let pixs = make_test_image(name).expect(name);
        for kind in FilterKind::ALL {
            for size in [3u32, 9, 15] {
                let pix = apply_low_pass(&pixs, kind, size, 2.0).expect("apply_low_pass");
                rp.compare_values(1.0, if pix.sizes_equal(&pixs) { 1.0 } else { 0.0 }, 0.0);
            }
        }
    }

    assert!(rp.cleanup(), "lowpass_geometry regression test failed");
}
