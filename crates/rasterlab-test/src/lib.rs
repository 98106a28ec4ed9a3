//! rasterlab-test - Regression test framework for rasterlab
//!
//! This crate provides a small regression harness. Every check bumps an
//! index and failures are collected with a readable message; `cleanup()`
//! reports the verdict.
//!
//! # Usage
//!
//! ```ignore
//! use rasterlab_test::{RegParams, make_test_image};
//!
//! let mut rp = RegParams::new("convolve");
//! let pixs = make_test_image("gradient-rgb").expect("gradient-rgb");
//! rp.compare_values(64.0, pixs.width() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod error;
mod images;
mod params;

pub use error::{TestError, TestResult};
pub use images::{TEST_IMAGE_NAMES, make_test_image};
pub use params::RegParams;
