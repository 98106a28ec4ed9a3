//! rasterlab-color - Color conversion
//!
//! - **Grayscale conversion** ([`grayscale`]): RGB to single-channel
//!   luminance or channel average

mod error;
pub mod grayscale;

pub use error::{ColorError, ColorResult};
pub use grayscale::{
    AVERAGE_WEIGHTS, GrayConversion, LUMINANCE_WEIGHTS, convert_to_gray,
    convert_to_gray_weighted, rgb_to_gray, to_grayscale,
};
