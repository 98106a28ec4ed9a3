//! rasterlab-morph - Morphological operations
//!
//! This crate provides grayscale morphology over boolean structuring
//! elements:
//!
//! - Structuring elements ([`Sel`]) and the built-in shapes ([`StructShape`])
//! - Grayscale erosion, dilation, opening and closing on 1-channel rasters
//! - [`apply_morphology`], which reduces any raster to gray and then runs a
//!   [`MorphOp`] with a built-in shape

mod error;
pub mod grayscale;
pub mod morphapp;
pub mod sel;

pub use error::{MorphError, MorphResult};
pub use sel::{Sel, StructShape};

pub use grayscale::{close_gray, dilate_gray, erode_gray, open_gray};
pub use morphapp::{MorphOp, apply_morphology, morph_gray};
