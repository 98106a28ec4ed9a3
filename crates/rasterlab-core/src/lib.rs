//! rasterlab-core - Basic data structures for the raster engine
//!
//! This crate provides the shared data structure every other rasterlab
//! crate reads and writes:
//!
//! - [`Raster`] / [`RasterMut`] - The 8-bit sample grid (immutable / mutable)
//! - [`Channels`] - Grayscale (1 sample per pixel) or RGB (3 samples per pixel)
//! - [`clamp_to_edge`] - The boundary policy shared by every neighbourhood operator
//!
//! # Ownership model
//!
//! Operations never write into their input. They read a `&Raster` and build
//! a fresh [`RasterMut`], which is frozen into a `Raster` on return.

pub mod error;
pub mod raster;

pub use error::{Error, Result};
pub use raster::border::clamp_to_edge;
pub use raster::compare::SampleDiff;
pub use raster::{Channels, Raster, RasterMut};
