//! Morphological application functions
//!
//! Operation selection for the engine: a [`MorphOp`] applied with either a
//! caller-supplied [`Sel`] ([`morph_gray`]) or a built-in [`StructShape`]
//! after grayscale reduction ([`apply_morphology`]).

use crate::grayscale::{dilate_checked, erode_checked};
use crate::{
    MorphError, MorphResult, Sel, StructShape, close_gray, dilate_gray, erode_gray, open_gray,
};
use rasterlab_color::to_grayscale;
use rasterlab_core::Raster;
use std::fmt;
use std::str::FromStr;

/// Grayscale morphological operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MorphOp {
    /// Per-pixel minimum
    Erosion,
    /// Per-pixel maximum
    Dilation,
    /// Erosion then dilation
    Opening,
    /// Dilation then erosion
    Closing,
}

impl MorphOp {
    /// All operations, in menu order.
    pub const ALL: [MorphOp; 4] = [
        MorphOp::Erosion,
        MorphOp::Dilation,
        MorphOp::Opening,
        MorphOp::Closing,
    ];

    /// Get the canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            MorphOp::Erosion => "erosion",
            MorphOp::Dilation => "dilation",
            MorphOp::Opening => "opening",
            MorphOp::Closing => "closing",
        }
    }
}

impl fmt::Display for MorphOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MorphOp {
    type Err = MorphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "erosion" | "erode" => Ok(MorphOp::Erosion),
            "dilation" | "dilate" => Ok(MorphOp::Dilation),
            "opening" | "open" => Ok(MorphOp::Opening),
            "closing" | "close" => Ok(MorphOp::Closing),
            _ => Err(MorphError::UnsupportedOperation(s.to_string())),
        }
    }
}

/// Apply `op` to a 1-channel raster with a caller-supplied element.
///
/// # Errors
///
/// Same as the underlying [`erode_gray`] / [`dilate_gray`].
pub fn morph_gray(pix: &Raster, op: MorphOp, sel: &Sel) -> MorphResult<Raster> {
    match op {
        MorphOp::Erosion => erode_gray(pix, sel),
        MorphOp::Dilation => dilate_gray(pix, sel),
        MorphOp::Opening => open_gray(pix, sel),
        MorphOp::Closing => close_gray(pix, sel),
    }
}

/// Apply a morphological operation with a built-in shape.
///
/// Any raster is accepted: color input is first reduced to luminance with
/// [`to_grayscale`]. The result is always a 1-channel raster with the
/// input's width and height. This cannot fail, since the reduced raster is
/// gray and every built-in shape has active cells.
pub fn apply_morphology(pix: &Raster, op: MorphOp, shape: StructShape) -> Raster {
    tracing::debug!(
        op = %op,
        shape = %shape,
        width = pix.width(),
        height = pix.height(),
        channels = pix.channel_count(),
        "applying morphology"
    );

    let gray = to_grayscale(pix);
    let sel = shape.to_sel();
    match op {
        MorphOp::Erosion => erode_checked(&gray, &sel),
        MorphOp::Dilation => dilate_checked(&gray, &sel),
        MorphOp::Opening => dilate_checked(&erode_checked(&gray, &sel), &sel),
        MorphOp::Closing => erode_checked(&dilate_checked(&gray, &sel), &sel),
    }
}
