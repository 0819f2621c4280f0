// SPDX-License-Identifier: MPL-2.0
//! Conversions between [`RasterImage`] and `tiny_skia` pixmaps.
//!
//! `RasterImage` stores straight alpha; `tiny_skia` works premultiplied.

use crate::domain::media::{ImageEncoding, RasterImage};
use crate::error::ResourceError;
use tiny_skia::{ColorU8, IntSize, Pixmap};

/// Allocates a transparent pixmap.
///
/// # Errors
///
/// Returns [`ResourceError::CanvasUnavailable`] for zero or oversized dimensions.
pub fn blank(width: u32, height: u32) -> Result<Pixmap, ResourceError> {
    Pixmap::new(width, height).ok_or(ResourceError::CanvasUnavailable { width, height })
}

/// Copies an image into a premultiplied pixmap.
///
/// # Errors
///
/// Returns [`ResourceError::CanvasUnavailable`] if the pixmap cannot be built.
pub fn to_pixmap(image: &RasterImage) -> Result<Pixmap, ResourceError> {
    let (width, height) = image.dimensions();
    let unavailable = ResourceError::CanvasUnavailable { width, height };

    let mut data = Vec::with_capacity(image.rgba_bytes().len());
    for px in image.rgba_bytes().chunks_exact(4) {
        let color = ColorU8::from_rgba(px[0], px[1], px[2], px[3]).premultiply();
        data.extend_from_slice(&[color.red(), color.green(), color.blue(), color.alpha()]);
    }

    let size = IntSize::from_wh(width, height).ok_or(unavailable.clone())?;
    Pixmap::from_vec(data, size).ok_or(unavailable)
}

/// Copies a pixmap back into a straight-alpha image.
#[must_use]
pub fn to_raster(pixmap: &Pixmap, encoding: ImageEncoding) -> RasterImage {
    let mut bytes = Vec::with_capacity(pixmap.data().len());
    for px in pixmap.pixels() {
        let color = px.demultiply();
        bytes.extend_from_slice(&[color.red(), color.green(), color.blue(), color.alpha()]);
    }
    RasterImage::from_rgba(pixmap.width(), pixmap.height(), bytes, encoding)
}
