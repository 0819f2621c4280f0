// SPDX-License-Identifier: MPL-2.0
//! Expanded canvas construction for outpainting.

use crate::config::defaults::EXPANSION_SENTINEL_RGBA;
use crate::domain::editing::ExpansionSteps;
use crate::domain::media::RasterImage;
use crate::error::ResourceError;
use crate::media::codec;
use image_rs::{imageops, Rgba, RgbaImage};

/// Places `image` on a sentinel-gray canvas grown by `steps`.
///
/// The border is the only "mask": the backend regenerates every sentinel pixel.
///
/// # Errors
///
/// Returns [`ResourceError::InvalidDimensions`] if the image buffer is unusable.
pub fn build_expansion_canvas(
    image: &RasterImage,
    steps: &ExpansionSteps,
    step_px: u32,
) -> Result<RasterImage, ResourceError> {
    let (width, height) = steps.expanded_size(image.width(), image.height(), step_px);
    let (offset_x, offset_y) = steps.origin_offset(step_px);

    let mut canvas = RgbaImage::from_pixel(width, height, Rgba(EXPANSION_SENTINEL_RGBA));
    let original = codec::to_rgba_image(image)?;
    imageops::overlay(
        &mut canvas,
        &original,
        i64::from(offset_x),
        i64::from(offset_y),
    );

    log::debug!(
        "Expanded {}x{} to {width}x{height}, original at ({offset_x}, {offset_y})",
        image.width(),
        image.height()
    );
    Ok(RasterImage::from_rgba(
        width,
        height,
        canvas.into_raw(),
        image.encoding(),
    ))
}
