// SPDX-License-Identifier: MPL-2.0
//! Rectangular crop selection and cropping.
//!
//! The selection is tracked in display pixels (relative to the shown image)
//! and only converted to native pixels when the crop is saved.

use crate::config::defaults::DEFAULT_MIN_CROP_SELECTION_PX;
use crate::domain::geometry::{Point, Rect, Size};
use crate::domain::media::RasterImage;
use crate::error::ResourceError;
use crate::media::codec;
use image_rs::DynamicImage;

/// A crop rectangle in native pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Tracks one rectangular drag gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct CropSelector {
    anchor: Option<Point>,
    selection: Option<Rect>,
    min_size: f32,
}

impl Default for CropSelector {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_CROP_SELECTION_PX)
    }
}

impl CropSelector {
    /// `min_size` is the smallest kept selection edge, in display pixels.
    #[must_use]
    pub fn new(min_size: f32) -> Self {
        Self {
            anchor: None,
            selection: None,
            min_size,
        }
    }

    /// Starts a new selection at `point`, replacing any previous one.
    pub fn begin(&mut self, point: Option<Point>) {
        let Some(point) = point else {
            return;
        };
        self.anchor = Some(point);
        self.selection = Some(Rect::new(point.x, point.y, 0.0, 0.0));
    }

    /// Stretches the selection between the anchor and `point`.
    pub fn update(&mut self, point: Option<Point>) {
        if let (Some(anchor), Some(point)) = (self.anchor, point) {
            self.selection = Some(Rect::from_corners(anchor, point));
        }
    }

    /// Ends the drag; selections thinner than the minimum are discarded as taps.
    pub fn finish(&mut self) -> Option<Rect> {
        if self.anchor.take().is_none() {
            return self.selection;
        }
        let kept = self
            .selection
            .filter(|rect| rect.width >= self.min_size && rect.height >= self.min_size);
        if kept.is_none() {
            log::debug!("Discarding crop selection smaller than {} px", self.min_size);
        }
        self.selection = kept;
        kept
    }

    pub fn cancel(&mut self) {
        self.anchor = None;
        self.selection = None;
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.anchor.is_some()
    }

    #[must_use]
    pub fn selection(&self) -> Option<Rect> {
        self.selection
    }
}

/// Converts a display-space selection into native pixels, rounding per axis.
///
/// The selection is first cut to the displayed image, so a drag that ran
/// past an edge only keeps the part over the image.
#[must_use]
pub fn native_crop_rect(display_rect: Rect, display_size: Size, native: (u32, u32)) -> CropRect {
    let axis_scale = |native: u32, displayed: f32| {
        if displayed > 0.0 {
            native as f32 / displayed
        } else {
            1.0
        }
    };
    // Returns (start, length) inside [0, extent]; a collapsed axis is not cut.
    let visible = |start: f32, length: f32, extent: f32| {
        let low = start.max(0.0);
        let high = if extent > 0.0 {
            (start + length).min(extent)
        } else {
            start + length
        };
        (low, (high - low).max(0.0))
    };
    let sx = axis_scale(native.0, display_size.width);
    let sy = axis_scale(native.1, display_size.height);
    let (x, width) = visible(display_rect.x, display_rect.width, display_size.width);
    let (y, height) = visible(display_rect.y, display_rect.height, display_size.height);
    let to_px = |v: f32| {
        // Non-negative and bounded by the native size after clamping below
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let px = v.max(0.0).round() as u32;
        px
    };
    CropRect {
        x: to_px(x * sx),
        y: to_px(y * sy),
        width: to_px(width * sx),
        height: to_px(height * sy),
    }
}

/// Crops `image` to `rect`, clamped to the image bounds.
///
/// The result keeps the source's encoding family and file name.
///
/// # Errors
///
/// Returns [`ResourceError::InvalidDimensions`] if the image buffer is unusable.
pub fn crop_raster(image: &RasterImage, rect: CropRect) -> Result<RasterImage, ResourceError> {
    let (img_width, img_height) = image.dimensions();

    let x = rect.x.min(img_width.saturating_sub(1));
    let y = rect.y.min(img_height.saturating_sub(1));
    let width = rect.width.min(img_width.saturating_sub(x)).max(1);
    let height = rect.height.min(img_height.saturating_sub(y)).max(1);

    let source = DynamicImage::ImageRgba8(codec::to_rgba_image(image)?);
    let cropped = codec::from_dynamic(&source.crop_imm(x, y, width, height), image.encoding());
    log::debug!(
        "Cropped {img_width}x{img_height} to {width}x{height} at ({x}, {y})"
    );
    Ok(match image.file_name() {
        Some(name) => cropped.with_file_name(name),
        None => cropped,
    })
}
