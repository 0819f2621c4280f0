// SPDX-License-Identifier: MPL-2.0
//! Rendering an inserted object through its [`PlacementTransform`].
//!
//! One affine transform is built per render and used for both outputs:
//! the visible composite and the binary placement mask. Both therefore
//! cover exactly the same pixels.
//!
//! Tilts are flattened to axis foreshortening (`cos` of the tilt angle),
//! applied after the in-plane rotation. Perspective depth does not change
//! the flattened raster.

use crate::domain::editing::PlacementTransform;
use crate::domain::geometry::Point;
use crate::domain::media::{BinaryMask, RasterImage};
use crate::error::{Result, ValidationError};
use crate::media::pixmap;
use tiny_skia::{
    BlendMode, Color, FilterQuality, Paint, Pixmap, PixmapPaint, Rect as SkRect, Transform,
};

/// Builds the object-to-container transform.
///
/// Maps object pixel `(0, 0)..(w, h)` so that the object's center lands on
/// the placement position.
#[must_use]
pub fn placement_transform(
    placement: &PlacementTransform,
    container: (u32, u32),
    object: (u32, u32),
) -> Transform {
    let center_x = placement.position_x.to_pixels(container.0);
    let center_y = placement.position_y.to_pixels(container.1);
    let scale = placement.scale.as_factor();

    Transform::from_translate(center_x, center_y)
        .pre_scale(
            placement.tilt_y.foreshortening(),
            placement.tilt_x.foreshortening(),
        )
        .pre_rotate(placement.rotation.degrees())
        .pre_scale(scale, scale)
        .pre_translate(-(object.0 as f32) / 2.0, -(object.1 as f32) / 2.0)
}

/// The object's corners in container pixels, clockwise from its top-left.
#[must_use]
pub fn placement_corners(
    placement: &PlacementTransform,
    container: (u32, u32),
    object: (u32, u32),
) -> [Point; 4] {
    let transform = placement_transform(placement, container, object);
    let (w, h) = (object.0 as f32, object.1 as f32);
    [(0.0, 0.0), (w, 0.0), (w, h), (0.0, h)].map(|(x, y)| {
        let mut point = tiny_skia::Point::from_xy(x, y);
        transform.map_point(&mut point);
        Point::new(point.x, point.y)
    })
}

/// The two buffers produced for a composite-blend request.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementRender {
    /// Base image with the object drawn over it at the configured opacity.
    pub composite: RasterImage,
    /// White exactly where the object's bounding box landed.
    pub mask: BinaryMask,
}

/// Renders the composite and placement mask from one transform.
///
/// # Errors
///
/// Returns a resource error if a canvas cannot be allocated and
/// [`ValidationError::EmptyMask`] if the object covers no pixel.
pub fn render_placement(
    base: &RasterImage,
    object: &RasterImage,
    placement: &PlacementTransform,
) -> Result<PlacementRender> {
    let transform = placement_transform(placement, base.dimensions(), object.dimensions());
    let composite = draw_composite(base, object, placement, transform)?;
    let mask = draw_mask(base.dimensions(), object.dimensions(), transform)?;
    Ok(PlacementRender { composite, mask })
}

/// Renders only the visible composite.
///
/// # Errors
///
/// Returns a resource error if a canvas cannot be allocated.
pub fn render_composite(
    base: &RasterImage,
    object: &RasterImage,
    placement: &PlacementTransform,
) -> Result<RasterImage> {
    let transform = placement_transform(placement, base.dimensions(), object.dimensions());
    draw_composite(base, object, placement, transform)
}

/// Renders only the placement mask.
///
/// # Errors
///
/// Returns a resource error if a canvas cannot be allocated and
/// [`ValidationError::EmptyMask`] if the object covers no pixel.
pub fn render_placement_mask(
    container: (u32, u32),
    object: (u32, u32),
    placement: &PlacementTransform,
) -> Result<BinaryMask> {
    let transform = placement_transform(placement, container, object);
    draw_mask(container, object, transform)
}

fn draw_composite(
    base: &RasterImage,
    object: &RasterImage,
    placement: &PlacementTransform,
    transform: Transform,
) -> Result<RasterImage> {
    let mut canvas = pixmap::to_pixmap(base)?;
    let overlay = pixmap::to_pixmap(object)?;
    let paint = PixmapPaint {
        opacity: placement.opacity.as_alpha(),
        blend_mode: BlendMode::SourceOver,
        quality: FilterQuality::Bilinear,
    };
    canvas.draw_pixmap(0, 0, overlay.as_ref(), &paint, transform, None);

    let composite = pixmap::to_raster(&canvas, base.encoding());
    Ok(match base.file_name() {
        Some(name) => composite.with_file_name(name),
        None => composite,
    })
}

fn draw_mask(container: (u32, u32), object: (u32, u32), transform: Transform) -> Result<BinaryMask> {
    let mut canvas: Pixmap = pixmap::blank(container.0, container.1)?;
    canvas.fill(Color::BLACK);

    let mut paint = Paint::default();
    paint.set_color(Color::WHITE);
    // Hard edges: the mask must stay strictly two-level.
    paint.anti_alias = false;

    if let Some(bounds) = SkRect::from_xywh(0.0, 0.0, object.0 as f32, object.1 as f32) {
        canvas.fill_rect(bounds, &paint, transform, None);
    }

    let selected = canvas.pixels().iter().map(|px| px.red() > 127).collect();
    BinaryMask::from_selection(container.0, container.1, selected).ok_or_else(|| {
        log::warn!("Placed object covers no pixel of the {}x{} canvas", container.0, container.1);
        ValidationError::EmptyMask.into()
    })
}
