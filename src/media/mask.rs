// SPDX-License-Identifier: MPL-2.0
//! Freehand brush mask.
//!
//! Strokes are painted with a translucent color and accumulate with normal
//! source-over compositing. Export thresholds the alpha channel: anything
//! painted at all becomes white.

use crate::config::defaults::MASK_STROKE_RGBA;
use crate::domain::geometry::Point;
use crate::domain::media::{BinaryMask, ImageEncoding, RasterImage};
use crate::error::ResourceError;
use crate::media::pixmap;
use tiny_skia::{Color, FillRule, LineCap, LineJoin, Paint, PathBuilder, Pixmap, Stroke, Transform};

/// Accumulating stroke layer, sized to the image being annotated.
#[derive(Debug, Clone)]
pub struct MaskCanvas {
    pixmap: Pixmap,
    /// End of the current stroke; `None` between strokes.
    last_point: Option<Point>,
    diameter: f32,
}

impl MaskCanvas {
    /// Creates a blank canvas in native image pixels.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::CanvasUnavailable`] if the buffer cannot be allocated.
    pub fn new(width: u32, height: u32) -> Result<Self, ResourceError> {
        Ok(Self {
            pixmap: pixmap::blank(width, height)?,
            last_point: None,
            diameter: 1.0,
        })
    }

    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.pixmap.width(), self.pixmap.height())
    }

    /// Whether a stroke is in progress.
    #[must_use]
    pub fn is_stroking(&self) -> bool {
        self.last_point.is_some()
    }

    /// Starts a stroke and paints a dot so that a tap marks pixels.
    ///
    /// `diameter` is in native pixels. Without a point this is a no-op.
    pub fn begin_stroke(&mut self, point: Option<Point>, diameter: f32) {
        let Some(point) = point else {
            return;
        };
        self.diameter = diameter.max(1.0);
        self.dab(point);
        self.last_point = Some(point);
    }

    /// Extends the current stroke with a round-capped segment.
    ///
    /// A no-op without a point or before [`begin_stroke`](Self::begin_stroke).
    pub fn extend_stroke(&mut self, point: Option<Point>) {
        let (Some(from), Some(to)) = (self.last_point, point) else {
            return;
        };

        if from == to {
            self.dab(to);
        } else {
            let mut builder = PathBuilder::new();
            builder.move_to(from.x, from.y);
            builder.line_to(to.x, to.y);
            if let Some(path) = builder.finish() {
                let stroke = Stroke {
                    width: self.diameter,
                    line_cap: LineCap::Round,
                    line_join: LineJoin::Round,
                    ..Stroke::default()
                };
                self.pixmap
                    .stroke_path(&path, &stroke_paint(), &stroke, Transform::identity(), None);
            }
        }
        self.last_point = Some(to);
    }

    pub fn end_stroke(&mut self) {
        self.last_point = None;
    }

    /// Erases every stroke.
    pub fn clear(&mut self) {
        self.pixmap.fill(Color::TRANSPARENT);
        self.last_point = None;
    }

    /// Returns `true` if no pixel has been painted.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.pixmap.pixels().iter().all(|px| px.alpha() == 0)
    }

    /// Thresholds the stroke alpha into a white/black mask.
    ///
    /// Returns `None` when nothing has been painted.
    #[must_use]
    pub fn export_binary_mask(&self) -> Option<BinaryMask> {
        let selected = self
            .pixmap
            .pixels()
            .iter()
            .map(|px| px.alpha() > 0)
            .collect();
        BinaryMask::from_selection(self.pixmap.width(), self.pixmap.height(), selected)
    }

    /// The translucent stroke layer, for drawing over the base image.
    #[must_use]
    pub fn overlay(&self) -> RasterImage {
        pixmap::to_raster(&self.pixmap, ImageEncoding::Png)
    }

    fn dab(&mut self, center: Point) {
        if let Some(path) = PathBuilder::from_circle(center.x, center.y, self.diameter / 2.0) {
            self.pixmap.fill_path(
                &path,
                &stroke_paint(),
                FillRule::Winding,
                Transform::identity(),
                None,
            );
        }
    }
}

fn stroke_paint() -> Paint<'static> {
    let [r, g, b, a] = MASK_STROKE_RGBA;
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = true;
    paint
}
