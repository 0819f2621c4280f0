// SPDX-License-Identifier: MPL-2.0
//! Display-space to native-space coordinate conversion.
//!
//! Pointer positions arrive in viewport coordinates; rasters are addressed in
//! their backing-buffer pixels. The two differ by the element's on-screen
//! origin and by independent horizontal/vertical scale factors.

use crate::domain::geometry::{Point, Rect};

/// A pointer event position as delivered by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerSample {
    Mouse(Point),
    /// Active touch points; empty on touch-end.
    Touch(Vec<Point>),
}

impl PointerSample {
    /// Viewport position of the sample, if it carries one.
    #[must_use]
    pub fn position(&self) -> Option<Point> {
        match self {
            PointerSample::Mouse(point) => Some(*point),
            PointerSample::Touch(points) => points.first().copied(),
        }
    }
}

/// Maps viewport positions onto a raster of known native size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    display: Rect,
    native: (u32, u32),
}

impl CoordinateMapper {
    /// `display` is the element's on-screen bounding rectangle.
    #[must_use]
    pub fn new(display: Rect, native_width: u32, native_height: u32) -> Self {
        Self {
            display,
            native: (native_width, native_height),
        }
    }

    /// A mapper where display and native pixels coincide.
    #[must_use]
    pub fn identity(native_width: u32, native_height: u32) -> Self {
        Self::new(
            Rect::new(0.0, 0.0, native_width as f32, native_height as f32),
            native_width,
            native_height,
        )
    }

    #[must_use]
    pub fn display(&self) -> Rect {
        self.display
    }

    /// Native pixels per display pixel as `(x, y)`.
    ///
    /// A collapsed display axis maps 1:1 rather than dividing by zero.
    #[must_use]
    pub fn scale(&self) -> (f32, f32) {
        let axis = |native: u32, displayed: f32| {
            if displayed > 0.0 {
                native as f32 / displayed
            } else {
                1.0
            }
        };
        (
            axis(self.native.0, self.display.width),
            axis(self.native.1, self.display.height),
        )
    }

    /// Converts a viewport position to native coordinates.
    #[must_use]
    pub fn to_native(&self, client: Point) -> Point {
        let (sx, sy) = self.scale();
        let local = self.display.relative(client);
        Point::new(local.x * sx, local.y * sy)
    }

    /// Converts a pointer sample; `None` when it carries no position.
    #[must_use]
    pub fn map(&self, sample: &PointerSample) -> Option<Point> {
        sample.position().map(|point| self.to_native(point))
    }

    /// Scales a display-space length (e.g. brush diameter) into native pixels.
    ///
    /// Uses the horizontal factor, matching how strokes are laid out.
    #[must_use]
    pub fn scale_length(&self, length: f32) -> f32 {
        length * self.scale().0
    }

    /// Converts a display-space rectangle to native coordinates.
    #[must_use]
    pub fn rect_to_native(&self, rect: Rect) -> Rect {
        let (sx, sy) = self.scale();
        let origin = self.to_native(rect.origin());
        Rect::new(origin.x, origin.y, rect.width * sx, rect.height * sy)
    }
}
