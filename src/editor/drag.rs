// SPDX-License-Identifier: MPL-2.0
//! Pointer drag scoping.
//!
//! A drag is acquired on pointer-down and must be released on pointer-up,
//! pointer-leave, tool changes and resets. While no drag is held, pointer
//! moves are ignored.

use crate::domain::geometry::Point;

/// What the held drag is manipulating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragKind {
    /// Painting on the mask canvas.
    Stroke,
    /// Moving the inserted object.
    Placement {
        /// Pointer position (native pixels) when the drag started.
        start_pointer: Point,
        /// Object position (percent) when the drag started.
        start_position: (f32, f32),
    },
    /// Drawing a crop rectangle.
    Crop,
}

/// The single drag a session can hold.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragSession {
    active: Option<DragKind>,
}

impl DragSession {
    /// Takes the drag, returning whatever was held before.
    pub fn acquire(&mut self, kind: DragKind) -> Option<DragKind> {
        self.active.replace(kind)
    }

    /// Gives the drag up, returning what was held.
    pub fn release(&mut self) -> Option<DragKind> {
        self.active.take()
    }

    #[must_use]
    pub fn active(&self) -> Option<DragKind> {
        self.active
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Position for a placement drag that has moved to `pointer`.
    ///
    /// Pointer deltas are converted to percent of the container size.
    #[must_use]
    pub fn placement_position(&self, pointer: Point, container: (u32, u32)) -> Option<(f32, f32)> {
        let DragKind::Placement {
            start_pointer,
            start_position,
        } = self.active?
        else {
            return None;
        };
        let percent = |delta: f32, extent: u32| {
            if extent == 0 {
                0.0
            } else {
                delta / extent as f32 * 100.0
            }
        };
        Some((
            start_position.0 + percent(pointer.x - start_pointer.x, container.0),
            start_position.1 + percent(pointer.y - start_pointer.y, container.1),
        ))
    }
}
