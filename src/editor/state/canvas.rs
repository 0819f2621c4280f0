// SPDX-License-Identifier: MPL-2.0
//! Pointer gestures over the displayed image.
//!
//! Pointer-down acquires the drag for whatever the current step edits;
//! moves only act while a drag is held; up and leave always release it.

use crate::domain::geometry::Point;
use crate::editor::{DragKind, EditStep, Phase, State};
use crate::media::PointerSample;

impl State {
    /// Position relative to the displayed image, in display pixels.
    fn display_point(&self, sample: &PointerSample) -> Option<Point> {
        let mapper = self.coordinate_mapper()?;
        sample
            .position()
            .map(|position| mapper.display().relative(position))
    }

    fn native_point(&self, sample: &PointerSample) -> Option<Point> {
        self.coordinate_mapper()?.map(sample)
    }

    pub(super) fn pointer_down(&mut self, sample: &PointerSample) {
        if self.drag.is_active() {
            self.pointer_leave();
        }

        if self.crop.is_some() {
            let point = self.display_point(sample);
            if let Some(overlay) = self.crop.as_mut() {
                overlay.selector.begin(point);
                if point.is_some() {
                    self.drag.acquire(DragKind::Crop);
                }
            }
            return;
        }

        match self.phase {
            Phase::Editing(EditStep::SelectingMask) => {
                let Some(mapper) = self.coordinate_mapper() else {
                    return;
                };
                let point = mapper.map(sample);
                let diameter = mapper.scale_length(self.brush_size.value());
                if let (Some(mask), Some(_)) = (self.mask.as_mut(), point) {
                    mask.begin_stroke(point, diameter);
                    self.drag.acquire(DragKind::Stroke);
                }
            }
            Phase::Editing(EditStep::ConfiguringPlacement) if self.insert_object.is_some() => {
                if let Some(start_pointer) = self.native_point(sample) {
                    self.drag.acquire(DragKind::Placement {
                        start_pointer,
                        start_position: (
                            self.placement.position_x.value(),
                            self.placement.position_y.value(),
                        ),
                    });
                }
            }
            _ => {}
        }
    }

    pub(super) fn pointer_move(&mut self, sample: &PointerSample) {
        let Some(kind) = self.drag.active() else {
            return;
        };
        match kind {
            DragKind::Stroke => {
                let point = self.native_point(sample);
                if let Some(mask) = self.mask.as_mut() {
                    mask.extend_stroke(point);
                }
            }
            DragKind::Crop => {
                let point = self.display_point(sample);
                if let Some(overlay) = self.crop.as_mut() {
                    overlay.selector.update(point);
                }
            }
            DragKind::Placement { .. } => {
                let Some(container) = self.base_image.as_ref().map(|base| base.dimensions())
                else {
                    return;
                };
                let moved = self
                    .native_point(sample)
                    .and_then(|pointer| self.drag.placement_position(pointer, container));
                if let Some((x, y)) = moved {
                    self.placement = self.placement.with_position(x, y);
                }
            }
        }
    }

    pub(super) fn pointer_up(&mut self, sample: &PointerSample) {
        self.pointer_move(sample);
        self.pointer_leave();
    }

    /// Ends any held drag without a final position.
    pub(super) fn pointer_leave(&mut self) {
        match self.drag.release() {
            Some(DragKind::Stroke) => {
                if let Some(mask) = self.mask.as_mut() {
                    mask.end_stroke();
                }
            }
            Some(DragKind::Crop) => {
                if let Some(overlay) = self.crop.as_mut() {
                    overlay.selector.finish();
                }
            }
            Some(DragKind::Placement { .. }) | None => {}
        }
    }
}
