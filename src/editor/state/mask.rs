// SPDX-License-Identifier: MPL-2.0
//! Magic Fill mask controls.

use crate::domain::editing::BrushSize;
use crate::editor::{EditStep, Phase, State, Tool};
use crate::error::{Result, ValidationError};

impl State {
    pub(super) fn brush_size_changed(&mut self, diameter: f32) {
        self.brush_size = BrushSize::new(diameter);
    }

    pub(super) fn clear_mask(&mut self) {
        if self.phase != Phase::Editing(EditStep::SelectingMask) {
            return;
        }
        if let Some(mask) = self.mask.as_mut() {
            mask.clear();
        }
        self.finalized_mask = None;
        self.drag.release();
    }

    /// Freezes the drawn strokes into the mask that will be submitted.
    pub(super) fn confirm_mask(&mut self) -> Result<()> {
        if self.phase != Phase::Editing(EditStep::SelectingMask) || self.crop.is_some() {
            return Ok(());
        }
        let mask = self
            .mask
            .as_ref()
            .and_then(crate::media::MaskCanvas::export_binary_mask)
            .ok_or(ValidationError::EmptyMask)?;
        log::debug!("Mask confirmed with {} selected pixels", mask.selected_count());
        self.finalized_mask = Some(mask);
        self.enter(Phase::Editing(EditStep::PromptAndSubmit));
        Ok(())
    }

    /// Leaves prompt entry for the step that produced its input.
    pub(super) fn back_to_mask(&mut self) {
        if self.phase != Phase::Editing(EditStep::PromptAndSubmit) || self.crop.is_some() {
            return;
        }
        match self.tool {
            Some(Tool::MagicFill) => {
                self.finalized_mask = None;
                self.enter(Phase::Editing(EditStep::SelectingMask));
            }
            Some(Tool::Insert) => {
                self.placement_confirmed = false;
                self.enter(Phase::Editing(EditStep::ConfiguringPlacement));
            }
            Some(Tool::Expand) | None => {}
        }
    }
}
