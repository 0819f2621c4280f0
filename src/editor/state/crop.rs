// SPDX-License-Identifier: MPL-2.0
//! Crop overlay and original-image restore.

use crate::editor::{CropOverlay, DragKind, Phase, State};
use crate::error::{Result, ValidationError};
use crate::media::crop::{self, CropSelector};

impl State {
    pub(super) fn open_crop(&mut self) {
        let Phase::Editing(step) = self.phase else {
            return;
        };
        if self.crop.is_some() {
            return;
        }
        self.drag.release();
        if let Some(mask) = self.mask.as_mut() {
            mask.end_stroke();
        }
        self.crop = Some(CropOverlay {
            suspended: step,
            selector: CropSelector::new(self.settings.min_crop_selection_px),
        });
    }

    /// Crops the base image to the selection and resumes the suspended step.
    ///
    /// The phase stays `Editing(step)` while the overlay is open. The first
    /// crop keeps the uncropped image for "restore original".
    pub(super) fn save_crop(&mut self) -> Result<()> {
        let Some(overlay) = self.crop.as_ref() else {
            return Ok(());
        };
        let selection = overlay
            .selector
            .selection()
            .ok_or(ValidationError::NoCropSelection)?;

        let mapper = self
            .coordinate_mapper()
            .ok_or(ValidationError::MissingImage)?;
        let base = self.require_base()?;
        let rect = crop::native_crop_rect(selection, mapper.display().size(), base.dimensions());
        let cropped = crop::crop_raster(base, rect)?;
        let previous = base.clone();

        self.swap_base_image(cropped)?;
        self.crop = None;
        if self.original_image.is_none() {
            self.original_image = Some(previous);
        }
        log::info!(
            "Cropped to {}x{} at ({}, {})",
            rect.width,
            rect.height,
            rect.x,
            rect.y
        );
        Ok(())
    }

    pub(super) fn cancel_crop(&mut self) {
        if let Some(overlay) = self.crop.take() {
            if self.drag.active() == Some(DragKind::Crop) {
                self.drag.release();
            }
            self.enter(Phase::Editing(overlay.suspended));
        }
    }

    pub(super) fn restore_original(&mut self) -> Result<()> {
        if !matches!(self.phase, Phase::ToolSelection | Phase::Editing(_)) || self.crop.is_some() {
            return Ok(());
        }
        let Some(original) = self.original_image.clone() else {
            return Ok(());
        };
        self.swap_base_image(original)?;
        self.original_image = None;
        log::info!("Restored the uncropped original");
        Ok(())
    }

    pub(super) fn discard_original(&mut self) {
        if self.original_image.take().is_some() {
            log::debug!("Discarded the uncropped original");
        }
    }
}
