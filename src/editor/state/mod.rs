// SPDX-License-Identifier: MPL-2.0
//! Transition helpers that keep the editor facade slim.
//!
//! Each file adds one group of `impl State` handlers. Handlers validate
//! before they mutate, so an `Err` leaves the session untouched.

mod canvas;
mod crop;
mod expansion;
mod mask;
mod placement;
mod routing;
mod session;
mod submission;

use crate::domain::editing::PlacementTransform;
use crate::domain::media::RasterImage;
use crate::editor::{EditStep, ErrorNotice, Phase, State, Tool};
use crate::error::{Error, Result, ValidationError};
use crate::media::MaskCanvas;

impl State {
    /// Puts `err` in the visible error slot.
    pub(super) fn report(&mut self, err: Error) {
        log::warn!("{err}");
        self.error = Some(ErrorNotice::new(err, self.settings.notice_timeout));
    }

    pub(super) fn enter(&mut self, phase: Phase) {
        if self.phase != phase {
            log::debug!("Phase {:?} -> {:?}", self.phase, phase);
            self.phase = phase;
        }
    }

    pub(super) fn require_base(&self) -> Result<&RasterImage> {
        self.base_image
            .as_ref()
            .ok_or(Error::Validation(ValidationError::MissingImage))
    }

    /// Drops everything tied to the current tool.
    ///
    /// The base image and the kept pre-crop original survive.
    pub(super) fn clear_tool_state(&mut self) {
        self.tool = None;
        self.prompt.clear();
        self.context.clear();
        self.mask = None;
        self.finalized_mask = None;
        self.insert_object = None;
        self.placement = PlacementTransform::default();
        self.placement_confirmed = false;
        self.expansion = None;
        self.crop = None;
        self.result = None;
        self.resume_phase = None;
        self.drag.release();
    }

    /// Back to `Home` with nothing kept but settings and viewport geometry.
    pub(super) fn reset_session(&mut self) {
        let display = self.display;
        *self = State::new(self.settings);
        self.display = display;
        log::debug!("Session reset");
    }

    /// Swaps in a new base image while editing.
    ///
    /// A mask drawn on the old image no longer applies: the stroke canvas is
    /// reallocated blank and a mask-dependent prompt step falls back to
    /// drawing.
    pub(super) fn swap_base_image(&mut self, image: RasterImage) -> Result<()> {
        let mask = match self.mask {
            Some(_) => Some(MaskCanvas::new(image.width(), image.height())?),
            None => None,
        };
        self.mask = mask;
        self.finalized_mask = None;
        self.base_image = Some(image);
        self.drag.release();

        if self.tool == Some(Tool::MagicFill)
            && self.phase == Phase::Editing(EditStep::PromptAndSubmit)
        {
            self.enter(Phase::Editing(EditStep::SelectingMask));
        }
        Ok(())
    }
}
