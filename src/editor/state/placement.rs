// SPDX-License-Identifier: MPL-2.0
//! Insert tool: object upload and placement sliders.

use crate::domain::editing::{PlacementField, PlacementTransform};
use crate::domain::media::RasterImage;
use crate::editor::{EditStep, Event, Phase, State, Tool, UploadTarget};
use crate::error::{Error, Result, ValidationError};

impl State {
    fn is_placing(&self) -> bool {
        self.tool == Some(Tool::Insert)
            && self.phase == Phase::Editing(EditStep::ConfiguringPlacement)
            && self.crop.is_none()
    }

    pub(super) fn choose_insert_object(&mut self) -> Event {
        if self.is_placing() {
            Event::UploadRequested(UploadTarget::InsertObject)
        } else {
            Event::None
        }
    }

    /// Installs a new object with a fresh default placement.
    pub(super) fn insert_object_loaded(
        &mut self,
        outcome: std::result::Result<RasterImage, Error>,
    ) -> Result<()> {
        if self.tool != Some(Tool::Insert) || !matches!(self.phase, Phase::Editing(_)) {
            log::debug!("Ignoring insert object outside the insert tool");
            return Ok(());
        }
        let object = outcome?;
        log::info!("Insert object loaded: {}x{}", object.width(), object.height());
        self.insert_object = Some(object);
        self.placement = PlacementTransform::default();
        self.placement_confirmed = false;
        if let Some(crop) = self.crop.as_mut() {
            crop.suspended = EditStep::ConfiguringPlacement;
        }
        self.enter(Phase::Editing(EditStep::ConfiguringPlacement));
        Ok(())
    }

    pub(super) fn placement_changed(&mut self, field: PlacementField, value: f32) {
        if self.is_placing() && self.insert_object.is_some() {
            self.placement = self.placement.with_field(field, value);
        }
    }

    pub(super) fn confirm_placement(&mut self) -> Result<()> {
        if !self.is_placing() {
            return Ok(());
        }
        if self.insert_object.is_none() {
            return Err(ValidationError::MissingInsertObject.into());
        }
        self.placement_confirmed = true;
        self.enter(Phase::Editing(EditStep::PromptAndSubmit));
        Ok(())
    }
}
