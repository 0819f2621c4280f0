// SPDX-License-Identifier: MPL-2.0
//! Navigation between workflow phases.

use crate::domain::editing::ExpansionState;
use crate::domain::media::RasterImage;
use crate::editor::{EditStep, Event, Phase, State, Tool, UploadTarget};
use crate::error::{Error, Result};
use crate::media::{codec, MaskCanvas};

impl State {
    pub(super) fn begin_upload(&mut self) -> Event {
        match self.phase {
            Phase::Home | Phase::AwaitingUpload => {
                self.enter(Phase::AwaitingUpload);
                Event::UploadRequested(UploadTarget::BaseImage)
            }
            _ => Event::None,
        }
    }

    pub(super) fn base_image_loaded(
        &mut self,
        outcome: std::result::Result<RasterImage, Error>,
    ) -> Result<Event> {
        if !matches!(self.phase, Phase::Home | Phase::AwaitingUpload) {
            log::debug!("Ignoring base image outside the upload step");
            return Ok(Event::None);
        }
        let image = outcome?;
        log::info!(
            "Base image loaded: {}x{} {}",
            image.width(),
            image.height(),
            image.mime_type()
        );
        self.clear_tool_state();
        self.original_image = None;
        self.base_image = Some(image);
        self.enter(Phase::ToolSelection);
        Ok(Event::None)
    }

    pub(super) fn select_tool(&mut self, tool: Tool) -> Result<Event> {
        if self.phase != Phase::ToolSelection {
            return Ok(Event::None);
        }
        let (width, height) = self.require_base()?.dimensions();

        let event = match tool {
            Tool::MagicFill => {
                self.mask = Some(MaskCanvas::new(width, height)?);
                self.enter(Phase::Editing(EditStep::SelectingMask));
                Event::None
            }
            Tool::Insert => {
                self.enter(Phase::Editing(EditStep::ConfiguringPlacement));
                Event::UploadRequested(UploadTarget::InsertObject)
            }
            Tool::Expand => {
                let expansion = ExpansionState::for_image(
                    width,
                    height,
                    self.settings.expansion_step_ratio,
                    self.settings.max_expansion_clicks,
                );
                log::debug!("Expansion step fixed at {} px", expansion.step_px());
                self.expansion = Some(expansion);
                self.enter(Phase::Expanding);
                Event::None
            }
        };
        self.tool = Some(tool);
        Ok(event)
    }

    pub(super) fn change_tool(&mut self) {
        if matches!(self.phase, Phase::Editing(_) | Phase::Expanding) {
            self.clear_tool_state();
            self.enter(Phase::ToolSelection);
        }
    }

    pub(super) fn start_over(&mut self) {
        if self.is_loading() {
            log::debug!("Start over ignored while a request is in flight");
            return;
        }
        self.reset_session();
    }

    pub(super) fn edit_again(&mut self) {
        if self.phase == Phase::Result {
            self.clear_tool_state();
            self.enter(Phase::ToolSelection);
        }
    }

    /// Promotes the result to the new base image.
    ///
    /// The pre-crop original is lost at this point.
    pub(super) fn continue_editing(&mut self) {
        if self.phase != Phase::Result {
            return;
        }
        let Some(result) = self.result.take() else {
            return;
        };
        self.clear_tool_state();
        self.original_image = None;
        self.base_image = Some(result);
        self.enter(Phase::ToolSelection);
    }

    pub(super) fn download(&mut self) -> Result<Event> {
        if self.phase != Phase::Result {
            return Ok(Event::None);
        }
        let Some(result) = self.result.as_ref() else {
            return Ok(Event::None);
        };
        let bytes = codec::encode(result, self.settings.jpeg_quality)?;
        Ok(Event::DownloadRequested {
            file_name: codec::download_file_name(result.file_name(), result.encoding()),
            bytes,
            mime_type: result.mime_type(),
        })
    }
}
