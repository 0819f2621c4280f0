// SPDX-License-Identifier: MPL-2.0
//! Building generation requests and applying their outcome.

use crate::application::port::generation::{GenerationRequest, Payload};
use crate::domain::media::RasterImage;
use crate::editor::{Event, Phase, State, Tool};
use crate::error::{Error, Result, ValidationError};
use crate::media::{codec, expansion, placement};

impl State {
    fn trimmed_prompt(&self) -> Result<String> {
        let prompt = self.prompt.trim();
        if prompt.is_empty() {
            return Err(ValidationError::MissingPrompt.into());
        }
        Ok(prompt.to_string())
    }

    fn base_payload(&self, image: &RasterImage) -> Result<Payload> {
        Ok(Payload::new(
            codec::encode(image, self.settings.jpeg_quality)?,
            image.mime_type(),
        ))
    }

    /// Text-to-image from `Home`; the result becomes the base image.
    pub(super) fn generate_from_text(&mut self) -> Result<Event> {
        if self.phase != Phase::Home {
            return Ok(Event::None);
        }
        let prompt = self.trimmed_prompt()?;
        Ok(self.begin_loading(GenerationRequest::GenerateFromText { prompt }))
    }

    pub(super) fn submit(&mut self) -> Result<Event> {
        let request = match (self.phase, self.tool) {
            (Phase::Loading, _) => {
                log::debug!("Submit ignored: a request is already in flight");
                return Ok(Event::None);
            }
            _ if self.crop.is_some() => return Ok(Event::None),
            (Phase::Editing(_), Some(Tool::MagicFill)) => self.edit_region_request()?,
            (Phase::Editing(_), Some(Tool::Insert)) => self.composite_blend_request()?,
            (Phase::Expanding, Some(Tool::Expand)) => self.outpaint_request()?,
            _ => return Ok(Event::None),
        };
        Ok(self.begin_loading(request))
    }

    fn edit_region_request(&self) -> Result<GenerationRequest> {
        let prompt = self.trimmed_prompt()?;
        let mask = self
            .finalized_mask
            .as_ref()
            .ok_or(ValidationError::MissingMask)?;
        let base = self.require_base()?;
        let context = self.context.trim();

        Ok(GenerationRequest::EditRegion {
            prompt,
            base: self.base_payload(base)?,
            mask: Payload::new(codec::encode_mask(mask)?, "image/png"),
            context: (!context.is_empty()).then(|| context.to_string()),
        })
    }

    fn composite_blend_request(&self) -> Result<GenerationRequest> {
        let object = self
            .insert_object
            .as_ref()
            .ok_or(ValidationError::MissingInsertObject)?;
        if !self.placement_confirmed {
            return Err(ValidationError::PlacementNotConfirmed.into());
        }
        let base = self.require_base()?;
        let render = placement::render_placement(base, object, &self.placement)?;

        Ok(GenerationRequest::CompositeBlend {
            base: self.base_payload(base)?,
            composite: self.base_payload(&render.composite)?,
            placement_mask: Payload::new(codec::encode_mask(&render.mask)?, "image/png"),
        })
    }

    fn outpaint_request(&self) -> Result<GenerationRequest> {
        let expansion = self
            .expansion
            .as_ref()
            .ok_or(ValidationError::NoExpansion)?;
        if expansion.steps().is_empty() {
            return Err(ValidationError::NoExpansion.into());
        }
        let prompt = self.trimmed_prompt()?;
        let base = self.require_base()?;
        let canvas =
            expansion::build_expansion_canvas(base, &expansion.steps(), expansion.step_px())?;

        Ok(GenerationRequest::Outpaint {
            prompt,
            canvas: self.base_payload(&canvas)?,
        })
    }

    /// Enters `Loading`, remembering where to return on failure.
    fn begin_loading(&mut self, request: GenerationRequest) -> Event {
        log::info!(
            "Submitting {} ({} payload bytes)",
            request.kind(),
            request.payload_len()
        );
        self.pointer_leave();
        self.resume_phase = Some(self.phase);
        self.enter(Phase::Loading);
        Event::GenerationRequested(request)
    }

    pub(super) fn finish_generation(
        &mut self,
        outcome: std::result::Result<RasterImage, Error>,
    ) -> Result<Event> {
        if self.phase != Phase::Loading {
            log::warn!("Dropping a generation outcome that arrived outside Loading");
            return Ok(Event::None);
        }
        let resume = self.resume_phase.take().unwrap_or(Phase::ToolSelection);

        match outcome {
            Ok(image) if resume == Phase::Home => {
                log::info!("Generated a {}x{} base image", image.width(), image.height());
                self.clear_tool_state();
                self.original_image = None;
                self.base_image = Some(image);
                self.error = None;
                self.enter(Phase::ToolSelection);
                Ok(Event::None)
            }
            Ok(image) => {
                log::info!("Received a {}x{} result", image.width(), image.height());
                let result = match self.base_image.as_ref().and_then(RasterImage::file_name) {
                    Some(name) => image.with_file_name(name),
                    None => image,
                };
                self.result = Some(result);
                self.error = None;
                self.enter(Phase::Result);
                Ok(Event::None)
            }
            Err(err) => {
                self.enter(resume);
                Err(err)
            }
        }
    }
}
