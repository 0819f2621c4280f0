// SPDX-License-Identifier: MPL-2.0
//! Message routing.

use crate::editor::{CanvasMessage, Event, Message, SessionMessage, State, ToolMessage};
use crate::error::Result;
use std::time::Instant;

impl State {
    pub(in crate::editor) fn route(&mut self, message: Message) -> Result<Event> {
        match message {
            Message::Session(msg) => self.handle_session_message(msg),
            Message::Tool(msg) => self.handle_tool_message(msg),
            Message::Canvas(msg) => {
                self.handle_canvas_message(msg);
                Ok(Event::None)
            }
            Message::GenerationFinished(outcome) => self.finish_generation(outcome),
            Message::ViewportResized(rect, at) => {
                self.reflow.request(rect, at);
                Ok(Event::None)
            }
            Message::Tick(now) => {
                self.tick(now);
                Ok(Event::None)
            }
        }
    }

    fn handle_session_message(&mut self, message: SessionMessage) -> Result<Event> {
        match message {
            SessionMessage::BeginUpload => Ok(self.begin_upload()),
            SessionMessage::BaseImageLoaded(outcome) => self.base_image_loaded(outcome),
            SessionMessage::SelectTool(tool) => self.select_tool(tool),
            SessionMessage::ChangeTool => {
                self.change_tool();
                Ok(Event::None)
            }
            SessionMessage::StartOver => {
                self.start_over();
                Ok(Event::None)
            }
            SessionMessage::PromptChanged(prompt) => {
                if !self.is_loading() {
                    self.prompt = prompt;
                }
                Ok(Event::None)
            }
            SessionMessage::ContextChanged(context) => {
                if !self.is_loading() {
                    self.context = context;
                }
                Ok(Event::None)
            }
            SessionMessage::GenerateFromText => self.generate_from_text(),
            SessionMessage::Submit => self.submit(),
            SessionMessage::EditAgain => {
                self.edit_again();
                Ok(Event::None)
            }
            SessionMessage::ContinueEditing => {
                self.continue_editing();
                Ok(Event::None)
            }
            SessionMessage::Download => self.download(),
            SessionMessage::DismissError => {
                self.error = None;
                Ok(Event::None)
            }
        }
    }

    fn handle_tool_message(&mut self, message: ToolMessage) -> Result<Event> {
        if self.is_loading() {
            log::debug!("Ignoring {message:?} while a request is in flight");
            return Ok(Event::None);
        }
        match message {
            ToolMessage::BrushSizeChanged(size) => self.brush_size_changed(size),
            ToolMessage::ClearMask => self.clear_mask(),
            ToolMessage::ConfirmMask => self.confirm_mask()?,
            ToolMessage::BackToMask => self.back_to_mask(),
            ToolMessage::ChooseInsertObject => return Ok(self.choose_insert_object()),
            ToolMessage::InsertObjectLoaded(outcome) => self.insert_object_loaded(outcome)?,
            ToolMessage::PlacementChanged(field, value) => self.placement_changed(field, value),
            ToolMessage::ConfirmPlacement => self.confirm_placement()?,
            ToolMessage::Expand(direction) => self.expand(direction)?,
            ToolMessage::UndoExpansion => self.undo_expansion(),
            ToolMessage::OpenCrop => self.open_crop(),
            ToolMessage::SaveCrop => self.save_crop()?,
            ToolMessage::CancelCrop => self.cancel_crop(),
            ToolMessage::RestoreOriginal => self.restore_original()?,
            ToolMessage::DiscardOriginal => self.discard_original(),
        }
        Ok(Event::None)
    }

    fn handle_canvas_message(&mut self, message: CanvasMessage) {
        if self.is_loading() {
            return;
        }
        match message {
            CanvasMessage::PointerDown(sample) => self.pointer_down(&sample),
            CanvasMessage::PointerMove(sample) => self.pointer_move(&sample),
            CanvasMessage::PointerUp(sample) => self.pointer_up(&sample),
            CanvasMessage::PointerLeave => self.pointer_leave(),
        }
    }

    fn tick(&mut self, now: Instant) {
        if let Some(notice) = self.error.as_mut() {
            notice.stamp(now);
            if notice.is_expired(now) {
                log::debug!("Transient error expired");
                self.error = None;
            }
        }
        if let Some(display) = self.reflow.poll(now) {
            log::debug!("Applying settled viewport {display:?}");
            // Gestures and selections were laid out against the old geometry.
            self.pointer_leave();
            if let Some(overlay) = self.crop.as_mut() {
                overlay.selector.cancel();
            }
            self.display = Some(display);
        }
    }
}
