// SPDX-License-Identifier: MPL-2.0
//! Editor message/event types re-exported by the facade.

use crate::application::port::generation::GenerationRequest;
use crate::domain::editing::{ExpandDirection, PlacementField};
use crate::domain::geometry::Rect;
use crate::domain::media::RasterImage;
use crate::editor::Tool;
use crate::error::Error;
use crate::media::PointerSample;
use std::time::Instant;

/// Workflow navigation, text entry and submission.
#[derive(Debug, Clone)]
pub enum SessionMessage {
    /// Leave `Home` to wait for a base image.
    BeginUpload,
    /// A decoded (or rejected) base image upload.
    BaseImageLoaded(Result<RasterImage, Error>),
    SelectTool(Tool),
    ChangeTool,
    StartOver,
    PromptChanged(String),
    /// Optional extra context for Magic Fill.
    ContextChanged(String),
    GenerateFromText,
    Submit,
    EditAgain,
    ContinueEditing,
    Download,
    DismissError,
}

/// Controls of the active tool.
#[derive(Debug, Clone)]
pub enum ToolMessage {
    BrushSizeChanged(f32),
    ClearMask,
    ConfirmMask,
    /// Return from prompt entry to mask drawing or placement.
    BackToMask,
    ChooseInsertObject,
    InsertObjectLoaded(Result<RasterImage, Error>),
    PlacementChanged(PlacementField, f32),
    ConfirmPlacement,
    Expand(ExpandDirection),
    UndoExpansion,
    OpenCrop,
    SaveCrop,
    CancelCrop,
    RestoreOriginal,
    DiscardOriginal,
}

/// Pointer input over the displayed image, in viewport coordinates.
#[derive(Debug, Clone)]
pub enum CanvasMessage {
    PointerDown(PointerSample),
    PointerMove(PointerSample),
    PointerUp(PointerSample),
    PointerLeave,
}

/// Messages handled by [`State::update`](crate::editor::State::update).
#[derive(Debug, Clone)]
pub enum Message {
    Session(SessionMessage),
    Tool(ToolMessage),
    Canvas(CanvasMessage),
    /// Outcome of the request emitted with [`Event::GenerationRequested`].
    GenerationFinished(Result<RasterImage, Error>),
    /// The displayed image's on-screen rectangle changed at the given host time.
    ViewportResized(Rect, Instant),
    /// Periodic clock, drives notice expiry and resize coalescing.
    Tick(Instant),
}

impl Message {
    /// Whether success of this message clears the visible error.
    ///
    /// Clock ticks, pointer moves and background completions never do.
    #[must_use]
    pub fn is_user_action(&self) -> bool {
        match self {
            Message::Session(_) | Message::Tool(_) => true,
            Message::Canvas(message) => matches!(
                message,
                CanvasMessage::PointerDown(_) | CanvasMessage::PointerUp(_)
            ),
            Message::GenerationFinished(_) | Message::ViewportResized(..) | Message::Tick(_) => {
                false
            }
        }
    }
}

/// Which file picker the host should open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadTarget {
    BaseImage,
    InsertObject,
}

/// Work the host must perform on the editor's behalf.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    UploadRequested(UploadTarget),
    /// Run this request and reply with [`Message::GenerationFinished`].
    GenerationRequested(GenerationRequest),
    DownloadRequested {
        file_name: String,
        bytes: Vec<u8>,
        mime_type: &'static str,
    },
}
