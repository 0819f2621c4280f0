// SPDX-License-Identifier: MPL-2.0
//! Edit session state machine.
//!
//! This module follows a "state down, messages up" pattern: the host feeds
//! [`Message`]s into [`State::update`] and performs whatever [`Event`] comes
//! back (open a file picker, run a generation request, save a download).
//! Every transition is a plain method on [`State`], so the whole workflow is
//! testable without a UI or a backend.
//!
//! ```text
//! Home -> AwaitingUpload -> ToolSelection -> Editing(step) | Expanding
//!                                         -> Loading -> Result
//! ```

use crate::config::EditorSettings;
use crate::domain::editing::{BrushSize, ExpansionState, PlacementTransform};
use crate::domain::geometry::{Point, Rect};
use crate::domain::media::{BinaryMask, RasterImage};
use crate::media::{placement, CoordinateMapper, CropSelector, MaskCanvas};

pub mod drag;
mod messages;
pub mod notice;
pub mod reflow;
mod state;

#[cfg(test)]
mod tests;

pub use drag::{DragKind, DragSession};
pub use messages::{CanvasMessage, Event, Message, SessionMessage, ToolMessage, UploadTarget};
pub use notice::ErrorNotice;
pub use reflow::ReflowDebouncer;

/// The three editing tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    /// Inpainting inside a brushed mask.
    MagicFill,
    /// Compositing an uploaded object.
    Insert,
    /// Outpainting around the image.
    Expand,
}

/// Sub-phases of [`Phase::Editing`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditStep {
    SelectingMask,
    ConfiguringPlacement,
    PromptAndSubmit,
}

/// Workflow phase of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Home,
    AwaitingUpload,
    ToolSelection,
    Editing(EditStep),
    Expanding,
    Loading,
    Result,
}

/// The modal crop overlay; the editing step underneath is suspended.
#[derive(Debug, Clone, PartialEq)]
pub struct CropOverlay {
    suspended: EditStep,
    selector: CropSelector,
}

impl CropOverlay {
    #[must_use]
    pub fn suspended_step(&self) -> EditStep {
        self.suspended
    }

    #[must_use]
    pub fn selection(&self) -> Option<Rect> {
        self.selector.selection()
    }
}

/// Local state for one editing session.
#[derive(Clone)]
pub struct State {
    settings: EditorSettings,
    phase: Phase,
    /// Image every tool works on.
    base_image: Option<RasterImage>,
    /// Pre-crop image kept for "restore original".
    original_image: Option<RasterImage>,
    tool: Option<Tool>,
    prompt: String,
    context: String,
    brush_size: BrushSize,
    mask: Option<MaskCanvas>,
    /// Mask frozen by "confirm", sent on submit.
    finalized_mask: Option<BinaryMask>,
    insert_object: Option<RasterImage>,
    placement: PlacementTransform,
    placement_confirmed: bool,
    expansion: Option<ExpansionState>,
    crop: Option<CropOverlay>,
    result: Option<RasterImage>,
    /// Phase restored if the in-flight request fails.
    resume_phase: Option<Phase>,
    error: Option<ErrorNotice>,
    /// On-screen rectangle of the displayed image.
    display: Option<Rect>,
    reflow: ReflowDebouncer<Rect>,
    drag: DragSession,
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("phase", &self.phase)
            .field("tool", &self.tool)
            .field(
                "base_image",
                &self.base_image.as_ref().map(RasterImage::dimensions),
            )
            .field("has_original", &self.original_image.is_some())
            .field("placement", &self.placement)
            .field("expansion", &self.expansion)
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(EditorSettings::default())
    }
}

impl State {
    #[must_use]
    pub fn new(settings: EditorSettings) -> Self {
        Self {
            phase: Phase::Home,
            base_image: None,
            original_image: None,
            tool: None,
            prompt: String::new(),
            context: String::new(),
            brush_size: settings.brush_size,
            mask: None,
            finalized_mask: None,
            insert_object: None,
            placement: PlacementTransform::default(),
            placement_confirmed: false,
            expansion: None,
            crop: None,
            result: None,
            resume_phase: None,
            error: None,
            display: None,
            reflow: ReflowDebouncer::new(settings.reflow_quiet),
            drag: DragSession::default(),
            settings,
        }
    }

    /// Update the state and emit an [`Event`] for the host when needed.
    ///
    /// A failed transition leaves the state unchanged apart from the error slot.
    pub fn update(&mut self, message: Message) -> Event {
        let clears_error = message.is_user_action();
        match self.route(message) {
            Ok(event) => {
                if clears_error {
                    self.error = None;
                }
                event
            }
            Err(err) => {
                self.report(err);
                Event::None
            }
        }
    }

    #[must_use]
    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn tool(&self) -> Option<Tool> {
        self.tool
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    #[must_use]
    pub fn base_image(&self) -> Option<&RasterImage> {
        self.base_image.as_ref()
    }

    /// The pre-crop image, while "restore original" is available.
    #[must_use]
    pub fn original_image(&self) -> Option<&RasterImage> {
        self.original_image.as_ref()
    }

    #[must_use]
    pub fn can_restore_original(&self) -> bool {
        self.original_image.is_some()
    }

    #[must_use]
    pub fn result(&self) -> Option<&RasterImage> {
        self.result.as_ref()
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn context(&self) -> &str {
        &self.context
    }

    #[must_use]
    pub fn brush_size(&self) -> BrushSize {
        self.brush_size
    }

    /// Translucent brush strokes, for drawing over the base image.
    #[must_use]
    pub fn mask_overlay(&self) -> Option<RasterImage> {
        self.mask.as_ref().map(MaskCanvas::overlay)
    }

    #[must_use]
    pub fn finalized_mask(&self) -> Option<&BinaryMask> {
        self.finalized_mask.as_ref()
    }

    #[must_use]
    pub fn insert_object(&self) -> Option<&RasterImage> {
        self.insert_object.as_ref()
    }

    #[must_use]
    pub fn placement(&self) -> PlacementTransform {
        self.placement
    }

    #[must_use]
    pub fn is_placement_confirmed(&self) -> bool {
        self.placement_confirmed
    }

    /// Corners of the placed object in base-image pixels.
    #[must_use]
    pub fn placement_corners(&self) -> Option<[Point; 4]> {
        let base = self.base_image.as_ref()?;
        let object = self.insert_object.as_ref()?;
        Some(placement::placement_corners(
            &self.placement,
            base.dimensions(),
            object.dimensions(),
        ))
    }

    #[must_use]
    pub fn expansion(&self) -> Option<&ExpansionState> {
        self.expansion.as_ref()
    }

    /// Size of the canvas the current expansion would produce.
    #[must_use]
    pub fn expanded_size(&self) -> Option<(u32, u32)> {
        let base = self.base_image.as_ref()?;
        let expansion = self.expansion.as_ref()?;
        Some(
            expansion
                .steps()
                .expanded_size(base.width(), base.height(), expansion.step_px()),
        )
    }

    #[must_use]
    pub fn crop_overlay(&self) -> Option<&CropOverlay> {
        self.crop.as_ref()
    }

    #[must_use]
    pub fn error(&self) -> Option<&ErrorNotice> {
        self.error.as_ref()
    }

    #[must_use]
    pub fn display_rect(&self) -> Option<Rect> {
        self.display
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    /// Mapper from viewport to base-image pixels.
    ///
    /// Without a known display rectangle, display and native pixels coincide.
    #[must_use]
    pub fn coordinate_mapper(&self) -> Option<CoordinateMapper> {
        let base = self.base_image.as_ref()?;
        let (width, height) = base.dimensions();
        Some(match self.display {
            Some(display) => CoordinateMapper::new(display, width, height),
            None => CoordinateMapper::identity(width, height),
        })
    }
}
