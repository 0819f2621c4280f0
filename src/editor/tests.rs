// SPDX-License-Identifier: MPL-2.0
use super::*;
use crate::application::port::generation::{BackendError, GenerationRequest};
use crate::domain::editing::{ExpandDirection, PlacementField};
use crate::domain::media::ImageEncoding;
use crate::error::{Error, ValidationError};
use crate::media::PointerSample;
use std::time::{Duration, Instant};

fn image(width: u32, height: u32) -> RasterImage {
    RasterImage::filled(width, height, [90, 140, 200, 255], ImageEncoding::Png)
        .with_file_name("photo.png")
}

fn mouse(x: f32, y: f32) -> PointerSample {
    PointerSample::Mouse(Point::new(x, y))
}

fn session(msg: SessionMessage) -> Message {
    Message::Session(msg)
}

fn tool(msg: ToolMessage) -> Message {
    Message::Tool(msg)
}

fn canvas(msg: CanvasMessage) -> Message {
    Message::Canvas(msg)
}

/// A session with an 800x600 base image at tool selection.
fn loaded() -> State {
    let mut state = State::default();
    assert_eq!(
        state.update(session(SessionMessage::BeginUpload)),
        Event::UploadRequested(UploadTarget::BaseImage)
    );
    state.update(session(SessionMessage::BaseImageLoaded(Ok(image(800, 600)))));
    assert_eq!(state.phase(), Phase::ToolSelection);
    state
}

fn stroke(state: &mut State, from: Point, to: Point) {
    state.update(canvas(CanvasMessage::PointerDown(PointerSample::Mouse(from))));
    state.update(canvas(CanvasMessage::PointerMove(PointerSample::Mouse(to))));
    state.update(canvas(CanvasMessage::PointerUp(PointerSample::Mouse(to))));
}

fn magic_fill_ready() -> State {
    let mut state = loaded();
    state.update(session(SessionMessage::SelectTool(Tool::MagicFill)));
    stroke(&mut state, Point::new(100.0, 100.0), Point::new(200.0, 150.0));
    state.update(tool(ToolMessage::ConfirmMask));
    assert_eq!(state.phase(), Phase::Editing(EditStep::PromptAndSubmit));
    state
}

fn error_of(state: &State) -> Option<Error> {
    state.error().map(|notice| notice.error().clone())
}

#[test]
fn starts_at_home() {
    let state = State::default();
    assert_eq!(state.phase(), Phase::Home);
    assert!(state.base_image().is_none());
    assert!(state.error().is_none());
}

#[test]
fn rejected_upload_stays_and_shows_error() {
    let mut state = State::default();
    state.update(session(SessionMessage::BeginUpload));
    let rejected = Error::from(ValidationError::UnsupportedFileType {
        mime_type: "application/pdf".into(),
    });
    state.update(session(SessionMessage::BaseImageLoaded(Err(rejected.clone()))));

    assert_eq!(state.phase(), Phase::AwaitingUpload);
    assert_eq!(error_of(&state), Some(rejected));

    state.update(session(SessionMessage::BaseImageLoaded(Ok(image(10, 10)))));
    assert_eq!(state.phase(), Phase::ToolSelection);
    assert!(state.error().is_none());
}

#[test]
fn blank_mask_cannot_be_confirmed() {
    let mut state = loaded();
    state.update(session(SessionMessage::SelectTool(Tool::MagicFill)));
    state.update(tool(ToolMessage::ConfirmMask));

    assert_eq!(state.phase(), Phase::Editing(EditStep::SelectingMask));
    assert_eq!(
        error_of(&state),
        Some(Error::Validation(ValidationError::EmptyMask))
    );
}

#[test]
fn tap_is_enough_for_a_mask() {
    let mut state = loaded();
    state.update(session(SessionMessage::SelectTool(Tool::MagicFill)));
    state.update(canvas(CanvasMessage::PointerDown(mouse(300.0, 200.0))));
    state.update(canvas(CanvasMessage::PointerUp(PointerSample::Touch(Vec::new()))));
    state.update(tool(ToolMessage::ConfirmMask));

    let mask = state.finalized_mask().expect("mask confirmed");
    assert!(mask.is_selected(300, 200));
    assert!(!state.is_dragging());
}

#[test]
fn magic_fill_needs_prompt() {
    let mut state = magic_fill_ready();
    assert_eq!(state.update(session(SessionMessage::Submit)), Event::None);
    assert_eq!(state.phase(), Phase::Editing(EditStep::PromptAndSubmit));
    assert_eq!(
        error_of(&state),
        Some(Error::Validation(ValidationError::MissingPrompt))
    );

    state.update(session(SessionMessage::PromptChanged("   ".into())));
    state.update(session(SessionMessage::Submit));
    assert_eq!(state.phase(), Phase::Editing(EditStep::PromptAndSubmit));
}

#[test]
fn magic_fill_submits_edit_region() {
    let mut state = magic_fill_ready();
    state.update(session(SessionMessage::PromptChanged("remove the object".into())));
    state.update(session(SessionMessage::ContextChanged("a beach".into())));

    let event = state.update(session(SessionMessage::Submit));
    let Event::GenerationRequested(GenerationRequest::EditRegion {
        prompt,
        base,
        mask,
        context,
    }) = event
    else {
        panic!("expected an edit request, got {event:?}");
    };
    assert_eq!(prompt, "remove the object");
    assert_eq!(base.mime_type, "image/png");
    assert_eq!(mask.mime_type, "image/png");
    assert_eq!(context.as_deref(), Some("a beach"));
    assert!(state.is_loading());
}

#[test]
fn second_submit_while_loading_is_ignored() {
    let mut state = magic_fill_ready();
    state.update(session(SessionMessage::PromptChanged("fill".into())));
    assert!(matches!(
        state.update(session(SessionMessage::Submit)),
        Event::GenerationRequested(_)
    ));
    assert_eq!(state.update(session(SessionMessage::Submit)), Event::None);
    assert!(state.is_loading());
}

#[test]
fn backend_failure_returns_to_pre_submission_phase() {
    let mut state = magic_fill_ready();
    state.update(session(SessionMessage::PromptChanged("fill".into())));
    state.update(session(SessionMessage::Submit));

    let failure = Error::Backend(BackendError::NoImageProduced);
    state.update(Message::GenerationFinished(Err(failure.clone())));

    assert_eq!(state.phase(), Phase::Editing(EditStep::PromptAndSubmit));
    assert_eq!(state.prompt(), "fill");
    assert!(state.finalized_mask().is_some());
    assert_eq!(error_of(&state), Some(failure));

    // Retry is a plain resubmission.
    assert!(matches!(
        state.update(session(SessionMessage::Submit)),
        Event::GenerationRequested(_)
    ));
    assert!(state.error().is_none());
}

#[test]
fn late_outcome_outside_loading_is_dropped() {
    let mut state = loaded();
    state.update(Message::GenerationFinished(Ok(image(5, 5))));
    assert_eq!(state.phase(), Phase::ToolSelection);
    assert!(state.result().is_none());
}

#[test]
fn continue_editing_promotes_result() {
    let mut state = magic_fill_ready();
    state.update(session(SessionMessage::PromptChanged("fill".into())));
    state.update(session(SessionMessage::Submit));
    state.update(Message::GenerationFinished(Ok(RasterImage::filled(
        640,
        480,
        [1, 2, 3, 255],
        ImageEncoding::Jpeg,
    ))));
    assert_eq!(state.phase(), Phase::Result);
    assert_eq!(
        state.result().and_then(RasterImage::file_name),
        Some("photo.png")
    );

    state.update(session(SessionMessage::ContinueEditing));
    assert_eq!(state.phase(), Phase::ToolSelection);
    assert_eq!(
        state.base_image().map(RasterImage::dimensions),
        Some((640, 480))
    );
    assert!(state.result().is_none());
    assert!(state.finalized_mask().is_none());
    assert_eq!(state.prompt(), "");
    assert!(!state.can_restore_original());
}

#[test]
fn edit_again_keeps_base_image() {
    let mut state = magic_fill_ready();
    state.update(session(SessionMessage::PromptChanged("fill".into())));
    state.update(session(SessionMessage::Submit));
    state.update(Message::GenerationFinished(Ok(image(10, 10))));

    state.update(session(SessionMessage::EditAgain));
    assert_eq!(state.phase(), Phase::ToolSelection);
    assert_eq!(
        state.base_image().map(RasterImage::dimensions),
        Some((800, 600))
    );
    assert!(state.result().is_none());
}

#[test]
fn download_names_result_after_original() {
    let mut state = magic_fill_ready();
    state.update(session(SessionMessage::PromptChanged("fill".into())));
    state.update(session(SessionMessage::Submit));
    state.update(Message::GenerationFinished(Ok(RasterImage::filled(
        4,
        4,
        [0, 0, 0, 255],
        ImageEncoding::Jpeg,
    ))));

    let Event::DownloadRequested {
        file_name,
        bytes,
        mime_type,
    } = state.update(session(SessionMessage::Download))
    else {
        panic!("expected a download");
    };
    assert_eq!(file_name, "photo-edited.jpg");
    assert_eq!(mime_type, "image/jpeg");
    assert!(!bytes.is_empty());
}

#[test]
fn change_tool_clears_tool_data_but_keeps_crop_history() {
    let mut state = loaded();
    state.update(session(SessionMessage::SelectTool(Tool::MagicFill)));
    state.update(tool(ToolMessage::OpenCrop));
    stroke(&mut state, Point::new(0.0, 0.0), Point::new(400.0, 300.0));
    state.update(tool(ToolMessage::SaveCrop));
    state.update(session(SessionMessage::PromptChanged("something".into())));

    state.update(session(SessionMessage::ChangeTool));

    assert_eq!(state.phase(), Phase::ToolSelection);
    assert_eq!(state.tool(), None);
    assert_eq!(state.prompt(), "");
    assert!(state.mask_overlay().is_none());
    assert_eq!(
        state.base_image().map(RasterImage::dimensions),
        Some((400, 300))
    );
    assert!(state.can_restore_original());
}

#[test]
fn crop_save_and_restore() {
    let mut state = loaded();
    state.update(session(SessionMessage::SelectTool(Tool::MagicFill)));
    // Displayed at half size, offset in the viewport.
    let start = Instant::now();
    state.update(Message::ViewportResized(Rect::new(50.0, 20.0, 400.0, 300.0), start));
    state.update(Message::Tick(start + Duration::from_secs(1)));

    state.update(tool(ToolMessage::OpenCrop));
    assert!(state.crop_overlay().is_some());
    stroke(&mut state, Point::new(60.0, 30.0), Point::new(160.0, 80.0));
    assert_eq!(
        state.crop_overlay().and_then(CropOverlay::selection),
        Some(Rect::new(10.0, 10.0, 100.0, 50.0))
    );

    state.update(tool(ToolMessage::SaveCrop));
    assert!(state.crop_overlay().is_none());
    assert_eq!(state.phase(), Phase::Editing(EditStep::SelectingMask));
    assert_eq!(
        state.base_image().map(RasterImage::dimensions),
        Some((200, 100))
    );
    assert_eq!(
        state.mask_overlay().map(|overlay| overlay.dimensions()),
        Some((200, 100))
    );
    assert_eq!(
        state.original_image().map(RasterImage::dimensions),
        Some((800, 600))
    );

    state.update(tool(ToolMessage::RestoreOriginal));
    assert_eq!(
        state.base_image().map(RasterImage::dimensions),
        Some((800, 600))
    );
    assert!(!state.can_restore_original());
}

#[test]
fn crop_dragged_past_edge_keeps_visible_part() {
    let mut state = loaded();
    state.update(session(SessionMessage::SelectTool(Tool::MagicFill)));
    state.update(tool(ToolMessage::OpenCrop));
    stroke(&mut state, Point::new(100.0, 100.0), Point::new(-50.0, -50.0));
    state.update(tool(ToolMessage::SaveCrop));

    assert!(state.error().is_none());
    assert_eq!(
        state.base_image().map(RasterImage::dimensions),
        Some((100, 100))
    );
}

#[test]
fn settled_resize_drops_crop_selection() {
    let mut state = loaded();
    state.update(session(SessionMessage::SelectTool(Tool::MagicFill)));
    let start = Instant::now();
    state.update(Message::ViewportResized(Rect::new(0.0, 0.0, 400.0, 300.0), start));
    state.update(Message::Tick(start + Duration::from_secs(1)));

    state.update(tool(ToolMessage::OpenCrop));
    stroke(&mut state, Point::new(0.0, 0.0), Point::new(200.0, 150.0));
    assert!(state.crop_overlay().and_then(CropOverlay::selection).is_some());

    state.update(Message::ViewportResized(
        Rect::new(0.0, 0.0, 800.0, 600.0),
        start + Duration::from_secs(2),
    ));
    state.update(Message::Tick(start + Duration::from_secs(3)));
    assert!(state.crop_overlay().is_some());
    assert_eq!(state.crop_overlay().and_then(CropOverlay::selection), None);

    state.update(tool(ToolMessage::SaveCrop));
    assert_eq!(
        error_of(&state),
        Some(Error::Validation(ValidationError::NoCropSelection))
    );
    assert_eq!(
        state.base_image().map(RasterImage::dimensions),
        Some((800, 600))
    );

    // A selection drawn in the new layout maps at the new scale.
    stroke(&mut state, Point::new(0.0, 0.0), Point::new(400.0, 300.0));
    state.update(tool(ToolMessage::SaveCrop));
    assert_eq!(
        state.base_image().map(RasterImage::dimensions),
        Some((400, 300))
    );
}

#[test]
fn accidental_crop_tap_saves_nothing() {
    let mut state = loaded();
    state.update(session(SessionMessage::SelectTool(Tool::MagicFill)));
    state.update(tool(ToolMessage::OpenCrop));
    stroke(&mut state, Point::new(10.0, 10.0), Point::new(12.0, 40.0));
    state.update(tool(ToolMessage::SaveCrop));

    assert_eq!(
        error_of(&state),
        Some(Error::Validation(ValidationError::NoCropSelection))
    );
    assert!(state.crop_overlay().is_some());
    assert_eq!(
        state.base_image().map(RasterImage::dimensions),
        Some((800, 600))
    );
}

#[test]
fn cancel_crop_resumes_suspended_step() {
    let mut state = magic_fill_ready();
    state.update(tool(ToolMessage::OpenCrop));
    assert_eq!(
        state.crop_overlay().map(CropOverlay::suspended_step),
        Some(EditStep::PromptAndSubmit)
    );
    state.update(tool(ToolMessage::CancelCrop));
    assert_eq!(state.phase(), Phase::Editing(EditStep::PromptAndSubmit));
    assert!(state.finalized_mask().is_some());
}

#[test]
fn discard_original_drops_restore_option() {
    let mut state = loaded();
    state.update(session(SessionMessage::SelectTool(Tool::MagicFill)));
    state.update(tool(ToolMessage::OpenCrop));
    stroke(&mut state, Point::new(0.0, 0.0), Point::new(100.0, 100.0));
    state.update(tool(ToolMessage::SaveCrop));
    assert!(state.can_restore_original());

    state.update(tool(ToolMessage::DiscardOriginal));
    assert!(!state.can_restore_original());
}

#[test]
fn insert_requires_object_and_confirmation() {
    let mut state = loaded();
    assert_eq!(
        state.update(session(SessionMessage::SelectTool(Tool::Insert))),
        Event::UploadRequested(UploadTarget::InsertObject)
    );
    assert_eq!(state.phase(), Phase::Editing(EditStep::ConfiguringPlacement));

    state.update(tool(ToolMessage::ConfirmPlacement));
    assert_eq!(
        error_of(&state),
        Some(Error::Validation(ValidationError::MissingInsertObject))
    );

    state.update(tool(ToolMessage::InsertObjectLoaded(Ok(image(50, 50)))));
    assert_eq!(state.placement(), PlacementTransform::default());
    state.update(tool(ToolMessage::ConfirmPlacement));
    assert_eq!(state.phase(), Phase::Editing(EditStep::PromptAndSubmit));

    // No prompt needed.
    let event = state.update(session(SessionMessage::Submit));
    assert!(matches!(
        event,
        Event::GenerationRequested(GenerationRequest::CompositeBlend { .. })
    ));
}

#[test]
fn dragging_moves_only_the_position() {
    let mut state = loaded();
    state.update(session(SessionMessage::SelectTool(Tool::Insert)));
    state.update(tool(ToolMessage::InsertObjectLoaded(Ok(image(50, 50)))));
    state.update(tool(ToolMessage::PlacementChanged(
        PlacementField::Rotation,
        30.0,
    )));
    let before = state.placement();

    stroke(&mut state, Point::new(400.0, 300.0), Point::new(480.0, 240.0));
    let after = state.placement();

    assert_eq!(after.position_x.value(), 60.0);
    assert_eq!(after.position_y.value(), 40.0);
    assert_eq!(after.rotation, before.rotation);
    assert_eq!(after.scale, before.scale);
    assert!(state.placement_corners().is_some());

    // Dragging far off the canvas clamps at the edge.
    stroke(&mut state, Point::new(0.0, 0.0), Point::new(5000.0, -5000.0));
    assert_eq!(state.placement().position_x.value(), 100.0);
    assert_eq!(state.placement().position_y.value(), 0.0);
}

#[test]
fn new_object_resets_placement() {
    let mut state = loaded();
    state.update(session(SessionMessage::SelectTool(Tool::Insert)));
    state.update(tool(ToolMessage::InsertObjectLoaded(Ok(image(50, 50)))));
    state.update(tool(ToolMessage::PlacementChanged(PlacementField::Scale, 150.0)));
    state.update(tool(ToolMessage::InsertObjectLoaded(Ok(image(20, 20)))));
    assert_eq!(state.placement(), PlacementTransform::default());
}

#[test]
fn back_to_mask_unconfirms_placement() {
    let mut state = loaded();
    state.update(session(SessionMessage::SelectTool(Tool::Insert)));
    state.update(tool(ToolMessage::InsertObjectLoaded(Ok(image(50, 50)))));
    state.update(tool(ToolMessage::ConfirmPlacement));
    state.update(tool(ToolMessage::BackToMask));

    assert_eq!(state.phase(), Phase::Editing(EditStep::ConfiguringPlacement));
    assert!(!state.is_placement_confirmed());
}

#[test]
fn expansion_step_is_fixed_on_entry() {
    let mut state = loaded();
    state.update(session(SessionMessage::SelectTool(Tool::Expand)));
    assert_eq!(state.phase(), Phase::Expanding);
    assert_eq!(state.expansion().map(ExpansionState::step_px), Some(150));

    for _ in 0..3 {
        state.update(tool(ToolMessage::Expand(ExpandDirection::Right)));
    }
    assert_eq!(state.expanded_size(), Some((1250, 600)));

    state.update(tool(ToolMessage::UndoExpansion));
    assert_eq!(state.expanded_size(), Some((1100, 600)));
}

#[test]
fn expansion_submit_needs_steps_and_prompt() {
    let mut state = loaded();
    state.update(session(SessionMessage::SelectTool(Tool::Expand)));
    state.update(session(SessionMessage::PromptChanged("more sky".into())));
    state.update(session(SessionMessage::Submit));
    assert_eq!(
        error_of(&state),
        Some(Error::Validation(ValidationError::NoExpansion))
    );

    state.update(tool(ToolMessage::Expand(ExpandDirection::Top)));
    state.update(session(SessionMessage::PromptChanged(String::new())));
    state.update(session(SessionMessage::Submit));
    assert_eq!(
        error_of(&state),
        Some(Error::Validation(ValidationError::MissingPrompt))
    );

    state.update(session(SessionMessage::PromptChanged("more sky".into())));
    assert!(matches!(
        state.update(session(SessionMessage::Submit)),
        Event::GenerationRequested(GenerationRequest::Outpaint { .. })
    ));
}

#[test]
fn expansion_limit_message_expires() {
    let mut state = loaded();
    state.update(session(SessionMessage::SelectTool(Tool::Expand)));
    for _ in 0..6 {
        state.update(tool(ToolMessage::Expand(ExpandDirection::Left)));
    }
    let before = state.expansion().map(ExpansionState::steps);

    state.update(tool(ToolMessage::Expand(ExpandDirection::Bottom)));
    assert_eq!(state.expansion().map(ExpansionState::steps), before);
    let notice = state.error().expect("limit notice").clone();
    assert!(notice.is_transient());

    // The timeout runs from the first tick that shows the notice.
    let shown = Instant::now();
    state.update(Message::Tick(shown));
    state.update(Message::Tick(shown + Duration::from_secs(1)));
    assert!(state.error().is_some());
    state.update(Message::Tick(shown + Duration::from_secs(4)));
    assert!(state.error().is_none());
}

#[test]
fn persistent_errors_survive_ticks_until_next_action() {
    let mut state = magic_fill_ready();
    state.update(session(SessionMessage::Submit));
    state.update(Message::Tick(Instant::now() + Duration::from_secs(60)));
    assert!(state.error().is_some());

    state.update(session(SessionMessage::PromptChanged("x".into())));
    assert!(state.error().is_none());
}

#[test]
fn viewport_changes_are_coalesced() {
    let mut state = loaded();
    let start = Instant::now();
    state.update(Message::ViewportResized(Rect::new(0.0, 0.0, 100.0, 75.0), start));
    state.update(Message::ViewportResized(
        Rect::new(0.0, 0.0, 400.0, 300.0),
        start + Duration::from_millis(40),
    ));
    state.update(Message::Tick(start + Duration::from_millis(100)));
    assert_eq!(state.display_rect(), None);

    state.update(Message::Tick(start + Duration::from_secs(1)));
    assert_eq!(state.display_rect(), Some(Rect::new(0.0, 0.0, 400.0, 300.0)));
    assert_eq!(
        state.coordinate_mapper().map(|mapper| mapper.scale()),
        Some((2.0, 2.0))
    );
}

#[test]
fn pointer_leave_releases_drag() {
    let mut state = loaded();
    state.update(session(SessionMessage::SelectTool(Tool::MagicFill)));
    state.update(canvas(CanvasMessage::PointerDown(mouse(10.0, 10.0))));
    assert!(state.is_dragging());

    state.update(canvas(CanvasMessage::PointerLeave));
    assert!(!state.is_dragging());

    // Moves without a held drag paint nothing new.
    let before = state.mask_overlay();
    state.update(canvas(CanvasMessage::PointerMove(mouse(700.0, 500.0))));
    assert_eq!(state.mask_overlay(), before);
}

#[test]
fn clear_mask_erases_strokes() {
    let mut state = loaded();
    state.update(session(SessionMessage::SelectTool(Tool::MagicFill)));
    stroke(&mut state, Point::new(10.0, 10.0), Point::new(50.0, 50.0));
    state.update(tool(ToolMessage::ClearMask));
    state.update(tool(ToolMessage::ConfirmMask));
    assert_eq!(
        error_of(&state),
        Some(Error::Validation(ValidationError::EmptyMask))
    );
}

#[test]
fn start_over_resets_everything() {
    let mut state = magic_fill_ready();
    state.update(session(SessionMessage::StartOver));
    assert_eq!(state.phase(), Phase::Home);
    assert!(state.base_image().is_none());
    assert!(state.finalized_mask().is_none());
}

#[test]
fn start_over_waits_for_in_flight_request() {
    let mut state = magic_fill_ready();
    state.update(session(SessionMessage::PromptChanged("fill".into())));
    state.update(session(SessionMessage::Submit));
    state.update(session(SessionMessage::StartOver));
    assert!(state.is_loading());
}

#[test]
fn generate_from_text_success_becomes_base() {
    let mut state = State::default();
    state.update(session(SessionMessage::PromptChanged("a red fox".into())));
    let event = state.update(session(SessionMessage::GenerateFromText));
    assert_eq!(
        event,
        Event::GenerationRequested(GenerationRequest::GenerateFromText {
            prompt: "a red fox".into()
        })
    );

    state.update(Message::GenerationFinished(Ok(RasterImage::filled(
        64,
        64,
        [0, 0, 0, 255],
        ImageEncoding::Png,
    ))));
    assert_eq!(state.phase(), Phase::ToolSelection);
    assert_eq!(state.base_image().and_then(RasterImage::file_name), None);
}

#[test]
fn generate_from_text_failure_stays_home() {
    let mut state = State::default();
    state.update(session(SessionMessage::PromptChanged("a red fox".into())));
    state.update(session(SessionMessage::GenerateFromText));
    state.update(Message::GenerationFinished(Err(Error::Backend(
        BackendError::Rejected("quota".into()),
    ))));

    assert_eq!(state.phase(), Phase::Home);
    assert_eq!(state.prompt(), "a red fox");
    assert!(state.error().is_some());
}
