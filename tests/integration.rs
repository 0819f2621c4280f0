// SPDX-License-Identifier: MPL-2.0
use magic_edit::application::generation;
use magic_edit::application::port::generation::{
    BackendError, GenerationBackend, GenerationRequest,
};
use magic_edit::config::{self, Config};
use magic_edit::domain::editing::{ExpandDirection, ExpansionState, ExpansionSteps, PlacementField};
use magic_edit::domain::geometry::{Point, Rect};
use magic_edit::domain::media::{ImageEncoding, RasterImage};
use magic_edit::editor::{
    CanvasMessage, EditStep, Event, Message, Phase, SessionMessage, State, Tool, ToolMessage,
};
use magic_edit::error::{Error, ValidationError};
use magic_edit::media::{codec, expansion, PointerSample};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tempfile::tempdir;

/// Records every call and answers with a fixed image.
struct MockBackend {
    calls: Mutex<Vec<String>>,
    reply: Result<Vec<u8>, BackendError>,
}

impl MockBackend {
    fn answering(image: &RasterImage) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            reply: Ok(codec::encode(image, 90).expect("encode reply")),
        }
    }

    fn failing(err: BackendError) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            reply: Err(err),
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("lock").clone()
    }

    fn record(&self, call: &str) -> Result<Vec<u8>, BackendError> {
        self.calls.lock().expect("lock").push(call.to_string());
        self.reply.clone()
    }
}

impl GenerationBackend for MockBackend {
    fn edit_region(
        &self,
        _prompt: &str,
        _base: &[u8],
        _mask: &[u8],
        _base_mime_type: &str,
        _context: Option<&str>,
    ) -> Result<Vec<u8>, BackendError> {
        self.record("edit_region")
    }

    fn composite_blend(
        &self,
        _base: &[u8],
        _composite: &[u8],
        _placement_mask: &[u8],
        _base_mime_type: &str,
        _composite_mime_type: &str,
    ) -> Result<Vec<u8>, BackendError> {
        self.record("composite_blend")
    }

    fn outpaint(
        &self,
        _prompt: &str,
        _expanded_canvas: &[u8],
        _mime_type: &str,
    ) -> Result<Vec<u8>, BackendError> {
        self.record("outpaint")
    }

    fn generate_from_text(&self, _prompt: &str) -> Result<Vec<u8>, BackendError> {
        self.record("generate_from_text")
    }
}

fn base_image() -> RasterImage {
    RasterImage::filled(800, 600, [120, 160, 90, 255], ImageEncoding::Png).with_file_name("yard.png")
}

fn uploaded() -> State {
    let mut state = State::default();
    state.update(Message::Session(SessionMessage::BeginUpload));
    state.update(Message::Session(SessionMessage::BaseImageLoaded(Ok(
        base_image(),
    ))));
    state
}

fn pointer(kind: fn(PointerSample) -> CanvasMessage, x: f32, y: f32) -> Message {
    Message::Canvas(kind(PointerSample::Mouse(Point::new(x, y))))
}

/// White-pixel bounding box of an encoded mask.
fn white_bounds(bytes: &[u8]) -> Option<(u32, u32, u32, u32)> {
    let mask = codec::decode(bytes).expect("decode mask");
    let mut bounds: Option<(u32, u32, u32, u32)> = None;
    for y in 0..mask.height() {
        for x in 0..mask.width() {
            let [r, g, b, a] = mask.pixel(x, y).expect("pixel");
            assert!(
                (r, g, b, a) == (255, 255, 255, 255) || (r, g, b, a) == (0, 0, 0, 255),
                "mask is not strictly two-level at ({x}, {y})"
            );
            if r == 255 {
                bounds = Some(match bounds {
                    None => (x, y, x, y),
                    Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
                });
            }
        }
    }
    bounds
}

#[test]
fn scenario_a_magic_fill_mask_matches_stroke() {
    let mut state = uploaded();
    // Shown at half size.
    let start = Instant::now();
    state.update(Message::ViewportResized(Rect::new(0.0, 0.0, 400.0, 300.0), start));
    state.update(Message::Tick(start + Duration::from_secs(1)));
    state.update(Message::Session(SessionMessage::SelectTool(Tool::MagicFill)));
    state.update(Message::Tool(ToolMessage::BrushSizeChanged(5.0)));

    // Fill display (100,100)-(200,150) with rows of a 5 px brush.
    let mut y = 102.5;
    while y < 150.0 {
        state.update(pointer(CanvasMessage::PointerDown, 102.5, y));
        state.update(pointer(CanvasMessage::PointerMove, 150.0, y));
        state.update(pointer(CanvasMessage::PointerUp, 197.5, y));
        y += 5.0;
    }
    state.update(Message::Tool(ToolMessage::ConfirmMask));
    state.update(Message::Session(SessionMessage::PromptChanged(
        "remove the object".into(),
    )));

    let Event::GenerationRequested(request) =
        state.update(Message::Session(SessionMessage::Submit))
    else {
        panic!("submission was not accepted");
    };
    let GenerationRequest::EditRegion { prompt, mask, .. } = &request else {
        panic!("expected edit_region, got {}", request.kind());
    };
    assert_eq!(prompt, "remove the object");

    let (x0, y0, x1, y1) = white_bounds(&mask.bytes).expect("non-empty mask");
    let near = |actual: u32, expected: u32| actual.abs_diff(expected) <= 2;
    assert!(near(x0, 200) && near(y0, 200), "top-left was ({x0}, {y0})");
    assert!(near(x1, 399) && near(y1, 299), "bottom-right was ({x1}, {y1})");

    let backend = MockBackend::answering(&RasterImage::filled(
        800,
        600,
        [0, 0, 0, 255],
        ImageEncoding::Png,
    ));
    let outcome = generation::execute(&backend, &request);
    assert_eq!(backend.calls(), ["edit_region"]);
    state.update(Message::GenerationFinished(outcome));
    assert_eq!(state.phase(), Phase::Result);
}

#[test]
fn scenario_b_insert_placement_mask_is_centered_square() {
    let mut state = uploaded();
    state.update(Message::Session(SessionMessage::SelectTool(Tool::Insert)));
    let object = RasterImage::filled(50, 50, [255, 0, 0, 255], ImageEncoding::Png);
    state.update(Message::Tool(ToolMessage::InsertObjectLoaded(Ok(object))));
    for (field, value) in [
        (PlacementField::Scale, 100.0),
        (PlacementField::Rotation, 0.0),
        (PlacementField::TiltX, 0.0),
        (PlacementField::TiltY, 0.0),
        (PlacementField::Opacity, 100.0),
    ] {
        state.update(Message::Tool(ToolMessage::PlacementChanged(field, value)));
    }
    assert_eq!(state.placement().position_x.value(), 50.0);
    assert_eq!(state.placement().position_y.value(), 50.0);
    state.update(Message::Tool(ToolMessage::ConfirmPlacement));

    let Event::GenerationRequested(GenerationRequest::CompositeBlend {
        composite,
        placement_mask,
        ..
    }) = state.update(Message::Session(SessionMessage::Submit))
    else {
        panic!("expected composite_blend");
    };

    assert_eq!(white_bounds(&placement_mask.bytes), Some((375, 275, 424, 324)));
    let mask = codec::decode(&placement_mask.bytes).expect("decode");
    assert_eq!(mask.dimensions(), (800, 600));

    let composite = codec::decode(&composite.bytes).expect("decode");
    assert_eq!(composite.pixel(400, 300), Some([255, 0, 0, 255]));
    assert_eq!(composite.pixel(10, 10), Some([120, 160, 90, 255]));
}

#[test]
fn scenario_c_expansion_canvas_and_undo() {
    // Fixed 200 px step.
    let image = base_image();
    let mut expansion_state = ExpansionState::new(200, 6);
    for _ in 0..3 {
        expansion_state
            .expand(ExpandDirection::Right)
            .expect("within budget");
    }
    let canvas = expansion::build_expansion_canvas(&image, &expansion_state.steps(), 200)
        .expect("canvas");
    assert_eq!(canvas.dimensions(), (1400, 600));
    assert_eq!(canvas.pixel(0, 0), image.pixel(0, 0));
    assert_eq!(canvas.pixel(799, 599), image.pixel(799, 599));
    assert_eq!(canvas.pixel(800, 0), Some([0x80, 0x80, 0x80, 0xFF]));

    assert!(expansion_state.undo());
    let canvas = expansion::build_expansion_canvas(&image, &expansion_state.steps(), 200)
        .expect("canvas");
    assert_eq!(canvas.dimensions(), (1200, 600));

    // The 1400x600 figure above uses an explicit 200 px step; in a session
    // the step comes from the shorter side (600 / 4 = 150).
    let mut state = uploaded();
    state.update(Message::Session(SessionMessage::SelectTool(Tool::Expand)));
    for _ in 0..3 {
        state.update(Message::Tool(ToolMessage::Expand(ExpandDirection::Right)));
    }
    state.update(Message::Session(SessionMessage::PromptChanged(
        "continue the fence".into(),
    )));
    let Event::GenerationRequested(GenerationRequest::Outpaint { canvas, .. }) =
        state.update(Message::Session(SessionMessage::Submit))
    else {
        panic!("expected outpaint");
    };
    let sent = codec::decode(&canvas.bytes).expect("decode");
    assert_eq!(sent.dimensions(), (1250, 600));
    assert_eq!(canvas.mime_type, "image/png");
}

#[test]
fn scenario_d_seventh_expansion_click_is_rejected() {
    let mut state = uploaded();
    state.update(Message::Session(SessionMessage::SelectTool(Tool::Expand)));
    let directions = [
        ExpandDirection::Top,
        ExpandDirection::TopRight,
        ExpandDirection::Left,
        ExpandDirection::Bottom,
        ExpandDirection::BottomLeft,
        ExpandDirection::Right,
    ];
    for direction in directions {
        state.update(Message::Tool(ToolMessage::Expand(direction)));
    }
    let steps = state.expansion().expect("expanding").steps();
    assert_eq!(state.expansion().map(ExpansionState::clicks_used), Some(6));
    assert!(state.expansion().is_some_and(|e| !e.can_expand()));

    state.update(Message::Tool(ToolMessage::Expand(ExpandDirection::Top)));
    assert_eq!(state.expansion().map(ExpansionState::steps), Some(steps));
    let notice = state.error().expect("limit message");
    assert_eq!(
        notice.error(),
        &Error::Validation(ValidationError::ExpansionLimitReached { max_clicks: 6 })
    );

    let shown = Instant::now();
    state.update(Message::Tick(shown));
    assert!(state.error().is_some());
    state.update(Message::Tick(shown + Duration::from_secs(3)));
    assert!(state.error().is_none());
    assert_eq!(state.phase(), Phase::Expanding);
}

#[test]
fn backend_failure_keeps_user_input() {
    let mut state = uploaded();
    state.update(Message::Session(SessionMessage::SelectTool(Tool::Expand)));
    state.update(Message::Tool(ToolMessage::Expand(ExpandDirection::Bottom)));
    state.update(Message::Session(SessionMessage::PromptChanged("more grass".into())));
    let Event::GenerationRequested(request) =
        state.update(Message::Session(SessionMessage::Submit))
    else {
        panic!("expected a request");
    };

    let backend = MockBackend::failing(BackendError::Rejected("content policy".into()));
    state.update(Message::GenerationFinished(generation::execute(
        &backend, &request,
    )));

    assert_eq!(state.phase(), Phase::Expanding);
    assert_eq!(state.prompt(), "more grass");
    assert_eq!(
        state.expansion().map(ExpansionState::steps),
        Some(ExpansionSteps {
            bottom: 1,
            ..ExpansionSteps::NONE
        })
    );
    assert!(state
        .error()
        .is_some_and(|notice| notice.message().contains("content policy")));
}

#[test]
fn insert_flow_returns_to_placement_after_back() {
    let mut state = uploaded();
    state.update(Message::Session(SessionMessage::SelectTool(Tool::Insert)));
    state.update(Message::Tool(ToolMessage::InsertObjectLoaded(Ok(
        RasterImage::filled(10, 10, [0, 0, 0, 255], ImageEncoding::Png),
    ))));
    state.update(Message::Tool(ToolMessage::ConfirmPlacement));
    state.update(Message::Tool(ToolMessage::BackToMask));
    assert_eq!(state.phase(), Phase::Editing(EditStep::ConfiguringPlacement));
    assert_eq!(
        state.update(Message::Session(SessionMessage::Submit)),
        Event::None
    );
    assert!(state.error().is_some());
}

#[tokio::test]
async fn generate_from_text_runs_on_blocking_pool() {
    let mut state = State::default();
    state.update(Message::Session(SessionMessage::PromptChanged(
        "a lighthouse at dusk".into(),
    )));
    let Event::GenerationRequested(request) =
        state.update(Message::Session(SessionMessage::GenerateFromText))
    else {
        panic!("expected a request");
    };

    let backend = Arc::new(MockBackend::answering(&RasterImage::filled(
        32,
        16,
        [1, 2, 3, 255],
        ImageEncoding::Png,
    )));
    let outcome = generation::execute_async(backend.clone(), request).await;
    state.update(Message::GenerationFinished(outcome));

    assert_eq!(backend.calls(), ["generate_from_text"]);
    assert_eq!(state.phase(), Phase::ToolSelection);
    assert_eq!(
        state.base_image().map(RasterImage::dimensions),
        Some((32, 16))
    );
}

#[test]
fn settings_file_drives_the_editor() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    let saved = Config {
        max_expansion_clicks: Some(2),
        ..Config::default()
    };
    config::save_to_path(&saved, &path).expect("save config");

    let settings = config::load_from_path(&path)
        .expect("load config")
        .editor_settings();
    let mut state = State::new(settings);
    state.update(Message::Session(SessionMessage::BeginUpload));
    state.update(Message::Session(SessionMessage::BaseImageLoaded(Ok(
        base_image(),
    ))));
    state.update(Message::Session(SessionMessage::SelectTool(Tool::Expand)));
    for _ in 0..3 {
        state.update(Message::Tool(ToolMessage::Expand(ExpandDirection::Top)));
    }
    assert_eq!(
        state.expansion().map(|e| e.steps().top),
        Some(2),
        "budget comes from the settings file"
    );
}
