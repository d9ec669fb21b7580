use timeline_zoom::api::{TimelineEngine, TimelineEngineConfig, ZoomDirection};
use timeline_zoom::core::Viewport;
use timeline_zoom::core::primitives::MS_PER_DAY;
use timeline_zoom::interaction::{CursorAffordance, InteractionEvent, InteractionMode};
use timeline_zoom::render::NullRenderer;

// 2024-01-01T00:00:00Z
const JAN_1_2024: i64 = 1_704_067_200_000;
const WIDTH: f64 = 1000.0;

/// One-day range zoomed in once at the center: [J + 6.48e6, J + 79.92e6].
fn zoomed_engine() -> TimelineEngine<NullRenderer> {
    let config = TimelineEngineConfig::new(Viewport::new(1000, 200));
    let mut engine = TimelineEngine::new(NullRenderer::default(), config).expect("engine init");
    engine
        .set_range(JAN_1_2024, JAN_1_2024 + MS_PER_DAY)
        .expect("range");
    engine
        .zoom(500.0, WIDTH, ZoomDirection::In)
        .expect("zoom");
    engine
}

#[test]
fn drag_moves_window_by_pixel_fraction_of_duration() {
    let mut engine = zoomed_engine();
    let window = engine.window().expect("window");
    assert_eq!(window.start(), JAN_1_2024 + 6_480_000);
    assert_eq!(window.end(), JAN_1_2024 + 79_920_000);

    engine.pan_start(500.0).expect("pan start");
    assert!(engine.pan_move(490.0, WIDTH).expect("pan move"));

    let panned = engine.window().expect("window");
    assert_eq!(panned.start(), JAN_1_2024 + 7_214_400);
    assert_eq!(panned.end(), JAN_1_2024 + 80_654_400);
}

#[test]
fn drag_past_left_edge_is_clamped_with_duration_preserved() {
    let mut engine = zoomed_engine();
    let duration = engine.window().expect("window").duration();

    engine.pan_start(500.0).expect("pan start");
    assert!(engine.pan_move(600.0, WIDTH).expect("pan move"));

    let window = engine.window().expect("window");
    assert_eq!(window.start(), JAN_1_2024);
    assert_eq!(window.duration(), duration);

    // Already at the edge: further drags in the same direction change nothing.
    assert!(!engine.pan_move(900.0, WIDTH).expect("pan move"));
    assert_eq!(engine.window(), Some(window));
}

#[test]
fn drag_past_right_edge_is_clamped() {
    let mut engine = zoomed_engine();
    let duration = engine.window().expect("window").duration();

    engine.pan_start(500.0).expect("pan start");
    engine.pan_move(100.0, WIDTH).expect("pan move");

    let window = engine.window().expect("window");
    assert_eq!(window.end(), JAN_1_2024 + MS_PER_DAY);
    assert_eq!(window.duration(), duration);
}

#[test]
fn move_without_active_drag_is_ignored() {
    let mut engine = zoomed_engine();
    let before = engine.window();

    assert!(!engine.pan_move(300.0, WIDTH).expect("pan move"));
    assert_eq!(engine.window(), before);
}

#[test]
fn full_range_window_cannot_be_panned() {
    let config = TimelineEngineConfig::new(Viewport::new(1000, 200));
    let mut engine = TimelineEngine::new(NullRenderer::default(), config).expect("engine init");
    engine
        .set_range(JAN_1_2024, JAN_1_2024 + MS_PER_DAY)
        .expect("range");

    engine.pan_start(400.0).expect("pan start");
    assert!(!engine.pan_move(700.0, WIDTH).expect("pan move"));
    assert!(!engine.pan_move(100.0, WIDTH).expect("pan move"));
}

#[test]
fn drag_deltas_are_incremental_even_across_ignored_moves() {
    let mut engine = zoomed_engine();
    let start = engine.window().expect("window").start();

    engine.pan_start(100.0).expect("pan start");
    assert!(!engine.pan_move(150.0, 0.0).expect("pan move"));
    assert!(engine.pan_move(140.0, WIDTH).expect("pan move"));

    // Only the last -10 px counts.
    assert_eq!(engine.window().expect("window").start(), start + 734_400);
}

#[test]
fn pan_lifecycle_reports_cursor_changes() {
    let mut engine = zoomed_engine();
    assert_eq!(engine.cursor_affordance(), CursorAffordance::Grab);

    let started = engine.pan_start(10.0).expect("pan start");
    assert_eq!(started, Some(InteractionEvent::PanStarted));
    assert_eq!(
        started.map(InteractionEvent::cursor),
        Some(CursorAffordance::Grabbing)
    );
    assert_eq!(engine.interaction_mode(), InteractionMode::Panning);
    assert!(engine.pan_state().is_panning);

    assert_eq!(engine.pan_end(), Some(InteractionEvent::PanEnded));
    assert_eq!(engine.cursor_affordance(), CursorAffordance::Grab);
    assert_eq!(engine.pan_end(), None);
}

#[test]
fn pointer_leave_ends_drag() {
    let mut engine = zoomed_engine();
    engine.pan_start(500.0).expect("pan start");

    assert_eq!(engine.pointer_leave(), Some(InteractionEvent::PanEnded));
    assert_eq!(engine.interaction_mode(), InteractionMode::Idle);

    let before = engine.window();
    assert!(!engine.pan_move(200.0, WIDTH).expect("pan move"));
    assert_eq!(engine.window(), before);
}

#[test]
fn non_finite_pan_pointer_is_rejected() {
    let mut engine = zoomed_engine();
    assert!(engine.pan_start(f64::INFINITY).is_err());
    assert_eq!(engine.interaction_mode(), InteractionMode::Idle);

    engine.pan_start(10.0).expect("pan start");
    assert!(engine.pan_move(f64::NAN, WIDTH).is_err());
    assert_eq!(engine.pan_state().last_pointer_x, 10.0);
}

#[test]
fn new_range_resets_drag_state() {
    let mut engine = zoomed_engine();
    engine.pan_start(500.0).expect("pan start");

    engine
        .set_range(JAN_1_2024, JAN_1_2024 + 2 * MS_PER_DAY)
        .expect("range");

    assert_eq!(engine.interaction_mode(), InteractionMode::Idle);
    let window = engine.window().expect("window");
    assert_eq!(window.start(), JAN_1_2024);
    assert_eq!(window.end(), JAN_1_2024 + 2 * MS_PER_DAY);
}
