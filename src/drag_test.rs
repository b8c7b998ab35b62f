#![allow(clippy::float_cmp)]

use super::*;
use crate::consts::TAU;
use crate::geometry::Direction;
use crate::ring::RingLayout;
use crate::spring::{Spring, SpringConfig};
use crate::strip::StripLayout;
use crate::surface::{NullSurface, SurfaceError};

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// =============================================================
// Helpers
// =============================================================

/// Surface that refuses every capture and release.
#[derive(Debug, Default)]
struct StubbornSurface {
    style: SurfaceStyle,
    capture_attempts: usize,
    release_attempts: usize,
}

impl PointerSurface for StubbornSurface {
    fn set_pointer_capture(&mut self, pointer_id: i32) -> Result<(), SurfaceError> {
        self.capture_attempts += 1;
        Err(SurfaceError::CaptureFailed { pointer_id, reason: "detached".into() })
    }

    fn release_pointer_capture(&mut self, pointer_id: i32) -> Result<(), SurfaceError> {
        self.release_attempts += 1;
        Err(SurfaceError::NotCaptured(pointer_id))
    }

    fn style(&self) -> SurfaceStyle {
        self.style.clone()
    }

    fn set_style(&mut self, style: SurfaceStyle) {
        self.style = style;
    }
}

struct Rig {
    engine: DragEngine,
    spring: Spring,
    surface: NullSurface,
}

impl Rig {
    fn new() -> Self {
        let mut surface = NullSurface::new();
        let mut engine = DragEngine::default();
        engine.attach(&mut surface);
        Self { engine, spring: Spring::default(), surface }
    }

    fn feed<P: NavigationPolicy>(&mut self, update: GestureUpdate, policy: &P, count: usize) -> DragOutcome {
        self.engine.update(&update, policy, count, &mut self.spring, &mut self.surface)
    }

    /// Start, move to `dx`, release at `dx`. Returns the release outcome.
    fn drag_x<P: NavigationPolicy>(&mut self, dx: f64, policy: &P, count: usize) -> DragOutcome {
        self.feed(GestureUpdate::start(Some(1)), policy, count);
        self.feed(GestureUpdate::moved([dx, 0.0], Some(1)), policy, count);
        self.feed(GestureUpdate::end([dx, 0.0], Some(1)), policy, count)
    }
}

fn commit_index(outcome: DragOutcome) -> usize {
    match outcome {
        DragOutcome::Commit { index, .. } => index,
        other => panic!("expected commit, got {other:?}"),
    }
}

// =============================================================
// Delta computation
// =============================================================

#[test]
fn ring_delta_is_movement_over_sensitivity() {
    let engine = DragEngine::default();
    let ring = RingLayout::default();
    let update = GestureUpdate::moved([140.0, 0.0], None);
    // 280 px is one item; 140 px is half of TAU / 4.
    assert!(approx_eq(engine.drag_delta(&update, &ring, 4), TAU / 8.0));
}

#[test]
fn delta_is_clamped_to_one_spacing() {
    let engine = DragEngine::default();
    let strip = StripLayout::default();
    let far = GestureUpdate::moved([-10_000.0, 0.0], None);
    assert!(approx_eq(engine.drag_delta(&far, &strip, 5), -1.5));
    let far = GestureUpdate::moved([10_000.0, 0.0], None);
    assert!(approx_eq(engine.drag_delta(&far, &strip, 5), 1.5));
}

#[test]
fn sensitivity_override_replaces_default() {
    let engine = DragEngine::new(true, Some(100.0), None);
    let strip = StripLayout::default();
    let update = GestureUpdate::moved([50.0, 0.0], None);
    assert!(approx_eq(engine.drag_delta(&update, &strip, 3), 0.5));
}

#[test]
fn zero_sensitivity_yields_no_motion() {
    let engine = DragEngine::new(true, Some(0.0), None);
    let update = GestureUpdate::moved([50.0, 0.0], None);
    assert_eq!(engine.drag_delta(&update, &StripLayout::default(), 3), 0.0);
}

#[test]
fn vertical_strip_reads_y_axis() {
    let engine = DragEngine::default();
    let strip = StripLayout::new(0.5, Direction::Vertical, false);
    let update = GestureUpdate::moved([300.0, -75.0], None);
    assert_eq!(engine.axis(&strip), DragAxis::Y);
    assert!(approx_eq(engine.drag_delta(&update, &strip, 3), -0.5));
}

#[test]
fn axis_override_wins() {
    let engine = DragEngine::new(true, None, Some(DragAxis::Y));
    assert_eq!(engine.axis(&RingLayout::default()), DragAxis::Y);
}

// =============================================================
// Ring releases
// =============================================================

#[test]
fn ring_drag_left_advances() {
    let mut rig = Rig::new();
    let ring = RingLayout::default();
    assert_eq!(commit_index(rig.drag_x(-200.0, &ring, 4)), 1);
}

#[test]
fn ring_drag_right_wraps_to_last() {
    let mut rig = Rig::new();
    let ring = RingLayout::default();
    assert_eq!(commit_index(rig.drag_x(200.0, &ring, 4)), 3);
}

#[test]
fn ring_short_drag_stays() {
    let mut rig = Rig::new();
    let ring = RingLayout::default();
    assert_eq!(commit_index(rig.drag_x(100.0, &ring, 4)), 0);
}

#[test]
fn ring_fling_moves_at_most_one() {
    let mut rig = Rig::new();
    let ring = RingLayout::default();
    assert_eq!(commit_index(rig.drag_x(-5_000.0, &ring, 8)), 1);
}

#[test]
fn ring_start_index_comes_from_sampled_offset() {
    let mut rig = Rig::new();
    let ring = RingLayout::default();
    // Resting on item 2 of 4, one whole turn away.
    rig.engine.sample(-(2.0 / 4.0) * TAU - TAU);
    assert_eq!(commit_index(rig.drag_x(-200.0, &ring, 4)), 3);
}

// =============================================================
// Strip releases
// =============================================================

#[test]
fn strip_drag_advances_one() {
    let mut rig = Rig::new();
    let strip = StripLayout::default();
    let outcome = rig.drag_x(-200.0, &strip, 5);
    match outcome {
        DragOutcome::Commit { index, offset } => {
            assert_eq!(index, 1);
            assert!(approx_eq(offset, -200.0 / 150.0));
        }
        other => panic!("expected commit, got {other:?}"),
    }
}

#[test]
fn bounded_strip_clamps_at_start() {
    let mut rig = Rig::new();
    let strip = StripLayout::default();
    assert_eq!(commit_index(rig.drag_x(200.0, &strip, 5)), 0);
}

#[test]
fn bounded_strip_clamps_at_end() {
    let mut rig = Rig::new();
    let strip = StripLayout::default();
    rig.engine.sample(-4.0 * 1.5);
    assert_eq!(commit_index(rig.drag_x(-200.0, &strip, 5)), 4);
}

#[test]
fn infinite_strip_wraps_backwards() {
    let mut rig = Rig::new();
    let strip = StripLayout::new(0.5, Direction::Horizontal, true);
    assert_eq!(commit_index(rig.drag_x(200.0, &strip, 5)), 4);
}

// =============================================================
// Degenerate releases
// =============================================================

#[test]
fn release_with_no_items_reverts_to_start() {
    let mut rig = Rig::new();
    let strip = StripLayout::default();
    rig.engine.sample(-0.25);
    let outcome = rig.drag_x(-100.0, &strip, 0);
    assert_eq!(outcome, DragOutcome::Revert { offset: -0.25 });
    assert_eq!(rig.spring.target(), -0.25);
    assert!(!rig.engine.is_dragging());
}

// =============================================================
// Animation profiles
// =============================================================

#[test]
fn active_updates_use_drag_profile() {
    let mut rig = Rig::new();
    let strip = StripLayout::default();
    rig.feed(GestureUpdate::start(Some(1)), &strip, 3);
    let outcome = rig.feed(GestureUpdate::moved([-75.0, 0.0], Some(1)), &strip, 3);
    assert_eq!(outcome, DragOutcome::Dragging { target: -0.5 });
    assert_eq!(rig.spring.target(), -0.5);
    assert_eq!(rig.spring.config(), DRAG_SPRING);
    assert!(rig.engine.is_dragging());
}

#[test]
fn revert_uses_settle_profile() {
    let mut rig = Rig::new();
    rig.drag_x(-100.0, &RingLayout::default(), 0);
    assert_eq!(rig.spring.config(), SpringConfig { tension: 200.0, friction: 25.0 });
}

#[test]
fn session_holds_start_offset_across_updates() {
    let mut rig = Rig::new();
    let strip = StripLayout::default();
    rig.engine.sample(-1.5);
    rig.feed(GestureUpdate::start(Some(1)), &strip, 3);
    // Frames keep sampling while dragging; the session must not move.
    rig.engine.sample(-1.8);
    rig.feed(GestureUpdate::moved([-30.0, 0.0], Some(1)), &strip, 3);
    let session = rig.engine.state().session().unwrap();
    assert_eq!(session.start_offset, -1.5);
    assert_eq!(session.start_index, 1);
}

// =============================================================
// Surface side effects
// =============================================================

#[test]
fn attach_sets_grab_and_touch_action() {
    let rig = Rig::new();
    let style = rig.surface.style();
    assert_eq!(style.cursor.as_deref(), Some("grab"));
    assert_eq!(style.touch_action.as_deref(), Some("none"));
}

#[test]
fn gesture_captures_and_releases_pointer() {
    let mut rig = Rig::new();
    let strip = StripLayout::default();
    rig.feed(GestureUpdate::start(Some(7)), &strip, 3);
    assert_eq!(rig.surface.captured(), Some(7));
    assert_eq!(rig.surface.style().cursor.as_deref(), Some("grabbing"));
    rig.feed(GestureUpdate::end([0.0, 0.0], Some(7)), &strip, 3);
    assert_eq!(rig.surface.captured(), None);
    assert_eq!(rig.surface.style().cursor.as_deref(), Some("grab"));
}

#[test]
fn failed_capture_and_release_do_not_abort_gesture() {
    let mut engine = DragEngine::default();
    let mut surface = StubbornSurface::default();
    let mut spring = Spring::default();
    let strip = StripLayout::default();
    engine.attach(&mut surface);
    engine.update(&GestureUpdate::start(Some(3)), &strip, 3, &mut spring, &mut surface);
    engine.update(&GestureUpdate::moved([-200.0, 0.0], Some(3)), &strip, 3, &mut spring, &mut surface);
    let outcome = engine.update(&GestureUpdate::end([-200.0, 0.0], Some(3)), &strip, 3, &mut spring, &mut surface);
    assert_eq!(commit_index(outcome), 1);
    assert_eq!(surface.capture_attempts, 1);
    assert_eq!(surface.release_attempts, 1);
}

#[test]
fn release_of_uncaptured_pointer_is_swallowed() {
    let mut rig = Rig::new();
    let strip = StripLayout::default();
    let outcome = rig.feed(GestureUpdate::end([0.0, 0.0], Some(9)), &strip, 3);
    assert_eq!(commit_index(outcome), 0);
}

#[test]
fn detach_restores_previous_style() {
    let mut surface = NullSurface::new();
    surface.set_style(SurfaceStyle { cursor: Some("pointer".into()), touch_action: None });
    let mut engine = DragEngine::default();
    engine.attach(&mut surface);
    engine.detach(&mut surface);
    assert_eq!(surface.style(), SurfaceStyle { cursor: Some("pointer".into()), touch_action: None });
}

#[test]
fn disabled_engine_ignores_updates_and_leaves_surface_alone() {
    let mut surface = NullSurface::new();
    let mut spring = Spring::default();
    let mut engine = DragEngine::new(false, None, None);
    engine.attach(&mut surface);
    assert_eq!(surface.style(), SurfaceStyle::default());
    let outcome =
        engine.update(&GestureUpdate::start(Some(1)), &StripLayout::default(), 3, &mut spring, &mut surface);
    assert_eq!(outcome, DragOutcome::Ignored);
    assert_eq!(surface.captured(), None);
}

#[test]
fn disabling_mid_gesture_returns_to_idle_and_restores_style() {
    let mut rig = Rig::new();
    let strip = StripLayout::default();
    rig.feed(GestureUpdate::start(Some(1)), &strip, 3);
    rig.feed(GestureUpdate::moved([-60.0, 0.0], Some(1)), &strip, 3);
    assert_eq!(rig.surface.captured(), Some(1));
    rig.engine.set_enabled(false, &mut rig.surface);
    assert!(!rig.engine.is_dragging());
    assert_eq!(rig.surface.captured(), None);
    assert_eq!(rig.surface.style(), SurfaceStyle::default());
    // The release that arrives afterwards finds nothing to do.
    let late = rig.feed(GestureUpdate::end([-60.0, 0.0], Some(1)), &strip, 3);
    assert_eq!(late, DragOutcome::Ignored);
    assert_eq!(rig.surface.captured(), None);
    rig.engine.set_enabled(true, &mut rig.surface);
    assert_eq!(rig.surface.style().touch_action.as_deref(), Some("none"));
}

#[test]
fn detach_mid_gesture_releases_pointer_and_disables() {
    let mut rig = Rig::new();
    let ring = RingLayout::default();
    rig.feed(GestureUpdate::start(Some(5)), &ring, 4);
    rig.engine.detach(&mut rig.surface);
    assert!(!rig.engine.is_enabled());
    assert!(!rig.engine.is_dragging());
    assert_eq!(rig.surface.captured(), None);
    let outcome = rig.feed(GestureUpdate::start(Some(6)), &ring, 4);
    assert_eq!(outcome, DragOutcome::Ignored);
    assert_eq!(rig.surface.captured(), None);
    assert_eq!(rig.surface.style().cursor, None);
}

#[test]
fn session_remembers_pointer_id() {
    let mut rig = Rig::new();
    rig.feed(GestureUpdate::start(Some(11)), &StripLayout::default(), 3);
    assert_eq!(rig.engine.state().session().unwrap().pointer_id, Some(11));
}

#[test]
fn sample_ignores_non_finite_offsets() {
    let mut engine = DragEngine::default();
    engine.sample(0.5);
    engine.sample(f64::NAN);
    assert_eq!(engine.current_offset(), 0.5);
}
