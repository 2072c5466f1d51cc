mod common;

use common::globe::config::GlobeConfig;
use common::globe::drag::DragPhase;
use common::globe::projector::{project_point, Projection, Viewport};
use common::globe::rotation::RotationMatrix;
use common::globe::state::GlobeState;
use glam::Vec2;

fn globe(texture: Option<&str>) -> GlobeState {
    let cfg = GlobeConfig {
        texture_url: texture.map(str::to_string),
        ..GlobeConfig::default()
    };
    let mut state = GlobeState::new(cfg);
    state.set_viewport(Viewport::new(500.0, 500.0, 1.0));
    state
}

#[test]
fn identity_frame_projects_every_visible_point_once() {
    let mut state = globe(None);
    assert_eq!(state.base_points().len(), 500);
    let scene = state.tick();

    let cfg = &state.config;
    let visible: Vec<f32> = state
        .base_points()
        .iter()
        .filter(|p| p.z > cfg.cull_threshold)
        .map(|p| p.z)
        .collect();
    assert_eq!(scene.dots.len(), visible.len());

    let proj = Projection::new(&state.viewport(), cfg);
    for p in state.base_points().iter().filter(|p| p.z > cfg.cull_threshold) {
        let expected = project_point(*p, &proj, cfg).expect("visible");
        let hits = scene.dots.iter().filter(|d| **d == expected).count();
        assert_eq!(hits, 1, "point {p:?}");
    }
    assert!(scene.dots.windows(2).all(|w| w[0].z <= w[1].z));
    assert!(scene.dots.iter().all(|d| d.radius > 0.0));
    // No plane without a texture: everything counts as back.
    assert!(scene.plane.is_none());
    assert_eq!(scene.split, scene.dots.len());
}

#[test]
fn plane_splits_dots_by_depth() {
    let mut state = globe(Some("/earth.png"));
    let scene = state.tick();
    let plane = scene.plane.expect("plane");
    assert!(scene.back_dots().iter().all(|d| d.z < plane.z));
    assert!(scene.front_dots().iter().all(|d| d.z >= plane.z));
    assert_eq!(scene.back_dots().len() + scene.front_dots().len(), scene.dots.len());

    state.set_plane_enabled(false);
    assert!(state.tick().plane.is_none());
}

#[test]
fn drag_rotates_and_records_momentum() {
    let mut state = globe(None);
    assert_eq!(state.phase(), DragPhase::Idle);

    state.pointer_down(Vec2::new(100.0, 100.0));
    assert_eq!(state.phase(), DragPhase::Dragging);
    assert_eq!(state.drag().momentum, Vec2::ZERO);

    state.pointer_move(Vec2::new(112.0, 95.0));
    assert_ne!(state.rotation(), RotationMatrix::IDENTITY);
    assert_eq!(state.drag().momentum, Vec2::new(12.0, -5.0));
    assert_eq!(state.cursor(), Some(Vec2::new(112.0, 95.0)));

    // Ticks while dragging do not coast.
    let before = state.rotation();
    state.tick();
    assert_eq!(state.rotation(), before);
}

#[test]
fn zero_delta_drag_leaves_orientation_untouched() {
    let mut state = globe(None);
    state.pointer_down(Vec2::new(50.0, 50.0));
    state.pointer_move(Vec2::new(50.0, 50.0));
    state.pointer_up();
    for _ in 0..5 {
        state.tick();
    }
    assert_eq!(state.rotation(), RotationMatrix::IDENTITY);
    assert_eq!(state.phase(), DragPhase::Idle);
}

#[test]
fn released_drag_coasts_then_stops() {
    let mut state = globe(None);
    state.pointer_down(Vec2::new(0.0, 0.0));
    state.pointer_move(Vec2::new(10.0, 0.0));
    state.pointer_up();
    assert_eq!(state.phase(), DragPhase::Coasting);

    let r0 = state.rotation();
    state.tick();
    assert_ne!(state.rotation(), r0);
    assert!((state.drag().momentum.x - 10.0 * state.config.momentum_decay).abs() < 1e-5);

    for _ in 0..200 {
        state.tick();
    }
    assert_eq!(state.phase(), DragPhase::Idle);
    assert_eq!(state.drag().momentum, Vec2::ZERO);

    let settled = state.rotation();
    state.tick();
    assert_eq!(state.rotation(), settled);
}

#[test]
fn new_press_cancels_coasting() {
    let mut state = globe(None);
    state.pointer_down(Vec2::ZERO);
    state.pointer_move(Vec2::new(30.0, 30.0));
    state.pointer_up();
    state.tick();
    state.pointer_down(Vec2::new(30.0, 30.0));
    assert_eq!(state.drag().momentum, Vec2::ZERO);
    let held = state.rotation();
    state.tick();
    assert_eq!(state.rotation(), held);
}

#[test]
fn hover_without_drag_does_not_rotate() {
    let mut state = globe(None);
    state.pointer_move(Vec2::new(200.0, 220.0));
    state.pointer_move(Vec2::new(260.0, 240.0));
    assert_eq!(state.rotation(), RotationMatrix::IDENTITY);
    assert_eq!(state.tick().cursor, Some(Vec2::new(260.0, 240.0)));
}

#[test]
fn leaving_canvas_clears_cursor_and_ends_drag() {
    let mut state = globe(None);
    state.pointer_down(Vec2::new(10.0, 10.0));
    state.pointer_move(Vec2::new(20.0, 10.0));
    state.pointer_leave();
    assert_eq!(state.cursor(), None);
    assert!(!state.drag().is_dragging);
    assert_eq!(state.phase(), DragPhase::Coasting);
    assert_eq!(state.tick().cursor, None);
}

#[test]
fn instances_do_not_share_state() {
    let mut a = globe(None);
    let b = globe(None);
    a.pointer_down(Vec2::ZERO);
    a.pointer_move(Vec2::new(40.0, 0.0));
    assert_ne!(a.rotation(), b.rotation());
    assert_eq!(b.rotation(), RotationMatrix::IDENTITY);
}

#[test]
fn higher_pixel_ratio_needs_longer_drag_for_same_turn() {
    let mut lo = globe(None);
    let mut hi = globe(None);
    hi.set_viewport(Viewport::new(1000.0, 1000.0, 2.0));

    lo.pointer_down(Vec2::ZERO);
    lo.pointer_move(Vec2::new(10.0, 0.0));
    hi.pointer_down(Vec2::ZERO);
    hi.pointer_move(Vec2::new(20.0, 0.0));

    let p = glam::Vec3::Z;
    let d = lo.rotation().rotate_point(p) - hi.rotation().rotate_point(p);
    assert!(d.length() < 1e-5);
}
