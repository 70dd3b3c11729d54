use super::*;
use crate::draw::{BLACK, BLUE, Color, Point, RED};
use crate::input::SurfaceEvent;

const OPAQUE_RED: u32 = 0xFFFF_0000;
const OPAQUE_BLUE: u32 = 0xFF00_00FF;

fn create_test_surface() -> DrawingSurface {
    let mut surface = DrawingSurface::new(100, 100, 1.0).unwrap();
    surface.set_brush_thickness(10.0);
    surface
}

fn draw_line(surface: &mut DrawingSurface, from: (f64, f64), to: (f64, f64)) {
    surface.on_pointer_down(from.0, from.1);
    surface.on_pointer_move(to.0, to.1);
    surface.on_pointer_up();
}

#[test]
fn test_gesture_finalizes_one_stroke_with_pointer_down_config() {
    let mut surface = create_test_surface();
    surface.set_color("red").unwrap();

    surface.on_pointer_down(1.0, 1.0);
    // Changing config mid-gesture only affects the next gesture
    surface.set_color("blue").unwrap();
    surface.set_brush_thickness(3.0);
    surface.on_pointer_move(5.0, 5.0);
    surface.on_pointer_move(9.0, 2.0);
    surface.on_pointer_up();

    assert_eq!(surface.strokes().len(), 1);
    let stroke = &surface.strokes()[0];
    assert_eq!(stroke.color, RED);
    assert_eq!(stroke.thickness, 10.0);
    assert_eq!(stroke.segments().len(), 2);

    // Fresh in-progress path carries the config forward
    assert!(surface.in_progress().is_empty());
    assert_eq!(surface.in_progress().color, BLUE);
    assert_eq!(surface.in_progress().thickness, 3.0);
    assert_eq!(surface.state, GestureState::Idle);
}

#[test]
fn test_concrete_scenario_with_density() {
    let mut surface = DrawingSurface::new(200, 200, 2.0).unwrap();
    surface.set_brush_thickness(20.0);
    surface.set_color("black").unwrap();

    surface.on_pointer_down(10.0, 10.0);
    surface.on_pointer_move(50.0, 50.0);
    surface.on_pointer_up();

    assert_eq!(surface.strokes().len(), 1);
    let stroke = &surface.strokes()[0];
    assert_eq!(
        stroke.points().collect::<Vec<_>>(),
        vec![Point::new(10.0, 10.0), Point::new(50.0, 50.0)]
    );
    assert_eq!(stroke.color, BLACK);
    assert_eq!(stroke.thickness, 40.0);

    surface.undo();
    assert!(surface.strokes().is_empty());
    surface.undo();
    assert!(surface.strokes().is_empty());
    assert_eq!(surface.discarded().len(), 1);
}

#[test]
fn test_undo_removes_most_recent_in_reverse_order() {
    let mut surface = create_test_surface();
    let colors = ["#FF0000", "#00FF00", "#0000FF"];
    for (i, spec) in colors.iter().enumerate() {
        surface.set_color(spec).unwrap();
        let y = 20.0 + 30.0 * i as f64;
        draw_line(&mut surface, (10.0, y), (90.0, y));
    }

    surface.undo();
    surface.undo();

    assert_eq!(surface.strokes().len(), 1);
    assert_eq!(surface.strokes()[0].color, RED);
    let discarded: Vec<Color> = surface.discarded().iter().map(|s| s.color).collect();
    assert_eq!(
        discarded,
        vec![Color::parse("#0000FF").unwrap(), Color::parse("#00FF00").unwrap()]
    );

    let frame = surface.compose_frame().unwrap();
    assert_eq!(frame.pixel(50, 20), Some(OPAQUE_RED));
    assert_eq!(frame.pixel(50, 50), Some(0));
    assert_eq!(frame.pixel(50, 80), Some(0));
}

#[test]
fn test_undo_on_empty_is_noop() {
    let mut surface = create_test_surface();
    surface.needs_redraw = false;

    assert!(!surface.can_undo());
    surface.undo();

    assert!(surface.strokes().is_empty());
    assert!(surface.discarded().is_empty());
    assert!(!surface.needs_redraw);
}

#[test]
fn test_undo_requests_redraw() {
    let mut surface = create_test_surface();
    draw_line(&mut surface, (10.0, 10.0), (20.0, 20.0));
    surface.needs_redraw = false;

    assert!(surface.can_undo());
    surface.undo();
    assert!(surface.needs_redraw);
    assert!(!surface.can_undo());
}

#[test]
fn test_later_stroke_wins_overlap() {
    let mut surface = create_test_surface();
    surface.set_color("#FF0000").unwrap();
    draw_line(&mut surface, (10.0, 50.0), (90.0, 50.0));
    surface.set_color("#0000FF").unwrap();
    draw_line(&mut surface, (40.0, 50.0), (60.0, 50.0));

    let frame = surface.compose_frame().unwrap();
    assert_eq!(frame.pixel(50, 50), Some(OPAQUE_BLUE));
    assert_eq!(frame.pixel(20, 50), Some(OPAQUE_RED));
    assert_eq!(frame.pixel(50, 10), Some(0));
}

#[test]
fn test_in_progress_stroke_drawn_on_top() {
    let mut surface = create_test_surface();
    surface.set_color("red").unwrap();
    draw_line(&mut surface, (10.0, 50.0), (90.0, 50.0));

    surface.set_color("blue").unwrap();
    surface.on_pointer_down(50.0, 10.0);
    surface.on_pointer_move(50.0, 90.0);

    let frame = surface.compose_frame().unwrap();
    assert_eq!(frame.pixel(50, 50), Some(OPAQUE_BLUE));
    assert_eq!(surface.strokes().len(), 1);
}

#[test]
fn test_invalid_color_leaves_current_color() {
    let mut surface = create_test_surface();
    surface.set_color("#FF0000").unwrap();

    let err = surface.set_color("not-a-color").unwrap_err();
    assert_eq!(err.spec, "not-a-color");
    assert_eq!(surface.current_color(), RED);

    draw_line(&mut surface, (0.0, 0.0), (5.0, 5.0));
    assert_eq!(surface.strokes()[0].color, RED);
}

#[test]
fn test_blank_frame_matches_surface_size() {
    let surface = DrawingSurface::new(64, 48, 1.0).unwrap();
    let frame = surface.compose_frame().unwrap();
    assert_eq!(frame.width(), 64);
    assert_eq!(frame.height(), 48);
    assert!(frame.is_blank());
}

#[test]
fn test_draw_then_undo_is_pixel_identical_to_blank() {
    let mut surface = create_test_surface();
    let blank = surface.compose_frame().unwrap();

    draw_line(&mut surface, (10.0, 10.0), (90.0, 90.0));
    assert_ne!(surface.compose_frame().unwrap(), blank);

    surface.undo();
    assert_eq!(surface.compose_frame().unwrap(), blank);
}

#[test]
fn test_move_before_down_is_noop() {
    let mut surface = create_test_surface();
    surface.on_pointer_move(10.0, 10.0);

    assert!(!surface.in_progress().is_started());
    assert!(surface.in_progress().is_empty());
    assert_eq!(surface.state, GestureState::Idle);

    // Also a no-op between gestures
    draw_line(&mut surface, (0.0, 0.0), (1.0, 1.0));
    surface.on_pointer_move(30.0, 30.0);
    assert!(surface.in_progress().is_empty());
}

#[test]
fn test_second_down_restarts_gesture() {
    let mut surface = create_test_surface();
    surface.on_pointer_down(0.0, 0.0);
    surface.on_pointer_move(10.0, 10.0);
    surface.on_pointer_down(40.0, 40.0);
    assert_eq!(surface.state, GestureState::Active);
    surface.on_pointer_move(60.0, 60.0);
    surface.on_pointer_up();

    assert_eq!(surface.strokes().len(), 1);
    assert_eq!(
        surface.strokes()[0].points().collect::<Vec<_>>(),
        vec![Point::new(40.0, 40.0), Point::new(60.0, 60.0)]
    );
}

#[test]
fn test_tap_finalizes_degenerate_stroke() {
    let mut surface = create_test_surface();
    surface.on_pointer_down(25.0, 25.0);
    surface.on_pointer_up();

    assert_eq!(surface.strokes().len(), 1);
    assert!(surface.strokes()[0].is_empty());
    assert!(surface.compose_frame().unwrap().is_blank());

    // Undo removes the tap like any other stroke
    surface.undo();
    assert!(surface.strokes().is_empty());
}

#[test]
fn test_resize_reallocates_without_rescaling() {
    let mut surface = create_test_surface();
    draw_line(&mut surface, (10.0, 10.0), (90.0, 90.0));

    surface.on_resize(50, 30).unwrap();

    assert_eq!(surface.width(), 50);
    assert_eq!(surface.height(), 30);
    assert_eq!(
        surface.strokes()[0].points().last(),
        Some(Point::new(90.0, 90.0))
    );
    let frame = surface.compose_frame().unwrap();
    assert_eq!((frame.width(), frame.height()), (50, 30));
}

#[test]
fn test_handle_event_dispatch() {
    let mut surface = create_test_surface();
    let events = [
        SurfaceEvent::Color {
            spec: "#0000FF".to_string(),
        },
        SurfaceEvent::Brush { size: 4.0 },
        SurfaceEvent::Down { x: 1.0, y: 2.0 },
        SurfaceEvent::Move { x: 3.0, y: 4.0 },
        SurfaceEvent::Up,
    ];
    for event in &events {
        surface.handle_event(event).unwrap();
    }
    assert_eq!(surface.strokes().len(), 1);
    assert_eq!(surface.strokes()[0].color, BLUE);
    assert_eq!(surface.strokes()[0].thickness, 4.0);

    surface.handle_event(&SurfaceEvent::Undo).unwrap();
    assert!(surface.strokes().is_empty());

    let err = surface
        .handle_event(&SurfaceEvent::Color {
            spec: "chartreuse-ish".to_string(),
        })
        .unwrap_err();
    assert!(matches!(err, SurfaceError::InvalidColor(_)));
    assert_eq!(surface.current_color(), BLUE);
}
