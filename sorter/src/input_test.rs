use super::*;

// =============================================================
// Geometry
// =============================================================

#[test]
fn point_subtraction() {
    let p = Point::new(30.0, 45.0) - Point::new(10.0, 5.0);
    assert_eq!(p, Point::new(20.0, 40.0));
}

#[test]
fn rect_top_left() {
    let rect = Rect { left: 12.0, top: 34.0, width: 80.0, height: 80.0 };
    assert_eq!(rect.top_left(), Point::new(12.0, 34.0));
}

#[test]
fn rect_clamp_keeps_inside_points() {
    let rect = Rect { left: 10.0, top: 20.0, width: 80.0, height: 60.0 };
    assert_eq!(rect.clamp(Point::new(50.0, 50.0)), Point::new(50.0, 50.0));
}

#[test]
fn rect_clamp_pulls_outside_points_to_the_edge() {
    let rect = Rect { left: 10.0, top: 20.0, width: 80.0, height: 60.0 };
    assert_eq!(rect.clamp(Point::new(5.0, 95.0)), Point::new(10.0, 80.0));
    assert_eq!(rect.clamp(Point::new(120.0, 0.0)), Point::new(90.0, 20.0));
}

#[test]
fn rect_clamp_on_empty_rect_is_its_corner() {
    let rect = Rect { left: 3.0, top: 4.0, width: 0.0, height: -2.0 };
    assert_eq!(rect.clamp(Point::new(100.0, 100.0)), Point::new(3.0, 4.0));
}

// =============================================================
// Gesture
// =============================================================

#[test]
fn gesture_default_is_idle() {
    assert_eq!(Gesture::default(), Gesture::Idle);
    assert_eq!(Gesture::Idle.piece(), None);
}

#[test]
fn gesture_piece_for_drag_and_touch() {
    assert_eq!(Gesture::Dragging { piece: PieceId::new(1, 3) }.piece(), Some(PieceId::new(1, 3)));
    let touch = Gesture::Touching { piece: PieceId::new(1, 5), offset: Point::default(), position: None };
    assert_eq!(touch.piece(), Some(PieceId::new(1, 5)));
}

#[test]
fn touch_position_only_for_held_piece() {
    let touch = Gesture::Touching {
        piece: PieceId::new(1, 1),
        offset: Point::new(4.0, 4.0),
        position: Some(Point::new(100.0, 200.0)),
    };
    assert_eq!(touch.touch_position(PieceId::new(1, 1)), Some(Point::new(100.0, 200.0)));
    assert_eq!(touch.touch_position(PieceId::new(1, 2)), None);
    assert_eq!(Gesture::Dragging { piece: PieceId::new(1, 1) }.touch_position(PieceId::new(1, 1)), None);
}
