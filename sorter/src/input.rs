//! Screen geometry and the gesture state machine.
//!
//! Mouse drags use the HTML5 drag-and-drop API, so the browser moves the
//! ghost image and only the dragged piece needs tracking. Touch drags have
//! no such support: the piece is pinned with `position: fixed` and follows
//! the finger, keeping the grab offset recorded at touch start.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use std::ops::Sub;

use crate::deck::PieceId;

/// A point in CSS pixels, relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

/// A bounding client rect in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn top_left(&self) -> Point {
        Point { x: self.left, y: self.top }
    }

    /// The point inside this rect nearest to `point`.
    ///
    /// Touch points are reported for the finger's contact area and can land
    /// just outside the element that received the touch.
    #[must_use]
    pub fn clamp(&self, point: Point) -> Point {
        Point {
            x: point.x.max(self.left).min(self.left + self.width.max(0.0)),
            y: point.y.max(self.top).min(self.top + self.height.max(0.0)),
        }
    }
}

/// The gesture currently holding a piece.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Gesture {
    /// Nothing is being dragged.
    #[default]
    Idle,
    /// A mouse drag started on `piece` and has not ended yet.
    Dragging { piece: PieceId },
    /// A finger is holding `piece`.
    Touching {
        piece: PieceId,
        /// Touch point minus the piece's top-left corner at touch start.
        offset: Point,
        /// Fixed-position top-left while the finger moves; `None` until the
        /// first move, so the piece stays in the tray flow.
        position: Option<Point>,
    },
}

impl Gesture {
    /// The piece held by this gesture, if any.
    #[must_use]
    pub fn piece(&self) -> Option<PieceId> {
        match self {
            Self::Idle => None,
            Self::Dragging { piece } | Self::Touching { piece, .. } => Some(*piece),
        }
    }

    /// Fixed-position top-left of `piece` while it follows a finger.
    #[must_use]
    pub fn touch_position(&self, piece: PieceId) -> Option<Point> {
        match self {
            Self::Touching { piece: held, position, .. } if *held == piece => *position,
            _ => None,
        }
    }
}
