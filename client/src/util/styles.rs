//! Class and inline-style strings derived from game state.
//!
//! Kept free of browser APIs so the markup contract (class names the
//! stylesheet keys on) is covered by native tests.

#[cfg(test)]
#[path = "styles_test.rs"]
mod styles_test;

use sorter::consts::TOUCH_Z_INDEX;
use sorter::deck::Piece;
use sorter::input::Gesture;
use sorter::shape::ShapeKind;

/// CSS class list for a tray piece.
#[must_use]
pub fn piece_class(piece: &Piece, gesture: &Gesture) -> String {
    let mut class = format!("shape {}", piece.kind.tag());
    if gesture.piece() == Some(piece.id) {
        class.push_str(" dragging");
    }
    class
}

/// Inline style for a tray piece: entrance delay, plus fixed positioning
/// while a finger drags it.
#[must_use]
pub fn piece_style(piece: &Piece, gesture: &Gesture) -> String {
    let mut style = format!("animation-delay: {}s;", format_seconds(piece.animation_delay_s()));
    if let Some(pos) = gesture.touch_position(piece.id) {
        style.push_str(&format!(
            " position: fixed; left: {}px; top: {}px; z-index: {TOUCH_Z_INDEX};",
            pos.x, pos.y
        ));
    }
    style
}

/// CSS class list for a hole. `flash_streak` comes from
/// [`sorter::game::GameCore::flash_streak`]; odd streaks add `replay`,
/// which swaps the keyframes so a flash restarted mid-animation plays again.
#[must_use]
pub fn hole_class(kind: ShapeKind, hovered: bool, flash_streak: Option<u32>) -> String {
    let mut class = format!("hole {}", kind.tag());
    if hovered {
        class.push_str(" drag-over");
    }
    if let Some(streak) = flash_streak {
        class.push_str(" correct-drop");
        if streak % 2 == 1 {
            class.push_str(" replay");
        }
    }
    class
}

/// CSS class list for the feedback banner.
#[must_use]
pub fn feedback_class(visible: bool) -> &'static str {
    if visible { "feedback show" } else { "feedback" }
}

/// Sound toggle button glyph.
#[must_use]
pub fn sound_label(enabled: bool) -> &'static str {
    if enabled { "\u{1F50A}" } else { "\u{1F507}" }
}

/// Sound toggle button tooltip.
#[must_use]
pub fn sound_title(enabled: bool) -> &'static str {
    if enabled { "Turn off sound" } else { "Turn on sound" }
}

/// One decimal place, matching the 0.1 s stagger step.
fn format_seconds(s: f64) -> String {
    format!("{s:.1}")
}
