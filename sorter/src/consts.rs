//! Shared constants for the sorter crate.

// ── Deck ────────────────────────────────────────────────────────

/// Copies of each shape kind dealt into a fresh tray.
pub const COPIES_PER_KIND: usize = 2;

/// Entrance animation stagger between consecutive tray pieces, in seconds.
pub const PIECE_STAGGER_S: f64 = 0.1;

// ── Timing ──────────────────────────────────────────────────────

/// How long the feedback banner stays visible, in milliseconds.
pub const FEEDBACK_MS: u32 = 2000;

/// How long a hole keeps its `correct-drop` flash, in milliseconds.
pub const HOLE_FLASH_MS: u32 = 600;

/// Delay between the last correct drop and the celebration overlay.
pub const CELEBRATION_DELAY_MS: u32 = 1000;

/// How long the celebration overlay stays on screen.
pub const CELEBRATION_MS: u32 = 2000;

// ── Audio ───────────────────────────────────────────────────────

/// Gain at the start of every tone.
pub const PEAK_GAIN: f64 = 0.2;

/// Gain the exponential ramp reaches at the end of a tone.
///
/// Must stay above zero: an exponential ramp cannot target silence.
pub const FLOOR_GAIN: f64 = 0.01;

// ── Stacking ────────────────────────────────────────────────────

/// CSS z-index applied to a piece while it follows a finger.
pub const TOUCH_Z_INDEX: i32 = 1000;
