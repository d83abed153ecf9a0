//! Banner messages shown after a drop.

#[cfg(test)]
#[path = "feedback_test.rs"]
mod feedback_test;

/// Text and color of the feedback banner.
///
/// `generation` increases with every message so a stale hide timer can
/// tell that a newer message replaced the one it was scheduled for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub message: &'static str,
    pub color: &'static str,
    pub generation: u64,
}

pub const MATCH_MESSAGE: &str = "\u{1F389} Perfect match! \u{1F389}";
pub const MATCH_COLOR: &str = "#4ECDC4";

pub const MISMATCH_MESSAGE: &str = "Try a different hole! \u{1F60A}";
pub const MISMATCH_COLOR: &str = "#FF6B6B";

pub const CELEBRATION_MESSAGE: &str = "\u{1F31F} All shapes sorted! Amazing! \u{1F31F}";
pub const CELEBRATION_COLOR: &str = "#4ECDC4";

impl Feedback {
    #[must_use]
    pub fn matched(generation: u64) -> Self {
        Self { message: MATCH_MESSAGE, color: MATCH_COLOR, generation }
    }

    #[must_use]
    pub fn mismatched(generation: u64) -> Self {
        Self { message: MISMATCH_MESSAGE, color: MISMATCH_COLOR, generation }
    }

    /// Overlay text for a finished game. Celebration timers are keyed by
    /// game round, so `round` stands in for the generation.
    #[must_use]
    pub fn celebration(round: u64) -> Self {
        Self { message: CELEBRATION_MESSAGE, color: CELEBRATION_COLOR, generation: round }
    }
}
