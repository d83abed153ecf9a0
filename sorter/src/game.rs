//! Game state and gesture handling.
//!
//! [`GameCore`] owns every piece of runtime state: the score, the sound
//! switch, the pieces still in the tray, the active gesture, and the
//! transient highlights. Each gesture handler mutates that state and
//! returns the [`Effect`]s the host must carry out (play a tone, start a
//! timer). Timer callbacks come back in through the `end_*` / `start_*`
//! methods carrying the generation or round they were scheduled for, so a
//! timer that outlived its message or its game is ignored.

#[cfg(test)]
#[path = "game_test.rs"]
mod game_test;

use std::collections::HashMap;

use rand::Rng;

use crate::audio::Tone;
use crate::deck::{self, Piece, PieceId};
use crate::feedback::Feedback;
use crate::input::{Gesture, Point, Rect};
use crate::shape::ShapeKind;

/// Instructions returned to the host after a state change.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Create the audio context if it does not exist yet.
    EnsureAudio,
    /// Play a tone now. Only emitted while sound is enabled.
    PlayTone(Tone),
    /// A new banner message is visible; call [`GameCore::hide_feedback`]
    /// with its generation after [`crate::consts::FEEDBACK_MS`].
    ShowFeedback(Feedback),
    /// The banner was hidden and its text cleared.
    ClearFeedback,
    /// `hole` flashes; call [`GameCore::end_flash`] after
    /// [`crate::consts::HOLE_FLASH_MS`].
    FlashHole { hole: ShapeKind, generation: u64 },
    ScoreChanged(u32),
    /// The piece was sorted and left the tray.
    PieceRemoved(PieceId),
    /// A touch-dragged piece snapped back into the tray.
    PieceReturned(PieceId),
    /// The tray is empty; call [`GameCore::start_celebration`] after
    /// [`crate::consts::CELEBRATION_DELAY_MS`].
    ScheduleCelebration { round: u64 },
    SoundToggled(bool),
}

/// A running hole flash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Flash {
    generation: u64,
    /// Flashes started on this hole while an earlier one was still running.
    streak: u32,
}

/// All state of one browser session of the game.
#[derive(Debug, Clone)]
pub struct GameCore {
    score: u32,
    sound_enabled: bool,
    tray: Vec<Piece>,
    gesture: Gesture,
    hovered: Option<ShapeKind>,
    flashing: HashMap<ShapeKind, Flash>,
    /// Last banner message; kept after hiding so the banner fades out with text.
    feedback: Option<Feedback>,
    feedback_visible: bool,
    celebrating: bool,
    /// Incremented per new game; stale celebration timers compare against it.
    round: u64,
    /// Monotonic counter shared by feedback messages and hole flashes.
    generation: u64,
}

impl Default for GameCore {
    fn default() -> Self {
        Self {
            score: 0,
            sound_enabled: true,
            tray: Vec::new(),
            gesture: Gesture::Idle,
            hovered: None,
            flashing: HashMap::new(),
            feedback: None,
            feedback_visible: false,
            celebrating: false,
            round: 0,
            generation: 0,
        }
    }
}

impl GameCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Game lifecycle ---

    /// Start a new game with a tray dealt from `seed`.
    pub fn new_game(&mut self, seed: u64) -> Vec<Effect> {
        let round = self.round + 1;
        self.reset_with(round, deck::deal_seeded(round, seed))
    }

    /// Start a new game with a tray dealt from `rng`.
    pub fn new_game_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Vec<Effect> {
        let round = self.round + 1;
        self.reset_with(round, deck::deal(round, rng))
    }

    fn reset_with(&mut self, round: u64, tray: Vec<Piece>) -> Vec<Effect> {
        self.score = 0;
        self.tray = tray;
        self.gesture = Gesture::Idle;
        self.hovered = None;
        self.flashing.clear();
        self.feedback = None;
        self.feedback_visible = false;
        self.celebrating = false;
        self.round = round;
        vec![Effect::ClearFeedback, Effect::ScoreChanged(0)]
    }

    /// Flip the sound switch.
    pub fn toggle_sound(&mut self) -> Vec<Effect> {
        self.sound_enabled = !self.sound_enabled;
        vec![Effect::SoundToggled(self.sound_enabled)]
    }

    // --- Mouse drag ---

    /// A mouse drag started on `piece`. Unknown pieces are ignored.
    pub fn drag_start(&mut self, piece: PieceId) {
        if self.piece(piece).is_some() {
            self.gesture = Gesture::Dragging { piece };
        }
    }

    /// The mouse drag ended, dropped or not.
    pub fn drag_end(&mut self) {
        if matches!(self.gesture, Gesture::Dragging { .. }) {
            self.gesture = Gesture::Idle;
        }
        self.hovered = None;
    }

    /// The dragged piece entered `hole`.
    pub fn drag_enter(&mut self, hole: ShapeKind) {
        if matches!(self.gesture, Gesture::Dragging { .. }) {
            self.hovered = Some(hole);
        }
    }

    /// The dragged piece left `hole`.
    pub fn drag_leave(&mut self, hole: ShapeKind) {
        if self.hovered == Some(hole) {
            self.hovered = None;
        }
    }

    /// The dragged piece was released over `hole`.
    pub fn drop_on(&mut self, hole: ShapeKind) -> Vec<Effect> {
        self.hovered = None;
        let Gesture::Dragging { piece } = self.gesture else {
            return Vec::new();
        };
        self.gesture = Gesture::Idle;
        let Some(held) = self.piece(piece) else {
            return Vec::new();
        };
        if held.kind.fits(hole) {
            self.correct_match(hole, piece)
        } else {
            self.wrong_match()
        }
    }

    // --- Touch drag ---

    /// A finger touched `piece` at `touch`; `rect` is the piece's bounding rect.
    /// The grab offset is measured from the point of `rect` nearest the touch.
    pub fn touch_start(&mut self, piece: PieceId, touch: Point, rect: Rect) {
        if self.piece(piece).is_none() {
            return;
        }
        let offset = rect.clamp(touch) - rect.top_left();
        self.gesture = Gesture::Touching { piece, offset, position: None };
    }

    /// The finger moved to `touch`. Returns the piece's new fixed position.
    pub fn touch_move(&mut self, touch: Point) -> Option<Point> {
        let Gesture::Touching { offset, position, .. } = &mut self.gesture else {
            return None;
        };
        let next = touch - *offset;
        *position = Some(next);
        Some(next)
    }

    /// The finger lifted over `hole_under`, or over no hole at all.
    pub fn touch_end(&mut self, hole_under: Option<ShapeKind>) -> Vec<Effect> {
        let Gesture::Touching { piece, .. } = self.gesture else {
            return Vec::new();
        };
        self.gesture = Gesture::Idle;
        let Some(held) = self.piece(piece) else {
            return Vec::new();
        };
        match hole_under {
            Some(hole) if held.kind.fits(hole) => self.correct_match(hole, piece),
            Some(_) => {
                let mut effects = self.wrong_match();
                effects.push(Effect::PieceReturned(piece));
                effects
            }
            None => vec![Effect::PieceReturned(piece)],
        }
    }

    /// The touch was cancelled by the browser; the piece snaps back.
    pub fn touch_cancel(&mut self) -> Vec<Effect> {
        self.touch_end(None)
    }

    // --- Match outcomes ---

    fn correct_match(&mut self, hole: ShapeKind, piece: PieceId) -> Vec<Effect> {
        let mut effects = vec![Effect::EnsureAudio];

        let flash = self.next_generation();
        let streak = self.flashing.get(&hole).map_or(0, |f| f.streak.saturating_add(1));
        self.flashing.insert(hole, Flash { generation: flash, streak });
        effects.push(Effect::FlashHole { hole, generation: flash });

        self.tray.retain(|p| p.id != piece);
        effects.push(Effect::PieceRemoved(piece));

        self.score = self.score.saturating_add(1);
        effects.push(Effect::ScoreChanged(self.score));

        if self.sound_enabled {
            effects.push(Effect::PlayTone(Tone::SUCCESS));
        }

        let generation = self.next_generation();
        effects.push(self.show_feedback(Feedback::matched(generation)));

        if self.tray.is_empty() {
            effects.push(Effect::ScheduleCelebration { round: self.round });
        }
        effects
    }

    fn wrong_match(&mut self) -> Vec<Effect> {
        let mut effects = vec![Effect::EnsureAudio];
        if self.sound_enabled {
            effects.push(Effect::PlayTone(Tone::ERROR));
        }
        let generation = self.next_generation();
        effects.push(self.show_feedback(Feedback::mismatched(generation)));
        effects
    }

    fn show_feedback(&mut self, feedback: Feedback) -> Effect {
        self.feedback = Some(feedback.clone());
        self.feedback_visible = true;
        Effect::ShowFeedback(feedback)
    }

    fn next_generation(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    // --- Timer callbacks ---

    /// Remove the flash from `hole` unless a newer flash replaced it.
    pub fn end_flash(&mut self, hole: ShapeKind, generation: u64) {
        if self.flashing.get(&hole).is_some_and(|f| f.generation == generation) {
            self.flashing.remove(&hole);
        }
    }

    /// Hide the banner unless a newer message replaced it. The text stays
    /// until the next message or game.
    pub fn hide_feedback(&mut self, generation: u64) {
        if self.feedback.as_ref().is_some_and(|fb| fb.generation == generation) {
            self.feedback_visible = false;
        }
    }

    /// Show the celebration overlay. Returns `false` for a stale round.
    pub fn start_celebration(&mut self, round: u64) -> bool {
        if round != self.round || !self.is_sorted() {
            return false;
        }
        self.celebrating = true;
        true
    }

    /// Hide the celebration overlay.
    pub fn end_celebration(&mut self, round: u64) {
        if round == self.round {
            self.celebrating = false;
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    /// Pieces still waiting to be sorted, in dealt order.
    #[must_use]
    pub fn tray(&self) -> &[Piece] {
        &self.tray
    }

    #[must_use]
    pub fn piece(&self, id: PieceId) -> Option<Piece> {
        self.tray.iter().copied().find(|p| p.id == id)
    }

    #[must_use]
    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    /// Whether `hole` shows the drag-over highlight.
    #[must_use]
    pub fn is_hovered(&self, hole: ShapeKind) -> bool {
        self.hovered == Some(hole)
    }

    /// Whether `hole` shows the correct-drop flash.
    #[must_use]
    pub fn is_flashing(&self, hole: ShapeKind) -> bool {
        self.flashing.contains_key(&hole)
    }

    /// How many flashes on `hole` restarted one still running, or `None`
    /// when the hole is not flashing. Hosts alternate on its parity so the
    /// animation replays.
    #[must_use]
    pub fn flash_streak(&self, hole: ShapeKind) -> Option<u32> {
        self.flashing.get(&hole).map(|f| f.streak)
    }

    /// The latest banner message, shown or fading out.
    #[must_use]
    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    #[must_use]
    pub fn feedback_visible(&self) -> bool {
        self.feedback_visible
    }

    #[must_use]
    pub fn celebrating(&self) -> bool {
        self.celebrating
    }

    /// Overlay text while the celebration is showing.
    #[must_use]
    pub fn celebration(&self) -> Option<Feedback> {
        self.celebrating.then(|| Feedback::celebration(self.round))
    }

    /// Whether a game was dealt and every piece has been sorted.
    #[must_use]
    pub fn is_sorted(&self) -> bool {
        self.round > 0 && self.tray.is_empty()
    }

    /// Number of games started so far.
    #[must_use]
    pub fn round(&self) -> u64 {
        self.round
    }
}
