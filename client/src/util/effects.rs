//! Applies game-core effects to the browser.
//!
//! ARCHITECTURE
//! ============
//! Components forward gestures to `GameCore` through the shared signal and
//! hand the returned effects here. State changes are already visible through
//! the signal; this module only carries out what the core cannot do itself:
//! sound and delayed callbacks.

use leptos::prelude::*;
use sorter::game::{Effect, GameCore};

#[cfg(feature = "hydrate")]
use gloo_timers::callback::Timeout;
#[cfg(feature = "hydrate")]
use sorter::consts::{CELEBRATION_DELAY_MS, CELEBRATION_MS, FEEDBACK_MS, HOLE_FLASH_MS};

#[cfg(feature = "hydrate")]
use crate::util::audio;

/// Run `op` against the game and apply whatever effects it returns.
pub fn dispatch<F>(game: RwSignal<GameCore>, op: F)
where
    F: FnOnce(&mut GameCore) -> Vec<Effect>,
{
    let effects = game.try_update(op).unwrap_or_default();
    apply(game, effects);
}

/// Deal a fresh tray with a seed drawn from the browser.
pub fn start_new_game(game: RwSignal<GameCore>) {
    let seed = fresh_seed();
    dispatch(game, |g| g.new_game(seed));
}

/// Apply `effects` in order.
pub fn apply(game: RwSignal<GameCore>, effects: Vec<Effect>) {
    #[cfg(feature = "hydrate")]
    for effect in effects {
        match effect {
            Effect::EnsureAudio => audio::ensure(),
            Effect::PlayTone(tone) => audio::play(tone),
            Effect::ShowFeedback(feedback) => {
                let generation = feedback.generation;
                after(FEEDBACK_MS, move || game.update(|g| g.hide_feedback(generation)));
            }
            Effect::FlashHole { hole, generation } => {
                after(HOLE_FLASH_MS, move || game.update(|g| g.end_flash(hole, generation)));
            }
            Effect::ScheduleCelebration { round } => {
                after(CELEBRATION_DELAY_MS, move || {
                    let started = game.try_update(|g| g.start_celebration(round)).unwrap_or(false);
                    if started {
                        log::info!("all shapes sorted (round {round})");
                        after(CELEBRATION_MS, move || game.update(|g| g.end_celebration(round)));
                    }
                });
            }
            Effect::ScoreChanged(score) => log::debug!("score: {score}"),
            Effect::SoundToggled(enabled) => log::debug!("sound enabled: {enabled}"),
            Effect::PieceRemoved(_) | Effect::PieceReturned(_) | Effect::ClearFeedback => {}
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (game, effects);
    }
}

#[cfg(feature = "hydrate")]
fn after<F: FnOnce() + 'static>(ms: u32, f: F) {
    Timeout::new(ms, f).forget();
}

#[cfg(feature = "hydrate")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn fresh_seed() -> u64 {
    let random = (js_sys::Math::random() * 9_007_199_254_740_992.0) as u64;
    random ^ (js_sys::Date::now() as u64).rotate_left(32)
}

#[cfg(not(feature = "hydrate"))]
fn fresh_seed() -> u64 {
    0
}
