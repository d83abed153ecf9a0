//! Play page — the whole game on one screen.

use leptos::prelude::*;
use sorter::game::GameCore;

use crate::components::celebration::Celebration;
use crate::components::feedback_banner::FeedbackBanner;
use crate::components::hole_board::HoleBoard;
use crate::components::score_board::ScoreBoard;
use crate::components::shape_tray::ShapeTray;
use crate::components::sound_toggle::SoundToggle;
use crate::util::effects;

/// Composes the header, holes, tray, and feedback overlays.
///
/// The tray is dealt on mount rather than during render: the server has no
/// source of randomness shared with the browser, so dealing during SSR would
/// break hydration.
#[component]
pub fn PlayPage() -> impl IntoView {
    let game = expect_context::<RwSignal<GameCore>>();

    Effect::new(move || {
        if game.with_untracked(GameCore::round) == 0 {
            effects::start_new_game(game);
        }
    });

    view! {
        <div class="sorter-page">
            <header class="sorter-page__header">
                <h1 class="sorter-page__title">"Shape Sorter"</h1>
                <SoundToggle/>
            </header>
            <ScoreBoard/>
            <p class="sorter-page__hint">"Drag each shape into the hole that matches it!"</p>
            <HoleBoard/>
            <ShapeTray/>
            <FeedbackBanner/>
            <Celebration/>
        </div>
    }
}
