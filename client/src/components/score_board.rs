//! Score display and the new-game button.

use leptos::prelude::*;
use sorter::game::GameCore;

use crate::util::effects;

/// Current score with a button that deals a fresh game.
#[component]
pub fn ScoreBoard() -> impl IntoView {
    let game = expect_context::<RwSignal<GameCore>>();

    let score = move || game.with(GameCore::score);
    let on_new_game = move |_| effects::start_new_game(game);

    view! {
        <div class="score-board">
            <span class="score-board__label">"Score: "</span>
            <span id="scoreValue" class="score-board__value">{score}</span>
            <button class="btn score-board__new-game" on:click=on_new_game>
                "New Game"
            </button>
        </div>
    }
}
