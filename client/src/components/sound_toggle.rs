//! Speaker button that mutes and unmutes game tones.

use leptos::prelude::*;
use sorter::game::GameCore;

use crate::util::effects;
use crate::util::styles::{sound_label, sound_title};

#[component]
pub fn SoundToggle() -> impl IntoView {
    let game = expect_context::<RwSignal<GameCore>>();

    let enabled = move || game.with(GameCore::sound_enabled);
    let on_click = move |_| effects::dispatch(game, GameCore::toggle_sound);

    view! {
        <button
            class="sound-toggle"
            title=move || sound_title(enabled())
            on:click=on_click
        >
            {move || sound_label(enabled())}
        </button>
    }
}
