//! Full-screen overlay shown once every shape is sorted.

use leptos::prelude::*;
use sorter::game::GameCore;

#[component]
pub fn Celebration() -> impl IntoView {
    let game = expect_context::<RwSignal<GameCore>>();

    let overlay = Memo::new(move |_| game.with(GameCore::celebration));

    view! {
        {move || {
            overlay
                .get()
                .map(|text| {
                    view! {
                        <div class="celebration" style:color=text.color>
                            {text.message}
                        </div>
                    }
                })
        }}
    }
}
