//! Transient message shown after each drop.
//!
//! Hiding only drops the `show` class; the text stays so the opacity
//! transition fades it out.

use leptos::prelude::*;
use sorter::game::GameCore;

use crate::util::styles::feedback_class;

#[component]
pub fn FeedbackBanner() -> impl IntoView {
    let game = expect_context::<RwSignal<GameCore>>();

    let feedback = move || game.with(|g| g.feedback().cloned());
    let class = move || game.with(|g| feedback_class(g.feedback_visible()));
    let color = move || feedback().map_or("inherit", |fb| fb.color);
    let message = move || feedback().map_or("", |fb| fb.message);

    view! {
        <div id="feedback" class=class style:color=color>
            {message}
        </div>
    }
}
