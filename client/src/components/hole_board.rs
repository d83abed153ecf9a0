//! The row of holes that accept dropped shapes.

use leptos::prelude::*;
use sorter::game::GameCore;
use sorter::shape::ShapeKind;

use crate::util::effects;
use crate::util::styles::hole_class;

/// One hole per catalog kind, in catalog order.
#[component]
pub fn HoleBoard() -> impl IntoView {
    view! {
        <div class="holes-area">
            {ShapeKind::ALL.into_iter().map(|kind| view! { <Hole kind/> }).collect::<Vec<_>>()}
        </div>
    }
}

/// A drop target for `kind`.
///
/// Mouse drags resolve here through the HTML5 drop events. Touch drags are
/// resolved by the tray, which hit-tests for `.hole` and reads `data-shape`.
#[component]
pub fn Hole(kind: ShapeKind) -> impl IntoView {
    let game = expect_context::<RwSignal<GameCore>>();

    let class = move || game.with(|g| hole_class(kind, g.is_hovered(kind), g.flash_streak(kind)));

    let on_drag_over = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        if let Some(transfer) = ev.data_transfer() {
            transfer.set_drop_effect("move");
        }
    };

    let on_drag_enter = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        game.update(|g| g.drag_enter(kind));
    };

    let on_drag_leave = move |_ev: leptos::ev::DragEvent| {
        game.update(|g| g.drag_leave(kind));
    };

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        effects::dispatch(game, |g| g.drop_on(kind));
    };

    view! {
        <div
            class=class
            data-shape=kind.tag()
            on:dragover=on_drag_over
            on:dragenter=on_drag_enter
            on:dragleave=on_drag_leave
            on:drop=on_drop
        >
            <span class="hole__outline" style:color=kind.color()>{kind.glyph()}</span>
        </div>
    }
}
