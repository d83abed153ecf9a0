//! The tray of draggable shapes.
//!
//! Each piece supports two gesture paths: HTML5 drag-and-drop for mouse and
//! pen, and raw touch events for phones and tablets (where HTML5 drag is not
//! delivered). Touch pieces follow the finger via fixed positioning computed
//! by the game core.

use leptos::prelude::*;
use sorter::deck::Piece;
use sorter::game::GameCore;

use crate::util::effects;
use crate::util::styles::{piece_class, piece_style};

#[cfg(feature = "hydrate")]
use crate::util::touch::{current_target_rect, hole_at, touch_point};

/// Renders every piece still waiting in the tray.
#[component]
pub fn ShapeTray() -> impl IntoView {
    let game = expect_context::<RwSignal<GameCore>>();

    let pieces = move || game.with(|g| g.tray().to_vec());

    view! {
        <div id="shapesArea" class="shapes-area">
            <For each=pieces key=|piece| piece.id children=move |piece| view! { <ShapePiece piece/> }/>
        </div>
    }
}

/// A single draggable shape.
#[component]
pub fn ShapePiece(piece: Piece) -> impl IntoView {
    let game = expect_context::<RwSignal<GameCore>>();
    let id = piece.id;

    let class = move || game.with(|g| piece_class(&piece, &g.gesture()));
    let style = move || game.with(|g| piece_style(&piece, &g.gesture()));

    let on_drag_start = move |ev: leptos::ev::DragEvent| {
        #[cfg(feature = "hydrate")]
        if let Some(transfer) = ev.data_transfer() {
            transfer.set_effect_allowed("move");
            // Firefox only starts a drag when some data is attached.
            if let Err(e) = transfer.set_data("text/plain", piece.kind.tag()) {
                log::warn!("drag data rejected: {e:?}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
        game.update(|g| g.drag_start(id));
    };

    let on_drag_end = move |_ev: leptos::ev::DragEvent| {
        game.update(GameCore::drag_end);
    };

    let on_touch_start = move |ev: leptos::ev::TouchEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            let (Some(touch), Some(rect)) = (touch_point(&ev, false), current_target_rect(&ev)) else {
                return;
            };
            game.update(|g| g.touch_start(id, touch, rect));
        }
    };

    let on_touch_move = move |ev: leptos::ev::TouchEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        if let Some(touch) = touch_point(&ev, false) {
            game.update(|g| {
                g.touch_move(touch);
            });
        }
    };

    let on_touch_end = move |ev: leptos::ev::TouchEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            let hole = touch_point(&ev, true).and_then(hole_at);
            effects::dispatch(game, |g| g.touch_end(hole));
        }
    };

    let on_touch_cancel = move |_ev: leptos::ev::TouchEvent| {
        effects::dispatch(game, GameCore::touch_cancel);
    };

    view! {
        <div
            class=class
            style=style
            draggable="true"
            data-shape-type=piece.kind.tag()
            on:dragstart=on_drag_start
            on:dragend=on_drag_end
            on:touchstart=on_touch_start
            on:touchmove=on_touch_move
            on:touchend=on_touch_end
            on:touchcancel=on_touch_cancel
        >
            {piece.kind.glyph()}
        </div>
    }
}
