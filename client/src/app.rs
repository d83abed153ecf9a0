//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use sorter::game::GameCore;

use crate::pages::play::PlayPage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the game state context and unlocks audio on the first click or
/// touch anywhere in the window, then drops both listeners. Browsers refuse
/// to start an `AudioContext` before a user gesture.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let game = RwSignal::new(GameCore::new());
    provide_context(game);

    #[cfg(feature = "hydrate")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        use crate::util::one_shot::OneShot;

        let unlock = Rc::new(RefCell::new(OneShot::new()));
        let on_gesture = {
            let unlock = Rc::clone(&unlock);
            move || {
                if unlock.borrow_mut().fire() {
                    crate::util::audio::ensure();
                }
            }
        };
        let on_click = on_gesture.clone();
        let click = window_event_listener(leptos::ev::click, move |_| on_click());
        let touch = window_event_listener(leptos::ev::touchstart, move |_| on_gesture());
        let mut latch = unlock.borrow_mut();
        latch.on_fire(move || click.remove());
        latch.on_fire(move || touch.remove());
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/shape-sorter.css"/>
        <Title text="Shape Sorter"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=PlayPage/>
            </Routes>
        </Router>
    }
}
