//! # client
//!
//! Leptos + WASM frontend for the shape sorter.
//!
//! Pages and components render the tray, the holes, and the feedback chrome
//! from a single `RwSignal<GameCore>` context. Browser-only glue (Web Audio,
//! timers, touch hit-testing) lives in `util` behind the `hydrate` feature,
//! so the same components also render on the server under `ssr`.

pub mod app;
pub mod components;
pub mod pages;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger unavailable: {e}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
