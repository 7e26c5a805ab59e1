//! # prithi-client
//!
//! Leptos + WASM frontend for the Prithi Cuisine restaurant website.
//!
//! The same crate renders on the server (`ssr`) and hydrates in the browser
//! (`hydrate`). Interactive behavior lives in plain state machines under
//! `state` so it can be exercised without a browser; `util::dom` wraps the
//! window-level browser APIs the components share.

pub mod app;
pub mod components;
pub mod config;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point invoked by the hydration script.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
