//! # client
//!
//! Leptos + WASM frontend for the portfolio site.
//!
//! The page is rendered on the server and hydrated in the browser. This crate
//! holds the section components, the embedded portfolio content, the
//! transient UI state machines, and the browser helpers they run on.

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs logging and hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // A second init (hot reload) fails harmlessly.
    _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
