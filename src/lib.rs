//! # nightswitch
//!
//! Leptos + WASM client implementing a persistent light/dark theme
//! toggle. The stored preference wins, the OS color scheme fills in,
//! and both a toolbar click and an OS-level change move the page
//! between modes.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// Client entry: set up logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    leptos::mount::hydrate_body(app::App);
}
