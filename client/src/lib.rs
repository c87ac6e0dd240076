//! # client
//!
//! Leptos + WASM frontend for the spelling-correction form.
//!
//! This crate contains the page, components, client configuration, and the
//! browser HTTP call. Panel state and the wire contract come from the shared
//! `correction` crate so they can be exercised without a browser.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
