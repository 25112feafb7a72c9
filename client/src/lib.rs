//! # client
//!
//! Leptos + WASM frontend for MeetFlow.
//!
//! This crate contains the route table, pages, components, UI state, and the
//! REST helpers that talk to the server's `/api/meetings` endpoints. Meeting
//! types and pure list/stats/formatting logic live in the `meetings` crate.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
