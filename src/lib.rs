//! # screener-ui
//!
//! Leptos + WASM front-end for the AI interview screening product.
//! Authenticated users create hiring campaigns, upload candidate CSVs,
//! start automated voice-interview rounds, and review per-candidate
//! transcripts and AI scores. All business logic lives in the backend
//! REST API; this crate is routing, forms, and data-fetching glue.
//!
//! Browser-only code (HTTP, localStorage, timers) is fenced behind the
//! `hydrate` feature so the crate builds and tests on the host target.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(crate::app::App);
}
