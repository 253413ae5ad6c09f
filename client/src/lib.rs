//! # client
//!
//! Leptos frontend for the Gatherly community site. Rendered on the server
//! (`ssr`) and hydrated in the browser (`hydrate`).
//!
//! This crate contains the route pages, shared components, page-scoped state,
//! the collection subscription client, and small browser helpers (admin flag,
//! simulated form submission).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

pub use app::App;

/// Hydration entry point for the WASM bundle.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
