//! # newsdesk-client
//!
//! Leptos + WASM front end for the Newsdesk news aggregator: account forms,
//! the logged-in session and its persistence across reloads.
//!
//! This crate contains the page, components, application state, the REST API
//! wrapper and browser storage helpers. The `server` crate renders it with SSR
//! and the browser hydrates it through [`hydrate`].

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
