//! # client
//!
//! Leptos + WASM frontend for the date-course recommendation service.
//!
//! This crate contains pages, components, session and UI state, and the typed
//! REST client for the external backend. Every route outside the open set
//! (login, signup, OAuth callback) renders behind the `AuthGuard` component,
//! which decides from the route path and cached session whether to render,
//! redirect, or hold a placeholder.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entrypoint: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
