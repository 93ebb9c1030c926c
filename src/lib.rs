//! # rxchat
//!
//! Leptos + WASM front-end for a prescription document assistant. Renders a
//! conversation thread, stages an optional PDF attachment, and forwards each
//! question to the ask endpoint as a multipart HTTP request.
//!
//! This crate contains the page, components, application state, and the
//! HTTP helper for the ask endpoint. The `hydrate` feature selects the
//! browser build; the `ssr` feature selects the server-rendering build used
//! by the hosting binary.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// Browser entry point: install panic/log hooks and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(crate::app::App);
}
