//! # optitrack-auth
//!
//! Leptos + WASM sign-in screens for OptiTrack: the login form and the
//! set-password form reached from invite emails.
//!
//! This crate contains the pages, the form state machines with their
//! validation, and the HTTP submission client. Sessions, tokens and
//! dashboards belong to the backend and are only reached over HTTP.

pub mod app;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
