//! # client
//!
//! Leptos + WASM login page for the `signin` controller.
//!
//! The page owns presentation only: field inputs, inline errors, the submit
//! button and the toast stack. Validation, the login request, session
//! persistence and the redirect all happen in [`signin::LoginFormController`],
//! fed by the browser adapters in `net` and `util`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("signin client starting");
    leptos::mount::mount_to_body(app::App);
}
