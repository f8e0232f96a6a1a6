//! Web UI for tutorials-showcase
//!
//! A Yew-based storefront home page demonstrating the self-scrolling
//! tutorials carousel with its guest/member gate and modal player.

mod app;
mod components;
mod context;
mod frame;
mod showcase;

use wasm_bindgen::prelude::*;

/// Entry point for the WASM application.
#[wasm_bindgen(start)]
pub fn run_app() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    // Mount the Yew app
    yew::Renderer::<app::App>::new().render();
}
