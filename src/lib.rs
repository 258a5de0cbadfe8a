//! PergoMet - aluminium pergola landing page
//!
//! A single-page marketing site rendered on the server with Leptos and
//! hydrated in the browser. The page behaviors (scroll-aware navigation,
//! counters, FAQ accordion, gallery lightbox, contact form) keep their state
//! in plain types under [`core`]; [`ui`] renders them.

#![recursion_limit = "1024"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
