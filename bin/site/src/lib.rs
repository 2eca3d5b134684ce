//! TransBlue Logistics marketing site.
//!
//! A single Leptos view tree with hash-based page switching, image
//! carousels, an order form, and a slide-in contacts drawer.

#![allow(non_snake_case)]

pub mod app;
pub mod browser;
pub mod components;
pub mod content;
pub mod pages;
pub mod submission;

#[cfg(feature = "ssr")]
pub mod config;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
