//! Project Health Monitor Dashboard
//!
//! Browser dashboard for project health built with Leptos (WASM).
//!
//! # Features
//!
//! - Overall health score gauge and dimension breakdown
//! - Active risks and recommendations
//! - Two-point health trend chart
//! - Project list, static reference pages and API settings
//!
//! # Architecture
//!
//! Client-side rendered (CSR) Leptos application. All page and loading
//! state lives in the shared `DashboardState` controller, held in a single
//! signal; this crate only performs the HTTP calls the controller asks for
//! and renders its views.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
