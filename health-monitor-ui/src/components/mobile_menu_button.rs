//! Mobile Menu Button
//!
//! Hamburger toggle for the sidebar, hidden on wide screens.

use leptos::*;

use crate::state::AppState;

#[component]
pub fn MobileMenuButton() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    view! {
        <button
            class="lg:hidden p-2 rounded-lg text-gray-600 hover:bg-gray-100 transition-colors"
            aria-label="Toggle menu"
            on:click=move |_| state.toggle_sidebar()
        >
            {move || if state.dashboard.with(|s| s.sidebar_open()) { "✕" } else { "☰" }}
        </button>
    }
}
