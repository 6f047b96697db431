//! Sidebar Navigation
//!
//! Fixed side navigation with the primary pages on top and help/about
//! below. Slides in on narrow screens.

use leptos::*;

use health_monitor::pages::{NavSection, PRODUCT_NAME};
use health_monitor::Page;

use crate::state::AppState;

#[component]
pub fn Sidebar() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    let panel_class = move || {
        let base = "fixed inset-y-0 left-0 z-40 w-64 bg-gray-900 text-white flex flex-col \
                    transform transition-transform duration-200 lg:translate-x-0";
        if state.dashboard.with(|s| s.sidebar_open()) {
            format!("{} translate-x-0", base)
        } else {
            format!("{} -translate-x-full", base)
        }
    };

    view! {
        <aside class=panel_class>
            <div class="flex items-center justify-between px-6 h-16 border-b border-gray-800">
                <div class="flex items-center space-x-2">
                    <span class="text-2xl">"🩺"</span>
                    <span class="font-bold leading-tight">"Health Monitor"</span>
                </div>
                <button
                    class="lg:hidden text-gray-400 hover:text-white"
                    aria-label="Close menu"
                    on:click=move |_| state.close_sidebar()
                >
                    "✕"
                </button>
            </div>

            <nav class="flex-1 px-3 py-4 space-y-1">
                {Page::in_section(NavSection::Primary)
                    .map(|page| view! { <NavItem page=page /> })
                    .collect_view()}
            </nav>

            <div class="px-3 py-4 border-t border-gray-800 space-y-1">
                {Page::in_section(NavSection::Secondary)
                    .map(|page| view! { <NavItem page=page /> })
                    .collect_view()}
                <p class="px-3 pt-4 text-xs text-gray-500">{PRODUCT_NAME}</p>
            </div>
        </aside>
    }
}

/// Individual navigation entry
#[component]
fn NavItem(page: Page) -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");
    let is_active = create_memo(move |_| state.dashboard.with(|s| s.current_page() == page));

    view! {
        <button
            on:click=move |_| state.navigate_from_sidebar(page)
            class=move || {
                let base = "w-full flex items-center space-x-3 px-3 py-2 rounded-lg text-sm transition-colors";
                if is_active.get() {
                    format!("{} bg-blue-600 text-white", base)
                } else {
                    format!("{} text-gray-300 hover:text-white hover:bg-gray-800", base)
                }
            }
        >
            <span>{page.nav_icon()}</span>
            <span>{page.title()}</span>
        </button>
    }
}
