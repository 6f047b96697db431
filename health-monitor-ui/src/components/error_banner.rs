//! Error Banner
//!
//! Red banner for the current load error. It stays until the next load
//! clears the error.

use leptos::*;

#[component]
pub fn ErrorBanner(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-red-50 border border-red-200 text-red-700 rounded-lg px-4 py-3 flex items-start gap-3">
            <span class="text-lg">"⚠️"</span>
            <span class="text-sm font-medium">{message}</span>
        </div>
    }
}
