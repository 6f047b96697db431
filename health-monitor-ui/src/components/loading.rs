//! Loading Component
//!
//! Loading spinner and empty states.

use leptos::*;

/// Full-width loading spinner
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-24">
            <div class="loading-spinner w-10 h-10" />
        </div>
    }
}

/// Centered icon, title and subtitle shown when a list or view is empty
#[component]
pub fn EmptyState(
    icon: &'static str,
    title: &'static str,
    subtitle: &'static str,
    #[prop(default = "py-8")]
    padding: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("flex flex-col items-center justify-center text-center {}", padding)>
            <div class="text-4xl mb-3">{icon}</div>
            <p class="font-medium text-gray-700">{title}</p>
            <p class="text-sm text-gray-500 mt-1">{subtitle}</p>
        </div>
    }
}
