//! Toast Notification Component
//!
//! Shows success and error notices.

use leptos::*;

use crate::state::{AppState, Notice};

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    view! {
        <div class="fixed bottom-4 right-4 z-50 space-y-2">
            {move || state.notice.get().map(|notice| view! { <ToastMessage notice=notice /> })}
        </div>
    }
}

#[component]
fn ToastMessage(notice: Notice) -> impl IntoView {
    let (icon, bg_class) = if notice.success {
        ("✓", "bg-green-600")
    } else {
        ("✕", "bg-red-600")
    };

    view! {
        <div class=format!(
            "flex items-center space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg",
            bg_class
        )>
            <span class="text-lg">{icon}</span>
            <span class="text-sm font-medium">{notice.message}</span>
        </div>
    }
}
