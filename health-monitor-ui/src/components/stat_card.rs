//! Stat Card Component
//!
//! Small labelled value card for the dashboard summary row.

use leptos::*;

#[component]
pub fn StatCard(
    icon: &'static str,
    label: &'static str,
    #[prop(into)]
    value: String,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl shadow-sm border border-gray-200 p-5 flex items-center gap-4">
            <div class="text-3xl">{icon}</div>
            <div class="min-w-0">
                <p class="text-sm text-gray-500">{label}</p>
                <p class="text-xl font-semibold text-gray-900 truncate">{value}</p>
            </div>
        </div>
    }
}
