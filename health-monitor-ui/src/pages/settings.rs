//! Settings Page
//!
//! Score configuration cards plus the API connection settings.

use leptos::*;

use health_monitor::Page;

use super::info::StaticContent;
use crate::api;
use crate::state::AppState;

/// Settings page component
#[component]
pub fn SettingsPage() -> impl IntoView {
    view! {
        <div class="space-y-8">
            {Page::Settings.static_content().map(|content| view! { <StaticContent content=content /> })}
            <ApiSettings />
        </div>
    }
}

/// API connection settings
#[component]
fn ApiSettings() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    let (api_url, set_api_url) = create_signal(api::get_api_base());
    let (testing, set_testing) = create_signal(false);
    let (test_result, set_test_result) = create_signal(None::<bool>);

    let test_connection = move |_| {
        set_testing.set(true);
        set_test_result.set(None);
        api::set_api_base(&api_url.get());

        spawn_local(async move {
            match api::check_health().await {
                Ok(status) if status.is_healthy() => {
                    set_test_result.set(Some(true));
                    state.show_success("Connection successful!");
                }
                Ok(status) => {
                    set_test_result.set(Some(false));
                    state.show_error(&format!("Backend reports status '{}'", status.status));
                }
                Err(e) => {
                    set_test_result.set(Some(false));
                    state.show_error(&format!("Connection failed: {}", e));
                }
            }
            set_testing.set(false);
        });
    };

    let save_url = move |_| {
        api::set_api_base(&api_url.get());
        state.show_success("API URL saved");
    };

    let reset_url = move |_| {
        api::clear_api_base();
        set_api_url.set(api::get_api_base());
        set_test_result.set(None);
        state.show_success("API URL reset to default");
    };

    view! {
        <section class="bg-white rounded-xl shadow-sm border border-gray-200 p-6">
            <h2 class="text-lg font-semibold text-gray-900 mb-4">"API Connection"</h2>

            <div class="space-y-4">
                <div>
                    <label class="block text-sm text-gray-500 mb-2">"Health API URL"</label>
                    <div class="flex flex-wrap gap-2">
                        <input
                            type="text"
                            prop:value=move || api_url.get()
                            on:input=move |ev| set_api_url.set(event_target_value(&ev))
                            class="flex-1 min-w-0 border border-gray-300 rounded-lg px-4 py-2
                                   focus:outline-none focus:ring-2 focus:ring-blue-500"
                        />
                        <button
                            on:click=test_connection
                            disabled=move || testing.get()
                            class="px-4 py-2 bg-gray-100 hover:bg-gray-200 disabled:opacity-50
                                   rounded-lg font-medium transition-colors"
                        >
                            {move || if testing.get() { "Testing..." } else { "Test" }}
                        </button>
                        <button
                            on:click=save_url
                            class="px-4 py-2 bg-blue-600 hover:bg-blue-700 text-white
                                   rounded-lg font-medium transition-colors"
                        >
                            "Save"
                        </button>
                        <button
                            on:click=reset_url
                            class="px-4 py-2 text-gray-600 hover:bg-gray-100 rounded-lg transition-colors"
                        >
                            "Reset"
                        </button>
                    </div>
                </div>

                <div class="flex items-center space-x-2 text-sm">
                    <span class="text-gray-500">"Status:"</span>
                    {move || match test_result.get() {
                        Some(true) => view! { <span class="text-green-600">"✓ Connected"</span> }.into_view(),
                        Some(false) => view! { <span class="text-red-600">"✕ Failed"</span> }.into_view(),
                        None => view! { <span class="text-gray-400">"Not tested"</span> }.into_view(),
                    }}
                </div>
            </div>
        </section>
    }
}
