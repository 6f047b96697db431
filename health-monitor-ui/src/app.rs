//! App Root Component
//!
//! Layout shell: sidebar, header with project selector, and the current
//! page. Navigation is state driven; there is no URL routing.

use leptos::*;

use health_monitor::{Page, ProjectSelector};

use crate::components::{MobileMenuButton, Sidebar, Toast};
use crate::pages::{DashboardPage, ProjectsPage, SettingsPage, StaticContent};
use crate::state::{provide_app_state, AppState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let state = provide_app_state();

    // Keep the sidebar in sync with the viewport
    let resize_handle = window_event_listener(ev::resize, move |_| state.resize());
    on_cleanup(move || resize_handle.remove());

    state.mount();

    view! {
        <div class="min-h-screen bg-gray-50 flex">
            <Sidebar />

            // Overlay behind the sidebar on narrow screens
            {move || {
                state.dashboard.with(|s| s.sidebar_open()).then(|| view! {
                    <div
                        class="fixed inset-0 bg-black/40 z-30 lg:hidden"
                        on:click=move |_| state.close_sidebar()
                    />
                })
            }}

            <div class="flex-1 flex flex-col min-w-0 lg:ml-64">
                <Header />

                <main class="flex-1 p-4 md:p-8">
                    <CurrentPage />
                </main>
            </div>

            <Toast />
        </div>
    }
}

/// Page title, subtitle and, on the dashboard, the project selector
#[component]
fn Header() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");
    let page = create_memo(move |_| state.dashboard.with(|s| s.current_page()));

    view! {
        <header class="bg-white border-b border-gray-200 px-4 md:px-8 py-4 flex items-center justify-between gap-4">
            <div class="flex items-center gap-3">
                <MobileMenuButton />
                <div>
                    <h1 class="text-2xl font-bold text-gray-900">{move || page.get().title()}</h1>
                    <p class="text-sm text-gray-500">{move || page.get().subtitle()}</p>
                </div>
            </div>

            {move || (page.get() == Page::Dashboard).then(|| view! { <ProjectSelect /> })}
        </header>
    }
}

/// Project dropdown
#[component]
fn ProjectSelect() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    let options = move || {
        state.dashboard.with(|s| match s.project_selector() {
            ProjectSelector::Loading => view! {
                <option disabled=true selected=true>"Loading..."</option>
            }
            .into_view(),
            ProjectSelector::NoProjects => view! {
                <option disabled=true selected=true>"No projects"</option>
            }
            .into_view(),
            ProjectSelector::Choices { projects, selected } => projects
                .iter()
                .map(|project| {
                    let is_selected = selected == Some(project.id.as_str());
                    view! {
                        <option value=project.id.clone() selected=is_selected>
                            {project.name.clone()}
                        </option>
                    }
                })
                .collect_view(),
        })
    };

    view! {
        <select
            class="bg-white border border-gray-300 rounded-lg px-3 py-2 text-sm
                   focus:outline-none focus:ring-2 focus:ring-blue-500"
            on:change=move |ev| state.select_project(event_target_value(&ev))
        >
            {options}
        </select>
    }
}

/// Content of the current page
#[component]
fn CurrentPage() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");
    let page = create_memo(move |_| state.dashboard.with(|s| s.current_page()));

    move || match page.get() {
        Page::Dashboard => view! { <DashboardPage /> }.into_view(),
        Page::Projects => view! { <ProjectsPage /> }.into_view(),
        Page::Settings => view! { <SettingsPage /> }.into_view(),
        other => other
            .static_content()
            .map(|content| view! { <StaticContent content=content /> })
            .into_view(),
    }
}
