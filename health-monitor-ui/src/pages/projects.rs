//! Projects Page
//!
//! Grid of all projects; choosing one opens its dashboard.

use leptos::*;

use health_monitor::Project;

use crate::components::{EmptyState, Loading};
use crate::state::AppState;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");
    let projects = create_memo(move |_| state.dashboard.with(|s| s.projects().to_vec()));
    let loading = create_memo(move |_| state.dashboard.with(|s| s.is_loading_projects()));

    view! {
        <div class="space-y-6">
            <h2 class="text-xl font-semibold text-gray-900">"All Projects"</h2>
            {move || {
                let projects = projects.get();
                if projects.is_empty() && loading.get() {
                    view! { <Loading /> }.into_view()
                } else if projects.is_empty() {
                    view! {
                        <EmptyState
                            icon="📁"
                            title="No projects"
                            subtitle="Projects appear here once the backend reports them"
                        />
                    }
                    .into_view()
                } else {
                    view! {
                        <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3 gap-4">
                            {projects
                                .into_iter()
                                .map(|project| view! { <ProjectCard project=project /> })
                                .collect_view()}
                        </div>
                    }
                    .into_view()
                }
            }}
        </div>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");
    let id = project.id.clone();

    let counts = match (project.task_count, project.team_member_count) {
        (Some(tasks), Some(members)) => Some(format!("{} tasks · {} members", tasks, members)),
        (Some(tasks), None) => Some(format!("{} tasks", tasks)),
        (None, Some(members)) => Some(format!("{} members", members)),
        (None, None) => None,
    };

    view! {
        <button
            class="text-left bg-white rounded-xl shadow-sm border border-gray-200 p-5
                   hover:border-blue-400 hover:shadow transition"
            on:click=move |_| state.open_project(id.clone())
        >
            <h3 class="font-semibold text-gray-900">{project.name}</h3>
            <p class="text-sm text-gray-600 mt-1">{project.description}</p>
            <div class="flex items-center justify-between mt-4 text-xs text-gray-400">
                <span>{format!("Created {}", project.created_at.format("%b %d, %Y"))}</span>
                {counts.map(|c| view! { <span>{c}</span> })}
            </div>
        </button>
    }
}
