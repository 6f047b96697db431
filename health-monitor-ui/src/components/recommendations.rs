//! Recommendations
//!
//! Suggested actions with priority, category and expected impact.

use leptos::*;

use health_monitor::presentation::{
    action_count_label, level_badge, recommendation_category_icon, NO_RECOMMENDATIONS_SUBTITLE,
    NO_RECOMMENDATIONS_TITLE,
};
use health_monitor::Recommendation;

use super::loading::EmptyState;

#[component]
pub fn Recommendations(recommendations: Vec<Recommendation>) -> impl IntoView {
    let count = action_count_label(recommendations.len());

    let body = if recommendations.is_empty() {
        view! {
            <EmptyState icon="🎯" title=NO_RECOMMENDATIONS_TITLE subtitle=NO_RECOMMENDATIONS_SUBTITLE />
        }
        .into_view()
    } else {
        recommendations
            .into_iter()
            .map(|rec| view! { <RecommendationItem rec=rec /> })
            .collect_view()
    };

    view! {
        <div class="bg-white rounded-xl shadow-sm border border-gray-200 p-6">
            <div class="flex items-center justify-between mb-4">
                <h2 class="text-lg font-semibold text-gray-900">"Recommendations"</h2>
                <span class="text-xs font-medium bg-gray-100 text-gray-600 rounded-full px-2 py-1">{count}</span>
            </div>
            <div class="space-y-3">{body}</div>
        </div>
    }
}

#[component]
fn RecommendationItem(rec: Recommendation) -> impl IntoView {
    let priority = level_badge(rec.priority);

    view! {
        <div class="rounded-lg border border-gray-200 p-3">
            <div class="flex items-start justify-between gap-2">
                <div class="flex items-center gap-2">
                    <span>{recommendation_category_icon(&rec.category)}</span>
                    <p class="text-sm font-medium text-gray-900">{rec.title}</p>
                </div>
                <span
                    class="text-xs whitespace-nowrap"
                    style=format!("color: {}", priority.tone.hex())
                >
                    {format!("{} {} priority", priority.icon, priority.label)}
                </span>
            </div>
            <p class="text-sm text-gray-600 mt-1">{rec.description}</p>
            <p class="text-xs text-green-700 mt-2">{format!("Impact: {}", rec.impact)}</p>
        </div>
    }
}
