//! Risk Summary
//!
//! Active risks with severity and category, or an all-clear state.

use leptos::*;

use health_monitor::presentation::{
    level_badge, risk_category_icon, risk_count_label, NO_RISKS_SUBTITLE, NO_RISKS_TITLE,
};
use health_monitor::Risk;

use super::loading::EmptyState;

#[component]
pub fn RiskSummary(risks: Vec<Risk>) -> impl IntoView {
    let count = risk_count_label(risks.len());

    let body = if risks.is_empty() {
        view! { <EmptyState icon="✅" title=NO_RISKS_TITLE subtitle=NO_RISKS_SUBTITLE /> }.into_view()
    } else {
        risks
            .into_iter()
            .map(|risk| view! { <RiskItem risk=risk /> })
            .collect_view()
    };

    view! {
        <div class="bg-white rounded-xl shadow-sm border border-gray-200 p-6">
            <div class="flex items-center justify-between mb-4">
                <h2 class="text-lg font-semibold text-gray-900">"Active Risks"</h2>
                <span class="text-xs font-medium bg-gray-100 text-gray-600 rounded-full px-2 py-1">{count}</span>
            </div>
            <div class="space-y-3">{body}</div>
        </div>
    }
}

#[component]
fn RiskItem(risk: Risk) -> impl IntoView {
    let severity = level_badge(risk.severity);

    view! {
        <div
            class="border-l-4 rounded-r-lg bg-gray-50 p-3"
            style=format!("border-color: {}", severity.tone.hex())
        >
            <div class="flex items-start justify-between gap-2">
                <div class="flex items-center gap-2">
                    <span>{risk_category_icon(&risk.category)}</span>
                    <p class="text-sm font-medium text-gray-900">{risk.title}</p>
                </div>
                <span class="text-xs whitespace-nowrap">{format!("{} {}", severity.icon, severity.label)}</span>
            </div>
            <p class="text-sm text-gray-600 mt-1">{risk.description}</p>
            <p class="text-xs text-gray-400 mt-2">
                {format!("{} · {}", risk.category, risk.detected_at.format("%b %d, %Y"))}
            </p>
        </div>
    }
}
