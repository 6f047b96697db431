//! Dimension Breakdown
//!
//! One row per weighted dimension: icon, name, weight, score bar and up to
//! three detail chips.

use leptos::*;

use health_monitor::presentation::{
    clamp_score, detail_chips, dimension_icon, format_score, format_weight, ScoreBand,
};
use health_monitor::DimensionScore;

#[component]
pub fn DimensionBreakdown(dimensions: Vec<DimensionScore>) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl shadow-sm border border-gray-200 p-6">
            <h2 class="text-lg font-semibold text-gray-900 mb-4">"Dimension Breakdown"</h2>
            <div class="space-y-5">
                {dimensions
                    .into_iter()
                    .map(|dimension| view! { <DimensionRow dimension=dimension /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn DimensionRow(dimension: DimensionScore) -> impl IntoView {
    let color = ScoreBand::from_score(dimension.score).tone().hex();
    let chips = detail_chips(&dimension);

    view! {
        <div>
            <div class="flex items-center justify-between mb-1">
                <div class="flex items-center gap-2">
                    <span class="text-xl">{dimension_icon(&dimension.name)}</span>
                    <div>
                        <p class="text-sm font-medium text-gray-900">{dimension.name.clone()}</p>
                        <p class="text-xs text-gray-500">{format_weight(dimension.weight)}</p>
                    </div>
                </div>
                <span class="text-lg font-semibold" style=format!("color: {}", color)>
                    {format_score(dimension.score)}
                </span>
            </div>

            <div class="w-full bg-gray-200 rounded-full h-2">
                <div
                    class="h-2 rounded-full"
                    style=format!("width: {}%; background-color: {}", clamp_score(dimension.score), color)
                />
            </div>

            {(!chips.is_empty()).then(|| view! {
                <div class="flex flex-wrap gap-2 mt-2">
                    {chips
                        .into_iter()
                        .map(|chip| view! {
                            <span class="text-xs bg-gray-100 text-gray-600 rounded px-2 py-0.5">
                                {chip.to_string()}
                            </span>
                        })
                        .collect_view()}
                </div>
            })}
        </div>
    }
}
