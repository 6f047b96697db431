//! Health Score Gauge
//!
//! Circular gauge for the overall score with the status badge, the
//! previous-to-current chip and the calculation time.

use leptos::*;

use health_monitor::presentation::{
    format_score, gauge_dasharray, status_badge, trend_icon, ScoreBand, GAUGE_RADIUS,
};
use health_monitor::HealthScore;

#[component]
pub fn HealthScoreGauge(score: HealthScore) -> impl IntoView {
    let band = ScoreBand::from_score(score.overall_score);
    let color = band.tone().hex();
    let badge = status_badge(score.status);

    let trend_chip = match (score.previous_score, score.trend) {
        (Some(previous), Some(trend)) => Some(view! {
            <div class="mt-3 inline-flex items-center gap-2 text-sm text-gray-600 bg-gray-100 rounded-full px-3 py-1">
                <span>{trend_icon(Some(trend))}</span>
                <span>{format!("{} → {}", format_score(previous), format_score(score.overall_score))}</span>
            </div>
        }),
        _ => None,
    };

    view! {
        <div class="bg-white rounded-xl shadow-sm border border-gray-200 p-6 flex flex-col items-center">
            <h2 class="text-lg font-semibold text-gray-900 self-start mb-4">"Overall Health Score"</h2>

            <div class="relative w-40 h-40">
                <svg class="w-40 h-40 -rotate-90" viewBox="0 0 160 160">
                    <circle
                        cx="80"
                        cy="80"
                        r=GAUGE_RADIUS
                        fill="none"
                        stroke="#e5e7eb"
                        stroke-width="12"
                    />
                    <circle
                        cx="80"
                        cy="80"
                        r=GAUGE_RADIUS
                        fill="none"
                        stroke=color
                        stroke-width="12"
                        stroke-linecap="round"
                        stroke-dasharray=gauge_dasharray(score.overall_score)
                    />
                </svg>
                <div class="absolute inset-0 flex flex-col items-center justify-center">
                    <span class="text-4xl font-bold" style=format!("color: {}", color)>
                        {format_score(score.overall_score)}
                    </span>
                    <span class="text-xs text-gray-500">"/ 100"</span>
                </div>
            </div>

            <div class="mt-4 flex items-center gap-2 text-sm font-medium">
                <span>{badge.icon}</span>
                <span style=format!("color: {}", badge.tone.hex())>{badge.label}</span>
            </div>

            {trend_chip}

            <p class="mt-3 text-xs text-gray-400">
                {format!("Last updated: {}", score.calculated_at.format("%b %d, %Y %H:%M"))}
            </p>
        </div>
    }
}
