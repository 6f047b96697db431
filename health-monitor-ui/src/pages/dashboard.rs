//! Dashboard Page
//!
//! Health overview of the selected project: summary cards, score gauge,
//! dimension breakdown, trend, risks and recommendations.

use leptos::*;

use health_monitor::presentation::{NO_PROJECT_SUBTITLE, NO_PROJECT_TITLE};
use health_monitor::{DashboardBody, HealthReport, TrendPoint};

use crate::components::{
    DimensionBreakdown, EmptyState, ErrorBanner, HealthScoreGauge, Loading, Recommendations,
    RiskSummary, StatCard, TrendChart,
};
use crate::state::AppState;

/// Dashboard page component
#[component]
pub fn DashboardPage() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");
    let error = create_memo(move |_| state.dashboard.with(|s| s.error().map(str::to_string)));

    let body = move || {
        state.dashboard.with(|s| match s.dashboard_body() {
            DashboardBody::Loading => view! { <Loading /> }.into_view(),
            DashboardBody::Report(report) => view! {
                <ReportView report=report.clone() trend=s.trend_series() />
            }
            .into_view(),
            DashboardBody::Empty => view! {
                <EmptyState
                    icon="📊"
                    title=NO_PROJECT_TITLE
                    subtitle=NO_PROJECT_SUBTITLE
                    padding="py-24"
                />
            }
            .into_view(),
            DashboardBody::Pending => ().into_view(),
        })
    };

    view! {
        <div class="space-y-6">
            {move || error.get().map(|message| view! { <ErrorBanner message=message /> })}
            {body}
        </div>
    }
}

/// Populated dashboard for one report
#[component]
fn ReportView(report: HealthReport, trend: Vec<TrendPoint>) -> impl IntoView {
    view! {
        <div class="space-y-6">
            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                <StatCard icon="⚠️" label="Total Risks" value=report.risks.len().to_string() />
                <StatCard
                    icon="💡"
                    label="Recommendations"
                    value=report.recommendations.len().to_string()
                />
                <StatCard icon="📊" label="Project" value=report.project_name.clone() />
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                <HealthScoreGauge score=report.health_score.clone() />
                <div class="lg:col-span-2">
                    <DimensionBreakdown dimensions=report.health_score.dimensions.clone() />
                </div>
            </div>

            <TrendChart points=trend />

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <RiskSummary risks=report.risks />
                <Recommendations recommendations=report.recommendations />
            </div>
        </div>
    }
}
