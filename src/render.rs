//! Terminal Rendering
//!
//! Plain-text versions of the dashboard components for the CLI. Every
//! function returns the text instead of printing, so output can be tested
//! and composed.

use crate::controller::{DashboardBody, DashboardState, PageView, ProjectSelector};
use crate::model::{DimensionScore, HealthReport, HealthScore, Project, Recommendation, Risk, ScoreSummary};
use crate::pages::{Layout, NavSection, Page, StaticPage, PRODUCT_NAME};
use crate::presentation::{
    action_count_label, clamp_score, detail_chips, dimension_icon, format_score, format_weight,
    level_badge, recommendation_category_icon, risk_category_icon, risk_count_label, status_badge,
    trend_icon, ScoreBand, NO_PROJECT_SUBTITLE, NO_PROJECT_TITLE, NO_RECOMMENDATIONS_SUBTITLE,
    NO_RECOMMENDATIONS_TITLE, NO_RISKS_SUBTITLE, NO_RISKS_TITLE, NO_TREND_DATA,
};
use crate::trend::TrendPoint;

/// Cells in a full-width bar
pub const BAR_WIDTH: usize = 20;

const RULE: &str = "────────────────────────────────────────────────────────────";

/// `[██████████░░░░░░░░░░]` for a 0-100 score
pub fn bar(score: f64, width: usize) -> String {
    let filled = ((clamp_score(score) / 100.0) * width as f64).round() as usize;
    format!("[{}{}]", "█".repeat(filled), "░".repeat(width - filled))
}

fn section(title: &str, badge: Option<String>) -> Vec<String> {
    let heading = match badge {
        Some(badge) => format!("{}  ({})", title, badge),
        None => title.to_string(),
    };
    vec![String::new(), heading, RULE.to_string()]
}

/// Overall score gauge with status badge and trend chip
pub fn health_score(score: &HealthScore) -> String {
    let band = ScoreBand::from_score(score.overall_score);
    let status = status_badge(score.status);

    let mut lines = section("Overall Health Score", None);
    lines.push(format!(
        "{} {}/100  {}",
        bar(score.overall_score, BAR_WIDTH),
        format_score(score.overall_score),
        band.tone().name()
    ));
    lines.push(format!("{} {}", status.icon, status.label));

    if let (Some(previous), Some(trend)) = (score.previous_score, score.trend) {
        lines.push(format!(
            "{} {} → {}",
            trend_icon(Some(trend)),
            format_score(previous),
            format_score(score.overall_score)
        ));
    }

    lines.push(format!(
        "Last updated: {}",
        score.calculated_at.format("%Y-%m-%d %H:%M UTC")
    ));
    lines.join("\n")
}

/// One row per dimension with a half-width bar and detail chips
pub fn dimensions(dimensions: &[DimensionScore]) -> String {
    let mut lines = section("Dimension Breakdown", None);

    for dimension in dimensions {
        lines.push(format!(
            "{} {:<28} {} {:>3}  {}  {}",
            dimension_icon(&dimension.name),
            dimension.name,
            bar(dimension.score, BAR_WIDTH / 2),
            format_score(dimension.score),
            ScoreBand::from_score(dimension.score).tone().name(),
            format_weight(dimension.weight)
        ));

        let chips = detail_chips(dimension);
        if !chips.is_empty() {
            let chips: Vec<String> = chips.iter().map(|c| format!("[{}]", c)).collect();
            lines.push(format!("     {}", chips.join(" ")));
        }
    }
    lines.join("\n")
}

pub fn risks(risks: &[Risk]) -> String {
    let mut lines = section("Active Risks", Some(risk_count_label(risks.len())));

    if risks.is_empty() {
        lines.push(format!("✅ {}", NO_RISKS_TITLE));
        lines.push(format!("   {}", NO_RISKS_SUBTITLE));
        return lines.join("\n");
    }

    for risk in risks {
        let severity = level_badge(risk.severity);
        lines.push(format!(
            "{} {} {}  [{}]",
            severity.icon,
            risk_category_icon(&risk.category),
            risk.title,
            severity.label
        ));
        lines.push(format!("     {}", risk.description));
        lines.push(format!(
            "     {} · {}",
            risk.category,
            risk.detected_at.format("%Y-%m-%d")
        ));
    }
    lines.join("\n")
}

pub fn recommendations(recommendations: &[Recommendation]) -> String {
    let mut lines = section(
        "Recommendations",
        Some(action_count_label(recommendations.len())),
    );

    if recommendations.is_empty() {
        lines.push(format!("🎯 {}", NO_RECOMMENDATIONS_TITLE));
        lines.push(format!("   {}", NO_RECOMMENDATIONS_SUBTITLE));
        return lines.join("\n");
    }

    for rec in recommendations {
        let priority = level_badge(rec.priority);
        lines.push(format!(
            "{} {} {}  [{} priority]",
            priority.icon,
            recommendation_category_icon(&rec.category),
            rec.title,
            priority.label
        ));
        lines.push(format!("     {}", rec.description));
        lines.push(format!("     Impact: {}", rec.impact));
    }
    lines.join("\n")
}

/// Trend points as labelled bars on the fixed 0-100 axis
pub fn trend(points: &[TrendPoint]) -> String {
    let mut lines = section("Health Trend", None);

    if points.is_empty() {
        lines.push(NO_TREND_DATA.to_string());
        return lines.join("\n");
    }

    for point in points {
        lines.push(format!(
            "{:<7} {} {}",
            point.label(),
            bar(point.score, BAR_WIDTH),
            format_score(point.score)
        ));
    }
    lines.join("\n")
}

/// Summary line of the three dashboard stat cards
pub fn stat_cards(report: &HealthReport) -> String {
    format!(
        "⚠️  Total Risks: {}   💡 Recommendations: {}   📊 Project: {}",
        report.risks.len(),
        report.recommendations.len(),
        report.project_name
    )
}

/// Full dashboard for one report
pub fn report(report: &HealthReport, trend_points: &[TrendPoint]) -> String {
    [
        stat_cards(report),
        health_score(&report.health_score),
        dimensions(&report.health_score.dimensions),
        trend(trend_points),
        risks(&report.risks),
        recommendations(&report.recommendations),
    ]
    .join("\n")
}

pub fn empty_dashboard() -> String {
    format!("📊 {}\n   {}", NO_PROJECT_TITLE, NO_PROJECT_SUBTITLE)
}

/// Page index with the current page marked
pub fn sidebar(current: Page) -> String {
    let mut lines = vec![PRODUCT_NAME.to_string()];

    for (index, section) in [NavSection::Primary, NavSection::Secondary].into_iter().enumerate() {
        if index > 0 {
            lines.push(String::new());
        }
        for page in Page::in_section(section) {
            let marker = if page == current { ">" } else { " " };
            lines.push(format!("{} {} {:<16} ({})", marker, page.nav_icon(), page.title(), page.id()));
        }
    }
    lines.join("\n")
}

/// Title, subtitle and, on the dashboard, the project selector
pub fn header(state: &DashboardState) -> String {
    let page = state.current_page();
    let mut lines = vec![page.title().to_string(), page.subtitle().to_string()];

    if page == Page::Dashboard {
        let selector = match state.project_selector() {
            ProjectSelector::Loading => "Project: Loading...".to_string(),
            ProjectSelector::NoProjects => "Project: No projects".to_string(),
            ProjectSelector::Choices { projects, selected } => {
                let name = selected
                    .and_then(|id| projects.iter().find(|p| p.id == id))
                    .map(|p| p.name.as_str())
                    .unwrap_or("-");
                format!("Project: {} ({} available)", name, projects.len())
            }
        };
        lines.push(selector);
    }
    lines.push(RULE.to_string());
    lines.join("\n")
}

pub fn static_page(page: &StaticPage) -> String {
    let mut lines = vec![page.heading.to_string()];
    if let Some(group) = page.group {
        lines.push(String::new());
        lines.push(group.to_string());
    }

    for card in page.cards {
        lines.push(String::new());
        let marker = match (page.layout, card.accent) {
            (Layout::Accented, Some(accent)) => format!("|{}| ", accent),
            (Layout::Grid, _) => "▪ ".to_string(),
            _ => String::new(),
        };
        lines.push(format!("{}{}", marker, card.heading));
        lines.push(format!("  {}", card.body));
        if let Some(action) = card.action {
            lines.push(format!("  [{}]", action));
        }
    }
    lines.join("\n")
}

pub fn projects_table(projects: &[Project]) -> String {
    if projects.is_empty() {
        return "No projects found".to_string();
    }

    let mut lines = vec![
        format!("{:<16} {:<32} {:<12}", "ID", "NAME", "CREATED"),
        "-".repeat(62),
    ];
    for project in projects {
        lines.push(format!(
            "{:<16} {:<32} {:<12}",
            project.id,
            project.name,
            project.created_at.format("%Y-%m-%d")
        ));
    }
    lines.join("\n")
}

pub fn project_detail(project: &Project) -> String {
    let count = |value: Option<u32>| value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string());
    [
        format!("{:<14} {}", "ID:", project.id),
        format!("{:<14} {}", "Name:", project.name),
        format!("{:<14} {}", "Description:", project.description),
        format!("{:<14} {}", "Created:", project.created_at.format("%Y-%m-%d %H:%M UTC")),
        format!("{:<14} {}", "Tasks:", count(project.task_count)),
        format!("{:<14} {}", "Team members:", count(project.team_member_count)),
    ]
    .join("\n")
}

pub fn score_summary(project_id: &str, summary: &ScoreSummary) -> String {
    let status = status_badge(summary.status);
    let mut line = format!(
        "{}: {} {}/100 {} {}",
        project_id,
        bar(summary.score, BAR_WIDTH),
        format_score(summary.score),
        status.icon,
        status.label
    );
    let icon = trend_icon(summary.trend);
    if !icon.is_empty() {
        line.push(' ');
        line.push_str(icon);
    }
    line
}

/// Header plus the content of the current page
pub fn page(state: &DashboardState) -> String {
    let body = match state.page_view() {
        PageView::Dashboard { error, body } => {
            let mut parts = Vec::new();
            if let Some(error) = error {
                parts.push(format!("⚠️  {}", error));
            }
            parts.push(match body {
                DashboardBody::Loading => "Loading...".to_string(),
                DashboardBody::Report(r) => report(r, &state.trend_series()),
                DashboardBody::Empty => empty_dashboard(),
                DashboardBody::Pending => String::new(),
            });
            parts.join("\n\n")
        }
        PageView::Projects(projects) => projects_table(projects),
        PageView::Static(content) => static_page(&content),
    };

    format!("{}\n{}", header(state), body)
}
