//! Trend Series
//!
//! The backend does not expose score history yet, so the dashboard charts a
//! two-point series built from the report's previous and current score.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::model::HealthReport;

/// Distance between the synthesized previous point and the current one
pub const PREVIOUS_POINT_OFFSET_DAYS: i64 = 7;

/// Drop applied to the current score when the server sent no previous score
pub const MISSING_PREVIOUS_DROP: f64 = 5.0;

/// One point on the health trend chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub date: DateTime<Utc>,
    pub score: f64,
}

impl TrendPoint {
    /// Axis label, e.g. `Mar 01`
    pub fn label(&self) -> String {
        self.date.format("%b %d").to_string()
    }
}

/// Build the chart series for a report.
///
/// Returns two points in chronological order: the previous score one week
/// before `calculated_at`, then the current score at `calculated_at`.
pub fn synthesize(report: &HealthReport) -> Vec<TrendPoint> {
    let score = &report.health_score;
    let previous = score
        .previous_score
        .unwrap_or_else(|| (score.overall_score - MISSING_PREVIOUS_DROP).max(0.0));

    vec![
        TrendPoint {
            date: score.calculated_at - Duration::days(PREVIOUS_POINT_OFFSET_DAYS),
            score: previous,
        },
        TrendPoint {
            date: score.calculated_at,
            score: score.overall_score,
        },
    ]
}

/// Series for an optional report; empty when nothing is loaded
pub fn series_for(report: Option<&HealthReport>) -> Vec<TrendPoint> {
    report.map(synthesize).unwrap_or_default()
}
