//! Presentation Tables
//!
//! Exhaustive lookup tables from report values to visual tokens (tone,
//! icon, label). Both the Leptos components and the terminal renderer read
//! from here, so a value is always shown the same way.
//!
//! Every table is total: unknown enum variants and unrecognised categories
//! fall back to a neutral entry.

use crate::model::{DimensionScore, HealthStatus, Level, Trend};

/// Score at or above which a value is considered good
pub const GOOD_THRESHOLD: f64 = 80.0;

/// Score at or above which a value is considered caution (below is risk)
pub const CAUTION_THRESHOLD: f64 = 60.0;

/// Radius of the score gauge circle
pub const GAUGE_RADIUS: f64 = 70.0;

/// Circumference of the score gauge (2 * pi * 70, rounded as drawn)
pub const GAUGE_CIRCUMFERENCE: f64 = 439.8;

/// Maximum number of detail chips shown under a dimension
pub const MAX_DETAIL_CHIPS: usize = 3;

pub const NO_RISKS_TITLE: &str = "No risks detected";
pub const NO_RISKS_SUBTITLE: &str = "Project is in good health!";
pub const NO_RECOMMENDATIONS_TITLE: &str = "No recommendations";
pub const NO_RECOMMENDATIONS_SUBTITLE: &str = "Project is performing well!";
pub const NO_TREND_DATA: &str = "Historical data will appear here";
pub const NO_PROJECT_TITLE: &str = "No Project Selected";
pub const NO_PROJECT_SUBTITLE: &str =
    "Select a project from the dropdown above to view its health report";

/// Semantic color of a visual element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Green,
    Yellow,
    Red,
    Blue,
    /// Neutral fallback
    Gray,
}

impl Tone {
    pub fn name(&self) -> &'static str {
        match self {
            Tone::Green => "green",
            Tone::Yellow => "yellow",
            Tone::Red => "red",
            Tone::Blue => "blue",
            Tone::Gray => "gray",
        }
    }

    /// Hex stroke color for canvas drawing
    pub fn hex(&self) -> &'static str {
        match self {
            Tone::Green => "#22c55e",
            Tone::Yellow => "#eab308",
            Tone::Red => "#ef4444",
            Tone::Blue => "#3b82f6",
            Tone::Gray => "#6b7280",
        }
    }
}

/// Tone, icon and label for one value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub tone: Tone,
    pub icon: &'static str,
    pub label: &'static str,
}

/// Score band at the 80/60 thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreBand {
    Good,
    Caution,
    Risk,
}

impl ScoreBand {
    /// Band for a 0-100 score. Non-finite scores land in `Risk`.
    pub fn from_score(score: f64) -> Self {
        if score >= GOOD_THRESHOLD {
            ScoreBand::Good
        } else if score >= CAUTION_THRESHOLD {
            ScoreBand::Caution
        } else {
            ScoreBand::Risk
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            ScoreBand::Good => Tone::Green,
            ScoreBand::Caution => Tone::Yellow,
            ScoreBand::Risk => Tone::Red,
        }
    }

    /// Status the server is expected to report for a score in this band
    pub fn status(&self) -> HealthStatus {
        match self {
            ScoreBand::Good => HealthStatus::Healthy,
            ScoreBand::Caution => HealthStatus::Watch,
            ScoreBand::Risk => HealthStatus::AtRisk,
        }
    }

    pub fn badge(&self) -> Badge {
        status_badge(self.status())
    }
}

/// Badge for the server-reported health status
pub fn status_badge(status: HealthStatus) -> Badge {
    match status {
        HealthStatus::Healthy => Badge { tone: Tone::Green, icon: "🟢", label: "Healthy" },
        HealthStatus::Watch => Badge { tone: Tone::Yellow, icon: "🟡", label: "Watch" },
        HealthStatus::AtRisk => Badge { tone: Tone::Red, icon: "🔴", label: "At Risk" },
        HealthStatus::Unknown => Badge { tone: Tone::Gray, icon: "⚪", label: "Unknown" },
    }
}

/// Badge for a risk severity or recommendation priority
pub fn level_badge(level: Level) -> Badge {
    match level {
        Level::High => Badge { tone: Tone::Red, icon: "🔴", label: "high" },
        Level::Medium => Badge { tone: Tone::Yellow, icon: "🟡", label: "medium" },
        Level::Low => Badge { tone: Tone::Blue, icon: "🔵", label: "low" },
        Level::Unknown => Badge { tone: Tone::Gray, icon: "⚪", label: "unknown" },
    }
}

/// Icon shown next to the previous -> current score chip
pub fn trend_icon(trend: Option<Trend>) -> &'static str {
    match trend {
        Some(Trend::Improving) => "📈",
        Some(Trend::Declining) => "📉",
        Some(Trend::Stable) => "➡️",
        Some(Trend::Unknown) | None => "",
    }
}

/// Icon for a risk category
pub fn risk_category_icon(category: &str) -> &'static str {
    match category {
        "delivery" => "📦",
        "workload" => "👥",
        "sentiment" => "💬",
        "risk" => "⚠️",
        "momentum" => "📊",
        _ => "🔍",
    }
}

/// Icon for a recommendation category
pub fn recommendation_category_icon(category: &str) -> &'static str {
    match category {
        "delivery" => "📦",
        "workload" => "👥",
        "sentiment" => "💬",
        "risk" => "⚠️",
        "general" => "📋",
        _ => "💡",
    }
}

/// Icon for a dimension, matched on its display name
pub fn dimension_icon(name: &str) -> &'static str {
    if name.contains("Delivery") {
        "📦"
    } else if name.contains("Workload") {
        "⚖️"
    } else if name.contains("Sentiment") || name.contains("Communication") {
        "💬"
    } else if name.contains("Risk") {
        "🚩"
    } else if name.contains("Momentum") {
        "⚡"
    } else {
        "📊"
    }
}

/// Score clamped to the drawable 0-100 range
pub fn clamp_score(score: f64) -> f64 {
    if score.is_nan() {
        0.0
    } else {
        score.clamp(0.0, 100.0)
    }
}

/// Length of the filled gauge arc for a score
pub fn gauge_arc_length(score: f64) -> f64 {
    clamp_score(score) / 100.0 * GAUGE_CIRCUMFERENCE
}

/// `stroke-dasharray` value for the score gauge
pub fn gauge_dasharray(score: f64) -> String {
    format!("{:.1} {}", gauge_arc_length(score), GAUGE_CIRCUMFERENCE)
}

/// Score as shown on cards (no decimals)
pub fn format_score(score: f64) -> String {
    format!("{:.0}", score)
}

/// Weight fraction as a percentage label
pub fn format_weight(weight: f64) -> String {
    format!("Weight: {:.0}%", weight * 100.0)
}

/// `1 risk` / `3 risks`
pub fn risk_count_label(count: usize) -> String {
    format!("{} {}", count, if count == 1 { "risk" } else { "risks" })
}

/// `1 action` / `3 actions`
pub fn action_count_label(count: usize) -> String {
    format!("{} {}", count, if count == 1 { "action" } else { "actions" })
}

/// A `key: value` chip rendered under a dimension
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailChip {
    pub key: String,
    pub value: String,
}

impl std::fmt::Display for DetailChip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.key, self.value)
    }
}

/// Up to three detail chips for a dimension, skipping diagnostic keys
pub fn detail_chips(dimension: &DimensionScore) -> Vec<DetailChip> {
    dimension
        .details
        .iter()
        .filter(|(key, _)| !key.contains("error") && !key.contains("message"))
        .take(MAX_DETAIL_CHIPS)
        .map(|(key, value)| DetailChip {
            key: key.replace('_', " "),
            value: display_value(value),
        })
        .collect()
}

/// Render a JSON value the way a person reads it (strings unquoted)
pub fn display_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Array(items) => items
            .iter()
            .map(display_value)
            .collect::<Vec<_>>()
            .join(","),
        other => other.to_string(),
    }
}
