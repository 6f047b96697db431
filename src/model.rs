//! Health Report Data Model
//!
//! Read-only snapshots exchanged with the health API. Every type here
//! mirrors the JSON shape the backend emits.
//!
//! Enum fields decode unrecognised strings into an `Unknown` variant so the
//! presentation layer can fall back to a neutral visual instead of failing
//! the whole report.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Free-form detail mapping attached to a dimension (key order is preserved).
pub type Details = serde_json::Map<String, serde_json::Value>;

/// A monitored project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_member_count: Option<u32>,
}

/// Overall health classification reported by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    /// 80-100
    Healthy,
    /// 60-79
    Watch,
    /// Below 60
    AtRisk,
    #[serde(other)]
    Unknown,
}

/// Direction of the score relative to the previous calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Improving,
    Declining,
    Stable,
    #[serde(other)]
    Unknown,
}

/// Three-step level shared by risk severity and recommendation priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    High,
    Medium,
    Low,
    #[serde(other)]
    Unknown,
}

/// Severity of a detected risk
pub type Severity = Level;

/// Priority of a recommendation
pub type Priority = Level;

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::High => "high",
            Level::Medium => "medium",
            Level::Low => "low",
            Level::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One weighted sub-metric of the overall score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionScore {
    pub name: String,
    /// 0-100
    pub score: f64,
    /// Fraction of the overall score (weights sum to 1)
    pub weight: f64,
    #[serde(default)]
    pub details: Details,
}

/// Aggregate score with its dimension breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthScore {
    pub overall_score: f64,
    pub status: HealthStatus,
    #[serde(default)]
    pub dimensions: Vec<DimensionScore>,
    #[serde(with = "timestamp")]
    pub calculated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend: Option<Trend>,
}

impl HealthScore {
    /// Whether the server-side status agrees with the client-side score band.
    ///
    /// The server is authoritative; this only exists for diagnostics.
    pub fn status_matches_score(&self) -> bool {
        crate::presentation::ScoreBand::from_score(self.overall_score).status() == self.status
    }
}

/// A detected negative condition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Risk {
    pub id: String,
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub category: String,
    #[serde(with = "timestamp")]
    pub detected_at: DateTime<Utc>,
}

/// A suggested corrective action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: String,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub category: String,
    pub impact: String,
}

/// Everything the dashboard needs for one project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    pub project_id: String,
    pub project_name: String,
    pub health_score: HealthScore,
    #[serde(default)]
    pub risks: Vec<Risk>,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
    #[serde(with = "timestamp")]
    pub generated_at: DateTime<Utc>,
}

/// Body of the lightweight score endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreSummary {
    pub score: f64,
    pub status: HealthStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend: Option<Trend>,
    #[serde(default, with = "optional_timestamp", skip_serializing_if = "Option::is_none")]
    pub calculated_at: Option<DateTime<Utc>>,
}

/// Body of the backend liveness endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
}

impl ServiceStatus {
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy") || self.status.eq_ignore_ascii_case("ok")
    }
}

/// Parse an ISO-8601 timestamp, treating offset-less values as UTC.
///
/// The backend serialises naive datetimes (`2024-03-01T09:30:00.123456`),
/// so RFC 3339 alone is not enough.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => Ok(dt.with_timezone(&Utc)),
        Err(rfc_err) => NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|naive| naive.and_utc())
            .map_err(|_| rfc_err),
    }
}

mod timestamp {
    use chrono::{DateTime, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&ts.to_rfc3339())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_timestamp(&raw)
            .map_err(|e| de::Error::custom(format!("invalid timestamp {:?}: {}", raw, e)))
    }
}

mod optional_timestamp {
    use chrono::{DateTime, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        ts: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match ts {
            Some(ts) => serializer.serialize_str(&ts.to_rfc3339()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        raw.map(|raw| {
            super::parse_timestamp(&raw)
                .map_err(|e| de::Error::custom(format!("invalid timestamp {:?}: {}", raw, e)))
        })
        .transpose()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    const REPORT_JSON: &str = r#"{
        "project_id": "proj-001",
        "project_name": "E-Commerce Platform",
        "health_score": {
            "overall_score": 72.4,
            "status": "watch",
            "dimensions": [
                {
                    "name": "Delivery Health",
                    "score": 65.0,
                    "weight": 0.3,
                    "details": {"overdue_tasks": 3, "completion_rate": 0.45, "blocked_tasks": 1}
                },
                {"name": "Momentum Trend", "score": 80.0, "weight": 0.1}
            ],
            "calculated_at": "2024-03-01T09:30:00.123456",
            "previous_score": 70.0,
            "trend": "improving"
        },
        "risks": [
            {
                "id": "risk-1",
                "title": "Overdue tasks",
                "description": "3 tasks are past due",
                "severity": "critical",
                "category": "delivery",
                "detected_at": "2024-03-01T09:30:00+02:00"
            }
        ],
        "recommendations": [
            {
                "id": "rec-1",
                "title": "Re-plan sprint",
                "description": "Move overdue work",
                "priority": "high",
                "category": "delivery",
                "impact": "+5 points"
            }
        ],
        "generated_at": "2024-03-01T09:30:01"
    }"#;

    #[test]
    fn test_decode_report() {
        let report: HealthReport = serde_json::from_str(REPORT_JSON).unwrap();

        assert_eq!(report.project_id, "proj-001");
        assert_eq!(report.health_score.status, HealthStatus::Watch);
        assert_eq!(report.health_score.trend, Some(Trend::Improving));
        assert_eq!(report.health_score.previous_score, Some(70.0));
        assert_eq!(report.health_score.dimensions.len(), 2);
        assert!(report.health_score.dimensions[1].details.is_empty());
        assert_eq!(report.recommendations[0].priority, Level::High);
    }

    #[test]
    fn test_unknown_enum_values_decode_to_unknown() {
        let report: HealthReport = serde_json::from_str(REPORT_JSON).unwrap();
        assert_eq!(report.risks[0].severity, Level::Unknown);

        let status: HealthStatus = serde_json::from_str("\"critical\"").unwrap();
        assert_eq!(status, HealthStatus::Unknown);

        let trend: Trend = serde_json::from_str("\"sideways\"").unwrap();
        assert_eq!(trend, Trend::Unknown);
    }

    #[test]
    fn test_details_preserve_server_order() {
        let report: HealthReport = serde_json::from_str(REPORT_JSON).unwrap();
        let keys: Vec<_> = report.health_score.dimensions[0].details.keys().cloned().collect();
        assert_eq!(keys, vec!["overdue_tasks", "completion_rate", "blocked_tasks"]);
    }

    #[test]
    fn test_naive_and_offset_timestamps() {
        let naive = parse_timestamp("2024-03-01T09:30:00.123456").unwrap();
        assert_eq!(naive.to_rfc3339(), "2024-03-01T09:30:00.123456+00:00");

        let whole = parse_timestamp("2024-03-01T09:30:00").unwrap();
        assert_eq!(whole.timestamp(), naive.timestamp());

        let offset = parse_timestamp("2024-03-01T09:30:00+02:00").unwrap();
        assert_eq!(offset.to_rfc3339(), "2024-03-01T07:30:00+00:00");

        assert!(parse_timestamp("yesterday").is_err());
    }

    #[test]
    fn test_project_optional_counts() {
        let list: Vec<Project> = serde_json::from_str(
            r#"[{"id": "p1", "name": "Alpha", "description": "", "created_at": "2024-01-05T10:00:00"}]"#,
        )
        .unwrap();
        assert_eq!(list[0].task_count, None);

        let detail: Project = serde_json::from_str(
            r#"{"id": "p1", "name": "Alpha", "description": "", "created_at": "2024-01-05T10:00:00",
                "task_count": 12, "team_member_count": 4}"#,
        )
        .unwrap();
        assert_eq!(detail.task_count, Some(12));
        assert_eq!(detail.team_member_count, Some(4));
    }

    #[test]
    fn test_score_summary_without_trend() {
        let summary: ScoreSummary =
            serde_json::from_str(r#"{"score": 55.5, "status": "at_risk", "trend": null}"#).unwrap();
        assert_eq!(summary.status, HealthStatus::AtRisk);
        assert_eq!(summary.trend, None);
        assert_eq!(summary.calculated_at, None);
    }

    #[test]
    fn test_status_matches_score() {
        let report: HealthReport = serde_json::from_str(REPORT_JSON).unwrap();
        assert!(report.health_score.status_matches_score());

        let mut drifted = report.health_score.clone();
        drifted.status = HealthStatus::Healthy;
        assert!(!drifted.status_matches_score());
    }
}
