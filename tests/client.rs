use health_monitor::{
    ApiClient, ApiClientConfig, ClientError, DashboardBody, HealthApi, HealthStatus, Session, Trend,
};
use httpmock::prelude::*;
use std::time::Duration;

const PROJECTS: &str = r#"[
    {"id": "proj-001", "name": "E-Commerce Platform", "description": "Online store", "created_at": "2024-01-15T10:00:00", "task_count": 42, "team_member_count": 6},
    {"id": "proj-002", "name": "Mobile App", "description": "iOS and Android", "created_at": "2024-02-01T09:00:00Z"}
]"#;

const REPORT: &str = r#"{
    "project_id": "proj-001",
    "project_name": "E-Commerce Platform",
    "health_score": {
        "overall_score": 72.5,
        "status": "watch",
        "dimensions": [
            {"name": "Delivery Health", "score": 65.0, "weight": 0.3, "details": {"overdue_tasks": 3}},
            {"name": "Team Workload Balance", "score": 80.0, "weight": 0.25, "details": {}}
        ],
        "calculated_at": "2024-03-01T12:00:00.000123",
        "previous_score": 68.0,
        "trend": "improving"
    },
    "risks": [
        {"id": "r1", "title": "Overdue tasks", "description": "3 tasks are late", "severity": "high", "category": "delivery", "detected_at": "2024-03-01T12:00:00"}
    ],
    "recommendations": [],
    "generated_at": "2024-03-01T12:00:01"
}"#;

fn client(server: &MockServer) -> ApiClient {
    ApiClient::new(ApiClientConfig {
        base_url: server.base_url(),
        timeout: Duration::from_secs(5),
    })
    .unwrap()
}

async fn mock_json<'a>(
    server: &'a MockServer,
    path: &str,
    status: u16,
    body: &'static str,
) -> httpmock::Mock<'a> {
    let path = path.to_string();
    server
        .mock_async(|when, then| {
            when.method(GET).path(path);
            then.status(status)
                .header("content-type", "application/json")
                .body(body);
        })
        .await
}

#[tokio::test]
async fn list_projects_decodes_optional_counts() {
    let server = MockServer::start_async().await;
    let mock = mock_json(&server, "/api/projects", 200, PROJECTS).await;

    let projects = client(&server).list_projects().await.unwrap();

    mock.assert_async().await;
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].task_count, Some(42));
    assert_eq!(projects[1].team_member_count, None);
}

#[tokio::test]
async fn health_report_decodes() {
    let server = MockServer::start_async().await;
    let _m = mock_json(&server, "/api/projects/proj-001/health", 200, REPORT).await;

    let report = client(&server).get_health_report("proj-001").await.unwrap();

    assert_eq!(report.health_score.status, HealthStatus::Watch);
    assert_eq!(report.health_score.trend, Some(Trend::Improving));
    assert_eq!(report.health_score.dimensions.len(), 2);
    assert_eq!(report.risks.len(), 1);
    assert!(report.recommendations.is_empty());
}

#[tokio::test]
async fn not_found_uses_server_detail() {
    let server = MockServer::start_async().await;
    let _m = mock_json(
        &server,
        "/api/projects/missing/health",
        404,
        r#"{"detail": "Project not found"}"#,
    )
    .await;

    let err = client(&server).get_health_report("missing").await.unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert_eq!(err.display_message(), "HTTP 404: Project not found");
}

#[tokio::test]
async fn server_error_without_detail() {
    let server = MockServer::start_async().await;
    let _m = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/projects");
            then.status(500).body("Internal Server Error");
        })
        .await;

    let err = client(&server).list_projects().await.unwrap_err();
    assert_eq!(err.display_message(), "HTTP 500: Request failed with status code 500");
}

#[tokio::test]
async fn malformed_body_is_decode_error() {
    let server = MockServer::start_async().await;
    let _m = mock_json(&server, "/api/projects/proj-001", 200, r#"{"id": 7}"#).await;

    let err = client(&server).get_project("proj-001").await.unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)));
}

#[tokio::test]
async fn score_and_status_endpoints() {
    let server = MockServer::start_async().await;
    let _score = mock_json(
        &server,
        "/api/projects/proj-001/health/score",
        200,
        r#"{"score": 81.0, "status": "healthy", "trend": "stable", "calculated_at": "2024-03-01T12:00:00"}"#,
    )
    .await;
    let _health = mock_json(
        &server,
        "/health",
        200,
        r#"{"status": "healthy", "service": "project-health-monitor"}"#,
    )
    .await;

    let api = client(&server);
    let summary = api.get_health_score("proj-001").await.unwrap();
    assert_eq!(summary.status, HealthStatus::Healthy);
    assert_eq!(summary.trend, Some(Trend::Stable));

    let status = api.service_status().await.unwrap();
    assert!(status.is_healthy());
    assert_eq!(status.service.as_deref(), Some("project-health-monitor"));
}

#[tokio::test]
async fn session_mount_fetches_list_then_first_report() {
    let server = MockServer::start_async().await;
    let projects = mock_json(&server, "/api/projects", 200, PROJECTS).await;
    let report = mock_json(&server, "/api/projects/proj-001/health", 200, REPORT).await;

    let mut session = Session::new(client(&server));
    session.mount(Some(1280)).await;

    projects.assert_hits_async(1).await;
    report.assert_hits_async(1).await;

    let state = session.state();
    assert!(state.sidebar_open());
    assert_eq!(state.selected_project_id(), Some("proj-001"));
    assert!(matches!(state.dashboard_body(), DashboardBody::Report(_)));
    assert_eq!(state.trend_series()[0].score, 68.0);
}
