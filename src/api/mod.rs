//! Health API
//!
//! Read-only access to the project health backend.
//!
//! # Endpoints
//!
//! - `GET /api/projects` - List projects
//! - `GET /api/projects/{id}` - Get a project
//! - `GET /api/projects/{id}/health` - Full health report
//! - `GET /api/projects/{id}/health/score` - Score summary
//! - `GET /health` - Backend liveness
//!
//! Path builders live here so the native client and the browser client
//! share one route table.
//!
//! # Example
//!
//! ```rust,ignore
//! use health_monitor::api::{ApiClient, ApiClientConfig, HealthApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ApiClient::new(ApiClientConfig::default())?;
//!     for project in client.list_projects().await? {
//!         println!("{} {}", project.id, project.name);
//!     }
//!     Ok(())
//! }
//! ```

#[cfg(feature = "native")]
pub mod client;

#[cfg(feature = "native")]
pub use client::{ApiClient, ApiClientConfig};

/// Backend used when nothing else is configured
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8001";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub fn projects_path() -> String {
    "/api/projects".to_string()
}

pub fn project_path(project_id: &str) -> String {
    format!("/api/projects/{}", urlencoding::encode(project_id))
}

pub fn health_report_path(project_id: &str) -> String {
    format!("{}/health", project_path(project_id))
}

pub fn health_score_path(project_id: &str) -> String {
    format!("{}/health/score", project_path(project_id))
}

pub fn service_status_path() -> String {
    "/health".to_string()
}

/// Trim whitespace and trailing slashes so paths can be appended directly
pub fn normalize_base_url(base_url: &str) -> String {
    base_url.trim().trim_end_matches('/').to_string()
}

/// Join a base URL and an absolute path
pub fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{}", normalize_base_url(base_url), path)
}

#[cfg(feature = "native")]
mod health_api {
    use async_trait::async_trait;

    use crate::error::ClientResult;
    use crate::model::{HealthReport, Project, ScoreSummary, ServiceStatus};

    /// The five backend reads
    #[async_trait]
    pub trait HealthApi: Send + Sync {
        async fn list_projects(&self) -> ClientResult<Vec<Project>>;

        async fn get_project(&self, project_id: &str) -> ClientResult<Project>;

        async fn get_health_report(&self, project_id: &str) -> ClientResult<HealthReport>;

        async fn get_health_score(&self, project_id: &str) -> ClientResult<ScoreSummary>;

        async fn service_status(&self) -> ClientResult<ServiceStatus>;
    }
}

#[cfg(feature = "native")]
pub use health_api::HealthApi;
