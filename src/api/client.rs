//! Health API REST Client
//!
//! HTTP client for the project health backend.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Client;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use super::{
    endpoint, health_report_path, health_score_path, normalize_base_url, project_path,
    projects_path, service_status_path, HealthApi, DEFAULT_API_BASE_URL, DEFAULT_TIMEOUT_SECS,
};
use crate::error::{ClientError, ClientResult};
use crate::model::{HealthReport, Project, ScoreSummary, ServiceStatus};

/// Configuration for the API client
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Base URL of the backend (e.g., "http://localhost:8001")
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Health API client
pub struct ApiClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl ApiClient {
    /// Create a new client with the given configuration
    pub fn new(config: ApiClientConfig) -> ClientResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: normalize_base_url(&config.base_url),
            timeout: config.timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = endpoint(&self.base_url, path);
        let request_id = Uuid::new_v4();
        let started = Instant::now();

        tracing::debug!(%request_id, method = "GET", path, "API request");

        let response = self.client.get(&url).send().await.map_err(|e| {
            let error = self.transport_error(&e);
            tracing::error!(%request_id, path, error = %error, "API request failed");
            error
        })?;

        let status = response.status();
        tracing::debug!(
            %request_id,
            path,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "API response"
        );

        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(&e))?;

        if !status.is_success() {
            let error = ClientError::http(status.as_u16(), &body);
            tracing::error!(%request_id, path, error = %error, "API error response");
            return Err(error);
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(%request_id, path, error = %e, "API response did not decode");
            ClientError::Decode(e.to_string())
        })
    }

    fn transport_error(&self, e: &reqwest::Error) -> ClientError {
        if e.is_timeout() {
            ClientError::Transport(timeout_message(self.timeout))
        } else {
            ClientError::Transport(e.to_string())
        }
    }
}

fn timeout_message(timeout: Duration) -> String {
    format!("timeout of {}ms exceeded", timeout.as_millis())
}

#[async_trait]
impl HealthApi for ApiClient {
    async fn list_projects(&self) -> ClientResult<Vec<Project>> {
        self.get(&projects_path()).await
    }

    async fn get_project(&self, project_id: &str) -> ClientResult<Project> {
        self.get(&project_path(project_id)).await
    }

    async fn get_health_report(&self, project_id: &str) -> ClientResult<HealthReport> {
        self.get(&health_report_path(project_id)).await
    }

    async fn get_health_score(&self, project_id: &str) -> ClientResult<ScoreSummary> {
        self.get(&health_score_path(project_id)).await
    }

    async fn service_status(&self) -> ClientResult<ServiceStatus> {
        self.get(&service_status_path()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ApiClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8001");
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_base_url_is_normalized() {
        let client = ApiClient::new(ApiClientConfig {
            base_url: "http://localhost:9000/".to_string(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(client.base_url(), "http://localhost:9000");
    }

    #[test]
    fn test_timeout_message() {
        assert_eq!(timeout_message(Duration::from_secs(10)), "timeout of 10000ms exceeded");
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_transport_error() {
        let client = ApiClient::new(ApiClientConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            timeout: Duration::from_secs(2),
        })
        .unwrap();

        let err = client.list_projects().await.unwrap_err();
        assert!(matches!(err, ClientError::Transport(_)));
        assert!(err.display_message().starts_with("Network Error: "));
    }
}
