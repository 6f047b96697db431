//! HTTP API Client
//!
//! Functions for communicating with the health REST API.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use health_monitor::api::{
    endpoint, health_report_path, normalize_base_url, projects_path, service_status_path,
    DEFAULT_API_BASE_URL,
};
use health_monitor::{ClientError, ClientResult, HealthReport, Project, ServiceStatus};

/// Local storage key holding a user-chosen API URL
pub const API_URL_STORAGE_KEY: &str = "health_monitor_api_url";

/// API base URL baked in at build time, or the local default
pub fn default_api_base() -> &'static str {
    option_env!("HEALTH_MONITOR_API_URL").unwrap_or(DEFAULT_API_BASE_URL)
}

/// Stored URL when one is set, otherwise the build-time default
pub fn resolve_api_base(stored: Option<String>) -> String {
    let url = stored
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| default_api_base().to_string());
    normalize_base_url(&url)
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let stored = local_storage().and_then(|storage| storage.get_item(API_URL_STORAGE_KEY).ok()?);
    resolve_api_base(stored)
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(API_URL_STORAGE_KEY, &normalize_base_url(url));
    }
}

/// Forget the stored URL and fall back to the default
pub fn clear_api_base() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(API_URL_STORAGE_KEY);
    }
}

// ============ API Functions ============

async fn get_json<T: DeserializeOwned>(path: &str) -> ClientResult<T> {
    let url = endpoint(&get_api_base(), path);
    web_sys::console::log_1(&format!("API Request: GET {}", path).into());

    let response = Request::get(&url)
        .header("Content-Type", "application/json")
        .send()
        .await
        .map_err(|e| log_failure(path, ClientError::Transport(e.to_string())))?;

    let status = response.status();
    let ok = response.ok();
    let body = response
        .text()
        .await
        .map_err(|e| log_failure(path, ClientError::Transport(e.to_string())))?;

    if !ok {
        return Err(log_failure(path, ClientError::http(status, &body)));
    }

    web_sys::console::log_1(&format!("API Response: {} {}", status, path).into());

    serde_json::from_str(&body).map_err(|e| log_failure(path, ClientError::Decode(e.to_string())))
}

fn log_failure(path: &str, error: ClientError) -> ClientError {
    web_sys::console::error_1(&format!("API Error: {} {}", path, error).into());
    error
}

/// Fetch all projects
pub async fn fetch_projects() -> ClientResult<Vec<Project>> {
    get_json(&projects_path()).await
}

/// Fetch the full health report of a project
pub async fn fetch_health_report(project_id: &str) -> ClientResult<HealthReport> {
    get_json(&health_report_path(project_id)).await
}

/// Check backend liveness
pub async fn check_health() -> ClientResult<ServiceStatus> {
    get_json(&service_status_path()).await
}
