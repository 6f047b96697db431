//! Error Types
//!
//! Client errors carry just enough to build the banner text the dashboard
//! shows: the HTTP status when one exists, the server's `detail` message
//! when it sent one, and the transport message otherwise.

use thiserror::Error;

/// Failure of a single API call
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    /// Non-2xx response
    #[error("HTTP {status}: {message}")]
    Http {
        status: u16,
        /// Server-provided detail, if the body carried one
        detail: Option<String>,
        /// Text shown to the user (detail, or a generic status line)
        message: String,
    },

    /// The request never produced a response (connect, DNS, timeout, CORS)
    #[error("Network Error: {0}")]
    Transport(String),

    /// A 2xx response whose body did not match the expected shape
    #[error("Invalid response: {0}")]
    Decode(String),
}

impl ClientError {
    /// Build an HTTP error from a status and the raw response body
    pub fn http(status: u16, body: &str) -> Self {
        let detail = detail_from_body(body);
        let message = detail
            .clone()
            .unwrap_or_else(|| format!("Request failed with status code {}", status));
        ClientError::Http { status, detail, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Human-readable message for the error banner
    pub fn display_message(&self) -> String {
        self.to_string()
    }
}

/// Extract the `detail` field of an error body.
///
/// String details are returned as-is; structured ones (validation errors)
/// are rendered as compact JSON.
pub fn detail_from_body(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) if s.trim().is_empty() => None,
        serde_json::Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// A failed dashboard load, labelled with what was being loaded
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoadError {
    #[error("Failed to load projects: {0}")]
    Projects(ClientError),

    #[error("Failed to load health report: {0}")]
    Report(ClientError),
}

impl LoadError {
    pub fn client_error(&self) -> &ClientError {
        match self {
            LoadError::Projects(e) | LoadError::Report(e) => e,
        }
    }
}

/// Result type for API calls
pub type ClientResult<T> = Result<T, ClientError>;
