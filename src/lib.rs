//! # Health Monitor
//!
//! Client side of the AI-powered project health monitor: a typed client
//! for the health backend, the dashboard view controller, and the
//! presentation rules shared by the browser UI and the terminal.
//!
//! ## Modules
//!
//! - [`model`]: Projects, health scores, risks and recommendations
//! - [`api`]: Route table and the native REST client
//! - [`controller`]: Dashboard state machine
//! - [`presentation`]: Score bands, badges and icon tables
//! - [`pages`]: Page catalogue and static page content
//! - [`render`]: Plain-text renditions for the CLI
//!
//! Everything except the HTTP client, the session driver and the config
//! loader builds without the `native` feature, which is how the wasm UI
//! consumes this crate.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use health_monitor::{ApiClient, ApiClientConfig, Session};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ApiClient::new(ApiClientConfig::default())?;
//!     let mut session = Session::new(client);
//!
//!     // Loads the project list, selects the first project, fetches its report
//!     session.mount(None).await;
//!
//!     println!("{}", health_monitor::render::page(session.state()));
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod controller;
pub mod error;
pub mod model;
pub mod pages;
pub mod presentation;
pub mod render;
pub mod trend;

#[cfg(feature = "native")]
pub mod config;
#[cfg(feature = "native")]
pub mod session;

// Re-export top-level types for convenience
pub use model::{
    DimensionScore, HealthReport, HealthScore, HealthStatus, Level, Priority, Project,
    Recommendation, Risk, ScoreSummary, ServiceStatus, Severity, Trend,
};

pub use controller::{
    Command, DashboardBody, DashboardState, PageView, ProjectSelector, ProjectsTicket, ReportTicket,
};

pub use error::{ClientError, ClientResult, LoadError};

pub use pages::{Page, StaticPage};

pub use presentation::{Badge, ScoreBand, Tone};

pub use trend::TrendPoint;

#[cfg(feature = "native")]
pub use api::{ApiClient, ApiClientConfig, HealthApi};

#[cfg(feature = "native")]
pub use config::{Config, ConfigError, LogFormat};

#[cfg(feature = "native")]
pub use session::Session;
