//! Application Pages
//!
//! Top-level page components.

pub mod dashboard;
pub mod info;
pub mod projects;
pub mod settings;

pub use dashboard::DashboardPage;
pub use info::StaticContent;
pub use projects::ProjectsPage;
pub use settings::SettingsPage;
