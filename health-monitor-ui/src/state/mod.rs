//! State Management
//!
//! Application state and the command runner.

pub mod app;

pub use app::{provide_app_state, viewport_width, AppState, Notice};
