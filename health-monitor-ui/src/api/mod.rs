//! Health API access from the browser.

pub mod client;

pub use client::{
    check_health, clear_api_base, fetch_health_report, fetch_projects, get_api_base, set_api_base,
};
