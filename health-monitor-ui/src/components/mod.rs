//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod dimension_breakdown;
pub mod error_banner;
pub mod health_score;
pub mod loading;
pub mod mobile_menu_button;
pub mod recommendations;
pub mod risk_summary;
pub mod sidebar;
pub mod stat_card;
pub mod toast;
pub mod trend_chart;

pub use dimension_breakdown::DimensionBreakdown;
pub use error_banner::ErrorBanner;
pub use health_score::HealthScoreGauge;
pub use loading::{EmptyState, Loading};
pub use mobile_menu_button::MobileMenuButton;
pub use recommendations::Recommendations;
pub use risk_summary::RiskSummary;
pub use sidebar::Sidebar;
pub use stat_card::StatCard;
pub use toast::Toast;
pub use trend_chart::TrendChart;
