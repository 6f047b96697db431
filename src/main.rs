//! Health Monitor CLI
//!
//! Command-line interface for the project health backend:
//! - List and inspect projects
//! - Render a project's health report
//! - Drive the dashboard and render any page
//! - Check backend status
//!
//! # Configuration
//!
//! Settings come from `--config PATH`, `$CONFIG_DIR/health-monitor/config.toml`
//! or `./health-monitor.toml`, then `HEALTH_MONITOR_*` environment variables,
//! then `--api-url`. `RUST_LOG` overrides the configured log level.

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use health_monitor::config::{generate_default_config, Config, LogFormat};
use health_monitor::{
    render, ApiClient, DashboardState, HealthApi, LoadError, Page, Session,
};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "health-monitor")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Project health scores, risks and recommendations from the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Health API base URL (overrides config and environment)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,

    /// Config file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List projects
    Projects,

    /// Show one project
    Project {
        /// Project ID
        id: String,
    },

    /// Render the full health report of a project
    Report {
        /// Project ID
        id: String,
    },

    /// Show the score summary of a project
    Score {
        /// Project ID
        id: String,
    },

    /// Load the dashboard and render a page
    Dashboard {
        /// Project to select instead of the first one
        #[arg(short, long)]
        project: Option<String>,
        /// Page to show (dashboard, projects, reports, analytics, settings, help, about)
        #[arg(long, default_value = "dashboard")]
        page: Page,
        /// Print the navigation index above the page
        #[arg(long)]
        nav: bool,
    },

    /// Check backend status
    Status,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Commands::Config { output } = &cli.command {
        return write_default_config(output.as_ref());
    }

    let loaded = Config::load_from(cli.config.as_deref())?;
    let mut config = loaded.config;
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }
    init_logging(&config);
    for warning in &loaded.warnings {
        tracing::warn!("{}", warning);
    }

    tracing::debug!(base_url = %config.api.base_url, "health-monitor v{}", env!("CARGO_PKG_VERSION"));
    let client = ApiClient::new(config.api_client_config())?;

    match cli.command {
        Commands::Projects => {
            let projects = client
                .list_projects()
                .await
                .unwrap_or_else(|e| fail(LoadError::Projects(e)));
            output(cli.format, &projects, || render::projects_table(&projects))?;
        }

        Commands::Project { id } => {
            let project = client
                .get_project(&id)
                .await
                .unwrap_or_else(|e| fail(format!("Failed to load project: {}", e)));
            output(cli.format, &project, || render::project_detail(&project))?;
        }

        Commands::Report { id } => {
            let report = client
                .get_health_report(&id)
                .await
                .unwrap_or_else(|e| fail(LoadError::Report(e)));
            let trend = health_monitor::trend::synthesize(&report);
            output(cli.format, &report, || render::report(&report, &trend))?;
        }

        Commands::Score { id } => {
            let summary = client
                .get_health_score(&id)
                .await
                .unwrap_or_else(|e| fail(format!("Failed to load health score: {}", e)));
            output(cli.format, &summary, || render::score_summary(&id, &summary))?;
        }

        Commands::Dashboard { project, page, nav } => {
            let state = match project {
                Some(id) => DashboardState::new().with_selected_project(id),
                None => DashboardState::new(),
            };

            let mut session = Session::with_state(client, state);
            session.mount(None).await;
            session.navigate(page).await;
            let state = session.state();

            match cli.format {
                OutputFormat::Json => {
                    let snapshot = serde_json::json!({
                        "page": state.current_page().id(),
                        "projects": state.projects(),
                        "selected_project_id": state.selected_project_id(),
                        "health_report": state.health_report(),
                        "trend": state.trend_series(),
                        "error": state.error(),
                    });
                    println!("{}", serde_json::to_string_pretty(&snapshot)?);
                }
                OutputFormat::Table => {
                    if nav {
                        println!("{}\n", render::sidebar(state.current_page()));
                    }
                    println!("{}", render::page(state));
                }
            }

            if let Some(error) = state.error() {
                fail(error);
            }
        }

        Commands::Status => {
            let base_url = client.base_url().to_string();
            match client.service_status().await {
                Ok(status) => {
                    output(cli.format, &status, || {
                        format!(
                            "API Status: {}\nService: {}\nURL: {}",
                            status.status,
                            status.service.as_deref().unwrap_or("-"),
                            base_url
                        )
                    })?;
                    if !status.is_healthy() {
                        std::process::exit(1);
                    }
                }
                Err(e) => {
                    eprintln!("Cannot reach health API at {}", base_url);
                    fail(e);
                }
            }
        }

        Commands::Config { .. } => {}
    }

    Ok(())
}

/// Print JSON or the table rendition
fn output<T: Serialize>(
    format: OutputFormat,
    value: &T,
    table: impl FnOnce() -> String,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Table => println!("{}", table()),
    }
    Ok(())
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("{}", message);
    std::process::exit(1);
}

fn write_default_config(path: Option<&PathBuf>) -> anyhow::Result<()> {
    let content = generate_default_config();
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write config to {:?}", path))?;
            println!("Config written to {:?}", path);
        }
        None => print!("{}", content),
    }
    Ok(())
}

/// Install the stderr subscriber; `RUST_LOG` wins over the config level
fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("health_monitor={}", config.logging.level)));

    let registry = tracing_subscriber::registry().with(filter);
    match config.logging.format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}
