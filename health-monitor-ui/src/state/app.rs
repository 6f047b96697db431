//! Application State
//!
//! Reactive wrapper around the dashboard controller. Every user action
//! goes through the controller, and the commands it returns are run here
//! with `spawn_local`.

use leptos::*;

use health_monitor::controller::LG_BREAKPOINT;
use health_monitor::{Command, DashboardState, Page};

use crate::api;

/// How long a notice stays on screen (ms)
const NOTICE_TIMEOUT_MS: u32 = 3000;

/// Application state provided to all components
#[derive(Clone, Copy)]
pub struct AppState {
    /// Page, projects, selection, report and loading flags
    pub dashboard: RwSignal<DashboardState>,
    /// Short-lived settings feedback
    pub notice: RwSignal<Option<Notice>>,
}

/// A transient message shown in the corner
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub message: String,
    pub success: bool,
}

/// Provide application state to the component tree
pub fn provide_app_state() -> AppState {
    let state = AppState {
        dashboard: create_rw_signal(DashboardState::new()),
        notice: create_rw_signal(None),
    };

    provide_context(state);
    state
}

/// Current window width in CSS pixels
pub fn viewport_width() -> u32 {
    window()
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .map(|w| w as u32)
        .unwrap_or(LG_BREAKPOINT)
}

impl AppState {
    /// Size the layout and load the initial page
    pub fn mount(&self) {
        let width = viewport_width();
        self.update(|s| s.mount(Some(width)));
    }

    pub fn navigate_from_sidebar(&self, page: Page) {
        let width = viewport_width();
        self.update(|s| s.navigate_from_sidebar(page, width));
    }

    pub fn select_project(&self, project_id: String) {
        self.update(|s| s.select_project(project_id));
    }

    pub fn open_project(&self, project_id: String) {
        self.update(|s| s.open_project(project_id));
    }

    pub fn resize(&self) {
        let width = viewport_width();
        self.dashboard.update(|s| s.resize(width));
    }

    pub fn toggle_sidebar(&self) {
        self.dashboard.update(|s| s.toggle_sidebar());
    }

    pub fn close_sidebar(&self) {
        self.dashboard.update(|s| s.close_sidebar());
    }

    /// Apply a transition and run the commands it produced
    fn update(&self, transition: impl FnOnce(&mut DashboardState) -> Vec<Command>) {
        let commands = self.dashboard.try_update(transition).unwrap_or_default();
        self.dispatch(commands);
    }

    /// Run commands concurrently; stale completions are dropped by the
    /// controller
    fn dispatch(&self, commands: Vec<Command>) {
        for command in commands {
            let state = *self;
            spawn_local(async move {
                match command {
                    Command::LoadProjects(ticket) => {
                        let result = api::fetch_projects().await;
                        let follow_up = state
                            .dashboard
                            .try_update(|s| s.finish_projects(&ticket, result))
                            .unwrap_or_default();
                        state.dispatch(follow_up);
                    }
                    Command::LoadReport(ticket) => {
                        let result = api::fetch_health_report(&ticket.project_id).await;
                        state.dashboard.update(|s| {
                            if !s.finish_report(&ticket, result) {
                                web_sys::console::log_1(
                                    &format!("Discarded stale report for {}", ticket.project_id)
                                        .into(),
                                );
                            }
                        });
                    }
                }
            });
        }
    }

    /// Show a success notice (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.show_notice(message, true);
    }

    /// Show an error notice (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.show_notice(message, false);
    }

    fn show_notice(&self, message: &str, success: bool) {
        self.notice.set(Some(Notice {
            message: message.to_string(),
            success,
        }));

        let notice_signal = self.notice;
        gloo_timers::callback::Timeout::new(NOTICE_TIMEOUT_MS, move || {
            notice_signal.set(None);
        })
        .forget();
    }
}
