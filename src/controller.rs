//! Dashboard View Controller
//!
//! Pure state machine behind the dashboard. It owns the page, the project
//! list, the selected project and the latest health report, and it never
//! performs I/O itself: every transition returns the [`Command`]s the host
//! (the Leptos app or the CLI session) must execute, and the host feeds the
//! results back through [`DashboardState::finish_projects`] and
//! [`DashboardState::finish_report`].
//!
//! ## Freshness
//!
//! Every fetch is tagged with a ticket ([`ProjectsTicket`] or
//! [`ReportTicket`]). Starting a new fetch bumps that kind's generation
//! counter, and completions carrying an older generation are dropped. A
//! slow response for a project the user has already switched away from
//! never replaces the newer report, and a superseded project list never
//! overwrites the list or the loading flag of the fetch that replaced it.

use crate::error::{ClientResult, LoadError};
use crate::model::{HealthReport, Project};
use crate::pages::{self, Page, StaticPage};
use crate::trend::{self, TrendPoint};

/// Viewport width (px) at which the sidebar is pinned open
pub const LG_BREAKPOINT: u32 = 1024;

/// Identifies one in-flight project list fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectsTicket {
    pub generation: u64,
}

/// Identifies one in-flight report fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportTicket {
    pub generation: u64,
    pub project_id: String,
}

/// Side effect requested by a state transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    LoadProjects(ProjectsTicket),
    LoadReport(ReportTicket),
}

/// What the dashboard body shows below the error banner
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DashboardBody<'a> {
    /// Report fetch in flight
    Loading,
    /// Populated dashboard
    Report(&'a HealthReport),
    /// Nothing loaded and nothing loading
    Empty,
    /// Project list still loading, no report yet
    Pending,
}

/// State of the header project selector
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProjectSelector<'a> {
    Loading,
    NoProjects,
    Choices {
        projects: &'a [Project],
        selected: Option<&'a str>,
    },
}

/// Renderable content of the current page
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageView<'a> {
    Dashboard {
        error: Option<&'a str>,
        body: DashboardBody<'a>,
    },
    Projects(&'a [Project]),
    Static(StaticPage),
}

/// Dashboard state
#[derive(Debug, Clone)]
pub struct DashboardState {
    current_page: Page,
    projects: Vec<Project>,
    selected_project_id: Option<String>,
    health_report: Option<HealthReport>,
    loading_projects: bool,
    loading_report: bool,
    error: Option<String>,
    sidebar_open: bool,
    projects_generation: u64,
    report_generation: u64,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardState {
    /// Fresh state on the dashboard page, project list not yet requested
    pub fn new() -> Self {
        Self {
            current_page: Page::Dashboard,
            projects: Vec::new(),
            selected_project_id: None,
            health_report: None,
            loading_projects: true,
            loading_report: false,
            error: None,
            sidebar_open: false,
            projects_generation: 0,
            report_generation: 0,
        }
    }

    /// Start with a project already selected, so the first mount fetches
    /// its report instead of auto-selecting the first project.
    pub fn with_selected_project(mut self, project_id: impl Into<String>) -> Self {
        self.selected_project_id = Some(project_id.into());
        self
    }

    // ============ Transitions ============

    /// Initial mount: size the layout and run the entry effects of the
    /// current page.
    pub fn mount(&mut self, viewport_width: Option<u32>) -> Vec<Command> {
        if let Some(width) = viewport_width {
            self.resize(width);
        }
        self.enter_page()
    }

    /// Switch pages. Entering the dashboard reloads the project list and,
    /// when a project is selected, its report.
    pub fn navigate(&mut self, page: Page) -> Vec<Command> {
        if page == self.current_page {
            return Vec::new();
        }
        tracing::debug!(from = %self.current_page, to = %page, "navigate");
        self.current_page = page;
        self.enter_page()
    }

    /// Navigation triggered from the sidebar; closes it on narrow viewports
    pub fn navigate_from_sidebar(&mut self, page: Page, viewport_width: u32) -> Vec<Command> {
        let commands = self.navigate(page);
        if viewport_width < LG_BREAKPOINT {
            self.sidebar_open = false;
        }
        commands
    }

    /// Change the selected project. A different id on the dashboard
    /// triggers a fresh report fetch.
    pub fn select_project(&mut self, project_id: impl Into<String>) -> Vec<Command> {
        let project_id = project_id.into();
        if self.selected_project_id.as_deref() == Some(project_id.as_str()) {
            return Vec::new();
        }
        tracing::debug!(project_id = %project_id, "select project");
        self.selected_project_id = Some(project_id);

        if self.current_page == Page::Dashboard {
            self.begin_report_load().into_iter().collect()
        } else {
            Vec::new()
        }
    }

    /// Open a project from the projects page: select it and show the dashboard
    pub fn open_project(&mut self, project_id: impl Into<String>) -> Vec<Command> {
        let mut commands = self.select_project(project_id);
        commands.extend(self.navigate(Page::Dashboard));
        commands
    }

    /// Apply the result of a [`Command::LoadProjects`].
    ///
    /// A superseded ticket is ignored and yields no commands.
    pub fn finish_projects(
        &mut self,
        ticket: &ProjectsTicket,
        result: ClientResult<Vec<Project>>,
    ) -> Vec<Command> {
        if ticket.generation != self.projects_generation {
            tracing::debug!(
                generation = ticket.generation,
                current = self.projects_generation,
                "discarding superseded project list"
            );
            return Vec::new();
        }

        self.loading_projects = false;

        match result {
            Ok(projects) => {
                tracing::info!(count = projects.len(), "projects loaded");
                self.projects = projects;

                match (&self.selected_project_id, self.projects.first()) {
                    (None, Some(first)) => {
                        let first_id = first.id.clone();
                        self.select_project(first_id)
                    }
                    _ => Vec::new(),
                }
            }
            Err(e) => {
                let error = LoadError::Projects(e);
                tracing::warn!(error = %error, "project list failed");
                self.error = Some(error.to_string());
                Vec::new()
            }
        }
    }

    /// Apply the result of a [`Command::LoadReport`].
    ///
    /// Returns `false` when the ticket was superseded and the result was
    /// discarded.
    pub fn finish_report(
        &mut self,
        ticket: &ReportTicket,
        result: ClientResult<HealthReport>,
    ) -> bool {
        if ticket.generation != self.report_generation {
            tracing::debug!(
                project_id = %ticket.project_id,
                generation = ticket.generation,
                current = self.report_generation,
                "discarding superseded health report"
            );
            return false;
        }

        self.loading_report = false;

        match result {
            Ok(report) => {
                if !report.health_score.status_matches_score() {
                    tracing::debug!(
                        project_id = %report.project_id,
                        score = report.health_score.overall_score,
                        status = ?report.health_score.status,
                        "server status differs from score band"
                    );
                }
                tracing::info!(
                    project_id = %report.project_id,
                    score = report.health_score.overall_score,
                    risks = report.risks.len(),
                    recommendations = report.recommendations.len(),
                    "health report loaded"
                );
                self.health_report = Some(report);
            }
            Err(e) => {
                let error = LoadError::Report(e);
                tracing::warn!(project_id = %ticket.project_id, error = %error, "health report failed");
                self.error = Some(error.to_string());
            }
        }
        true
    }

    /// Track the viewport; the sidebar is pinned open on wide screens
    pub fn resize(&mut self, viewport_width: u32) {
        self.sidebar_open = viewport_width >= LG_BREAKPOINT;
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn close_sidebar(&mut self) {
        self.sidebar_open = false;
    }

    fn enter_page(&mut self) -> Vec<Command> {
        if self.current_page != Page::Dashboard {
            return Vec::new();
        }

        let mut commands = vec![self.begin_projects_load()];
        commands.extend(self.begin_report_load());
        commands
    }

    fn begin_projects_load(&mut self) -> Command {
        self.projects_generation += 1;
        self.loading_projects = true;
        self.error = None;
        Command::LoadProjects(ProjectsTicket {
            generation: self.projects_generation,
        })
    }

    fn begin_report_load(&mut self) -> Option<Command> {
        let project_id = self.selected_project_id.clone()?;
        self.report_generation += 1;
        self.loading_report = true;
        self.error = None;
        Some(Command::LoadReport(ReportTicket {
            generation: self.report_generation,
            project_id,
        }))
    }

    // ============ Views ============

    pub fn current_page(&self) -> Page {
        self.current_page
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn selected_project_id(&self) -> Option<&str> {
        self.selected_project_id.as_deref()
    }

    pub fn selected_project(&self) -> Option<&Project> {
        let id = self.selected_project_id.as_deref()?;
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn health_report(&self) -> Option<&HealthReport> {
        self.health_report.as_ref()
    }

    pub fn is_loading_projects(&self) -> bool {
        self.loading_projects
    }

    pub fn is_loading_report(&self) -> bool {
        self.loading_report
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    pub fn projects_generation(&self) -> u64 {
        self.projects_generation
    }

    pub fn report_generation(&self) -> u64 {
        self.report_generation
    }

    /// Two-point chart series for the held report
    pub fn trend_series(&self) -> Vec<TrendPoint> {
        trend::series_for(self.health_report.as_ref())
    }

    pub fn dashboard_body(&self) -> DashboardBody<'_> {
        if self.loading_report {
            DashboardBody::Loading
        } else if let Some(report) = &self.health_report {
            DashboardBody::Report(report)
        } else if self.loading_projects {
            DashboardBody::Pending
        } else {
            DashboardBody::Empty
        }
    }

    pub fn project_selector(&self) -> ProjectSelector<'_> {
        if self.loading_projects {
            ProjectSelector::Loading
        } else if self.projects.is_empty() {
            ProjectSelector::NoProjects
        } else {
            ProjectSelector::Choices {
                projects: &self.projects,
                selected: self.selected_project_id.as_deref(),
            }
        }
    }

    /// Content for the current page
    pub fn page_view(&self) -> PageView<'_> {
        self.view_of(self.current_page)
    }

    fn view_of(&self, page: Page) -> PageView<'_> {
        match page {
            Page::Dashboard => PageView::Dashboard {
                error: self.error(),
                body: self.dashboard_body(),
            },
            Page::Projects => PageView::Projects(&self.projects),
            Page::Reports => PageView::Static(pages::REPORTS),
            Page::Analytics => PageView::Static(pages::ANALYTICS),
            Page::Settings => PageView::Static(pages::SETTINGS),
            Page::Help => PageView::Static(pages::HELP),
            Page::About => PageView::Static(pages::ABOUT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use crate::model::fixtures;

    fn ticket_of(commands: &[Command]) -> ReportTicket {
        commands
            .iter()
            .find_map(|c| match c {
                Command::LoadReport(t) => Some(t.clone()),
                _ => None,
            })
            .expect("no report command")
    }

    fn list_ticket_of(commands: &[Command]) -> ProjectsTicket {
        commands
            .iter()
            .find_map(|c| match c {
                Command::LoadProjects(t) => Some(*t),
                _ => None,
            })
            .expect("no project list command")
    }

    fn loaded_dashboard() -> (DashboardState, ReportTicket) {
        let mut state = DashboardState::new();
        let commands = state.mount(Some(1280));
        assert_eq!(commands.len(), 1);
        let list = list_ticket_of(&commands);

        let commands = state.finish_projects(&list, Ok(vec![
            fixtures::project("p1", "Alpha"),
            fixtures::project("p2", "Beta"),
        ]));
        (state, ticket_of(&commands))
    }

    #[test]
    fn test_mount_loads_projects_and_auto_selects_first() {
        let (state, ticket) = loaded_dashboard();

        assert_eq!(ticket.project_id, "p1");
        assert_eq!(state.selected_project_id(), Some("p1"));
        assert!(state.is_loading_report());
        assert!(!state.is_loading_projects());
        assert!(state.sidebar_open());
        assert_eq!(state.dashboard_body(), DashboardBody::Loading);
    }

    #[test]
    fn test_report_success_populates_dashboard() {
        let (mut state, ticket) = loaded_dashboard();
        let report = fixtures::report("p1", 85.0, Some(70.0));

        assert!(state.finish_report(&ticket, Ok(report.clone())));
        assert_eq!(state.dashboard_body(), DashboardBody::Report(&report));
        assert_eq!(state.error(), None);

        let series = state.trend_series();
        assert_eq!(series.len(), 2);
        assert_eq!((series[0].score, series[1].score), (70.0, 85.0));
    }

    #[test]
    fn test_failed_report_keeps_previous_report() {
        let (mut state, ticket) = loaded_dashboard();
        let report = fixtures::report("p1", 85.0, None);
        state.finish_report(&ticket, Ok(report.clone()));

        let ticket = ticket_of(&state.select_project("p2"));
        let applied = state.finish_report(
            &ticket,
            Err(ClientError::http(404, r#"{"detail": "Project not found"}"#)),
        );

        assert!(applied);
        assert_eq!(state.health_report(), Some(&report));
        let error = state.error().unwrap();
        assert!(error.contains("Project not found"));
        assert!(error.starts_with("Failed to load health report"));
        assert!(!state.is_loading_report());
    }

    #[test]
    fn test_stale_report_is_discarded() {
        let (mut state, first) = loaded_dashboard();
        let second = ticket_of(&state.select_project("p2"));
        assert!(second.generation > first.generation);

        let newer = fixtures::report("p2", 55.0, None);
        assert!(state.finish_report(&second, Ok(newer.clone())));

        // The slow response for p1 arrives last
        let applied = state.finish_report(&first, Ok(fixtures::report("p1", 90.0, None)));
        assert!(!applied);
        assert_eq!(state.health_report(), Some(&newer));
    }

    #[test]
    fn test_stale_failure_does_not_set_error() {
        let (mut state, first) = loaded_dashboard();
        let _second = state.select_project("p2");

        state.finish_report(&first, Err(ClientError::Transport("timed out".into())));
        assert_eq!(state.error(), None);
        assert!(state.is_loading_report());
    }

    #[test]
    fn test_superseded_project_list_failure_is_ignored() {
        let (mut state, ticket) = loaded_dashboard();
        state.finish_report(&ticket, Ok(fixtures::report("p1", 81.0, None)));

        // Come back twice while the first list fetch is still pending
        state.navigate(Page::Help);
        let older = list_ticket_of(&state.navigate(Page::Dashboard));
        state.navigate(Page::Help);
        let commands = state.navigate(Page::Dashboard);
        let newer = list_ticket_of(&commands);
        assert!(newer.generation > older.generation);

        state.finish_projects(&newer, Ok(vec![fixtures::project("p1", "Alpha")]));
        state.finish_report(&ticket_of(&commands), Ok(fixtures::report("p1", 84.0, None)));

        let follow_up =
            state.finish_projects(&older, Err(ClientError::Transport("stale timeout".into())));
        assert!(follow_up.is_empty());
        assert_eq!(state.error(), None);
        assert_eq!(state.projects().len(), 1);
        assert!(matches!(state.dashboard_body(), DashboardBody::Report(_)));
    }

    #[test]
    fn test_superseded_project_list_keeps_loading() {
        let mut state = DashboardState::new();
        let older = list_ticket_of(&state.mount(None));
        state.navigate(Page::About);
        let newer = list_ticket_of(&state.navigate(Page::Dashboard));

        state.finish_projects(&older, Ok(Vec::new()));
        assert!(state.is_loading_projects());
        assert_eq!(state.dashboard_body(), DashboardBody::Pending);
        assert_eq!(state.project_selector(), ProjectSelector::Loading);

        state.finish_projects(&newer, Ok(Vec::new()));
        assert!(!state.is_loading_projects());
        assert_eq!(state.dashboard_body(), DashboardBody::Empty);
        assert_eq!(state.projects_generation(), newer.generation);
    }

    #[test]
    fn test_reselecting_same_project_is_noop() {
        let (mut state, ticket) = loaded_dashboard();
        assert!(state.select_project("p1").is_empty());
        assert_eq!(state.report_generation(), ticket.generation);
    }

    #[test]
    fn test_projects_failure() {
        let mut state = DashboardState::new();
        let list = list_ticket_of(&state.mount(None));
        let commands =
            state.finish_projects(&list, Err(ClientError::Transport("connection refused".into())));

        assert!(commands.is_empty());
        assert_eq!(
            state.error(),
            Some("Failed to load projects: Network Error: connection refused")
        );
        assert_eq!(state.dashboard_body(), DashboardBody::Empty);
        assert_eq!(state.project_selector(), ProjectSelector::NoProjects);
    }

    #[test]
    fn test_empty_project_list() {
        let mut state = DashboardState::new();
        let list = list_ticket_of(&state.mount(None));
        assert_eq!(state.dashboard_body(), DashboardBody::Pending);
        assert_eq!(state.project_selector(), ProjectSelector::Loading);

        assert!(state.finish_projects(&list, Ok(Vec::new())).is_empty());
        assert_eq!(state.selected_project_id(), None);
        assert_eq!(state.dashboard_body(), DashboardBody::Empty);
    }

    #[test]
    fn test_next_load_clears_error() {
        let mut state = DashboardState::new();
        let list = list_ticket_of(&state.mount(None));
        state.finish_projects(&list, Err(ClientError::Transport("down".into())));
        assert!(state.error().is_some());

        state.navigate(Page::Help);
        assert!(state.error().is_some());

        let commands = state.navigate(Page::Dashboard);
        assert!(matches!(commands.as_slice(), [Command::LoadProjects(_)]));
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_selection_off_dashboard_defers_fetch() {
        let (mut state, _) = loaded_dashboard();
        state.navigate(Page::Projects);

        let commands = state.open_project("p2");
        assert_eq!(state.current_page(), Page::Dashboard);
        assert_eq!(commands.len(), 2);
        assert!(matches!(commands[0], Command::LoadProjects(_)));
        assert_eq!(ticket_of(&commands).project_id, "p2");
    }

    #[test]
    fn test_reentering_dashboard_refetches_selected_report() {
        let (mut state, ticket) = loaded_dashboard();
        state.finish_report(&ticket, Ok(fixtures::report("p1", 81.0, None)));

        assert!(state.navigate(Page::Settings).is_empty());
        assert!(state.navigate(Page::Settings).is_empty());

        let commands = state.navigate(Page::Dashboard);
        assert!(matches!(commands[0], Command::LoadProjects(_)));
        assert_eq!(ticket_of(&commands).project_id, "p1");
    }

    #[test]
    fn test_every_page_renders_content() {
        let (mut state, _) = loaded_dashboard();
        for page in Page::ALL {
            state.navigate(page);
            match state.page_view() {
                PageView::Dashboard { .. } => assert_eq!(page, Page::Dashboard),
                PageView::Projects(projects) => {
                    assert_eq!(page, Page::Projects);
                    assert_eq!(projects.len(), 2);
                }
                PageView::Static(content) => {
                    assert_eq!(content.heading, page.title());
                    assert!(!content.cards.is_empty());
                }
            }
        }
    }

    #[test]
    fn test_sidebar_layout() {
        let mut state = DashboardState::new();
        state.mount(Some(800));
        assert!(!state.sidebar_open());

        state.toggle_sidebar();
        assert!(state.sidebar_open());

        state.navigate_from_sidebar(Page::Reports, 800);
        assert!(!state.sidebar_open());

        state.resize(1024);
        assert!(state.sidebar_open());
        state.navigate_from_sidebar(Page::About, 1400);
        assert!(state.sidebar_open());

        state.close_sidebar();
        assert!(!state.sidebar_open());
    }

    #[test]
    fn test_preselected_project_skips_auto_select() {
        let mut state = DashboardState::new().with_selected_project("p2");
        let commands = state.mount(None);
        assert!(matches!(commands[0], Command::LoadProjects(_)));
        assert_eq!(ticket_of(&commands).project_id, "p2");

        let list = list_ticket_of(&commands);
        let follow_up = state.finish_projects(&list, Ok(vec![
            fixtures::project("p1", "Alpha"),
            fixtures::project("p2", "Beta"),
        ]));
        assert!(follow_up.is_empty());
        assert_eq!(state.selected_project_id(), Some("p2"));
    }

    #[test]
    fn test_selected_project_lookup() {
        let (state, _) = loaded_dashboard();
        assert_eq!(state.selected_project().map(|p| p.name.as_str()), Some("Alpha"));
        match state.project_selector() {
            ProjectSelector::Choices { projects, selected } => {
                assert_eq!(projects.len(), 2);
                assert_eq!(selected, Some("p1"));
            }
            other => panic!("unexpected selector {:?}", other),
        }
    }
}
