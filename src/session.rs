//! Dashboard Session
//!
//! Runs the controller's commands against a [`HealthApi`] and feeds the
//! results back until the state settles.

use std::collections::VecDeque;

use crate::api::HealthApi;
use crate::controller::{Command, DashboardState, ProjectsTicket, ReportTicket};
use crate::error::ClientResult;
use crate::model::{HealthReport, Project};
use crate::pages::Page;

/// Result of executing one [`Command`]
#[derive(Debug)]
pub enum Completion {
    Projects(ProjectsTicket, ClientResult<Vec<Project>>),
    Report(ReportTicket, ClientResult<HealthReport>),
}

/// Execute a single command
pub async fn fetch(api: &dyn HealthApi, command: Command) -> Completion {
    match command {
        Command::LoadProjects(ticket) => Completion::Projects(ticket, api.list_projects().await),
        Command::LoadReport(ticket) => {
            let result = api.get_health_report(&ticket.project_id).await;
            Completion::Report(ticket, result)
        }
    }
}

/// Feed a completion back into the state, returning any follow-up commands
pub fn apply(state: &mut DashboardState, completion: Completion) -> Vec<Command> {
    match completion {
        Completion::Projects(ticket, result) => state.finish_projects(&ticket, result),
        Completion::Report(ticket, result) => {
            state.finish_report(&ticket, result);
            Vec::new()
        }
    }
}

/// A controller bound to an API
pub struct Session<A> {
    api: A,
    state: DashboardState,
}

impl<A: HealthApi> Session<A> {
    pub fn new(api: A) -> Self {
        Self::with_state(api, DashboardState::new())
    }

    pub fn with_state(api: A, state: DashboardState) -> Self {
        Self { api, state }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn into_state(self) -> DashboardState {
        self.state
    }

    pub async fn mount(&mut self, viewport_width: Option<u32>) {
        let commands = self.state.mount(viewport_width);
        self.run(commands).await;
    }

    pub async fn navigate(&mut self, page: Page) {
        let commands = self.state.navigate(page);
        self.run(commands).await;
    }

    pub async fn select_project(&mut self, project_id: &str) {
        let commands = self.state.select_project(project_id);
        self.run(commands).await;
    }

    pub async fn open_project(&mut self, project_id: &str) {
        let commands = self.state.open_project(project_id);
        self.run(commands).await;
    }

    /// Execute commands in order, including the ones their results trigger
    pub async fn run(&mut self, commands: Vec<Command>) {
        let mut queue: VecDeque<Command> = commands.into();

        while let Some(command) = queue.pop_front() {
            tracing::debug!(?command, "executing");
            let completion = fetch(&self.api, command).await;
            queue.extend(apply(&mut self.state, completion));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::DashboardBody;
    use crate::error::ClientError;
    use crate::model::{fixtures, ScoreSummary, ServiceStatus};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct FakeApi {
        projects: Vec<Project>,
        reports: HashMap<String, HealthReport>,
        fail_projects: bool,
        calls: Mutex<Vec<String>>,
    }

    impl FakeApi {
        fn with_projects(ids: &[&str]) -> Self {
            let projects = ids
                .iter()
                .map(|id| fixtures::project(id, &id.to_uppercase()))
                .collect();
            let reports = ids
                .iter()
                .enumerate()
                .map(|(i, id)| (id.to_string(), fixtures::report(id, 90.0 - 10.0 * i as f64, None)))
                .collect();
            Self { projects, reports, ..Default::default() }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: String) {
            self.calls.lock().unwrap().push(call);
        }
    }

    #[async_trait]
    impl HealthApi for FakeApi {
        async fn list_projects(&self) -> ClientResult<Vec<Project>> {
            self.record("projects".to_string());
            if self.fail_projects {
                return Err(ClientError::Transport("connection refused".into()));
            }
            Ok(self.projects.clone())
        }

        async fn get_project(&self, project_id: &str) -> ClientResult<Project> {
            self.projects
                .iter()
                .find(|p| p.id == project_id)
                .cloned()
                .ok_or_else(|| ClientError::http(404, r#"{"detail": "Project not found"}"#))
        }

        async fn get_health_report(&self, project_id: &str) -> ClientResult<HealthReport> {
            self.record(format!("report:{}", project_id));
            self.reports
                .get(project_id)
                .cloned()
                .ok_or_else(|| ClientError::http(404, r#"{"detail": "Project not found"}"#))
        }

        async fn get_health_score(&self, _project_id: &str) -> ClientResult<ScoreSummary> {
            Err(ClientError::http(501, ""))
        }

        async fn service_status(&self) -> ClientResult<ServiceStatus> {
            Ok(ServiceStatus { status: "healthy".into(), service: None })
        }
    }

    #[tokio::test]
    async fn test_mount_settles_with_first_report() {
        let mut session = Session::new(FakeApi::with_projects(&["p1", "p2"]));
        session.mount(None).await;

        assert_eq!(session.api().calls(), vec!["projects", "report:p1"]);
        let state = session.state();
        assert_eq!(state.selected_project_id(), Some("p1"));
        assert!(matches!(
            state.dashboard_body(),
            DashboardBody::Report(report) if report.project_id == "p1"
        ));
    }

    #[tokio::test]
    async fn test_select_then_navigate() {
        let mut session = Session::new(FakeApi::with_projects(&["p1", "p2"]));
        session.mount(None).await;
        session.select_project("p2").await;
        assert_eq!(session.state().health_report().unwrap().project_id, "p2");

        session.navigate(Page::About).await;
        session.open_project("p1").await;
        assert_eq!(session.state().current_page(), Page::Dashboard);
        assert_eq!(
            session.api().calls(),
            vec!["projects", "report:p1", "report:p2", "projects", "report:p1"]
        );
    }

    #[tokio::test]
    async fn test_missing_report_keeps_error() {
        let mut api = FakeApi::with_projects(&["p1", "p2"]);
        api.reports.remove("p2");
        let mut session = Session::new(api);
        session.mount(None).await;
        session.select_project("p2").await;

        let state = session.state();
        assert_eq!(state.health_report().unwrap().project_id, "p1");
        assert_eq!(
            state.error(),
            Some("Failed to load health report: HTTP 404: Project not found")
        );
    }

    #[tokio::test]
    async fn test_projects_failure_stops_loading() {
        let api = FakeApi { fail_projects: true, ..Default::default() };
        let mut session = Session::new(api);
        session.mount(None).await;

        assert_eq!(session.api().calls(), vec!["projects"]);
        assert_eq!(session.state().dashboard_body(), DashboardBody::Empty);
        assert!(session.state().error().unwrap().contains("connection refused"));
    }

    #[tokio::test]
    async fn test_out_of_order_completion_is_discarded() {
        let api = FakeApi::with_projects(&["p1", "p2"]);
        let mut state = DashboardState::new().with_selected_project("p1");
        let mut commands = state.mount(None);
        let first = commands.pop().unwrap();

        // Switch before the first report lands
        let second = state.select_project("p2").pop().unwrap();

        let newer = fetch(&api, second).await;
        let older = fetch(&api, first).await;
        apply(&mut state, newer);
        apply(&mut state, older);

        assert_eq!(state.health_report().unwrap().project_id, "p2");
        assert!(!state.is_loading_report());
    }

    #[tokio::test]
    async fn test_superseded_project_list_is_discarded() {
        let api = FakeApi::with_projects(&["p1"]);
        let failing = FakeApi { fail_projects: true, ..Default::default() };
        let mut state = DashboardState::new();

        let older = state.mount(None).pop().unwrap();
        state.navigate(Page::Settings);
        let newer = state.navigate(Page::Dashboard).pop().unwrap();

        let follow_up = apply(&mut state, fetch(&api, newer).await);
        let report = follow_up.into_iter().next().unwrap();
        apply(&mut state, fetch(&api, report).await);
        assert!(apply(&mut state, fetch(&failing, older).await).is_empty());

        assert_eq!(state.error(), None);
        assert_eq!(state.health_report().unwrap().project_id, "p1");
        assert_eq!(failing.calls(), vec!["projects"]);
    }
}
