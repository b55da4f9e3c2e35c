use crate::error::{CliError, CliResult};

use pt_client::{
    SprintSubmitter, SubmitOutcome, TaskSubmitter, Transport, UserSuggestionClient,
    token_from_cookies,
};
use pt_config::CsrfConfig;
use pt_core::{
    Clock, Feedback, SprintCard, SprintComposer, TaskComposer, TaskRecord, TaskStatus,
    UserDirectory, UserSuggestion,
};

use std::path::PathBuf;
use std::sync::Arc;

use log::{debug, info, warn};
use serde_json::{Value, json};

/// Pick the CSRF token: explicit flag, then configured token, then the cookie
pub fn resolve_csrf_token(
    flag: Option<&str>,
    config: &CsrfConfig,
    cookie: Option<&str>,
) -> String {
    if let Some(token) = flag {
        return token.to_string();
    }
    if let Some(token) = &config.token {
        return token.clone();
    }
    cookie
        .map(|header| token_from_cookies(header, &config.cookie_name))
        .unwrap_or_default()
}

/// Where the participant suggestion list comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserSource {
    File(PathBuf),
    Project(String),
    Empty,
}

impl UserSource {
    /// A file wins over a project; `default_project` comes from config
    pub fn resolve(
        users: Option<PathBuf>,
        project_id: Option<String>,
        default_project: Option<&str>,
    ) -> Self {
        match (users, project_id) {
            (Some(path), _) => Self::File(path),
            (None, Some(id)) => Self::Project(id),
            (None, None) => default_project
                .map(|id| Self::Project(id.to_string()))
                .unwrap_or(Self::Empty),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SprintRequest {
    pub name: String,
    pub start: String,
    pub end: String,
    pub sprint_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct TaskRequest {
    pub sprint_id: String,
    pub sprint_end: String,
    pub title: String,
    pub due: String,
    pub status: TaskStatus,
    pub participants: Vec<String>,
    pub users: UserSource,
}

/// JSON result of a command plus whether it should exit successfully
#[derive(Debug, Clone, PartialEq)]
pub struct CommandReport {
    pub value: Value,
    pub success: bool,
}

impl CommandReport {
    fn from_outcome(outcome: &SubmitOutcome) -> Self {
        let (label, message) = match outcome {
            SubmitOutcome::Saved => ("saved", None),
            SubmitOutcome::Duplicate => ("duplicate", None),
            SubmitOutcome::Invalid => ("invalid", None),
            SubmitOutcome::Rejected(message) => ("rejected", Some(message)),
            SubmitOutcome::Failed(message) => ("failed", Some(message)),
        };

        Self {
            value: json!({
                "outcome": label,
                "message": message,
                "reloaded": outcome.is_saved(),
            }),
            success: outcome.is_saved(),
        }
    }
}

/// Drives the composers and submitters for one command invocation
pub struct Session<T: Transport> {
    transport: Arc<T>,
    clock: Arc<dyn Clock>,
    sprint_url: Option<String>,
}

impl<T: Transport> Session<T> {
    pub fn new(transport: T, clock: Arc<dyn Clock>) -> Self {
        Self {
            transport: Arc::new(transport),
            clock,
            sprint_url: None,
        }
    }

    /// Default sprint URL when a request does not name one
    pub fn with_sprint_url(mut self, sprint_url: Option<String>) -> Self {
        self.sprint_url = sprint_url;
        self
    }

    /// Fill in the sprint form, then run the existence check and save
    pub async fn create_sprint(
        &self,
        request: SprintRequest,
        feedback: &dyn Feedback,
    ) -> CliResult<CommandReport> {
        let sprint_url = request
            .sprint_url
            .or_else(|| self.sprint_url.clone())
            .ok_or_else(|| {
                CliError::usage("No sprint URL: pass --project-url or set endpoints.sprint_url")
            })?;

        let mut composer = SprintComposer::new(Arc::clone(&self.clock));
        let draft = composer.open();
        draft.input_name(request.name);
        draft.blur_name();
        draft.change_start_date(request.start);
        if draft.end_date_enabled() {
            draft.change_end_date(request.end)?;
        }

        if let Some(error) = draft.name_error() {
            feedback.alert(&error.to_string());
        }

        let payload = composer.submit()?;
        let submitter = SprintSubmitter::new(Arc::clone(&self.transport), sprint_url);
        let outcome = submitter.submit(&payload, feedback).await;

        if outcome.is_saved() {
            composer.close();
        }

        let mut report = CommandReport::from_outcome(&outcome);
        report.value["sprint"] = serde_json::to_value(&payload)?;
        Ok(report)
    }

    /// Compose one task fragment in the sprint and save it
    pub async fn save_task(
        &self,
        request: TaskRequest,
        feedback: &dyn Feedback,
    ) -> CliResult<CommandReport> {
        let directory = self.load_directory(&request.users).await?;

        let mut composer = TaskComposer::new(directory, Arc::clone(&self.clock));
        composer.register_sprint(SprintCard::new(&request.sprint_id, &request.sprint_end));
        let task_id = composer.add_task(&request.sprint_id)?;

        let fragment = composer
            .fragment_mut(&task_id)
            .ok_or_else(|| CliError::usage(format!("Task {task_id} was not created")))?;

        fragment.set_title(request.title);
        fragment.focus_due_date();
        fragment.change_due_date(request.due, feedback);
        fragment.set_status(Some(request.status));

        let mut unassigned = Vec::new();
        for user_id in &request.participants {
            if !fragment.choose_suggestion(user_id) {
                warn!("Participant {user_id} not in the suggestion list or already assigned");
                unassigned.push(user_id.clone());
            }
        }

        let complete = fragment.save_enabled();
        let record = TaskRecord::collect(fragment);
        debug!("Task {task_id} complete={complete}");

        // A disabled save control cannot be clicked
        let outcome = if complete {
            let submitter = TaskSubmitter::new(Arc::clone(&self.transport));
            submitter.save(fragment, feedback).await
        } else {
            warn!("Not saving {task_id}: the save control is disabled");
            SubmitOutcome::Invalid
        };

        let mut report = CommandReport::from_outcome(&outcome);
        report.value["task_id"] = json!(task_id.as_str());
        report.value["complete"] = json!(complete);
        report.value["unassigned"] = json!(unassigned);
        report.value["task"] = serde_json::to_value(&record)?;
        Ok(report)
    }

    /// Participants matching `query`, from a file or the server
    pub async fn search_users(
        &self,
        query: &str,
        source: &UserSource,
    ) -> CliResult<Vec<UserSuggestion>> {
        match source {
            UserSource::Project(project_id) => {
                let client = UserSuggestionClient::new(Arc::clone(&self.transport));
                Ok(client.fetch(project_id, Some(query.trim())).await?)
            }
            _ => Ok(self.load_directory(source).await?.filter_users(query.trim())),
        }
    }

    async fn load_directory(&self, source: &UserSource) -> CliResult<UserDirectory> {
        let directory = match source {
            UserSource::File(path) => {
                let json = std::fs::read_to_string(path).map_err(|source| CliError::Io {
                    path: path.clone(),
                    source,
                })?;
                UserDirectory::from_json(&json)?
            }
            UserSource::Project(project_id) => {
                UserSuggestionClient::new(Arc::clone(&self.transport))
                    .directory(project_id)
                    .await?
            }
            UserSource::Empty => UserDirectory::new(Vec::new()),
        };

        info!("Loaded {} participant suggestions", directory.len());
        Ok(directory)
    }
}
