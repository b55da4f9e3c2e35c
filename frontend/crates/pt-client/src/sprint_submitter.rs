use crate::outcome::report;
use crate::{ApiRequest, ClientResult, ExistsResponse, SaveResponse, SubmitOutcome, Transport};

use pt_core::{Feedback, SprintPayload};

use log::{error, info};

/// Creates sprints: a name-uniqueness pre-check followed by the save request.
///
/// The two requests are not atomic; uniqueness is ultimately the server's job.
pub struct SprintSubmitter<T: Transport> {
    transport: T,
    sprint_url: String,
}

impl<T: Transport> SprintSubmitter<T> {
    /// `sprint_url` serves both the existence check (GET) and the save (POST)
    pub fn new(transport: T, sprint_url: impl Into<String>) -> Self {
        Self {
            transport,
            sprint_url: sprint_url.into(),
        }
    }

    pub fn sprint_url(&self) -> &str {
        &self.sprint_url
    }

    /// Whether the server already has a sprint with this name.
    ///
    /// Fails open: any network, status, or parse failure counts as
    /// "does not exist" so a flaky check never blocks submission.
    pub async fn sprint_exists(&self, sprint_name: &str) -> bool {
        match self.check_exists(sprint_name).await {
            Ok(exists) => exists,
            Err(e) => {
                error!("Error checking sprint existence: {e}");
                false
            }
        }
    }

    async fn check_exists(&self, sprint_name: &str) -> ClientResult<bool> {
        let request = ApiRequest::get(&self.sprint_url)
            .with_query("sprint_name", sprint_name)
            .with_query("check_only", "true");

        let response: ExistsResponse = self.transport.send(request).await?.into_json()?;
        Ok(response.exists)
    }

    /// POST the sprint as JSON
    pub async fn save(&self, payload: &SprintPayload) -> ClientResult<SaveResponse> {
        let request = ApiRequest::post_json(&self.sprint_url, serde_json::to_value(payload)?);
        self.transport.send(request).await?.into_json()
    }

    /// Full submit flow: existence check, then save, reporting every result
    /// through `feedback`
    pub async fn submit(
        &self,
        payload: &SprintPayload,
        feedback: &dyn Feedback,
    ) -> SubmitOutcome {
        if self.sprint_exists(&payload.sprint_name).await {
            info!("Sprint '{}' already exists", payload.sprint_name);
            feedback.alert("A sprint with this name already exists.");
            return SubmitOutcome::Duplicate;
        }

        report(self.save(payload).await, "sprint", feedback)
    }
}
