use crate::outcome::report;
use crate::{ApiRequest, ClientResult, SaveResponse, SubmitOutcome, Transport};

use pt_core::{Feedback, TaskFragment, TaskRecord};

use log::{info, warn};

/// Fixed endpoint tasks are saved to
pub const SAVE_TASK_PATH: &str = "/save-task/";

/// Saves composed task fragments
pub struct TaskSubmitter<T: Transport> {
    transport: T,
}

impl<T: Transport> TaskSubmitter<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// POST a task record as JSON
    pub async fn post(&self, record: &TaskRecord) -> ClientResult<SaveResponse> {
        let request = ApiRequest::post_json(SAVE_TASK_PATH, serde_json::to_value(record)?);
        self.transport.send(request).await?.into_json()
    }

    /// The fragment's save action.
    ///
    /// Only title and due date are required here; status and participants
    /// are left to the save-button gating. The save control is disabled
    /// before the request goes out and is not re-enabled afterwards.
    pub async fn save(
        &self,
        fragment: &mut TaskFragment,
        feedback: &dyn Feedback,
    ) -> SubmitOutcome {
        let record = TaskRecord::collect(fragment);

        if record.title.is_empty() || record.due_date.is_empty() {
            warn!("Refusing to save {} without title or due date", fragment.id());
            feedback.alert("Task title and due date are required.");
            return SubmitOutcome::Invalid;
        }

        fragment.disable_save();
        info!("Saving task {} in sprint {}", fragment.id(), record.sprint_id);

        report(self.post(&record).await, "task", feedback)
    }
}
