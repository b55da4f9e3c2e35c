use crate::TaskFragment;

use serde::{Deserialize, Serialize};

/// Flat task payload accepted by the save-task endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub title: String,
    pub due_date: String,
    pub status: String,
    pub sprint_id: String,
    pub participants: Vec<String>,
}

impl TaskRecord {
    /// Harvest the current field values of a fragment.
    ///
    /// Values are taken as-is; the title is not trimmed.
    pub fn collect(fragment: &TaskFragment) -> Self {
        Self {
            title: fragment.title().to_string(),
            due_date: fragment.due_date().to_string(),
            status: fragment
                .status()
                .map(|status| status.as_str().to_string())
                .unwrap_or_default(),
            sprint_id: fragment.sprint_id().to_string(),
            participants: fragment.participant_ids(),
        }
    }
}
