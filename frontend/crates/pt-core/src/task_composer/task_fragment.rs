use crate::dates::parse_input_date;
use crate::{
    Clock, DueDateBounds, DueDateError, Feedback, ParticipantTag, SprintCard, SuggestionList,
    TaskId, TaskStatus, UserDirectory, UserSuggestion, validate_due_date,
};

use std::sync::Arc;

use log::{debug, error, warn};

/// One unsaved task being composed inside a sprint.
///
/// Every mutation ends by recomputing the save-button state from scratch.
#[derive(Debug, Clone)]
pub struct TaskFragment {
    id: TaskId,
    sprint: SprintCard,
    directory: UserDirectory,
    clock: Arc<dyn Clock>,

    title: String,
    assign_query: String,
    suggestions: SuggestionList,
    participants: Vec<ParticipantTag>,
    due_date: String,
    due_bounds: Option<DueDateBounds>,
    status: Option<TaskStatus>,
    save_enabled: bool,
}

impl TaskFragment {
    pub(crate) fn new(
        id: TaskId,
        sprint: SprintCard,
        directory: UserDirectory,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            id,
            sprint,
            directory,
            clock,
            title: String::new(),
            assign_query: String::new(),
            suggestions: SuggestionList::Hidden,
            participants: Vec::new(),
            due_date: String::new(),
            due_bounds: None,
            status: Some(TaskStatus::default()),
            save_enabled: false,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn id(&self) -> &TaskId {
        &self.id
    }

    pub fn sprint_id(&self) -> &str {
        &self.sprint.id
    }

    pub fn sprint(&self) -> &SprintCard {
        &self.sprint
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn assign_query(&self) -> &str {
        &self.assign_query
    }

    pub fn suggestions(&self) -> &SuggestionList {
        &self.suggestions
    }

    pub fn participants(&self) -> &[ParticipantTag] {
        &self.participants
    }

    /// Participant ids in selection order
    pub fn participant_ids(&self) -> Vec<String> {
        self.participants
            .iter()
            .map(|tag| tag.user_id.clone())
            .collect()
    }

    pub fn due_date(&self) -> &str {
        &self.due_date
    }

    pub fn due_bounds(&self) -> Option<&DueDateBounds> {
        self.due_bounds.as_ref()
    }

    pub fn status(&self) -> Option<TaskStatus> {
        self.status
    }

    pub fn save_enabled(&self) -> bool {
        self.save_enabled
    }

    // =========================================================================
    // Field mutations
    // =========================================================================

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.toggle_save_button();
    }

    pub fn set_status(&mut self, status: Option<TaskStatus>) {
        self.status = status;
        self.toggle_save_button();
    }

    /// Assign min/max constraints to the due-date input from today and the
    /// sprint end. Leaves existing bounds alone when the sprint end is unreadable.
    pub fn focus_due_date(&mut self) {
        match self.sprint.parse_end_date() {
            Ok(sprint_end) => {
                self.due_bounds = Some(DueDateBounds {
                    min: self.clock.today(),
                    max: sprint_end,
                });
            }
            Err(_) => {
                error!("Could not parse sprint end date: {}", self.sprint.end_date);
            }
        }
    }

    /// Apply a new due-date value and validate it against `[today, sprint end]`.
    ///
    /// A rejected value clears the field and raises an alert. When the sprint
    /// end is unreadable the value is kept unvalidated.
    pub fn change_due_date(&mut self, value: impl Into<String>, feedback: &dyn Feedback) {
        self.due_date = value.into();

        if !self.due_date.is_empty()
            && let Err(rejection) = self.check_due_date()
        {
            warn!(
                "Rejected due date {} for {}: {}",
                self.due_date, self.id, rejection
            );
            feedback.alert(&rejection.to_string());
            self.due_date.clear();
        }

        self.toggle_save_button();
    }

    fn check_due_date(&self) -> Result<(), DueDateError> {
        let sprint_end = match self.sprint.parse_end_date() {
            Ok(date) => date,
            Err(_) => {
                error!("Invalid sprint end date format: {}", self.sprint.end_date);
                return Ok(());
            }
        };

        let due = parse_input_date(&self.due_date).map_err(|_| DueDateError::Unreadable)?;
        validate_due_date(due, self.clock.today(), sprint_end)
    }

    // =========================================================================
    // Participant picker
    // =========================================================================

    /// Update the participant search box and refresh the dropdown
    pub fn type_assign_query(&mut self, value: impl Into<String>) {
        self.assign_query = value.into();

        let query = self.assign_query.trim();
        self.suggestions = if query.is_empty() {
            SuggestionList::Hidden
        } else {
            SuggestionList::from_matches(self.directory.filter_users(query))
        };

        self.toggle_save_button();
    }

    /// Pick a dropdown option by user id. Unknown ids are ignored.
    pub fn choose_suggestion(&mut self, user_id: &str) -> bool {
        match self.directory.find(user_id).cloned() {
            Some(user) => self.select_user(&user),
            None => {
                debug!("Ignoring unknown suggestion {user_id} for {}", self.id);
                false
            }
        }
    }

    /// Add a participant tag. Returns false when the user is already selected.
    pub fn select_user(&mut self, user: &UserSuggestion) -> bool {
        if self.participants.iter().any(|tag| tag.user_id == user.id) {
            debug!("User {} already assigned to {}", user.id, self.id);
            return false;
        }

        self.participants.push(ParticipantTag::from(user));
        self.assign_query.clear();
        self.suggestions = SuggestionList::Hidden;

        self.toggle_save_button();
        true
    }

    /// The tag's remove affordance
    pub fn remove_participant(&mut self, user_id: &str) -> bool {
        let before = self.participants.len();
        self.participants.retain(|tag| tag.user_id != user_id);
        let removed = self.participants.len() != before;

        self.toggle_save_button();
        removed
    }

    // =========================================================================
    // Save button
    // =========================================================================

    /// Title, due date, status, and at least one participant are all present
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty()
            && !self.due_date.is_empty()
            && self.status.is_some()
            && !self.participants.is_empty()
    }

    pub fn toggle_save_button(&mut self) -> bool {
        self.save_enabled = self.is_complete();
        self.save_enabled
    }

    /// Disable the save control while a save request is outstanding
    pub fn disable_save(&mut self) {
        self.save_enabled = false;
    }
}
