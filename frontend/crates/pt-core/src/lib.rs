pub mod clock;
pub mod dates;
pub mod error;
pub mod feedback;
pub mod models;
pub mod sprint_composer;
pub mod task_composer;

#[cfg(test)]
mod tests;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{CoreError, Result as CoreResult};
pub use feedback::{Feedback, RecordedFeedback};
pub use models::participant_tag::ParticipantTag;
pub use models::sprint_card::SprintCard;
pub use models::sprint_payload::SprintPayload;
pub use models::task_record::TaskRecord;
pub use models::task_status::TaskStatus;
pub use models::user_directory::UserDirectory;
pub use models::user_suggestion::UserSuggestion;
pub use sprint_composer::sprint_composer::SprintComposer;
pub use sprint_composer::sprint_draft::SprintDraft;
pub use sprint_composer::sprint_name::{
    EMPTY_NAME_MESSAGE, INVALID_NAME_MESSAGE, SprintNameError, check_sprint_name,
};
pub use task_composer::due_date::{DueDateBounds, DueDateError, validate_due_date};
pub use task_composer::suggestion_list::{NO_USERS_FOUND, SuggestionList, SuggestionOption};
pub use task_composer::task_composer::TaskComposer;
pub use task_composer::task_fragment::TaskFragment;
pub use task_composer::task_id::TaskId;
