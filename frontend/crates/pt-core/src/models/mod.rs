pub mod participant_tag;
pub mod sprint_card;
pub mod sprint_payload;
pub mod task_record;
pub mod task_status;
pub mod user_directory;
pub mod user_suggestion;
