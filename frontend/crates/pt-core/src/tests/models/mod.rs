mod sprint_card;
mod task_record;
mod task_status;
mod user_directory;
