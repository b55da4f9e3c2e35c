pub mod due_date;
pub mod suggestion_list;
pub mod task_composer;
pub mod task_fragment;
pub mod task_id;
