use crate::tests::composer;
use crate::{RecordedFeedback, TaskRecord, TaskStatus};

#[test]
fn test_collect_builds_save_body() {
    let mut composer = composer();
    let feedback = RecordedFeedback::new();
    let id = composer.add_task("sprint-7").unwrap();

    let fragment = composer.fragment_mut(&id).unwrap();
    fragment.set_title("Write spec");
    fragment.change_due_date("2025-01-10", &feedback);
    fragment.set_status(Some(TaskStatus::ToDo));
    assert!(fragment.choose_suggestion("3"));
    assert!(fragment.choose_suggestion("7"));

    let record = TaskRecord::collect(fragment);

    assert_eq!(
        record,
        TaskRecord {
            title: "Write spec".to_string(),
            due_date: "2025-01-10".to_string(),
            status: "to-do".to_string(),
            sprint_id: "sprint-7".to_string(),
            participants: vec!["3".to_string(), "7".to_string()],
        }
    );
    assert!(feedback.alerts().is_empty());
}

#[test]
fn test_collect_serializes_to_save_task_body() {
    let mut composer = composer();
    let id = composer.add_task("sprint-7").unwrap();
    let fragment = composer.fragment_mut(&id).unwrap();
    fragment.set_title("  padded  ");
    fragment.set_status(None);

    let value = serde_json::to_value(TaskRecord::collect(fragment)).unwrap();

    assert_eq!(value["title"], "  padded  ");
    assert_eq!(value["status"], "");
    assert_eq!(value["due_date"], "");
    assert_eq!(value["sprint_id"], "sprint-7");
    assert!(value["participants"].as_array().unwrap().is_empty());
}
