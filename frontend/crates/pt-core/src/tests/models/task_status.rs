use crate::TaskStatus;

use std::str::FromStr;

#[test]
fn test_task_status_as_str() {
    assert_eq!(TaskStatus::ToDo.as_str(), "to-do");
    assert_eq!(TaskStatus::InProgress.as_str(), "in-progress");
    assert_eq!(TaskStatus::Blocked.as_str(), "blocked");
    assert_eq!(TaskStatus::Completed.as_str(), "completed");
}

#[test]
fn test_task_status_from_str() {
    for status in TaskStatus::ALL {
        assert_eq!(TaskStatus::from_str(status.as_str()).unwrap(), status);
    }
    assert!(TaskStatus::from_str("done").is_err());
    assert!(TaskStatus::from_str("To-Do").is_err());
}

#[test]
fn test_task_status_serde_matches_wire_values() {
    let json = serde_json::to_string(&TaskStatus::InProgress).unwrap();
    assert_eq!(json, "\"in-progress\"");

    let parsed: TaskStatus = serde_json::from_str("\"to-do\"").unwrap();
    assert_eq!(parsed, TaskStatus::ToDo);
}

#[test]
fn test_task_status_default_is_first_option() {
    assert_eq!(TaskStatus::default(), TaskStatus::ToDo);
    assert_eq!(TaskStatus::default().label(), "To-Do");
}
