use crate::tests::{composer, date};
use crate::{
    FixedClock, RecordedFeedback, SprintCard, TaskComposer, DueDateError, validate_due_date,
};

use std::sync::Arc;

#[test]
fn test_validate_due_date_inclusive_bounds() {
    let today = date("2025-01-05");
    let end = date("2025-01-20");

    assert_eq!(validate_due_date(today, today, end), Ok(()));
    assert_eq!(validate_due_date(end, today, end), Ok(()));
    assert_eq!(
        validate_due_date(date("2025-01-04"), today, end),
        Err(DueDateError::BeforeToday)
    );
    assert_eq!(
        validate_due_date(date("2025-01-21"), today, end),
        Err(DueDateError::AfterSprintEnd)
    );
}

#[test]
fn test_change_due_date_in_range_is_kept() {
    let mut composer = composer();
    let feedback = RecordedFeedback::new();
    let id = composer.add_task("sprint-7").unwrap();
    let fragment = composer.fragment_mut(&id).unwrap();

    fragment.change_due_date("2025-01-10", &feedback);

    assert_eq!(fragment.due_date(), "2025-01-10");
    assert!(feedback.alerts().is_empty());
}

#[test]
fn test_change_due_date_before_today_clears_and_alerts() {
    let mut composer = composer();
    let feedback = RecordedFeedback::new();
    let id = composer.add_task("sprint-7").unwrap();
    let fragment = composer.fragment_mut(&id).unwrap();

    fragment.change_due_date("2025-01-04", &feedback);

    assert_eq!(fragment.due_date(), "");
    assert_eq!(
        feedback.last_alert().as_deref(),
        Some("The due date cannot be earlier than today's date.")
    );
}

#[test]
fn test_change_due_date_after_sprint_end_clears_and_alerts() {
    let mut composer = composer();
    let feedback = RecordedFeedback::new();
    let id = composer.add_task("sprint-7").unwrap();
    let fragment = composer.fragment_mut(&id).unwrap();

    fragment.change_due_date("2025-01-21", &feedback);

    assert_eq!(fragment.due_date(), "");
    assert_eq!(
        feedback.last_alert().as_deref(),
        Some("The due date cannot be later than the sprint's end date.")
    );
}

#[test]
fn test_change_due_date_unreadable_value_clears_and_alerts() {
    let mut composer = composer();
    let feedback = RecordedFeedback::new();
    let id = composer.add_task("sprint-7").unwrap();
    let fragment = composer.fragment_mut(&id).unwrap();

    fragment.change_due_date("tomorrow", &feedback);

    assert_eq!(fragment.due_date(), "");
    assert_eq!(
        feedback.last_alert().as_deref(),
        Some("Please set a valid due date.")
    );
}

#[test]
fn test_change_due_date_to_empty_does_not_alert() {
    let mut composer = composer();
    let feedback = RecordedFeedback::new();
    let id = composer.add_task("sprint-7").unwrap();
    let fragment = composer.fragment_mut(&id).unwrap();

    fragment.change_due_date("2025-01-10", &feedback);
    fragment.change_due_date("", &feedback);

    assert_eq!(fragment.due_date(), "");
    assert!(feedback.alerts().is_empty());
}

#[test]
fn test_unparsable_sprint_end_skips_validation() {
    let mut composer = TaskComposer::new(
        crate::tests::directory(),
        Arc::new(FixedClock(date("2025-01-05"))),
    );
    composer.register_sprint(SprintCard::new("broken", "soon"));
    let feedback = RecordedFeedback::new();
    let id = composer.add_task("broken").unwrap();
    let fragment = composer.fragment_mut(&id).unwrap();

    fragment.change_due_date("2030-12-31", &feedback);

    assert_eq!(fragment.due_date(), "2030-12-31");
    assert!(feedback.alerts().is_empty());
}

#[test]
fn test_focus_due_date_sets_bounds() {
    let mut composer = composer();
    let id = composer.add_task("sprint-7").unwrap();
    let fragment = composer.fragment_mut(&id).unwrap();

    fragment.focus_due_date();

    let bounds = fragment.due_bounds().unwrap();
    assert_eq!(bounds.min_attr(), "2025-01-05");
    assert_eq!(bounds.max_attr(), "2025-01-20");
}

#[test]
fn test_focus_due_date_with_unparsable_end_is_noop() {
    let mut composer = composer();
    composer.register_sprint(SprintCard::new("broken", "not a date"));
    let id = composer.add_task("broken").unwrap();
    let fragment = composer.fragment_mut(&id).unwrap();

    fragment.focus_due_date();

    assert!(fragment.due_bounds().is_none());
}
