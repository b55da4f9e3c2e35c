use crate::tests::composer;
use crate::{
    NO_USERS_FOUND, RecordedFeedback, SuggestionList, TaskFragment, TaskStatus, UserSuggestion,
};

fn with_fragment<F: FnOnce(&mut TaskFragment)>(f: F) {
    let mut composer = composer();
    let id = composer.add_task("sprint-7").unwrap();
    f(composer.fragment_mut(&id).unwrap());
}

fn complete(fragment: &mut TaskFragment, feedback: &RecordedFeedback) {
    fragment.set_title("Write spec");
    fragment.change_due_date("2025-01-10", feedback);
    fragment.set_status(Some(TaskStatus::Blocked));
    fragment.choose_suggestion("3");
}

#[test]
fn test_save_enabled_only_when_all_fields_present() {
    with_fragment(|fragment| {
        let feedback = RecordedFeedback::new();

        fragment.set_title("Write spec");
        assert!(!fragment.save_enabled());

        fragment.change_due_date("2025-01-10", &feedback);
        assert!(!fragment.save_enabled());

        fragment.choose_suggestion("3");
        assert!(fragment.save_enabled());

        fragment.set_status(None);
        assert!(!fragment.save_enabled());
    });
}

#[test]
fn test_whitespace_title_keeps_save_disabled() {
    with_fragment(|fragment| {
        let feedback = RecordedFeedback::new();
        complete(fragment, &feedback);
        assert!(fragment.save_enabled());

        fragment.set_title("   ");
        assert!(!fragment.save_enabled());
    });
}

#[test]
fn test_removing_last_participant_disables_save() {
    with_fragment(|fragment| {
        let feedback = RecordedFeedback::new();
        complete(fragment, &feedback);

        assert!(fragment.remove_participant("3"));
        assert!(!fragment.save_enabled());
        assert!(!fragment.remove_participant("3"));
    });
}

#[test]
fn test_rejected_due_date_disables_save() {
    with_fragment(|fragment| {
        let feedback = RecordedFeedback::new();
        complete(fragment, &feedback);

        fragment.change_due_date("2026-01-01", &feedback);

        assert!(!fragment.save_enabled());
        assert_eq!(feedback.alerts().len(), 1);
    });
}

#[test]
fn test_disable_save_until_next_edit() {
    with_fragment(|fragment| {
        let feedback = RecordedFeedback::new();
        complete(fragment, &feedback);

        fragment.disable_save();
        assert!(!fragment.save_enabled());

        fragment.set_title("Write spec v2");
        assert!(fragment.save_enabled());
    });
}

#[test]
fn test_typing_query_shows_matches() {
    with_fragment(|fragment| {
        fragment.type_assign_query("  hop ");

        match fragment.suggestions() {
            SuggestionList::Users(users) => {
                assert_eq!(users.len(), 1);
                assert_eq!(users[0].id, "7");
            }
            other => panic!("unexpected suggestions: {other:?}"),
        }
        let options = fragment.suggestions().options();
        assert_eq!(options[0].label, "Grace Hopper");
        assert_eq!(options[0].value.as_deref(), Some("7"));
    });
}

#[test]
fn test_typing_unmatched_query_shows_sentinel() {
    with_fragment(|fragment| {
        fragment.type_assign_query("nobody");

        assert_eq!(fragment.suggestions(), &SuggestionList::NoUsersFound);
        let options = fragment.suggestions().options();
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].label, NO_USERS_FOUND);
        assert!(options[0].disabled);
        assert!(options[0].value.is_none());
    });
}

#[test]
fn test_blank_query_hides_suggestions() {
    with_fragment(|fragment| {
        fragment.type_assign_query("ada");
        assert!(fragment.suggestions().is_visible());

        fragment.type_assign_query("   ");
        assert!(!fragment.suggestions().is_visible());
        assert!(fragment.suggestions().options().is_empty());
    });
}

#[test]
fn test_select_user_clears_query_and_hides_list() {
    with_fragment(|fragment| {
        fragment.type_assign_query("ada");

        assert!(fragment.choose_suggestion("3"));

        assert_eq!(fragment.assign_query(), "");
        assert_eq!(fragment.suggestions(), &SuggestionList::Hidden);
        assert_eq!(fragment.participants()[0].display_name, "Ada Lovelace");
    });
}

#[test]
fn test_selecting_same_user_twice_is_noop() {
    with_fragment(|fragment| {
        assert!(fragment.choose_suggestion("3"));
        fragment.type_assign_query("ada");

        assert!(!fragment.choose_suggestion("3"));

        assert_eq!(fragment.participant_ids(), vec!["3"]);
        assert_eq!(fragment.assign_query(), "ada");
    });
}

#[test]
fn test_select_user_outside_directory_is_accepted() {
    with_fragment(|fragment| {
        let guest = UserSuggestion::new("42", "Guest User", "guest");
        assert!(fragment.select_user(&guest));
        assert_eq!(fragment.participant_ids(), vec!["42"]);
    });
}

#[test]
fn test_choose_unknown_suggestion_is_ignored() {
    with_fragment(|fragment| {
        assert!(!fragment.choose_suggestion("404"));
        assert!(fragment.participants().is_empty());
    });
}

#[test]
fn test_participants_keep_selection_order() {
    with_fragment(|fragment| {
        fragment.choose_suggestion("9");
        fragment.choose_suggestion("3");
        fragment.choose_suggestion("7");
        assert_eq!(fragment.participant_ids(), vec!["9", "3", "7"]);
    });
}
