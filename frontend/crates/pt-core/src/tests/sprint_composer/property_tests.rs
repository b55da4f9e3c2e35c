use crate::check_sprint_name;
use crate::tests::date;
use crate::SprintDraft;

use proptest::prelude::*;

// =========================================================================
// Property-Based Tests - Sprint Name
// =========================================================================

proptest! {
    #[test]
    fn given_valid_name_when_checked_then_ok(name in "[A-Za-z0-9][A-Za-z0-9 ]{1,27}[A-Za-z0-9]") {
        prop_assert!(check_sprint_name(&name).is_ok());
    }

    #[test]
    fn given_too_long_name_when_checked_then_error(name in "[A-Za-z0-9]{31,60}") {
        prop_assert!(check_sprint_name(&name).is_err());
    }

    #[test]
    fn given_name_with_symbol_when_checked_then_error(
        prefix in "[A-Za-z]{2,10}",
        symbol in "[!@#$%^&*_.,-]",
    ) {
        let name = format!("{prefix}{symbol}");
        prop_assert!(check_sprint_name(&name).is_err());
    }

    #[test]
    fn given_untouched_field_when_validated_then_no_error_shown(name in ".{0,40}") {
        let mut draft = SprintDraft::new(date("2025-01-05"));
        draft.input_name(name);
        prop_assert!(draft.name_error().is_none());
        prop_assert!(!draft.validate_name());
    }

    #[test]
    fn given_end_not_after_start_when_validated_then_submit_disabled(back in 0u64..30) {
        let mut draft = SprintDraft::new(date("2025-01-05"));
        draft.input_name("Sprint 1");
        draft.blur_name();
        draft.change_start_date("2025-03-01");
        let end = date("2025-03-01")
            .checked_sub_days(chrono::Days::new(back))
            .unwrap();
        draft.change_end_date(end.format("%Y-%m-%d").to_string()).unwrap();

        prop_assert!(!draft.submit_enabled());
    }
}
