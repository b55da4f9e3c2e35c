mod models;
mod sprint_composer;
mod task_composer;

use crate::{FixedClock, SprintCard, TaskComposer, UserDirectory, UserSuggestion};

use std::sync::Arc;

use chrono::NaiveDate;

pub(crate) fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
}

/// 2025-01-05, the "today" every composer test runs on
pub(crate) fn clock() -> Arc<FixedClock> {
    Arc::new(FixedClock(date("2025-01-05")))
}

pub(crate) fn directory() -> UserDirectory {
    UserDirectory::new(vec![
        UserSuggestion::new("3", "Ada Lovelace", "ada"),
        UserSuggestion::new("7", "Grace Hopper", "ghopper"),
        UserSuggestion::new("9", "Alan Turing", "aturing"),
    ])
}

/// Composer with `sprint-7` (ends 2025-01-20) registered
pub(crate) fn composer() -> TaskComposer {
    let mut composer = TaskComposer::new(directory(), clock());
    composer.register_sprint(SprintCard::new("sprint-7", "2025-01-20"));
    composer
}
