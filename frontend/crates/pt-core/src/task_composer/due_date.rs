use crate::dates::format_input_date;

use chrono::NaiveDate;
use thiserror::Error;

/// Why a due date was rejected. The message is what the user is shown.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueDateError {
    #[error("The due date cannot be earlier than today's date.")]
    BeforeToday,

    #[error("The due date cannot be later than the sprint's end date.")]
    AfterSprintEnd,

    #[error("Please set a valid due date.")]
    Unreadable,
}

/// Native min/max constraints assigned to a due-date input on focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DueDateBounds {
    pub min: NaiveDate,
    pub max: NaiveDate,
}

impl DueDateBounds {
    pub fn min_attr(&self) -> String {
        format_input_date(self.min)
    }

    pub fn max_attr(&self) -> String {
        format_input_date(self.max)
    }
}

/// A due date must lie in `[today, sprint_end]`, both inclusive
pub fn validate_due_date(
    due: NaiveDate,
    today: NaiveDate,
    sprint_end: NaiveDate,
) -> Result<(), DueDateError> {
    if due < today {
        Err(DueDateError::BeforeToday)
    } else if due > sprint_end {
        Err(DueDateError::AfterSprintEnd)
    } else {
        Ok(())
    }
}
