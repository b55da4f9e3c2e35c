use crate::CoreResult;
use crate::dates::parse_rendered_date;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A sprint as the page renders it: an id and the raw end-date attribute.
///
/// The end date is kept verbatim so that a malformed value only disables
/// date bounds for that sprint instead of rejecting the whole card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SprintCard {
    pub id: String,
    pub end_date: String,
}

impl SprintCard {
    pub fn new(id: impl Into<String>, end_date: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            end_date: end_date.into(),
        }
    }

    #[track_caller]
    pub fn parse_end_date(&self) -> CoreResult<NaiveDate> {
        parse_rendered_date(&self.end_date)
    }
}
