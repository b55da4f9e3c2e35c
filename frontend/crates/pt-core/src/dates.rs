//! Date parsing shared by the task and sprint composers.
//!
//! Form inputs carry `YYYY-MM-DD` values. Sprint end dates come from
//! server-rendered markup and may use any of the formats the templates emit.

use crate::{CoreError, CoreResult};

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Wire format of a date input value
pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

const RENDERED_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%B %d, %Y", "%b. %d, %Y", "%b %d, %Y"];
const RENDERED_DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Parse a date input value (`YYYY-MM-DD`)
#[track_caller]
pub fn parse_input_date(value: &str) -> CoreResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), INPUT_DATE_FORMAT)
        .map_err(|_| CoreError::invalid_date(value))
}

/// Parse a server-rendered date attribute, accepting the formats the templates emit
#[track_caller]
pub fn parse_rendered_date(value: &str) -> CoreResult<NaiveDate> {
    let trimmed = value.trim();

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(timestamp.date_naive());
    }

    for format in RENDERED_DATETIME_FORMATS {
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(timestamp.date());
        }
    }

    RENDERED_DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| CoreError::invalid_date(value))
}

/// Format a date the way date inputs expect it
pub fn format_input_date(date: NaiveDate) -> String {
    date.format(INPUT_DATE_FORMAT).to_string()
}
