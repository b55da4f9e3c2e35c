use crate::dates::{format_input_date, parse_input_date};
use crate::{CoreError, CoreResult, SprintNameError, SprintPayload, check_sprint_name};

use chrono::{Days, NaiveDate};
use log::{debug, warn};

/// Transient state of the "new sprint" modal form.
///
/// The name error is only surfaced once the field has been blurred, and the
/// end date stays disabled until a start date is chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SprintDraft {
    name: String,
    name_touched: bool,
    name_error: Option<SprintNameError>,

    start_date: String,
    start_date_min: NaiveDate,

    end_date: String,
    end_date_enabled: bool,
    end_date_min: Option<NaiveDate>,

    submit_enabled: bool,
}

impl SprintDraft {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            name: String::new(),
            name_touched: false,
            name_error: None,
            start_date: String::new(),
            start_date_min: today,
            end_date: String::new(),
            end_date_enabled: false,
            end_date_min: None,
            submit_enabled: false,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn name_touched(&self) -> bool {
        self.name_touched
    }

    pub fn name_error(&self) -> Option<SprintNameError> {
        self.name_error
    }

    pub fn start_date(&self) -> &str {
        &self.start_date
    }

    pub fn start_date_min(&self) -> NaiveDate {
        self.start_date_min
    }

    pub fn end_date(&self) -> &str {
        &self.end_date
    }

    pub fn end_date_enabled(&self) -> bool {
        self.end_date_enabled
    }

    pub fn end_date_min(&self) -> Option<NaiveDate> {
        self.end_date_min
    }

    pub fn submit_enabled(&self) -> bool {
        self.submit_enabled
    }

    // =========================================================================
    // Field events
    // =========================================================================

    pub fn input_name(&mut self, value: impl Into<String>) {
        self.name = value.into();
        self.validate_form();
    }

    pub fn blur_name(&mut self) {
        self.name_touched = true;
        self.validate_form();
    }

    /// New start date: the end date becomes enabled with a minimum of the
    /// following day, and an end date that no longer fits is cleared.
    pub fn change_start_date(&mut self, value: impl Into<String>) {
        self.start_date = value.into();

        match parse_input_date(&self.start_date) {
            Ok(start) => {
                let min_end = start.checked_add_days(Days::new(1));
                self.end_date_enabled = true;
                self.end_date_min = min_end;

                if let Ok(end) = parse_input_date(&self.end_date)
                    && end <= start
                {
                    debug!("Clearing end date {} before new start {}", end, start);
                    self.end_date.clear();
                }
            }
            Err(_) => {
                warn!("Unreadable sprint start date: {}", self.start_date);
            }
        }

        self.validate_form();
    }

    #[track_caller]
    pub fn change_end_date(&mut self, value: impl Into<String>) -> CoreResult<()> {
        if !self.end_date_enabled {
            return Err(CoreError::validation(
                "end date is disabled until a start date is chosen",
                Some("end_date"),
            ));
        }

        self.end_date = value.into();
        self.validate_form();
        Ok(())
    }

    // =========================================================================
    // Validation
    // =========================================================================

    /// Name validity. Until the field has been touched no error is shown, but
    /// the name does not count as valid either.
    pub fn validate_name(&mut self) -> bool {
        if !self.name_touched {
            self.name_error = None;
            return false;
        }

        match check_sprint_name(&self.name) {
            Ok(()) => {
                self.name_error = None;
                true
            }
            Err(error) => {
                self.name_error = Some(error);
                false
            }
        }
    }

    /// Recompute whether the submit control is enabled
    pub fn validate_form(&mut self) -> bool {
        let name_valid = self.validate_name();
        let start_filled = !self.start_date.trim().is_empty();
        let end_filled = !self.end_date.trim().is_empty();
        let end_after_start = match (
            parse_input_date(&self.start_date),
            parse_input_date(&self.end_date),
        ) {
            (Ok(start), Ok(end)) => end > start,
            _ => false,
        };

        self.submit_enabled = name_valid && start_filled && end_filled && end_after_start;
        self.submit_enabled
    }

    /// Trimmed form values as a request body
    pub fn payload(&self) -> SprintPayload {
        SprintPayload {
            sprint_name: self.name.trim().to_string(),
            start_date: self.start_date.trim().to_string(),
            end_date: self.end_date.trim().to_string(),
        }
    }

    pub fn start_date_min_attr(&self) -> String {
        format_input_date(self.start_date_min)
    }

    pub fn end_date_min_attr(&self) -> Option<String> {
        self.end_date_min.map(format_input_date)
    }
}
