use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Invalid date '{value}' {location}")]
    InvalidDate {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid task status: {value} {location}")]
    InvalidTaskStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Unknown sprint: {sprint_id} {location}")]
    UnknownSprint {
        sprint_id: String,
        location: ErrorLocation,
    },

    #[error("Unknown task: {task_id} {location}")]
    UnknownTask {
        task_id: String,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {source} {location}")]
    Json {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Create a validation error, optionally naming the offending field
    #[track_caller]
    pub fn validation<S: Into<String>>(message: S, field: Option<&str>) -> Self {
        CoreError::Validation {
            message: message.into(),
            field: field.map(String::from),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_date<S: Into<String>>(value: S) -> Self {
        CoreError::InvalidDate {
            value: value.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for CoreError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        CoreError::Json {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
