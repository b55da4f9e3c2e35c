use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Task workflow status as offered by the status select
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// First option of the select, so every new fragment starts here
    #[default]
    ToDo,
    InProgress,
    Blocked,
    Completed,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 4] = [
        Self::ToDo,
        Self::InProgress,
        Self::Blocked,
        Self::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ToDo => "to-do",
            Self::InProgress => "in-progress",
            Self::Blocked => "blocked",
            Self::Completed => "completed",
        }
    }

    /// Label shown in the status select
    pub fn label(&self) -> &'static str {
        match self {
            Self::ToDo => "To-Do",
            Self::InProgress => "In Progress",
            Self::Blocked => "Blocked",
            Self::Completed => "Completed",
        }
    }
}

impl FromStr for TaskStatus {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "to-do" => Ok(Self::ToDo),
            "in-progress" => Ok(Self::InProgress),
            "blocked" => Ok(Self::Blocked),
            "completed" => Ok(Self::Completed),
            _ => Err(CoreError::InvalidTaskStatus {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
