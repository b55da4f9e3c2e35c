use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

pub const EMPTY_NAME_MESSAGE: &str = "This field cannot be empty.";
pub const INVALID_NAME_MESSAGE: &str =
    "Must have 3-30 characters with only letters, numbers, and spaces.";

static SPRINT_NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9 ]{3,30}$").unwrap());

/// Inline error shown under the sprint name field
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SprintNameError {
    #[error("This field cannot be empty.")]
    Empty,

    #[error("Must have 3-30 characters with only letters, numbers, and spaces.")]
    Malformed,
}

/// Check a sprint name after trimming surrounding whitespace
pub fn check_sprint_name(name: &str) -> Result<(), SprintNameError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        Err(SprintNameError::Empty)
    } else if !SPRINT_NAME_PATTERN.is_match(trimmed) {
        Err(SprintNameError::Malformed)
    } else {
        Ok(())
    }
}
