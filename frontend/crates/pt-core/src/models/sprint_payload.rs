use serde::{Deserialize, Serialize};

/// Body of the sprint creation request; dates are `YYYY-MM-DD`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SprintPayload {
    pub sprint_name: String,
    pub start_date: String,
    pub end_date: String,
}
