use crate::UserSuggestion;

use serde::{Deserialize, Serialize};

/// A user chip in a task's selected-participants set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantTag {
    pub user_id: String,
    pub display_name: String,
}

impl From<&UserSuggestion> for ParticipantTag {
    fn from(user: &UserSuggestion) -> Self {
        Self {
            user_id: user.id.clone(),
            display_name: user.full_name.clone(),
        }
    }
}
