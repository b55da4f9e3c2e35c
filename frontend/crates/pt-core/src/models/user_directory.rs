use crate::{CoreResult, UserSuggestion};

use std::sync::Arc;

/// Read-only list of users that can be assigned to tasks.
///
/// Built once at start-up and handed to every composer that needs it;
/// clones share the same backing slice.
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    users: Arc<[UserSuggestion]>,
}

impl UserDirectory {
    pub fn new(users: Vec<UserSuggestion>) -> Self {
        Self {
            users: users.into(),
        }
    }

    /// Parse a JSON array of `{id, full_name, username}` objects
    #[track_caller]
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let users: Vec<UserSuggestion> = serde_json::from_str(json)?;
        Ok(Self::new(users))
    }

    /// Users whose full name or username contains `query`, in directory order
    pub fn filter_users(&self, query: &str) -> Vec<UserSuggestion> {
        self.users
            .iter()
            .filter(|user| user.matches(query))
            .cloned()
            .collect()
    }

    pub fn find(&self, id: &str) -> Option<&UserSuggestion> {
        self.users.iter().find(|user| user.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &UserSuggestion> {
        self.users.iter()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
