use crate::UserSuggestion;

/// Text of the disabled placeholder shown when a search matches nobody
pub const NO_USERS_FOUND: &str = "No users found";

/// State of a fragment's suggestion dropdown
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SuggestionList {
    #[default]
    Hidden,
    NoUsersFound,
    Users(Vec<UserSuggestion>),
}

/// One rendered option of the dropdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionOption {
    pub value: Option<String>,
    pub label: String,
    pub disabled: bool,
}

impl SuggestionList {
    pub fn from_matches(matches: Vec<UserSuggestion>) -> Self {
        if matches.is_empty() {
            Self::NoUsersFound
        } else {
            Self::Users(matches)
        }
    }

    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn options(&self) -> Vec<SuggestionOption> {
        match self {
            Self::Hidden => Vec::new(),
            Self::NoUsersFound => vec![SuggestionOption {
                value: None,
                label: NO_USERS_FOUND.to_string(),
                disabled: true,
            }],
            Self::Users(users) => users
                .iter()
                .map(|user| SuggestionOption {
                    value: Some(user.id.clone()),
                    label: user.full_name.clone(),
                    disabled: false,
                })
                .collect(),
        }
    }
}
