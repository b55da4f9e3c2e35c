use serde::{Deserialize, Deserializer, Serialize};

/// One entry of the participant suggestion list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSuggestion {
    /// Servers emit numeric ids; tags and payloads carry them as strings
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub username: String,
}

impl UserSuggestion {
    pub fn new(
        id: impl Into<String>,
        full_name: impl Into<String>,
        username: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            full_name: full_name.into(),
            username: username.into(),
        }
    }

    /// Case-insensitive substring match on full name or username
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.full_name.to_lowercase().contains(&needle)
            || self.username.to_lowercase().contains(&needle)
    }
}

fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(i64),
        Text(String),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Number(n) => n.to_string(),
        RawId::Text(s) => s,
    })
}
