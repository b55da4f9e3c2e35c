use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

/// Per-page endpoints the server renders into its templates
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EndpointsConfig {
    /// Sprint existence-check and save URL of the current project
    pub sprint_url: Option<String>,
    /// Project whose participants feed the suggestion list
    pub project_id: Option<String>,
}

impl EndpointsConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if let Some(url) = &self.sprint_url
            && url.trim().is_empty()
        {
            return Err(ConfigError::endpoints("endpoints.sprint_url cannot be empty"));
        }

        if let Some(id) = &self.project_id
            && (id.trim().is_empty() || id.contains('/'))
        {
            return Err(ConfigError::endpoints(format!(
                "endpoints.project_id must be a non-empty path segment, got '{id}'"
            )));
        }

        Ok(())
    }
}
