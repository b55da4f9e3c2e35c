use crate::{ConfigError, ConfigErrorResult, DEFAULT_BASE_URL};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Root every relative request path is joined to, e.g. "http://127.0.0.1:8000/tracker"
    pub base_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let url = self.base_url.trim();

        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::server(format!(
                "server.base_url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }

        if url.contains('?') || url.contains('#') {
            return Err(ConfigError::server(
                "server.base_url cannot contain a query string or fragment",
            ));
        }

        Ok(())
    }
}
