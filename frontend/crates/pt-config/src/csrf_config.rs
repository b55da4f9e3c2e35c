use crate::{ConfigError, ConfigErrorResult, DEFAULT_CSRF_COOKIE_NAME};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CsrfConfig {
    /// Cookie the token is read from when no explicit token is configured
    pub cookie_name: String,
    /// Explicit token; takes precedence over the cookie
    pub token: Option<String>,
}

impl Default for CsrfConfig {
    fn default() -> Self {
        Self {
            cookie_name: String::from(DEFAULT_CSRF_COOKIE_NAME),
            token: None,
        }
    }
}

impl CsrfConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let name = self.cookie_name.trim();

        if name.is_empty() {
            return Err(ConfigError::csrf("csrf.cookie_name cannot be empty"));
        }

        if name.contains(['=', ';', ' ']) {
            return Err(ConfigError::csrf(format!(
                "csrf.cookie_name cannot contain '=', ';' or spaces, got '{}'",
                self.cookie_name
            )));
        }

        Ok(())
    }
}
