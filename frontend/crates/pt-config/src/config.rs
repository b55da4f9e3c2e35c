use crate::{
    CONFIG_DIR_ENV, CONFIG_DIR_NAME, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult, CsrfConfig,
    EndpointsConfig, LoggingConfig, ServerConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub endpoints: EndpointsConfig,
    pub csrf: CsrfConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for PT_CONFIG_DIR env var, else use ./.pt/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply PT_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: PT_CONFIG_DIR env var > ./.pt/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(CONFIG_DIR_NAME))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.endpoints.validate()?;
        self.csrf.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Log configuration summary (NEVER logs the CSRF token).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}", self.server.base_url);
        info!(
            "  endpoints: sprint_url={}, project_id={}",
            self.endpoints.sprint_url.as_deref().unwrap_or("(unset)"),
            self.endpoints.project_id.as_deref().unwrap_or("(unset)")
        );
        info!(
            "  csrf: cookie={} (token {})",
            self.csrf.cookie_name,
            if self.csrf.token.is_some() {
                "configured"
            } else {
                "from cookie"
            }
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stderr")
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("PT_SERVER_BASE_URL", &mut self.server.base_url);

        // Endpoints
        Self::apply_env_option_string("PT_SPRINT_URL", &mut self.endpoints.sprint_url);
        Self::apply_env_option_string("PT_PROJECT_ID", &mut self.endpoints.project_id);

        // CSRF
        Self::apply_env_string("PT_CSRF_COOKIE_NAME", &mut self.csrf.cookie_name);
        Self::apply_env_option_string("PT_CSRF_TOKEN", &mut self.csrf.token);

        // Logging
        Self::apply_env_parse("PT_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("PT_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("PT_LOG_FILE", &mut self.logging.file);
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"; anything else is false
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
