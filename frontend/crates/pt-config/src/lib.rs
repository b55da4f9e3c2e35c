mod config;
mod csrf_config;
mod endpoints_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use csrf_config::CsrfConfig;
pub use endpoints_config::EndpointsConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/tracker";
const DEFAULT_CSRF_COOKIE_NAME: &str = "csrftoken";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;

const CONFIG_DIR_ENV: &str = "PT_CONFIG_DIR";
const CONFIG_DIR_NAME: &str = ".pt";
const CONFIG_FILE_NAME: &str = "config.toml";
