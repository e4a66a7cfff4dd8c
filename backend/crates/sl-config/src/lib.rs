mod azure_config;
mod config;
mod error;
mod frontend_config;
mod http_config;
mod logging_config;
mod secret;

#[cfg(test)]
mod tests;

pub use azure_config::{AuthScheme, AzureDevOpsConfig};
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use frontend_config::{FrontendConfig, RunMode, Transport};
pub use http_config::HttpConfig;
pub use logging_config::{LogLevel, LoggingConfig};
pub use secret::Secret;

const CONFIG_DIR_ENV: &str = "STORYLINE_CONFIG_DIR";
const DEFAULT_CONFIG_DIR_NAME: &str = ".storyline";
const CONFIG_FILE_NAME: &str = "config.toml";

pub const DEFAULT_BASE_URL: &str = "https://dev.azure.com";
pub const DEFAULT_API_VERSION: &str = "7.0";

const DEFAULT_HTTP_HOST: &str = "127.0.0.1";
const DEFAULT_HTTP_PORT: u16 = 8000;

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
