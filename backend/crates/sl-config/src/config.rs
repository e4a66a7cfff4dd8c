use crate::{
    AzureDevOpsConfig, CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR_NAME, FrontendConfig, HttpConfig, LoggingConfig, Secret,
};

use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub azure: AzureDevOpsConfig,
    pub frontend: FrontendConfig,
    pub http: HttpConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config from the config directory.
    ///
    /// Loading order:
    /// 1. STORYLINE_CONFIG_DIR env var, else ./.storyline/
    /// 2. config.toml inside it if present, else defaults
    /// 3. AZURE_DEVOPS_* and STORYLINE_* environment overrides
    /// 4. Normalization of blank and padded values
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;
        Self::load_from_dir(&config_dir)
    }

    /// Same as [`Config::load`] with an explicit directory.
    pub fn load_from_dir(config_dir: &Path) -> ConfigErrorResult<Self> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides()?;
        config.azure.normalize();

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
    /// Priority: STORYLINE_CONFIG_DIR env var > ./.storyline/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR_NAME))
    }

    /// Validate ranges and formats. Call after load() to catch errors at startup.
    ///
    /// Missing Azure DevOps credentials are not an error here: the process
    /// starts and every create request reports the gap instead.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.azure.validate()?;
        self.http.validate()?;

        if let Some(ref file) = self.logging.file
            && file.trim().is_empty()
        {
            return Err(ConfigError::logging("logging.file must not be empty when set"));
        }

        Ok(())
    }

    /// Absolute path of the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        let Some(ref file) = self.logging.file else {
            return Ok(None);
        };

        let path = PathBuf::from(file);
        if path.is_absolute() {
            return Ok(Some(path));
        }

        Ok(Some(Self::config_dir()?.join(path)))
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  azure: {}/{} via {} (api-version {}, timeout {}s)",
            self.azure.organization.as_deref().unwrap_or("<unset>"),
            self.azure.project.as_deref().unwrap_or("<unset>"),
            self.azure.base_url,
            self.azure.api_version,
            self.azure.request_timeout_secs
        );
        info!(
            "  auth: {} ({})",
            self.azure.auth_scheme,
            if self.azure.personal_access_token.is_some() {
                "token set"
            } else {
                "token missing"
            }
        );
        info!(
            "  classification: area={}, iteration={}",
            self.azure.area_path.as_deref().unwrap_or("<none>"),
            self.azure.iteration_path.as_deref().unwrap_or("<none>")
        );
        info!(
            "  frontend: mode={}, transport={}, http={}",
            self.frontend.mode,
            self.frontend.transport,
            self.http.bind_addr()
        );
        info!("  logging: {}", *self.logging.level);

        let missing = self.azure.missing_required();
        if !missing.is_empty() {
            warn!(
                "Azure DevOps settings incomplete, story creation will fail until set: {}",
                missing.join(", ")
            );
        }
    }

    fn apply_env_overrides(&mut self) -> ConfigErrorResult<()> {
        // Azure DevOps
        Self::apply_env_option_string("AZURE_DEVOPS_ORGANIZATION", &mut self.azure.organization);
        Self::apply_env_option_string("AZURE_DEVOPS_PROJECT", &mut self.azure.project);
        Self::apply_env_secret("AZURE_DEVOPS_PAT", &mut self.azure.personal_access_token);
        Self::apply_env_option_string("AZURE_DEVOPS_AREA_PATH", &mut self.azure.area_path);
        Self::apply_env_option_string(
            "AZURE_DEVOPS_ITERATION_PATH",
            &mut self.azure.iteration_path,
        );
        Self::apply_env_string("AZURE_DEVOPS_API_VERSION", &mut self.azure.api_version);
        Self::apply_env_string("AZURE_DEVOPS_BASE_URL", &mut self.azure.base_url);
        Self::apply_env_parse("AZURE_DEVOPS_AUTH_SCHEME", &mut self.azure.auth_scheme)?;
        Self::apply_env_parse(
            "AZURE_DEVOPS_TIMEOUT_SECS",
            &mut self.azure.request_timeout_secs,
        )?;

        // Frontend
        Self::apply_env_parse("STORYLINE_MODE", &mut self.frontend.mode)?;
        Self::apply_env_parse("STORYLINE_TRANSPORT", &mut self.frontend.transport)?;

        // HTTP transport
        Self::apply_env_string("STORYLINE_HTTP_HOST", &mut self.http.host);
        Self::apply_env_parse("STORYLINE_HTTP_PORT", &mut self.http.port)?;

        // Logging
        Self::apply_env_parse("STORYLINE_LOG_LEVEL", &mut self.logging.level)?;
        Self::apply_env_option_string("STORYLINE_LOG_FILE", &mut self.logging.file);
        Self::apply_env_bool("STORYLINE_LOG_COLORED", &mut self.logging.colored);

        Ok(())
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values.
    /// Runs before the logger exists, so an unparseable value is an error.
    fn apply_env_parse<T>(var_name: &str, target: &mut T) -> ConfigErrorResult<()>
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        if let Ok(val) = std::env::var(var_name) {
            *target = val.parse().map_err(|e| {
                ConfigError::config(format!("invalid value for {var_name}: '{val}' ({e})"))
            })?;
        }
        Ok(())
    }

    /// Helper: Apply environment variable override for Option<String> values.
    /// A blank value clears the setting.
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val).filter(|v| !v.trim().is_empty());
        }
    }

    fn apply_env_secret(var_name: &str, target: &mut Option<Secret>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(Secret::new(val));
        }
    }
}
