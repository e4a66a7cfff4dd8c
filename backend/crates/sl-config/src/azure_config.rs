use crate::{ConfigError, ConfigErrorResult, DEFAULT_API_VERSION, DEFAULT_BASE_URL, Secret};

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

// Request timeout constraints
pub const MIN_TIMEOUT_SECS: u64 = 1;
pub const MAX_TIMEOUT_SECS: u64 = 300;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// How the credential is presented in the `Authorization` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthScheme {
    /// `Authorization: Bearer <token>`
    #[default]
    Bearer,
    /// `Authorization: Basic base64(":<token>")`, the form personal access tokens accept
    Basic,
}

impl FromStr for AuthScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bearer" => Ok(AuthScheme::Bearer),
            "basic" => Ok(AuthScheme::Basic),
            other => Err(format!("unknown auth scheme '{other}' (expected bearer or basic)")),
        }
    }
}

impl fmt::Display for AuthScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthScheme::Bearer => f.write_str("bearer"),
            AuthScheme::Basic => f.write_str("basic"),
        }
    }
}

/// Connection settings for the Azure DevOps work item API.
///
/// Loaded once at startup and shared read-only afterwards. The organization,
/// project and token are optional here so the process can still start with
/// an incomplete setup; the work item creator refuses to send anything until
/// all three are present.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AzureDevOpsConfig {
    pub organization: Option<String>,
    pub project: Option<String>,
    pub personal_access_token: Option<Secret>,
    /// Applied to every created item when set
    pub area_path: Option<String>,
    /// Applied to every created item when set
    pub iteration_path: Option<String>,
    pub api_version: String,
    pub base_url: String,
    pub auth_scheme: AuthScheme,
    pub request_timeout_secs: u64,
}

impl Default for AzureDevOpsConfig {
    fn default() -> Self {
        Self {
            organization: None,
            project: None,
            personal_access_token: None,
            area_path: None,
            iteration_path: None,
            api_version: String::from(DEFAULT_API_VERSION),
            base_url: String::from(DEFAULT_BASE_URL),
            auth_scheme: AuthScheme::default(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl AzureDevOpsConfig {
    /// Trim every text field and turn blank optional values into `None`.
    ///
    /// A blank API version or base URL falls back to its default.
    pub fn normalize(&mut self) {
        for field in [
            &mut self.organization,
            &mut self.project,
            &mut self.area_path,
            &mut self.iteration_path,
        ] {
            *field = normalize_optional(field.take());
        }

        if self
            .personal_access_token
            .as_ref()
            .is_some_and(Secret::is_blank)
        {
            self.personal_access_token = None;
        }

        self.api_version = normalize_or_default(&self.api_version, DEFAULT_API_VERSION);
        self.base_url = normalize_or_default(&self.base_url, DEFAULT_BASE_URL)
            .trim_end_matches('/')
            .to_string();
    }

    /// Names of required settings that are still unset.
    pub fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if is_unset(self.organization.as_deref()) {
            missing.push("organization");
        }
        if is_unset(self.project.as_deref()) {
            missing.push("project");
        }
        if self
            .personal_access_token
            .as_ref()
            .is_none_or(Secret::is_blank)
        {
            missing.push("personal_access_token");
        }
        missing
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.request_timeout_secs < MIN_TIMEOUT_SECS
            || self.request_timeout_secs > MAX_TIMEOUT_SECS
        {
            return Err(ConfigError::azure(format!(
                "azure.request_timeout_secs must be {}-{}, got {}",
                MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS, self.request_timeout_secs
            )));
        }

        if !(self.base_url.starts_with("https://") || self.base_url.starts_with("http://")) {
            return Err(ConfigError::azure(format!(
                "azure.base_url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }

        if self.api_version.trim().is_empty() {
            return Err(ConfigError::azure("azure.api_version must not be empty"));
        }

        Ok(())
    }
}

fn is_unset(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn normalize_or_default(value: &str, default: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}
