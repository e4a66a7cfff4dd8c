use crate::{ConfigError, ConfigErrorResult, DEFAULT_HTTP_HOST, DEFAULT_HTTP_PORT};

use serde::Deserialize;

/// Bind address for the HTTP JSON-RPC transport.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub host: String,
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: String::from(DEFAULT_HTTP_HOST),
            port: DEFAULT_HTTP_PORT,
        }
    }
}

impl HttpConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::http("http.host must not be empty"));
        }

        if self.port == 0 {
            return Err(ConfigError::http("http.port must be 1-65535, got 0"));
        }

        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
