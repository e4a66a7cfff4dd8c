use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Which front-end drives the story action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    /// Interactive when stdin is a terminal, JSON-RPC otherwise. Opt-in only.
    Auto,
    #[default]
    Interactive,
    #[serde(rename = "jsonrpc")]
    JsonRpc,
}

impl FromStr for RunMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(RunMode::Auto),
            "interactive" => Ok(RunMode::Interactive),
            "jsonrpc" | "json-rpc" => Ok(RunMode::JsonRpc),
            other => Err(format!(
                "unknown mode '{other}' (expected auto, interactive or jsonrpc)"
            )),
        }
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RunMode::Auto => "auto",
            RunMode::Interactive => "interactive",
            RunMode::JsonRpc => "jsonrpc",
        };
        f.write_str(name)
    }
}

/// Message transport used in JSON-RPC mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transport {
    /// Newline-delimited JSON on stdin/stdout
    #[default]
    Stdio,
    /// `POST /mcp` on the configured HTTP address
    Http,
}

impl FromStr for Transport {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "stdio" => Ok(Transport::Stdio),
            "http" => Ok(Transport::Http),
            other => Err(format!("unknown transport '{other}' (expected stdio or http)")),
        }
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transport::Stdio => f.write_str("stdio"),
            Transport::Http => f.write_str("http"),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FrontendConfig {
    pub mode: RunMode,
    pub transport: Transport,
}
