use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] sl_config::ConfigError),

    #[error("Story service error: {0}")]
    Story(#[from] sl_devops::StoryError),

    #[error("MCP server error: {0}")]
    Mcp(#[from] sl_mcp::McpError),

    #[error("Console IO error: {message}: {source} {location}")]
    ConsoleIo {
        message: String,
        location: ErrorLocation,
        #[source]
        source: std::io::Error,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },
}

impl ServerError {
    #[track_caller]
    pub fn console_io(message: impl Into<String>, source: std::io::Error) -> Self {
        ServerError::ConsoleIo {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }

    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        ServerError::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ServerError>;
