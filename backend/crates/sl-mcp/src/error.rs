use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum McpError {
    #[error("Transport IO error: {message} {location}")]
    Io {
        message: String,
        location: ErrorLocation,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode response: {source} {location}")]
    Encode {
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
}

impl McpError {
    #[track_caller]
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        McpError::Io {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }

    #[track_caller]
    pub fn encode(source: serde_json::Error) -> Self {
        McpError::Encode {
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, McpError>;
