use sl_config::Secret;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Everything that can end a story creation request.
///
/// The display text is meant for the person (or agent) who asked for the
/// story; the location is for logs. No variant ever carries the credential.
#[derive(Error, Debug)]
pub enum StoryError {
    #[error("Invalid input: {message}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        location: ErrorLocation,
    },

    #[error(
        "Authentication failed (HTTP {status}): the Azure DevOps token is invalid or lacks the required scope"
    )]
    Authentication {
        status: u16,
        location: ErrorLocation,
    },

    #[error(
        "Not found (HTTP 404): the organization or project does not exist or is not visible to this token"
    )]
    NotFound { location: ErrorLocation },

    #[error("Azure DevOps rejected the request (HTTP {status}): {message}")]
    RequestRejected {
        status: u16,
        /// Remote error body, verbatim. Opaque text, never parsed further.
        message: String,
        location: ErrorLocation,
    },

    #[error("Azure DevOps is unavailable (HTTP {status})")]
    ServiceUnavailable {
        status: u16,
        location: ErrorLocation,
    },

    #[error("Transport error: {message}")]
    Transport {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Unexpected response format: {message}")]
    ResponseFormat {
        message: String,
        location: ErrorLocation,
    },

    #[error("Unexpected response (HTTP {status}): {body}")]
    UnknownResponse {
        status: u16,
        body: String,
        location: ErrorLocation,
    },
}

impl StoryError {
    #[track_caller]
    pub fn validation<S: Into<String>>(message: S) -> Self {
        StoryError::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        StoryError::Configuration {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn response_format<S: Into<String>>(message: S) -> Self {
        StoryError::ResponseFormat {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Convert reqwest error with context, masking the credential if the
    /// underlying message happens to contain it.
    #[track_caller]
    pub fn transport(err: reqwest::Error, credential: &Secret) -> Self {
        let message = if err.is_timeout() {
            format!("request timed out: {err}")
        } else if err.is_connect() {
            format!("could not connect: {err}")
        } else {
            err.to_string()
        };

        StoryError::Transport {
            message: credential.scrub(&message),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Map a non-success HTTP status to its error kind.
    #[track_caller]
    pub fn from_status(status: u16, body: &str) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match status {
            401 | 403 => StoryError::Authentication { status, location },
            404 => StoryError::NotFound { location },
            400..=499 => StoryError::RequestRejected {
                status,
                message: body.trim().to_string(),
                location,
            },
            500..=599 => StoryError::ServiceUnavailable { status, location },
            _ => StoryError::UnknownResponse {
                status,
                body: body.to_string(),
                location,
            },
        }
    }

    /// Short machine-friendly name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            StoryError::Validation { .. } => "validation",
            StoryError::Configuration { .. } => "configuration",
            StoryError::Authentication { .. } => "authentication",
            StoryError::NotFound { .. } => "not_found",
            StoryError::RequestRejected { .. } => "request_rejected",
            StoryError::ServiceUnavailable { .. } => "service_unavailable",
            StoryError::Transport { .. } => "transport",
            StoryError::ResponseFormat { .. } => "response_format",
            StoryError::UnknownResponse { .. } => "unknown_response",
        }
    }

    pub fn location(&self) -> &ErrorLocation {
        match self {
            StoryError::Validation { location, .. }
            | StoryError::Configuration { location, .. }
            | StoryError::Authentication { location, .. }
            | StoryError::NotFound { location }
            | StoryError::RequestRejected { location, .. }
            | StoryError::ServiceUnavailable { location, .. }
            | StoryError::Transport { location, .. }
            | StoryError::ResponseFormat { location, .. }
            | StoryError::UnknownResponse { location, .. } => location,
        }
    }
}

pub type Result<T> = std::result::Result<T, StoryError>;
