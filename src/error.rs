use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while answering a `search_recipes` call
#[derive(Error, Debug)]
pub enum SearchError {
    /// Call arguments were missing or malformed
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The outbound request could not be completed
    #[error("Failed to reach recipe service: {0}")]
    TransportFailure(String),

    /// The recipe service answered with a non-success status
    #[error("Recipe service returned HTTP {status}")]
    UpstreamStatus { status: u16 },

    /// Configuration could not be loaded or is incomplete
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// The HTTP client could not be built from the configuration
    #[error("HTTP client error: {0}")]
    ClientError(#[from] reqwest::Error),
}

/// Failure category reported back to the agent runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FetchErrorKind {
    InvalidArgument,
    TransportFailure,
    UpstreamStatusError,
}

/// Structured failure handed to the agent runtime.
///
/// Carries enough for the persona layer to pick an in-character message
/// without showing raw status codes to the user. Never holds recipe data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FetchError {
    pub kind: FetchErrorKind,
    pub status_code: Option<u16>,
    pub message: String,
}

impl FetchError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        FetchError {
            kind: FetchErrorKind::InvalidArgument,
            status_code: None,
            message: message.into(),
        }
    }
}

impl From<SearchError> for FetchError {
    fn from(err: SearchError) -> Self {
        let message = err.to_string();
        match err {
            SearchError::InvalidArgument(_) => FetchError {
                kind: FetchErrorKind::InvalidArgument,
                status_code: None,
                message,
            },
            SearchError::UpstreamStatus { status } => FetchError {
                kind: FetchErrorKind::UpstreamStatusError,
                status_code: Some(status),
                message,
            },
            // Config and client errors only surface at startup; if one leaks
            // into a call the request never completed.
            SearchError::TransportFailure(_)
            | SearchError::ConfigError(_)
            | SearchError::ClientError(_) => FetchError {
                kind: FetchErrorKind::TransportFailure,
                status_code: None,
                message,
            },
        }
    }
}
