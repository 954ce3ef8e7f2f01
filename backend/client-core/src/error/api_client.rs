//! Errors returned by the catalog and SearchList clients.
//!
//! - HTTP status codes stored directly (not parsed from strings)
//! - Transport failures keep the timeout / connection flags reqwest reports
//! - All errors include ErrorLocation via `#[track_caller]`

use common::{ErrorLocation, HttpStatusCode};
use models::ModelError;

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ApiError {
    /// Rejected locally; no request was sent.
    #[error("Invalid Query Error: {message} {location}")]
    InvalidQuery {
        message: String,
        location: ErrorLocation,
    },

    /// The handshake completed but left no CSRF cookie behind.
    #[error("Authentication Error: {message} {location}")]
    Authentication {
        message: String,
        location: ErrorLocation,
    },

    #[error("Network Error: {message} {location}")]
    Network {
        message: String,
        is_timeout: bool,
        is_connection: bool,
        location: ErrorLocation,
    },

    #[error("HTTP Error: HTTP {status_code} - {message} {location}")]
    Status {
        status_code: HttpStatusCode,
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON Error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
    },

    #[error("URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn invalid_query(message: impl Into<String>) -> Self {
        ApiError::InvalidQuery {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn authentication(message: impl Into<String>) -> Self {
        ApiError::Authentication {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create from a non-2xx response with its body as the message.
    #[track_caller]
    pub fn from_status(status_code: u16, body: impl Into<String>) -> Self {
        ApiError::Status {
            status_code: HttpStatusCode(status_code),
            message: body.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Network failure or non-2xx response; never produced locally.
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Network { .. } | ApiError::Status { .. })
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, ApiError::Network { is_timeout: true, .. })
    }

    pub fn status_code(&self) -> Option<HttpStatusCode> {
        match self {
            ApiError::Status { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }

    /// Short category name for log lines.
    pub fn error_category(&self) -> &'static str {
        match self {
            ApiError::InvalidQuery { .. } => "invalid_query",
            ApiError::Authentication { .. } => "authentication",
            ApiError::Network { is_timeout: true, .. } => "timeout",
            ApiError::Network { is_connection: true, .. } => "connection",
            ApiError::Network { .. } => "network",
            ApiError::Status { status_code, .. } if status_code.is_session_expired() => {
                "session_expired"
            }
            ApiError::Status { status_code, .. } if status_code.is_client_error() => {
                "client_error"
            }
            ApiError::Status { status_code, .. } if status_code.is_server_error() => {
                "server_error"
            }
            ApiError::Status { .. } => "http_status",
            ApiError::Json { .. } => "json",
            ApiError::UrlParse { .. } => "url_parse",
        }
    }
}

impl From<ModelError> for ApiError {
    #[track_caller]
    fn from(error: ModelError) -> Self {
        ApiError::InvalidQuery {
            message: error.message().to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<url::ParseError> for ApiError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        ApiError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        // Check for specific error types BEFORE converting to string
        if let Some(status) = error.status() {
            return ApiError::Status {
                status_code: HttpStatusCode(status.as_u16()),
                message: error.to_string(),
                location: ErrorLocation::from(Location::caller()),
            };
        }

        ApiError::Network {
            is_timeout: error.is_timeout(),
            is_connection: error.is_connect(),
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        ApiError::Json {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
