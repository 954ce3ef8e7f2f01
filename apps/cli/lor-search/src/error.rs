use client_core::{ApiError, ConfigError, CoreError};
use common::ErrorLocation;

use std::panic::Location;

use serde::Serialize;
use thiserror::Error;

/// Errors reported by the command line front-end.
///
/// Printed to stderr as tagged JSON; the location stays attached so a failing
/// run can be traced to the call that produced it.
#[derive(Debug, Error, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum AppError {
    /// Error from this app (logging, arguments, output)
    #[error("App Error: {message} {location}")]
    App {
        message: String,
        location: ErrorLocation,
    },

    /// Missing or invalid backend configuration
    #[error("Config Error: {message} {location}")]
    Config {
        message: String,
        location: ErrorLocation,
    },

    /// Rejected locally before any request was made
    #[error("Invalid Input Error: {message} {location}")]
    InvalidInput {
        message: String,
        location: ErrorLocation,
    },

    /// The backend or the network failed the request
    #[error("Request Error: {message} {location}")]
    Request {
        message: String,
        status: Option<u16>,
        location: ErrorLocation,
    },
}

impl AppError {
    #[track_caller]
    pub fn app(message: impl Into<String>) -> Self {
        AppError::App {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ApiError> for AppError {
    #[track_caller]
    fn from(error: ApiError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match error {
            ApiError::InvalidQuery { message, .. } => AppError::InvalidInput { message, location },
            other => AppError::Request {
                status: other.status_code().map(|status| status.0),
                message: other.to_string(),
                location,
            },
        }
    }
}

impl From<ConfigError> for AppError {
    #[track_caller]
    fn from(error: ConfigError) -> Self {
        AppError::Config {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for AppError {
    #[track_caller]
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Api(api) => AppError::from(api),
            CoreError::Config(config) => AppError::from(config),
        }
    }
}
