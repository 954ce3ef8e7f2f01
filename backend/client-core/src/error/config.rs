use common::ErrorLocation;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config Missing Variable Error: {name} is not set {location}")]
    MissingVar {
        location: ErrorLocation,
        name: &'static str,
    },

    #[error("Config Invalid URL Error: {name}={value}: {reason} {location}")]
    InvalidUrl {
        location: ErrorLocation,
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("Config Validation Error: {name}={value}: {reason} {location}")]
    ValidationError {
        location: ErrorLocation,
        name: &'static str,
        value: String,
        reason: String,
    },
}
