//! Backend location and transport settings, read from the environment.
//!
//! `LOR_APP_BACKEND` is required; a missing or malformed value fails at
//! startup rather than on the first request.

use crate::error::config::ConfigError;

use common::ErrorLocation;

use std::env;
use std::panic::Location;
use std::path::PathBuf;
use std::time::Duration;

use log::{debug, info, warn};
use url::Url;

pub const BACKEND_URL_ENV: &str = "LOR_APP_BACKEND";
pub const HTTP_TIMEOUT_ENV: &str = "LOR_HTTP_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Origin of the backend, always ending in `/` so endpoint paths join under it.
    pub base_url: Url,
    /// Passed straight to the transport; the client adds no timeout logic of its own.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// Build a config for an explicit backend URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] unless `base_url` is an absolute
    /// `http` or `https` URL.
    #[track_caller]
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            timeout: None,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Load from the process environment, after merging a `.env` file if one exists.
    ///
    /// # Errors
    ///
    /// See [`ClientConfig::from_lookup`].
    pub fn from_env() -> Result<Self, ConfigError> {
        if try_load_dotenv().is_none() {
            debug!("No .env file found - using existing environment variables");
        }

        Self::from_lookup(read_env_var)
    }

    /// Load using `lookup` to resolve variable names.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MissingVar`] if the backend URL is unset or empty
    /// - [`ConfigError::InvalidUrl`] if it is not an absolute http(s) URL
    /// - [`ConfigError::ValidationError`] if the timeout is not a positive integer
    #[track_caller]
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_url = lookup(BACKEND_URL_ENV)
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingVar {
                location: ErrorLocation::from(Location::caller()),
                name: BACKEND_URL_ENV,
            })?;

        let mut config = Self::new(raw_url.trim())?;

        if let Some(raw_timeout) = lookup(HTTP_TIMEOUT_ENV) {
            config.timeout = Some(parse_timeout(&raw_timeout)?);
        }

        info!(
            "Backend configured at {} (timeout: {:?})",
            config.base_url, config.timeout
        );
        Ok(config)
    }
}

#[track_caller]
fn parse_base_url(value: &str) -> Result<Url, ConfigError> {
    let location = ErrorLocation::from(Location::caller());
    let invalid = |reason: String| ConfigError::InvalidUrl {
        location,
        name: BACKEND_URL_ENV,
        value: value.to_string(),
        reason,
    };

    let mut url = Url::parse(value).map_err(|e| invalid(e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }

    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid(String::from("must not carry a query or fragment")));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}

#[track_caller]
fn parse_timeout(value: &str) -> Result<Duration, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::ValidationError {
            location: ErrorLocation::from(Location::caller()),
            name: HTTP_TIMEOUT_ENV,
            value: value.to_string(),
            reason: String::from("must be a positive number of seconds"),
        }),
    }
}

fn read_env_var(name: &str) -> Option<String> {
    match env::var(name) {
        Ok(value) => Some(value),
        Err(env::VarError::NotPresent) => None,
        Err(env::VarError::NotUnicode(_)) => {
            warn!("Env var {name} contains invalid unicode, ignoring it");
            None
        }
    }
}

/// Attempts to load .env from the working directory, then the executable's directory.
fn try_load_dotenv() -> Option<PathBuf> {
    if let Ok(path) = dotenvy::dotenv() {
        info!("Loaded .env from: {:?}", path);
        return Some(path);
    }

    let exe_path = env::current_exe().ok()?;
    let env_path = exe_path.parent()?.join(".env");
    if !env_path.exists() {
        return None;
    }

    match dotenvy::from_path(&env_path) {
        Ok(()) => {
            info!("Loaded .env from: {:?}", env_path);
            Some(env_path)
        }
        Err(e) => {
            warn!("Failed to parse .env at {:?}: {}", env_path, e);
            None
        }
    }
}
