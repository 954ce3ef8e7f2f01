// Unit tests for the process-wide client cell
// Each test owns its OnceCell so the real singleton and environment stay untouched

use crate::config::{BACKEND_URL_ENV, ClientConfig};
use crate::error::{ConfigError, CoreError};
use crate::shared::init_shared;

use common::ErrorLocation;
use once_cell::sync::OnceCell;

use std::panic::Location;

fn missing_backend() -> Result<ClientConfig, ConfigError> {
    Err(ConfigError::MissingVar {
        name: BACKEND_URL_ENV,
        location: ErrorLocation::from(Location::caller()),
    })
}

fn local_backend() -> Result<ClientConfig, ConfigError> {
    ClientConfig::new("http://127.0.0.1:8000")
}

/// **VALUE**: Verifies that repeated calls hand out the same client.
///
/// **WHY THIS MATTERS**: Every caller must share one cookie store; a second client
/// would start a second session and miss the CSRF cookie the first one obtained.
///
/// **BUG THIS CATCHES**: Would catch the cell being rebuilt on each call.
#[test]
fn given_initialized_cell_when_called_again_then_same_instance_without_reload() {
    // GIVEN: A cell filled from a valid config
    let cell = OnceCell::new();
    let first = init_shared(&cell, local_backend).unwrap();

    // WHEN: Calling again with a loader that would fail
    let second = init_shared(&cell, missing_backend).unwrap();

    // THEN: The very same client, and the loader was never consulted
    assert!(std::ptr::eq(first, second));
}

/// **VALUE**: Verifies that a failed build leaves the cell empty for a later retry.
///
/// **WHY THIS MATTERS**: A process that starts before its `.env` is in place must be
/// able to recover once the configuration appears, without restarting.
///
/// **BUG THIS CATCHES**: Would catch a failed initialization being cached.
#[test]
fn given_failed_build_when_called_again_then_retries_and_succeeds() {
    // GIVEN: An empty cell and a missing backend URL
    let cell = OnceCell::new();

    // WHEN: The first attempt fails
    let result = init_shared(&cell, missing_backend);

    // THEN: Config error surfaces and nothing is stored
    let error = result.err();
    assert!(
        matches!(error, Some(CoreError::Config(ConfigError::MissingVar { .. }))),
        "Got {error:?}"
    );
    assert!(cell.get().is_none());

    // WHEN: A later attempt has a valid config
    let client = init_shared(&cell, local_backend).unwrap();

    // THEN: The cell now holds that client
    assert!(std::ptr::eq(client, cell.get().unwrap()));
    assert_eq!(client.base_url().as_str(), "http://127.0.0.1:8000/");
}
