use crate::config::ClientConfig;
use crate::error::{ConfigError, CoreError};
use crate::http_client::HttpClient;

use once_cell::sync::OnceCell;

static SHARED_CLIENT: OnceCell<HttpClient> = OnceCell::new();

/// The process-wide client, built from the environment on first use.
///
/// A failed build is not cached; the next call tries again.
///
/// # Errors
///
/// Returns [`CoreError::Config`] when the backend URL is missing or invalid and
/// [`CoreError::Api`] when the transport cannot be constructed.
pub fn shared_client() -> Result<&'static HttpClient, CoreError> {
    init_shared(&SHARED_CLIENT, ClientConfig::from_env)
}

/// Fill `cell` from `load` unless it already holds a client.
pub(crate) fn init_shared<F>(cell: &OnceCell<HttpClient>, load: F) -> Result<&HttpClient, CoreError>
where
    F: FnOnce() -> Result<ClientConfig, ConfigError>,
{
    cell.get_or_try_init(|| {
        let config = load()?;
        Ok(HttpClient::new(&config)?)
    })
}
