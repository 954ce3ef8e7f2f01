pub mod api_client;
pub mod config;

pub use api_client::ApiError;
pub use config::ConfigError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
