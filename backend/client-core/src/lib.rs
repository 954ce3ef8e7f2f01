//! Session-authenticated access to the LoR character catalog.
//!
//! One [`HttpClient`] owns the transport and the session's cookie store.
//! [`CharacterSearchClient`] and [`SearchListClient`] are thin typed layers on
//! top of it, and [`CsrfSessionManager`] performs the Sanctum handshake that
//! puts the `XSRF-TOKEN` cookie in place before mutating requests.

pub mod character_search;
pub mod config;
pub mod cookie_jar;
pub mod csrf;
pub mod error;
pub mod http_client;
pub mod search_list;

mod shared;
#[cfg(test)]
mod tests;

pub use character_search::CharacterSearchClient;
pub use config::ClientConfig;
pub use cookie_jar::{CookieJar, MemoryCookieJar, SessionCookieJar, parse_cookie};
pub use csrf::CsrfSessionManager;
pub use error::{ApiError, ConfigError, CoreError};
pub use http_client::{HttpClient, MutationState};
pub use search_list::SearchListClient;
pub use shared::shared_client;

use const_format::concatcp;

pub const CSRF_COOKIE_NAME: &str = "XSRF-TOKEN";
pub const CSRF_HEADER_NAME: &str = "X-XSRF-TOKEN";
pub const CSRF_HANDSHAKE_ENDPOINT: &str = "sanctum/csrf-cookie";
pub const API_PREFIX: &str = "api/v1/";
pub const CHARACTER_ENDPOINT: &str = concatcp!(API_PREFIX, "character");
pub const SEARCH_LIST_ENDPOINT: &str = concatcp!(API_PREFIX, "searchlist");
