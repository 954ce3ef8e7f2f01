//! Shared building blocks for the LoR search client.
//!
//! Everything in here is independent of the catalog domain and of the
//! transport: location-tracked errors, HTTP status classification, and the
//! secret wrapper used for the session's CSRF token.
//!
//! ## Architecture
//!
//! - **common** (this crate): Cross-cutting types
//! - **models**: Wire data for characters and SearchLists
//! - **client-core**: Session, transport and resource clients
//! - **lor-search**: Command line wiring

pub mod error;
pub mod http_status;
pub mod redacted_token;

#[cfg(test)]
mod tests;

pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use http_status::HttpStatusCode;
pub use redacted_token::RedactedToken;
