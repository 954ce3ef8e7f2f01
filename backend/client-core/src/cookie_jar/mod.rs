//! Read access to the session's cookies.
//!
//! Components never hold on to a cookie value. They ask a [`CookieJar`] each
//! time, so a token rotated by the server is picked up on the next request.

use std::sync::{Arc, RwLock};

use cookie::Cookie;
use reqwest::cookie::{CookieStore, Jar};
use url::Url;

/// The ambient cookie store, as seen from the backend's origin.
pub trait CookieJar: Send + Sync {
    /// The `Cookie` header value that would accompany a request to the backend.
    fn cookie_header(&self) -> Option<String>;

    /// Decoded value of the first cookie named `name`.
    fn get(&self, name: &str) -> Option<String> {
        self.cookie_header()
            .and_then(|header| parse_cookie(&header, name))
    }
}

/// Find `name` in a `Cookie` header and percent-decode its value.
///
/// Pairs are separated by `;`, the value runs up to the next `;` and may
/// itself contain `=`. Pairs that do not decode as UTF-8 are skipped.
pub fn parse_cookie(header: &str, name: &str) -> Option<String> {
    Cookie::split_parse_encoded(header)
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == name)
        .map(|cookie| cookie.value().to_string())
}

/// Cookies held by the HTTP client's own store.
///
/// The same [`Jar`] is installed as the client's cookie provider, so anything
/// a response sets is visible here as soon as that response is received.
#[derive(Debug, Clone)]
pub struct SessionCookieJar {
    store: Arc<Jar>,
    url: Url,
}

impl SessionCookieJar {
    pub fn new(store: Arc<Jar>, url: Url) -> Self {
        Self { store, url }
    }

    pub fn store(&self) -> &Arc<Jar> {
        &self.store
    }
}

impl CookieJar for SessionCookieJar {
    fn cookie_header(&self) -> Option<String> {
        let header = self.store.cookies(&self.url)?;
        header.to_str().ok().map(str::to_owned)
    }
}

/// A fixed, replaceable cookie header kept in memory.
#[derive(Debug, Default)]
pub struct MemoryCookieJar {
    header: RwLock<String>,
}

impl MemoryCookieJar {
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: RwLock::new(header.into()),
        }
    }

    /// Replace the whole header, e.g. to simulate the server rotating a token.
    pub fn set_header(&self, header: impl Into<String>) {
        if let Ok(mut guard) = self.header.write() {
            *guard = header.into();
        }
    }
}

impl CookieJar for MemoryCookieJar {
    fn cookie_header(&self) -> Option<String> {
        let guard = self.header.read().ok()?;
        if guard.is_empty() {
            None
        } else {
            Some(guard.clone())
        }
    }
}
