//! Sanctum CSRF handshake.
//!
//! `GET /sanctum/csrf-cookie` makes the backend set `XSRF-TOKEN`. The token
//! lives only in the cookie store; this manager re-reads it on every call.

use crate::CSRF_COOKIE_NAME;
use crate::CSRF_HANDSHAKE_ENDPOINT;
use crate::cookie_jar::CookieJar;
use crate::error::ApiError;

use common::RedactedToken;

use std::sync::Arc;

use log::{debug, warn};
use reqwest::Client;
use reqwest::header::ACCEPT;
use url::Url;

#[derive(Clone)]
pub struct CsrfSessionManager {
    client: Client,
    handshake_url: Url,
    cookies: Arc<dyn CookieJar>,
}

impl CsrfSessionManager {
    /// `client` must share its cookie store with `cookies`, otherwise the
    /// handshake's cookie is never seen.
    pub fn new(
        client: Client,
        base_url: &Url,
        cookies: Arc<dyn CookieJar>,
    ) -> Result<Self, ApiError> {
        let handshake_url = base_url.join(CSRF_HANDSHAKE_ENDPOINT)?;

        Ok(Self {
            client,
            handshake_url,
            cookies,
        })
    }

    /// Run the handshake, then read the token the server just set.
    ///
    /// Every call hits the network; nothing is cached between calls.
    ///
    /// # Returns
    ///
    /// `Ok(None)` when the cookie is still missing after a successful
    /// handshake. That usually means a cross-origin or cookie-domain
    /// misconfiguration and is not fixed by retrying.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] if the handshake cannot be sent and
    /// [`ApiError::Status`] if the backend answers with a non-2xx status.
    pub async fn ensure_token(&self) -> Result<Option<RedactedToken>, ApiError> {
        debug!("CSRF handshake: GET {}", self.handshake_url);

        let response = self
            .client
            .get(self.handshake_url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.bytes().await?;
            return Err(ApiError::from_status(
                status.as_u16(),
                String::from_utf8_lossy(&body),
            ));
        }

        match self.current_token() {
            Some(token) => {
                debug!("CSRF handshake complete ({} char token)", token.len());
                Ok(Some(token))
            }
            None => {
                warn!(
                    "CSRF handshake succeeded but no {} cookie is visible for {}",
                    CSRF_COOKIE_NAME, self.handshake_url
                );
                Ok(None)
            }
        }
    }

    /// Token currently held by the cookie store, without any network traffic.
    pub fn current_token(&self) -> Option<RedactedToken> {
        self.cookies
            .get(CSRF_COOKIE_NAME)
            .filter(|value| !value.is_empty())
            .map(RedactedToken::new)
    }
}
