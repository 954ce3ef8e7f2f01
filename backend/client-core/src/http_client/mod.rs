mod mutation_state;
pub(crate) mod resource;

pub use mutation_state::MutationState;

use crate::CSRF_HEADER_NAME;
use crate::config::ClientConfig;
use crate::cookie_jar::{CookieJar, SessionCookieJar};
use crate::csrf::CsrfSessionManager;
use crate::error::ApiError;

use common::RedactedToken;

use std::sync::Arc;

use log::{debug, warn};
use reqwest::cookie::Jar;
use reqwest::header::ACCEPT;
use reqwest::{Client, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

/// The one transport shared by every resource client.
///
/// Cloning is cheap and every clone shares the same connection pool and
/// cookie store.
#[derive(Clone)]
pub struct HttpClient {
    base_url: Url,
    client: Client,
    cookies: Arc<dyn CookieJar>,
    csrf: CsrfSessionManager,
}

impl HttpClient {
    /// Build a client with a fresh, empty cookie store.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        Self::with_cookie_store(config, Arc::new(Jar::default()))
    }

    /// Build a client around an existing cookie store, e.g. one carrying a
    /// session restored by the caller.
    pub fn with_cookie_store(config: &ClientConfig, store: Arc<Jar>) -> Result<Self, ApiError> {
        let cookies = Arc::new(SessionCookieJar::new(
            Arc::clone(&store),
            config.base_url.clone(),
        ));
        Self::from_parts(config, store, cookies)
    }

    /// Build a client whose CSRF reads go through `cookies` instead of `store`.
    pub fn from_parts(
        config: &ClientConfig,
        store: Arc<Jar>,
        cookies: Arc<dyn CookieJar>,
    ) -> Result<Self, ApiError> {
        let mut builder = Client::builder().cookie_provider(store);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        let csrf = CsrfSessionManager::new(client.clone(), &config.base_url, Arc::clone(&cookies))?;

        Ok(Self {
            base_url: config.base_url.clone(),
            client,
            cookies,
            csrf,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn csrf(&self) -> &CsrfSessionManager {
        &self.csrf
    }

    pub fn cookies(&self) -> &Arc<dyn CookieJar> {
        &self.cookies
    }

    fn prepare_request(
        &self,
        request: RequestBuilder,
        token: Option<&RedactedToken>,
    ) -> RequestBuilder {
        let mut request = request.header(ACCEPT, "application/json");
        if let Some(token) = token {
            request = request.header(CSRF_HEADER_NAME, token.expose());
        }
        request
    }

    /// Issue a read. The CSRF header is echoed when a token is already in the
    /// cookie store, but a plain read never triggers the handshake.
    ///
    /// # Errors
    ///
    /// [`ApiError::Network`], [`ApiError::Status`] or [`ApiError::Json`].
    pub async fn get<T>(&self, path: &str, params: &[(&str, &str)]) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let mut url = self.base_url.join(path)?;
        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params);
        }

        debug!("GET {} ({} query params)", url.path(), params.len());

        let token = self.csrf.current_token();
        let response = self
            .prepare_request(self.client.get(url), token.as_ref())
            .send()
            .await?;

        decode_response(response).await
    }

    /// Issue a mutation with a JSON body.
    ///
    /// The token is read from the cookie store right before sending; only if it
    /// is missing does the handshake run first.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Authentication`] if the handshake leaves no token
    /// - [`ApiError::Network`] / [`ApiError::Status`] from the handshake or the request
    /// - [`ApiError::Json`] if the response body does not decode as `T`
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.base_url.join(path)?;
        let mut state = MutationState::Idle;

        let token = match self.csrf.current_token() {
            Some(token) => token,
            None => {
                transition(&mut state, MutationState::AwaitingToken, url.path());
                match self.csrf.ensure_token().await {
                    Ok(Some(token)) => token,
                    Ok(None) => {
                        transition(&mut state, MutationState::Failed, url.path());
                        return Err(ApiError::authentication(format!(
                            "no CSRF token available for POST {}",
                            url.path()
                        )));
                    }
                    Err(e) => {
                        transition(&mut state, MutationState::Failed, url.path());
                        return Err(e);
                    }
                }
            }
        };

        transition(&mut state, MutationState::Requesting, url.path());
        let path = url.path().to_string();
        let result = self.send_post(url, &token, body).await;

        match &result {
            Ok(_) => transition(&mut state, MutationState::Succeeded, &path),
            Err(e) => {
                warn!("POST {} failed ({}): {}", path, e.error_category(), e);
                transition(&mut state, MutationState::Failed, &path);
            }
        }

        result
    }

    async fn send_post<T, B>(&self, url: Url, token: &RedactedToken, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self
            .prepare_request(self.client.post(url), Some(token))
            .json(body)
            .send()
            .await?;

        decode_response(response).await
    }
}

fn transition(state: &mut MutationState, next: MutationState, path: &str) {
    debug_assert!(
        state.can_transition_to(next),
        "illegal mutation transition {state:?} -> {next:?}"
    );
    debug!("POST {path}: {state:?} -> {next:?}");
    *state = next;
}

async fn decode_response<T>(response: Response) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    let status = response.status();
    let body = response.bytes().await?;

    if !status.is_success() {
        return Err(ApiError::from_status(
            status.as_u16(),
            String::from_utf8_lossy(&body),
        ));
    }

    Ok(serde_json::from_slice(&body)?)
}
