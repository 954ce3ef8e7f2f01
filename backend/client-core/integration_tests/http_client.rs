use crate::helpers::{
    HANDSHAKE_PATH, SEARCH_LIST_PATH, TEST_TOKEN, client_for, csrf_header, handshake_response,
    requests_to,
};

use client_core::{ApiError, ClientConfig, HttpClient, MemoryCookieJar};

use std::sync::Arc;
use std::time::Duration;

use reqwest::cookie::Jar;
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: Verifies that a resident token skips the handshake entirely.
///
/// **WHY THIS MATTERS**: `AwaitingToken` is only entered when the cookie is missing;
/// an unconditional handshake would double every save.
#[tokio::test]
async fn given_resident_token_when_posting_then_no_handshake() {
    // GIVEN: A session whose cookie store already holds the token
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SEARCH_LIST_PATH))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"ok": true})))
        .mount(&server)
        .await;
    let config = ClientConfig::new(&server.uri()).unwrap();
    let store = Arc::new(Jar::default());
    store.add_cookie_str("XSRF-TOKEN=abc%3Ddef; Path=/", &config.base_url);
    let client = HttpClient::with_cookie_store(&config, store).unwrap();

    // WHEN: Posting
    let _: Value = client.post("api/v1/searchlist", &json!({"name": "x"})).await.unwrap();

    // THEN: Token echoed, handshake never requested
    let posts = requests_to(&server, SEARCH_LIST_PATH).await;
    assert_eq!(csrf_header(&posts[0]).as_deref(), Some(TEST_TOKEN));
    assert!(requests_to(&server, HANDSHAKE_PATH).await.is_empty());
}

/// **VALUE**: Verifies that each mutation re-reads the cookie instead of reusing a token.
///
/// **WHY THIS MATTERS**: Laravel may rotate `XSRF-TOKEN` on any response. Sending the
/// previous value after a rotation fails with 419.
///
/// **BUG THIS CATCHES**: Would catch the token being cached on the client.
#[tokio::test]
async fn given_token_rotated_by_response_when_posting_again_then_new_token_is_sent() {
    // GIVEN: The first POST rotates the token
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(HANDSHAKE_PATH))
        .respond_with(handshake_response("abc%3Ddef"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(SEARCH_LIST_PATH))
        .respond_with(
            ResponseTemplate::new(201)
                .insert_header("set-cookie", "XSRF-TOKEN=rotated; Path=/")
                .set_body_json(json!({})),
        )
        .mount(&server)
        .await;
    let client = client_for(&server);

    // WHEN: Posting twice
    let _: Value = client.post("api/v1/searchlist", &json!({})).await.unwrap();
    let _: Value = client.post("api/v1/searchlist", &json!({})).await.unwrap();

    // THEN: First request carries the handshake token, second the rotated one
    let posts = requests_to(&server, SEARCH_LIST_PATH).await;
    assert_eq!(csrf_header(&posts[0]).as_deref(), Some(TEST_TOKEN));
    assert_eq!(csrf_header(&posts[1]).as_deref(), Some("rotated"));
    assert_eq!(requests_to(&server, HANDSHAKE_PATH).await.len(), 1);
}

/// **VALUE**: Verifies that a mutation without obtainable token fails before sending.
///
/// **WHY THIS MATTERS**: Posting without the header is guaranteed to be rejected;
/// reporting `Authentication` tells the caller the session itself is broken.
#[tokio::test]
async fn given_handshake_without_cookie_when_posting_then_authentication_error() {
    // GIVEN: A handshake that never sets the cookie
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(HANDSHAKE_PATH))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;
    let client = client_for(&server);

    // WHEN: Posting
    let result: Result<Value, ApiError> = client.post("api/v1/searchlist", &json!({})).await;

    // THEN: Authentication error, handshake attempted, mutation never sent
    assert!(
        matches!(result, Err(ApiError::Authentication { .. })),
        "Got {result:?}"
    );
    assert_eq!(requests_to(&server, HANDSHAKE_PATH).await.len(), 1);
    assert!(requests_to(&server, SEARCH_LIST_PATH).await.is_empty());
}

/// **VALUE**: Verifies that an expired session is reported once, with no retry.
///
/// **BUG THIS CATCHES**: Would catch an automatic re-handshake-and-retry loop.
#[tokio::test]
async fn given_expired_session_when_posting_then_status_419_and_single_attempt() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SEARCH_LIST_PATH))
        .respond_with(ResponseTemplate::new(419).set_body_string("CSRF token mismatch."))
        .mount(&server)
        .await;
    let config = ClientConfig::new(&server.uri()).unwrap();
    let store = Arc::new(Jar::default());
    store.add_cookie_str("XSRF-TOKEN=stale; Path=/", &config.base_url);
    let client = HttpClient::with_cookie_store(&config, store).unwrap();

    let error = client
        .post::<Value, _>("api/v1/searchlist", &json!({}))
        .await
        .unwrap_err();

    let status = error.status_code().unwrap();
    assert!(status.is_session_expired());
    assert_eq!(requests_to(&server, SEARCH_LIST_PATH).await.len(), 1);
    assert!(requests_to(&server, HANDSHAKE_PATH).await.is_empty());
}

/// **VALUE**: Verifies that an injected cookie jar drives the CSRF header.
///
/// **WHY THIS MATTERS**: The jar is the seam for tests and embedders that manage
/// cookies themselves.
#[tokio::test]
async fn given_injected_memory_jar_when_posting_then_its_token_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SEARCH_LIST_PATH))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({})))
        .mount(&server)
        .await;
    let config = ClientConfig::new(&server.uri()).unwrap();
    let jar = Arc::new(MemoryCookieJar::new("laravel_session=s; XSRF-TOKEN=from%20memory"));
    let client = HttpClient::from_parts(&config, Arc::new(Jar::default()), jar).unwrap();

    let _: Value = client.post("api/v1/searchlist", &json!({})).await.unwrap();

    let posts = requests_to(&server, SEARCH_LIST_PATH).await;
    assert_eq!(csrf_header(&posts[0]).as_deref(), Some("from memory"));
}

/// **VALUE**: Verifies that timeouts come from the transport configuration.
#[tokio::test]
async fn given_slow_backend_and_timeout_when_getting_then_returns_timeout_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/character"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"count": 0, "data": []}))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;
    let config = ClientConfig::new(&server.uri())
        .unwrap()
        .with_timeout(Duration::from_millis(200));
    let client = HttpClient::new(&config).unwrap();

    let error = client
        .get::<Value>("api/v1/character", &[])
        .await
        .unwrap_err();

    assert!(error.is_timeout(), "Expected timeout, got {error:?}");
}

/// **VALUE**: Verifies that a non-JSON success body is reported as a JSON error.
#[tokio::test]
async fn given_html_body_when_getting_then_returns_json_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/character"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let error = client
        .get::<Value>("api/v1/character", &[])
        .await
        .unwrap_err();

    assert!(matches!(error, ApiError::Json { .. }), "Got {error:?}");
}
