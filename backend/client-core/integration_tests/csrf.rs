use crate::helpers::{
    HANDSHAKE_PATH, TEST_TOKEN, client_for, handshake_response, mount_handshake, requests_to,
};

use client_core::{ApiError, ClientConfig, HttpClient};

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: Verifies the handshake yields the decoded token from the cookie it set.
///
/// **WHY THIS MATTERS**: This is the only way a fresh session obtains a token; if the
/// cookie set by the handshake is not visible to the jar, no mutation can succeed.
///
/// **BUG THIS CATCHES**: Would catch the reqwest client and the cookie jar using
/// different stores, or the token being returned still URL-encoded.
#[tokio::test]
async fn given_handshake_sets_cookie_when_ensure_token_then_returns_decoded_token() {
    // GIVEN: A backend whose handshake sets XSRF-TOKEN
    let server = MockServer::start().await;
    mount_handshake(&server).await;
    let client = client_for(&server);
    assert!(client.csrf().current_token().is_none(), "Session starts without a token");

    // WHEN: Running the handshake
    let token = client.csrf().ensure_token().await.unwrap();

    // THEN: Decoded token, and it is now resident in the cookie store
    assert_eq!(token.as_ref().map(|t| t.expose()), Some(TEST_TOKEN));
    assert_eq!(
        client.csrf().current_token().as_ref().map(|t| t.expose()),
        Some(TEST_TOKEN)
    );
}

/// **VALUE**: Verifies `ensure_token` never reuses a previous result.
///
/// **WHY THIS MATTERS**: The server may rotate the token at any time. Re-running the
/// handshake on every call is what keeps the client from sending a stale token.
///
/// **BUG THIS CATCHES**: Would catch an in-memory cache short-circuiting the second call.
#[tokio::test]
async fn given_two_calls_when_ensure_token_then_two_handshakes_and_latest_value() {
    // GIVEN: The first handshake sets "first", later ones set "second"
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(HANDSHAKE_PATH))
        .respond_with(handshake_response("first"))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(HANDSHAKE_PATH))
        .respond_with(handshake_response("second"))
        .mount(&server)
        .await;
    let client = client_for(&server);

    // WHEN: Calling twice in sequence
    let first = client.csrf().ensure_token().await.unwrap();
    let second = client.csrf().ensure_token().await.unwrap();

    // THEN: Two handshakes, each returning the cookie as it stood afterwards
    assert_eq!(first.as_ref().map(|t| t.expose()), Some("first"));
    assert_eq!(second.as_ref().map(|t| t.expose()), Some("second"));
    assert_eq!(requests_to(&server, HANDSHAKE_PATH).await.len(), 2);
}

/// **VALUE**: Verifies that a handshake without a cookie yields `None`, not an error.
///
/// **WHY THIS MATTERS**: A missing cookie after a successful handshake means a
/// cookie-domain or CORS misconfiguration; callers need to see it as "no token".
#[tokio::test]
async fn given_handshake_without_cookie_when_ensure_token_then_returns_none() {
    // GIVEN: A handshake that succeeds but sets nothing
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(HANDSHAKE_PATH))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;
    let client = client_for(&server);

    // WHEN: Running the handshake
    let token = client.csrf().ensure_token().await;

    // THEN: Ok(None)
    assert!(matches!(token, Ok(None)), "Expected Ok(None), got {token:?}");
}

/// **VALUE**: Verifies that a failing handshake is reported with its status.
#[tokio::test]
async fn given_handshake_server_error_when_ensure_token_then_returns_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(HANDSHAKE_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let result = client.csrf().ensure_token().await;

    match result {
        Err(ApiError::Status { status_code, message, .. }) => {
            assert_eq!(status_code.0, 500);
            assert_eq!(message, "boom");
        }
        other => panic!("Expected Status error, got {other:?}"),
    }
}

/// **VALUE**: Verifies that a handshake error body is decoded like any other error body.
///
/// **BUG THIS CATCHES**: Would catch a non-UTF-8 body being dropped to an empty
/// message instead of being kept with replacement characters.
#[tokio::test]
async fn given_handshake_error_with_binary_body_when_ensure_token_then_message_is_lossy() {
    // GIVEN: A 503 whose body is not valid UTF-8
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(HANDSHAKE_PATH))
        .respond_with(ResponseTemplate::new(503).set_body_bytes(vec![b'd', b'o', b'w', b'n', 0xff]))
        .mount(&server)
        .await;
    let client = client_for(&server);

    // WHEN: Running the handshake
    let result = client.csrf().ensure_token().await;

    // THEN: Status error keeps the readable prefix
    match result {
        Err(ApiError::Status { status_code, message, .. }) => {
            assert_eq!(status_code.0, 503);
            assert_eq!(message, "down\u{FFFD}");
        }
        other => panic!("Expected Status error, got {other:?}"),
    }
}

/// **VALUE**: Verifies that an unreachable backend surfaces as a network error.
///
/// **BUG THIS CATCHES**: Would catch transport failures being swallowed into `Ok(None)`.
#[tokio::test]
async fn given_unreachable_backend_when_ensure_token_then_returns_network_error() {
    // GIVEN: A port nothing listens on
    let config = ClientConfig::new("http://127.0.0.1:9").unwrap();
    let client = HttpClient::new(&config).unwrap();

    // WHEN: Running the handshake
    let result = client.csrf().ensure_token().await;

    // THEN: Transport error
    let error = result.unwrap_err();
    assert!(matches!(error, ApiError::Network { .. }), "Got {error:?}");
    assert!(error.is_transport());
}
