use crate::helpers::{
    CHARACTER_PATH, CatalogResponder, HANDSHAKE_PATH, TEST_TOKEN, catalog, client_for,
    csrf_header, query_pairs, requests_to,
};

use client_core::{ApiError, CharacterSearchClient, ClientConfig, HttpClient};

use models::SearchQuery;

use std::sync::Arc;

use reqwest::cookie::Jar;
use serde_json::json;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn catalog_server() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CHARACTER_PATH))
        .respond_with(CatalogResponder::new(catalog()))
        .mount(&server)
        .await;
    server
}

/// **VALUE**: Verifies that a term without a field is rejected before any request.
///
/// **WHY THIS MATTERS**: The check is a local precondition; hitting the network
/// for a query the backend cannot answer wastes a round-trip and muddles errors.
///
/// **BUG THIS CATCHES**: Would catch validation moving after the request is sent.
#[tokio::test]
async fn given_term_without_field_when_searching_then_invalid_query_and_no_request() {
    // GIVEN: A catalog backend
    let server = catalog_server().await;
    let search = CharacterSearchClient::new(client_for(&server));

    // WHEN: Searching with a term only
    let result = search.search(Some("gan"), None).await;

    // THEN: InvalidQuery, and zero requests observed
    assert!(
        matches!(result, Err(ApiError::InvalidQuery { .. })),
        "Expected InvalidQuery, got {result:?}"
    );
    assert!(server.received_requests().await.unwrap().is_empty());
}

/// **VALUE**: Verifies that a full query sends exactly `term` and `field`.
///
/// **BUG THIS CATCHES**: Would catch extra keys (e.g. `page=`, empty values)
/// leaking into the query string.
#[tokio::test]
async fn given_term_and_field_when_searching_then_params_are_exactly_term_and_field() {
    let server = catalog_server().await;
    let search = CharacterSearchClient::new(client_for(&server));

    search.search(Some("gan"), Some("name")).await.unwrap();

    let requests = requests_to(&server, CHARACTER_PATH).await;
    assert_eq!(requests.len(), 1);
    assert_eq!(
        query_pairs(&requests[0]),
        vec![
            ("term".to_string(), "gan".to_string()),
            ("field".to_string(), "name".to_string())
        ]
    );
}

/// **VALUE**: Verifies that an unfiltered search sends no parameters.
#[tokio::test]
async fn given_no_term_when_searching_then_no_params_are_sent() {
    let server = catalog_server().await;
    let search = CharacterSearchClient::new(client_for(&server));

    let response = search.search(None, None).await.unwrap();

    let requests = requests_to(&server, CHARACTER_PATH).await;
    assert!(query_pairs(&requests[0]).is_empty());
    assert_eq!(response.data.len(), 100);
}

/// **VALUE**: End-to-end search over a 100 character catalog.
///
/// **WHY THIS MATTERS**: Mirrors the user typing "gan" into the search box; the table
/// must shrink from 100 rows to the 3 matches.
#[tokio::test]
async fn given_catalog_of_100_when_searching_gan_by_name_then_three_results() {
    // GIVEN: 100 characters, 3 with "gan" in their name
    let server = catalog_server().await;
    let search = CharacterSearchClient::new(client_for(&server));

    // WHEN: Searching by name
    let response = search.search(Some("gan"), Some("name")).await.unwrap();

    // THEN: Three matches, in server order
    assert_eq!(response.data.len(), 3);
    assert_eq!(response.count, 3);
    let names: Vec<_> = response.data.iter().filter_map(|c| c.name()).collect();
    assert_eq!(names, vec!["Gandalf", "Gandalf the White", "Morgan"]);
}

/// **VALUE**: Verifies that `count` and `data` are passed through untouched.
///
/// **BUG THIS CATCHES**: Would catch client-side dedup, sorting, or `count` rewrites.
#[tokio::test]
async fn given_paginated_response_when_searching_then_body_is_unmodified() {
    // GIVEN: A server reporting more matches than it returns, with a duplicate row
    let server = MockServer::start().await;
    let body = json!({
        "count": 933,
        "data": [{"name": "Sam"}, {"name": "Frodo"}, {"name": "Sam"}]
    });
    Mock::given(method("GET"))
        .and(path(CHARACTER_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;
    let search = CharacterSearchClient::new(client_for(&server));

    // WHEN: Searching
    let response = search.search(None, None).await.unwrap();

    // THEN: Exactly what the server sent
    assert_eq!(response.count, 933);
    let names: Vec<_> = response.data.iter().filter_map(|c| c.name()).collect();
    assert_eq!(names, vec!["Sam", "Frodo", "Sam"]);
}

/// **VALUE**: Verifies that reads echo a resident token but never run the handshake.
///
/// **WHY THIS MATTERS**: Searches fire on every keystroke; a handshake per keystroke
/// would double the request volume for no benefit.
#[tokio::test]
async fn given_resident_token_when_searching_then_header_sent_without_handshake() {
    // GIVEN: A cookie store that already holds the token
    let server = catalog_server().await;
    let config = ClientConfig::new(&server.uri()).unwrap();
    let store = Arc::new(Jar::default());
    let url = Url::parse(&server.uri()).unwrap();
    store.add_cookie_str("XSRF-TOKEN=abc%3Ddef; Path=/", &url);
    let search = CharacterSearchClient::new(HttpClient::with_cookie_store(&config, store).unwrap());

    // WHEN: Searching
    search.search(Some("gan"), Some("name")).await.unwrap();

    // THEN: Header echoed, no handshake
    let requests = requests_to(&server, CHARACTER_PATH).await;
    assert_eq!(csrf_header(&requests[0]).as_deref(), Some(TEST_TOKEN));
    assert!(requests_to(&server, HANDSHAKE_PATH).await.is_empty());
}

/// **VALUE**: Verifies a saved query can be re-run as-is.
#[tokio::test]
async fn given_saved_query_when_search_query_then_same_params_are_sent() {
    let server = catalog_server().await;
    let search = CharacterSearchClient::new(client_for(&server));
    let query = SearchQuery::new(Some("maiar"), Some("race")).unwrap();

    let response = search.search_query(&query).await.unwrap();

    assert_eq!(response.data.len(), 2);
}

/// **VALUE**: Verifies that a backend failure reaches the caller as a transport error.
#[tokio::test]
async fn given_server_error_when_searching_then_returns_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CHARACTER_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream down"))
        .mount(&server)
        .await;
    let search = CharacterSearchClient::new(client_for(&server));

    let error = search.search(None, None).await.unwrap_err();

    assert!(error.is_transport());
    assert_eq!(error.status_code().map(|s| s.0), Some(500));
}
