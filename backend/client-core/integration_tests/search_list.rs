use crate::helpers::{
    CHARACTER_PATH, HANDSHAKE_PATH, SEARCH_LIST_PATH, TEST_TOKEN, client_for, csrf_header,
    mount_search_list_backend, requests_to,
};

use client_core::{ApiError, SearchListClient};

use models::{SearchListId, SearchQuery};

use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: End-to-end create then append against an empty SearchList set.
///
/// **WHY THIS MATTERS**: This is the save-search flow: a new session creates a list,
/// then stores the current query into it. Both calls need the CSRF handshake.
///
/// **BUG THIS CATCHES**: Would catch a missing `X-XSRF-TOKEN` header (backend
/// answers 419), or the saved query coming back altered.
#[tokio::test]
async fn given_empty_backend_when_create_then_add_search_then_query_round_trips() {
    // GIVEN: A backend with no lists and a fresh session
    let server = MockServer::start().await;
    mount_search_list_backend(&server).await;
    let lists = SearchListClient::new(client_for(&server));

    // WHEN: Creating a list
    let list = lists.create("MyList").await.unwrap();

    // THEN: Named as requested, no searches yet
    assert_eq!(list.name, "MyList");
    assert!(list.searches.is_empty());

    // WHEN: Appending a search to it
    let query = SearchQuery::new(Some("gan"), Some("name")).unwrap();
    let saved = lists.add_search(list.id, &query).await.unwrap();

    // THEN: The saved query matches the input exactly
    assert_eq!(saved.query, query);
    assert_eq!(saved.search_list_id, list.id);

    // AND: The handshake ran once; the second call reused the resident cookie
    assert_eq!(requests_to(&server, HANDSHAKE_PATH).await.len(), 1);
    let posts = requests_to(&server, SEARCH_LIST_PATH).await;
    assert_eq!(posts.len(), 2);
    for post in &posts {
        assert_eq!(csrf_header(post).as_deref(), Some(TEST_TOKEN));
    }
}

/// **VALUE**: Verifies the wire bodies of both operations on the shared endpoint.
#[tokio::test]
async fn given_create_and_add_search_when_posted_then_bodies_distinguish_operations() {
    let server = MockServer::start().await;
    mount_search_list_backend(&server).await;
    let lists = SearchListClient::new(client_for(&server));

    let list = lists.create("Wizards").await.unwrap();
    let query = SearchQuery::new(Some("gan"), Some("name")).unwrap();
    lists.add_search(list.id, &query).await.unwrap();

    let posts = requests_to(&server, SEARCH_LIST_PATH).await;
    let bodies: Vec<Value> = posts
        .iter()
        .map(|request| serde_json::from_slice(&request.body).unwrap())
        .collect();
    assert_eq!(bodies[0], json!({"name": "Wizards"}));
    assert_eq!(
        bodies[1],
        json!({"search_list_id": list.id.0, "term": "gan", "field": "name"})
    );
}

/// **VALUE**: Verifies that a duplicate name is a server-reported transport error.
///
/// **WHY THIS MATTERS**: Uniqueness is the backend's rule; the client must not guess,
/// and callers must be able to show the server's message.
///
/// **BUG THIS CATCHES**: Would catch a local pre-check or a swallowed 422.
#[tokio::test]
async fn given_existing_name_when_create_again_then_second_call_is_transport_error() {
    // GIVEN: A list named "Duplicate" exists
    let server = MockServer::start().await;
    mount_search_list_backend(&server).await;
    let lists = SearchListClient::new(client_for(&server));
    lists.create("Duplicate").await.unwrap();

    // WHEN: Creating it again
    let error = lists.create("Duplicate").await.unwrap_err();

    // THEN: Transport error carrying the 422, and the request did go out
    assert!(error.is_transport(), "Expected transport error, got {error:?}");
    match &error {
        ApiError::Status { status_code, message, .. } => {
            assert_eq!(status_code.0, 422);
            assert!(message.contains("already been taken"));
        }
        other => panic!("Expected Status error, got {other:?}"),
    }
    assert_eq!(requests_to(&server, SEARCH_LIST_PATH).await.len(), 2);
}

/// **VALUE**: Verifies that a blank name is rejected locally.
#[tokio::test]
async fn given_blank_name_when_create_then_invalid_query_and_no_request() {
    let server = MockServer::start().await;
    mount_search_list_backend(&server).await;
    let lists = SearchListClient::new(client_for(&server));

    let result = lists.create("   ").await;

    assert!(matches!(result, Err(ApiError::InvalidQuery { .. })));
    assert!(server.received_requests().await.unwrap().is_empty());
}

/// **VALUE**: Verifies that appending to an unknown list surfaces the 404.
#[tokio::test]
async fn given_unknown_list_when_add_search_then_returns_not_found() {
    let server = MockServer::start().await;
    mount_search_list_backend(&server).await;
    let lists = SearchListClient::new(client_for(&server));

    let error = lists
        .add_search(SearchListId(99), &SearchQuery::all())
        .await
        .unwrap_err();

    assert_eq!(error.status_code().map(|s| s.0), Some(404));
}

/// **VALUE**: Verifies that created lists show up in the listing, searches included.
#[tokio::test]
async fn given_created_lists_when_listing_then_all_are_returned() {
    let server = MockServer::start().await;
    mount_search_list_backend(&server).await;
    let lists = SearchListClient::new(client_for(&server));
    let first = lists.create("Hobbits").await.unwrap();
    lists.create("Wizards").await.unwrap();
    let query = SearchQuery::new(Some("hobbit"), Some("race")).unwrap();
    lists.add_search(first.id, &query).await.unwrap();

    let all = lists.list().await.unwrap();

    let names: Vec<_> = all.iter().map(|list| list.name.as_str()).collect();
    assert_eq!(names, vec!["Hobbits", "Wizards"]);
    assert_eq!(all[0].searches.len(), 1);
    assert_eq!(all[0].searches[0].query, query);
}

/// **VALUE**: Verifies that a listing holding a saved search with a term but no
/// field fails to decode instead of yielding a query that drops the filter.
///
/// **WHY THIS MATTERS**: Saved searches are re-run through `search_query`, which
/// trusts its input. A corrupt row must stop at decoding, before any catalog request.
///
/// **BUG THIS CATCHES**: Would catch `{"term": "gan", "field": null}` decoding into
/// a query whose `params()` is empty, silently searching the whole catalog.
#[tokio::test]
async fn given_saved_search_without_field_when_listing_then_json_error_and_no_search() {
    // GIVEN: A backend whose only list holds a row with a null field
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SEARCH_LIST_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{
                "id": 1,
                "name": "Broken",
                "searches": [{"id": 1, "search_list_id": 1, "term": "gan", "field": null}]
            }]
        })))
        .mount(&server)
        .await;
    let lists = SearchListClient::new(client_for(&server));

    // WHEN: Listing
    let result = lists.list().await;

    // THEN: Decoding error, and nothing was sent to the character endpoint
    let error = result.unwrap_err();
    assert!(matches!(error, ApiError::Json { .. }), "Got {error:?}");
    assert!(requests_to(&server, CHARACTER_PATH).await.is_empty());
}
