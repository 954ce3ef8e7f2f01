use lor_search::cli::{Command, QueryArgs};
use lor_search::commands::execute;
use lor_search::error::AppError;

use client_core::{ClientConfig, HttpClient};

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Integration tests for command dispatch + client-core
// These run the same code path as the binary, minus argument parsing and logging
// ============================================================================

fn client_for(server: &MockServer) -> HttpClient {
    HttpClient::new(&ClientConfig::new(&server.uri()).unwrap()).unwrap()
}

async fn mount_handshake(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/sanctum/csrf-cookie"))
        .respond_with(
            ResponseTemplate::new(204).insert_header("set-cookie", "XSRF-TOKEN=abc%3Ddef; Path=/"),
        )
        .mount(server)
        .await;
}

/// **VALUE**: Tests that the search command prints the backend's page unchanged.
#[tokio::test]
async fn given_search_command_when_executed_then_output_is_response_body() {
    // GIVEN: A backend with one match
    let server = MockServer::start().await;
    let body = json!({"count": 1, "data": [{"name": "Gandalf"}]});
    Mock::given(method("GET"))
        .and(path("/api/v1/character"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .mount(&server)
        .await;
    let http = client_for(&server);

    // WHEN: Executing the search command
    let command = Command::Search(QueryArgs {
        term: Some("gan".to_string()),
        field: Some("name".to_string()),
    });
    let output = execute(command, &http).await.unwrap();

    // THEN: Output equals the response body
    assert_eq!(output, body);
}

/// **VALUE**: Tests that a lone `--term` is reported as invalid input with no request.
#[tokio::test]
async fn given_search_command_with_term_only_when_executed_then_invalid_input() {
    let server = MockServer::start().await;
    let http = client_for(&server);

    let command = Command::Search(QueryArgs {
        term: Some("gan".to_string()),
        field: None,
    });
    let result = execute(command, &http).await;

    assert!(matches!(result, Err(AppError::InvalidInput { .. })));
    assert!(server.received_requests().await.unwrap().is_empty());
}

/// **VALUE**: Tests that the csrf command reports the token without printing it.
///
/// **WHY THIS MATTERS**: Command output ends up in terminals and CI logs; the token
/// grants write access to the session.
#[tokio::test]
async fn given_csrf_command_when_executed_then_token_is_reported_not_printed() {
    let server = MockServer::start().await;
    mount_handshake(&server).await;
    let http = client_for(&server);

    let output = execute(Command::Csrf, &http).await.unwrap();

    assert_eq!(output, json!({"token_present": true, "token_length": 7}));
    assert!(!output.to_string().contains("abc"));
}

/// **VALUE**: Tests that a duplicate list name surfaces as a request error with status.
#[tokio::test]
async fn given_create_list_rejected_when_executed_then_request_error_with_status() {
    let server = MockServer::start().await;
    mount_handshake(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/v1/searchlist"))
        .respond_with(
            ResponseTemplate::new(422)
                .set_body_json(json!({"message": "The name has already been taken."})),
        )
        .mount(&server)
        .await;
    let http = client_for(&server);

    let result = execute(
        Command::CreateList {
            name: "Duplicate".to_string(),
        },
        &http,
    )
    .await;

    match result {
        Err(AppError::Request { status, .. }) => assert_eq!(status, Some(422)),
        other => panic!("Expected Request error, got {other:?}"),
    }
}

/// **VALUE**: Tests the add-search command end to end through the handshake.
#[tokio::test]
async fn given_add_search_command_when_executed_then_saved_search_is_printed() {
    let server = MockServer::start().await;
    mount_handshake(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/v1/searchlist"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": {"id": 11, "search_list_id": 3, "term": "gan", "field": "name"}
        })))
        .mount(&server)
        .await;
    let http = client_for(&server);

    let output = execute(
        Command::AddSearch {
            list_id: 3,
            query: QueryArgs {
                term: Some("gan".to_string()),
                field: Some("name".to_string()),
            },
        },
        &http,
    )
    .await
    .unwrap();

    assert_eq!(
        output,
        json!({"id": 11, "search_list_id": 3, "term": "gan", "field": "name"})
    );
}
