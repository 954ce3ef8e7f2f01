//! Test helpers for client-core integration tests.
//!
//! This module provides:
//! - Client construction against a `wiremock` server
//! - A Sanctum-style handshake mock that sets `XSRF-TOKEN`
//! - Stateful stand-ins for the character catalog and the SearchList resource

use client_core::{ClientConfig, HttpClient};

use std::sync::Mutex;

use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

/// Token as the backend sends it in `Set-Cookie` (URL-encoded).
pub const TEST_TOKEN_ENCODED: &str = "abc%3Ddef";

/// Token as it must appear in the `X-XSRF-TOKEN` request header.
pub const TEST_TOKEN: &str = "abc=def";

pub const HANDSHAKE_PATH: &str = "/sanctum/csrf-cookie";
pub const CHARACTER_PATH: &str = "/api/v1/character";
pub const SEARCH_LIST_PATH: &str = "/api/v1/searchlist";

/// Test helper: A client with an empty cookie store pointed at `server`.
pub fn client_for(server: &MockServer) -> HttpClient {
    let config = ClientConfig::new(&server.uri()).expect("mock server uri is a valid base url");
    HttpClient::new(&config).expect("Failed to build HttpClient")
}

/// Test helper: A handshake response that sets the CSRF cookie to `encoded_token`.
pub fn handshake_response(encoded_token: &str) -> ResponseTemplate {
    ResponseTemplate::new(204).insert_header(
        "set-cookie",
        format!("XSRF-TOKEN={encoded_token}; Path=/; SameSite=Lax"),
    )
}

/// Test helper: Mount a handshake that always sets `TEST_TOKEN_ENCODED`.
pub async fn mount_handshake(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(HANDSHAKE_PATH))
        .respond_with(handshake_response(TEST_TOKEN_ENCODED))
        .mount(server)
        .await;
}

/// Test helper: All requests the server received for `request_path`.
pub async fn requests_to(server: &MockServer, request_path: &str) -> Vec<Request> {
    server
        .received_requests()
        .await
        .expect("request recording is enabled")
        .into_iter()
        .filter(|request| request.url.path() == request_path)
        .collect()
}

/// Test helper: The `X-XSRF-TOKEN` header of a recorded request.
pub fn csrf_header(request: &Request) -> Option<String> {
    request
        .headers
        .get("x-xsrf-token")
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
}

/// Test helper: Query pairs of a recorded request, in order.
pub fn query_pairs(request: &Request) -> Vec<(String, String)> {
    request
        .url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

/// A catalog of 100 characters, three of which contain "gan" in their name.
pub fn catalog() -> Vec<Value> {
    let mut characters = vec![
        json!({"_id": "c-gandalf", "name": "Gandalf", "race": "Maiar"}),
        json!({"_id": "c-gandalf-white", "name": "Gandalf the White", "race": "Maiar"}),
        json!({"_id": "c-morgan", "name": "Morgan", "race": "Human"}),
    ];
    characters.extend((1..=97).map(|n| {
        json!({"_id": format!("c-{n:03}"), "name": format!("Hobbit {n:03}"), "race": "Hobbit"})
    }));
    characters
}

/// Character search stand-in: case-insensitive substring match of `term` in `field`.
pub struct CatalogResponder {
    characters: Vec<Value>,
}

impl CatalogResponder {
    pub fn new(characters: Vec<Value>) -> Self {
        Self { characters }
    }
}

impl Respond for CatalogResponder {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let pairs = query_pairs(request);
        let find = |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.to_lowercase())
        };

        let data: Vec<&Value> = match (find("term"), find("field")) {
            (Some(term), Some(field)) => self
                .characters
                .iter()
                .filter(|character| {
                    character[field.as_str()]
                        .as_str()
                        .is_some_and(|value| value.to_lowercase().contains(&term))
                })
                .collect(),
            _ => self.characters.iter().collect(),
        };

        ResponseTemplate::new(200).set_body_json(json!({"count": data.len(), "data": data}))
    }
}

/// SearchList stand-in: unique names, append-only searches, 419 without a CSRF header.
#[derive(Default)]
pub struct SearchListBackend {
    lists: Mutex<Vec<Value>>,
    next_search_id: Mutex<u64>,
}

impl Respond for SearchListBackend {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let mut lists = self.lists.lock().unwrap();

        if request.method.as_str() == "GET" {
            return ResponseTemplate::new(200).set_body_json(json!({"data": lists.clone()}));
        }

        if csrf_header(request).as_deref() != Some(TEST_TOKEN) {
            return ResponseTemplate::new(419).set_body_json(json!({"message": "CSRF token mismatch."}));
        }

        let body: Value = serde_json::from_slice(&request.body).unwrap();

        if let Some(name) = body["name"].as_str() {
            if lists.iter().any(|list| list["name"] == name) {
                return ResponseTemplate::new(422).set_body_json(json!({
                    "message": "The name has already been taken.",
                    "errors": {"name": ["The name has already been taken."]}
                }));
            }
            let list = json!({"id": lists.len() + 1, "name": name, "searches": []});
            lists.push(list.clone());
            return ResponseTemplate::new(201).set_body_json(json!({"data": list}));
        }

        let list_id = body["search_list_id"].as_u64().unwrap_or_default();
        let Some(list) = lists.iter_mut().find(|list| list["id"] == list_id) else {
            return ResponseTemplate::new(404).set_body_json(json!({"message": "Not Found"}));
        };

        let mut next_id = self.next_search_id.lock().unwrap();
        *next_id += 1;
        let saved = json!({
            "id": *next_id,
            "search_list_id": list_id,
            "term": body["term"],
            "field": body["field"],
        });
        list["searches"].as_array_mut().unwrap().push(saved.clone());

        ResponseTemplate::new(201).set_body_json(json!({"data": saved}))
    }
}

/// Test helper: Mount the handshake plus a `SearchListBackend` on both verbs.
pub async fn mount_search_list_backend(server: &MockServer) {
    mount_handshake(server).await;
    Mock::given(path(SEARCH_LIST_PATH))
        .respond_with(SearchListBackend::default())
        .mount(server)
        .await;
}
