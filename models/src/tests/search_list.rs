use crate::{NewSavedSearch, NewSearchList, SavedSearch, SearchList, SearchListId, SearchQuery};

use serde_json::json;

/// **VALUE**: Verifies that a saved search decodes its query from flat `term` / `field` keys.
///
/// **WHY THIS MATTERS**: The backend stores the query columns next to the row ids;
/// re-running a saved search depends on getting them back intact.
#[test]
fn given_saved_search_json_when_decoded_then_query_matches() {
    // GIVEN: A row as returned by the backend, with timestamps
    let body = json!({
        "id": 7,
        "search_list_id": 3,
        "term": "gan",
        "field": "name",
        "created_at": "2026-10-19T10:00:00Z"
    });

    // WHEN: Decoding
    let saved: SavedSearch = serde_json::from_value(body).unwrap();

    // THEN: Ids and query are populated
    assert_eq!(saved.id, 7);
    assert_eq!(saved.search_list_id, SearchListId(3));
    assert_eq!(saved.query, SearchQuery::new(Some("gan"), Some("name")).unwrap());
}

/// **VALUE**: Verifies that a stored search with a term but no field is refused on decode.
///
/// **WHY THIS MATTERS**: A saved search is re-run as-is. Accepting the row would turn
/// the user's filter into an unfiltered catalog request.
///
/// **BUG THIS CATCHES**: Would catch the derived decoder building a `SearchQuery`
/// without the term/field check that `SearchQuery::new` applies.
#[test]
fn given_saved_search_with_term_and_null_field_when_decoded_then_fails() {
    // GIVEN: A row whose field column is null
    let body = json!({"id": 1, "search_list_id": 1, "term": "gan", "field": null});

    // WHEN: Decoding
    let result = serde_json::from_value::<SavedSearch>(body);

    // THEN: Rejected with the validation message
    let error = result.unwrap_err();
    assert!(
        error.to_string().contains("field param is also required"),
        "Unexpected error: {error}"
    );
}

/// **VALUE**: Verifies that a freshly created list without a `searches` key decodes as empty.
#[test]
fn given_new_list_without_searches_when_decoded_then_searches_is_empty() {
    let list: SearchList = serde_json::from_value(json!({"id": 1, "name": "MyList"})).unwrap();

    assert_eq!(list.name, "MyList");
    assert!(list.searches.is_empty());
}

/// **VALUE**: Verifies the request body used to append a search.
///
/// **BUG THIS CATCHES**: Would catch the query being nested under a `query` key
/// instead of flattened next to `search_list_id`.
#[test]
fn given_new_saved_search_when_serialized_then_body_is_flat() {
    let query = SearchQuery::new(Some("gan"), Some("name")).unwrap();
    let body = NewSavedSearch {
        search_list_id: SearchListId(3),
        query: &query,
    };

    let json = serde_json::to_value(&body).unwrap();

    assert_eq!(
        json,
        json!({"search_list_id": 3, "term": "gan", "field": "name"})
    );
}

#[test]
fn given_new_search_list_when_serialized_then_body_has_only_name() {
    let json = serde_json::to_value(NewSearchList { name: "MyList" }).unwrap();

    assert_eq!(json, json!({"name": "MyList"}));
}
