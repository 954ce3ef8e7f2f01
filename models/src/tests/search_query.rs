use crate::{ModelError, SearchQuery};

/// **VALUE**: Verifies that a term without a target field is rejected.
///
/// **WHY THIS MATTERS**: The backend cannot interpret a term without knowing which
/// attribute to match; sending it anyway returns a confusing server error.
///
/// **BUG THIS CATCHES**: Would catch if the coupling check is removed or inverted.
#[test]
fn given_term_without_field_when_building_query_then_returns_validation_error() {
    // GIVEN / WHEN: A term and no field
    let result = SearchQuery::new(Some("gan"), None);

    // THEN: Validation error with the coupling message
    match result {
        Err(ModelError::Validation { message, .. }) => {
            assert!(message.contains("field"), "Unexpected message: {message}");
        }
        Ok(query) => panic!("Expected validation error, got {query:?}"),
    }
}

/// **VALUE**: Verifies that an empty field string counts as missing.
///
/// **BUG THIS CATCHES**: Would catch `Some("")` slipping through as a valid field.
#[test]
fn given_term_with_empty_field_when_building_query_then_returns_validation_error() {
    let result = SearchQuery::new(Some("gan"), Some(""));

    assert!(result.is_err(), "Empty field must be rejected");
}

/// **VALUE**: Verifies that a complete query produces exactly two parameters.
///
/// **WHY THIS MATTERS**: The server treats any extra key as a filter.
#[test]
fn given_term_and_field_when_building_query_then_params_are_exactly_term_and_field() {
    // GIVEN: A complete query
    let query = SearchQuery::new(Some("gan"), Some("name")).unwrap();

    // WHEN: Asking for parameters
    let params = query.params();

    // THEN: Exactly term and field, in order
    assert_eq!(params, vec![("term", "gan"), ("field", "name")]);
    assert_eq!(query.term(), Some("gan"));
    assert_eq!(query.field(), Some("name"));
    assert!(!query.is_unfiltered());
}

/// **VALUE**: Verifies that an absent or empty term yields the unfiltered query.
///
/// **WHY THIS MATTERS**: Clearing the search box must return the default listing,
/// not an error, even if a field is still selected.
#[test]
fn given_no_term_when_building_query_then_query_is_unfiltered() {
    let cases = [
        (None, None),
        (Some(""), None),
        (None, Some("name")),
        (Some(""), Some("name")),
    ];

    for (term, field) in cases {
        let query = SearchQuery::new(term, field).unwrap();

        assert!(query.is_unfiltered(), "Expected unfiltered for {term:?}/{field:?}");
        assert!(query.params().is_empty());
        assert_eq!(query, SearchQuery::all());
    }
}

#[test]
fn given_unfiltered_query_when_serialized_then_object_is_empty() {
    let json = serde_json::to_value(SearchQuery::all()).unwrap();

    assert_eq!(json, serde_json::json!({}));
}

/// **VALUE**: Verifies that decoding applies the same rules as `SearchQuery::new`.
///
/// **BUG THIS CATCHES**: Would catch a decoded query carrying a term without a field,
/// or a field without a term, past the constructor's normalization.
#[test]
fn given_query_json_when_decoded_then_constructor_rules_apply() {
    let missing_field = serde_json::from_value::<SearchQuery>(serde_json::json!({"term": "gan"}));
    assert!(missing_field.is_err());

    let empty_field =
        serde_json::from_value::<SearchQuery>(serde_json::json!({"term": "gan", "field": ""}));
    assert!(empty_field.is_err());

    let field_only: SearchQuery =
        serde_json::from_value(serde_json::json!({"field": "name"})).unwrap();
    assert_eq!(field_only, SearchQuery::all());

    let full: SearchQuery =
        serde_json::from_value(serde_json::json!({"term": "gan", "field": "name"})).unwrap();
    assert_eq!(full, SearchQuery::new(Some("gan"), Some("name")).unwrap());
}
