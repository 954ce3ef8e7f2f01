use crate::error::ApiError;

use models::SearchQuery;

/// **VALUE**: Verifies that a query-coupling failure becomes `InvalidQuery`.
///
/// **WHY THIS MATTERS**: Callers tell local mistakes apart from transport failures
/// by variant; a term-without-field must never look like a network error.
#[test]
fn given_model_validation_error_when_converted_then_is_invalid_query() {
    // GIVEN: A model validation failure
    let model_error = SearchQuery::new(Some("gan"), None).unwrap_err();

    // WHEN: Converting
    let error = ApiError::from(model_error);

    // THEN: Local, non-transport error
    assert!(matches!(error, ApiError::InvalidQuery { .. }));
    assert!(!error.is_transport());
    assert_eq!(error.error_category(), "invalid_query");
}

/// **VALUE**: Verifies that HTTP failures expose their status and count as transport errors.
///
/// **BUG THIS CATCHES**: Would catch the status being folded into the message only.
#[test]
fn given_status_error_when_inspected_then_status_and_category_are_available() {
    let duplicate = ApiError::from_status(422, r#"{"message":"The name has already been taken."}"#);
    let expired = ApiError::from_status(419, "CSRF token mismatch.");
    let outage = ApiError::from_status(503, "");

    assert!(duplicate.is_transport());
    assert_eq!(duplicate.status_code().map(|s| s.0), Some(422));
    assert_eq!(duplicate.error_category(), "client_error");
    assert_eq!(expired.error_category(), "session_expired");
    assert_eq!(outage.error_category(), "server_error");
}

/// **VALUE**: Verifies that error messages carry the construction site.
#[test]
fn given_authentication_error_when_formatted_then_includes_location() {
    let error = ApiError::authentication("no CSRF token available");

    let message = error.to_string();

    assert!(message.contains("Authentication Error"));
    assert!(message.contains("api_error.rs"), "Missing location in {message}");
    assert_eq!(error.status_code(), None);
}

#[test]
fn given_bad_json_when_converted_then_is_json_error() {
    let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();

    let error = ApiError::from(json_error);

    assert!(matches!(error, ApiError::Json { .. }));
    assert!(!error.is_transport());
}
