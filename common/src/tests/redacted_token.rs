use crate::RedactedToken;

/// **VALUE**: Verifies that the CSRF token never leaks through formatting.
///
/// **WHY THIS MATTERS**: The token is logged alongside request lifecycle messages;
/// a leaked token lets anyone replay mutating requests for the session.
///
/// **BUG THIS CATCHES**: Would catch a derived `Debug` replacing the manual impl.
#[test]
fn given_token_when_formatted_then_value_is_hidden() {
    // GIVEN: A token with a recognisable value
    let token = RedactedToken::new("abc=def");

    // WHEN: Formatting with Debug and Display
    let debug = format!("{token:?}");
    let display = format!("{token}");

    // THEN: Neither contains the value
    assert!(!debug.contains("abc"), "Debug leaked the token: {debug}");
    assert!(!display.contains("abc"), "Display leaked the token: {display}");
    assert_eq!(token.expose(), "abc=def");
    assert_eq!(token.len(), 7);
}

/// **VALUE**: Verifies that serialising a token is refused.
///
/// **BUG THIS CATCHES**: Would catch the token sneaking into JSON output of the CLI.
#[test]
fn given_token_when_serialized_then_returns_error() {
    let token = RedactedToken::new("secret");

    let result = serde_json::to_string(&token);

    assert!(result.is_err(), "Serialization should be refused");
}
