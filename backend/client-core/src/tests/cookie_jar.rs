// Unit tests for cookie lookup
// Tests header parsing, percent-decoding and the in-memory jar

use crate::cookie_jar::{CookieJar, MemoryCookieJar, parse_cookie};
use crate::CSRF_COOKIE_NAME;

/// **VALUE**: Verifies the canonical XSRF-TOKEN lookup with an encoded `=`.
///
/// **WHY THIS MATTERS**: Laravel URL-encodes the token; echoing the encoded form
/// back in the header makes every mutation fail with 419.
///
/// **BUG THIS CATCHES**: Would catch dropped percent-decoding or splitting the
/// value at its first `=`.
#[test]
fn given_encoded_token_between_cookies_when_parsed_then_returns_decoded_value() {
    // GIVEN: The token sits between two unrelated cookies
    let header = "a=1; XSRF-TOKEN=abc%3Ddef; b=2";

    // WHEN: Looking up the token
    let value = parse_cookie(header, CSRF_COOKIE_NAME);

    // THEN: Decoded value
    assert_eq!(value.as_deref(), Some("abc=def"));
}

/// **VALUE**: Verifies lookup regardless of the cookie's position.
///
/// **BUG THIS CATCHES**: Would catch matching that assumes a leading `; `.
#[test]
fn given_target_cookie_first_last_or_only_when_parsed_then_found() {
    let cases = [
        "XSRF-TOKEN=tok; a=1",
        "a=1; b=2; XSRF-TOKEN=tok",
        "XSRF-TOKEN=tok",
    ];

    for header in cases {
        assert_eq!(
            parse_cookie(header, CSRF_COOKIE_NAME).as_deref(),
            Some("tok"),
            "Lookup failed for {header:?}"
        );
    }
}

/// **VALUE**: Verifies that raw `=` characters inside a value are kept.
#[test]
fn given_value_with_raw_equals_when_parsed_then_value_is_complete() {
    let header = "session=eyJpdiI6IjEyMyJ9==; XSRF-TOKEN=x";

    assert_eq!(
        parse_cookie(header, "session").as_deref(),
        Some("eyJpdiI6IjEyMyJ9==")
    );
}

/// **VALUE**: Verifies that only an exact name match counts.
///
/// **BUG THIS CATCHES**: Would catch prefix or suffix matching returning
/// `X-XSRF-TOKEN` or `XSRF-TOKEN-OLD` as the CSRF cookie.
#[test]
fn given_similarly_named_cookies_when_parsed_then_only_exact_name_matches() {
    let header = "X-XSRF-TOKEN=wrong; XSRF-TOKEN-OLD=stale";

    assert_eq!(parse_cookie(header, CSRF_COOKIE_NAME), None);
}

/// **VALUE**: Verifies the first of several same-named cookies wins.
#[test]
fn given_duplicate_names_when_parsed_then_first_match_wins() {
    let header = "XSRF-TOKEN=first; XSRF-TOKEN=second";

    assert_eq!(
        parse_cookie(header, CSRF_COOKIE_NAME).as_deref(),
        Some("first")
    );
}

#[test]
fn given_missing_cookie_when_parsed_then_returns_none() {
    assert_eq!(parse_cookie("a=1; b=2", CSRF_COOKIE_NAME), None);
    assert_eq!(parse_cookie("", CSRF_COOKIE_NAME), None);
}

/// **VALUE**: Verifies that the in-memory jar re-reads its header on each call.
///
/// **WHY THIS MATTERS**: Components must observe a rotated token immediately;
/// this is the seam the CSRF tests rely on.
#[test]
fn given_memory_jar_when_header_replaced_then_get_sees_new_value() {
    // GIVEN: A jar holding one token
    let jar = MemoryCookieJar::new("XSRF-TOKEN=one");
    assert_eq!(jar.get(CSRF_COOKIE_NAME).as_deref(), Some("one"));

    // WHEN: The token is rotated
    jar.set_header("XSRF-TOKEN=two%2B");

    // THEN: The next read sees the new decoded value
    assert_eq!(jar.get(CSRF_COOKIE_NAME).as_deref(), Some("two+"));
}

#[test]
fn given_empty_memory_jar_when_read_then_no_header() {
    let jar = MemoryCookieJar::default();

    assert_eq!(jar.cookie_header(), None);
    assert_eq!(jar.get(CSRF_COOKIE_NAME), None);
}
