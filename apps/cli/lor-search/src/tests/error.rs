use crate::error::AppError;

use client_core::{ApiError, ConfigError, CoreError};

/// **VALUE**: Verifies that local query errors map to `InvalidInput`, not `Request`.
///
/// **WHY THIS MATTERS**: Users fix an invalid input by changing arguments; a request
/// error suggests the backend is at fault.
#[test]
fn given_invalid_query_when_converted_then_is_invalid_input() {
    let error = AppError::from(ApiError::invalid_query("term without field"));

    match error {
        AppError::InvalidInput { message, .. } => assert_eq!(message, "term without field"),
        other => panic!("Expected InvalidInput, got {other:?}"),
    }
}

/// **VALUE**: Verifies that the HTTP status survives into the app error.
#[test]
fn given_status_error_when_converted_then_status_is_kept() {
    let error = AppError::from(ApiError::from_status(422, "The name has already been taken."));

    match error {
        AppError::Request { status, message, .. } => {
            assert_eq!(status, Some(422));
            assert!(message.contains("already been taken"));
        }
        other => panic!("Expected Request, got {other:?}"),
    }
}

/// **VALUE**: Verifies the tagged JSON shape printed on failure.
///
/// **BUG THIS CATCHES**: Would catch a serde attribute change breaking scripts that
/// parse stderr.
#[test]
fn given_config_error_when_serialized_then_json_is_tagged() {
    let core = CoreError::Config(ConfigError::MissingVar {
        location: common::ErrorLocation {
            file: "config/mod.rs",
            line: 1,
            column: 1,
        },
        name: "LOR_APP_BACKEND",
    });

    let json = serde_json::to_value(AppError::from(core)).unwrap();

    assert_eq!(json["type"], "Config");
    assert!(
        json["data"]["message"]
            .as_str()
            .unwrap()
            .contains("LOR_APP_BACKEND")
    );
    assert!(json["data"]["location"]["line"].is_u64());
}
