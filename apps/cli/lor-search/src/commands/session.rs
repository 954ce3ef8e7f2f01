use crate::error::AppError;

use client_core::HttpClient;

use serde_json::{Value, json};

/// Report the outcome of a handshake without revealing the token.
pub async fn csrf(http: &HttpClient) -> Result<Value, AppError> {
    let token = http.csrf().ensure_token().await?;

    Ok(json!({
        "token_present": token.is_some(),
        "token_length": token.as_ref().map(|t| t.len()),
    }))
}
