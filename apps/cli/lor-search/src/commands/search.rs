use crate::cli::QueryArgs;
use crate::commands::to_output;
use crate::error::AppError;

use client_core::{CharacterSearchClient, HttpClient};

use log::info;
use serde_json::Value;

pub async fn search(http: &HttpClient, query: &QueryArgs) -> Result<Value, AppError> {
    let client = CharacterSearchClient::new(http.clone());

    let response = client
        .search(query.term.as_deref(), query.field.as_deref())
        .await?;

    info!(
        "Search returned {} of {} characters",
        response.data.len(),
        response.count
    );
    if response.is_partial() {
        info!("Backend holds more matches than this page; narrow the term to see them");
    }
    to_output(&response)
}
