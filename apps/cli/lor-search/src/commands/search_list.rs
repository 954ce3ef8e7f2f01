use crate::cli::QueryArgs;
use crate::commands::to_output;
use crate::error::AppError;

use client_core::{HttpClient, SearchListClient};
use models::{SearchListId, SearchQuery};

use serde_json::Value;

pub async fn lists(http: &HttpClient) -> Result<Value, AppError> {
    let lists = SearchListClient::new(http.clone()).list().await?;
    to_output(&lists)
}

pub async fn create_list(http: &HttpClient, name: &str) -> Result<Value, AppError> {
    let list = SearchListClient::new(http.clone()).create(name).await?;
    to_output(&list)
}

pub async fn add_search(
    http: &HttpClient,
    list_id: u64,
    query: &QueryArgs,
) -> Result<Value, AppError> {
    let query = SearchQuery::new(query.term.as_deref(), query.field.as_deref())
        .map_err(client_core::ApiError::from)?;

    let saved = SearchListClient::new(http.clone())
        .add_search(SearchListId(list_id), &query)
        .await?;
    to_output(&saved)
}
