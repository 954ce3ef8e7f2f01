pub mod search;
pub mod search_list;
pub mod session;

use crate::cli::Command;
use crate::error::AppError;

use client_core::HttpClient;

use log::debug;
use serde_json::Value;

/// Run one command against `http` and return the JSON to print.
pub async fn execute(command: Command, http: &HttpClient) -> Result<Value, AppError> {
    debug!("Executing {command:?}");

    match command {
        Command::Search(query) => search::search(http, &query).await,
        Command::Lists => search_list::lists(http).await,
        Command::CreateList { name } => search_list::create_list(http, &name).await,
        Command::AddSearch { list_id, query } => {
            search_list::add_search(http, list_id, &query).await
        }
        Command::Csrf => session::csrf(http).await,
    }
}

#[track_caller]
pub(crate) fn to_output<T: serde::Serialize>(value: &T) -> Result<Value, AppError> {
    serde_json::to_value(value).map_err(|e| AppError::app(format!("Failed to encode output: {e}")))
}
