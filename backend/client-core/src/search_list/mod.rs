//! Create, append to and list SearchLists.
//!
//! Creating a list and appending a search share `POST /api/v1/searchlist`;
//! the body shape tells the backend which one is meant.

use crate::SEARCH_LIST_ENDPOINT;
use crate::error::ApiError;
use crate::http_client::HttpClient;
use crate::http_client::resource::Resource;

use models::{NewSavedSearch, NewSearchList, SavedSearch, SearchList, SearchListId, SearchQuery};

use log::info;

#[derive(Clone)]
pub struct SearchListClient {
    http: HttpClient,
}

impl SearchListClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Create an empty SearchList.
    ///
    /// Name uniqueness is checked by the backend only; a clash comes back as
    /// [`ApiError::Status`].
    ///
    /// # Errors
    ///
    /// [`ApiError::InvalidQuery`] for a blank name, otherwise whatever
    /// [`HttpClient::post`] returns.
    pub async fn create(&self, name: &str) -> Result<SearchList, ApiError> {
        if name.trim().is_empty() {
            return Err(ApiError::invalid_query("SearchList name cannot be empty"));
        }

        let resource: Resource<SearchList> = self
            .http
            .post(SEARCH_LIST_ENDPOINT, &NewSearchList { name })
            .await?;
        let list = resource.into_inner();

        info!("Created SearchList {} ({})", list.id, list.name);
        Ok(list)
    }

    /// Append `query` to the list `list_id`.
    ///
    /// # Errors
    ///
    /// Whatever [`HttpClient::post`] returns, e.g. a 404 for an unknown list.
    pub async fn add_search(
        &self,
        list_id: SearchListId,
        query: &SearchQuery,
    ) -> Result<SavedSearch, ApiError> {
        let body = NewSavedSearch {
            search_list_id: list_id,
            query,
        };

        let resource: Resource<SavedSearch> = self.http.post(SEARCH_LIST_ENDPOINT, &body).await?;
        let saved = resource.into_inner();

        info!("Saved search {} into SearchList {}", saved.id, list_id);
        Ok(saved)
    }

    /// All SearchLists visible to the session.
    pub async fn list(&self) -> Result<Vec<SearchList>, ApiError> {
        let resource: Resource<Vec<SearchList>> = self.http.get(SEARCH_LIST_ENDPOINT, &[]).await?;
        Ok(resource.into_inner())
    }
}
