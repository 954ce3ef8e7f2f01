use crate::CHARACTER_ENDPOINT;
use crate::error::ApiError;
use crate::http_client::HttpClient;

use models::{CharacterApiResponse, SearchQuery};

use log::debug;

/// Validated pass-through to `GET /api/v1/character`.
///
/// Filtering, sorting and paging all happen server-side; the response is
/// returned exactly as decoded.
#[derive(Clone)]
pub struct CharacterSearchClient {
    http: HttpClient,
}

impl CharacterSearchClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Search the catalog for `term` in the attribute named `field`.
    ///
    /// With no term the backend returns its default listing.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidQuery`] without touching the network when a
    /// term is given without a field; otherwise any transport error.
    pub async fn search(
        &self,
        term: Option<&str>,
        field: Option<&str>,
    ) -> Result<CharacterApiResponse, ApiError> {
        let query = SearchQuery::new(term, field)?;
        self.search_query(&query).await
    }

    /// Run an already-built query, e.g. one taken from a saved search.
    pub async fn search_query(
        &self,
        query: &SearchQuery,
    ) -> Result<CharacterApiResponse, ApiError> {
        let response: CharacterApiResponse =
            self.http.get(CHARACTER_ENDPOINT, &query.params()).await?;

        debug!(
            "Character search returned {} of {} records",
            response.data.len(),
            response.count
        );
        Ok(response)
    }
}
