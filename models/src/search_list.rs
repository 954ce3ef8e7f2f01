//! SearchLists and the searches saved into them.

use crate::SearchQuery;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned identifier of a SearchList.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchListId(pub u64);

impl fmt::Display for SearchListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for SearchListId {
    fn from(id: u64) -> Self {
        SearchListId(id)
    }
}

/// A named, ordered collection of saved searches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchList {
    pub id: SearchListId,
    pub name: String,
    #[serde(default)]
    pub searches: Vec<SavedSearch>,
}

/// A search persisted inside a SearchList. Never edited after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedSearch {
    pub id: u64,
    pub search_list_id: SearchListId,
    #[serde(flatten)]
    pub query: SearchQuery,
}

/// Body of `POST /api/v1/searchlist` when creating a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewSearchList<'a> {
    pub name: &'a str,
}

/// Body of `POST /api/v1/searchlist` when appending a search to a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewSavedSearch<'a> {
    pub search_list_id: SearchListId,
    #[serde(flatten)]
    pub query: &'a SearchQuery,
}
