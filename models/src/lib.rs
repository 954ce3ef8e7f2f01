//! Wire data for the character catalog and SearchLists.
//!
//! Models have no transport logic. The only behaviour living here is the
//! parameter-coupling rule of [`SearchQuery`], so it can be checked without a
//! client or a network.

pub mod character;
pub mod error;
pub mod search_list;
pub mod search_query;

#[cfg(test)]
mod tests;

pub use character::{Character, CharacterApiResponse};
pub use common::ErrorLocation;
pub use error::model_error::ModelError;
pub use search_list::{NewSavedSearch, NewSearchList, SavedSearch, SearchList, SearchListId};
pub use search_query::SearchQuery;
