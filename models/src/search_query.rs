//! The `term` / `field` pair sent to the character search endpoint.

use crate::ModelError;

use serde::{Deserialize, Serialize};

pub const TERM_PARAM: &str = "term";
pub const FIELD_PARAM: &str = "field";

const MISSING_FIELD_MESSAGE: &str =
    "When term param is supplied, field param is also required";

/// A validated character search.
///
/// Either both `term` and `field` are set, or neither is. An empty term counts
/// as no term, and a field without a term is dropped. Decoding goes through
/// [`SearchQuery::new`], so a stored term without a field is rejected too.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSearchQuery")]
pub struct SearchQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    term: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<String>,
}

/// Wire shape of a query before validation.
#[derive(Deserialize)]
struct RawSearchQuery {
    #[serde(default)]
    term: Option<String>,
    #[serde(default)]
    field: Option<String>,
}

impl TryFrom<RawSearchQuery> for SearchQuery {
    type Error = ModelError;

    fn try_from(raw: RawSearchQuery) -> Result<Self, Self::Error> {
        SearchQuery::new(raw.term.as_deref(), raw.field.as_deref())
    }
}

impl SearchQuery {
    /// The unfiltered query; the backend answers it with its default listing.
    pub fn all() -> Self {
        Self::default()
    }

    /// Validate and build a query.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Validation`] when a non-empty `term` comes without
    /// a non-empty `field`.
    #[track_caller]
    pub fn new(term: Option<&str>, field: Option<&str>) -> Result<Self, ModelError> {
        let term = match term {
            Some(term) if !term.is_empty() => term,
            _ => return Ok(Self::all()),
        };

        match field {
            Some(field) if !field.is_empty() => Ok(Self {
                term: Some(term.to_string()),
                field: Some(field.to_string()),
            }),
            _ => Err(ModelError::validation(MISSING_FIELD_MESSAGE)),
        }
    }

    pub fn term(&self) -> Option<&str> {
        self.term.as_deref()
    }

    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    pub fn is_unfiltered(&self) -> bool {
        self.term.is_none()
    }

    /// Query-string pairs for the search endpoint; empty for an unfiltered query.
    pub fn params(&self) -> Vec<(&'static str, &str)> {
        match (self.term.as_deref(), self.field.as_deref()) {
            (Some(term), Some(field)) => vec![(TERM_PARAM, term), (FIELD_PARAM, field)],
            _ => Vec::new(),
        }
    }
}
