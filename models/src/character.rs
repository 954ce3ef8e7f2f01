//! Catalog records as returned by `GET /api/v1/character`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An opaque catalog record.
///
/// The backend decides which attributes exist; the client keeps all of them
/// and only offers typed access to the ones it needs for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Character {
    fields: Map<String, Value>,
}

impl Character {
    pub fn from_fields(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn name(&self) -> Option<&str> {
        self.fields.get("name").and_then(Value::as_str)
    }

    /// Raw value of a server-defined attribute, e.g. one named as a search `field`.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

/// One page of search results.
///
/// `count` is the server's total and may exceed `data.len()` when the
/// backend paginates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterApiResponse {
    pub count: u64,
    pub data: Vec<Character>,
}

impl CharacterApiResponse {
    /// True when the server reported more matches than it returned.
    pub fn is_partial(&self) -> bool {
        self.count > self.data.len() as u64
    }
}
