//! Autocomplete suggestion models.

use serde::{Deserialize, Serialize};

use crate::serde_helpers::empty_string_as_none;

/// Source table of a suggestion.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionType {
    Mantra,
    Deity,
    Category,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Suggestion {
    pub text: String,
    #[serde(rename = "type")]
    pub kind: SuggestionType,
}

impl Suggestion {
    pub fn new(text: impl Into<String>, kind: SuggestionType) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AutocompleteQuery {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AutocompleteResponse {
    pub suggestions: Vec<Suggestion>,
}

impl AutocompleteResponse {
    pub fn empty() -> Self {
        Self {
            suggestions: Vec::new(),
        }
    }
}
