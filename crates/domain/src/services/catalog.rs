//! Query shaping for the public catalog endpoints.
//!
//! Handlers call these before touching the database so that limits, prefix
//! escaping and suggestion ordering stay consistent across routes.

use shared::pagination::clamp_limit;

use crate::models::{Suggestion, SuggestionType};

pub const DEFAULT_SEARCH_LIMIT: i64 = 20;
pub const MAX_SEARCH_LIMIT: i64 = 100;

pub const DEFAULT_AUTOCOMPLETE_LIMIT: i64 = 10;
pub const MAX_AUTOCOMPLETE_LIMIT: i64 = 50;

/// Queries shorter than this return no suggestions.
pub const MIN_AUTOCOMPLETE_CHARS: usize = 2;

pub const TRENDING_LIMIT: i64 = 6;
pub const RELATED_LIMIT: i64 = 4;

/// Trims a free-text query. Blank input means "no text search".
pub fn normalize_search_text(q: Option<&str>) -> Option<String> {
    q.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}

pub fn search_limit(requested: Option<i64>, max: i64) -> i64 {
    clamp_limit(requested, DEFAULT_SEARCH_LIMIT, max.min(MAX_SEARCH_LIMIT))
}

pub fn autocomplete_limit(requested: Option<i64>, max: i64) -> i64 {
    clamp_limit(
        requested,
        DEFAULT_AUTOCOMPLETE_LIMIT,
        max.min(MAX_AUTOCOMPLETE_LIMIT),
    )
}

/// Builds the ILIKE pattern for a prefix lookup, or `None` when the query is
/// too short to suggest anything.
///
/// `%`, `_` and `\` in user input match literally.
pub fn autocomplete_prefix(q: Option<&str>) -> Option<String> {
    let q = q?.trim();
    if q.chars().count() < MIN_AUTOCOMPLETE_CHARS {
        return None;
    }

    let mut pattern = String::with_capacity(q.len() + 1);
    for c in q.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    Some(pattern)
}

/// Mantra titles first, then deities, then categories, cut at `limit`.
pub fn merge_suggestions(
    mantras: Vec<String>,
    deities: Vec<String>,
    categories: Vec<String>,
    limit: i64,
) -> Vec<Suggestion> {
    let limit = usize::try_from(limit).unwrap_or(0);

    mantras
        .into_iter()
        .map(|t| Suggestion::new(t, SuggestionType::Mantra))
        .chain(
            deities
                .into_iter()
                .map(|t| Suggestion::new(t, SuggestionType::Deity)),
        )
        .chain(
            categories
                .into_iter()
                .map(|t| Suggestion::new(t, SuggestionType::Category)),
        )
        .take(limit)
        .collect()
}
