//! Public search and autocomplete handlers.

use axum::{
    extract::State,
    Json,
};
use persistence::repositories::{CategoryRepository, DeityRepository, MantraRepository};

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::Query;
use crate::middleware::metrics::record_empty_search;
use domain::models::{
    AutocompleteQuery, AutocompleteResponse, MantraWithRelations, SearchQuery, SearchResponse,
};
use domain::services::catalog::{
    autocomplete_limit, autocomplete_prefix, merge_suggestions, normalize_search_text,
    search_limit,
};

/// Full-text search with optional filters.
///
/// GET /api/v1/search?q=&category=&deity=&time=&kalam=&limit=
///
/// A blank `q` lists mantras in popularity order. `total` is the size of
/// the returned page.
pub async fn search_mantras(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchResponse>, ApiError> {
    let text = normalize_search_text(query.q.as_deref());
    let limit = search_limit(query.limit, state.config.limits.search_max_limit);

    let repo = MantraRepository::new(state.pool.clone());
    let mantras: Vec<MantraWithRelations> = repo
        .search(&query.filters(), text.as_deref(), limit)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    if mantras.is_empty() && text.is_some() {
        record_empty_search();
    }

    let total = mantras.len();
    Ok(Json(SearchResponse { mantras, total }))
}

/// Prefix suggestions across mantra titles, active deities and categories.
///
/// GET /api/v1/autocomplete?q=&limit=
pub async fn autocomplete(
    State(state): State<AppState>,
    Query(query): Query<AutocompleteQuery>,
) -> Result<Json<AutocompleteResponse>, ApiError> {
    let Some(pattern) = autocomplete_prefix(query.q.as_deref()) else {
        return Ok(Json(AutocompleteResponse::empty()));
    };
    let limit = autocomplete_limit(query.limit, state.config.limits.autocomplete_max_limit);

    let mantra_repo = MantraRepository::new(state.pool.clone());
    let deity_repo = DeityRepository::new(state.pool.clone());
    let category_repo = CategoryRepository::new(state.pool.clone());

    let (mantras, deities, categories) = tokio::try_join!(
        mantra_repo.find_titles_by_prefix(&pattern, limit),
        deity_repo.find_names_by_prefix(&pattern, limit),
        category_repo.find_names_by_prefix(&pattern, limit),
    )?;

    Ok(Json(AutocompleteResponse {
        suggestions: merge_suggestions(mantras, deities, categories, limit),
    }))
}
