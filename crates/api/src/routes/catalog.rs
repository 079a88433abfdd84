//! Public reference data: deities, categories, languages and the search
//! page's filter dropdowns.

use axum::{extract::State, http::StatusCode, Json};
use persistence::repositories::{
    CategoryRepository, DeityRepository, KalamRepository, LanguageInput, LanguageRepository,
    RecitationTimeRepository,
};
use tracing::info;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::ValidatedJson;
use crate::middleware::AdminAuth;
use domain::models::{
    CreateLanguageRequest, FiltersResponse, LanguageResponse, ListCategoriesResponse,
    ListDeitiesResponse, ListLanguagesResponse,
};

/// Active deities by name.
///
/// GET /api/v1/deities
pub async fn list_deities(
    State(state): State<AppState>,
) -> Result<Json<ListDeitiesResponse>, ApiError> {
    let deities = DeityRepository::new(state.pool.clone())
        .list_active()
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(Json(ListDeitiesResponse { deities }))
}

/// GET /api/v1/categories
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<ListCategoriesResponse>, ApiError> {
    let categories = CategoryRepository::new(state.pool.clone())
        .list()
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(Json(ListCategoriesResponse { categories }))
}

/// Active languages in display order.
///
/// GET /api/v1/languages
pub async fn list_languages(
    State(state): State<AppState>,
) -> Result<Json<ListLanguagesResponse>, ApiError> {
    let languages = LanguageRepository::new(state.pool.clone())
        .list_active()
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(Json(ListLanguagesResponse { languages }))
}

/// POST /api/v1/languages (admin)
pub async fn create_language(
    State(state): State<AppState>,
    admin: AdminAuth,
    ValidatedJson(request): ValidatedJson<CreateLanguageRequest>,
) -> Result<(StatusCode, Json<LanguageResponse>), ApiError> {
    let language = LanguageRepository::new(state.pool.clone())
        .create(&LanguageInput {
            code: &request.code,
            name: request.name.trim(),
            native_name: request.native_name.as_deref(),
            direction: request.direction.as_str(),
            is_active: request.is_active,
            sort_order: request.sort_order,
        })
        .await?;

    info!(
        admin_id = %admin.user_id,
        code = %language.code,
        "Language created"
    );

    Ok((
        StatusCode::CREATED,
        Json(LanguageResponse {
            language: language.into(),
        }),
    ))
}

/// Everything the search page needs for its dropdowns, in one round trip.
///
/// GET /api/v1/filters
pub async fn get_filters(State(state): State<AppState>) -> Result<Json<FiltersResponse>, ApiError> {
    let category_repo = CategoryRepository::new(state.pool.clone());
    let deity_repo = DeityRepository::new(state.pool.clone());
    let time_repo = RecitationTimeRepository::new(state.pool.clone());
    let kalam_repo = KalamRepository::new(state.pool.clone());

    let (categories, deities, recitation_times, kalams) = tokio::try_join!(
        category_repo.list(),
        deity_repo.list_active(),
        time_repo.list(),
        kalam_repo.list(),
    )?;

    Ok(Json(FiltersResponse {
        categories: categories.into_iter().map(Into::into).collect(),
        deities: deities.into_iter().map(Into::into).collect(),
        recitation_times: recitation_times.into_iter().map(Into::into).collect(),
        kalams: kalams.into_iter().map(Into::into).collect(),
    }))
}
