//! Admin language management.

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use persistence::repositories::{LanguageRepository, LanguageUpdate};
use tracing::info;
use uuid::Uuid;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::{Path, ValidatedJson};
use crate::middleware::AdminAuth;
use domain::models::{LanguageResponse, ListLanguagesResponse, UpdateLanguageRequest};

/// Includes inactive languages.
///
/// GET /api/v1/admin/languages
pub async fn list_languages(
    State(state): State<AppState>,
) -> Result<Json<ListLanguagesResponse>, ApiError> {
    let languages = LanguageRepository::new(state.pool.clone())
        .list()
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(Json(ListLanguagesResponse { languages }))
}

/// GET /api/v1/admin/languages/:id
pub async fn get_language(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<LanguageResponse>, ApiError> {
    let language = LanguageRepository::new(state.pool.clone())
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Language not found".to_string()))?;
    Ok(Json(LanguageResponse {
        language: language.into(),
    }))
}

/// PATCH /api/v1/admin/languages/:id
pub async fn update_language(
    State(state): State<AppState>,
    admin: AdminAuth,
    Path(id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<UpdateLanguageRequest>,
) -> Result<Json<LanguageResponse>, ApiError> {
    let update = LanguageUpdate {
        code: request.code.as_deref(),
        name: request.name.as_deref().map(str::trim),
        native_name: request.native_name.as_deref(),
        direction: request.direction.map(|d| d.as_str()),
        is_active: request.is_active,
        sort_order: request.sort_order,
    };

    let language = LanguageRepository::new(state.pool.clone())
        .update(id, &update)
        .await?
        .ok_or_else(|| ApiError::NotFound("Language not found".to_string()))?;

    info!(admin_id = %admin.user_id, language_id = %id, "Language updated");
    Ok(Json(LanguageResponse {
        language: language.into(),
    }))
}

/// Refused with 409 while translations still use the language.
///
/// DELETE /api/v1/admin/languages/:id
pub async fn delete_language(
    State(state): State<AppState>,
    admin: AdminAuth,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let rows = LanguageRepository::new(state.pool.clone())
        .delete(id)
        .await
        .map_err(|e| match ApiError::from_delete(e) {
            ApiError::Conflict(_) => {
                ApiError::Conflict("Language is used by existing translations".to_string())
            }
            other => other,
        })?;

    if rows == 0 {
        return Err(ApiError::NotFound("Language not found".to_string()));
    }

    info!(admin_id = %admin.user_id, language_id = %id, "Language deleted");
    Ok(StatusCode::NO_CONTENT)
}
