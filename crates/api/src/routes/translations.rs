//! Mantra translation handlers.
//!
//! Reading is public. Writes go through the admin router, either one
//! translation at a time or as a per-language draft from the tab editor.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use persistence::repositories::{MantraRepository, TranslationRepository};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::{Path, ValidatedJson};
use crate::middleware::AdminAuth;
use domain::models::{
    CreateTranslationRequest, ListTranslationsResponse, SuccessResponse, TranslationAction,
    TranslationDeletedResponse, TranslationDraft, TranslationResponse, UpdateTranslationRequest,
};

async fn ensure_mantra_exists(state: &AppState, mantra_id: Uuid) -> Result<(), ApiError> {
    MantraRepository::new(state.pool.clone())
        .find_by_id(mantra_id)
        .await?
        .map(|_| ())
        .ok_or_else(|| ApiError::NotFound("Mantra not found".to_string()))
}

/// All translations of a mantra, in language sort order.
///
/// GET /api/v1/mantras/:id/translations
pub async fn list_translations(
    State(state): State<AppState>,
    Path(mantra_id): Path<Uuid>,
) -> Result<Json<ListTranslationsResponse>, ApiError> {
    ensure_mantra_exists(&state, mantra_id).await?;

    let repo = TranslationRepository::new(state.pool.clone());
    let translations = repo
        .list_for_mantra(mantra_id)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(Json(ListTranslationsResponse { translations }))
}

/// POST /api/v1/mantras/:id/translations
pub async fn create_translation(
    State(state): State<AppState>,
    admin: AdminAuth,
    Path(mantra_id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<CreateTranslationRequest>,
) -> Result<(StatusCode, Json<TranslationResponse>), ApiError> {
    ensure_mantra_exists(&state, mantra_id).await?;

    let repo = TranslationRepository::new(state.pool.clone());
    let translation = repo
        .create(mantra_id, request.language_id, &request.content)
        .await?;

    info!(
        admin_id = %admin.user_id,
        mantra_id = %mantra_id,
        language = %translation.language_code,
        "Translation created"
    );

    Ok((
        StatusCode::CREATED,
        Json(TranslationResponse {
            translation: translation.into(),
        }),
    ))
}

/// PUT /api/v1/mantras/:id/translations/:translation_id
pub async fn update_translation(
    State(state): State<AppState>,
    admin: AdminAuth,
    Path((mantra_id, translation_id)): Path<(Uuid, Uuid)>,
    ValidatedJson(request): ValidatedJson<UpdateTranslationRequest>,
) -> Result<Json<TranslationResponse>, ApiError> {
    let repo = TranslationRepository::new(state.pool.clone());
    let translation = repo
        .update(translation_id, mantra_id, &request.content)
        .await?
        .ok_or_else(|| ApiError::NotFound("Translation not found".to_string()))?;

    info!(
        admin_id = %admin.user_id,
        translation_id = %translation_id,
        "Translation updated"
    );

    Ok(Json(TranslationResponse {
        translation: translation.into(),
    }))
}

/// DELETE /api/v1/mantras/:id/translations/:translation_id
pub async fn delete_translation(
    State(state): State<AppState>,
    admin: AdminAuth,
    Path((mantra_id, translation_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let repo = TranslationRepository::new(state.pool.clone());
    if repo.delete(translation_id, mantra_id).await? == 0 {
        return Err(ApiError::NotFound("Translation not found".to_string()));
    }

    info!(
        admin_id = %admin.user_id,
        translation_id = %translation_id,
        "Translation deleted"
    );

    Ok(Json(SuccessResponse { success: true }))
}

/// Saves one language tab of the translation editor.
///
/// PUT /api/v1/admin/mantras/:id/translations/:language_id
///
/// Blank text removes that language's translation and answers
/// `{ "deleted": bool }`. Anything else is written as an upsert and
/// answers `{ "translation": .. }`.
pub async fn save_translation_draft(
    State(state): State<AppState>,
    admin: AdminAuth,
    Path((mantra_id, language_id)): Path<(Uuid, Uuid)>,
    ValidatedJson(draft): ValidatedJson<TranslationDraft>,
) -> Result<Response, ApiError> {
    ensure_mantra_exists(&state, mantra_id).await?;
    let repo = TranslationRepository::new(state.pool.clone());

    match draft.resolve() {
        TranslationAction::Delete => {
            let deleted = repo.delete_for_language(mantra_id, language_id).await? > 0;
            info!(
                admin_id = %admin.user_id,
                mantra_id = %mantra_id,
                language_id = %language_id,
                deleted,
                "Translation draft cleared"
            );
            Ok(Json(TranslationDeletedResponse { deleted }).into_response())
        }
        TranslationAction::Upsert(content) => {
            content.validate()?;
            let translation = repo
                .upsert_for_language(mantra_id, language_id, &content)
                .await?;
            info!(
                admin_id = %admin.user_id,
                mantra_id = %mantra_id,
                language = %translation.language_code,
                "Translation draft saved"
            );
            Ok(Json(TranslationResponse {
                translation: translation.into(),
            })
            .into_response())
        }
    }
}
