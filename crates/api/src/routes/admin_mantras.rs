//! Admin mantra management.

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use persistence::repositories::{MantraInput, MantraRepository, MantraUpdate};
use tracing::info;
use uuid::Uuid;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::{Path, Query, ValidatedJson};
use crate::middleware::AdminAuth;
use domain::models::{
    AdminMantraListResponse, CreateMantraRequest, Mantra, MantraWithRelations,
    UpdateMantraRequest,
};
use shared::pagination::{PageQuery, Pagination};

/// Newest first, paged.
///
/// GET /api/v1/admin/mantras?page=&per_page=
pub async fn list_mantras(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<AdminMantraListResponse>, ApiError> {
    let limits = &state.config.limits;
    let params = query.resolve(limits.admin_page_size, limits.admin_max_page_size);

    let repo = MantraRepository::new(state.pool.clone());
    let (rows, total) = tokio::try_join!(repo.list_admin(params.limit, params.offset), repo.count())?;

    Ok(Json(AdminMantraListResponse {
        mantras: rows.into_iter().map(Into::into).collect(),
        pagination: Pagination::new(params, total),
    }))
}

/// GET /api/v1/admin/mantras/:id
pub async fn get_mantra(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MantraWithRelations>, ApiError> {
    let mantra = MantraRepository::new(state.pool.clone())
        .find_with_relations(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Mantra not found".to_string()))?;
    Ok(Json(mantra.into()))
}

/// POST /api/v1/admin/mantras
pub async fn create_mantra(
    State(state): State<AppState>,
    admin: AdminAuth,
    ValidatedJson(request): ValidatedJson<CreateMantraRequest>,
) -> Result<(StatusCode, Json<Mantra>), ApiError> {
    let repo = MantraRepository::new(state.pool.clone());
    let mantra: Mantra = repo
        .create(&MantraInput {
            title: request.title.trim(),
            text: &request.text,
            category_id: request.category_id,
            deity_id: request.deity_id,
            count_id: request.count_id,
            time_id: request.time_id,
            kalam_id: request.kalam_id,
            range_id: request.range_id,
        })
        .await?
        .into();

    info!(
        admin_id = %admin.user_id,
        mantra_id = %mantra.id,
        title = %mantra.title,
        "Mantra created"
    );

    Ok((StatusCode::CREATED, Json(mantra)))
}

/// Partial update. An explicit `null` on a reference clears it.
///
/// PATCH /api/v1/admin/mantras/:id
pub async fn update_mantra(
    State(state): State<AppState>,
    admin: AdminAuth,
    Path(id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<UpdateMantraRequest>,
) -> Result<Json<Mantra>, ApiError> {
    let repo = MantraRepository::new(state.pool.clone());
    let update = MantraUpdate {
        title: request.title.as_deref().map(str::trim),
        text: request.text.as_deref(),
        category_id: request.category_id,
        deity_id: request.deity_id,
        count_id: request.count_id,
        time_id: request.time_id,
        kalam_id: request.kalam_id,
        range_id: request.range_id,
    };

    let mantra: Mantra = repo
        .update(id, &update)
        .await?
        .ok_or_else(|| ApiError::NotFound("Mantra not found".to_string()))?
        .into();

    info!(admin_id = %admin.user_id, mantra_id = %id, "Mantra updated");

    Ok(Json(mantra))
}

/// Translations go with the mantra.
///
/// DELETE /api/v1/admin/mantras/:id
pub async fn delete_mantra(
    State(state): State<AppState>,
    admin: AdminAuth,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let repo = MantraRepository::new(state.pool.clone());
    if repo.delete(id).await? == 0 {
        return Err(ApiError::NotFound("Mantra not found".to_string()));
    }

    info!(admin_id = %admin.user_id, mantra_id = %id, "Mantra deleted");

    Ok(StatusCode::NO_CONTENT)
}
