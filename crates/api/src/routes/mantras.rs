//! Public mantra handlers.

use axum::{
    extract::State,
    Json,
};
use persistence::repositories::MantraRepository;
use uuid::Uuid;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::Path;
use crate::middleware::metrics::record_mantra_view;
use domain::models::{
    MantraDetailResponse, MantraWithRelations, RelatedMantra, TrendingResponse, ViewResponse,
};
use domain::services::catalog::{RELATED_LIMIT, TRENDING_LIMIT};

/// Most viewed mantras.
///
/// GET /api/v1/mantras/trending
pub async fn trending(State(state): State<AppState>) -> Result<Json<TrendingResponse>, ApiError> {
    let repo = MantraRepository::new(state.pool.clone());
    let mantras = repo
        .trending(TRENDING_LIMIT)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(Json(TrendingResponse { mantras }))
}

/// A mantra with its relations and up to four related mantras sharing its
/// deity or category.
///
/// GET /api/v1/mantras/:id
pub async fn get_mantra(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MantraDetailResponse>, ApiError> {
    let repo = MantraRepository::new(state.pool.clone());
    let mantra: MantraWithRelations = repo
        .find_with_relations(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Mantra not found".to_string()))?
        .into();

    let related_mantras: Vec<RelatedMantra> = repo
        .find_related(
            id,
            mantra.mantra.deity_id,
            mantra.mantra.category_id,
            RELATED_LIMIT,
        )
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(Json(MantraDetailResponse {
        mantra,
        related_mantras,
    }))
}

/// Records a page view.
///
/// POST /api/v1/mantras/:id/view
pub async fn record_view(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ViewResponse>, ApiError> {
    let repo = MantraRepository::new(state.pool.clone());
    let view_count = repo
        .increment_view_count(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Mantra not found".to_string()))?;

    record_mantra_view();

    Ok(Json(ViewResponse {
        success: true,
        view_count,
    }))
}
