//! Admin dashboard statistics and data seeding.

use axum::{extract::State, http::StatusCode, Json};
use persistence::repositories::{
    CategoryRepository, DeityRepository, LanguageRepository, MantraRepository,
    TranslationRepository,
};
use tracing::info;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::AdminAuth;
use domain::models::dashboard::POPULAR_MANTRAS_LIMIT;
use domain::models::{DashboardStats, SeedResponse};
use domain::services::seed;

/// GET /api/v1/admin/stats
pub async fn get_stats(State(state): State<AppState>) -> Result<Json<DashboardStats>, ApiError> {
    let mantras = MantraRepository::new(state.pool.clone());
    let categories = CategoryRepository::new(state.pool.clone());
    let deities = DeityRepository::new(state.pool.clone());
    let languages = LanguageRepository::new(state.pool.clone());
    let translations = TranslationRepository::new(state.pool.clone());

    let (
        total_mantras,
        total_categories,
        total_deities,
        total_languages,
        total_translations,
        total_views,
        popular,
    ) = tokio::try_join!(
        mantras.count(),
        categories.count(),
        deities.count(),
        languages.count(),
        translations.count(),
        mantras.total_views(),
        mantras.most_viewed(POPULAR_MANTRAS_LIMIT),
    )?;

    Ok(Json(DashboardStats {
        total_mantras,
        total_categories,
        total_deities,
        total_languages,
        total_translations,
        total_views,
        popular_mantras: popular.into_iter().map(Into::into).collect(),
    }))
}

/// Inserts the nine planetary deities, unless any of them is already
/// present.
///
/// POST /api/v1/admin/seed/grahas
pub async fn seed_grahas(
    State(state): State<AppState>,
    admin: AdminAuth,
) -> Result<(StatusCode, Json<SeedResponse>), ApiError> {
    let repo = DeityRepository::new(state.pool.clone());
    let names = seed::graha_names();

    let existing = repo.count_named(&names).await?;
    if existing > 0 {
        return Ok((StatusCode::OK, Json(SeedResponse::already_seeded(existing))));
    }

    let inserted = match repo.insert_many(&seed::grahas()).await {
        Ok(inserted) => inserted,
        // Another seed committed between the count and the insert.
        Err(err) if is_unique_violation(&err) => {
            let existing = repo.count_named(&names).await?;
            info!(admin_id = %admin.user_id, existing, "Concurrent graha seed lost the race");
            return Ok((StatusCode::OK, Json(SeedResponse::already_seeded(existing))));
        }
        Err(err) => return Err(err.into()),
    };

    let response = SeedResponse::seeded(inserted.into_iter().map(Into::into).collect());
    info!(admin_id = %admin.user_id, count = response.count, "Grahas seeded");

    Ok((StatusCode::CREATED, Json(response)))
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .map(|db| db.is_unique_violation())
        .unwrap_or(false)
}
