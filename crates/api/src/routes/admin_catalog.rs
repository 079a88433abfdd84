//! Admin CRUD for the classification tables: categories, deities,
//! recitation counts and times, kalams and time ranges.
//!
//! Deleting any of these leaves referencing mantras unclassified.

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use persistence::repositories::{
    CategoryRepository, DeityRepository, DeityUpdate, KalamRepository,
    RecitationCountRepository, RecitationTimeRepository, TimeRangeRepository,
};
use tracing::info;
use uuid::Uuid;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::{Path, ValidatedJson};
use crate::middleware::AdminAuth;
use domain::models::{
    Category, CreateCategoryRequest, CreateDeityRequest, CreateKalamRequest,
    CreateRecitationCountRequest, CreateRecitationTimeRequest, CreateTimeRangeRequest, Deity,
    Kalam, ListCategoriesResponse, ListDeitiesResponse, ListKalamsResponse,
    ListRecitationCountsResponse, ListRecitationTimesResponse, ListTimeRangesResponse,
    RecitationCount, RecitationTime, TimeRange, UpdateCategoryRequest, UpdateDeityRequest,
    UpdateKalamRequest, UpdateRecitationCountRequest, UpdateRecitationTimeRequest,
    UpdateTimeRangeRequest,
};

fn not_found(what: &str) -> ApiError {
    ApiError::NotFound(format!("{} not found", what))
}

fn deleted_or_not_found(rows: u64, what: &str) -> Result<StatusCode, ApiError> {
    if rows == 0 {
        Err(not_found(what))
    } else {
        Ok(StatusCode::NO_CONTENT)
    }
}

// ===========================================
// Categories
// ===========================================

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

pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Category>, ApiError> {
    let category = CategoryRepository::new(state.pool.clone())
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found("Category"))?;
    Ok(Json(category.into()))
}

pub async fn create_category(
    State(state): State<AppState>,
    admin: AdminAuth,
    ValidatedJson(request): ValidatedJson<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<Category>), ApiError> {
    let category: Category = CategoryRepository::new(state.pool.clone())
        .create(request.name.trim(), request.description.as_deref())
        .await?
        .into();

    info!(admin_id = %admin.user_id, category_id = %category.id, name = %category.name, "Category created");
    Ok((StatusCode::CREATED, Json(category)))
}

pub async fn update_category(
    State(state): State<AppState>,
    admin: AdminAuth,
    Path(id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<UpdateCategoryRequest>,
) -> Result<Json<Category>, ApiError> {
    let category = CategoryRepository::new(state.pool.clone())
        .update(
            id,
            request.name.as_deref().map(str::trim),
            request.description.as_deref(),
        )
        .await?
        .ok_or_else(|| not_found("Category"))?;

    info!(admin_id = %admin.user_id, category_id = %id, "Category updated");
    Ok(Json(category.into()))
}

pub async fn delete_category(
    State(state): State<AppState>,
    admin: AdminAuth,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let rows = CategoryRepository::new(state.pool.clone())
        .delete(id)
        .await
        .map_err(ApiError::from_delete)?;

    info!(admin_id = %admin.user_id, category_id = %id, rows, "Category delete");
    deleted_or_not_found(rows, "Category")
}

// ===========================================
// Deities
// ===========================================

/// Includes inactive deities, unlike the public list.
pub async fn list_deities(
    State(state): State<AppState>,
) -> Result<Json<ListDeitiesResponse>, ApiError> {
    let deities = DeityRepository::new(state.pool.clone())
        .list()
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(Json(ListDeitiesResponse { deities }))
}

pub async fn get_deity(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Deity>, ApiError> {
    let deity = DeityRepository::new(state.pool.clone())
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found("Deity"))?;
    Ok(Json(deity.into()))
}

pub async fn create_deity(
    State(state): State<AppState>,
    admin: AdminAuth,
    ValidatedJson(mut request): ValidatedJson<CreateDeityRequest>,
) -> Result<(StatusCode, Json<Deity>), ApiError> {
    request.name = request.name.trim().to_string();
    let deity: Deity = DeityRepository::new(state.pool.clone())
        .create(&request)
        .await?
        .into();

    info!(admin_id = %admin.user_id, deity_id = %deity.id, name = %deity.name, "Deity created");
    Ok((StatusCode::CREATED, Json(deity)))
}

pub async fn update_deity(
    State(state): State<AppState>,
    admin: AdminAuth,
    Path(id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<UpdateDeityRequest>,
) -> Result<Json<Deity>, ApiError> {
    let update = DeityUpdate {
        name: request.name.as_deref().map(str::trim),
        description: request.description.as_deref(),
        sanskrit_name: request.sanskrit_name.as_deref(),
        day_of_week: request.day_of_week.as_deref(),
        color: request.color.as_deref(),
        gemstone: request.gemstone.as_deref(),
        metal: request.metal.as_deref(),
        element: request.element.as_deref(),
        direction: request.direction.as_deref(),
        image_url: request.image_url.as_deref(),
        is_active: request.is_active,
    };

    let deity = DeityRepository::new(state.pool.clone())
        .update(id, &update)
        .await?
        .ok_or_else(|| not_found("Deity"))?;

    info!(admin_id = %admin.user_id, deity_id = %id, "Deity updated");
    Ok(Json(deity.into()))
}

pub async fn delete_deity(
    State(state): State<AppState>,
    admin: AdminAuth,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let rows = DeityRepository::new(state.pool.clone())
        .delete(id)
        .await
        .map_err(ApiError::from_delete)?;

    info!(admin_id = %admin.user_id, deity_id = %id, rows, "Deity delete");
    deleted_or_not_found(rows, "Deity")
}

// ===========================================
// Recitation counts
// ===========================================

pub async fn list_recitation_counts(
    State(state): State<AppState>,
) -> Result<Json<ListRecitationCountsResponse>, ApiError> {
    let recitation_counts = RecitationCountRepository::new(state.pool.clone())
        .list()
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(Json(ListRecitationCountsResponse { recitation_counts }))
}

pub async fn get_recitation_count(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RecitationCount>, ApiError> {
    let count = RecitationCountRepository::new(state.pool.clone())
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found("Recitation count"))?;
    Ok(Json(count.into()))
}

pub async fn create_recitation_count(
    State(state): State<AppState>,
    admin: AdminAuth,
    ValidatedJson(request): ValidatedJson<CreateRecitationCountRequest>,
) -> Result<(StatusCode, Json<RecitationCount>), ApiError> {
    let count: RecitationCount = RecitationCountRepository::new(state.pool.clone())
        .create(request.count_value, request.description.as_deref())
        .await?
        .into();

    info!(admin_id = %admin.user_id, count_id = %count.id, value = count.count_value, "Recitation count created");
    Ok((StatusCode::CREATED, Json(count)))
}

pub async fn update_recitation_count(
    State(state): State<AppState>,
    admin: AdminAuth,
    Path(id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<UpdateRecitationCountRequest>,
) -> Result<Json<RecitationCount>, ApiError> {
    let count = RecitationCountRepository::new(state.pool.clone())
        .update(id, request.count_value, request.description.as_deref())
        .await?
        .ok_or_else(|| not_found("Recitation count"))?;

    info!(admin_id = %admin.user_id, count_id = %id, "Recitation count updated");
    Ok(Json(count.into()))
}

pub async fn delete_recitation_count(
    State(state): State<AppState>,
    admin: AdminAuth,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let rows = RecitationCountRepository::new(state.pool.clone())
        .delete(id)
        .await
        .map_err(ApiError::from_delete)?;

    info!(admin_id = %admin.user_id, count_id = %id, rows, "Recitation count delete");
    deleted_or_not_found(rows, "Recitation count")
}

// ===========================================
// Recitation times
// ===========================================

pub async fn list_recitation_times(
    State(state): State<AppState>,
) -> Result<Json<ListRecitationTimesResponse>, ApiError> {
    let recitation_times = RecitationTimeRepository::new(state.pool.clone())
        .list()
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(Json(ListRecitationTimesResponse { recitation_times }))
}

pub async fn get_recitation_time(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RecitationTime>, ApiError> {
    let time = RecitationTimeRepository::new(state.pool.clone())
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found("Recitation time"))?;
    Ok(Json(time.into()))
}

pub async fn create_recitation_time(
    State(state): State<AppState>,
    admin: AdminAuth,
    ValidatedJson(request): ValidatedJson<CreateRecitationTimeRequest>,
) -> Result<(StatusCode, Json<RecitationTime>), ApiError> {
    let time: RecitationTime = RecitationTimeRepository::new(state.pool.clone())
        .create(request.name.trim(), request.description.as_deref())
        .await?
        .into();

    info!(admin_id = %admin.user_id, time_id = %time.id, name = %time.name, "Recitation time created");
    Ok((StatusCode::CREATED, Json(time)))
}

pub async fn update_recitation_time(
    State(state): State<AppState>,
    admin: AdminAuth,
    Path(id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<UpdateRecitationTimeRequest>,
) -> Result<Json<RecitationTime>, ApiError> {
    let time = RecitationTimeRepository::new(state.pool.clone())
        .update(
            id,
            request.name.as_deref().map(str::trim),
            request.description.as_deref(),
        )
        .await?
        .ok_or_else(|| not_found("Recitation time"))?;

    info!(admin_id = %admin.user_id, time_id = %id, "Recitation time updated");
    Ok(Json(time.into()))
}

pub async fn delete_recitation_time(
    State(state): State<AppState>,
    admin: AdminAuth,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let rows = RecitationTimeRepository::new(state.pool.clone())
        .delete(id)
        .await
        .map_err(ApiError::from_delete)?;

    info!(admin_id = %admin.user_id, time_id = %id, rows, "Recitation time delete");
    deleted_or_not_found(rows, "Recitation time")
}

// ===========================================
// Kalams
// ===========================================

pub async fn list_kalams(
    State(state): State<AppState>,
) -> Result<Json<ListKalamsResponse>, ApiError> {
    let kalams = KalamRepository::new(state.pool.clone())
        .list()
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(Json(ListKalamsResponse { kalams }))
}

pub async fn get_kalam(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Kalam>, ApiError> {
    let kalam = KalamRepository::new(state.pool.clone())
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found("Kalam"))?;
    Ok(Json(kalam.into()))
}

pub async fn create_kalam(
    State(state): State<AppState>,
    admin: AdminAuth,
    ValidatedJson(request): ValidatedJson<CreateKalamRequest>,
) -> Result<(StatusCode, Json<Kalam>), ApiError> {
    let kalam: Kalam = KalamRepository::new(state.pool.clone())
        .create(
            request.name.trim(),
            request.planet.as_deref(),
            request.description.as_deref(),
            request.is_auspicious,
        )
        .await?
        .into();

    info!(admin_id = %admin.user_id, kalam_id = %kalam.id, name = %kalam.name, "Kalam created");
    Ok((StatusCode::CREATED, Json(kalam)))
}

pub async fn update_kalam(
    State(state): State<AppState>,
    admin: AdminAuth,
    Path(id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<UpdateKalamRequest>,
) -> Result<Json<Kalam>, ApiError> {
    let kalam = KalamRepository::new(state.pool.clone())
        .update(
            id,
            request.name.as_deref().map(str::trim),
            request.planet.as_deref(),
            request.description.as_deref(),
            request.is_auspicious,
        )
        .await?
        .ok_or_else(|| not_found("Kalam"))?;

    info!(admin_id = %admin.user_id, kalam_id = %id, "Kalam updated");
    Ok(Json(kalam.into()))
}

pub async fn delete_kalam(
    State(state): State<AppState>,
    admin: AdminAuth,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let rows = KalamRepository::new(state.pool.clone())
        .delete(id)
        .await
        .map_err(ApiError::from_delete)?;

    info!(admin_id = %admin.user_id, kalam_id = %id, rows, "Kalam delete");
    deleted_or_not_found(rows, "Kalam")
}

// ===========================================
// Time ranges
// ===========================================

pub async fn list_time_ranges(
    State(state): State<AppState>,
) -> Result<Json<ListTimeRangesResponse>, ApiError> {
    let time_ranges = TimeRangeRepository::new(state.pool.clone())
        .list()
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(Json(ListTimeRangesResponse { time_ranges }))
}

pub async fn get_time_range(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TimeRange>, ApiError> {
    let range = TimeRangeRepository::new(state.pool.clone())
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found("Time range"))?;
    Ok(Json(range.into()))
}

pub async fn create_time_range(
    State(state): State<AppState>,
    admin: AdminAuth,
    ValidatedJson(request): ValidatedJson<CreateTimeRangeRequest>,
) -> Result<(StatusCode, Json<TimeRange>), ApiError> {
    let range: TimeRange = TimeRangeRepository::new(state.pool.clone())
        .create(
            request.start_time,
            request.end_time,
            request.description.as_deref(),
        )
        .await?
        .into();

    info!(admin_id = %admin.user_id, range_id = %range.id, "Time range created");
    Ok((StatusCode::CREATED, Json(range)))
}

/// When only one bound changes, the resulting window is checked against the
/// stored row before writing.
pub async fn update_time_range(
    State(state): State<AppState>,
    admin: AdminAuth,
    Path(id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<UpdateTimeRangeRequest>,
) -> Result<Json<TimeRange>, ApiError> {
    let repo = TimeRangeRepository::new(state.pool.clone());
    let current: TimeRange = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found("Time range"))?
        .into();

    let (start, end) = request.merged_with(&current);
    shared::validation::validate_time_range(start, end).map_err(|e| {
        ApiError::Validation(
            e.message
                .map(|m| m.to_string())
                .unwrap_or_else(|| e.code.to_string()),
        )
    })?;

    let range = repo
        .update(
            id,
            request.start_time,
            request.end_time,
            request.description.as_deref(),
        )
        .await?
        .ok_or_else(|| not_found("Time range"))?;

    info!(admin_id = %admin.user_id, range_id = %id, "Time range updated");
    Ok(Json(range.into()))
}

pub async fn delete_time_range(
    State(state): State<AppState>,
    admin: AdminAuth,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let rows = TimeRangeRepository::new(state.pool.clone())
        .delete(id)
        .await
        .map_err(ApiError::from_delete)?;

    info!(admin_id = %admin.user_id, range_id = %id, rows, "Time range delete");
    deleted_or_not_found(rows, "Time range")
}
