use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post, put},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::middleware::{
    metrics_handler, metrics_middleware, rate_limit_middleware, require_admin,
    security_headers_middleware, trace_id, RateLimiterState,
};
use crate::routes::{
    admin, admin_catalog, admin_languages, admin_mantras, catalog, health, mantras, search,
    translations,
};
use shared::jwt::{JwtError, JwtVerifier};

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<Config>,
    pub verifier: Arc<JwtVerifier>,
    pub rate_limiter: Option<Arc<RateLimiterState>>,
}

impl AppState {
    pub fn new(config: Config, pool: PgPool) -> Result<Self, JwtError> {
        let verifier = JwtVerifier::new(
            &config.auth.jwt_secret,
            config.auth.leeway_secs,
            config.auth.audience.clone(),
        )?;

        // 0 disables rate limiting
        let rate_limiter =
            RateLimiterState::new(config.security.rate_limit_per_minute).map(Arc::new);

        Ok(Self {
            pool,
            config: Arc::new(config),
            verifier: Arc::new(verifier),
            rate_limiter,
        })
    }
}

fn cors_layer(config: &Config) -> CorsLayer {
    if config.security.cors_origins.is_empty() {
        // Development: allow any origin
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

/// Builds the router for an already constructed state.
pub fn create_router(state: AppState) -> Router {
    let config = state.config.clone();

    // Public catalog routes, rate limited per client IP
    let public_routes = Router::new()
        .route("/api/v1/search", get(search::search_mantras))
        .route("/api/v1/autocomplete", get(search::autocomplete))
        .route("/api/v1/mantras/trending", get(mantras::trending))
        .route("/api/v1/mantras/:id", get(mantras::get_mantra))
        .route("/api/v1/mantras/:id/view", post(mantras::record_view))
        .route(
            "/api/v1/mantras/:id/translations",
            get(translations::list_translations),
        )
        .route("/api/v1/deities", get(catalog::list_deities))
        .route("/api/v1/categories", get(catalog::list_categories))
        .route("/api/v1/languages", get(catalog::list_languages))
        .route("/api/v1/filters", get(catalog::get_filters))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit_middleware,
        ));

    // Admin routes (bearer token with the admin role)
    let admin_routes = Router::new()
        .route(
            "/api/v1/mantras/:id/translations",
            post(translations::create_translation),
        )
        .route(
            "/api/v1/mantras/:id/translations/:translation_id",
            put(translations::update_translation).delete(translations::delete_translation),
        )
        .route(
            "/api/v1/admin/mantras/:id/translations/:language_id",
            put(translations::save_translation_draft),
        )
        .route("/api/v1/languages", post(catalog::create_language))
        .route("/api/v1/admin/stats", get(admin::get_stats))
        .route("/api/v1/admin/seed/grahas", post(admin::seed_grahas))
        .route(
            "/api/v1/admin/mantras",
            get(admin_mantras::list_mantras).post(admin_mantras::create_mantra),
        )
        .route(
            "/api/v1/admin/mantras/:id",
            get(admin_mantras::get_mantra)
                .patch(admin_mantras::update_mantra)
                .delete(admin_mantras::delete_mantra),
        )
        .route(
            "/api/v1/admin/categories",
            get(admin_catalog::list_categories).post(admin_catalog::create_category),
        )
        .route(
            "/api/v1/admin/categories/:id",
            get(admin_catalog::get_category)
                .patch(admin_catalog::update_category)
                .delete(admin_catalog::delete_category),
        )
        .route(
            "/api/v1/admin/deities",
            get(admin_catalog::list_deities).post(admin_catalog::create_deity),
        )
        .route(
            "/api/v1/admin/deities/:id",
            get(admin_catalog::get_deity)
                .patch(admin_catalog::update_deity)
                .delete(admin_catalog::delete_deity),
        )
        .route(
            "/api/v1/admin/recitation-counts",
            get(admin_catalog::list_recitation_counts)
                .post(admin_catalog::create_recitation_count),
        )
        .route(
            "/api/v1/admin/recitation-counts/:id",
            get(admin_catalog::get_recitation_count)
                .patch(admin_catalog::update_recitation_count)
                .delete(admin_catalog::delete_recitation_count),
        )
        .route(
            "/api/v1/admin/recitation-times",
            get(admin_catalog::list_recitation_times)
                .post(admin_catalog::create_recitation_time),
        )
        .route(
            "/api/v1/admin/recitation-times/:id",
            get(admin_catalog::get_recitation_time)
                .patch(admin_catalog::update_recitation_time)
                .delete(admin_catalog::delete_recitation_time),
        )
        .route(
            "/api/v1/admin/kalams",
            get(admin_catalog::list_kalams).post(admin_catalog::create_kalam),
        )
        .route(
            "/api/v1/admin/kalams/:id",
            get(admin_catalog::get_kalam)
                .patch(admin_catalog::update_kalam)
                .delete(admin_catalog::delete_kalam),
        )
        .route(
            "/api/v1/admin/time-ranges",
            get(admin_catalog::list_time_ranges).post(admin_catalog::create_time_range),
        )
        .route(
            "/api/v1/admin/time-ranges/:id",
            get(admin_catalog::get_time_range)
                .patch(admin_catalog::update_time_range)
                .delete(admin_catalog::delete_time_range),
        )
        .route(
            "/api/v1/admin/languages",
            get(admin_languages::list_languages).post(catalog::create_language),
        )
        .route(
            "/api/v1/admin/languages/:id",
            get(admin_languages::get_language)
                .patch(admin_languages::update_language)
                .delete(admin_languages::delete_language),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));

    // Probes and metrics (no auth, no rate limit)
    let health_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::ready))
        .route("/api/health/live", get(health::live))
        .route("/metrics", get(metrics_handler));

    Router::new()
        .merge(health_routes)
        .merge(public_routes)
        .merge(admin_routes)
        // Global middleware (order matters: bottom layers run first)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            security_headers_middleware,
        ))
        .layer(DefaultBodyLimit::max(config.server.max_body_size))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id))
        .layer(cors_layer(&config))
        .with_state(state)
}

/// Builds the state and router in one go.
pub fn create_app(config: Config, pool: PgPool) -> Result<Router, JwtError> {
    Ok(create_router(AppState::new(config, pool)?))
}
