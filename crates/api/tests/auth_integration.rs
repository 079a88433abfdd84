//! Integration tests for cross-cutting request handling: admin token
//! checks, rate limiting, probes and response headers.

mod common;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use common::{
    admin_token, create_test_app, expired_admin_token, get_request, get_request_with_auth,
    json_request, parse_response_body, self_assigned_admin_token, setup, test_config, user_token,
};
use serde_json::json;
use shared::jwt::{AuthClaims, JwtVerifier};
use tower::ServiceExt;
use uuid::Uuid;

// ============================================================================
// Admin authentication
// ============================================================================

#[tokio::test]
async fn test_admin_route_without_token() {
    let (app, _pool) = setup().await;

    let response = app
        .oneshot(get_request("/api/v1/admin/stats"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = parse_response_body(response).await;
    assert_eq!(body["error"], "unauthorized");
}

#[tokio::test]
async fn test_admin_route_with_non_bearer_scheme() {
    let (app, _pool) = setup().await;

    let request = Request::builder()
        .uri("/api/v1/admin/stats")
        .header(header::AUTHORIZATION, format!("Basic {}", admin_token()))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_route_with_garbage_token() {
    let (app, _pool) = setup().await;

    let response = app
        .oneshot(get_request_with_auth("/api/v1/admin/stats", "not.a.jwt"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_route_with_foreign_signature() {
    let (app, _pool) = setup().await;

    let foreign = JwtVerifier::new("some-other-project-secret", 0, None)
        .unwrap()
        .issue(&AuthClaims::new(Uuid::new_v4().to_string(), 3600).with_admin_role())
        .unwrap();

    let response = app
        .oneshot(get_request_with_auth("/api/v1/admin/stats", &foreign))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_route_with_expired_token() {
    let (app, _pool) = setup().await;

    let response = app
        .oneshot(get_request_with_auth(
            "/api/v1/admin/stats",
            &expired_admin_token(),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_route_with_reader_token() {
    let (app, _pool) = setup().await;

    let response = app
        .oneshot(get_request_with_auth("/api/v1/admin/stats", &user_token()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body = parse_response_body(response).await;
    assert_eq!(body["error"], "forbidden");
}

#[tokio::test]
async fn test_admin_route_with_self_assigned_user_metadata_role() {
    let (app, _pool) = setup().await;

    // Rejected before path extraction, so the bad id never matters.
    let response = app
        .clone()
        .oneshot(get_request_with_auth(
            "/api/v1/admin/mantras/not-a-uuid",
            &self_assigned_admin_token(),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = app
        .oneshot(get_request_with_auth(
            "/api/v1/admin/stats",
            &self_assigned_admin_token(),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body = parse_response_body(response).await;
    assert_eq!(body["error"], "forbidden");
}

#[tokio::test]
async fn test_admin_route_with_admin_token() {
    let (app, _pool) = setup().await;

    let response = app
        .oneshot(get_request_with_auth("/api/v1/admin/stats", &admin_token()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_public_routes_ignore_tokens() {
    let (app, _pool) = setup().await;

    for token in [user_token(), "not.a.jwt".to_string()] {
        let response = app
            .clone()
            .oneshot(get_request_with_auth("/api/v1/categories", &token))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}

#[tokio::test]
async fn test_public_write_route_is_not_admin_gated() {
    let (app, _pool) = setup().await;

    // View counting is public; an unknown id is a 404, never a 401.
    let response = app
        .oneshot(json_request(
            Method::POST,
            &format!("/api/v1/mantras/{}/view", Uuid::new_v4()),
            json!({}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ============================================================================
// Rate limiting
// ============================================================================

#[tokio::test]
async fn test_public_routes_are_rate_limited() {
    let pool = common::create_test_pool().await;
    common::run_migrations(&pool).await;

    let mut config = test_config();
    config.security.rate_limit_per_minute = 2;
    let app = create_test_app(config, pool);

    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(get_request("/api/v1/categories"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app
        .clone()
        .oneshot(get_request("/api/v1/categories"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    assert!(response.headers().contains_key(header::RETRY_AFTER));

    let body = parse_response_body(response).await;
    assert_eq!(body["error"], "rate_limited");
    assert!(body["retry_after"].as_u64().unwrap() >= 1);

    // Probes and admin routes are not counted against the public budget.
    let response = app
        .clone()
        .oneshot(get_request("/api/health/live"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(get_request_with_auth("/api/v1/admin/stats", &admin_token()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_rate_limit_is_per_client_ip() {
    let pool = common::create_test_pool().await;
    common::run_migrations(&pool).await;

    let mut config = test_config();
    config.security.rate_limit_per_minute = 1;
    config.security.trust_proxy_headers = true;
    let app = create_test_app(config, pool);

    let from = |ip: &str| {
        Request::builder()
            .uri("/api/v1/categories")
            .header("x-forwarded-for", format!("{}, 10.0.0.1", ip))
            .body(Body::empty())
            .unwrap()
    };

    let response = app.clone().oneshot(from("203.0.113.7")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.clone().oneshot(from("203.0.113.7")).await.unwrap();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);

    let response = app.oneshot(from("198.51.100.20")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_rate_limit_ignores_forwarded_for_from_untrusted_clients() {
    let pool = common::create_test_pool().await;
    common::run_migrations(&pool).await;

    let mut config = test_config();
    config.security.rate_limit_per_minute = 1;
    let app = create_test_app(config, pool);

    let from = |ip: &str| {
        Request::builder()
            .uri("/api/v1/categories")
            .header("x-forwarded-for", ip)
            .header("x-real-ip", ip)
            .body(Body::empty())
            .unwrap()
    };

    let response = app.clone().oneshot(from("203.0.113.7")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // A fresh forwarded address per request does not buy a fresh bucket.
    for spoofed in ["198.51.100.20", "198.51.100.21", "2001:db8::7"] {
        let response = app.clone().oneshot(from(spoofed)).await.unwrap();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    }
}

// ============================================================================
// Probes, metrics and headers
// ============================================================================

#[tokio::test]
async fn test_health_endpoints() {
    let (app, _pool) = setup().await;

    let response = app
        .clone()
        .oneshot(get_request("/api/health"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"]["connected"], true);
    assert!(body["version"].is_string());

    let response = app
        .clone()
        .oneshot(get_request("/api/health/ready"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(get_request("/api/health/live"))
        .await
        .unwrap();
    let body = parse_response_body(response).await;
    assert_eq!(body["status"], "alive");
}

#[tokio::test]
async fn test_metrics_endpoint_exposes_prometheus_text() {
    let (app, _pool) = setup().await;
    dhivyuga_api::middleware::init_metrics().unwrap();

    // Generate at least one labelled request first
    app.clone()
        .oneshot(get_request("/api/v1/categories"))
        .await
        .unwrap();

    let response = app.oneshot(get_request("/metrics")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let text = String::from_utf8(body.to_vec()).unwrap();
    assert!(text.contains("http_requests_total"));
}

#[tokio::test]
async fn test_security_and_request_id_headers() {
    let (app, _pool) = setup().await;

    let response = app
        .clone()
        .oneshot(get_request("/api/health/live"))
        .await
        .unwrap();
    let headers = response.headers();
    assert_eq!(headers["x-content-type-options"], "nosniff");
    assert_eq!(headers["x-frame-options"], "DENY");
    assert!(headers.contains_key("referrer-policy"));
    assert!(!headers.contains_key("strict-transport-security"));
    assert!(Uuid::parse_str(headers["x-request-id"].to_str().unwrap()).is_ok());

    let request = Request::builder()
        .uri("/api/health/live")
        .header("x-request-id", "trace-me-123")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.headers()["x-request-id"], "trace-me-123");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let (app, _pool) = setup().await;

    let response = app
        .oneshot(get_request("/api/v1/does-not-exist"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
