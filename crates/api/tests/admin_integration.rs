//! Integration tests for the admin dashboard: stats, seeding and reference
//! data management.

mod common;

use axum::http::{Method, StatusCode};
use common::{
    admin_token, cleanup_marked, create_test_deity, create_test_mantra, delete_request_with_auth,
    get_request_with_auth, json_request_with_auth, parse_response_body, setup,
    unique_language_code, unique_marker,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

fn ids(list: &Value) -> Vec<String> {
    list.as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_str().unwrap().to_string())
        .collect()
}

// ============================================================================
// Stats and seeding
// ============================================================================

#[tokio::test]
async fn test_get_admin_stats() {
    let (app, pool) = setup().await;
    let marker = unique_marker();

    create_test_mantra(&pool, &format!("{} Counted", marker), None, None, 7).await;

    let response = app
        .oneshot(get_request_with_auth("/api/v1/admin/stats", &admin_token()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    assert!(body["total_mantras"].as_i64().unwrap() >= 1);
    assert!(body["total_languages"].as_i64().unwrap() >= 4);
    assert!(body["total_views"].as_i64().unwrap() >= 7);
    assert!(body["total_categories"].is_i64());
    assert!(body["total_deities"].is_i64());
    assert!(body["total_translations"].is_i64());

    let popular = body["popular_mantras"].as_array().unwrap();
    assert!(popular.len() <= 5);
    let views: Vec<i64> = popular
        .iter()
        .map(|m| m["view_count"].as_i64().unwrap())
        .collect();
    assert!(views.windows(2).all(|w| w[0] >= w[1]));

    cleanup_marked(&pool, &marker).await;
}

#[tokio::test]
async fn test_seed_grahas_is_idempotent() {
    let (app, pool) = setup().await;
    let token = admin_token();

    let response = app
        .clone()
        .oneshot(json_request_with_auth(
            Method::POST,
            "/api/v1/admin/seed/grahas",
            json!({}),
            &token,
        ))
        .await
        .unwrap();
    assert!(
        response.status() == StatusCode::CREATED || response.status() == StatusCode::OK,
        "unexpected status {}",
        response.status()
    );

    let response = app
        .oneshot(json_request_with_auth(
            Method::POST,
            "/api/v1/admin/seed/grahas",
            json!({}),
            &token,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    assert_eq!(body["message"], "Grahas already exist in database");
    assert_eq!(body["count"], 9);
    assert!(body.get("grahas").is_none());

    let surya: Option<String> =
        sqlx::query_scalar("SELECT day_of_week FROM deities WHERE name = 'Surya (Sun)'")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(surya.as_deref(), Some("Sunday"));
}

#[tokio::test]
async fn test_concurrent_seed_grahas_never_conflicts() {
    let (app, pool) = setup().await;
    let token = admin_token();

    let seed = || {
        app.clone().oneshot(json_request_with_auth(
            Method::POST,
            "/api/v1/admin/seed/grahas",
            json!({}),
            &token,
        ))
    };
    let (first, second) = tokio::join!(seed(), seed());

    let mut created = 0;
    for response in [first.unwrap(), second.unwrap()] {
        let status = response.status();
        let body = parse_response_body(response).await;
        match status {
            StatusCode::CREATED => {
                created += 1;
                assert_eq!(body["count"], 9);
                let grahas = body["grahas"].as_array().unwrap();
                assert_eq!(grahas.len(), 9);
                assert_eq!(grahas[0]["name"], "Surya (Sun)");
                assert!(grahas.iter().all(|g| g["id"].is_string()));
            }
            StatusCode::OK => {
                assert_eq!(body["message"], "Grahas already exist in database");
                assert!(body["count"].as_i64().unwrap() > 0);
            }
            other => panic!("unexpected status {} with body {}", other, body),
        }
    }
    assert!(created <= 1);

    let surya: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM deities WHERE name = 'Surya (Sun)'")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(surya, 1);
}

// ============================================================================
// Mantras
// ============================================================================

#[tokio::test]
async fn test_admin_mantra_lifecycle() {
    let (app, pool) = setup().await;
    let marker = unique_marker();
    let token = admin_token();

    let deity_id = create_test_deity(&pool, &format!("Lakshmi {}", marker)).await;

    let response = app
        .clone()
        .oneshot(json_request_with_auth(
            Method::POST,
            "/api/v1/admin/mantras",
            json!({
                "title": format!("  {} Mahalakshmi  ", marker),
                "text": "Om Shreem Mahalakshmiyei Namaha",
                "deity_id": deity_id
            }),
            &token,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = parse_response_body(response).await;
    assert_eq!(body["title"], format!("{} Mahalakshmi", marker));
    assert_eq!(body["view_count"], 0);
    let id = body["id"].as_str().unwrap().to_string();
    let uri = format!("/api/v1/admin/mantras/{}", id);

    let response = app
        .clone()
        .oneshot(get_request_with_auth(&uri, &token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    assert_eq!(body["deity"]["id"], deity_id.to_string());

    // Absent fields stay, explicit null clears.
    let response = app
        .clone()
        .oneshot(json_request_with_auth(
            Method::PATCH,
            &uri,
            json!({"text": "Om Shreem", "deity_id": null}),
            &token,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    assert_eq!(body["text"], "Om Shreem");
    assert_eq!(body["title"], format!("{} Mahalakshmi", marker));
    assert!(body["deity_id"].is_null());

    let response = app
        .clone()
        .oneshot(delete_request_with_auth(&uri, &token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .oneshot(get_request_with_auth(&uri, &token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    cleanup_marked(&pool, &marker).await;
}

#[tokio::test]
async fn test_admin_create_mantra_validation() {
    let (app, pool) = setup().await;
    let token = admin_token();

    let response = app
        .clone()
        .oneshot(json_request_with_auth(
            Method::POST,
            "/api/v1/admin/mantras",
            json!({"title": "", "text": "Om"}),
            &token,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = parse_response_body(response).await;
    assert_eq!(body["error"], "validation_error");

    // Malformed JSON is a JSON error too
    let request = axum::http::Request::builder()
        .method(Method::POST)
        .uri("/api/v1/admin/mantras")
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {}", token))
        .body(axum::body::Body::from("{\"title\": "))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = parse_response_body(response).await;
    assert_eq!(body["error"], "validation_error");

    // Dangling reference
    let marker = unique_marker();
    let response = app
        .oneshot(json_request_with_auth(
            Method::POST,
            "/api/v1/admin/mantras",
            json!({"title": marker, "text": "Om", "category_id": Uuid::new_v4()}),
            &token,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    cleanup_marked(&pool, &marker).await;
}

#[tokio::test]
async fn test_admin_list_mantras_paginates() {
    let (app, pool) = setup().await;
    let marker = unique_marker();

    for i in 0..3 {
        create_test_mantra(&pool, &format!("{} Paged {}", marker, i), None, None, 0).await;
    }

    let response = app
        .clone()
        .oneshot(get_request_with_auth(
            "/api/v1/admin/mantras?page=1&per_page=2",
            &admin_token(),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    assert_eq!(body["mantras"].as_array().unwrap().len(), 2);
    assert_eq!(body["pagination"]["page"], 1);
    assert_eq!(body["pagination"]["per_page"], 2);
    let total = body["pagination"]["total"].as_i64().unwrap();
    assert!(total >= 3);
    assert_eq!(body["pagination"]["total_pages"], (total + 1) / 2);

    // Oversized pages are clamped
    let response = app
        .oneshot(get_request_with_auth(
            "/api/v1/admin/mantras?per_page=10000",
            &admin_token(),
        ))
        .await
        .unwrap();
    let body = parse_response_body(response).await;
    assert_eq!(body["pagination"]["per_page"], 100);

    cleanup_marked(&pool, &marker).await;
}

// ============================================================================
// Categories and deities
// ============================================================================

#[tokio::test]
async fn test_admin_category_crud_and_duplicate() {
    let (app, pool) = setup().await;
    let marker = unique_marker();
    let token = admin_token();
    let name = format!("Protection {}", marker);

    let response = app
        .clone()
        .oneshot(json_request_with_auth(
            Method::POST,
            "/api/v1/admin/categories",
            json!({"name": name, "description": "Shields"}),
            &token,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = parse_response_body(response).await;
    let id = body["id"].as_str().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(json_request_with_auth(
            Method::POST,
            "/api/v1/admin/categories",
            json!({"name": name}),
            &token,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let uri = format!("/api/v1/admin/categories/{}", id);
    let response = app
        .clone()
        .oneshot(json_request_with_auth(
            Method::PATCH,
            &uri,
            json!({"description": "Shields and armour"}),
            &token,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    assert_eq!(body["name"], name.as_str());
    assert_eq!(body["description"], "Shields and armour");

    let response = app
        .clone()
        .oneshot(delete_request_with_auth(&uri, &token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .oneshot(delete_request_with_auth(&uri, &token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    cleanup_marked(&pool, &marker).await;
}

#[tokio::test]
async fn test_deleting_category_unlinks_mantras() {
    let (app, pool) = setup().await;
    let marker = unique_marker();
    let token = admin_token();

    let category_id = common::create_test_category(&pool, &format!("Wealth {}", marker)).await;
    let mantra_id = create_test_mantra(
        &pool,
        &format!("{} Kubera", marker),
        None,
        Some(category_id),
        0,
    )
    .await;

    let response = app
        .oneshot(delete_request_with_auth(
            &format!("/api/v1/admin/categories/{}", category_id),
            &token,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let linked: Option<Uuid> = sqlx::query_scalar("SELECT category_id FROM mantras WHERE id = $1")
        .bind(mantra_id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert!(linked.is_none());

    cleanup_marked(&pool, &marker).await;
}

#[tokio::test]
async fn test_admin_deities_include_inactive() {
    let (app, pool) = setup().await;
    let marker = unique_marker();
    let token = admin_token();

    let response = app
        .clone()
        .oneshot(json_request_with_auth(
            Method::POST,
            "/api/v1/admin/deities",
            json!({
                "name": format!("Ketu {}", marker),
                "sanskrit_name": "केतु",
                "day_of_week": "Tuesday",
                "image_url": "https://example.com/ketu.png",
                "is_active": false
            }),
            &token,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = parse_response_body(response).await;
    let id = body["id"].as_str().unwrap().to_string();
    assert_eq!(body["is_active"], false);

    let response = app
        .clone()
        .oneshot(get_request_with_auth("/api/v1/admin/deities", &token))
        .await
        .unwrap();
    let body = parse_response_body(response).await;
    assert!(ids(&body["deities"]).contains(&id));

    let response = app
        .clone()
        .oneshot(common::get_request("/api/v1/deities"))
        .await
        .unwrap();
    let body = parse_response_body(response).await;
    assert!(!ids(&body["deities"]).contains(&id));

    let response = app
        .clone()
        .oneshot(json_request_with_auth(
            Method::PATCH,
            &format!("/api/v1/admin/deities/{}", id),
            json!({"is_active": true, "image_url": "not a url"}),
            &token,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .oneshot(json_request_with_auth(
            Method::PATCH,
            &format!("/api/v1/admin/deities/{}", id),
            json!({"is_active": true}),
            &token,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    assert_eq!(body["is_active"], true);
    assert_eq!(body["sanskrit_name"], "केतु");

    cleanup_marked(&pool, &marker).await;
}

// ============================================================================
// Recitation guidance, kalams and time ranges
// ============================================================================

#[tokio::test]
async fn test_admin_recitation_counts_and_times() {
    let (app, pool) = setup().await;
    let marker = unique_marker();
    let token = admin_token();

    let response = app
        .clone()
        .oneshot(json_request_with_auth(
            Method::POST,
            "/api/v1/admin/recitation-counts",
            json!({"count_value": 108, "description": format!("Mala {}", marker)}),
            &token,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = parse_response_body(response).await;
    let count_id = body["id"].as_str().unwrap().to_string();
    assert_eq!(body["count_value"], 108);

    let response = app
        .clone()
        .oneshot(json_request_with_auth(
            Method::POST,
            "/api/v1/admin/recitation-counts",
            json!({"count_value": 0}),
            &token,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .clone()
        .oneshot(json_request_with_auth(
            Method::PATCH,
            &format!("/api/v1/admin/recitation-counts/{}", count_id),
            json!({"count_value": 1008}),
            &token,
        ))
        .await
        .unwrap();
    let body = parse_response_body(response).await;
    assert_eq!(body["count_value"], 1008);

    let response = app
        .clone()
        .oneshot(json_request_with_auth(
            Method::POST,
            "/api/v1/admin/recitation-times",
            json!({"name": format!("Sandhya {}", marker)}),
            &token,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = parse_response_body(response).await;
    let time_id = body["id"].as_str().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(get_request_with_auth("/api/v1/admin/recitation-times", &token))
        .await
        .unwrap();
    let body = parse_response_body(response).await;
    assert!(ids(&body["recitation_times"]).contains(&time_id));

    let response = app
        .oneshot(get_request_with_auth(
            &format!("/api/v1/admin/recitation-times/{}", Uuid::new_v4()),
            &token,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    cleanup_marked(&pool, &marker).await;
}

#[tokio::test]
async fn test_admin_kalams() {
    let (app, pool) = setup().await;
    let marker = unique_marker();
    let token = admin_token();

    let response = app
        .clone()
        .oneshot(json_request_with_auth(
            Method::POST,
            "/api/v1/admin/kalams",
            json!({"name": format!("Gulika {}", marker), "planet": "Saturn"}),
            &token,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = parse_response_body(response).await;
    assert_eq!(body["is_auspicious"], false);
    let uri = format!("/api/v1/admin/kalams/{}", body["id"].as_str().unwrap());

    let response = app
        .clone()
        .oneshot(json_request_with_auth(
            Method::PATCH,
            &uri,
            json!({"is_auspicious": true}),
            &token,
        ))
        .await
        .unwrap();
    let body = parse_response_body(response).await;
    assert_eq!(body["is_auspicious"], true);
    assert_eq!(body["planet"], "Saturn");

    let response = app
        .oneshot(delete_request_with_auth(&uri, &token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    cleanup_marked(&pool, &marker).await;
}

#[tokio::test]
async fn test_admin_time_ranges_keep_start_before_end() {
    let (app, pool) = setup().await;
    let marker = unique_marker();
    let token = admin_token();

    let response = app
        .clone()
        .oneshot(json_request_with_auth(
            Method::POST,
            "/api/v1/admin/time-ranges",
            json!({"start_time": "18:00:00", "end_time": "06:00:00"}),
            &token,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .clone()
        .oneshot(json_request_with_auth(
            Method::POST,
            "/api/v1/admin/time-ranges",
            json!({
                "start_time": "04:24:00",
                "end_time": "05:12:00",
                "description": format!("Brahma Muhurta {}", marker)
            }),
            &token,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = parse_response_body(response).await;
    assert_eq!(body["start_time"], "04:24:00");
    let uri = format!("/api/v1/admin/time-ranges/{}", body["id"].as_str().unwrap());

    // Moving only the end before the stored start is rejected.
    let response = app
        .clone()
        .oneshot(json_request_with_auth(
            Method::PATCH,
            &uri,
            json!({"end_time": "04:00:00"}),
            &token,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .oneshot(json_request_with_auth(
            Method::PATCH,
            &uri,
            json!({"end_time": "06:00:00"}),
            &token,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    assert_eq!(body["start_time"], "04:24:00");
    assert_eq!(body["end_time"], "06:00:00");

    cleanup_marked(&pool, &marker).await;
}

// ============================================================================
// Languages
// ============================================================================

#[tokio::test]
async fn test_admin_language_management() {
    let (app, pool) = setup().await;
    let marker = unique_marker();
    let token = admin_token();

    let response = app
        .clone()
        .oneshot(json_request_with_auth(
            Method::POST,
            "/api/v1/admin/languages",
            json!({
                "code": unique_language_code(),
                "name": format!("Telugu {}", marker),
                "is_active": false
            }),
            &token,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = parse_response_body(response).await;
    let id = body["language"]["id"].as_str().unwrap().to_string();
    let uri = format!("/api/v1/admin/languages/{}", id);

    // Inactive languages are listed for admins only
    let response = app
        .clone()
        .oneshot(get_request_with_auth("/api/v1/admin/languages", &token))
        .await
        .unwrap();
    let body = parse_response_body(response).await;
    assert!(ids(&body["languages"]).contains(&id));

    let response = app
        .clone()
        .oneshot(common::get_request("/api/v1/languages"))
        .await
        .unwrap();
    let body = parse_response_body(response).await;
    assert!(!ids(&body["languages"]).contains(&id));

    let response = app
        .clone()
        .oneshot(json_request_with_auth(
            Method::PATCH,
            &uri,
            json!({"is_active": true, "sort_order": 9}),
            &token,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    assert_eq!(body["language"]["is_active"], true);
    assert_eq!(body["language"]["sort_order"], 9);

    let response = app
        .clone()
        .oneshot(delete_request_with_auth(&uri, &token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .oneshot(get_request_with_auth(&uri, &token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    cleanup_marked(&pool, &marker).await;
}

#[tokio::test]
async fn test_delete_language_in_use_conflicts() {
    let (app, pool) = setup().await;
    let marker = unique_marker();
    let token = admin_token();

    let response = app
        .clone()
        .oneshot(json_request_with_auth(
            Method::POST,
            "/api/v1/admin/languages",
            json!({"code": unique_language_code(), "name": format!("Kannada {}", marker)}),
            &token,
        ))
        .await
        .unwrap();
    let body = parse_response_body(response).await;
    let language_id = body["language"]["id"].as_str().unwrap().to_string();

    let mantra_id = create_test_mantra(&pool, &format!("{} Used", marker), None, None, 0).await;
    let response = app
        .clone()
        .oneshot(json_request_with_auth(
            Method::POST,
            &format!("/api/v1/mantras/{}/translations", mantra_id),
            json!({"language_id": language_id, "text": "Om"}),
            &token,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .oneshot(delete_request_with_auth(
            &format!("/api/v1/admin/languages/{}", language_id),
            &token,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = parse_response_body(response).await;
    assert_eq!(body["message"], "Language is used by existing translations");

    // Mantras go first so their translations release the language.
    cleanup_marked(&pool, &marker).await;
}
