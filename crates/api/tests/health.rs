//! Integration tests for the health check endpoint and general HTTP behaviour.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, get};
use sqlx::PgPool;
use tower::ServiceExt;

#[sqlx::test(migrations = "../../db/migrations")]
async fn health_check_returns_ok_with_json(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["db_healthy"], true);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn health_reports_storage_directory(pool: PgPool) {
    let storage = tempfile::tempdir().unwrap();
    let app = common::build_test_app_with_storage(pool.clone(), storage.path());
    let json = body_json(get(app, "/health").await).await;
    assert_eq!(json["storage_ready"], true);

    let missing = storage.path().join("not-created");
    let app = common::build_test_app_with_storage(pool, &missing);
    let json = body_json(get(app, "/health").await).await;
    assert_eq!(json["storage_ready"], false);
    assert_eq!(json["status"], "ok");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_route_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn response_contains_x_request_id_header(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/health").await;

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("Response must contain an x-request-id header");
    assert_eq!(request_id.to_str().unwrap().len(), 36);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn cors_preflight_allows_configured_origin(pool: PgPool) {
    let app = common::build_test_app(pool);
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/v1/site")
        .header("origin", "http://localhost:5173")
        .header("access-control-request-method", "GET")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("access-control-allow-origin").unwrap(),
        "http://localhost:5173"
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn malformed_json_body_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/contact")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

async fn assert_bad_request_envelope(response: axum::response::Response) {
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["error"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn malformed_reorder_body_uses_error_envelope(pool: PgPool) {
    let token = common::editor_token(&pool).await;

    let response = common::put_raw_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/admin/skills/reorder",
        "{not json",
        &token,
    )
    .await;
    assert_bad_request_envelope(response).await;

    let response = common::put_raw_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/admin/skills/reorder",
        r#"{"ids":"x"}"#,
        &token,
    )
    .await;
    assert_bad_request_envelope(response).await;

    let response = common::put_raw_json_auth(
        common::build_test_app(pool),
        "/api/v1/admin/experiences/reorder",
        r#"{"ids":[]}"#,
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert!(json["fields"]["ids"].is_array());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn non_numeric_inbox_limit_uses_error_envelope(pool: PgPool) {
    let token = common::admin_token(&pool).await;
    let response = common::get_auth(
        common::build_test_app(pool),
        "/api/v1/admin/messages?limit=abc",
        &token,
    )
    .await;
    assert_bad_request_envelope(response).await;
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn non_numeric_id_segment_uses_error_envelope(pool: PgPool) {
    let token = common::editor_token(&pool).await;
    let response = common::get_auth(
        common::build_test_app(pool),
        "/api/v1/admin/services/abc",
        &token,
    )
    .await;
    assert_bad_request_envelope(response).await;
}
