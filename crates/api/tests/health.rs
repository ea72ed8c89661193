//! Integration tests for the health check endpoint and general HTTP behaviour.

mod common;

use std::time::Duration;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_bytes, body_json, build_test_app, get, scenario_document, test_config, SlowSource};
use folio_source::bundled::BundledSource;
use folio_source::provider::PortfolioProvider;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Test: GET /health reports live data as ok
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_check_returns_ok_with_live_data() {
    let dir = tempfile::tempdir().unwrap();
    let provider = PortfolioProvider::new(SlowSource::ok(scenario_document(), Duration::ZERO));
    let (app, state) = build_test_app(test_config(dir.path()), provider);
    common::wait_settled(&state).await;

    let response = get(&app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["portfolio_ready"], true);
}

// ---------------------------------------------------------------------------
// Test: health reflects loading and degraded states
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_check_reports_loading() {
    let dir = tempfile::tempdir().unwrap();
    let provider = PortfolioProvider::new(SlowSource::ok(
        scenario_document(),
        Duration::from_secs(60),
    ));
    let (app, _state) = build_test_app(test_config(dir.path()), provider);

    let json = body_json(get(&app, "/health").await).await;
    assert_eq!(json["status"], "loading");
    assert_eq!(json["portfolio_ready"], false);
}

#[tokio::test]
async fn health_check_reports_degraded_on_fallback() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.json");
    let provider = PortfolioProvider::new(std::sync::Arc::new(BundledSource::from_path(missing)));
    let (app, state) = build_test_app(test_config(dir.path()), provider);
    common::wait_settled(&state).await;

    let json = body_json(get(&app, "/health").await).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["portfolio_ready"], true);
}

// ---------------------------------------------------------------------------
// Test: unknown paths fall through to the static directory
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_route_returns_404() {
    let dir = tempfile::tempdir().unwrap();
    let provider = PortfolioProvider::new(SlowSource::ok(scenario_document(), Duration::ZERO));
    let (app, _state) = build_test_app(test_config(dir.path()), provider);

    let response = get(&app, "/this-route-does-not-exist").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn static_images_are_served_from_static_dir() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("images/project")).unwrap();
    std::fs::write(dir.path().join("images/project/1.png"), b"placeholder").unwrap();
    std::fs::write(dir.path().join("index.html"), "<html></html>").unwrap();

    let provider = PortfolioProvider::new(SlowSource::ok(scenario_document(), Duration::ZERO));
    let (app, _state) = build_test_app(test_config(dir.path()), provider);

    let response = get(&app, "/images/project/1.png").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, b"placeholder");

    let response = get(&app, "/").await;
    assert_eq!(response.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Test: x-request-id header is present in response
// ---------------------------------------------------------------------------

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let dir = tempfile::tempdir().unwrap();
    let provider = PortfolioProvider::new(SlowSource::ok(scenario_document(), Duration::ZERO));
    let (app, _state) = build_test_app(test_config(dir.path()), provider);

    let response = get(&app, "/health").await;
    let request_id = response.headers().get("x-request-id");
    assert!(
        request_id.is_some(),
        "Response must contain an x-request-id header"
    );

    let id_str = request_id.unwrap().to_str().unwrap();
    assert_eq!(id_str.len(), 36, "x-request-id should be a UUID string");
}

// ---------------------------------------------------------------------------
// Test: CORS preflight OPTIONS request returns correct headers
// ---------------------------------------------------------------------------

#[tokio::test]
async fn cors_preflight_returns_correct_headers() {
    let dir = tempfile::tempdir().unwrap();
    let provider = PortfolioProvider::new(SlowSource::ok(scenario_document(), Duration::ZERO));
    let (app, _state) = build_test_app(test_config(dir.path()), provider);

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/v1/portfolio")
        .header("Origin", "http://localhost:5174")
        .header("Access-Control-Request-Method", "GET")
        .header("Access-Control-Request-Headers", "content-type")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(
        headers.get("access-control-allow-origin").unwrap(),
        "http://localhost:5174"
    );
    assert!(headers.contains_key("access-control-allow-methods"));
}
