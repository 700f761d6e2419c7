//! HTTP API integration tests
//!
//! These tests drive the full Axum router with in-process requests, no
//! listening socket required.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use prism_push_renderer::config::Settings;
use prism_push_renderer::server::{create_app, AppState};

fn test_app() -> Router {
    let settings: Settings = serde_json::from_value(json!({
        "server": {},
        "assets": { "backend": "memory" }
    }))
    .expect("settings");
    create_app(AppState::new(settings))
}

async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn health_reports_backend_and_version() {
    let app = test_app();

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["assets"]["backend"], "memory");
}

#[tokio::test]
async fn render_basic_template_returns_descriptor() {
    let app = test_app();

    let (status, body) = post_json(
        &app,
        "/api/v1/render",
        json!({
            "template": {
                "title": "Sale",
                "body": "50% off",
                "background_color": "FF0000"
            }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["layout"], "basic");
    assert_eq!(body["degraded"], false);
    assert_eq!(body["descriptor"]["texts"]["title"], "Sale");
    assert_eq!(body["descriptor"]["colors"]["background"], "#FF0000");
    assert!(body["descriptor"]["images"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn render_validates_template() {
    let app = test_app();

    let (status, body) = post_json(
        &app,
        "/api/v1/render",
        json!({ "template": { "title": "", "body": "50% off" } }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn filmstrip_with_missing_images_is_unprocessable() {
    let app = test_app();

    let (status, body) = post_json(
        &app,
        "/api/v1/render",
        json!({
            "template": {
                "title": "Lookbook",
                "body": "New arrivals",
                "layout": "manual_carousel",
                "carousel_layout": "filmstrip",
                "image_urls": ["https://img.example/a.png", "https://img.example/b.png", "https://img.example/c.png"]
            }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], "RENDER_ERROR");
}

#[tokio::test]
async fn preloaded_assets_fill_carousel_slots() {
    let app = test_app();

    for url in ["https://img.example/a.png", "https://img.example/b.png"] {
        let (status, _) = post_json(
            &app,
            "/api/v1/assets",
            json!({
                "url": url,
                "content_type": "image/png",
                "width": 64,
                "height": 64,
                "data": [1, 2, 3, 4]
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = post_json(
        &app,
        "/api/v1/render",
        json!({
            "template": {
                "title": "Lookbook",
                "body": "New arrivals",
                "layout": "auto_carousel",
                "image_urls": ["https://img.example/a.png", "https://img.example/b.png"]
            }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["layout"], "auto_carousel");
    let images = body["descriptor"]["images"].as_array().unwrap();
    assert_eq!(images.len(), 2);
    assert_eq!(images[0]["asset"]["url"], "https://img.example/a.png");
    assert_eq!(images[1]["asset"]["url"], "https://img.example/b.png");
    // Raw bytes never leave the process
    assert!(images[0]["asset"].get("data").is_none());
}

#[tokio::test]
async fn fallback_flag_degrades_instead_of_failing() {
    let app = test_app();

    let (status, body) = post_json(
        &app,
        "/api/v1/render",
        json!({
            "fallback_to_basic": true,
            "template": {
                "title": "Lookbook",
                "body": "New arrivals",
                "layout": "manual_carousel",
                "carousel_layout": "filmstrip",
                "image_urls": ["https://img.example/x.png"]
            }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["layout"], "basic");
    assert_eq!(body["degraded"], true);
}

#[tokio::test]
async fn metrics_endpoint_exposes_render_counters() {
    let app = test_app();

    let _ = post_json(
        &app,
        "/api/v1/render",
        json!({ "template": { "title": "Sale", "body": "50% off" } }),
    )
    .await;

    let response = app
        .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains("prism_renders_total"));
}
