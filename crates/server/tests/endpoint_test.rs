//! End-to-end tests for the HTTP endpoint.
//!
//! These drive the router directly with `tower::ServiceExt::oneshot`,
//! backed by a mock upstream service and a weights file in a tempdir.

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::routing::get;
use axum::Router;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::Value;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tower::ServiceExt;

use model::Recommend;
use server::{routes, RecommendOrchestrator, ServiceConfig};

const PRODUCTS_BODY: &str = r#"[
    {"name": "flour", "type": "baking"},
    {"name": "milk", "type": "dairy"},
    {"name": "eggs", "type": "dairy"}
]"#;

const RECIPES_BODY: &str = r#"[
    {"id": 11, "name": "Pancakes", "ingredients": "flour, milk, eggs"},
    {"id": 22, "name": "Omelette", "ingredients": "eggs, cheese"}
]"#;

// ============================================================================
// Test Fixtures
// ============================================================================

async fn spawn_upstream(router: Router) -> (String, tokio::task::JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock upstream");
    let addr = listener.local_addr().expect("Failed to get local address");
    let handle = tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Mock upstream failed");
    });
    (format!("http://{}", addr), handle)
}

fn healthy_upstream() -> Router {
    Router::new()
        .route("/products/all/type", get(|| async { PRODUCTS_BODY }))
        .route("/recipes/all", get(|| async { RECIPES_BODY }))
}

fn failing_upstream() -> Router {
    Router::new()
        .route(
            "/products/all/type",
            get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down") }),
        )
        .route("/recipes/all", get(|| async { RECIPES_BODY }))
}

fn write_weights(dir: &tempfile::TempDir, input_size: usize, output_size: usize) -> PathBuf {
    let path = dir.path().join("weights.bin");
    let mut rng = StdRng::seed_from_u64(5);
    Recommend::new(input_size, 8, output_size, &mut rng)
        .save(&path)
        .expect("Failed to write test weights");
    path
}

fn build_app(base_url: String, weights_path: PathBuf) -> Router {
    let mut config = ServiceConfig::default();
    config.upstream.base_url = base_url;
    config.model.weights_path = weights_path;
    routes::router(RecommendOrchestrator::new(&config))
}

async fn post_recommend(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).expect("Body should be JSON");
    (status, body)
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn test_recommendations_reflect_both_upstream_payloads() {
    let (base_url, handle) = spawn_upstream(healthy_upstream()).await;
    let dir = tempfile::tempdir().unwrap();
    let app = build_app(base_url, write_weights(&dir, 3, 2));

    let (status, body) = post_recommend(app, "/recommend/recipes?token=secret").await;

    assert_eq!(status, StatusCode::OK);
    let recommendations = body["recommendations"]
        .as_array()
        .expect("Response should carry a recommendations array");
    assert_eq!(recommendations.len(), 2);
    assert_eq!(recommendations[0]["recipe_id"], 11);
    assert_eq!(recommendations[0]["recipe_name"], "Pancakes");
    assert_eq!(recommendations[1]["recipe_id"], 22);
    assert!(recommendations[0]["suggest"].is_number());

    handle.abort();
}

#[tokio::test]
async fn test_missing_token_is_a_400() {
    let dir = tempfile::tempdir().unwrap();
    // No upstream needed: the request is rejected before any fetch.
    let app = build_app("http://127.0.0.1:1".to_string(), write_weights(&dir, 3, 2));

    let (status, body) = post_recommend(app, "/recommend/recipes").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Token is required");
}

#[tokio::test]
async fn test_empty_token_is_a_400() {
    let dir = tempfile::tempdir().unwrap();
    let app = build_app("http://127.0.0.1:1".to_string(), write_weights(&dir, 3, 2));

    let (status, body) = post_recommend(app, "/recommend/recipes?token=").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Token is required");
}

#[tokio::test]
async fn test_upstream_failure_surfaces_status_code_text() {
    let (base_url, handle) = spawn_upstream(failing_upstream()).await;
    let dir = tempfile::tempdir().unwrap();
    let app = build_app(base_url, write_weights(&dir, 3, 2));

    let (status, body) = post_recommend(app, "/recommend/recipes?token=secret").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    let message = body["error"].as_str().unwrap();
    assert!(
        message.contains("503"),
        "Error body should contain the upstream status code, got: {}",
        message
    );

    handle.abort();
}

#[tokio::test]
async fn test_internal_failure_is_a_500_with_error_body() {
    let (base_url, handle) = spawn_upstream(healthy_upstream()).await;
    let dir = tempfile::tempdir().unwrap();
    // Weights file missing entirely
    let app = build_app(base_url, dir.path().join("missing.bin"));

    let (status, body) = post_recommend(app, "/recommend/recipes?token=secret").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("weights"));

    handle.abort();
}
