//! HTTP surface of the recommendation service.
//!
//! A single route: `POST /recommend/recipes?token=<token>`. The token
//! is required; failures map to JSON error bodies with a matching
//! status code (400 for a missing token, 502 when the upstream
//! misbehaves, 500 otherwise).

use std::sync::Arc;

use anyhow::Context;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{error, info};

use crate::orchestrator::{RecommendError, RecommendOrchestrator};

/// Build the service router.
pub fn router(orchestrator: RecommendOrchestrator) -> Router {
    Router::new()
        .route("/recommend/recipes", post(recommend_recipes))
        .with_state(Arc::new(orchestrator))
}

/// Bind `addr` and serve the router until the process is stopped.
pub async fn run(bind_addr: &str, orchestrator: RecommendOrchestrator) -> anyhow::Result<()> {
    let app = router(orchestrator);
    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("Failed to bind {bind_addr}"))?;

    info!("Serving recommendations on {bind_addr}");
    axum::serve(listener, app)
        .await
        .context("HTTP server exited with an error")?;
    Ok(())
}

#[derive(Debug, Deserialize)]
struct RecommendParams {
    token: Option<String>,
}

async fn recommend_recipes(
    State(orchestrator): State<Arc<RecommendOrchestrator>>,
    Query(params): Query<RecommendParams>,
) -> (StatusCode, Json<Value>) {
    let Some(token) = params.token.filter(|t| !t.is_empty()) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Token is required"})),
        );
    };

    match orchestrator.recommend(&token).await {
        Ok(recommendations) => (
            StatusCode::OK,
            Json(json!({"recommendations": recommendations})),
        ),
        Err(error) => {
            let status = match &error {
                RecommendError::Upstream(_) => StatusCode::BAD_GATEWAY,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };
            error!("Recommendation request failed: {error}");
            (status, Json(json!({"error": error.to_string()})))
        }
    }
}
