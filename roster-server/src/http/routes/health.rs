//! Database probes
//!
//! GET /health - no-op query, 200 healthy / 503 unhealthy
//! GET /test - round-trip returning the database clock

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{routing::get, Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::json;

use crate::state::AppState;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// GET /health
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    match sqlx::query("SELECT 1").execute(state.pool()).await {
        Ok(_) => (StatusCode::OK, Json(HealthResponse { status: "healthy" })),
        Err(err) => {
            tracing::error!("Health check failed: {}", err);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse { status: "unhealthy" }),
            )
        }
    }
}

/// GET /test
async fn test(State(state): State<AppState>) -> Response {
    let result: Result<(DateTime<Utc>,), sqlx::Error> =
        sqlx::query_as("SELECT NOW() as current_time")
            .fetch_one(state.pool())
            .await;

    match result {
        Ok((time,)) => Json(json!({
            "status": "success",
            "time": time.to_rfc3339(),
        }))
        .into_response(),
        Err(err) => {
            tracing::error!("Database connectivity test failed: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Database connection failed" })),
            )
                .into_response()
        }
    }
}

/// Probe routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/test", get(test))
}
