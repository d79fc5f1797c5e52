use axum::Json;
use axum::response::IntoResponse;
use serde_json::json;

/// Health check handler; unenveloped, never fails
pub async fn healthz_handler() -> impl IntoResponse {
    Json(json!({"status": "ok"}))
}
