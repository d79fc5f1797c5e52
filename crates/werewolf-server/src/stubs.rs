use axum::routing::any;
use axum::{Json, Router};
use http::StatusCode;
use serde_json::Value;
use werewolf_core::DomainError;

use crate::errors::ApiError;

/// Routers for features that are not built yet
///
/// Every path and method under each prefix answers through the normal
/// domain-error path, so the stubs share the envelope, trace id, and status
/// mapping with the real handlers.
pub fn router() -> Router {
    Router::new()
        .route("/ai", any(not_implemented))
        .route("/ai/{*rest}", any(not_implemented))
        .route("/replay", any(not_implemented))
        .route("/replay/{*rest}", any(not_implemented))
        .route("/stt", any(not_implemented))
        .route("/stt/{*rest}", any(not_implemented))
        .route("/billing", any(not_implemented))
        .route("/billing/{*rest}", any(not_implemented))
        .route("/stats", any(not_implemented))
        .route("/stats/{*rest}", any(not_implemented))
}

async fn not_implemented() -> Result<Json<Value>, ApiError> {
    Err(DomainError::new("NOT_IMPLEMENTED")
        .with_status(StatusCode::NOT_IMPLEMENTED)
        .with_message("feature not available during the test period")
        .into())
}
