use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{Value, json};
use werewolf_auth::CodeStore;
use werewolf_core::{DomainError, ok_payload, success_payload};

use crate::errors::ApiError;
use crate::extract::ValidatedJson;

/// Shared state for auth route handlers
#[derive(Clone)]
pub struct AuthState {
    pub codes: CodeStore,
}

pub fn router(state: AuthState) -> Router {
    Router::new()
        .route("/auth/guest", post(guest))
        .route("/auth/email/request", post(email_request))
        .route("/auth/email/verify", post(email_verify))
        .with_state(state)
}

/// Handle `POST /auth/guest`
///
/// Test period: issue stub tokens without any credential check
async fn guest() -> Json<Value> {
    Json(success_payload(json!({
        "token": "guest-token",
        "refresh": "guest-refresh",
    })))
}

#[derive(Debug, Deserialize)]
struct EmailRequestBody {
    #[serde(default)]
    email: Option<String>,
}

/// Handle `POST /auth/email/request`
async fn email_request(
    State(state): State<AuthState>,
    ValidatedJson(body): ValidatedJson<EmailRequestBody>,
) -> Result<Json<Value>, ApiError> {
    let email = body.email.as_deref().unwrap_or("");
    if email.is_empty() || !email.contains('@') {
        return Err(DomainError::validation("invalid email").into());
    }

    let code = state.codes.issue(email);
    // Test period: "delivery" is a log line
    tracing::info!(email, code = %code, "sending email sign-in code (test mode)");

    Ok(Json(ok_payload()))
}

#[derive(Debug, Deserialize)]
struct EmailVerifyBody {
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    code: Option<Value>,
}

/// Handle `POST /auth/email/verify`
async fn email_verify(
    State(state): State<AuthState>,
    ValidatedJson(body): ValidatedJson<EmailVerifyBody>,
) -> Result<Json<Value>, ApiError> {
    let email = body.email.unwrap_or_default();
    // Numeric codes are accepted and compared by their decimal rendering
    let code = match body.code {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if s.is_empty() => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    };

    let (email, code) = match (email.is_empty(), code) {
        (false, Some(code)) => (email, code),
        _ => return Err(DomainError::validation("email and code required").into()),
    };

    if !state.codes.verify(&email, &code) {
        return Err(DomainError::unauthorized("AUTH_INVALID_CODE", "invalid code").into());
    }

    Ok(Json(success_payload(json!({
        "token": "email-token",
        "refresh": "email-refresh",
    }))))
}
