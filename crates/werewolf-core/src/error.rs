use http::StatusCode;
use serde_json::{Map, Value, json};
use thiserror::Error;

/// Code used for both framework-level and handler-level input rejection
pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";

/// Code for unclassified faults converted at the outermost boundary
pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";

/// A business-rule failure with a stable machine-readable code
///
/// Constructed by handler logic at the point of failure and consumed exactly
/// once by the server's translator layer, which renders it into the uniform
/// error envelope. Handlers never build the wire payload themselves.
#[derive(Debug, Clone, Error)]
#[error("{code}: {message}")]
pub struct DomainError {
    /// Stable machine-readable code (e.g. `ROOM_NOT_FOUND`)
    pub code: String,
    /// HTTP status the translator responds with
    pub status: StatusCode,
    /// Human-readable message; falls back to `code` when empty
    pub message: String,
    /// Optional structured context for the caller
    pub details: Option<Value>,
}

impl DomainError {
    /// Create an error with the given code, status 400, and no message
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            status: StatusCode::BAD_REQUEST,
            message: String::new(),
            details: None,
        }
    }

    #[must_use]
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Handler-level input rejection (400, `VALIDATION_ERROR`)
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(VALIDATION_ERROR).with_message(message)
    }

    /// Missing resource (404) with a `*_NOT_FOUND`-style code
    pub fn not_found(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(code).with_status(StatusCode::NOT_FOUND).with_message(message)
    }

    /// Rejected credentials (401)
    pub fn unauthorized(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(code).with_status(StatusCode::UNAUTHORIZED).with_message(message)
    }
}

/// Build the error half of the wire envelope
///
/// Produces `{"ok": false, "error": {code, message, details?, trace_id?}}`.
/// An empty `message` falls back to `code`; `details` appears only when
/// supplied and `trace_id` only when non-empty. Pure and infallible — input
/// validation is the caller's duty.
#[must_use]
pub fn to_error_payload(code: &str, message: &str, trace_id: Option<&str>, details: Option<Value>) -> Value {
    let message = if message.is_empty() { code } else { message };

    let mut error = Map::new();
    error.insert("code".to_owned(), Value::from(code));
    error.insert("message".to_owned(), Value::from(message));
    if let Some(details) = details {
        error.insert("details".to_owned(), details);
    }
    if let Some(trace_id) = trace_id.filter(|id| !id.is_empty()) {
        error.insert("trace_id".to_owned(), Value::from(trace_id));
    }

    json!({ "ok": false, "error": error })
}

/// Success envelope carrying a payload: `{"ok": true, "data": <data>}`
#[must_use]
pub fn success_payload(data: Value) -> Value {
    json!({ "ok": true, "data": data })
}

/// Bare acknowledgement: `{"ok": true}`
#[must_use]
pub fn ok_payload() -> Value {
    json!({ "ok": true })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_payload_has_full_shape() {
        let payload = to_error_payload(
            "ROOM_NOT_FOUND",
            "room r_1 not found",
            Some("abc123def456"),
            Some(json!({"room_id": "r_1"})),
        );

        assert_eq!(
            payload,
            json!({
                "ok": false,
                "error": {
                    "code": "ROOM_NOT_FOUND",
                    "message": "room r_1 not found",
                    "details": {"room_id": "r_1"},
                    "trace_id": "abc123def456",
                }
            })
        );
    }

    #[test]
    fn error_payload_omits_absent_fields() {
        let payload = to_error_payload("INTERNAL_ERROR", "unexpected server error", None, None);
        let error = &payload["error"];

        assert_eq!(payload["ok"], json!(false));
        assert!(error.get("details").is_none());
        assert!(error.get("trace_id").is_none());
    }

    #[test]
    fn empty_trace_id_is_treated_as_absent() {
        let payload = to_error_payload("VALIDATION_ERROR", "invalid request", Some(""), None);
        assert!(payload["error"].get("trace_id").is_none());
    }

    #[test]
    fn empty_message_falls_back_to_code() {
        let payload = to_error_payload("AUTH_INVALID_CODE", "", None, None);
        assert_eq!(payload["error"]["message"], json!("AUTH_INVALID_CODE"));
    }

    #[test]
    fn new_defaults_to_bad_request() {
        let error = DomainError::new("VALIDATION_ERROR");
        assert_eq!(error.status, StatusCode::BAD_REQUEST);
        assert!(error.message.is_empty());
        assert!(error.details.is_none());
    }

    #[test]
    fn shorthand_constructors_pick_statuses() {
        assert_eq!(DomainError::validation("bad").status, StatusCode::BAD_REQUEST);
        assert_eq!(DomainError::not_found("ROOM_NOT_FOUND", "gone").status, StatusCode::NOT_FOUND);
        assert_eq!(
            DomainError::unauthorized("AUTH_INVALID_CODE", "invalid code").status,
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn success_envelopes() {
        assert_eq!(success_payload(json!([1, 2])), json!({"ok": true, "data": [1, 2]}));
        assert_eq!(ok_payload(), json!({"ok": true}));
    }
}
