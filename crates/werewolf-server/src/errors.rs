use axum::Json;
use axum::body::Body;
use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use werewolf_core::{DomainError, INTERNAL_ERROR, TraceContext, to_error_payload};

/// Handler-side error carrier
///
/// Handlers return `Result<_, ApiError>`; converting into a response stashes
/// the wrapped `DomainError` in response extensions for the translator
/// middleware to render. Keeping the rendering out of `IntoResponse` means
/// the trace id never has to be smuggled into handler signatures.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        Self(error)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(error: serde_json::Error) -> Self {
        // Failing to serialize our own wire types is a programming error,
        // surfaced as a generic internal fault
        tracing::error!(%error, "response serialization failed");
        Self(
            DomainError::new(INTERNAL_ERROR)
                .with_status(StatusCode::INTERNAL_SERVER_ERROR)
                .with_message("unexpected server error"),
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut response = Response::new(Body::empty());
        *response.status_mut() = self.0.status;
        response.extensions_mut().insert(self.0);
        response
    }
}

/// Domain error translator
///
/// Renders any `DomainError` surfaced by the pipeline below into the uniform
/// error envelope, attaching the request's trace id when one exists. This is
/// the only place a domain error becomes a wire payload; transformation
/// happens exactly once and the translator neither logs nor retries.
pub async fn domain_error_middleware(request: Request, next: Next) -> Response {
    let trace = request.extensions().get::<TraceContext>().cloned();

    let mut response = next.run(request).await;

    let Some(error) = response.extensions_mut().remove::<DomainError>() else {
        return response;
    };

    let payload = to_error_payload(
        &error.code,
        &error.message,
        trace.as_ref().map(TraceContext::id),
        error.details,
    );

    (error.status, Json(payload)).into_response()
}
