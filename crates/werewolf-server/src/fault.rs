use std::any::Any;
use std::panic::AssertUnwindSafe;

use axum::Json;
use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use futures_util::FutureExt;
use http::StatusCode;
use werewolf_core::{INTERNAL_ERROR, TraceContext, to_error_payload};

/// Internal fault boundary
///
/// Last-resort guard around route handling and the domain error translator:
/// any panic escaping the pipeline below is converted into a generic 500
/// envelope carrying the current trace id. The panic payload is logged but
/// never exposed on the wire. Responses that already carry a translated
/// domain error pass through untouched — this layer only handles faults
/// nothing else classified.
pub async fn fault_boundary_middleware(request: Request, next: Next) -> Response {
    let trace_id = request
        .extensions()
        .get::<TraceContext>()
        .map(|trace| trace.id().to_owned());

    match AssertUnwindSafe(next.run(request)).catch_unwind().await {
        Ok(response) => response,
        Err(panic) => {
            tracing::error!(
                trace_id = trace_id.as_deref().unwrap_or(""),
                panic = panic_message(panic.as_ref()),
                "request handling panicked"
            );

            let payload = to_error_payload(INTERNAL_ERROR, "unexpected server error", trace_id.as_deref(), None);
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> &str {
    panic
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| panic.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("<non-string panic payload>")
}
