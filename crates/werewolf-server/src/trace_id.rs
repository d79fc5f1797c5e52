use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use http::HeaderValue;
use werewolf_core::{REQUEST_ID_HEADER, TraceContext};

/// Trace id propagation middleware
///
/// Adopts a non-empty inbound `x-request-id` verbatim, otherwise generates a
/// fresh id, and makes it available to the rest of the pipeline through
/// request extensions. The outgoing response is stamped with the same header
/// on every path: the fault boundary below always yields a response, so the
/// stamping line is unconditionally reached.
///
/// This layer must stay outermost so the translators and the fault boundary
/// run inside its scope.
pub async fn trace_id_middleware(mut request: Request, next: Next) -> Response {
    let trace = request
        .headers()
        .get(&REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map_or_else(TraceContext::generate, TraceContext::new);

    request.extensions_mut().insert(trace.clone());

    let mut response = next.run(request).await;

    if let Ok(value) = HeaderValue::from_str(trace.id()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}
