use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use serde_json::json;
use werewolf_core::{DomainError, VALIDATION_ERROR};

use crate::errors::ApiError;

/// JSON body extractor that rejects in the uniform envelope
///
/// Malformed bodies, wrong types, and missing fields all surface as 400
/// `VALIDATION_ERROR` with `details.errors` listing the violation — the
/// same code and shape a handler-raised validation error uses, so clients
/// cannot tell framework rejection from handler rejection.
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(DomainError::new(VALIDATION_ERROR)
                .with_message("invalid request")
                .with_details(json!({
                    "errors": [{"loc": "body", "msg": rejection.body_text()}],
                }))
                .into()),
        }
    }
}
