/**
 * JSON Body Extractor
 *
 * Wraps `axum::Json` so body rejections (syntax errors, missing fields,
 * wrong content type, oversized bodies) come back through `BackendError`
 * and therefore carry the JSON envelope like every other error.
 */

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};

use crate::backend::error::BackendError;

/// JSON request body, rejected with a `BackendError`
///
/// # Example
///
/// ```rust,no_run
/// use edudesk::backend::middleware::JsonBody;
/// use serde_json::Value;
///
/// async fn handler(JsonBody(body): JsonBody<Value>) {
///     println!("{body}");
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(request, state).await?;
        Ok(JsonBody(value))
    }
}
