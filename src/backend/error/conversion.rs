/**
 * Error Conversion
 *
 * This module provides conversion implementations for backend errors,
 * allowing them to be converted to HTTP responses and built from store errors
 * and JSON body rejections.
 *
 * # HTTP Response Conversion
 *
 * All backend errors implement `IntoResponse` from Axum, allowing them to be
 * returned directly from handlers and middleware.
 *
 * # Response Format
 *
 * Error responses use the same envelope as successful ones:
 * ```json
 * {
 *   "statusCode": 400,
 *   "data": null,
 *   "message": "Email already registered",
 *   "success": false
 * }
 * ```
 */

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::error::types::BackendError;
use crate::backend::store::StoreError;
use crate::shared::ApiResponse;

impl IntoResponse for BackendError {
    /// Convert a backend error into an HTTP response
    ///
    /// Internal errors are logged here, since this is the last point where
    /// their detail is available.
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("{}", self);
        }

        let body = ApiResponse::<()>::empty(status.as_u16(), self.message());
        (status, Json(body)).into_response()
    }
}

impl From<StoreError> for BackendError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateEmail => BackendError::DuplicateEmail,
            StoreError::DuplicateProfile(kind) => {
                BackendError::validation(format!("User already has a {kind} profile"))
            }
            StoreError::MissingReference(kind) => {
                BackendError::validation(format!("Referenced {kind} does not exist"))
            }
            other => BackendError::Store(other),
        }
    }
}

/// Body rejections become 400s, except an oversized body which stays 413
impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return BackendError::PayloadTooLarge;
        }
        tracing::warn!("Rejected request body: {}", rejection.body_text());
        BackendError::validation(rejection.body_text())
    }
}
