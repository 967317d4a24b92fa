//! Response Envelope
//!
//! Every JSON endpoint answers with the same envelope:
//!
//! ```json
//! { "statusCode": 200, "data": { ... }, "message": "Login successful", "success": true }
//! ```
//!
//! Errors use the same shape with `data: null` and `success: false`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

/// Uniform JSON envelope for API responses
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    /// HTTP status code mirrored in the body
    pub status_code: u16,
    /// Payload, `null` for errors
    pub data: Option<T>,
    /// Human-readable message
    pub message: String,
    /// `true` for status codes below 400
    pub success: bool,
}

impl<T> ApiResponse<T> {
    /// Build an envelope carrying `data`
    pub fn new(status_code: u16, data: T, message: impl Into<String>) -> Self {
        Self {
            status_code,
            data: Some(data),
            message: message.into(),
            success: status_code < 400,
        }
    }
}

impl ApiResponse<()> {
    /// Build an envelope with `data: null`
    pub fn empty(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            status_code,
            data: None,
            message: message.into(),
            success: status_code < 400,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    /// Respond with the mirrored status code and the envelope as JSON
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}
