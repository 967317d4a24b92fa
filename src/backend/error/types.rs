/**
 * Backend Error Types
 *
 * This module defines the error type returned by every handler and
 * middleware in the backend.
 *
 * # Error Categories
 *
 * ## Authentication Errors
 *
 * - `InvalidCredentials` - unknown email, wrong role or wrong password at login
 * - `Unauthorized` - missing, invalid or expired session token
 * - `Forbidden` - valid token whose role does not match the route
 *
 * ## Request Errors
 *
 * - `DuplicateEmail` - an account with this email already exists
 * - `ProfileNotFound` - the signed-in student has no profile
 * - `NotFound` - unknown admin resource or record
 * - `Validation` - missing or malformed request fields
 * - `PayloadTooLarge` - request body over the configured limit
 *
 * ## Internal Errors
 *
 * Store, token, password-hashing, serialization and header failures. These render as a generic
 * 500 so no internal detail reaches the client.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::store::StoreError;

/// Backend-specific error types
///
/// Each variant maps to one HTTP status code and one client-facing message.
///
/// # Usage
///
/// ```rust
/// use edudesk::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::validation("rollNumber is required");
/// assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Login failed
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// No valid session
    #[error("Unauthorized")]
    Unauthorized,

    /// Session role does not match the route
    #[error("Access denied")]
    Forbidden,

    /// An account with this email already exists
    #[error("Email already registered")]
    DuplicateEmail,

    /// The authenticated student has no profile record
    #[error("Student profile not found")]
    ProfileNotFound,

    /// Unknown resource or record
    #[error("{0} not found")]
    NotFound(String),

    /// Invalid request input
    #[error("{0}")]
    Validation(String),

    /// Request body exceeds the body limit
    #[error("Request body too large")]
    PayloadTooLarge,

    /// Store failure
    #[error("Store error: {0}")]
    Store(StoreError),

    /// Token signing failure
    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    /// Password hashing failure
    #[error("Password error: {0}")]
    Password(#[from] bcrypt::BcryptError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A response header could not be built
    #[error("Header error: {0}")]
    Header(#[from] axum::http::header::InvalidHeaderValue),
}

impl BackendError {
    /// Create a not-found error for the named thing
    ///
    /// # Arguments
    ///
    /// * `what` - Name used in the message, e.g. `"Resource"` or `"Record"`
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    /// Create a validation error
    ///
    /// # Arguments
    ///
    /// * `message` - Client-facing description of the problem
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            BackendError::InvalidCredentials | BackendError::Unauthorized => {
                StatusCode::UNAUTHORIZED
            }
            BackendError::Forbidden => StatusCode::FORBIDDEN,
            BackendError::DuplicateEmail | BackendError::Validation(_) => StatusCode::BAD_REQUEST,
            BackendError::ProfileNotFound | BackendError::NotFound(_) => StatusCode::NOT_FOUND,
            BackendError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            BackendError::Store(_)
            | BackendError::Token(_)
            | BackendError::Password(_)
            | BackendError::Serialization(_)
            | BackendError::Header(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the client-facing message
    ///
    /// Internal errors collapse to `"Internal Server Error"`.
    pub fn message(&self) -> String {
        if self.status_code().is_server_error() {
            "Internal Server Error".to_string()
        } else {
            self.to_string()
        }
    }
}
