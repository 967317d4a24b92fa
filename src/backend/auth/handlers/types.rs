/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by authentication
 * handlers. These types are shared by the student and admin login paths.
 */

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Login request
///
/// Contains the email and password for user authentication.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct LoginRequest {
    /// User's email address
    pub email: String,
    /// User's password (verified against the stored hash)
    pub password: String,
}

/// Payload of a successful login envelope
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoginData {
    pub user_id: Uuid,
}

/// Logout response
///
/// Logout answers with a bare message rather than the envelope.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LogoutResponse {
    pub message: String,
}

impl Default for LogoutResponse {
    fn default() -> Self {
        Self {
            message: "Logged out successfully".to_string(),
        }
    }
}
