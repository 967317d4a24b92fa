/**
 * Authentication Middleware
 *
 * This module provides middleware for protecting routes that require a
 * session. It reads the session token from a cookie, verifies it, checks
 * the role required by the route and re-fetches the user so handlers see
 * the current record.
 *
 * # Outcomes
 *
 * - No cookie, bad signature, expired token or deleted user → 401
 * - Valid token with another role → 403
 * - Otherwise `AuthenticatedUser` is attached to the request extensions
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use serde::Serialize;
use uuid::Uuid;

use crate::backend::auth::cookies::{extract_cookie, ADMIN_COOKIE, STUDENT_COOKIE};
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::backend::store::{Role, User};

/// Identity attached to authenticated requests (no password hash)
#[derive(Clone, Debug, Serialize)]
pub struct AuthenticatedUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl From<User> for AuthenticatedUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
        }
    }
}

/// Resolve the session held in cookie `cookie_name`
///
/// # Arguments
///
/// * `state` - Application state (session keys and store)
/// * `headers` - Request headers
/// * `cookie_name` - Cookie carrying the token
/// * `role` - Role the route requires
///
/// # Returns
///
/// The current user, or `Unauthorized` / `Forbidden`
pub async fn verify_session(
    state: &AppState,
    headers: &HeaderMap,
    cookie_name: &str,
    role: Role,
) -> Result<AuthenticatedUser, BackendError> {
    let token = extract_cookie(headers, cookie_name).ok_or_else(|| {
        tracing::warn!("Missing {} cookie", cookie_name);
        BackendError::Unauthorized
    })?;

    let claims = state.sessions.verify(&token).map_err(|e| {
        tracing::warn!("Invalid session token: {}", e);
        BackendError::Unauthorized
    })?;

    if claims.role != role {
        tracing::warn!("Session role {} rejected, {} required", claims.role, role);
        return Err(BackendError::Forbidden);
    }

    let user_id = claims.user_id().ok_or_else(|| {
        tracing::warn!("Invalid user ID in token: {}", claims.sub);
        BackendError::Unauthorized
    })?;

    let user = state.store.find_user(user_id).await?.ok_or_else(|| {
        tracing::warn!("Session user {} no longer exists", user_id);
        BackendError::Unauthorized
    })?;

    Ok(user.into())
}

/// Gate for student routes (`studentToken`, role `student`)
pub async fn student_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let user = verify_session(&state, request.headers(), STUDENT_COOKIE, Role::Student).await?;
    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

/// Gate for admin routes (`adminSession`, role `admin`)
pub async fn admin_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let user = verify_session(&state, request.headers(), ADMIN_COOKIE, Role::Admin).await?;
    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Only valid behind `student_auth` or `admin_auth`.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S: Send + Sync> FromRequestParts<S> for AuthUser {
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                BackendError::Unauthorized
            })?;

        Ok(AuthUser(user))
    }
}
