//! Session cookies.
//!
//! Cookies are written as raw `Set-Cookie` values:
//! `name=token; Path=/; HttpOnly; SameSite=Lax; Max-Age=N`, with `; Secure`
//! appended when `COOKIE_SECURE` is set.

use std::time::Duration;

use axum::http::header::{InvalidHeaderValue, COOKIE};
use axum::http::{HeaderMap, HeaderValue};

/// Cookie carrying the student session token
pub const STUDENT_COOKIE: &str = "studentToken";

/// Cookie carrying the admin session token
pub const ADMIN_COOKIE: &str = "adminSession";

/// Build an `HttpOnly` cookie holding a session token
pub fn session_cookie(
    name: &str,
    token: &str,
    max_age: Duration,
    secure: bool,
) -> Result<HeaderValue, InvalidHeaderValue> {
    let mut cookie = format!(
        "{name}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        max_age.as_secs()
    );
    if secure {
        cookie.push_str("; Secure");
    }
    HeaderValue::from_str(&cookie)
}

/// Build a cookie that expires `name` immediately
pub fn clear_cookie(name: &str, secure: bool) -> Result<HeaderValue, InvalidHeaderValue> {
    let mut cookie = format!("{name}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0");
    if secure {
        cookie.push_str("; Secure");
    }
    HeaderValue::from_str(&cookie)
}

/// Read cookie `name` from the request's `Cookie` headers
///
/// Empty values count as absent.
pub fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| key.trim() == name)
        .map(|(_, val)| val.trim().to_string())
        .filter(|val| !val.is_empty())
}
