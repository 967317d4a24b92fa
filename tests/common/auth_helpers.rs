//! Authentication test helpers
//!
//! Provides utilities for creating test users, logging in and building
//! session cookies.

use axum::http::StatusCode;
use edudesk::backend::auth::passwords::hash_password;
use edudesk::backend::auth::{ADMIN_COOKIE, STUDENT_COOKIE};
use edudesk::backend::store::{NewUser, Role, User};
use serde_json::{json, Value};
use uuid::Uuid;

use super::app::{TestApp, TestResponse};

/// Password given to every seeded account
pub const TEST_PASSWORD: &str = "secret123";

/// Registration body for a student with the given email
pub fn registration(email: &str) -> Value {
    json!({
        "name": "Asha Rao",
        "email": email,
        "password": TEST_PASSWORD,
        "className": "10",
        "section": "B",
        "rollNumber": "42",
        "parentName": "Meera Rao",
        "contactNumber": "555-0100",
    })
}

/// Register a student through the API
pub async fn register_student(app: &TestApp, email: &str) -> TestResponse {
    app.post("/student/register", registration(email), None).await
}

/// Create a user directly in the store
pub async fn seed_user(app: &TestApp, email: &str, role: Role) -> User {
    app.state
        .store
        .create_user(NewUser {
            name: format!("Test {role}"),
            email: email.to_string(),
            password_hash: hash_password(TEST_PASSWORD, 4).expect("hash"),
            role,
        })
        .await
        .expect("seed user")
}

/// `Cookie` header value for a single cookie
pub fn cookie_pair(name: &str, token: &str) -> String {
    format!("{name}={token}")
}

/// Sign a token directly, bypassing login
pub fn token_for(app: &TestApp, user_id: Uuid, role: Role) -> String {
    app.state.sessions.issue(user_id, role).expect("issue token")
}

/// Register and log in a student; returns the `Cookie` header value
pub async fn student_cookie(app: &TestApp, email: &str) -> String {
    let registered = register_student(app, email).await;
    assert_eq!(registered.status, StatusCode::CREATED, "{:?}", registered.body);

    let login = app
        .post(
            "/student/login",
            json!({ "email": email, "password": TEST_PASSWORD }),
            None,
        )
        .await;
    assert_eq!(login.status, StatusCode::OK, "{:?}", login.body);

    let token = login.cookie_value(STUDENT_COOKIE).expect("student cookie");
    cookie_pair(STUDENT_COOKIE, &token)
}

/// Seed an admin and log in; returns the `Cookie` header value
pub async fn admin_cookie(app: &TestApp) -> String {
    seed_user(app, "admin@example.com", Role::Admin).await;

    let login = app
        .post(
            "/admin/login",
            json!({ "email": "admin@example.com", "password": TEST_PASSWORD }),
            None,
        )
        .await;
    assert_eq!(login.status, StatusCode::OK, "{:?}", login.body);

    let token = login.cookie_value(ADMIN_COOKIE).expect("admin cookie");
    cookie_pair(ADMIN_COOKIE, &token)
}
