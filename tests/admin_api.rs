//! Admin surface integration tests

mod common;

use axum::http::StatusCode;
use common::*;
use edudesk::backend::auth::{ADMIN_COOKIE, STUDENT_COOKIE};
use edudesk::backend::store::{Role, Store};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use uuid::Uuid;

/// Create a record through the admin API and return its JSON
async fn create(app: &TestApp, cookie: &str, resource: &str, body: Value) -> Value {
    let response = app
        .post(&format!("/admin/resources/{resource}"), body, Some(cookie))
        .await;
    assert_status!(response, StatusCode::CREATED);
    response.body["data"].clone()
}

#[tokio::test]
async fn test_admin_login_sets_admin_cookie() {
    let app = TestApp::new();
    seed_user(&app, "admin@example.com", Role::Admin).await;

    let response = app
        .post(
            "/admin/login",
            json!({ "email": "admin@example.com", "password": TEST_PASSWORD }),
            None,
        )
        .await;

    assert_status!(response, StatusCode::OK);
    assert!(response.set_cookie(STUDENT_COOKIE).is_none());
    let token = response.cookie_value(ADMIN_COOKIE).expect("adminSession");
    let claims = assert_ok!(app.state.sessions.verify(&token));
    assert_eq!(claims.role, Role::Admin);
}

#[tokio::test]
async fn test_admin_login_requires_admin_role() {
    let app = TestApp::new();
    seed_user(&app, "student@example.com", Role::Student).await;

    let response = app
        .post(
            "/admin/login",
            json!({ "email": "student@example.com", "password": TEST_PASSWORD }),
            None,
        )
        .await;

    assert_error!(response, StatusCode::UNAUTHORIZED, "Invalid credentials");
    assert!(response.set_cookie(ADMIN_COOKIE).is_none());
}

#[tokio::test]
async fn test_resources_require_admin_session() {
    let app = TestApp::new();

    let anonymous = app.get("/admin/resources", None).await;
    assert_error!(anonymous, StatusCode::UNAUTHORIZED, "Unauthorized");

    // A student token in the admin cookie is the wrong role
    let student = seed_user(&app, "student@example.com", Role::Student).await;
    let token = token_for(&app, student.id, Role::Student);
    let wrong_role = app
        .get("/admin/resources", Some(&cookie_pair(ADMIN_COOKIE, &token)))
        .await;
    assert_error!(wrong_role, StatusCode::FORBIDDEN, "Access denied");

    // The student cookie is not an admin session at all
    let wrong_cookie = app
        .get("/admin/resources/users", Some(&cookie_pair(STUDENT_COOKIE, &token)))
        .await;
    assert_error!(wrong_cookie, StatusCode::UNAUTHORIZED, "Unauthorized");
}

#[tokio::test]
async fn test_catalogue_hides_password_outside_edit() {
    let app = TestApp::new();
    let cookie = admin_cookie(&app).await;

    let response = app.get("/admin/resources", Some(&cookie)).await;
    assert_status!(response, StatusCode::OK);

    let resources = response.body["data"].as_array().unwrap();
    let names: Vec<_> = resources.iter().map(|r| r["name"].clone()).collect();
    assert_eq!(
        names,
        vec![
            json!("users"),
            json!("students"),
            json!("teachers"),
            json!("attendance"),
            json!("marks")
        ]
    );

    let password = resources[0]["properties"]
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["name"] == "password")
        .unwrap();
    assert_eq!(
        password,
        &json!({ "name": "password", "list": false, "show": false, "edit": true })
    );
}

#[tokio::test]
async fn test_unknown_resource() {
    let app = TestApp::new();
    let cookie = admin_cookie(&app).await;

    let response = app.get("/admin/resources/courses", Some(&cookie)).await;
    assert_error!(response, StatusCode::NOT_FOUND, "Resource not found");
}

#[tokio::test]
async fn test_create_user_hashes_password() {
    let app = TestApp::new();
    let cookie = admin_cookie(&app).await;

    let user = create(
        &app,
        &cookie,
        "users",
        json!({ "name": "Ravi", "email": "ravi@example.com", "password": "pw-123456" }),
    )
    .await;
    assert_eq!(user["role"], "student");
    assert!(user.get("password").is_none());
    assert!(user.get("passwordHash").is_none());

    let stored = app
        .state
        .store
        .find_user_by_email("ravi@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_ne!(stored.password_hash, "pw-123456");

    let login = app
        .post(
            "/student/login",
            json!({ "email": "ravi@example.com", "password": "pw-123456" }),
            None,
        )
        .await;
    // No profile is needed to log in
    assert_status!(login, StatusCode::OK);
}

#[tokio::test]
async fn test_create_user_duplicate_email() {
    let app = TestApp::new();
    let cookie = admin_cookie(&app).await;

    let response = app
        .post(
            "/admin/resources/users",
            json!({ "name": "Dup", "email": "admin@example.com", "password": "x-123456" }),
            Some(&cookie),
        )
        .await;
    assert_error!(response, StatusCode::BAD_REQUEST, "Email already registered");
}

#[tokio::test]
async fn test_list_users_never_shows_password() {
    let app = TestApp::new();
    let cookie = admin_cookie(&app).await;
    register_student(&app, "asha@example.com").await;

    let response = app.get("/admin/resources/users", Some(&cookie)).await;
    assert_status!(response, StatusCode::OK);

    let users = response.body["data"].as_array().unwrap();
    assert_eq!(users.len(), 2);
    for user in users {
        assert!(user.get("password").is_none());
        assert!(user.get("passwordHash").is_none());
        assert!(user.get("email").is_some());
    }

    let id = users[0]["id"].as_str().unwrap();
    let shown = app
        .get(&format!("/admin/resources/users/{id}"), Some(&cookie))
        .await;
    assert_status!(shown, StatusCode::OK);
    assert!(shown.body["data"].get("password").is_none());
}

#[tokio::test]
async fn test_student_record_lifecycle() {
    let app = TestApp::new();
    let cookie = admin_cookie(&app).await;
    let owner = seed_user(&app, "kid@example.com", Role::Student).await;

    let student = create(
        &app,
        &cookie,
        "students",
        json!({ "userId": owner.id, "className": "7", "rollNumber": "12" }),
    )
    .await;
    let id = student["id"].as_str().unwrap().to_string();
    let uri = format!("/admin/resources/students/{id}");

    let updated = app
        .patch(&uri, json!({ "section": "C" }), Some(&cookie))
        .await;
    assert_status!(updated, StatusCode::OK);
    assert_eq!(updated.body["data"]["section"], "C");
    assert_eq!(updated.body["data"]["rollNumber"], "12");

    let deleted = app.delete(&uri, Some(&cookie)).await;
    assert_status!(deleted, StatusCode::OK);
    assert_eq!(deleted.body["data"]["id"], id);

    let missing = app.get(&uri, Some(&cookie)).await;
    assert_error!(missing, StatusCode::NOT_FOUND, "Record not found");

    let again = app.delete(&uri, Some(&cookie)).await;
    assert_error!(again, StatusCode::NOT_FOUND, "Record not found");
}

#[tokio::test]
async fn test_invalid_record_body_uses_envelope() {
    let app = TestApp::new();
    let cookie = admin_cookie(&app).await;

    let response = app
        .post(
            "/admin/resources/marks",
            json!({ "studentId": "not-a-uuid", "marksObtained": 1, "totalMarks": 2 }),
            Some(&cookie),
        )
        .await;
    assert_status!(response, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["success"], false);
    assert!(response.body["data"].is_null());

    let unknown = app.get("/admin/nope", Some(&cookie)).await;
    assert_error!(unknown, StatusCode::NOT_FOUND, "Route not found");
}

#[tokio::test]
async fn test_malformed_id_is_not_found() {
    let app = TestApp::new();
    let cookie = admin_cookie(&app).await;

    let response = app.get("/admin/resources/marks/42", Some(&cookie)).await;
    assert_error!(response, StatusCode::NOT_FOUND, "Record not found");
}

#[tokio::test]
async fn test_marks_require_existing_student() {
    let app = TestApp::new();
    let cookie = admin_cookie(&app).await;

    let response = app
        .post(
            "/admin/resources/marks",
            json!({ "studentId": Uuid::new_v4(), "marksObtained": 10, "totalMarks": 20 }),
            Some(&cookie),
        )
        .await;
    assert_error!(
        response,
        StatusCode::BAD_REQUEST,
        "Referenced student does not exist"
    );
}

#[tokio::test]
async fn test_admin_records_feed_dashboard() {
    let app = TestApp::new();
    let admin = admin_cookie(&app).await;
    let student_session = student_cookie(&app, "asha@example.com").await;

    let user = app
        .state
        .store
        .find_user_by_email("asha@example.com")
        .await
        .unwrap()
        .unwrap();
    let student = app
        .state
        .store
        .find_student_by_user(user.id)
        .await
        .unwrap()
        .unwrap();

    for status in ["present", "present", "absent"] {
        create(
            &app,
            &admin,
            "attendance",
            json!({ "studentId": student.id, "status": status }),
        )
        .await;
    }
    create(
        &app,
        &admin,
        "marks",
        json!({ "studentId": student.id, "marksObtained": 18, "totalMarks": 25 }),
    )
    .await;

    let dashboard = app.get("/student/dashboard", Some(&student_session)).await;
    assert_status!(dashboard, StatusCode::OK);
    assert_eq!(dashboard.body["data"]["attendancePercentage"], json!("66.67"));
    assert_eq!(dashboard.body["data"]["totalMarksObtained"], 18);
    assert_eq!(dashboard.body["data"]["totalMaxMarks"], 25);
}

#[tokio::test]
async fn test_update_user_password() {
    let app = TestApp::new();
    let cookie = admin_cookie(&app).await;
    let user = seed_user(&app, "kid@example.com", Role::Student).await;

    let response = app
        .patch(
            &format!("/admin/resources/users/{}", user.id),
            json!({ "password": "new-pass-1" }),
            Some(&cookie),
        )
        .await;
    assert_status!(response, StatusCode::OK);
    assert_eq!(response.body["data"]["email"], "kid@example.com");

    let old = app
        .post(
            "/student/login",
            json!({ "email": "kid@example.com", "password": TEST_PASSWORD }),
            None,
        )
        .await;
    assert_status!(old, StatusCode::UNAUTHORIZED);

    let new = app
        .post(
            "/student/login",
            json!({ "email": "kid@example.com", "password": "new-pass-1" }),
            None,
        )
        .await;
    assert_status!(new, StatusCode::OK);
}

#[tokio::test]
async fn test_admin_logout_always_succeeds() {
    let app = TestApp::new();
    let response = app.post("/admin/logout", json!({}), None).await;

    assert_status!(response, StatusCode::OK);
    assert_eq!(response.body["message"], "Logged out successfully");
    let cleared = response.set_cookie(ADMIN_COOKIE).expect("Set-Cookie");
    assert_contains!(cleared, "Max-Age=0");
}
