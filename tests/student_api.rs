//! Student API integration tests
//!
//! Drives the full router (CORS, body limit, session middleware, handlers)
//! over an in-memory store.

mod common;

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
};
use common::*;
use edudesk::backend::auth::STUDENT_COOKIE;
use edudesk::backend::store::{
    AttendanceStatus, NewAttendance, NewMarks, NewStudent, NewUser, Role, Store,
};
use pretty_assertions::assert_eq;
use serde_json::json;

#[tokio::test]
async fn test_health_check() {
    let app = TestApp::new();
    let response = app.get("/", None).await;

    assert_status!(response, StatusCode::OK);
    assert_eq!(response.body, json!("Server Running"));
}

#[tokio::test]
async fn test_register_returns_created_profile() {
    let app = TestApp::new();
    let response = register_student(&app, "asha@example.com").await;

    assert_status!(response, StatusCode::CREATED);
    assert_eq!(response.body["statusCode"], 201);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["message"], "Student registered successfully");

    let profile = &response.body["data"];
    assert_eq!(profile["className"], "10");
    assert_eq!(profile["rollNumber"], "42");
    assert_eq!(profile["section"], "B");

    let users = app.state.store.list_users().await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].role, Role::Student);
    assert_eq!(profile["userId"], users[0].id.to_string());
    assert_ne!(users[0].password_hash, TEST_PASSWORD);
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = TestApp::new();
    let first = register_student(&app, "asha@example.com").await;
    assert_status!(first, StatusCode::CREATED);

    let response = register_student(&app, "asha@example.com").await;
    assert_error!(response, StatusCode::BAD_REQUEST, "Email already registered");

    assert_eq!(app.state.store.list_users().await.unwrap().len(), 1);
    assert_eq!(app.state.store.list_students().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_register_requires_roll_number() {
    let app = TestApp::new();
    let mut body = registration("asha@example.com");
    body["rollNumber"] = json!("");

    let response = app.post("/student/register", body, None).await;
    assert_error!(response, StatusCode::BAD_REQUEST, "rollNumber is required");
    assert!(app.state.store.list_users().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_login_sets_student_cookie() {
    let app = TestApp::new();
    register_student(&app, "asha@example.com").await;

    let response = app
        .post(
            "/student/login",
            json!({ "email": "asha@example.com", "password": TEST_PASSWORD }),
            None,
        )
        .await;

    assert_status!(response, StatusCode::OK);
    assert_eq!(response.body["message"], "Login successful");
    assert_eq!(response.body["success"], true);

    let cookie = response.set_cookie(STUDENT_COOKIE).expect("Set-Cookie");
    assert_contains!(cookie, "HttpOnly");
    assert_contains!(cookie, "SameSite=Lax");
    assert_contains!(cookie, "Max-Age=86400");
    assert!(!cookie.contains("Secure"));

    let token = response.cookie_value(STUDENT_COOKIE).unwrap();
    let claims = assert_ok!(app.state.sessions.verify(&token));
    assert_eq!(claims.role, Role::Student);
    assert_eq!(response.body["data"]["userId"], claims.sub);
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::new();
    register_student(&app, "asha@example.com").await;

    let response = app
        .post(
            "/student/login",
            json!({ "email": "asha@example.com", "password": "wrong" }),
            None,
        )
        .await;

    assert_error!(response, StatusCode::UNAUTHORIZED, "Invalid credentials");
    assert!(response.set_cookie(STUDENT_COOKIE).is_none());
}

#[tokio::test]
async fn test_login_rejects_non_student() {
    let app = TestApp::new();
    seed_user(&app, "teacher@example.com", Role::Teacher).await;

    let response = app
        .post(
            "/student/login",
            json!({ "email": "teacher@example.com", "password": TEST_PASSWORD }),
            None,
        )
        .await;

    assert_error!(response, StatusCode::UNAUTHORIZED, "Invalid credentials");
}

#[tokio::test]
async fn test_dashboard_requires_cookie() {
    let app = TestApp::new();
    let response = app.get("/student/dashboard", None).await;

    assert_error!(response, StatusCode::UNAUTHORIZED, "Unauthorized");
}

#[tokio::test]
async fn test_dashboard_rejects_invalid_token() {
    let app = TestApp::new();
    let cookie = cookie_pair(STUDENT_COOKIE, "not.a.token");
    let response = app.get("/student/dashboard", Some(&cookie)).await;

    assert_error!(response, StatusCode::UNAUTHORIZED, "Unauthorized");
}

#[tokio::test]
async fn test_dashboard_rejects_other_roles() {
    let app = TestApp::new();
    let teacher = seed_user(&app, "teacher@example.com", Role::Teacher).await;
    let cookie = cookie_pair(STUDENT_COOKIE, &token_for(&app, teacher.id, Role::Teacher));

    let response = app.get("/student/dashboard", Some(&cookie)).await;
    assert_error!(response, StatusCode::FORBIDDEN, "Access denied");
}

#[tokio::test]
async fn test_dashboard_for_deleted_user() {
    let app = TestApp::new();
    let cookie = student_cookie(&app, "asha@example.com").await;
    let user = app
        .state
        .store
        .find_user_by_email("asha@example.com")
        .await
        .unwrap()
        .unwrap();
    app.state.store.delete_user(user.id).await.unwrap();

    let response = app.get("/student/dashboard", Some(&cookie)).await;
    assert_error!(response, StatusCode::UNAUTHORIZED, "Unauthorized");
}

#[tokio::test]
async fn test_dashboard_without_profile() {
    let app = TestApp::new();
    let user = seed_user(&app, "orphan@example.com", Role::Student).await;
    let cookie = cookie_pair(STUDENT_COOKIE, &token_for(&app, user.id, Role::Student));

    let response = app.get("/student/dashboard", Some(&cookie)).await;
    assert_error!(response, StatusCode::NOT_FOUND, "Student profile not found");
}

#[tokio::test]
async fn test_register_login_dashboard_flow() {
    let app = TestApp::new();
    let cookie = student_cookie(&app, "asha@example.com").await;

    let response = app.get("/student/dashboard", Some(&cookie)).await;
    assert_status!(response, StatusCode::OK);
    assert_eq!(response.body["message"], "Dashboard fetched");

    let data = &response.body["data"];
    assert_eq!(data["attendancePercentage"], json!(0));
    assert_eq!(data["totalMarksObtained"], 0);
    assert_eq!(data["totalMaxMarks"], 0);

    let profile = &data["profile"];
    assert_eq!(profile["rollNumber"], "42");
    assert_eq!(profile["parentName"], "Meera Rao");
    assert_eq!(profile["user"]["email"], "asha@example.com");
    assert_eq!(profile["user"]["name"], "Asha Rao");
    assert_eq!(profile["user"]["role"], "student");
    assert!(profile["user"].get("password").is_none());
    assert!(profile["user"].get("passwordHash").is_none());
}

#[tokio::test]
async fn test_dashboard_statistics() {
    let app = TestApp::new();
    let cookie = student_cookie(&app, "asha@example.com").await;
    let store = &app.state.store;
    let user = store
        .find_user_by_email("asha@example.com")
        .await
        .unwrap()
        .unwrap();
    let student = store.find_student_by_user(user.id).await.unwrap().unwrap();

    for status in [
        AttendanceStatus::Present,
        AttendanceStatus::Absent,
        AttendanceStatus::Present,
        AttendanceStatus::Absent,
    ] {
        store
            .record_attendance(NewAttendance {
                student_id: student.id,
                date: None,
                status,
            })
            .await
            .unwrap();
    }
    for (obtained, total) in [(45, 50), (70, 100)] {
        store
            .record_marks(NewMarks {
                student_id: student.id,
                marks_obtained: obtained,
                total_marks: total,
            })
            .await
            .unwrap();
    }

    // Records of another student must not leak in
    let (_, other) = store
        .register_student(
            NewUser {
                name: "Other".to_string(),
                email: "other@example.com".to_string(),
                password_hash: "hash".to_string(),
                role: Role::Student,
            },
            NewStudent {
                class_name: "9".to_string(),
                section: None,
                roll_number: "1".to_string(),
                parent_name: None,
                contact_number: None,
            },
        )
        .await
        .unwrap();
    store
        .record_marks(NewMarks {
            student_id: other.id,
            marks_obtained: 99,
            total_marks: 100,
        })
        .await
        .unwrap();

    let response = app.get("/student/dashboard", Some(&cookie)).await;
    assert_status!(response, StatusCode::OK);

    let data = &response.body["data"];
    assert_eq!(data["attendancePercentage"], json!("50.00"));
    assert_eq!(data["totalMarksObtained"], 115);
    assert_eq!(data["totalMaxMarks"], 150);
}

#[tokio::test]
async fn test_logout_always_clears_cookie() {
    let app = TestApp::new();

    let anonymous = app.post("/student/logout", json!({}), None).await;
    assert_status!(anonymous, StatusCode::OK);
    assert_eq!(
        anonymous.body,
        json!({ "message": "Logged out successfully" })
    );
    let cleared = anonymous.set_cookie(STUDENT_COOKIE).expect("Set-Cookie");
    assert_contains!(cleared, "Max-Age=0");

    let cookie = student_cookie(&app, "asha@example.com").await;
    let signed_in = app.post("/student/logout", json!({}), Some(&cookie)).await;
    assert_status!(signed_in, StatusCode::OK);
    assert_eq!(signed_in.cookie_value(STUDENT_COOKIE).as_deref(), Some(""));
}

#[tokio::test]
async fn test_oversized_body_rejected() {
    let app = TestApp::new();
    let body = json!({
        "email": "asha@example.com",
        "password": "x".repeat(20 * 1024),
    });

    let response = app.post("/student/login", body, None).await;
    assert_error!(
        response,
        StatusCode::PAYLOAD_TOO_LARGE,
        "Request body too large"
    );
}

#[tokio::test]
async fn test_login_missing_field_uses_envelope() {
    let app = TestApp::new();
    let response = app
        .post("/student/login", json!({ "email": "asha@example.com" }), None)
        .await;

    assert_status!(response, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["statusCode"], 400);
    assert!(response.body["data"].is_null());
    assert_eq!(response.body["success"], false);
    let message = response.body["message"].as_str().unwrap();
    assert_contains!(message, "password");
}

#[tokio::test]
async fn test_malformed_json_rejected() {
    let app = TestApp::new();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/student/register")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from("{\"email\": "))
        .unwrap();

    let response = app.send(request).await;
    assert_status!(response, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["statusCode"], 400);
    assert_eq!(response.body["success"], false);
    assert!(response.body["message"].is_string());
    assert!(app.state.store.list_users().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_register_missing_roll_number_key() {
    let app = TestApp::new();
    let mut body = registration("asha@example.com");
    body.as_object_mut().unwrap().remove("rollNumber");

    let response = app.post("/student/register", body, None).await;
    assert_error!(response, StatusCode::BAD_REQUEST, "rollNumber is required");
    assert!(app.state.store.list_users().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_unknown_route_uses_envelope() {
    let app = TestApp::new();

    let response = app.get("/student/nope", None).await;
    assert_error!(response, StatusCode::NOT_FOUND, "Route not found");

    let top_level = app.get("/timetable", None).await;
    assert_error!(top_level, StatusCode::NOT_FOUND, "Route not found");
}
