/**
 * Admin Record Handlers
 *
 * CRUD over the raw records, dispatched on the `{resource}` path segment.
 * Request bodies are parsed per resource; records are returned as JSON
 * projected onto the properties visible in the matching view.
 *
 * # Routes
 *
 * - `GET    /admin/resources`                 - catalogue
 * - `GET    /admin/resources/{resource}`      - list (list view)
 * - `POST   /admin/resources/{resource}`      - create (show view)
 * - `GET    /admin/resources/{resource}/{id}` - show (show view)
 * - `PATCH  /admin/resources/{resource}/{id}` - partial update (show view)
 * - `DELETE /admin/resources/{resource}/{id}` - delete
 *
 * Unknown resources and malformed or unknown ids are 404.
 */
use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::backend::admin::resources::{catalogue, Resource, ResourceInfo, View};
use crate::backend::auth::passwords::hash_password;
use crate::backend::error::BackendError;
use crate::backend::middleware::auth::AuthUser;
use crate::backend::middleware::JsonBody;
use crate::backend::server::state::AppState;
use crate::backend::store::{
    AttendanceChanges, MarksChanges, NewAttendance, NewMarks, NewStudent, NewTeacher, NewUser,
    Role, StudentChanges, TeacherChanges, UserChanges,
};
use crate::shared::ApiResponse;

/// Body of `POST /admin/resources/users`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateUserRequest {
    name: String,
    email: String,
    password: String,
    #[serde(default)]
    role: Option<Role>,
}

/// Body of `PATCH /admin/resources/users/{id}`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct UpdateUserRequest {
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
    role: Option<Role>,
}

/// Body of `POST /admin/resources/students`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateStudentRequest {
    user_id: Uuid,
    #[serde(flatten)]
    profile: NewStudent,
}

fn resource(segment: &str) -> Result<Resource, BackendError> {
    Resource::from_path(segment).ok_or_else(|| BackendError::not_found("Resource"))
}

fn record_id(segment: &str) -> Result<Uuid, BackendError> {
    Uuid::parse_str(segment).map_err(|_| BackendError::not_found("Record"))
}

fn parse_body<T: DeserializeOwned>(body: Value) -> Result<T, BackendError> {
    serde_json::from_value(body).map_err(|e| BackendError::validation(e.to_string()))
}

fn require_non_empty(field: &str, value: &str) -> Result<(), BackendError> {
    if value.trim().is_empty() {
        return Err(BackendError::validation(format!("{field} is required")));
    }
    Ok(())
}

fn project<T: Serialize>(resource: Resource, view: View, record: T) -> Result<Value, BackendError> {
    Ok(resource.project(view, serde_json::to_value(record)?))
}

fn project_all<T: Serialize>(
    resource: Resource,
    records: Vec<T>,
) -> Result<Vec<Value>, BackendError> {
    records
        .into_iter()
        .map(|record| project(resource, View::List, record))
        .collect()
}

/// Project an optional record, mapping `None` to 404
fn found<T: Serialize>(resource: Resource, record: Option<T>) -> Result<Value, BackendError> {
    let record = record.ok_or_else(|| BackendError::not_found("Record"))?;
    project(resource, View::Show, record)
}

/// Resource catalogue
pub async fn list_resources(
    AuthUser(admin): AuthUser,
) -> ApiResponse<Vec<ResourceInfo>> {
    tracing::debug!("Catalogue requested by {}", admin.email);
    ApiResponse::new(StatusCode::OK.as_u16(), catalogue(), "Resources fetched")
}

/// List every record of a resource
pub async fn list_records(
    State(state): State<AppState>,
    Path(segment): Path<String>,
) -> Result<ApiResponse<Vec<Value>>, BackendError> {
    let resource = resource(&segment)?;
    let store = state.store.as_ref();

    let records = match resource {
        Resource::Users => project_all(resource, store.list_users().await?)?,
        Resource::Students => project_all(resource, store.list_students().await?)?,
        Resource::Teachers => project_all(resource, store.list_teachers().await?)?,
        Resource::Attendance => project_all(resource, store.list_attendance().await?)?,
        Resource::Marks => project_all(resource, store.list_marks().await?)?,
    };

    Ok(ApiResponse::new(StatusCode::OK.as_u16(), records, "Records fetched"))
}

/// Create a record
///
/// User passwords are hashed before storage; new users default to the
/// `student` role.
pub async fn create_record(
    State(state): State<AppState>,
    AuthUser(admin): AuthUser,
    Path(segment): Path<String>,
    JsonBody(body): JsonBody<Value>,
) -> Result<ApiResponse<Value>, BackendError> {
    let resource = resource(&segment)?;
    let store = state.store.as_ref();

    let record = match resource {
        Resource::Users => {
            let request: CreateUserRequest = parse_body(body)?;
            require_non_empty("name", &request.name)?;
            require_non_empty("email", &request.email)?;
            require_non_empty("password", &request.password)?;
            let user = NewUser {
                name: request.name,
                email: request.email,
                password_hash: hash_password(&request.password, state.config.bcrypt_cost)?,
                role: request.role.unwrap_or(Role::Student),
            };
            project(resource, View::Show, store.create_user(user).await?)?
        }
        Resource::Students => {
            let request: CreateStudentRequest = parse_body(body)?;
            require_non_empty("className", &request.profile.class_name)?;
            require_non_empty("rollNumber", &request.profile.roll_number)?;
            let student = store.create_student(request.user_id, request.profile).await?;
            project(resource, View::Show, student)?
        }
        Resource::Teachers => {
            let teacher: NewTeacher = parse_body(body)?;
            require_non_empty("subject", &teacher.subject)?;
            project(resource, View::Show, store.create_teacher(teacher).await?)?
        }
        Resource::Attendance => {
            let attendance: NewAttendance = parse_body(body)?;
            project(resource, View::Show, store.record_attendance(attendance).await?)?
        }
        Resource::Marks => {
            let marks: NewMarks = parse_body(body)?;
            project(resource, View::Show, store.record_marks(marks).await?)?
        }
    };

    tracing::info!("{} created a {} record", admin.email, resource.name());
    Ok(ApiResponse::new(StatusCode::CREATED.as_u16(), record, "Record created"))
}

/// Show a single record
pub async fn show_record(
    State(state): State<AppState>,
    Path((segment, id)): Path<(String, String)>,
) -> Result<ApiResponse<Value>, BackendError> {
    let resource = resource(&segment)?;
    let id = record_id(&id)?;
    let store = state.store.as_ref();

    let record = match resource {
        Resource::Users => found(resource, store.find_user(id).await?)?,
        Resource::Students => found(resource, store.find_student(id).await?)?,
        Resource::Teachers => found(resource, store.find_teacher(id).await?)?,
        Resource::Attendance => found(resource, store.find_attendance(id).await?)?,
        Resource::Marks => found(resource, store.find_marks(id).await?)?,
    };

    Ok(ApiResponse::new(StatusCode::OK.as_u16(), record, "Record fetched"))
}

/// Partially update a record; absent fields are left unchanged
pub async fn update_record(
    State(state): State<AppState>,
    AuthUser(admin): AuthUser,
    Path((segment, id)): Path<(String, String)>,
    JsonBody(body): JsonBody<Value>,
) -> Result<ApiResponse<Value>, BackendError> {
    let resource = resource(&segment)?;
    let id = record_id(&id)?;
    let store = state.store.as_ref();

    let record = match resource {
        Resource::Users => {
            let request: UpdateUserRequest = parse_body(body)?;
            let password_hash = match request.password.as_deref() {
                Some(password) => {
                    require_non_empty("password", password)?;
                    Some(hash_password(password, state.config.bcrypt_cost)?)
                }
                None => None,
            };
            let changes = UserChanges {
                name: request.name,
                email: request.email,
                password_hash,
                role: request.role,
            };
            found(resource, store.update_user(id, changes).await?)?
        }
        Resource::Students => {
            let changes: StudentChanges = parse_body(body)?;
            found(resource, store.update_student(id, changes).await?)?
        }
        Resource::Teachers => {
            let changes: TeacherChanges = parse_body(body)?;
            found(resource, store.update_teacher(id, changes).await?)?
        }
        Resource::Attendance => {
            let changes: AttendanceChanges = parse_body(body)?;
            found(resource, store.update_attendance(id, changes).await?)?
        }
        Resource::Marks => {
            let changes: MarksChanges = parse_body(body)?;
            found(resource, store.update_marks(id, changes).await?)?
        }
    };

    tracing::info!("{} updated {} {}", admin.email, resource.name(), id);
    Ok(ApiResponse::new(StatusCode::OK.as_u16(), record, "Record updated"))
}

/// Delete a record
///
/// Deleting a user removes its profiles; deleting a student removes its
/// attendance and marks.
pub async fn delete_record(
    State(state): State<AppState>,
    AuthUser(admin): AuthUser,
    Path((segment, id)): Path<(String, String)>,
) -> Result<ApiResponse<Value>, BackendError> {
    let resource = resource(&segment)?;
    let id = record_id(&id)?;
    let store = state.store.as_ref();

    let deleted = match resource {
        Resource::Users => store.delete_user(id).await?,
        Resource::Students => store.delete_student(id).await?,
        Resource::Teachers => store.delete_teacher(id).await?,
        Resource::Attendance => store.delete_attendance(id).await?,
        Resource::Marks => store.delete_marks(id).await?,
    };
    if !deleted {
        return Err(BackendError::not_found("Record"));
    }

    tracing::info!("{} deleted {} {}", admin.email, resource.name(), id);
    Ok(ApiResponse::new(
        StatusCode::OK.as_u16(),
        json!({ "id": id }),
        "Record deleted",
    ))
}
