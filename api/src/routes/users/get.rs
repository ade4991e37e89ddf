use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::user::{Entity as UserEntity, Model as UserModel, Role};
use sea_orm::EntityTrait;
use serde_json::json;
use util::state::AppState;

use crate::auth::claims::AuthUser;
use crate::response::ApiError;

/// GET /users
///
/// Retrieve all user records. Requires admin privileges (enforced by the
/// `allow_admin` guard on this route).
///
/// ### Responses
///
/// - `200 OK` — JSON array of user records
/// - `401 Unauthorized` — missing or invalid JWT
/// - `403 Forbidden` — authenticated but not an admin
/// - `500 Internal Server Error` — database error
pub async fn list_users(State(app_state): State<AppState>) -> Response {
    let db = app_state.db();

    match UserEntity::find().all(db).await {
        Ok(users) => Json(users).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "DB error while listing users");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::new("internal server error")),
            )
                .into_response()
        }
    }
}

/// Shared body of the two role query endpoints.
///
/// The credential must belong to the email being queried; a mismatch is
/// forbidden. Absent records report `false` rather than 404.
async fn check_role(
    app_state: AppState,
    user: AuthUser,
    email: String,
    role: Role,
    key: &str,
) -> Response {
    if user.0.sub != email {
        return (
            StatusCode::FORBIDDEN,
            Json(ApiError::new("forbidden access")),
        )
            .into_response();
    }

    match UserModel::has_role(app_state.db(), &email, role).await {
        Ok(matches) => Json(json!({ key: matches })).into_response(),
        Err(e) => {
            tracing::error!(error = %e, email, "DB error while checking role");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::new("internal server error")),
            )
                .into_response()
        }
    }
}

/// GET /users/admin/{email}
///
/// Report whether the given email currently holds the `admin` role.
/// Requires a valid credential whose subject equals `{email}`.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// { "admin": true }
/// ```
/// - `401 Unauthorized` — missing or invalid JWT
/// - `403 Forbidden` — credential subject differs from the queried email
/// ```json
/// { "error": true, "message": "forbidden access" }
/// ```
pub async fn check_admin(
    State(app_state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(email): Path<String>,
) -> Response {
    check_role(app_state, user, email, Role::Admin, "admin").await
}

/// GET /users/instructor/{email}
///
/// Report whether the given email currently holds the `instructor` role.
/// Requires a valid credential whose subject equals `{email}`.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// { "instructor": false }
/// ```
/// - `401 Unauthorized` — missing or invalid JWT
/// - `403 Forbidden` — credential subject differs from the queried email
pub async fn check_instructor(
    State(app_state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(email): Path<String>,
) -> Response {
    check_role(app_state, user, email, Role::Instructor, "instructor").await
}
