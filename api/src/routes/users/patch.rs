use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::user::{Model as UserModel, Role};
use sea_orm::DbErr;
use util::state::AppState;

use crate::response::ApiError;

/// Shared body of the two role mutation endpoints.
async fn set_role(app_state: AppState, user_id: i64, role: Role) -> Response {
    match UserModel::set_role(app_state.db(), user_id, role).await {
        Ok(user) => Json(user).into_response(),
        Err(DbErr::RecordNotFound(_)) => (
            StatusCode::NOT_FOUND,
            Json(ApiError::new(format!("User {} not found", user_id))),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, user_id, %role, "DB error while setting role");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::new("internal server error")),
            )
                .into_response()
        }
    }
}

/// PATCH /users/{user_id}/admin
///
/// Set the record's role tag to `admin`.
///
/// Deliberately unguarded, preserving the behavior of the system this
/// replaces (collaborator surface, not part of the gate).
///
/// ### Responses
///
/// - `200 OK` — the updated user record
/// - `404 Not Found` — no record with that ID
/// - `500 Internal Server Error` — database error
pub async fn make_admin(
    State(app_state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Response {
    set_role(app_state, user_id, Role::Admin).await
}

/// PATCH /users/{user_id}/instructor
///
/// Set the record's role tag to `instructor`. Same contract as
/// `make_admin`.
pub async fn make_instructor(
    State(app_state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Response {
    set_role(app_state, user_id, Role::Instructor).await
}
