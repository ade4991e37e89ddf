use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::instructor::Entity as InstructorEntity;
use sea_orm::EntityTrait;
use util::state::AppState;

use crate::response::ApiError;

/// GET /instructors
///
/// Retrieve the full instructor listing. Public.
///
/// ### Responses
///
/// - `200 OK` — JSON array of instructor records
/// - `500 Internal Server Error` — database error
pub async fn list_instructors(State(app_state): State<AppState>) -> Response {
    let db = app_state.db();

    match InstructorEntity::find().all(db).await {
        Ok(instructors) => Json(instructors).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "DB error while listing instructors");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::new("internal server error")),
            )
                .into_response()
        }
    }
}
