use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::class::Entity as ClassEntity;
use sea_orm::EntityTrait;
use util::state::AppState;

use crate::response::ApiError;

/// GET /classes
///
/// Retrieve the full class listing. Public.
///
/// ### Responses
///
/// - `200 OK` — JSON array of class records
/// - `500 Internal Server Error` — database error
pub async fn list_classes(State(app_state): State<AppState>) -> Response {
    let db = app_state.db();

    match ClassEntity::find().all(db).await {
        Ok(classes) => Json(classes).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "DB error while listing classes");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::new("internal server error")),
            )
                .into_response()
        }
    }
}
