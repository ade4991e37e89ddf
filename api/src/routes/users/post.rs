use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::user::Model as UserModel;
use serde::Deserialize;
use util::state::AppState;
use validator::Validate;

use crate::response::ApiError;
use common::format_validation_errors;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}

/// POST /users
///
/// Upsert a user record at login time. New records start with the `none`
/// role; an existing record is returned untouched.
///
/// ### Request Body
/// ```json
/// { "name": "User", "email": "user@example.com" }
/// ```
///
/// ### Responses
///
/// - `201 Created` — the new user record
/// - `200 OK` — the pre-existing record for this email
/// - `400 Bad Request` — validation failure
/// - `500 Internal Server Error` — database error
pub async fn create_user(
    State(app_state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Response {
    if let Err(validation_errors) = req.validate() {
        let error_message = format_validation_errors(&validation_errors);
        return (StatusCode::BAD_REQUEST, Json(ApiError::new(error_message))).into_response();
    }

    let db = app_state.db();

    match UserModel::create_if_absent(db, &req.name, &req.email).await {
        Ok((user, true)) => (StatusCode::CREATED, Json(user)).into_response(),
        Ok((user, false)) => Json(user).into_response(),
        Err(e) => {
            tracing::error!(error = %e, email = req.email, "DB error while creating user");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::new("internal server error")),
            )
                .into_response()
        }
    }
}
