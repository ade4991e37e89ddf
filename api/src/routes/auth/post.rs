use axum::{Json, http::StatusCode, response::{IntoResponse, Response}};
use serde::Deserialize;
use serde_json::json;
use validator::Validate;

use crate::auth::generate_jwt;
use crate::response::ApiError;
use common::format_validation_errors;

#[derive(Debug, Deserialize, Validate)]
pub struct TokenRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub name: Option<String>,
}

/// POST /auth/token
///
/// Issue a signed, time-limited (1-hour) credential for the supplied
/// identity payload.
///
/// Note: this endpoint performs no authorization of its own — any caller
/// may request a token for any email it supplies. This mirrors the
/// behavior of the system it replaces and is a known weakness.
///
/// ### Request Body
/// ```json
/// { "email": "user@example.com", "name": "User" }
/// ```
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// { "token": "jwt_token_here", "expires_at": "2025-08-01T11:00:00+00:00" }
/// ```
///
/// - `400 Bad Request` (validation failure)
/// ```json
/// { "error": true, "message": "Invalid email format" }
/// ```
pub async fn issue_token(Json(req): Json<TokenRequest>) -> Response {
    if let Err(validation_errors) = req.validate() {
        let error_message = format_validation_errors(&validation_errors);
        return (StatusCode::BAD_REQUEST, Json(ApiError::new(error_message))).into_response();
    }

    let (token, expires_at) = generate_jwt(&req.email);

    Json(json!({ "token": token, "expires_at": expires_at })).into_response()
}
