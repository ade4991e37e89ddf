use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use db::models::cart_item;
use sea_orm::{ActiveModelTrait, Set};
use serde::Deserialize;
use util::state::AppState;
use validator::Validate;

use crate::response::ApiError;
use common::format_validation_errors;

#[derive(Debug, Deserialize, Validate)]
pub struct AddToCartRequest {
    #[validate(range(min = 1, message = "class_id must be a positive integer"))]
    pub class_id: i64,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}

/// POST /carts
///
/// Add a class to a user's cart.
///
/// ### Request Body
/// ```json
/// { "class_id": 7, "email": "user@example.com" }
/// ```
///
/// ### Responses
///
/// - `201 Created` — the stored cart item
/// - `400 Bad Request` — validation failure
/// - `401 Unauthorized` — missing or invalid JWT
/// - `500 Internal Server Error` — database error
pub async fn add_to_cart(
    State(app_state): State<AppState>,
    Json(req): Json<AddToCartRequest>,
) -> Response {
    if let Err(validation_errors) = req.validate() {
        let error_message = format_validation_errors(&validation_errors);
        return (StatusCode::BAD_REQUEST, Json(ApiError::new(error_message))).into_response();
    }

    let item = cart_item::ActiveModel {
        class_id: Set(req.class_id),
        user_email: Set(req.email),
        created_at: Set(Utc::now()),
        ..Default::default()
    };

    match item.insert(app_state.db()).await {
        Ok(stored) => (StatusCode::CREATED, Json(stored)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "DB error while adding to cart");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::new("internal server error")),
            )
                .into_response()
        }
    }
}
