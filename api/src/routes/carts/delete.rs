use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::cart_item::Entity as CartItemEntity;
use sea_orm::EntityTrait;
use serde_json::json;
use util::state::AppState;

use crate::response::ApiError;

/// DELETE /carts/{cart_id}
///
/// Remove one cart item.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// { "deleted": true }
/// ```
/// (`deleted` is `false` when no row matched)
/// - `401 Unauthorized` — missing or invalid JWT
/// - `500 Internal Server Error` — database error
pub async fn delete_cart_item(
    State(app_state): State<AppState>,
    Path(cart_id): Path<i64>,
) -> Response {
    match CartItemEntity::delete_by_id(cart_id).exec(app_state.db()).await {
        Ok(res) => Json(json!({ "deleted": res.rows_affected > 0 })).into_response(),
        Err(e) => {
            tracing::error!(error = %e, cart_id, "DB error while deleting cart item");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::new("internal server error")),
            )
                .into_response()
        }
    }
}
