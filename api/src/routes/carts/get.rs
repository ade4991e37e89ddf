use axum::{
    Extension, Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::cart_item::Model as CartItemModel;
use serde::Deserialize;
use util::state::AppState;

use crate::auth::claims::AuthUser;
use crate::response::ApiError;

#[derive(Debug, Deserialize)]
pub struct ListCartQuery {
    pub email: Option<String>,
}

/// GET /carts?email=
///
/// List the cart items belonging to `email`, newest first. The credential
/// subject must match the queried email. Omitting the email yields an
/// empty list, mirroring the system this replaces.
///
/// ### Responses
///
/// - `200 OK` — JSON array of cart items
/// - `401 Unauthorized` — missing or invalid JWT
/// - `403 Forbidden` — credential subject differs from the queried email
/// ```json
/// { "error": true, "message": "forbidden access" }
/// ```
/// - `500 Internal Server Error` — database error
pub async fn list_cart(
    State(app_state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Query(query): Query<ListCartQuery>,
) -> Response {
    let Some(email) = query.email else {
        return Json(Vec::<CartItemModel>::new()).into_response();
    };

    if user.0.sub != email {
        return (
            StatusCode::FORBIDDEN,
            Json(ApiError::new("forbidden access")),
        )
            .into_response();
    }

    match CartItemModel::list_for_user(app_state.db(), &email).await {
        Ok(items) => Json(items).into_response(),
        Err(e) => {
            tracing::error!(error = %e, email, "DB error while listing cart");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::new("internal server error")),
            )
                .into_response()
        }
    }
}
