use axum::{
    Extension, Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::payment::Model as PaymentModel;
use serde::Deserialize;
use util::state::AppState;

use crate::auth::claims::AuthUser;
use crate::response::ApiError;

#[derive(Debug, Deserialize)]
pub struct ListPaymentsQuery {
    pub email: Option<String>,
}

/// GET /payments?email=
///
/// List the payment records belonging to `email`, newest first. The
/// credential subject must match the queried email.
///
/// ### Responses
///
/// - `200 OK` — JSON array of payment records
/// - `401 Unauthorized` — missing or invalid JWT
/// - `403 Forbidden` — credential subject differs from the queried email
/// - `500 Internal Server Error` — database error
pub async fn list_payments(
    State(app_state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Query(query): Query<ListPaymentsQuery>,
) -> Response {
    let Some(email) = query.email else {
        return Json(Vec::<PaymentModel>::new()).into_response();
    };

    if user.0.sub != email {
        return (
            StatusCode::FORBIDDEN,
            Json(ApiError::new("forbidden access")),
        )
            .into_response();
    }

    match PaymentModel::list_for_user(app_state.db(), &email).await {
        Ok(payments) => Json(payments).into_response(),
        Err(e) => {
            tracing::error!(error = %e, email, "DB error while listing payments");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::new("internal server error")),
            )
                .into_response()
        }
    }
}
