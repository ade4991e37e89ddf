use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use db::models::{cart_item, payment};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use serde::Deserialize;
use serde_json::json;
use util::state::AppState;
use validator::Validate;

use crate::auth::claims::AuthUser;
use crate::response::ApiError;
use crate::services::stripe;
use common::format_validation_errors;

#[derive(Debug, Deserialize, Validate)]
pub struct PaymentIntentRequest {
    #[validate(range(min = 0.5, message = "price must be at least 0.50"))]
    pub price: f64,
}

/// POST /payments/create-payment-intent
///
/// Ask the payment provider for a payment intent covering `price` and
/// return its client secret for the frontend to confirm.
///
/// ### Request Body
/// ```json
/// { "price": 49.99 }
/// ```
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// { "client_secret": "pi_..._secret_..." }
/// ```
/// - `400 Bad Request` — validation failure
/// - `401 Unauthorized` — missing or invalid JWT
/// - `502 Bad Gateway` — payment provider unreachable or rejected the request
pub async fn create_payment_intent(
    Extension(_user): Extension<AuthUser>,
    Json(req): Json<PaymentIntentRequest>,
) -> Response {
    if let Err(validation_errors) = req.validate() {
        let error_message = format_validation_errors(&validation_errors);
        return (StatusCode::BAD_REQUEST, Json(ApiError::new(error_message))).into_response();
    }

    match stripe::create_payment_intent(req.price).await {
        Ok(intent) => Json(json!({ "client_secret": intent.client_secret })).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Payment provider request failed");
            (
                StatusCode::BAD_GATEWAY,
                Json(ApiError::new("payment provider error")),
            )
                .into_response()
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct RecordPaymentRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "transaction_id must not be empty"))]
    pub transaction_id: String,

    pub amount: f64,

    /// Classes covered by this payment.
    pub class_ids: Vec<i64>,

    /// Cart rows to clear once the payment is stored.
    pub cart_ids: Vec<i64>,
}

/// POST /payments
///
/// Record a completed payment and clear the paid-for cart items.
///
/// ### Request Body
/// ```json
/// {
///   "email": "user@example.com",
///   "transaction_id": "pi_123",
///   "amount": 49.99,
///   "class_ids": [7],
///   "cart_ids": [3]
/// }
/// ```
///
/// ### Responses
///
/// - `201 Created`
/// ```json
/// { "payment": { ... }, "deleted_cart_items": 1 }
/// ```
/// - `400 Bad Request` — validation failure
/// - `401 Unauthorized` — missing or invalid JWT
/// - `500 Internal Server Error` — database error
pub async fn record_payment(
    State(app_state): State<AppState>,
    Extension(_user): Extension<AuthUser>,
    Json(req): Json<RecordPaymentRequest>,
) -> Response {
    if let Err(validation_errors) = req.validate() {
        let error_message = format_validation_errors(&validation_errors);
        return (StatusCode::BAD_REQUEST, Json(ApiError::new(error_message))).into_response();
    }

    let db = app_state.db();

    let stored = payment::ActiveModel {
        user_email: Set(req.email),
        transaction_id: Set(req.transaction_id),
        amount: Set(req.amount),
        class_ids: Set(json!(req.class_ids)),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await;

    let stored = match stored {
        Ok(p) => p,
        Err(e) => {
            tracing::error!(error = %e, "DB error while recording payment");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::new("internal server error")),
            )
                .into_response();
        }
    };

    let deleted = match cart_item::Entity::delete_many()
        .filter(cart_item::Column::Id.is_in(req.cart_ids))
        .exec(db)
        .await
    {
        Ok(res) => res.rows_affected,
        Err(e) => {
            // The payment row is already stored; report it and log the cleanup failure.
            tracing::error!(error = %e, payment_id = stored.id, "DB error while clearing paid cart items");
            0
        }
    };

    (
        StatusCode::CREATED,
        Json(json!({ "payment": stored, "deleted_cart_items": deleted })),
    )
        .into_response()
}
