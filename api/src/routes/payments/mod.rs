//! # Payments Routes Module
//!
//! Defines and wires up routes for the `/api/payments` endpoint group.
//!
//! ## Structure
//! - `get.rs` — GET handlers (list a user's payment history)
//! - `post.rs` — POST handlers (payment intents, payment records)
//!
//! ## Middleware
//! The whole group sits behind `allow_authenticated` (applied in the
//! parent router). The listing additionally requires the queried email to
//! match the credential's subject.

use axum::{
    Router,
    routing::{get, post},
};
use util::state::AppState;

use get::list_payments;
use post::{create_payment_intent, record_payment};

pub mod get;
pub mod post;

/// Builds the `/payments` route group, mapping HTTP methods to handlers.
///
/// - `GET /payments?email=` → `list_payments`
/// - `POST /payments` → `record_payment`
/// - `POST /payments/create-payment-intent` → `create_payment_intent`
pub fn payments_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_payments))
        .route("/", post(record_payment))
        .route("/create-payment-intent", post(create_payment_intent))
}
