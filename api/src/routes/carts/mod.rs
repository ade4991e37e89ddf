//! # Carts Routes Module
//!
//! Defines and wires up routes for the `/api/carts` endpoint group.
//!
//! ## Structure
//! - `get.rs` — GET handlers (list a user's cart)
//! - `post.rs` — POST handlers (add a class to the cart)
//! - `delete.rs` — DELETE handlers (remove a cart item)
//!
//! ## Middleware
//! The whole group sits behind `allow_authenticated` (applied in the
//! parent router). The listing additionally requires the queried email to
//! match the credential's subject.

use axum::{
    Router,
    routing::{delete, get, post},
};
use util::state::AppState;

use delete::delete_cart_item;
use get::list_cart;
use post::add_to_cart;

pub mod delete;
pub mod get;
pub mod post;

/// Builds the `/carts` route group, mapping HTTP methods to handlers.
///
/// - `GET /carts?email=` → `list_cart`
/// - `POST /carts` → `add_to_cart`
/// - `DELETE /carts/{cart_id}` → `delete_cart_item`
pub fn carts_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_cart))
        .route("/", post(add_to_cart))
        .route("/{cart_id}", delete(delete_cart_item))
}
