//! HTTP route entry point for `/api/...`.
//!
//! This module defines all HTTP entry points under the `/api` namespace.
//! Routes are organized by domain (authentication, users, instructors,
//! classes, carts, payments), each protected via the appropriate access
//! control middleware.
//!
//! Route groups include:
//! - `/health` → Health check endpoint (public)
//! - `/auth` → Credential issuance (public)
//! - `/instructors`, `/classes` → Public catalog listings
//! - `/users` → User management (listing is admin-only; role queries are
//!   identity-matched)
//! - `/carts`, `/payments` → Authenticated user data

use crate::auth::guards::allow_authenticated;
use crate::routes::{
    auth::auth_routes, carts::carts_routes, classes::classes_routes, health::health_routes,
    instructors::instructors_routes, payments::payments_routes, users::users_routes,
};
use axum::{Router, middleware::from_fn};
use util::state::AppState;

pub mod auth;
pub mod carts;
pub mod classes;
pub mod health;
pub mod instructors;
pub mod payments;
pub mod users;

/// Builds the complete application router for all HTTP endpoints.
///
/// The returned router mounts all core API routes under their respective
/// base paths, with `AppState` already supplied.
///
/// # Route Structure:
/// - `/health` → Health check endpoint (no authentication required).
/// - `/auth` → Token issuance.
/// - `/instructors`, `/classes` → Public listings.
/// - `/users` → User records and role endpoints (see `users_routes`).
/// - `/carts` → Shopping-cart items (requires authentication).
/// - `/payments` → Payment records and payment intents (requires
///   authentication).
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest("/auth", auth_routes())
        .nest("/instructors", instructors_routes())
        .nest("/classes", classes_routes())
        .nest("/users", users_routes(app_state.clone()))
        .nest(
            "/carts",
            carts_routes().route_layer(from_fn(allow_authenticated)),
        )
        .nest(
            "/payments",
            payments_routes().route_layer(from_fn(allow_authenticated)),
        )
        .with_state(app_state)
}
