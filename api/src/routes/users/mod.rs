//! # Users Routes Module
//!
//! Defines and wires up routes for the `/api/users` endpoint group.
//!
//! ## Structure
//! - `get.rs` — GET handlers (admin-only listing, role queries)
//! - `post.rs` — POST handlers (login-time upsert)
//! - `patch.rs` — PATCH handlers (role mutations)
//!
//! ## Middleware
//! The listing route is protected by the `allow_admin` guard. The role
//! query routes authenticate via `allow_authenticated` and additionally
//! require the claimed subject to match the queried email. The role
//! mutation routes are deliberately unguarded, preserving the behavior of
//! the system this replaces.

use axum::{
    Router,
    middleware::{from_fn, from_fn_with_state},
    routing::{get, patch, post},
};
use util::state::AppState;

use crate::auth::guards::{allow_admin, allow_authenticated};
use get::{check_admin, check_instructor, list_users};
use patch::{make_admin, make_instructor};
use post::create_user;

pub mod get;
pub mod patch;
pub mod post;

/// Builds the `/users` route group, mapping HTTP methods to handlers.
///
/// - `GET /users` → `list_users` (admin only)
/// - `POST /users` → `create_user` (public, upsert on login)
/// - `GET /users/admin/{email}` → `check_admin` (authenticated, identity-matched)
/// - `GET /users/instructor/{email}` → `check_instructor` (authenticated, identity-matched)
/// - `PATCH /users/{user_id}/admin` → `make_admin` (unguarded)
/// - `PATCH /users/{user_id}/instructor` → `make_instructor` (unguarded)
pub fn users_routes(app_state: AppState) -> Router<AppState> {
    let admin_only = Router::new()
        .route("/", get(list_users))
        .route_layer(from_fn_with_state(app_state, allow_admin));

    let identity_matched = Router::new()
        .route("/admin/{email}", get(check_admin))
        .route("/instructor/{email}", get(check_instructor))
        .route_layer(from_fn(allow_authenticated));

    Router::new()
        .merge(admin_only)
        .merge(identity_matched)
        .route("/", post(create_user))
        .route("/{user_id}/admin", patch(make_admin))
        .route("/{user_id}/instructor", patch(make_instructor))
}
