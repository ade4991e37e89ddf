//! # Auth Routes Module
//!
//! Defines and wires up routes for the `/api/auth` endpoint group.
//!
//! ## Structure
//! - `post.rs` — POST handlers (token issuance)

use axum::{Router, routing::post};
use post::issue_token;
use util::state::AppState;

pub mod post;

/// Builds the `/auth` route group.
///
/// - `POST /auth/token` → `issue_token` (public)
pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/token", post(issue_token))
}
