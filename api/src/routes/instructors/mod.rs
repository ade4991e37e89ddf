//! # Instructors Routes Module
//!
//! Defines and wires up routes for the `/api/instructors` endpoint group.
//!
//! ## Structure
//! - `get.rs` — GET handlers (public instructor listing)

use axum::{Router, routing::get};
use get::list_instructors;
use util::state::AppState;

pub mod get;

/// Builds the `/instructors` route group.
///
/// - `GET /instructors` → `list_instructors` (public)
pub fn instructors_routes() -> Router<AppState> {
    Router::new().route("/", get(list_instructors))
}
