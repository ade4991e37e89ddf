//! # Classes Routes Module
//!
//! Defines and wires up routes for the `/api/classes` endpoint group.
//!
//! ## Structure
//! - `get.rs` — GET handlers (public class listing)

use axum::{Router, routing::get};
use get::list_classes;
use util::state::AppState;

pub mod get;

/// Builds the `/classes` route group.
///
/// - `GET /classes` → `list_classes` (public)
pub fn classes_routes() -> Router<AppState> {
    Router::new().route("/", get(list_classes))
}
