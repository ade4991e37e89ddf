//! Application state container shared across Axum route handlers and services.
//!
//! This struct holds the single long-lived database connection. It is cloned
//! cheaply (the connection is an internal pool handle) and passed into route
//! handlers via Axum's `State<T>` extractor, rather than living as an
//! ambient global.

use sea_orm::DatabaseConnection;

/// Central application state shared across the server.
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
}

impl AppState {
    /// Creates a new `AppState` with the given database connection.
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns a shared reference to the internal `DatabaseConnection`.
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}
