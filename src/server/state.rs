//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

/// Application state containing shared resources.
///
/// Both fields are cheap to clone: `DatabaseConnection` is a connection pool whose
/// clones share the pool.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Bearer token required for mutating endpoints.
    ///
    /// `None` leaves every endpoint open.
    pub api_token: Option<String>,
}

impl AppState {
    /// Creates a new application state.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `api_token` - Token guarding mutating endpoints, if any
    pub fn new(db: DatabaseConnection, api_token: Option<String>) -> Self {
        Self { db, api_token }
    }
}
