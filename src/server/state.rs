//! Application state shared across all request handlers.

use sea_orm::DatabaseConnection;

use crate::server::config::SharedSecret;

/// Shared resources cloned into every handler through Axum's state extraction.
#[derive(Clone)]
pub struct AppState {
    /// Connection pool; clones share the pool.
    pub db: DatabaseConnection,

    /// When set, the create endpoint requires a matching `secret`/`token` pair.
    pub shared_secret: Option<SharedSecret>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, shared_secret: Option<SharedSecret>) -> Self {
        Self { db, shared_secret }
    }
}
