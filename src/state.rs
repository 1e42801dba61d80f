//! Shared state handed to every command handler.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::cache::SettingsCache;

/// Resources shared across all interactions.
///
/// Cheap to clone: the database connection is a pool and the cache is reference
/// counted, so clones share both.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,

    /// Guild settings cache read by the role guard and invalidated by settings writes.
    pub settings_cache: Arc<dyn SettingsCache>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, settings_cache: Arc<dyn SettingsCache>) -> Self {
        Self { db, settings_cache }
    }
}
