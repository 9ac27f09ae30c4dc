//! Application state management.

use crate::db::DatabasePool;
use crate::repository::{InMemoryShareRepository, PgShareRepository, ShareRepository};
use crate::service::{ShareService, ShareServiceImpl};
use std::sync::Arc;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Share service the handlers delegate to.
    pub shares: Arc<dyn ShareService>,
}

impl AppState {
    /// Creates application state around an existing service.
    #[must_use]
    pub fn new(shares: Arc<dyn ShareService>) -> Self {
        Self { shares }
    }

    /// Creates application state backed by an in-memory store.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::with_repository(Arc::new(InMemoryShareRepository::new()))
    }

    /// Creates application state backed by PostgreSQL.
    #[must_use]
    pub fn with_database(db: DatabasePool) -> Self {
        Self::with_repository(Arc::new(PgShareRepository::new(db)))
    }

    /// Creates application state over the given repository.
    #[must_use]
    pub fn with_repository(repo: Arc<dyn ShareRepository>) -> Self {
        Self::new(Arc::new(ShareServiceImpl::new(repo)))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::in_memory()
    }
}
