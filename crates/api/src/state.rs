//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::MySqlPool;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like the database pool. Configuration is consumed
/// at startup and doesn't travel with requests.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    pool: MySqlPool,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            inner: Arc::new(AppStateInner { pool }),
        }
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &MySqlPool {
        &self.inner.pool
    }
}
