use crate::db::store::EventStore;
use crate::errors::{AppError, AppResult};
use std::sync::Arc;

/// Shared, immutable handler state. Nothing here changes between requests.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn EventStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn EventStore>) -> Self {
        Self { store }
    }

    /// Run a store operation on the blocking pool; rusqlite calls block.
    pub async fn with_store<T, F>(&self, func: F) -> AppResult<T>
    where
        F: FnOnce(&dyn EventStore) -> AppResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let store = Arc::clone(&self.store);
        tokio::task::spawn_blocking(move || func(store.as_ref()))
            .await
            .map_err(|e| AppError::Server(format!("store task failed: {e}")))?
    }
}
