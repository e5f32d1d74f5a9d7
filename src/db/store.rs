//! The event store capability and its SQLite implementation.

use crate::db::pool::{DbPool, StoreConfig};
use crate::db::queries::{load_events, load_sources};
use crate::errors::AppResult;
use crate::models::event::{Event, EventFilter};

/// Read access to script-execution events.
///
/// Implementations surface failures unchanged; callers never retry.
pub trait EventStore: Send + Sync {
    /// Distinct source identifiers, in no particular order.
    fn fetch_sources(&self) -> AppResult<Vec<String>>;

    /// Events matching every provided predicate, ascending by `start_time`.
    fn fetch_events(&self, filter: &EventFilter) -> AppResult<Vec<Event>>;
}

/// Opens one connection per call from an explicit [`StoreConfig`].
#[derive(Debug, Clone)]
pub struct SqliteStore {
    cfg: StoreConfig,
}

impl SqliteStore {
    pub fn new(cfg: StoreConfig) -> Self {
        Self { cfg }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.cfg
    }
}

impl EventStore for SqliteStore {
    fn fetch_sources(&self) -> AppResult<Vec<String>> {
        let pool = DbPool::open(&self.cfg)?;
        let sources = pool.with_conn(load_sources)?;
        tracing::debug!(count = sources.len(), "fetched sources");
        Ok(sources)
    }

    fn fetch_events(&self, filter: &EventFilter) -> AppResult<Vec<Event>> {
        let pool = DbPool::open(&self.cfg)?;
        let events = pool.with_conn(|conn| load_events(conn, filter))?;
        tracing::debug!(
            source = filter.source_id.as_deref().unwrap_or("all"),
            date = ?filter.date,
            count = events.len(),
            "fetched events"
        );
        Ok(events)
    }
}
