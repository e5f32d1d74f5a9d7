//! SQLite connection wrapper. Every store operation opens its own
//! connection and drops it before returning; nothing is shared.

use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OpenFlags};
use std::path::PathBuf;

/// Everything needed to reach the event store, resolved once from the
/// application configuration and passed in explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub database: PathBuf,
}

impl StoreConfig {
    pub fn new(database: impl Into<PathBuf>) -> Self {
        Self {
            database: database.into(),
        }
    }

    fn ensure_configured(&self) -> AppResult<()> {
        // SQLite would silently open a private temp database for ""
        if self.database.as_os_str().is_empty() {
            return Err(AppError::Config("no database configured".into()));
        }
        Ok(())
    }
}

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open an existing database. A missing file is a connection failure.
    pub fn open(cfg: &StoreConfig) -> AppResult<Self> {
        cfg.ensure_configured()?;
        let conn = Connection::open_with_flags(
            &cfg.database,
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_URI
                | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        Ok(Self { conn })
    }

    /// Open the database, creating the file if needed. Only `init` uses this.
    pub fn create(cfg: &StoreConfig) -> AppResult<Self> {
        cfg.ensure_configured()?;
        if let Some(parent) = cfg.database.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(&cfg.database)?;
        Ok(Self { conn })
    }

    /// Helper to execute a closure with a connection reference.
    pub fn with_conn<F, T>(&self, func: F) -> AppResult<T>
    where
        F: FnOnce(&Connection) -> AppResult<T>,
    {
        func(&self.conn)
    }
}
