use crate::config::Config;
use crate::db::store::SqliteStore;
use crate::errors::{AppError, AppResult};
use crate::web::{self, AppState};
use std::sync::Arc;

/// Handle `serve` (and the bare invocation): run the dashboard until interrupted.
pub fn handle(bind: Option<&str>, cfg: &Config) -> AppResult<()> {
    web::init_tracing();

    let bind = bind.unwrap_or(cfg.bind.as_str()).to_string();
    let store_cfg = cfg.store_config();
    tracing::info!(database = %store_cfg.database.display(), "using event store");

    let state = AppState::new(Arc::new(SqliteStore::new(store_cfg)));

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| AppError::Server(format!("failed to start runtime: {e}")))?;

    runtime.block_on(web::serve(&bind, state))
}
