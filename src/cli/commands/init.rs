use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command: create the database file if needed and the
/// `script_event` schema.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let store_cfg = cfg.store_config();

    info(format!(
        "Initializing scriptboard database: {}",
        store_cfg.database.display()
    ));

    let pool = DbPool::create(&store_cfg)?;
    pool.with_conn(init_db)?;

    success(format!(
        "Database initialized at {}",
        store_cfg.database.display()
    ));
    Ok(())
}
