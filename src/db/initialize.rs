use crate::errors::AppResult;
use rusqlite::Connection;

/// Create the `script_event` table if it does not exist yet.
/// Safe to run against a database that already holds events.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS script_event (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            ip           TEXT NOT NULL,
            script_path  TEXT NOT NULL,
            start_time   TEXT NOT NULL,
            end_time     TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_script_event_start ON script_event(start_time);
        CREATE INDEX IF NOT EXISTS idx_script_event_ip ON script_event(ip);
        "#,
    )?;
    Ok(())
}
