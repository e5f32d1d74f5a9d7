use crate::errors::{AppError, AppResult};
use crate::models::event::{Event, EventFilter};
use crate::utils::date::format_date;
use crate::utils::time::parse_timestamp;
use chrono::NaiveDateTime;
use rusqlite::{Connection, Result, Row};

pub fn load_sources(conn: &Connection) -> AppResult<Vec<String>> {
    let mut stmt = conn.prepare("SELECT DISTINCT ip FROM script_event")?;

    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Build the event query for a filter: one `AND` clause per provided
/// predicate, bound positionally, oldest start first.
pub fn build_events_query(filter: &EventFilter) -> (String, Vec<String>) {
    let mut sql = String::from(
        "SELECT ip, script_path, start_time, end_time
         FROM script_event
         WHERE 1=1",
    );
    let mut params = Vec::new();

    if let Some(ip) = &filter.source_id {
        sql.push_str(" AND ip = ?");
        params.push(ip.clone());
    }
    if let Some(date) = &filter.date {
        sql.push_str(" AND date(start_time) = ?");
        params.push(format_date(date));
    }

    sql.push_str(" ORDER BY start_time ASC");
    (sql, params)
}

pub fn load_events(conn: &Connection, filter: &EventFilter) -> AppResult<Vec<Event>> {
    let (sql, params) = build_events_query(filter);

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(rusqlite::params_from_iter(params.iter()), map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }

    // text ordering breaks if the table mixes ' ' and 'T' separators
    out.sort_by_key(|e| e.start_time);
    Ok(out)
}

pub fn map_row(row: &Row) -> Result<Event> {
    let start_str: String = row.get("start_time")?;
    let end_str: Option<String> = row.get("end_time")?;

    let start_time = parse_column(2, &start_str)?;
    let end_time = match end_str.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(s) => Some(parse_column(3, s)?),
    };

    Ok(Event {
        source_id: row.get("ip")?,
        script_path: row.get("script_path")?,
        start_time,
        end_time,
    })
}

fn parse_column(idx: usize, raw: &str) -> Result<NaiveDateTime> {
    parse_timestamp(raw).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTimestamp(raw.to_string())),
        )
    })
}
