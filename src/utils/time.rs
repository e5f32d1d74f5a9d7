//! Timestamp utilities: store text <-> NaiveDateTime.

use chrono::NaiveDateTime;

/// Formats accepted when reading `start_time` / `end_time` from the store.
const TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}

pub fn format_optional_timestamp(ts: Option<&NaiveDateTime>) -> String {
    ts.map(format_timestamp).unwrap_or_default()
}
