use crate::models::event::Event;
use serde::Serialize;

/// Flat, text-only view of an event for CSV / JSON output.
/// Field order is the CSV column order.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct EventExport {
    pub source_id: String,
    pub script_path: String,
    pub start_time: String,
    pub end_time: String,
    pub duration: String,
}

impl From<&Event> for EventExport {
    fn from(ev: &Event) -> Self {
        Self {
            source_id: ev.source_id.clone(),
            script_path: ev.script_path.clone(),
            start_time: ev.start_str(),
            end_time: ev.end_str(),
            duration: ev.duration().to_string(),
        }
    }
}

/// Column names, in output order.
pub fn get_headers() -> Vec<&'static str> {
    vec![
        "source_id",
        "script_path",
        "start_time",
        "end_time",
        "duration",
    ]
}

pub(crate) fn events_to_export(events: &[Event]) -> Vec<EventExport> {
    events.iter().map(EventExport::from).collect()
}
