use super::duration::EventDuration;
use crate::utils::time::{format_optional_timestamp, format_timestamp};
use chrono::{NaiveDate, NaiveDateTime};

/// One recorded script execution, as read from `script_event`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub source_id: String,               // ⇔ script_event.ip
    pub script_path: String,             // ⇔ script_event.script_path
    pub start_time: NaiveDateTime,       // ⇔ script_event.start_time
    pub end_time: Option<NaiveDateTime>, // ⇔ script_event.end_time (NULL = still running)
}

impl Event {
    pub fn new(
        source_id: impl Into<String>,
        script_path: impl Into<String>,
        start_time: NaiveDateTime,
        end_time: Option<NaiveDateTime>,
    ) -> Self {
        Self {
            source_id: source_id.into(),
            script_path: script_path.into(),
            start_time,
            end_time,
        }
    }

    /// `end_time - start_time`, or `Running` when there is no end yet.
    ///
    /// An end before the start is not rejected: the negative span is
    /// returned as-is.
    pub fn duration(&self) -> EventDuration {
        match self.end_time {
            Some(end) => EventDuration::Finished(end - self.start_time),
            None => EventDuration::Running,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.end_time.is_some()
    }

    pub fn start_str(&self) -> String {
        format_timestamp(&self.start_time)
    }

    pub fn end_str(&self) -> String {
        format_optional_timestamp(self.end_time.as_ref())
    }
}

/// Optional predicates for an event fetch. `None` leaves the dimension unfiltered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFilter {
    pub source_id: Option<String>,
    pub date: Option<NaiveDate>,
}

impl EventFilter {
    pub fn new(source_id: Option<String>, date: Option<NaiveDate>) -> Self {
        // an empty selector means "all sources"
        let source_id = source_id.filter(|s| !s.trim().is_empty());
        Self { source_id, date }
    }

    /// In-memory version of the store predicate.
    pub fn matches(&self, ev: &Event) -> bool {
        let source_ok = self
            .source_id
            .as_deref()
            .is_none_or(|s| ev.source_id == s);
        let date_ok = self.date.is_none_or(|d| ev.start_time.date() == d);
        source_ok && date_ok
    }
}
