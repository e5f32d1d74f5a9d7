use crate::utils::format_duration;
use chrono::Duration;
use serde::{Serialize, Serializer};
use std::fmt;

/// Derived run time of an event: a finished span, or still running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventDuration {
    Finished(Duration),
    Running,
}

impl EventDuration {
    pub const RUNNING_LABEL: &'static str = "Running";

    pub fn is_running(&self) -> bool {
        matches!(self, EventDuration::Running)
    }
}

impl fmt::Display for EventDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventDuration::Finished(d) => f.write_str(&format_duration(*d)),
            EventDuration::Running => f.write_str(Self::RUNNING_LABEL),
        }
    }
}

impl Serialize for EventDuration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
