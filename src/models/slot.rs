use chrono::NaiveTime;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

/// One of the 24 one-hour buckets of a day: `HH:00` .. `HH:59`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeSlot {
    pub fn hour(&self) -> u32 {
        chrono::Timelike::hour(&self.start)
    }

    pub fn label(&self) -> String {
        self.start.format("%H:%M").to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SlotState {
    Running,
    Free,
}

impl SlotState {
    pub const ALL: [SlotState; 2] = [SlotState::Running, SlotState::Free];

    pub fn as_str(&self) -> &'static str {
        match self {
            SlotState::Running => "Running",
            SlotState::Free => "Free",
        }
    }
}

impl fmt::Display for SlotState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SlotState {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "running" => Ok(SlotState::Running),
            "free" => Ok(SlotState::Free),
            _ => Err(AppError::InvalidStatus(s.to_string())),
        }
    }
}

/// Occupancy of one slot, derived from the fetched events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotStatus {
    pub label: String,
    pub status: SlotState,
    pub scripts: Vec<String>,
}

impl SlotStatus {
    /// Script list as shown in tables: one per line, or `None`.
    pub fn scripts_display(&self) -> String {
        if self.scripts.is_empty() {
            "None".to_string()
        } else {
            self.scripts.join("\n")
        }
    }
}
