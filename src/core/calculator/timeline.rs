//! Hourly occupancy of a day.
//!
//! An event occupies exactly one slot: the hour its `start_time` falls in.
//! It is not spread over later hours even when it is still running then.

use crate::models::event::Event;
use crate::models::slot::{SlotState, SlotStatus, TimeSlot};
use chrono::{NaiveTime, Timelike};

pub const SLOTS_PER_DAY: u32 = 24;

/// The 24 hour slots of a day, `00:00` through `23:00`, in order.
pub fn generate_time_slots() -> Vec<TimeSlot> {
    (0..SLOTS_PER_DAY)
        .filter_map(|hour| {
            Some(TimeSlot {
                start: NaiveTime::from_hms_opt(hour, 0, 0)?,
                end: NaiveTime::from_hms_opt(hour, 59, 0)?,
            })
        })
        .collect()
}

/// Classify every slot as `Running` or `Free`.
///
/// Output has one entry per input slot, in slot order. Each entry lists the
/// scripts started in that hour in the order the events were supplied.
pub fn map_events_to_slots(events: &[Event], slots: &[TimeSlot]) -> Vec<SlotStatus> {
    slots
        .iter()
        .map(|slot| {
            let scripts: Vec<String> = events
                .iter()
                .filter(|e| e.start_time.hour() == slot.hour())
                .map(|e| e.script_path.clone())
                .collect();

            let status = if scripts.is_empty() {
                SlotState::Free
            } else {
                SlotState::Running
            };

            SlotStatus {
                label: slot.label(),
                status,
                scripts,
            }
        })
        .collect()
}

/// Keep only the slots whose status is accepted. Runs after aggregation,
/// so the mapping above always sees the whole day.
pub fn filter_by_status(slots: Vec<SlotStatus>, accepted: &[SlotState]) -> Vec<SlotStatus> {
    slots
        .into_iter()
        .filter(|s| accepted.contains(&s.status))
        .collect()
}
