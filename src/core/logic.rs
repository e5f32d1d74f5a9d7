use crate::core::calculator::{summary, timeline};
use crate::db::store::EventStore;
use crate::errors::AppResult;
use crate::models::{Event, EventFilter, SlotState, SlotStatus, Summary};
use chrono::NaiveDate;

/// Everything one render pass shows.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub sources: Vec<String>,
    pub source_id: Option<String>,
    pub date: Option<NaiveDate>,
    pub summary: Summary,
    pub slots: Vec<SlotStatus>,
    pub events: Vec<Event>,
}

pub struct Core;

impl Core {
    /// Full-day occupancy, then the status post-filter.
    pub fn build_calendar(events: &[Event], accepted: &[SlotState]) -> Vec<SlotStatus> {
        let slots = timeline::generate_time_slots();
        let mapped = timeline::map_events_to_slots(events, &slots);
        timeline::filter_by_status(mapped, accepted)
    }

    /// One fetch-then-aggregate pass. Any store failure aborts the pass.
    pub fn build_dashboard(
        store: &dyn EventStore,
        filter: &EventFilter,
        accepted: &[SlotState],
    ) -> AppResult<Dashboard> {
        let sources = store.fetch_sources()?;
        let events = store.fetch_events(filter)?;

        let summary = summary::summarize(&events);
        let slots = Self::build_calendar(&events, accepted);

        Ok(Dashboard {
            sources,
            source_id: filter.source_id.clone(),
            date: filter.date,
            summary,
            slots,
            events,
        })
    }
}
