use crate::cli::parser::Commands;
use crate::core::logic::Core;
use crate::db::store::EventStore;
use crate::errors::AppResult;
use crate::models::{EventFilter, SlotState, SlotStatus};
use crate::ui::messages::{header, status_style};
use crate::utils::date::{format_date, parse_optional_date, today};
use crate::utils::formatting::pad_right;

const LABEL_W: usize = 9;
const STATUS_W: usize = 8;

pub fn handle(cmd: &Commands, store: &dyn EventStore) -> AppResult<()> {
    if let Commands::Calendar { ip, date, status } = cmd {
        let day = parse_optional_date(date.as_deref())?.unwrap_or_else(today);
        let accepted = parse_statuses(status)?;

        let filter = EventFilter::new(ip.clone(), Some(day));
        let events = store.fetch_events(&filter)?;
        let slots = Core::build_calendar(&events, &accepted);

        let source = filter.source_id.as_deref().unwrap_or("all sources");
        header(format!("Daily System Activity: {} ({source})", format_date(&day)));
        print_slots(&slots);
    }
    Ok(())
}

/// No `--status` means both.
fn parse_statuses(raw: &[String]) -> AppResult<Vec<SlotState>> {
    if raw.is_empty() {
        return Ok(SlotState::ALL.to_vec());
    }
    raw.iter().map(|s| s.parse()).collect()
}

fn print_slots(slots: &[SlotStatus]) {
    println!(
        "{} {} Programs",
        pad_right("Time Slot", LABEL_W),
        pad_right("Status", STATUS_W)
    );

    for slot in slots {
        // pad before painting: ANSI codes have no display width
        let status = status_style(slot.status).paint(pad_right(slot.status.as_str(), STATUS_W));
        let programs = if slot.scripts.is_empty() {
            slot.scripts_display()
        } else {
            slot.scripts.join(", ")
        };
        println!("{} {} {}", pad_right(&slot.label, LABEL_W), status, programs);
    }
}
