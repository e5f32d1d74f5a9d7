use crate::cli::parser::Commands;
use crate::core::calculator::summary::summarize;
use crate::db::store::EventStore;
use crate::errors::AppResult;
use crate::export::get_headers;
use crate::models::{Event, EventFilter, Summary};
use crate::ui::messages::{header, warning};
use crate::utils::date::parse_optional_date;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, store: &dyn EventStore) -> AppResult<()> {
    if let Commands::Events { ip, date } = cmd {
        let filter = EventFilter::new(ip.clone(), parse_optional_date(date.as_deref())?);
        let events = store.fetch_events(&filter)?;

        if events.is_empty() {
            warning("No events match the selected filters.");
            return Ok(());
        }

        header("Detailed Program Data");
        print!("{}", render_events(&events));
        println!();
        print_summary(&summarize(&events));
    }
    Ok(())
}

fn render_events(events: &[Event]) -> String {
    let mut table = Table::new(&get_headers());
    for ev in events {
        table.add_row(vec![
            ev.source_id.clone(),
            ev.script_path.clone(),
            ev.start_str(),
            ev.end_str(),
            ev.duration().to_string(),
        ]);
    }
    table.render()
}

fn print_summary(summary: &Summary) {
    println!(
        "Total Scripts: {} | Completed: {} | Running: {}",
        summary.total, summary.completed, summary.running
    );
}
