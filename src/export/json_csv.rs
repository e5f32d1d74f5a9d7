use crate::errors::AppResult;
use crate::export::model::{EventExport, events_to_export, get_headers};
use crate::models::event::Event;
use std::io::Write;

/// Write events as CSV. The header row is always written, even with no rows.
pub fn write_csv<W: Write>(events: &[Event], writer: W) -> AppResult<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(get_headers())?;
    for item in events_to_export(events) {
        wtr.serialize(&item)?;
    }

    wtr.flush()?;
    Ok(())
}

/// CSV as an in-memory buffer, for the download route.
pub fn csv_bytes(events: &[Event]) -> AppResult<Vec<u8>> {
    let mut buf = Vec::new();
    write_csv(events, &mut buf)?;
    Ok(buf)
}

/// Write events as pretty-printed JSON.
pub fn write_json<W: Write>(events: &[Event], mut writer: W) -> AppResult<()> {
    let items: Vec<EventExport> = events_to_export(events);
    serde_json::to_writer_pretty(&mut writer, &items)?;
    writer.write_all(b"\n")?;
    Ok(())
}
