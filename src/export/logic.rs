use crate::db::store::EventStore;
use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{write_csv, write_json};
use crate::export::{ExportFormat, notify_export_success};
use crate::models::event::EventFilter;
use crate::ui::messages::{info, warning};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Fetch the filtered events and write them to `file`.
    /// Returns the number of exported events.
    pub fn export(
        store: &dyn EventStore,
        format: &ExportFormat,
        file: &str,
        filter: &EventFilter,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);
        ensure_writable(path, force)?;

        let events = store.fetch_events(filter)?;
        if events.is_empty() {
            warning("No events match the selected filters; writing headers only.");
        }

        info(format!(
            "Exporting {} event(s) to {}: {}",
            events.len(),
            format.as_str().to_uppercase(),
            path.display()
        ));

        let out = BufWriter::new(File::create(path)?);
        match format {
            ExportFormat::Csv => write_csv(&events, out)?,
            ExportFormat::Json => write_json(&events, out)?,
        }

        notify_export_success(&format.as_str().to_uppercase(), path);
        Ok(events.len())
    }
}
