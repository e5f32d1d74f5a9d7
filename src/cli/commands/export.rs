use crate::cli::parser::Commands;
use crate::db::store::EventStore;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::models::EventFilter;
use crate::utils::date::parse_optional_date;

pub fn handle(cmd: &Commands, store: &dyn EventStore) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        ip,
        date,
        force,
    } = cmd
    {
        let filter = EventFilter::new(ip.clone(), parse_optional_date(date.as_deref())?);
        ExportLogic::export(store, format, file, &filter, *force)?;
    }
    Ok(())
}
