use crate::db::store::EventStore;
use crate::errors::AppResult;
use crate::ui::messages::warning;

pub fn handle(store: &dyn EventStore) -> AppResult<()> {
    let sources = store.fetch_sources()?;

    if sources.is_empty() {
        warning("No sources recorded yet.");
        return Ok(());
    }

    for src in sources {
        println!("{src}");
    }
    Ok(())
}
