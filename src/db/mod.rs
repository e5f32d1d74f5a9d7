pub mod initialize;
pub mod pool;
pub mod queries;
pub mod store;

pub use pool::{DbPool, StoreConfig};
pub use store::{EventStore, SqliteStore};
