//! CLI subcommands

pub mod add;
pub mod display;
pub mod select;

use railtimes_store::RouteStore;
use std::path::{Path, PathBuf};

/// Default database location: `<home>/routes.db`
pub fn default_db_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("routes.db")
}

/// Open the store at `db` and make sure the schema exists
///
/// The schema is ensured on every invocation, so a fresh database file is
/// usable without a separate init step.
pub fn open_store(db: &Path) -> railtimes_store::Result<RouteStore> {
    let store = RouteStore::open(db)?;
    store.ensure_schema()?;
    Ok(store)
}
