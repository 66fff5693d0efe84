//! Display all departures
//!
//! Usage: railtimes display --db <path>

use clap::Args;
use std::path::PathBuf;

use super::{default_db_path, open_store};
use crate::table;

#[derive(Debug, Args)]
pub struct DisplayArgs {
    /// The database file name
    #[arg(long, default_value_os_t = default_db_path())]
    pub db: PathBuf,
}

/// Execute display
pub fn execute(args: DisplayArgs) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store(&args.db)?;
    let rows = store.list_all()?;

    table::render(&mut std::io::stdout(), &rows)?;
    Ok(())
}
