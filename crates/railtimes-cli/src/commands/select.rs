//! Select departures by train number
//!
//! Usage: railtimes select --db <path> -N <number>

use clap::Args;
use std::path::PathBuf;

use super::{default_db_path, open_store};
use crate::table;

#[derive(Debug, Args)]
pub struct SelectArgs {
    /// The database file name
    #[arg(long, default_value_os_t = default_db_path())]
    pub db: PathBuf,

    /// The required train number
    #[arg(short = 'N', long)]
    pub number: i64,
}

/// Execute select
pub fn execute(args: SelectArgs) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store(&args.db)?;
    let rows = store.list_by_number(args.number)?;

    table::render(&mut std::io::stdout(), &rows)?;
    Ok(())
}
