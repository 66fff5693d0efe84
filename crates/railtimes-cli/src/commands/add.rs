//! Add departure command
//!
//! Usage: railtimes add --db <path> -n <number> -d <destination> -t <time>

use clap::Args;
use std::path::PathBuf;
use tracing::debug;

use super::{default_db_path, open_store};

#[derive(Debug, Args)]
pub struct AddArgs {
    /// The database file name
    #[arg(long, default_value_os_t = default_db_path())]
    pub db: PathBuf,

    /// The train number
    #[arg(short = 'n', long)]
    pub number: i64,

    /// Destination
    #[arg(short = 'd', long)]
    pub destination: String,

    /// Departure time
    #[arg(short = 't', long)]
    pub time: String,
}

/// Execute add
pub fn execute(args: AddArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_store(&args.db)?;

    // The supplied train number is display data only; destination numbers
    // are assigned by the store.
    debug!(number = args.number, "train number supplied on the command line");

    store.add_departure(&args.destination, &args.time)?;
    Ok(())
}
