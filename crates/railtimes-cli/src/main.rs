//! railtimes CLI
//!
//! Command-line interface for recording and listing train departures

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod table;

#[derive(Debug, Parser)]
#[command(name = "railtimes", version)]
#[command(about = "Record train departures in a local database", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Add a new departure
    Add(commands::add::AddArgs),
    /// Display all departures
    Display(commands::display::DisplayArgs),
    /// Select departures by train number
    Select(commands::select::SelectArgs),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Add(args) => commands::add::execute(args),
        Commands::Display(args) => commands::display::execute(args),
        Commands::Select(args) => commands::select::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
