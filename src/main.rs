//! eia-extract CLI
//!
//! Parses arguments, installs session logging, and performs the single
//! point of process exit on failure.

use clap::Parser;
use eia_extract::cli::{Cli, Runner};
use eia_extract::session;
use tracing::error;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let timestamp = session::session_timestamp();
    if let Err(e) = session::init_logging(&timestamp, cli.verbose) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let runner = Runner::new(cli, timestamp);
    if let Err(e) = runner.run().await {
        error!("Terminating: {e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
