//! Run session: timestamp, directories, and logging
//!
//! A session timestamp generated at process start namespaces the log file
//! and every output object for the run. Logging goes to the console and,
//! mirrored, to `logs/{session_timestamp}.log`; the subscriber is built
//! once here and installed for the lifetime of the run.

use crate::error::{Error, Result};
use chrono::Local;
use std::fs::File;
use std::sync::Arc;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Default local output directory
pub const DATA_DIR: &str = "data";

/// Directory for per-session log files
pub const LOG_DIR: &str = "logs";

/// Run-unique timestamp used for log and output object names
pub fn session_timestamp() -> String {
    Local::now().format("%Y-%m-%d_%H-%M-%S").to_string()
}

/// Path of the log file for one session
pub fn log_path(timestamp: &str) -> String {
    format!("{LOG_DIR}/{timestamp}.log")
}

/// Install console + per-session file logging
///
/// Creates the log directory on demand. `RUST_LOG` still takes
/// precedence over the verbose flag.
pub fn init_logging(timestamp: &str, verbose: bool) -> Result<()> {
    std::fs::create_dir_all(LOG_DIR)?;
    let file = File::create(log_path(timestamp))?;

    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Arc::new(file)),
        )
        .try_init()
        .map_err(|e| Error::config(format!("Failed to initialize logging: {e}")))?;

    Ok(())
}
