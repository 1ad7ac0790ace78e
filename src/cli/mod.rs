//! CLI module
//!
//! # Commands
//!
//! - `run` - Download every page of the dataset into a sink
//! - `check` - Probe the API endpoint and report the HTTP status

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;
