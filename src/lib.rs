//! # eia-extract
//!
//! Paginated extractor for the EIA v2 daily fuel-type dataset.
//!
//! One run drains the full result set for a day through repeated page
//! requests (offset strides of 5000) and persists every page verbatim to
//! a local directory or an S3 bucket, with a bounded retry budget for
//! transient server errors.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use eia_extract::config::Settings;
//! use eia_extract::extract::{default_client, Extractor, ExtractorConfig};
//! use eia_extract::sink::{Destination, StoreSink};
//!
//! #[tokio::main]
//! async fn main() -> eia_extract::Result<()> {
//!     let settings = Settings::from_env()?;
//!     let sink = StoreSink::new(Destination::parse("data")?, "session", 5000);
//!     let extractor = Extractor::new(
//!         default_client(&settings.api_key),
//!         ExtractorConfig::default(),
//!     );
//!     let summary = extractor.run(&sink).await?;
//!     println!("{} pages", summary.pages);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────┐
//! │              Pagination Driver (extract)              │
//! │  offset 0, 5000, 10000, … until response.total        │
//! │  5xx: bounded retry, fixed wait   4xx/other: fatal    │
//! └───────────────────────┬───────────────────────────────┘
//!                         │ one call per page
//! ┌───────────────────────┴───────────────────────────────┐
//! │                  Page Sink (sink)                     │
//! │  {session_timestamp}_{page_index}.json                │
//! │  local directory  |  s3://bucket  (object_store)      │
//! └───────────────────────────────────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

/// Error types
pub mod error;

/// Run settings and fixed constants
pub mod config;

/// Single-shot HTTP client
pub mod http;

/// Offset pagination arithmetic
pub mod pagination;

/// The pagination driver
pub mod extract;

/// Page persistence sinks
pub mod sink;

/// Session timestamp, directories, and logging
pub mod session;

/// Command-line interface
pub mod cli;

pub use error::{Error, Result};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
