//! Page persistence sinks
//!
//! A sink durably writes exactly one page's payload under a run-unique
//! key and reports cumulative progress. Two interchangeable variants sit
//! behind [`PageSink`]: local filesystem and S3 object storage, both
//! expressed through the `object_store` crate and selected by the
//! destination URL scheme.

mod store;


pub use store::{page_key, Destination, StoreSink};

use crate::error::Result;
use async_trait::async_trait;
use bytes::Bytes;

/// Persistence target for fetched pages
///
/// The driver hands each page over exactly once, in strictly increasing
/// page order. A sink failure is fatal to the whole run; implementations
/// must not retry internally.
#[async_trait]
pub trait PageSink: Send + Sync {
    /// Persist one page's payload and return cumulative results
    /// persisted so far (clamped to `total` on the final page)
    async fn persist(&self, page_index: u64, total: u64, payload: Bytes) -> Result<u64>;
}
