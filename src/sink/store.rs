//! Object-store backed sink (S3 or local filesystem)

use super::PageSink;
use crate::error::{Error, Result};
use crate::pagination::records_persisted;
use async_trait::async_trait;
use bytes::Bytes;
use object_store::aws::AmazonS3Builder;
use object_store::local::LocalFileSystem;
use object_store::path::Path as ObjectPath;
use object_store::ObjectStore;
use std::sync::Arc;
use tracing::{error, info};

/// Object key for one page: `{session_timestamp}_{page_index}.json`
pub fn page_key(session: &str, page_index: u64) -> String {
    format!("{session}_{page_index}.json")
}

/// Storage destination parsed from a URL
///
/// Supported formats:
/// - `s3://bucket/prefix/` - AWS S3 (credentials from the environment)
/// - `/local/path/` or `./path/` - local filesystem, created on demand
#[derive(Debug, Clone)]
pub struct Destination {
    /// The object store implementation
    store: Arc<dyn ObjectStore>,
    /// Base path prefix within the bucket
    prefix: String,
    /// Original URL scheme for logging
    scheme: String,
}

impl Destination {
    /// Parse a destination URL and create the appropriate object store
    pub fn parse(url: &str) -> Result<Self> {
        if url.starts_with("s3://") {
            Self::parse_s3(url)
        } else {
            Self::parse_local(url)
        }
    }

    /// Parse an S3 URL
    fn parse_s3(url: &str) -> Result<Self> {
        let without_scheme = url
            .strip_prefix("s3://")
            .ok_or_else(|| Error::config(format!("Invalid s3 URL: {url}")))?;

        let (bucket, prefix) = match without_scheme.find('/') {
            Some(idx) => (
                &without_scheme[..idx],
                without_scheme[idx + 1..].to_string(),
            ),
            None => (without_scheme, String::new()),
        };

        if bucket.is_empty() {
            return Err(Error::config(format!("Missing bucket name in {url}")));
        }

        let store = AmazonS3Builder::from_env()
            .with_bucket_name(bucket)
            .build()
            .map_err(|e| Error::config(format!("Failed to create s3 client: {e}")))?;

        Ok(Self {
            store: Arc::new(store),
            prefix,
            scheme: "s3".to_string(),
        })
    }

    /// Parse a local filesystem path
    fn parse_local(path: &str) -> Result<Self> {
        let path = path.strip_prefix("file://").unwrap_or(path);

        // Create directory if it doesn't exist
        std::fs::create_dir_all(path)
            .map_err(|e| Error::config(format!("Failed to create directory {path}: {e}")))?;

        let store = LocalFileSystem::new_with_prefix(path)
            .map_err(|e| Error::config(format!("Failed to create local store: {e}")))?;

        Ok(Self {
            store: Arc::new(store),
            prefix: String::new(),
            scheme: "file".to_string(),
        })
    }

    /// Check if this is a cloud destination (not local)
    pub fn is_cloud(&self) -> bool {
        self.scheme != "file"
    }

    /// Get the scheme (s3, file)
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Write bytes under a filename in the destination
    ///
    /// Returns the full path for logging.
    pub async fn write(&self, filename: &str, data: Bytes) -> Result<String> {
        let path = if self.prefix.is_empty() {
            ObjectPath::from(filename)
        } else {
            ObjectPath::from(format!("{}/{filename}", self.prefix.trim_end_matches('/')))
        };

        self.store.put(&path, data.into()).await?;

        Ok(format!("{}://{path}", self.scheme))
    }
}

/// Sink writing each page to an object-store destination
pub struct StoreSink {
    destination: Destination,
    session: String,
    page_size: u64,
}

impl StoreSink {
    /// Create a sink for one run session
    pub fn new(destination: Destination, session: impl Into<String>, page_size: u64) -> Self {
        Self {
            destination,
            session: session.into(),
            page_size,
        }
    }

    /// The destination this sink writes to
    pub fn destination(&self) -> &Destination {
        &self.destination
    }
}

#[async_trait]
impl PageSink for StoreSink {
    async fn persist(&self, page_index: u64, total: u64, payload: Bytes) -> Result<u64> {
        let key = page_key(&self.session, page_index);
        let persisted = records_persisted(page_index, self.page_size, total);

        match self.destination.write(&key, payload).await {
            Ok(path) => {
                info!("Download {page_index} complete, {persisted} of {total} results downloaded");
                info!("Wrote {path}");
                Ok(persisted)
            }
            Err(e) => {
                error!("Failed to write page {page_index} to {}: {e}", self.destination.scheme());
                Err(e)
            }
        }
    }
}
