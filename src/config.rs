//! Run settings loaded from the environment
//!
//! Credentials are never hardcoded: the API key comes from `EIA_API_KEY`
//! and the S3 credential pair from the standard `AWS_ACCESS_KEY_ID` /
//! `AWS_SECRET_ACCESS_KEY` variables, which `object_store` reads itself
//! when the S3 sink is built. A `.env` file in the working directory is
//! honored via dotenvy.

use crate::error::{Error, Result};
use chrono::{Duration, Local};
use std::time::Duration as StdDuration;

/// Fixed EIA v2 endpoint for daily fuel-type data
pub const DEFAULT_ENDPOINT: &str =
    "https://api.eia.gov/v2/electricity/rto/daily-fuel-type-data/data/";

/// Results per page; one request is limited to this many results
pub const PAGE_SIZE: u64 = 5000;

/// Maximum consecutive server-error retries tolerated for the whole run
pub const RETRY_BUDGET: u32 = 3;

/// Fixed wait between server-error retries
pub const RETRY_DELAY: StdDuration = StdDuration::from_secs(10);

/// Environment variable holding the EIA API key
pub const API_KEY_VAR: &str = "EIA_API_KEY";

/// Environment variable holding the default S3 bucket name
pub const BUCKET_VAR: &str = "S3_BUCKET_NAME";

/// Settings resolved from the environment at startup
#[derive(Debug, Clone)]
pub struct Settings {
    /// EIA API key, sent as a query parameter on every request
    pub api_key: String,
    /// Default S3 bucket when no output destination is given on the CLI
    pub bucket: Option<String>,
}

impl Settings {
    /// Load settings from the environment, honoring a `.env` file
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let api_key =
            std::env::var(API_KEY_VAR).map_err(|_| Error::missing_env(API_KEY_VAR))?;
        if api_key.trim().is_empty() {
            return Err(Error::config(format!("{API_KEY_VAR} is empty")));
        }

        let bucket = std::env::var(BUCKET_VAR)
            .ok()
            .filter(|b| !b.trim().is_empty());

        Ok(Self { api_key, bucket })
    }

    /// Default output destination: the configured S3 bucket if any,
    /// otherwise the local `data` directory
    pub fn default_destination(&self) -> String {
        match &self.bucket {
            Some(bucket) => format!("s3://{bucket}"),
            None => crate::session::DATA_DIR.to_string(),
        }
    }
}

/// Yesterday's date as an ISO string, the default download filter
pub fn yesterday() -> String {
    (Local::now() - Duration::days(1)).format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_destination_prefers_bucket() {
        let settings = Settings {
            api_key: "k".to_string(),
            bucket: Some("grid-archive".to_string()),
        };
        assert_eq!(settings.default_destination(), "s3://grid-archive");
    }

    #[test]
    fn test_default_destination_falls_back_to_data_dir() {
        let settings = Settings {
            api_key: "k".to_string(),
            bucket: None,
        };
        assert_eq!(settings.default_destination(), "data");
    }

    #[test]
    fn test_yesterday_is_iso_date() {
        let date = yesterday();
        assert_eq!(date.len(), 10);
        assert_eq!(date.as_bytes()[4], b'-');
        assert_eq!(date.as_bytes()[7], b'-');
    }
}
