//! Pagination driver
//!
//! Drives a bounded sequence of page fetches against the paginated
//! endpoint until the server-reported total is covered or the retry
//! budget is exhausted, delegating persistence of each page to a
//! [`PageSink`].
//!
//! Retry policy lives here, not in the HTTP client: a server error
//! (status >= 500) consumes one unit of a run-wide budget and retries
//! the same offset after a fixed wait. A client error (4xx), transport
//! failure, or malformed body aborts the run immediately.


use crate::config::{DEFAULT_ENDPOINT, PAGE_SIZE, RETRY_BUDGET, RETRY_DELAY};
use crate::error::{Error, Result};
use crate::http::{HttpClient, RequestConfig};
use crate::pagination::PageWindow;
use crate::sink::PageSink;
use bytes::Bytes;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, warn};

/// Configuration for one extraction run
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Dataset frequency selector
    pub frequency: String,
    /// Value field requested via `data[0]`
    pub value_field: String,
    /// Inclusive start date filter (ISO date)
    pub start: Option<String>,
    /// Inclusive end date filter (ISO date)
    pub end: Option<String>,
    /// Respondent facet filter (e.g. a region code)
    pub respondent: Option<String>,
    /// Results per page
    pub page_size: u64,
    /// Run-wide server-error retry budget
    pub retry_budget: u32,
    /// Fixed wait between retries
    pub retry_delay: Duration,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            frequency: "daily".to_string(),
            value_field: "value".to_string(),
            start: None,
            end: None,
            respondent: None,
            page_size: PAGE_SIZE,
            retry_budget: RETRY_BUDGET,
            retry_delay: RETRY_DELAY,
        }
    }
}

/// One successfully fetched page
struct FetchedPage {
    /// Authoritative total result count from `response.total`
    total: u64,
    /// Exact response body, persisted verbatim
    body: Bytes,
}

/// Summary of a completed run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Pages fetched and persisted
    pub pages: u64,
    /// Total results reported by the server
    pub total_records: u64,
}

/// The pagination driver
pub struct Extractor {
    client: HttpClient,
    config: ExtractorConfig,
}

impl Extractor {
    /// Create a driver over a prepared HTTP client
    ///
    /// The client is expected to carry the endpoint base URL and the
    /// `api_key` default query parameter.
    pub fn new(client: HttpClient, config: ExtractorConfig) -> Self {
        Self { client, config }
    }

    /// Drain the full result set into the sink
    ///
    /// Issues page requests with strictly increasing offsets until the
    /// total discovered from the first response is covered. Exactly one
    /// sink invocation per fetched page, in page order.
    pub async fn run(&self, sink: &dyn PageSink) -> Result<RunSummary> {
        let mut window = PageWindow::new(self.config.page_size);
        let mut retries = 0u32;

        while window.has_more() {
            match self.fetch_page(window.offset).await {
                Ok(page) => {
                    window.record_total(page.total);
                    sink.persist(window.page_index, page.total, page.body).await?;
                    window.advance();
                }
                Err(e) if e.is_retryable() => {
                    error!(
                        "HTTP error during download {}: {e}",
                        window.page_index
                    );
                    retries += 1;
                    if retries >= self.config.retry_budget {
                        error!("Retry budget exhausted after {retries} attempts");
                        return Err(Error::RetriesExhausted {
                            budget: self.config.retry_budget,
                        });
                    }
                    warn!(
                        "Retrying offset {} in {:?} (attempt {}/{})",
                        window.offset, self.config.retry_delay, retries, self.config.retry_budget
                    );
                    tokio::time::sleep(self.config.retry_delay).await;
                }
                Err(e) => {
                    error!(
                        "Non-retryable error during download {}: {e}",
                        window.page_index
                    );
                    return Err(e);
                }
            }
        }

        Ok(RunSummary {
            pages: window.page_index,
            total_records: window.total().unwrap_or(0),
        })
    }

    /// Probe the endpoint with a bare request and report the HTTP status
    ///
    /// Connectivity check only; issues a single page-size-free request
    /// at offset 0 and never touches a sink.
    pub async fn check(&self) -> Result<u16> {
        let request = RequestConfig::new()
            .query("frequency", &self.config.frequency)
            .query("data[0]", &self.config.value_field)
            .query("offset", "0");

        match self.client.get("", request).await {
            Ok(response) => Ok(response.status().as_u16()),
            Err(Error::HttpStatus { status, .. }) => Ok(status),
            Err(e) => Err(e),
        }
    }

    /// Fetch one page at the given offset
    async fn fetch_page(&self, offset: u64) -> Result<FetchedPage> {
        debug!("Requesting page at offset {offset}");

        let text = self.client.get_text("", self.page_request(offset)).await?;
        let body: Value = serde_json::from_str(&text)?;
        let total = extract_total(body)?;

        Ok(FetchedPage {
            total,
            body: Bytes::from(text),
        })
    }

    /// Build the query parameters for one page request
    fn page_request(&self, offset: u64) -> RequestConfig {
        let mut request = RequestConfig::new()
            .query("frequency", &self.config.frequency)
            .query("data[0]", &self.config.value_field)
            .query("offset", offset.to_string())
            .query("length", self.config.page_size.to_string());

        if let Some(start) = &self.config.start {
            request = request.query("start", start);
        }
        if let Some(end) = &self.config.end {
            request = request.query("end", end);
        }
        if let Some(respondent) = &self.config.respondent {
            request = request.query("facets[respondent][]", respondent);
        }

        request
    }
}

/// Build an HTTP client for the fixed EIA endpoint
pub fn default_client(api_key: &str) -> HttpClient {
    HttpClient::with_config(
        crate::http::HttpClientConfig::builder()
            .base_url(DEFAULT_ENDPOINT)
            .query("api_key", api_key)
            .build(),
    )
}

/// Envelope around a page response; only the total is read, the body
/// itself is persisted verbatim
#[derive(Debug, Deserialize)]
struct PageEnvelope {
    response: PageMeta,
}

#[derive(Debug, Deserialize)]
struct PageMeta {
    total: TotalCount,
}

/// The API reports `response.total` as a JSON string; a plain number is
/// accepted too
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TotalCount {
    Count(u64),
    Text(String),
}

impl TotalCount {
    fn value(&self) -> Result<u64> {
        match self {
            Self::Count(n) => Ok(*n),
            Self::Text(s) => s.parse().map_err(|_| {
                Error::response_shape(format!("response.total is not a count: {s:?}"))
            }),
        }
    }
}

/// Extract the authoritative `response.total` count
fn extract_total(body: Value) -> Result<u64> {
    let envelope: PageEnvelope = serde_json::from_value(body)
        .map_err(|e| Error::response_shape(format!("missing response.total: {e}")))?;
    envelope.response.total.value()
}
