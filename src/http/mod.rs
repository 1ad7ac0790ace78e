//! HTTP client for the upstream API
//!
//! A thin GET client over reqwest: base URL joining, default query
//! parameters, timeouts, and classification of non-2xx responses into
//! typed errors. Deliberately single-shot — the pagination driver owns
//! the retry policy, so a failed request surfaces immediately.

mod client;


pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig};
