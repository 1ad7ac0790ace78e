//! Integration tests using a mock HTTP server
//!
//! Tests the full flow: paginated HTTP requests against a mock endpoint,
//! pages persisted through the object-store sink into a temp directory.

use bytes::Bytes;
use eia_extract::error::Error;
use eia_extract::extract::{Extractor, ExtractorConfig, RunSummary};
use eia_extract::http::{HttpClient, HttpClientConfig};
use eia_extract::sink::{page_key, Destination, PageSink, StoreSink};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SESSION: &str = "2025-08-29_03-00-00";

fn extractor(server: &MockServer) -> Extractor {
    let client = HttpClient::with_config(
        HttpClientConfig::builder()
            .base_url(format!("{}/v2/data", server.uri()))
            .query("api_key", "test-key")
            .build(),
    );
    Extractor::new(
        client,
        ExtractorConfig {
            retry_delay: Duration::from_millis(10),
            ..Default::default()
        },
    )
}

fn file_sink(dir: &tempfile::TempDir) -> StoreSink {
    let dest = Destination::parse(dir.path().to_str().unwrap()).unwrap();
    StoreSink::new(dest, SESSION, 5000)
}

fn page(offset: u64, total: u64) -> serde_json::Value {
    let rows = 5000.min(total.saturating_sub(offset));
    json!({
        "response": {
            "total": total.to_string(),
            "data": (0..rows).map(|i| json!({
                "period": "2025-08-28",
                "respondent": "NY",
                "value": offset + i
            })).collect::<Vec<_>>()
        }
    })
}

async fn mount_pages(server: &MockServer, total: u64) {
    let mut offset = 0;
    loop {
        Mock::given(method("GET"))
            .and(path("/v2/data"))
            .and(query_param("api_key", "test-key"))
            .and(query_param("offset", offset.to_string()))
            .and(query_param("length", "5000"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page(offset, total)))
            .expect(1)
            .mount(server)
            .await;
        offset += 5000;
        if offset >= total {
            break;
        }
    }
}

#[tokio::test]
async fn test_full_drain_writes_one_file_per_page() {
    let server = MockServer::start().await;
    mount_pages(&server, 12000).await;

    let dir = tempfile::tempdir().unwrap();
    let sink = file_sink(&dir);

    let summary = extractor(&server).run(&sink).await.unwrap();
    assert_eq!(
        summary,
        RunSummary {
            pages: 3,
            total_records: 12000
        }
    );

    for index in 0..3 {
        let file = dir.path().join(page_key(SESSION, index));
        assert!(file.is_file(), "missing {}", file.display());

        // Round-trip: the written file deserializes back to the page body
        let written: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&file).unwrap()).unwrap();
        assert_eq!(written, page(index * 5000, 12000));
    }

    // No extra pages
    assert!(!dir.path().join(page_key(SESSION, 3)).is_file());
}

#[tokio::test]
async fn test_transient_server_error_does_not_lose_the_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/data"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2/data"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(0, 100)))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let summary = extractor(&server).run(&file_sink(&dir)).await.unwrap();

    assert_eq!(summary.pages, 1);
    assert!(dir.path().join(page_key(SESSION, 0)).is_file());
}

#[tokio::test]
async fn test_persistent_server_errors_exhaust_the_budget() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/data"))
        .respond_with(ResponseTemplate::new(502))
        .expect(3)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let err = extractor(&server).run(&file_sink(&dir)).await.unwrap_err();

    assert!(matches!(err, Error::RetriesExhausted { budget: 3 }));
    assert!(!dir.path().join(page_key(SESSION, 0)).is_file());
}

#[tokio::test]
async fn test_client_error_halts_without_output() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/data"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such dataset"))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let err = extractor(&server).run(&file_sink(&dir)).await.unwrap_err();

    assert!(matches!(err, Error::HttpStatus { status: 404, .. }));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_sink_reports_clamped_progress_sequence() {
    let dir = tempfile::tempdir().unwrap();
    let sink = file_sink(&dir);

    let body = Bytes::from_static(b"{}");
    let mut reported = Vec::new();
    for index in 0..3 {
        reported.push(sink.persist(index, 12000, body.clone()).await.unwrap());
    }

    assert_eq!(reported, vec![5000, 10000, 12000]);
}

#[tokio::test]
async fn test_check_probe_reports_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/data"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(0, 1)))
        .mount(&server)
        .await;

    let status = extractor(&server).check().await.unwrap();
    assert_eq!(status, 200);
}
