//! Tests for catalog request construction and live queries.

use appfinder_catalog::{CatalogClient, CatalogConfig, CatalogConfigBuilder, CatalogErrorKind};
use appfinder_core::AppId;
use appfinder_interface::CatalogSource;
use std::collections::HashMap;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Serve a single canned HTTP response on a local port, returning the base URL.
async fn serve_once(status: &'static str, body: String) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }

        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
    });

    format!("http://{}", addr)
}

fn client_for(base: &str) -> CatalogClient {
    let config = CatalogConfigBuilder::default()
        .search_url(format!("{base}/search"))
        .lookup_url(format!("{base}/lookup"))
        .timeout_secs(5u64)
        .build()
        .unwrap();
    CatalogClient::new(config).unwrap()
}

fn query_of(request: &reqwest::Request) -> HashMap<String, String> {
    request
        .url()
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

#[test]
fn test_search_request_parameters() -> Result<(), Box<dyn std::error::Error>> {
    let client = CatalogClient::new(CatalogConfig::default())?;
    let request = client.search_request("chess & checkers")?;

    assert_eq!(request.method(), reqwest::Method::GET);
    assert!(request.url().as_str().starts_with("https://itunes.apple.com/search?"));
    assert!(!request.url().as_str().contains(' '));

    let query = query_of(&request);
    assert_eq!(query["term"], "chess & checkers");
    assert_eq!(query["media"], "software");
    assert_eq!(query["limit"], "8");
    Ok(())
}

#[test]
fn test_lookup_request_parameters() -> Result<(), Box<dyn std::error::Error>> {
    let config = CatalogConfigBuilder::default()
        .lookup_url("http://127.0.0.1:9/lookup")
        .build()?;
    let client = CatalogClient::new(config)?;
    let request = client.lookup_request(AppId::new(284882215))?;

    assert_eq!(request.url().path(), "/lookup");

    let query = query_of(&request);
    assert_eq!(query["id"], "284882215");
    assert_eq!(query["media"], "software");
    assert_eq!(query["limit"], "1");
    Ok(())
}

#[tokio::test]
async fn test_unreachable_upstream_is_an_error() -> Result<(), Box<dyn std::error::Error>> {
    let config = CatalogConfigBuilder::default()
        .search_url("http://127.0.0.1:9/search")
        .timeout_secs(2u64)
        .build()?;
    let client = CatalogClient::new(config)?;

    assert!(client.search("chess").await.is_err());
    Ok(())
}

#[tokio::test]
async fn test_error_status_is_reported() {
    let base = serve_once("503 Service Unavailable", String::new()).await;

    let err = client_for(&base).search("chess").await.unwrap_err();
    assert_eq!(err.kind, CatalogErrorKind::Status(503));
}

#[tokio::test]
async fn test_search_keeps_first_eight_in_upstream_order() {
    let results: Vec<String> = (1..=12)
        .map(|i| format!(r#"{{"trackId": {}, "trackName": "Chess {}"}}"#, 100 + i, i))
        .collect();
    let body = format!(r#"{{"resultCount": 12, "results": [{}]}}"#, results.join(","));
    let base = serve_once("200 OK", body).await;

    let records = client_for(&base).search("chess").await.unwrap();

    let ids: Vec<i64> = records.iter().map(|r| r.id().get()).collect();
    assert_eq!(ids, (101..=108).collect::<Vec<_>>());
    assert_eq!(records[0].name(), "Chess 1");
}

#[tokio::test]
async fn test_lookup_tolerates_null_fields() {
    let body = r#"{"resultCount": 1, "results": [{"trackId": 7, "trackName": "Go", "averageUserRating": null}]}"#;
    let base = serve_once("200 OK", body.to_string()).await;

    let records = client_for(&base).lookup(AppId::new(7)).await.unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(*records[0].average_rating(), 0.0);
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)] // Requires network access
async fn test_live_search_respects_cap() -> Result<(), Box<dyn std::error::Error>> {
    let client = CatalogClient::new(CatalogConfig::default())?;
    let records = client.search("chess").await?;

    assert!(!records.is_empty());
    assert!(records.len() <= 8);
    Ok(())
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)] // Requires network access
async fn test_live_lookup_unknown_id_is_empty() -> Result<(), Box<dyn std::error::Error>> {
    let client = CatalogClient::new(CatalogConfig::default())?;
    let records = client.lookup(AppId::new(1)).await?;

    assert!(records.is_empty());
    Ok(())
}
