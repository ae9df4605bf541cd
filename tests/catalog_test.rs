//! Catalog source and loader tests
//!
//! Covers the HTTP catalog contract (mockito), the round-trip law for
//! loaded entries, and the loader's fixed-message failure handling.

use std::sync::Arc;

use mockito::Server;

use couchtui::catalog::{CatalogError, CatalogLoader, CatalogSource, FixedCatalog, HttpCatalog};
use couchtui::diag::MemorySink;
use couchtui::models::{messages, CatalogEntry, CatalogLoadState};

// =============================================================================
// Fixtures
// =============================================================================

fn catalog_body() -> &'static str {
    r#"{
        "items": [
            {
                "id": "bbb-hls",
                "title": "Big Buck Bunny (HLS)",
                "description": "Short animated film used as a demo stream.",
                "thumbnail": "https://i.imgur.com/8GVG6Zp.jpeg",
                "streamUrl": "https://test-streams.mux.dev/x36xhzz/x36xhzz.m3u8",
                "duration": 596
            },
            {
                "id": "sintel-hls",
                "title": "Sintel (HLS)",
                "description": "A girl searches for a baby dragon.",
                "thumbnail": "",
                "streamUrl": "https://bitdash-a.akamaihd.net/content/sintel/hls/playlist.m3u8",
                "duration": 888
            }
        ]
    }"#
}

fn entry(id: &str) -> CatalogEntry {
    CatalogEntry {
        id: id.into(),
        title: id.to_uppercase(),
        description: String::new(),
        thumbnail: String::new(),
        stream_url: format!("https://streams.example/{}.m3u8", id),
        duration: 60,
    }
}

// =============================================================================
// HTTP Source Tests
// =============================================================================

#[tokio::test]
async fn test_http_catalog_parses_and_preserves_order() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/catalog")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(catalog_body())
        .create_async()
        .await;

    let source = HttpCatalog::new(server.url());
    let entries = source.fetch().await.unwrap();

    mock.assert_async().await;

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].id, "bbb-hls");
    assert_eq!(entries[1].id, "sintel-hls");
    assert_eq!(entries[0].duration, 596);
    assert!(!entries[1].has_thumbnail());
}

#[tokio::test]
async fn test_http_catalog_empty_items_is_ok() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/catalog")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"items": []}"#)
        .create_async()
        .await;

    let source = HttpCatalog::new(server.url());
    assert_eq!(source.fetch().await.unwrap(), Vec::new());
}

#[tokio::test]
async fn test_http_catalog_missing_items_defaults_to_empty() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/catalog")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("{}")
        .create_async()
        .await;

    let source = HttpCatalog::new(server.url());
    assert_eq!(source.fetch().await.unwrap(), Vec::new());
}

#[tokio::test]
async fn test_http_catalog_404() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/catalog")
        .with_status(404)
        .create_async()
        .await;

    let source = HttpCatalog::new(server.url());
    let err = source.fetch().await.unwrap_err();
    assert!(matches!(err, CatalogError::NotFound));
}

#[tokio::test]
async fn test_http_catalog_server_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/catalog")
        .with_status(500)
        .create_async()
        .await;

    let source = HttpCatalog::new(server.url());
    let err = source.fetch().await.unwrap_err();
    assert!(matches!(err, CatalogError::ServerError(500)));
}

#[tokio::test]
async fn test_http_catalog_invalid_payload() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/catalog")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("not json at all")
        .create_async()
        .await;

    let source = HttpCatalog::new(server.url());
    let err = source.fetch().await.unwrap_err();
    assert!(matches!(err, CatalogError::InvalidPayload(_)));
}

#[tokio::test]
async fn test_concurrent_fetches_are_independent() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/catalog")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(catalog_body())
        .create_async()
        .await;

    let source = HttpCatalog::new(server.url());
    let fetches: Vec<_> = (0..4).map(|_| source.fetch()).collect();
    let results: Vec<_> = futures::future::join_all(fetches).await;

    for result in results {
        let entries = result.unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, "bbb-hls");
    }
}

// =============================================================================
// Loader over HTTP Tests
// =============================================================================

#[tokio::test]
async fn test_loader_round_trips_http_catalog() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/catalog")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(catalog_body())
        .create_async()
        .await;

    let mut loader = CatalogLoader::new(Arc::new(MemorySink::new()));
    loader.activate(HttpCatalog::new(server.url()));

    // Round-trip law: the loaded state equals the source sequence exactly
    let expected = HttpCatalog::new(server.url()).fetch().await.unwrap();
    assert_eq!(loader.settled().await, CatalogLoadState::Loaded(expected));
}

#[tokio::test]
async fn test_loader_failure_hides_raw_detail() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/catalog")
        .with_status(503)
        .create_async()
        .await;

    let sink = Arc::new(MemorySink::new());
    let mut loader = CatalogLoader::new(sink.clone());
    loader.activate(HttpCatalog::new(server.url()));

    let state = loader.settled().await;

    // Same fixed friendly message regardless of the rejection reason
    assert_eq!(
        state,
        CatalogLoadState::Failed(messages::CATALOG_FAILED.to_string())
    );

    // The raw detail ends up in the diagnostics sink
    let records = sink.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].0, "catalog fetch");
    assert!(records[0].1.contains("503"));
}

#[tokio::test]
async fn test_loader_failure_message_is_identical_across_causes() {
    // Unreachable host and HTTP 500 must produce the same friendly message
    let sink = Arc::new(MemorySink::new());
    let mut loader = CatalogLoader::new(sink.clone());

    loader.activate(HttpCatalog::new("http://127.0.0.1:1"));
    let unreachable = loader.settled().await;

    let mut server = Server::new_async().await;
    server
        .mock("GET", "/catalog")
        .with_status(500)
        .create_async()
        .await;
    loader.activate(HttpCatalog::new(server.url()));
    let server_error = loader.settled().await;

    assert_eq!(unreachable, server_error);
    assert_eq!(sink.records().len(), 2);
}

// =============================================================================
// Override Activation Tests
// =============================================================================

#[tokio::test]
async fn test_fixed_activation_supersedes_http_fetch() {
    // A slow real fetch loses to a later override activation
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/catalog")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(catalog_body())
        .create_async()
        .await;

    let mut loader = CatalogLoader::new(Arc::new(MemorySink::new()));
    loader.activate(HttpCatalog::new(server.url()));
    loader.activate_fixed(vec![entry("override")]);

    assert_eq!(
        loader.settled().await,
        CatalogLoadState::Loaded(vec![entry("override")])
    );

    // Give the superseded fetch time to resolve; it must be discarded
    tokio::time::sleep(std::time::Duration::from_millis(100)).await;
    assert_eq!(loader.poll(), None);
}

#[tokio::test]
async fn test_fixed_source_through_loader_round_trip() {
    let entries = vec![entry("a"), entry("b"), entry("c")];
    let mut loader = CatalogLoader::new(Arc::new(MemorySink::new()));
    loader.activate(FixedCatalog::new(entries.clone()));

    assert_eq!(loader.settled().await, CatalogLoadState::Loaded(entries));
}
