//! Integration tests for the nanoword HTTP API.
//!
//! These tests use axum-test to make requests against the router without
//! starting a real server.

#![cfg(feature = "server")]
#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{FailStore, TestApp};
use nanoword::kv::KeyValueStore;
use serde_json::{Value, json};

// =============================================================================
// Health Check Tests
// =============================================================================

#[tokio::test]
async fn test_health_check() -> anyhow::Result<()> {
    let app = TestApp::without_store()?;

    let response = app.server.get("/health").await;

    response.assert_status_ok();
    response.assert_text("ok");

    Ok(())
}

// =============================================================================
// Share Lookup Tests
// =============================================================================

#[tokio::test]
async fn test_share_fallback_when_store_unconfigured() -> anyhow::Result<()> {
    let app = TestApp::without_store()?;

    let response = app.server.get("/api/v1/share/2024-01-01/xyz").await;
    response.assert_status_ok();

    let body: Value = response.json();
    let record = &body["shareData"];
    assert_eq!(record["date"], "2024-01-01");
    assert_eq!(record["time"], "01:23.456");
    assert_eq!(record["hints"], 1);
    assert_eq!(record["isRevealed"], false);
    assert!(record["createdAt"].as_str().is_some());

    Ok(())
}

#[tokio::test]
async fn test_share_returns_stored_record_unmodified() -> anyhow::Result<()> {
    let (app, store) = TestApp::with_memory_store()?;
    let stored = json!({
        "date": "2024-01-01",
        "time": "00:45.120",
        "hints": 0,
        "isRevealed": true,
        "createdAt": "2024-01-01T00:00:00.000Z"
    });
    store.put("share-2024-01-01-xyz", &stored).await?;

    let response = app.server.get("/api/v1/share/2024-01-01/xyz").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["shareData"], stored);

    Ok(())
}

#[tokio::test]
async fn test_share_not_found() -> anyhow::Result<()> {
    let (app, _store) = TestApp::with_memory_store()?;

    let response = app.server.get("/api/v1/share/2024-01-01/xyz").await;
    response.assert_status(StatusCode::NOT_FOUND);

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "SHARE_NOT_FOUND");
    assert_eq!(body["error"]["message"], "Share not found");

    Ok(())
}

#[tokio::test]
async fn test_share_store_failure_is_internal() -> anyhow::Result<()> {
    let app = TestApp::with_store(Some(Arc::new(FailStore)))?;

    let response = app.server.get("/api/v1/share/2024-01-01/xyz").await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = response.json();
    assert_eq!(body["error"]["message"], "Error loading share");
    // The underlying cause must not leak to the client.
    assert!(!response.text().contains("simulated store outage"));

    Ok(())
}

// =============================================================================
// Share Write Tests
// =============================================================================

#[tokio::test]
async fn test_create_then_fetch_share() -> anyhow::Result<()> {
    let (app, _store) = TestApp::with_memory_store()?;

    let response = app
        .server
        .post("/api/v1/share")
        .json(&json!({
            "date": "2024-03-05",
            "time": "02:10.004",
            "hints": 2,
            "isRevealed": false
        }))
        .await;
    response.assert_status(StatusCode::CREATED);

    let body: Value = response.json();
    let share_id = body["shareId"].as_str().unwrap().to_string();
    assert_eq!(body["shareData"]["date"], "2024-03-05");
    assert_eq!(body["shareData"]["time"], "02:10.004");

    let response = app
        .server
        .get(&format!("/api/v1/share/2024-03-05/{share_id}"))
        .await;
    response.assert_status_ok();

    let fetched: Value = response.json();
    assert_eq!(fetched["shareData"], body["shareData"]);

    Ok(())
}

#[tokio::test]
async fn test_create_share_without_store_is_unavailable() -> anyhow::Result<()> {
    let app = TestApp::without_store()?;

    let response = app
        .server
        .post("/api/v1/share")
        .json(&json!({
            "date": "2024-03-05",
            "time": "02:10.004",
            "hints": 2,
            "isRevealed": false
        }))
        .await;
    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "STORE_UNCONFIGURED");

    Ok(())
}

// =============================================================================
// Puzzle Tests
// =============================================================================

#[tokio::test]
async fn test_puzzle_fallback_when_store_unconfigured() -> anyhow::Result<()> {
    let app = TestApp::without_store()?;

    let response = app.server.get("/api/v1/puzzle/2024-01-01").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["puzzleData"]["date"], "2024-01-01");
    assert!(body["puzzleData"]["rows"].is_array());

    Ok(())
}

#[tokio::test]
async fn test_puzzle_put_then_get() -> anyhow::Result<()> {
    let (app, _store) = TestApp::with_memory_store()?;
    let puzzle = json!({
        "date": "2024-01-01",
        "size": 5,
        "rows": ["HEART", "EMBER", "ABUSE", "RESIN", "TREND"]
    });

    let response = app
        .server
        .put("/api/v1/puzzle/2024-01-01")
        .json(&puzzle)
        .await;
    response.assert_status(StatusCode::NO_CONTENT);

    let response = app.server.get("/api/v1/puzzle/2024-01-01").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["puzzleData"], puzzle);

    Ok(())
}

#[tokio::test]
async fn test_puzzle_not_found() -> anyhow::Result<()> {
    let (app, _store) = TestApp::with_memory_store()?;

    let response = app.server.get("/api/v1/puzzle/2024-01-01").await;
    response.assert_status(StatusCode::NOT_FOUND);

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "PUZZLE_NOT_FOUND");
    assert_eq!(body["error"]["message"], "Puzzle not found");

    Ok(())
}

#[tokio::test]
async fn test_puzzle_store_failure_is_internal() -> anyhow::Result<()> {
    let app = TestApp::with_store(Some(Arc::new(FailStore)))?;

    let response = app.server.get("/api/v1/puzzle/2024-01-01").await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = response.json();
    assert_eq!(body["error"]["message"], "Error loading puzzle");

    Ok(())
}
