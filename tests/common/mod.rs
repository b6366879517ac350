//! Common test utilities and fixtures.
//!
//! This module provides the shared test harness and store doubles used
//! across the HTTP integration suite.

#![cfg(feature = "server")]

use std::sync::Arc;

use async_trait::async_trait;
use axum_test::TestServer;
use serde_json::Value;

use nanoword::kv::{KeyValueStore, KvError, MemoryStore};
use nanoword::server::{AppState, router};

/// Store double that fails every operation.
pub struct FailStore;

#[async_trait]
impl KeyValueStore for FailStore {
    async fn get(&self, _key: &str) -> Result<Option<Value>, KvError> {
        Err(KvError::Io(std::io::Error::other("simulated store outage")))
    }

    async fn put(&self, _key: &str, _value: &Value) -> Result<(), KvError> {
        Err(KvError::Io(std::io::Error::other("simulated store outage")))
    }
}

/// Test harness exposing the router through an axum-test server.
pub struct TestApp {
    pub server: TestServer,
}

impl TestApp {
    /// App with no configured store (fallback mode).
    pub fn without_store() -> anyhow::Result<Self> {
        Self::with_store(None)
    }

    /// App backed by a fresh in-memory store; returns the store for seeding.
    pub fn with_memory_store() -> anyhow::Result<(Self, Arc<MemoryStore>)> {
        let store = Arc::new(MemoryStore::new());
        let app = Self::with_store(Some(store.clone() as Arc<dyn KeyValueStore>))?;
        Ok((app, store))
    }

    /// App over an arbitrary store capability.
    pub fn with_store(store: Option<Arc<dyn KeyValueStore>>) -> anyhow::Result<Self> {
        let state = AppState::with_store(store);
        let server = TestServer::new(router(state))?;
        Ok(Self { server })
    }
}
