//! In-memory store for tests and ephemeral runs.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use serde_json::Value;

use super::error::KvError;
use super::store::KeyValueStore;

/// Process-local [`KeyValueStore`] holding values in a `HashMap`.
///
/// Nothing survives a restart. Useful for tests and for exercising callers
/// without a data directory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, Value>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, KvError> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    async fn put(&self, key: &str, value: &Value) -> Result<(), KvError> {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_string(), value.clone());
        Ok(())
    }
}
