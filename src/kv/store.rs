//! Store capability trait.

use async_trait::async_trait;
use serde_json::Value;

use super::error::KvError;

/// String-keyed JSON persistence capability.
///
/// Lookup and write are asynchronous since a backend may sit behind disk or
/// network I/O. `Ok(None)` from [`get`](KeyValueStore::get) means the key
/// has no stored value, which is distinct from a store failure.
#[async_trait]
pub trait KeyValueStore: Send + Sync + 'static {
    /// Retrieves the JSON value stored at `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<Value>, KvError>;

    /// Stores `value` at `key`, replacing any previous value.
    async fn put(&self, key: &str, value: &Value) -> Result<(), KvError>;
}
