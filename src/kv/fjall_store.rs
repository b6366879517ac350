//! Persistent JSON store backed by fjall.

use std::path::Path;

use async_trait::async_trait;
use fjall::{Keyspace, KeyspaceCreateOptions, PersistMode};
use serde_json::Value;

use crate::logging::debug;

use super::error::KvError;
use super::store::KeyValueStore;

/// Metadata keyspace key holding the store format version.
const META_CONFIG_KEY: &str = "config";

/// Keyspace holding the game data.
const DATA_KEYSPACE: &str = "data";

/// Current store version.
const STORE_VERSION: u32 = 1;

/// JSON key-value store backed by fjall.
pub struct FjallStore {
    db: fjall::Database,
    data: Keyspace,
}

impl std::fmt::Debug for FjallStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FjallStore").finish_non_exhaustive()
    }
}

impl FjallStore {
    /// Open an existing store at the given path.
    pub fn open(path: &Path) -> Result<Self, KvError> {
        if !path.exists() {
            return Err(KvError::NotInitialized(path.display().to_string()));
        }

        let db = fjall::Database::builder(path).open()?;
        let meta = db.keyspace("_meta", KeyspaceCreateOptions::default)?;

        // Verify store version
        if let Some(config) = meta.get(META_CONFIG_KEY)? {
            let version = u32::from_le_bytes(
                config
                    .as_ref()
                    .try_into()
                    .map_err(|_| KvError::InvalidFormat("Invalid config format".to_string()))?,
            );
            if version != STORE_VERSION {
                return Err(KvError::InvalidFormat(format!(
                    "Store version mismatch: expected {}, got {}",
                    STORE_VERSION, version
                )));
            }
        } else {
            return Err(KvError::NotInitialized(path.display().to_string()));
        }

        let data = db.keyspace(DATA_KEYSPACE, KeyspaceCreateOptions::default)?;

        debug!(path = %path.display(), "opened store");

        Ok(Self { db, data })
    }

    /// Initialize a new store at the given path.
    pub fn init(path: &Path) -> Result<Self, KvError> {
        let db = fjall::Database::builder(path).open()?;
        let meta = db.keyspace("_meta", KeyspaceCreateOptions::default)?;

        // Write store version
        meta.insert(META_CONFIG_KEY, STORE_VERSION.to_le_bytes())?;

        let data = db.keyspace(DATA_KEYSPACE, KeyspaceCreateOptions::default)?;
        db.persist(PersistMode::SyncAll)?;

        debug!(path = %path.display(), "initialized store");

        Ok(Self { db, data })
    }

    /// Open the store at `path`, initializing it on first use.
    pub fn open_or_init(path: &Path) -> Result<Self, KvError> {
        if path.exists() {
            Self::open(path)
        } else {
            Self::init(path)
        }
    }
}

#[async_trait]
impl KeyValueStore for FjallStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, KvError> {
        let Some(bytes) = self.data.get(key)? else {
            return Ok(None);
        };
        Ok(Some(serde_json::from_slice(bytes.as_ref())?))
    }

    async fn put(&self, key: &str, value: &Value) -> Result<(), KvError> {
        let bytes = serde_json::to_vec(value)?;
        self.data.insert(key, bytes)?;
        self.db.persist(PersistMode::SyncAll)?;
        Ok(())
    }
}
