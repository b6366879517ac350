//! Share lookup and write path.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

use crate::kv::KeyValueStore;
use crate::logging::{error, info, warn};

use super::key::ShareKey;
use super::record::{NewShare, ShareRecord};

/// Failures surfaced by the share operations.
///
/// Store-level causes are logged and collapsed into [`Internal`]; callers
/// never see the underlying error text.
///
/// [`Internal`]: ShareError::Internal
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareError {
    /// No record exists for the requested `(date, share id)` pair.
    #[error("Share not found")]
    NotFound,

    /// The store failed during lookup or write.
    #[error("Error loading share")]
    Internal,

    /// Writing is impossible because no store is configured.
    #[error("Sharing is not available")]
    Unavailable,
}

impl ShareError {
    /// HTTP-style status code for this failure.
    pub fn status(&self) -> u16 {
        match self {
            ShareError::NotFound => 404,
            ShareError::Internal => 500,
            ShareError::Unavailable => 503,
        }
    }
}

/// A successfully resolved share.
///
/// `Stored` carries the persisted JSON unmodified; `Fallback` is synthetic
/// data substituted when no store is configured. Both serialize to the bare
/// record on the wire, but callers and tests can tell them apart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ShareData {
    /// The record exactly as persisted.
    Stored(Value),
    /// Synthetic data for storeless environments.
    Fallback(ShareRecord),
}

impl ShareData {
    /// Whether this is synthetic fallback data rather than a stored record.
    pub fn is_fallback(&self) -> bool {
        matches!(self, ShareData::Fallback(_))
    }
}

/// A share accepted by the write path.
#[derive(Debug, Clone)]
pub struct CreatedShare {
    /// Generated identifier the share can be fetched under.
    pub share_id: String,
    /// The record as stored.
    pub record: ShareRecord,
}

/// Resolves `(date, share id)` pairs to share records.
///
/// Holds an optional store capability; absence is a supported degraded
/// mode, not an error. The service keeps no state of its own, so clones
/// share the underlying store and calls may run concurrently.
#[derive(Clone)]
pub struct ShareService {
    store: Option<Arc<dyn KeyValueStore>>,
}

impl ShareService {
    /// Create a service over an optional store capability.
    pub fn new(store: Option<Arc<dyn KeyValueStore>>) -> Self {
        Self { store }
    }

    /// Look up the share stored for `(date, share_id)`.
    ///
    /// Without a configured store this returns [`ShareData::Fallback`] for
    /// any input. With a store, exactly one of stored data,
    /// [`ShareError::NotFound`] or [`ShareError::Internal`] results.
    /// Lookups are never retried.
    pub async fn get(&self, date: &str, share_id: &str) -> Result<ShareData, ShareError> {
        let Some(store) = &self.store else {
            warn!(date = date, "no store configured, serving fallback share");
            return Ok(ShareData::Fallback(ShareRecord::fallback(date)));
        };

        let key = ShareKey::new(date, share_id).storage_key();
        match store.get(&key).await {
            Ok(Some(value)) => Ok(ShareData::Stored(value)),
            Ok(None) => Err(ShareError::NotFound),
            Err(err) => {
                error!(key = key.as_str(), error = %err, "share lookup failed");
                Err(ShareError::Internal)
            }
        }
    }

    /// Store a new share under a generated id.
    pub async fn create(&self, new_share: NewShare) -> Result<CreatedShare, ShareError> {
        let Some(store) = &self.store else {
            warn!(date = new_share.date.as_str(), "no store configured, rejecting share write");
            return Err(ShareError::Unavailable);
        };

        let share_id = Uuid::new_v4().to_string();
        let record = new_share.into_record();
        let key = ShareKey::new(record.date.as_str(), share_id.as_str()).storage_key();

        let value = serde_json::to_value(&record).map_err(|_| ShareError::Internal)?;
        match store.put(&key, &value).await {
            Ok(()) => {
                info!(key = key.as_str(), "share stored");
                Ok(CreatedShare { share_id, record })
            }
            Err(err) => {
                error!(key = key.as_str(), error = %err, "share write failed");
                Err(ShareError::Internal)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use serde_json::json;

    use crate::kv::{KvError, MemoryStore};

    use super::*;

    struct FailStore;

    #[async_trait]
    impl KeyValueStore for FailStore {
        async fn get(&self, _key: &str) -> Result<Option<Value>, KvError> {
            Err(KvError::Io(std::io::Error::other("simulated store outage")))
        }

        async fn put(&self, _key: &str, _value: &Value) -> Result<(), KvError> {
            Err(KvError::Io(std::io::Error::other("simulated store outage")))
        }
    }

    #[tokio::test]
    async fn missing_store_returns_fallback() {
        let shares = ShareService::new(None);

        let data = shares.get("2024-01-01", "xyz").await.unwrap();

        assert!(data.is_fallback());
        let ShareData::Fallback(record) = data else {
            unreachable!();
        };
        assert_eq!(record.date, "2024-01-01");
        assert_eq!(record.time, "01:23.456");
        assert_eq!(record.hints, 1);
        assert!(!record.is_revealed);
    }

    #[tokio::test]
    async fn stored_value_is_passed_through_unmodified() {
        let store = Arc::new(MemoryStore::new());
        // Extra fields must survive: the lookup does not validate the shape.
        let stored = json!({
            "date": "2024-01-01",
            "time": "00:45.120",
            "hints": 0,
            "isRevealed": true,
            "createdAt": "2024-01-01T00:00:00.000Z",
            "clientVersion": "1.7.2",
        });
        store.put("share-2024-01-01-xyz", &stored).await.unwrap();

        let shares = ShareService::new(Some(store));
        let data = shares.get("2024-01-01", "xyz").await.unwrap();

        assert_eq!(data, ShareData::Stored(stored));
    }

    #[tokio::test]
    async fn missing_key_is_not_found() {
        let shares = ShareService::new(Some(Arc::new(MemoryStore::new())));

        let err = shares.get("2024-01-01", "xyz").await.unwrap_err();

        assert_eq!(err, ShareError::NotFound);
        assert_eq!(err.status(), 404);
        assert_eq!(err.to_string(), "Share not found");
    }

    #[tokio::test]
    async fn store_failure_is_reclassified_as_internal() {
        let shares = ShareService::new(Some(Arc::new(FailStore)));

        let err = shares.get("2024-01-01", "xyz").await.unwrap_err();

        assert_eq!(err, ShareError::Internal);
        assert_eq!(err.status(), 500);
        // The generic message, never the underlying cause.
        assert_eq!(err.to_string(), "Error loading share");
    }

    #[tokio::test]
    async fn create_stores_record_at_derived_key() {
        let store = Arc::new(MemoryStore::new());
        let shares = ShareService::new(Some(store.clone()));

        let created = shares
            .create(NewShare {
                date: "2024-03-05".to_string(),
                time: "02:10.004".to_string(),
                hints: 2,
                is_revealed: false,
            })
            .await
            .unwrap();

        let key = ShareKey::new("2024-03-05", created.share_id.as_str()).storage_key();
        let stored = store.get(&key).await.unwrap();
        assert_eq!(stored, Some(serde_json::to_value(&created.record).unwrap()));
    }

    #[tokio::test]
    async fn create_without_store_is_unavailable() {
        let shares = ShareService::new(None);

        let err = shares
            .create(NewShare {
                date: "2024-03-05".to_string(),
                time: "02:10.004".to_string(),
                hints: 2,
                is_revealed: false,
            })
            .await
            .unwrap_err();

        assert_eq!(err, ShareError::Unavailable);
        assert_eq!(err.status(), 503);
    }

    #[tokio::test]
    async fn create_failure_is_reclassified_as_internal() {
        let shares = ShareService::new(Some(Arc::new(FailStore)));

        let err = shares
            .create(NewShare {
                date: "2024-03-05".to_string(),
                time: "02:10.004".to_string(),
                hints: 2,
                is_revealed: false,
            })
            .await
            .unwrap_err();

        assert_eq!(err, ShareError::Internal);
    }
}
