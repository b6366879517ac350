//! Convenient re-exports for common usage patterns.
//!
//! This module provides a single import to bring all commonly used types
//! into scope.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use nanoword::prelude::*;
//!
//! let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
//! let shares = ShareService::new(Some(store));
//! let data = shares.get("2024-01-01", "abc").await?;
//! ```

// Unified error handling
pub use crate::error::{Error, Result};

// KV store types
#[cfg(feature = "kv")]
pub use crate::kv::FjallStore;
pub use crate::kv::{KeyValueStore, KvError, MemoryStore};

// Share types
pub use crate::share::{
    CreatedShare, NewShare, ShareData, ShareError, ShareKey, ShareRecord, ShareService,
};

// Puzzle types
pub use crate::puzzle::{PuzzleData, PuzzleError, PuzzleService};
