//! Backend library for the nanoword daily word-puzzle game.
//!
//! nanoword publishes one puzzle per calendar date and lets players share
//! their results. Both concerns are backed by a string-keyed JSON store;
//! when no store is configured (e.g. local development), the services
//! degrade to clearly-marked fallback data instead of failing.
//!
//! # Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use nanoword::prelude::*;
//!
//! let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
//! let shares = ShareService::new(Some(store));
//!
//! match shares.get("2024-01-01", "abc").await? {
//!     ShareData::Stored(value) => println!("{value}"),
//!     ShareData::Fallback(record) => println!("degraded: {record:?}"),
//! }
//! ```
//!
//! # Modules
//!
//! - [`kv`] - Key-value store abstraction and backends
//! - [`puzzle`] - Daily puzzle delivery
//! - [`share`] - Share records: lookup contract, fallback mode, write path
//! - [`server`] - HTTP API server (requires `server` feature)
//!
//! # Feature Flags
//!
//! - `kv` - Enable the fjall-backed persistent store (enabled by default)
//! - `logging` - Enable library-level tracing (enabled by default; consumers
//!   provide their own subscriber)
//! - `server` - Enable the HTTP API server
//! - `full` - Enable all features

pub mod kv;
mod logging;
pub mod prelude;
pub mod puzzle;
#[cfg(feature = "server")]
pub mod server;
pub mod share;

mod error;

// Re-export the unified error type
pub use error::{Error, Result};

// Re-export KV types at crate root for convenience
#[cfg(feature = "kv")]
pub use kv::FjallStore;
pub use kv::{KeyValueStore, KvError, MemoryStore};

// Re-export the share and puzzle services at crate root for convenience
pub use puzzle::{PuzzleData, PuzzleError, PuzzleService};
pub use share::{
    CreatedShare, NewShare, ShareData, ShareError, ShareKey, ShareRecord, ShareService,
};
